//! Response models
//!
//! [`Station`], [`Venue`] and [`Shout`] are capability-composed entities;
//! [`XspfPlaylist`] is a plain document model.

mod playlist;
mod shout;
mod station;
mod venue;

pub use playlist::{XspfPlaylist, XspfTrack};
pub use shout::Shout;
pub use station::Station;
pub use venue::Venue;

use crate::entity::CapabilityRegistry;
use crate::error::ConfigurationError;

/// Check that `registry` can build every built-in entity type
pub fn ensure_supported(registry: &CapabilityRegistry) -> Result<(), ConfigurationError> {
    registry.ensure_supports::<Station>()?;
    registry.ensure_supports::<Venue>()?;
    registry.ensure_supports::<Shout>()?;
    Ok(())
}
