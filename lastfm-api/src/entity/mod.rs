//! Capability-composed entities
//!
//! An entity is a plain value holder that implements any subset of the
//! capability traits in this module ([`Named`], [`Located`], [`HasWebsite`],
//! [`HasBody`]). Each capability is populated by exactly one parser taken from
//! a [`CapabilityRegistry`], so one response element can fill several
//! unrelated facets of the same entity without a parser per entity type.
//!
//! Entity types declare their capabilities once with the [`entity!`] macro:
//!
//! ```rust,ignore
//! #[derive(Debug, Default)]
//! struct Venue { /* ... */ }
//!
//! impl Named for Venue { /* ... */ }
//! impl HasWebsite for Venue { /* ... */ }
//!
//! lastfm_api::entity!(Venue: [Named, Website]);
//! ```
//!
//! Parsers run in declaration order. When two parsers write the same field
//! the one declared last wins.
//!
//! [`entity!`]: crate::entity!

mod parsers;
mod registry;

pub use parsers::{BodyParser, EntityParser, LocatedParser, NameParser, WebsiteParser};
pub use registry::{CapabilityRegistry, CompositeEntityParser, RegistryBuilder};

use std::fmt;

use url::Url;

/// Identifies one capability an entity can declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Capability {
    /// A display name (`<name>`, required)
    Named,
    /// A service page or station URL (`<url>`)
    Located,
    /// An external website (`<website>`)
    Website,
    /// Free text content (`<body>`)
    Body,
}

impl Capability {
    /// Every known capability, in registry order
    pub const ALL: [Capability; 4] = [
        Capability::Named,
        Capability::Located,
        Capability::Website,
        Capability::Body,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Capability::Named => "named",
            Capability::Located => "located",
            Capability::Website => "website",
            Capability::Body => "body",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Entities with a display name
pub trait Named {
    fn name(&self) -> &str;
    fn set_name(&mut self, name: String);
}

/// Entities with a canonical URL on the service
pub trait Located {
    fn url(&self) -> Option<&str>;
    fn set_url(&mut self, url: Option<String>);
}

/// Entities linking to an external website
pub trait HasWebsite {
    fn website(&self) -> Option<&Url>;
    fn set_website(&mut self, website: Option<Url>);
}

/// Entities carrying free text
pub trait HasBody {
    fn body(&self) -> Option<&str>;
    fn set_body(&mut self, body: Option<String>);
}

/// Mutable view of the part of an entity owned by one capability
pub enum Facet<'a> {
    Named(&'a mut dyn Named),
    Located(&'a mut dyn Located),
    Website(&'a mut dyn HasWebsite),
    Body(&'a mut dyn HasBody),
}

impl Facet<'_> {
    pub fn capability(&self) -> Capability {
        match self {
            Facet::Named(_) => Capability::Named,
            Facet::Located(_) => Capability::Located,
            Facet::Website(_) => Capability::Website,
            Facet::Body(_) => Capability::Body,
        }
    }
}

impl fmt::Debug for Facet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Facet({})", self.capability())
    }
}

/// A concrete entity type with a statically declared capability list
///
/// Implement it with [`entity!`](crate::entity!) rather than by hand.
pub trait Entity: Default + Send + 'static {
    /// Type name used in error messages
    const NAME: &'static str;

    /// Declared capabilities, in the order their parsers are applied
    const CAPABILITIES: &'static [Capability];

    /// The facet for `capability`, or `None` if it is not declared
    fn facet(&mut self, capability: Capability) -> Option<Facet<'_>>;
}

/// Implement [`Entity`] for a type from its ordered capability list
///
/// Each listed capability must be a [`Capability`] variant whose trait the
/// type implements.
#[macro_export]
macro_rules! entity {
    ($entity:ty : [$($capability:ident),* $(,)?]) => {
        impl $crate::entity::Entity for $entity {
            const NAME: &'static str = stringify!($entity);

            const CAPABILITIES: &'static [$crate::entity::Capability] =
                &[$($crate::entity::Capability::$capability),*];

            fn facet(
                &mut self,
                capability: $crate::entity::Capability,
            ) -> Option<$crate::entity::Facet<'_>> {
                match capability {
                    $($crate::entity::Capability::$capability => {
                        Some($crate::entity::Facet::$capability(self))
                    })*
                    #[allow(unreachable_patterns)]
                    _ => None,
                }
            }
        }
    };
}
