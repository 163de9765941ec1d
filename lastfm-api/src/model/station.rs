use serde::Serialize;
use xmltree::Element;

use crate::entity::{CapabilityRegistry, Located, Named};
use crate::error::Result;
use crate::xml;

/// A radio station, as returned by `radio.tune` and `radio.search`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Station {
    name: String,
    url: Option<String>,
    station_type: Option<String>,
    supports_discovery: bool,
}

crate::entity!(Station: [Named, Located]);

impl Station {
    /// Build a station from a `<station>` element
    pub fn from_element(element: &Element, registry: &CapabilityRegistry) -> Result<Self> {
        let mut station = registry.composite::<Self>()?.parse(element)?;
        station.station_type = xml::child_text(element, "type");
        station.supports_discovery = xml::child_flag(element, "supportsdiscovery");
        Ok(station)
    }

    /// Station kind such as `artist`, `tag` or `user`
    pub fn station_type(&self) -> Option<&str> {
        self.station_type.as_deref()
    }

    /// Whether discovery mode can be switched on for this station
    pub fn supports_discovery(&self) -> bool {
        self.supports_discovery
    }
}

impl Named for Station {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

impl Located for Station {
    fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    fn set_url(&mut self, url: Option<String>) {
        self.url = url;
    }
}
