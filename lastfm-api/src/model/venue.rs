use serde::Serialize;
use url::Url;
use xmltree::Element;

use crate::entity::{CapabilityRegistry, HasWebsite, Located, Named};
use crate::error::Result;

/// A concert venue
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Venue {
    name: String,
    url: Option<String>,
    website: Option<Url>,
}

crate::entity!(Venue: [Named, Located, Website]);

impl Venue {
    pub fn from_element(element: &Element, registry: &CapabilityRegistry) -> Result<Self> {
        Ok(registry.composite::<Self>()?.parse(element)?)
    }
}

impl Named for Venue {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

impl Located for Venue {
    fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    fn set_url(&mut self, url: Option<String>) {
        self.url = url;
    }
}

impl HasWebsite for Venue {
    fn website(&self) -> Option<&Url> {
        self.website.as_ref()
    }

    fn set_website(&mut self, website: Option<Url>) {
        self.website = website;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_venue_composes_three_capabilities() {
        let element = Element::parse(
            r#"<venue>
                <id>8778225</id>
                <name>Paradiso</name>
                <url>http://www.last.fm/venue/8778225+Paradiso</url>
                <website>http://www.paradiso.nl/</website>
            </venue>"#
                .as_bytes(),
        )
        .unwrap();

        let venue = Venue::from_element(&element, CapabilityRegistry::standard()).unwrap();
        assert_eq!(venue.name(), "Paradiso");
        assert_eq!(venue.url(), Some("http://www.last.fm/venue/8778225+Paradiso"));
        assert_eq!(venue.website().map(Url::as_str), Some("http://www.paradiso.nl/"));
    }

    #[test]
    fn test_venue_with_empty_website() {
        let element =
            Element::parse("<venue><name>Melkweg</name><website></website></venue>".as_bytes())
                .unwrap();

        let venue = Venue::from_element(&element, CapabilityRegistry::standard()).unwrap();
        assert_eq!(venue.name(), "Melkweg");
        assert!(venue.website().is_none());
        assert!(venue.url().is_none());
    }
}
