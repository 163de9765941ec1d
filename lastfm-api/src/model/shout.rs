use serde::Serialize;
use xmltree::Element;

use crate::entity::{CapabilityRegistry, HasBody};
use crate::error::Result;
use crate::xml;

/// A message left on a user, artist or event page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Shout {
    body: Option<String>,
    author: Option<String>,
    date: Option<String>,
}

crate::entity!(Shout: [Body]);

impl Shout {
    pub fn from_element(element: &Element, registry: &CapabilityRegistry) -> Result<Self> {
        let mut shout = registry.composite::<Self>()?.parse(element)?;
        shout.author = xml::child_text(element, "author");
        shout.date = xml::child_text(element, "date");
        Ok(shout)
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    /// Posting date exactly as the service formats it
    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }
}

impl HasBody for Shout {
    fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    fn set_body(&mut self, body: Option<String>) {
        self.body = body;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shout() {
        let element = Element::parse(
            r#"<shout>
                <body>See you at the show</body>
                <author>RJ</author>
                <date>Sat, 21 Mar 2009 21:38:02</date>
            </shout>"#
                .as_bytes(),
        )
        .unwrap();

        let shout = Shout::from_element(&element, CapabilityRegistry::standard()).unwrap();
        assert_eq!(shout.body(), Some("See you at the show"));
        assert_eq!(shout.author(), Some("RJ"));
        assert_eq!(shout.date(), Some("Sat, 21 Mar 2009 21:38:02"));
    }

    #[test]
    fn test_empty_shout_keeps_defaults() {
        let element = Element::parse("<shout/>".as_bytes()).unwrap();
        let shout = Shout::from_element(&element, CapabilityRegistry::standard()).unwrap();
        assert_eq!(shout, Shout::default());
    }
}
