use url::Url;
use xmltree::Element;

use super::{Capability, Facet};
use crate::error::ParseError;
use crate::xml;

/// Populates the facet of an entity owned by one capability
///
/// Parsers are stateless and idempotent: applying one twice to the same
/// element and entity leaves the entity unchanged. A missing optional
/// element resets the field to its default instead of failing.
pub trait EntityParser: Send + Sync {
    /// The capability whose facet this parser fills
    fn capability(&self) -> Capability;

    fn parse(&self, element: &Element, facet: Facet<'_>) -> Result<(), ParseError>;
}

fn mismatch(expected: Capability, found: Capability) -> ParseError {
    ParseError::WrongFacet { expected, found }
}

/// Reads the required `<name>` element
#[derive(Debug, Clone, Copy, Default)]
pub struct NameParser;

impl EntityParser for NameParser {
    fn capability(&self) -> Capability {
        Capability::Named
    }

    fn parse(&self, element: &Element, facet: Facet<'_>) -> Result<(), ParseError> {
        let found = facet.capability();
        let Facet::Named(entity) = facet else {
            return Err(mismatch(Capability::Named, found));
        };
        entity.set_name(xml::required_child_text(element, "name")?);
        Ok(())
    }
}

/// Reads the optional `<url>` element
#[derive(Debug, Clone, Copy, Default)]
pub struct LocatedParser;

impl EntityParser for LocatedParser {
    fn capability(&self) -> Capability {
        Capability::Located
    }

    fn parse(&self, element: &Element, facet: Facet<'_>) -> Result<(), ParseError> {
        let found = facet.capability();
        let Facet::Located(entity) = facet else {
            return Err(mismatch(Capability::Located, found));
        };
        entity.set_url(xml::child_text(element, "url"));
        Ok(())
    }
}

/// Reads the optional `<website>` element as an absolute URL
#[derive(Debug, Clone, Copy, Default)]
pub struct WebsiteParser;

impl EntityParser for WebsiteParser {
    fn capability(&self) -> Capability {
        Capability::Website
    }

    fn parse(&self, element: &Element, facet: Facet<'_>) -> Result<(), ParseError> {
        let found = facet.capability();
        let Facet::Website(entity) = facet else {
            return Err(mismatch(Capability::Website, found));
        };
        entity.set_website(xml::child_parsed::<Url>(element, "website")?);
        Ok(())
    }
}

/// Reads the optional `<body>` element
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyParser;

impl EntityParser for BodyParser {
    fn capability(&self) -> Capability {
        Capability::Body
    }

    fn parse(&self, element: &Element, facet: Facet<'_>) -> Result<(), ParseError> {
        let found = facet.capability();
        let Facet::Body(entity) = facet else {
            return Err(mismatch(Capability::Body, found));
        };
        entity.set_body(xml::child_text(element, "body"));
        Ok(())
    }
}
