//! Response envelope handling
//!
//! Every response is wrapped in `<lfm status="ok|failed">`. A failed response
//! carries `<error code="N">message</error>`; a successful one carries the
//! method-specific content element.

use xmltree::Element;

use crate::error::{Error, ParseError, Result};
use crate::xml;

pub const ROOT_ELEMENT: &str = "lfm";

/// Status reported by the envelope root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Failed,
}

impl Status {
    fn from_attribute(value: &str) -> std::result::Result<Self, ParseError> {
        match value {
            "ok" => Ok(Status::Ok),
            "failed" => Ok(Status::Failed),
            other => Err(ParseError::UnknownStatus(other.to_string())),
        }
    }
}

/// Parse a raw response and return its content element
///
/// A successful response without any content element (methods that only
/// acknowledge) yields the bare root element.
pub fn parse(raw: &str) -> Result<Element> {
    let root = xml::parse_document(raw)?;

    if root.name != ROOT_ELEMENT {
        return Err(ParseError::UnexpectedRoot(root.name).into());
    }

    let status = root
        .attributes
        .get("status")
        .ok_or(ParseError::MissingStatus)
        .and_then(|value| Status::from_attribute(value))?;

    match status {
        Status::Failed => Err(service_error(&root)?),
        Status::Ok => match xml::first_child_element(&root) {
            Some(content) => Ok(content.clone()),
            None => Ok(root),
        },
    }
}

fn service_error(root: &Element) -> std::result::Result<Error, ParseError> {
    let error = root
        .get_child("error")
        .ok_or(ParseError::MissingErrorElement)?;

    let raw_code = error
        .attributes
        .get("code")
        .ok_or_else(|| ParseError::InvalidErrorCode(String::new()))?;
    let code = raw_code
        .trim()
        .parse::<u32>()
        .map_err(|_| ParseError::InvalidErrorCode(raw_code.clone()))?;

    let message = xml::text(error).unwrap_or_default();
    tracing::warn!(code, message = %message, "web service reported a failure");

    Ok(Error::Api { code, message })
}
