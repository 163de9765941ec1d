//! Small helpers over `xmltree` elements shared by the envelope, the
//! capability parsers and the response models.

use std::str::FromStr;

use xmltree::Element;

use crate::error::ParseError;

/// Parse a raw document into its root element
pub fn parse_document(raw: &str) -> Result<Element, ParseError> {
    Element::parse(raw.as_bytes()).map_err(|e| ParseError::Malformed(e.to_string()))
}

/// Trimmed text of an element, `None` when it is empty
pub fn text(element: &Element) -> Option<String> {
    element
        .get_text()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

/// Trimmed text of the first child called `name`, `None` when absent or empty
pub fn child_text(element: &Element, name: &str) -> Option<String> {
    element.get_child(name).and_then(text)
}

/// Like [`child_text`], but a missing or empty child is an error
pub fn required_child_text(element: &Element, name: &str) -> Result<String, ParseError> {
    child_text(element, name).ok_or_else(|| ParseError::MissingElement(name.to_string()))
}

/// Parse the text of an optional child with `FromStr`
pub fn child_parsed<T>(element: &Element, name: &str) -> Result<Option<T>, ParseError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    child_text(element, name)
        .map(|value| {
            value
                .parse::<T>()
                .map_err(|e| ParseError::invalid_value(name, &value, e))
        })
        .transpose()
}

/// Interpret the usual `0`/`1` (or `true`/`false`) flags, absent means false
pub fn child_flag(element: &Element, name: &str) -> bool {
    child_text(element, name)
        .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Iterate over the element children called `name`
pub fn children_named<'a>(element: &'a Element, name: &'a str) -> impl Iterator<Item = &'a Element> {
    element
        .children
        .iter()
        .filter_map(|node| node.as_element())
        .filter(move |child| child.name == name)
}

/// The first element child, whatever its name
pub fn first_child_element(element: &Element) -> Option<&Element> {
    element.children.iter().find_map(|node| node.as_element())
}
