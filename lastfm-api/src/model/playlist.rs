use serde::Serialize;
use xmltree::Element;

use crate::error::ParseError;
use crate::xml;

/// `rel` of the `<link>` carrying the playlist lifetime in seconds
const EXPIRY_REL: &str = "http://www.last.fm/expiry";

/// An XSPF playlist as served by `radio.getPlaylist`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct XspfPlaylist {
    pub title: Option<String>,
    pub creator: Option<String>,
    pub date: Option<String>,
    /// Seconds the playlist stays valid
    pub expiry_seconds: Option<u64>,
    pub tracks: Vec<XspfTrack>,
}

/// One `<track>` of an [`XspfPlaylist`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct XspfTrack {
    /// Stream location
    pub location: String,
    pub title: Option<String>,
    pub identifier: Option<String>,
    pub album: Option<String>,
    pub creator: Option<String>,
    pub duration_ms: Option<u64>,
    pub image: Option<String>,
    /// Token required when scrobbling radio plays
    pub trackauth: Option<String>,
    pub artist_page: Option<String>,
    pub album_page: Option<String>,
    pub track_page: Option<String>,
}

impl XspfPlaylist {
    /// Build a playlist from a `<playlist>` element
    pub fn from_element(element: &Element) -> Result<Self, ParseError> {
        let expiry_seconds = xml::children_named(element, "link")
            .find(|link| link.attributes.get("rel").map(String::as_str) == Some(EXPIRY_REL))
            .and_then(xml::text)
            .map(|value| {
                value
                    .parse::<u64>()
                    .map_err(|e| ParseError::invalid_value("link", &value, e))
            })
            .transpose()?;

        let tracks = match element.get_child("trackList") {
            Some(list) => xml::children_named(list, "track")
                .map(XspfTrack::from_element)
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };

        Ok(Self {
            title: xml::child_text(element, "title"),
            creator: xml::child_text(element, "creator"),
            date: xml::child_text(element, "date"),
            expiry_seconds,
            tracks,
        })
    }
}

impl XspfTrack {
    /// Build a track from a `<track>` element; `<location>` is required
    pub fn from_element(element: &Element) -> Result<Self, ParseError> {
        let extension = element.get_child("extension");
        let extension_text = |name: &str| extension.and_then(|ext| xml::child_text(ext, name));

        Ok(Self {
            location: xml::required_child_text(element, "location")?,
            title: xml::child_text(element, "title"),
            identifier: xml::child_text(element, "identifier"),
            album: xml::child_text(element, "album"),
            creator: xml::child_text(element, "creator"),
            duration_ms: xml::child_parsed(element, "duration")?,
            image: xml::child_text(element, "image"),
            trackauth: extension_text("trackauth"),
            artist_page: extension_text("artistpage"),
            album_page: extension_text("albumpage"),
            track_page: extension_text("trackpage"),
        })
    }
}
