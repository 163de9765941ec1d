//! `radio.*` methods

use xmltree::Element;

use crate::entity::CapabilityRegistry;
use crate::model::{Station, XspfPlaylist};
use crate::params::Language;
use crate::query::{Auth, Query, SESSION_KEY_PARAMETER};
use crate::xml;

/// Optional arguments of [`get_playlist`]
///
/// Every `None` field is left out of the request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaylistOptions {
    /// Request content with discovery mode switched on
    pub discovery: Option<bool>,
    /// Whether the user scrobbles during this radio session
    pub rtp: Option<bool>,
    /// Stream bitrate in kbps (64 or 128)
    pub bitrate: Option<u32>,
    /// Include purchase/download links when available
    pub buylinks: Option<bool>,
    /// Stream rate multiplier (1.0 or 2.0)
    pub speed_multiplier: Option<f32>,
}

/// Tune in to a radio station
///
/// `station` is a radio URL such as `lastfm://artist/Cher/similarartists`;
/// `lang` selects the language of the returned station name.
pub fn tune(station: &str, lang: Option<Language>, session_key: &str) -> Query<Station> {
    Query::post("radio.tune", |element: &Element| {
        Station::from_element(element, CapabilityRegistry::standard())
    })
    .with_auth(Auth::SignedSession)
    .require("station")
    .param("station", station)
    .param("lang", lang)
    .param(SESSION_KEY_PARAMETER, session_key)
}

/// Fetch the next chunk of the tuned station as an XSPF playlist
pub fn get_playlist(session_key: &str, options: PlaylistOptions) -> Query<XspfPlaylist> {
    Query::get("radio.getPlaylist", |element: &Element| {
        Ok(XspfPlaylist::from_element(element)?)
    })
    .with_auth(Auth::SignedSession)
    .param(SESSION_KEY_PARAMETER, session_key)
    .param("discovery", options.discovery)
    .param("rtp", options.rtp)
    .param("bitrate", options.bitrate)
    .param("buylinks", options.buylinks)
    .param("speed_multiplier", options.speed_multiplier)
}

/// Look up stations whose name matches `name`
pub fn search(name: &str) -> Query<Vec<Station>> {
    Query::get("radio.search", |element: &Element| {
        let registry = CapabilityRegistry::standard();
        match element.get_child("stationmatches") {
            Some(matches) => xml::children_named(matches, "station")
                .map(|station| Station::from_element(station, registry))
                .collect(),
            None => Ok(Vec::new()),
        }
    })
    .require("name")
    .param("name", name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_client::HttpMethod;

    #[test]
    fn test_tune_wiring() {
        let query = tune("lastfm://artist/Cher", Some("EN".parse().unwrap()), "session");

        assert_eq!(query.method(), "radio.tune");
        assert_eq!(query.http_method(), HttpMethod::Post);
        assert_eq!(query.auth(), Auth::SignedSession);
        assert_eq!(query.parameters().get("station"), Some("lastfm://artist/Cher"));
        assert_eq!(query.parameters().get("lang"), Some("en"));
        assert_eq!(query.parameters().get("sk"), Some("session"));
    }

    #[test]
    fn test_tune_without_language() {
        let query = tune("lastfm://tag/disco", None, "session");
        assert!(!query.parameters().contains("lang"));
    }

    #[test]
    fn test_get_playlist_omits_absent_options() {
        let query = get_playlist("session", PlaylistOptions::default());

        assert_eq!(query.method(), "radio.getPlaylist");
        assert_eq!(query.http_method(), HttpMethod::Get);
        let names: Vec<&str> = query.parameters().sorted_pairs().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["sk"]);
    }

    #[test]
    fn test_get_playlist_with_every_option() {
        let query = get_playlist(
            "session",
            PlaylistOptions {
                discovery: Some(true),
                rtp: Some(false),
                bitrate: Some(128),
                buylinks: Some(true),
                speed_multiplier: Some(2.0),
            },
        );

        let params = query.parameters();
        assert_eq!(params.get("discovery"), Some("true"));
        assert_eq!(params.get("rtp"), Some("false"));
        assert_eq!(params.get("bitrate"), Some("128"));
        assert_eq!(params.get("buylinks"), Some("true"));
        assert_eq!(params.get("speed_multiplier"), Some("2.0"));
    }

    #[test]
    fn test_search_is_public() {
        let query = search("Cher");
        assert_eq!(query.auth(), Auth::None);
        assert_eq!(query.parameters().get("name"), Some("Cher"));
    }
}
