//! Data types produced by the catalog client.
//!
//! Field names follow the JSON the SurVerse frontend consumes, so a few keys
//! (`has_lyrics`, `token_url`) keep their upstream snake_case spelling.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A playable song, normalized from any of the catalog's response shapes.
///
/// Built by [`normalize_song`](crate::normalize::normalize_song); every
/// optional field is `None` when the upstream item lacks it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    /// Permalink token (last path segment of `perma_url`), or the upstream
    /// numeric id when no permalink is present. Either form is accepted by
    /// [`SaavnClient::song`](crate::SaavnClient::song).
    pub id: String,
    /// Track title, HTML-entity decoded.
    pub title: String,
    /// Primary artists joined with `", "`, or the free-text `music` credit.
    pub artist: String,
    pub album: Option<String>,
    /// Cover image URL (`150x150` unless [`ImageQuality::High`] was requested).
    pub image: Option<String>,
    /// Decrypted stream URL. `None` if the item had no ciphertext or it could
    /// not be decrypted.
    pub url: Option<String>,
    /// Duration as sent upstream (a numeric string in most shapes).
    pub duration: Option<Value>,
    pub has_lyrics: Option<Value>,
    pub copyright: Option<String>,
    pub year: Option<Value>,
    /// Structured primary artist names, when the item carries them.
    pub primary_artists: Option<String>,
    /// Permalink the `id` token was taken from.
    pub token_url: Option<String>,
}

/// Cover art resolution.
///
/// The catalog serves the same artwork at several sizes; the size is a
/// literal token inside the URL.
///
/// | Variant    | Token     |
/// |------------|-----------|
/// | `Standard` | `150x150` |
/// | `High`     | `500x500` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageQuality {
    #[default]
    Standard,
    High,
}

impl ImageQuality {
    /// Size token embedded in image URLs.
    pub fn token(self) -> &'static str {
        match self {
            Self::Standard => "150x150",
            Self::High => "500x500",
        }
    }

    /// Rewrite an image URL from the standard size to this quality.
    pub fn apply(self, url: &str) -> String {
        match self {
            Self::Standard => url.to_owned(),
            Self::High => url.replace(Self::Standard.token(), self.token()),
        }
    }
}

/// How a song identifier is looked up upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    /// Numeric catalog id, sent as `pids` to `song.getDetails`.
    Numeric,
    /// Permalink token, sent as `token` to `webapi.get`.
    Token,
}

impl LookupKind {
    /// Pick the lookup for a caller-supplied identifier. Any non-empty run
    /// of ASCII digits is numeric, whatever its length.
    pub fn for_id(id: &str) -> Self {
        if !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()) {
            Self::Numeric
        } else {
            Self::Token
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_id_uses_pid_lookup() {
        assert_eq!(LookupKind::for_id("12345"), LookupKind::Numeric);
        assert_eq!(
            LookupKind::for_id("123456789012345678901234"),
            LookupKind::Numeric
        );
    }

    #[test]
    fn slug_uses_token_lookup() {
        assert_eq!(LookupKind::for_id("imagine-dragons-bones"), LookupKind::Token);
        assert_eq!(LookupKind::for_id("OQMaey5hbVc"), LookupKind::Token);
        assert_eq!(LookupKind::for_id("-12"), LookupKind::Token);
        assert_eq!(LookupKind::for_id("+12"), LookupKind::Token);
        assert_eq!(LookupKind::for_id(""), LookupKind::Token);
    }

    #[test]
    fn high_quality_rewrites_size_token() {
        let url = "https://c.saavncdn.com/191/Aashiqui-2-Hindi-2013-150x150.jpg";
        assert_eq!(
            ImageQuality::High.apply(url),
            "https://c.saavncdn.com/191/Aashiqui-2-Hindi-2013-500x500.jpg"
        );
        assert_eq!(ImageQuality::Standard.apply(url), url);
    }

    #[test]
    fn song_serializes_missing_fields_as_null() {
        let song = Song {
            id: "abc".into(),
            title: "t".into(),
            artist: String::new(),
            album: None,
            image: None,
            url: None,
            duration: None,
            has_lyrics: None,
            copyright: None,
            year: None,
            primary_artists: None,
            token_url: None,
        };
        let v = serde_json::to_value(&song).unwrap();
        assert!(v["url"].is_null());
        assert!(v.get("has_lyrics").is_some());
    }
}
