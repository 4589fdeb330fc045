//! Catalog response normalization.
//!
//! The catalog answers the three lookups with three envelopes:
//!
//! ```json
//! { "results": [ {..song..}, ... ] }          // search.getResults
//! { "songs":   [ {..song..} ] }               // webapi.get (token lookup)
//! { "5WXAlMNt": {..song..} }                  // song.getDetails (pid lookup)
//! ```
//!
//! and the song items themselves come in two layouts: the v4 layout nests
//! most metadata under `more_info` (with `artistMap.primary_artists` as a
//! list of objects), the older layout keeps it flat with `primary_artists`
//! as a free-text string. Every field below resolves through a fallback
//! chain covering both.
//!
//! Nothing here panics on missing or mistyped fields: indexing a
//! [`serde_json::Value`] that is not an object yields `Null`, and `Null`
//! resolves to `None`/empty.

use serde_json::Value;

use crate::crypto::decrypt_media_url;
use crate::types::{ImageQuality, Song};

/// A catalog response envelope, classified by its top-level field.
#[derive(Debug, Clone, Copy)]
pub enum CatalogResponse<'a> {
    /// `{ "results": [...] }`
    Search(&'a [Value]),
    /// `{ "songs": [...] }`
    AltDetails(&'a [Value]),
    /// `{ "<id>": {...} }`
    Details(&'a Value),
    /// None of the above (error payloads, unexpected shapes).
    Unknown,
}

impl<'a> CatalogResponse<'a> {
    /// Classify `resp`. `requested_id` is the key a details response is
    /// expected to be keyed by; pass `None` for search responses.
    pub fn classify(resp: &'a Value, requested_id: Option<&str>) -> Self {
        if let Some(results) = resp["results"].as_array() {
            return Self::Search(results);
        }
        if let Some(songs) = resp["songs"].as_array() {
            return Self::AltDetails(songs);
        }
        if let Some(item) = requested_id.map(|id| &resp[id]) {
            if item.is_object() {
                return Self::Details(item);
            }
        }
        Self::Unknown
    }

    /// Normalize every song item in the envelope.
    pub fn songs(self, quality: ImageQuality) -> Vec<Song> {
        match self {
            Self::Search(items) | Self::AltDetails(items) => items
                .iter()
                .filter(|v| v.is_object())
                .map(|v| normalize_song(v, quality))
                .collect(),
            Self::Details(item) => vec![normalize_song(item, quality)],
            Self::Unknown => vec![],
        }
    }

    /// The single song a details lookup resolved to, if any.
    pub fn first_song(self, quality: ImageQuality) -> Option<Song> {
        match self {
            Self::Search(items) | Self::AltDetails(items) => items
                .iter()
                .find(|v| v.is_object())
                .map(|v| normalize_song(v, quality)),
            Self::Details(item) => Some(normalize_song(item, quality)),
            Self::Unknown => None,
        }
    }
}

/// Build a [`Song`] from one upstream song item.
pub fn normalize_song(v: &Value, quality: ImageQuality) -> Song {
    let info = &v["more_info"];
    let perma_url = text(&v["perma_url"]);
    let primary_artists = join_artist_names(&info["artistMap"]["primary_artists"]);

    let artist = primary_artists
        .clone()
        .or_else(|| first_text(&[&v["primary_artists"], &info["music"], &v["music"]]).map(String::from))
        .unwrap_or_default();

    Song {
        id: resolve_id(perma_url, &v["id"]),
        title: unescape_html(first_text(&[&v["title"], &v["song"]]).unwrap_or("")),
        artist: unescape_html(&artist),
        album: first_text(&[&info["album"], &v["album"]]).map(unescape_html),
        image: text(&v["image"]).map(|url| quality.apply(url)),
        url: first_text(&[&info["encrypted_media_url"], &v["encrypted_media_url"]])
            .and_then(decrypt_media_url),
        duration: first_present(&[&info["duration"], &v["duration"]]),
        has_lyrics: first_present(&[&info["has_lyrics"], &v["has_lyrics"]]),
        copyright: first_text(&[&info["copyright_text"], &v["copyright_text"]]).map(String::from),
        year: first_present(&[&v["year"]]),
        primary_artists,
        token_url: perma_url.map(String::from),
    }
}

/// Decode the three entities the catalog emits: `&quot;`, `&amp;`, `&#039;`.
///
/// Replacements run in that order over the whole string; any other entity
/// is left as-is.
pub fn unescape_html(s: &str) -> String {
    s.replace("&quot;", "\"")
        .replace("&amp;", "&")
        .replace("&#039;", "'")
}

/// Permalink token if the item has one, else the raw upstream id.
fn resolve_id(perma_url: Option<&str>, raw_id: &Value) -> String {
    let token = perma_url
        .and_then(|url| url.rsplit('/').next())
        .filter(|seg| !seg.is_empty());
    if let Some(token) = token {
        return token.to_owned();
    }
    match raw_id {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

fn join_artist_names(list: &Value) -> Option<String> {
    let names: Vec<&str> = list
        .as_array()?
        .iter()
        .filter_map(|a| text(&a["name"]))
        .collect();
    if names.is_empty() {
        None
    } else {
        Some(names.join(", "))
    }
}

fn text(v: &Value) -> Option<&str> {
    v.as_str().filter(|s| !s.is_empty())
}

fn first_text<'v>(candidates: &[&'v Value]) -> Option<&'v str> {
    candidates.iter().copied().find_map(text)
}

fn first_present(candidates: &[&Value]) -> Option<Value> {
    candidates
        .iter()
        .copied()
        .find(|v| !v.is_null() && v.as_str() != Some(""))
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::tests::encrypt_media_url;
    use serde_json::json;

    fn v4_item() -> Value {
        json!({
            "id": "OQMaey5h",
            "title": "Tum Hi Ho",
            "image": "https://c.saavncdn.com/430/Aashiqui-2-Hindi-2013-150x150.jpg",
            "perma_url": "https://www.jiosaavn.com/song/tum-hi-ho/EToxUyFpcwQ",
            "year": "2013",
            "more_info": {
                "music": "Mithoon",
                "album": "Aashiqui 2",
                "duration": "262",
                "has_lyrics": "true",
                "copyright_text": "© 2013 T-Series",
                "encrypted_media_url": encrypt_media_url("https://aac.saavncdn.com/430/tum_hi_ho_96.mp4"),
                "artistMap": {
                    "primary_artists": [
                        { "id": "459320", "name": "Arijit Singh" },
                        { "id": "1", "name": "Mithoon" }
                    ]
                }
            }
        })
    }

    #[test]
    fn v4_item_normalizes_all_fields() {
        let song = normalize_song(&v4_item(), ImageQuality::Standard);
        assert_eq!(song.id, "EToxUyFpcwQ");
        assert_eq!(song.title, "Tum Hi Ho");
        assert_eq!(song.artist, "Arijit Singh, Mithoon");
        assert_eq!(song.primary_artists.as_deref(), Some("Arijit Singh, Mithoon"));
        assert_eq!(song.album.as_deref(), Some("Aashiqui 2"));
        assert_eq!(
            song.url.as_deref(),
            Some("https://aac.saavncdn.com/430/tum_hi_ho_96.mp4")
        );
        assert_eq!(song.duration, Some(json!("262")));
        assert_eq!(song.has_lyrics, Some(json!("true")));
        assert_eq!(song.copyright.as_deref(), Some("© 2013 T-Series"));
        assert_eq!(song.year, Some(json!("2013")));
        assert_eq!(
            song.token_url.as_deref(),
            Some("https://www.jiosaavn.com/song/tum-hi-ho/EToxUyFpcwQ")
        );
    }

    #[test]
    fn entities_are_unescaped_and_nothing_else() {
        let item = json!({
            "title": "Say &quot;Hi&quot; &amp; Don&#039;t &lt;stop&gt;",
            "more_info": { "album": "Rock &amp; Roll", "music": "A &amp; B" }
        });
        let song = normalize_song(&item, ImageQuality::Standard);
        assert_eq!(song.title, "Say \"Hi\" & Don't &lt;stop&gt;");
        assert_eq!(song.album.as_deref(), Some("Rock & Roll"));
        assert_eq!(song.artist, "A & B");
    }

    #[test]
    fn unescape_leaves_plain_text_untouched() {
        assert_eq!(unescape_html("Kal Ho Naa Ho (Sad) #1"), "Kal Ho Naa Ho (Sad) #1");
    }

    #[test]
    fn artist_falls_back_to_music_credit() {
        let item = json!({ "title": "x", "more_info": { "music": "A.R. Rahman" } });
        let song = normalize_song(&item, ImageQuality::Standard);
        assert_eq!(song.artist, "A.R. Rahman");
        assert_eq!(song.primary_artists, None);
    }

    #[test]
    fn artist_uses_flat_primary_artists_string() {
        let item = json!({ "song": "Bones", "primary_artists": "Imagine Dragons", "music": "x" });
        let song = normalize_song(&item, ImageQuality::Standard);
        assert_eq!(song.title, "Bones");
        assert_eq!(song.artist, "Imagine Dragons");
    }

    #[test]
    fn empty_artist_list_is_treated_as_absent() {
        let item = json!({ "more_info": { "artistMap": { "primary_artists": [] }, "music": "M" } });
        assert_eq!(normalize_song(&item, ImageQuality::Standard).artist, "M");
    }

    #[test]
    fn missing_everything_yields_empty_song() {
        let song = normalize_song(&json!({}), ImageQuality::High);
        assert_eq!(song.id, "");
        assert_eq!(song.title, "");
        assert_eq!(song.artist, "");
        assert_eq!(song.album, None);
        assert_eq!(song.image, None);
        assert_eq!(song.url, None);
    }

    #[test]
    fn wrongly_typed_fields_do_not_panic() {
        let item = json!({ "more_info": "oops", "perma_url": 5, "id": 12345, "title": ["a"] });
        let song = normalize_song(&item, ImageQuality::Standard);
        assert_eq!(song.id, "12345");
        assert_eq!(song.title, "");
    }

    #[test]
    fn id_falls_back_when_permalink_has_trailing_slash() {
        let item = json!({ "id": "5WXAlMNt", "perma_url": "https://www.jiosaavn.com/song/x/" });
        assert_eq!(normalize_song(&item, ImageQuality::Standard).id, "5WXAlMNt");
    }

    #[test]
    fn undecryptable_url_keeps_rest_of_record() {
        let mut item = v4_item();
        item["more_info"]["encrypted_media_url"] = json!("%%%");
        let song = normalize_song(&item, ImageQuality::Standard);
        assert_eq!(song.url, None);
        assert_eq!(song.title, "Tum Hi Ho");
    }

    #[test]
    fn high_quality_image() {
        let song = normalize_song(&v4_item(), ImageQuality::High);
        assert_eq!(
            song.image.as_deref(),
            Some("https://c.saavncdn.com/430/Aashiqui-2-Hindi-2013-500x500.jpg")
        );
    }

    #[test]
    fn classify_dispatches_on_top_level_field() {
        let search = json!({ "total": 1, "results": [v4_item()] });
        assert!(matches!(CatalogResponse::classify(&search, None), CatalogResponse::Search(r) if r.len() == 1));

        let alt = json!({ "songs": [v4_item()], "modules": {} });
        assert!(matches!(CatalogResponse::classify(&alt, Some("tum-hi-ho")), CatalogResponse::AltDetails(_)));

        let keyed = json!({ "5WXAlMNt": v4_item() });
        assert!(matches!(CatalogResponse::classify(&keyed, Some("5WXAlMNt")), CatalogResponse::Details(_)));
        assert!(matches!(CatalogResponse::classify(&keyed, Some("other")), CatalogResponse::Unknown));

        let error = json!({ "error": { "code": "INPUT_INVALID" } });
        assert!(matches!(CatalogResponse::classify(&error, Some("1")), CatalogResponse::Unknown));
    }

    #[test]
    fn first_song_of_empty_songs_list_is_none() {
        let alt = json!({ "songs": [] });
        assert_eq!(
            CatalogResponse::classify(&alt, Some("x")).first_song(ImageQuality::Standard),
            None
        );
    }
}
