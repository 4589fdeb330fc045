//! Search, autocomplete, and trending.
//!
//! ## `search` — `__call=search.getResults`
//!
//! Request: `q` (keyword), `p` (1-based page), `n` (page size).
//!
//! Response:
//! ```json
//! {
//!   "total": 412, "start": 1,
//!   "results": [{
//!     "id": "OQMaey5h", "title": "Tum Hi Ho", "type": "song",
//!     "image": "https://c.saavncdn.com/430/Aashiqui-2-Hindi-2013-150x150.jpg",
//!     "perma_url": "https://www.jiosaavn.com/song/tum-hi-ho/EToxUyFpcwQ",
//!     "year": "2013",
//!     "more_info": {
//!       "album": "Aashiqui 2", "music": "Mithoon", "duration": "262",
//!       "encrypted_media_url": "ID2ieOjCrwfgWvL5sXl4B1ImC5QfbsDy...",
//!       "artistMap": { "primary_artists": [{ "id": "459320", "name": "Arijit Singh" }] }
//!     }
//!   }]
//! }
//! ```
//!
//! ## `autocomplete` — `__call=autocomplete.get`
//!
//! Request: `query`. Response groups hits by kind (`songs`, `albums`,
//! `artists`, `playlists`, `topquery`) and is passed through untouched.
//!
//! ## `trending` — `__call=content.getTrending`
//!
//! No parameters. Response is a mixed list of songs, albums and playlists,
//! passed through untouched.

use serde_json::Value;

use crate::client::SaavnClient;
use crate::normalize::CatalogResponse;
use crate::types::{ImageQuality, Song};

/// Default page size, as used by the web player.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

impl SaavnClient {
    /// Search songs, first page, standard image size.
    ///
    /// Returns an empty list on any transport or decoding failure.
    pub async fn search(&self, query: &str) -> Vec<Song> {
        self.search_page(query, 1, DEFAULT_PAGE_SIZE, ImageQuality::Standard)
            .await
    }

    /// Search songs with explicit paging and image quality.
    ///
    /// `page` is 1-based. Returns an empty list on failure.
    pub async fn search_page(
        &self,
        query: &str,
        page: u32,
        limit: u32,
        quality: ImageQuality,
    ) -> Vec<Song> {
        let page = page.max(1).to_string();
        let limit = limit.to_string();
        let params = [("q", query), ("p", page.as_str()), ("n", limit.as_str())];

        match self.request("search.getResults", &params).await {
            Ok(resp) => CatalogResponse::classify(&resp, None).songs(quality),
            Err(error) => {
                tracing::warn!(%error, query, "catalog search failed");
                Vec::new()
            }
        }
    }

    /// Global autocomplete across songs, albums, artists and playlists.
    ///
    /// Returns the upstream JSON as-is, or `None` on failure.
    pub async fn autocomplete(&self, query: &str) -> Option<Value> {
        self.request("autocomplete.get", &[("query", query)])
            .await
            .inspect_err(|error| tracing::warn!(%error, query, "catalog autocomplete failed"))
            .ok()
    }

    /// Currently trending content.
    ///
    /// Returns the upstream JSON as-is, or an empty array on failure.
    pub async fn trending(&self) -> Value {
        self.request("content.getTrending", &[])
            .await
            .unwrap_or_else(|error| {
                tracing::warn!(%error, "catalog trending failed");
                Value::Array(Vec::new())
            })
    }
}
