//! Song detail lookup.
//!
//! Two calls resolve a single song, chosen by the identifier's form
//! (see [`LookupKind`]):
//!
//! ## Numeric id — `__call=song.getDetails&pids=<id>`
//!
//! ```json
//! { "5WXAlMNt": { "id": "5WXAlMNt", "title": "...", "more_info": {...} } }
//! ```
//!
//! The body is keyed by the requested id.
//!
//! ## Permalink token — `__call=webapi.get&token=<token>&type=song`
//!
//! ```json
//! { "songs": [{ "id": "5WXAlMNt", "title": "...", "more_info": {...} }], "modules": {...} }
//! ```

use crate::client::SaavnClient;
use crate::normalize::CatalogResponse;
use crate::types::{ImageQuality, LookupKind, Song};

impl SaavnClient {
    /// Look up one song by numeric id or permalink token.
    ///
    /// Returns `None` if the catalog does not know the id or the call
    /// fails; failures are logged.
    pub async fn song(&self, id: &str, quality: ImageQuality) -> Option<Song> {
        let (call, params) = lookup_request(id);

        let resp = match self.request(call, &params).await {
            Ok(resp) => resp,
            Err(error) => {
                tracing::warn!(%error, id, "catalog song lookup failed");
                return None;
            }
        };

        let song = CatalogResponse::classify(&resp, Some(id)).first_song(quality);
        if song.is_none() {
            tracing::debug!(id, "catalog has no song for id");
        }
        song
    }
}

/// The `__call` and extra parameters for looking up `id`.
pub fn lookup_request(id: &str) -> (&'static str, Vec<(&'static str, &str)>) {
    match LookupKind::for_id(id) {
        LookupKind::Numeric => ("song.getDetails", vec![("pids", id)]),
        LookupKind::Token => ("webapi.get", vec![("token", id), ("type", "song")]),
    }
}
