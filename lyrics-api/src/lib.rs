//! Lyrics lookup client.
//!
//! Talks to a [lyrics.ovh](https://lyrics.ovh)-compatible service:
//!
//! ```text
//! GET https://api.lyrics.ovh/v1/{artist}/{title}
//! 200 { "lyrics": "..." }
//! 404 { "error": "No lyrics found" }
//! ```
//!
//! [`LyricsClient::lyrics`] never fails: anything other than a non-empty
//! `lyrics` string is logged and reported as `None`.

mod error;

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

pub use error::{LyricsError, Result};

/// Production endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.lyrics.ovh";

/// Client settings.
#[derive(Debug, Clone)]
pub struct LyricsConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for LyricsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Deserialize)]
struct LyricsResponse {
    lyrics: Option<String>,
}

/// Async lyrics client. Clones share one connection pool.
#[derive(Debug, Clone)]
pub struct LyricsClient {
    http: Client,
    base_url: String,
}

impl LyricsClient {
    pub fn new() -> Result<Self> {
        Self::with_config(LyricsConfig::default())
    }

    pub fn with_config(config: LyricsConfig) -> Result<Self> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Fetch plain-text lyrics for `title` by `artist`.
    pub async fn lyrics(&self, artist: &str, title: &str) -> Option<String> {
        match self.fetch(artist, title).await {
            Ok(lyrics) => lyrics,
            Err(error) => {
                tracing::warn!(%error, artist, title, "lyrics lookup failed");
                None
            }
        }
    }

    async fn fetch(&self, artist: &str, title: &str) -> Result<Option<String>> {
        let url = lookup_url(&self.base_url, artist, title);
        tracing::debug!(%url, "lyrics request");

        let resp = self.http.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(LyricsError::Status(status));
        }

        let body: LyricsResponse = serde_json::from_str(&resp.text().await?)?;
        Ok(body.lyrics.filter(|l| !l.trim().is_empty()))
    }
}

/// `{base}/v1/{artist}/{title}` with both segments percent-encoded.
fn lookup_url(base: &str, artist: &str, title: &str) -> String {
    format!(
        "{base}/v1/{}/{}",
        urlencoding::encode(artist),
        urlencoding::encode(title)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_segments_are_encoded() {
        assert_eq!(
            lookup_url("https://api.lyrics.ovh", "AC/DC", "Back In Black?"),
            "https://api.lyrics.ovh/v1/AC%2FDC/Back%20In%20Black%3F"
        );
    }

    #[test]
    fn trailing_slash_in_base_is_dropped() {
        let client = LyricsClient::with_config(LyricsConfig {
            base_url: "http://localhost:1234/".into(),
            ..LyricsConfig::default()
        })
        .unwrap();
        assert_eq!(client.base_url, "http://localhost:1234");
    }
}
