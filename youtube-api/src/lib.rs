//! YouTube video search.
//!
//! There is no keyless search API, so this scrapes the results page the
//! same way the web client bootstraps itself: the HTML carries
//!
//! ```text
//! <script>var ytInitialData = {"contents":{"twoColumnSearchResultsRenderer":...}};</script>
//! ```
//!
//! and every hit is a `videoRenderer` object somewhere inside it:
//!
//! ```json
//! {
//!   "videoId": "dQw4w9WgXcQ",
//!   "title": { "runs": [{ "text": "Never Gonna Give You Up" }] },
//!   "ownerText": { "runs": [{ "text": "Rick Astley" }] },
//!   "lengthText": { "simpleText": "3:33" }
//! }
//! ```

mod error;

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use error::{Result, YoutubeError};

/// Production site.
pub const DEFAULT_BASE_URL: &str = "https://www.youtube.com";

/// Results returned per search.
pub const MAX_RESULTS: usize = 10;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const INITIAL_DATA_MARKERS: [&str; 2] = ["var ytInitialData = ", "window[\"ytInitialData\"] = "];

/// One search hit, shaped like the catalog's songs so the player can queue it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub title: String,
    /// Channel name.
    pub artist: String,
    /// `hqdefault` thumbnail.
    pub image: String,
    /// `m:ss` / `h:mm:ss`; empty for live streams.
    pub duration: String,
    /// Watch page URL (not a media stream).
    pub url: String,
    /// Always `"youtube"`.
    pub source: String,
}

#[derive(Debug, Clone)]
pub struct YoutubeConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for YoutubeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Async search client. Clones share one connection pool.
#[derive(Debug, Clone)]
pub struct YoutubeClient {
    http: Client,
    base_url: String,
}

impl YoutubeClient {
    pub fn new() -> Result<Self> {
        Self::with_config(YoutubeConfig::default())
    }

    pub fn with_config(config: YoutubeConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Search for `query` (suffixed with `" audio"` to favour music
    /// uploads) and return up to [`MAX_RESULTS`] videos.
    ///
    /// Returns an empty list on any failure.
    pub async fn search(&self, query: &str) -> Vec<Video> {
        match self.fetch_results_page(&format!("{query} audio")).await {
            Ok(html) => parse_results_page(&html).unwrap_or_else(|error| {
                tracing::warn!(%error, query, "youtube results page not understood");
                Vec::new()
            }),
            Err(error) => {
                tracing::warn!(%error, query, "youtube search failed");
                Vec::new()
            }
        }
    }

    async fn fetch_results_page(&self, query: &str) -> Result<String> {
        let resp = self
            .http
            .get(format!("{}/results", self.base_url))
            .header("Accept-Language", "en-US,en;q=0.9")
            .query(&[("search_query", query), ("hl", "en")])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(YoutubeError::Status(status));
        }
        Ok(resp.text().await?)
    }
}

/// Extract up to [`MAX_RESULTS`] videos from a results page.
pub fn parse_results_page(html: &str) -> Result<Vec<Video>> {
    let data = extract_initial_data(html).ok_or(YoutubeError::MissingInitialData)?;

    let mut renderers = Vec::new();
    collect_video_renderers(&data, &mut renderers);

    Ok(renderers
        .into_iter()
        .filter_map(video_from_renderer)
        .take(MAX_RESULTS)
        .collect())
}

fn extract_initial_data(html: &str) -> Option<Value> {
    let start = INITIAL_DATA_MARKERS
        .iter()
        .find_map(|marker| html.find(marker).map(|i| i + marker.len()))?;
    // Parse exactly one JSON value; whatever follows (`;</script>...`) is ignored.
    serde_json::Deserializer::from_str(&html[start..])
        .into_iter::<Value>()
        .next()?
        .ok()
}

/// Depth-first, document order.
fn collect_video_renderers<'a>(v: &'a Value, out: &mut Vec<&'a Value>) {
    match v {
        Value::Object(map) => {
            for (key, child) in map {
                if key == "videoRenderer" {
                    out.push(child);
                } else {
                    collect_video_renderers(child, out);
                }
            }
        }
        Value::Array(items) => {
            for child in items {
                collect_video_renderers(child, out);
            }
        }
        _ => {}
    }
}

fn video_from_renderer(r: &Value) -> Option<Video> {
    let id = r["videoId"].as_str().filter(|s| !s.is_empty())?;
    Some(Video {
        id: id.to_owned(),
        title: runs_text(&r["title"]),
        artist: first_run(&r["ownerText"])
            .or_else(|| first_run(&r["longBylineText"]))
            .unwrap_or_default()
            .to_owned(),
        image: format!("https://i.ytimg.com/vi/{id}/hqdefault.jpg"),
        duration: r["lengthText"]["simpleText"]
            .as_str()
            .unwrap_or_default()
            .to_owned(),
        url: format!("https://youtube.com/watch?v={id}"),
        source: "youtube".to_owned(),
    })
}

/// Text of a `{ "runs": [...] }` or `{ "simpleText": ... }` node.
fn runs_text(node: &Value) -> String {
    if let Some(text) = node["simpleText"].as_str() {
        return text.to_owned();
    }
    node["runs"]
        .as_array()
        .map(|runs| runs.iter().filter_map(|r| r["text"].as_str()).collect())
        .unwrap_or_default()
}

fn first_run(node: &Value) -> Option<&str> {
    node["runs"][0]["text"].as_str()
}
