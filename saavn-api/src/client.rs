//! HTTP client for the JioSaavn catalog endpoint.
//!
//! Every operation is a `GET` on one URL, selected by the `__call` query
//! parameter:
//!
//! ```text
//! GET https://www.jiosaavn.com/api.php
//!     ?__call=search.getResults&q=...&_format=json&_marker=0&api_version=4&ctx=web6dot0
//! ```
//!
//! The endpoint is undocumented and answers in several shapes; see
//! [`normalize`](crate::normalize) for how they are reconciled.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::error::{Result, SaavnError};

/// Production catalog endpoint.
pub const DEFAULT_BASE_URL: &str = "https://www.jiosaavn.com/api.php";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
const ACCEPT: &str = "application/json, text/plain, */*";

/// Query parameters sent with every call.
const COMMON_PARAMS: [(&str, &str); 4] = [
    ("_format", "json"),
    ("_marker", "0"),
    ("api_version", "4"),
    ("ctx", "web6dot0"),
];

/// Client settings.
#[derive(Debug, Clone)]
pub struct SaavnConfig {
    /// Full URL of the `api.php` endpoint.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for SaavnConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Async client for the catalog API.
///
/// Cheap to clone; clones share the underlying connection pool. API
/// operations live in separate modules (`search`, `track`) as
/// `impl SaavnClient` blocks.
#[derive(Debug, Clone)]
pub struct SaavnClient {
    http: Client,
    base_url: String,
}

impl SaavnClient {
    /// Create a client for the production endpoint.
    pub fn new() -> Result<Self> {
        Self::with_config(SaavnConfig::default())
    }

    /// Create a client with explicit settings (another endpoint, a mock
    /// server in tests, a shorter timeout).
    pub fn with_config(config: SaavnConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// The endpoint this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue one catalog call and return the decoded JSON body.
    ///
    /// `call` is the `__call` value, e.g. `search.getResults`; `params` are
    /// appended after the common parameters.
    pub async fn request(&self, call: &str, params: &[(&str, &str)]) -> Result<Value> {
        tracing::debug!(call, ?params, "catalog request");

        let resp = self
            .http
            .get(&self.base_url)
            .header("Accept", ACCEPT)
            .query(&[("__call", call)])
            .query(&COMMON_PARAMS)
            .query(params)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SaavnError::Status(status));
        }

        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
