use thiserror::Error;

#[derive(Debug, Error)]
pub enum YoutubeError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("YouTube returned HTTP {0}")]
    Status(reqwest::StatusCode),
    /// The results page did not embed a parseable `ytInitialData` object,
    /// usually a consent or bot-check interstitial.
    #[error("results page has no initial data")]
    MissingInitialData,
}

pub type Result<T> = std::result::Result<T, YoutubeError>;
