//! SurVerse API server.
//!
//! A thin HTTP front for the JioSaavn catalog ([`saavn_api`]), lyrics.ovh
//! ([`lyrics_api`]) and YouTube search ([`youtube_api`]). Handlers hold no
//! state beyond the three clients; every request is independent.

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod routes;

use axum::Router;
use axum::routing::get;
use lyrics_api::{LyricsClient, LyricsConfig};
use saavn_api::{SaavnClient, SaavnConfig};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use youtube_api::{YoutubeClient, YoutubeConfig};

use crate::config::UpstreamArgs;

/// Upstream clients shared by all handlers. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: SaavnClient,
    pub lyrics: LyricsClient,
    pub youtube: YoutubeClient,
}

impl AppState {
    pub fn from_config(upstream: &UpstreamArgs) -> anyhow::Result<Self> {
        let timeout = upstream.timeout();
        Ok(Self {
            catalog: SaavnClient::with_config(SaavnConfig {
                base_url: upstream.catalog_url.clone(),
                timeout,
            })?,
            lyrics: LyricsClient::with_config(LyricsConfig {
                base_url: upstream.lyrics_url.clone(),
                timeout,
            })?,
            youtube: YoutubeClient::with_config(YoutubeConfig {
                base_url: upstream.youtube_url.clone(),
                timeout,
            })?,
        })
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::root))
        .route("/api/search", get(routes::search))
        .route("/api/songs/:id", get(routes::song))
        .route("/api/lyrics", get(routes::lyrics))
        .route("/api/youtube/search", get(routes::youtube_search))
        .route("/api/autocomplete", get(routes::autocomplete))
        .route("/api/trending", get(routes::trending))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
