//! Route handlers.
//!
//! | Route                        | Upstream                       | Failure            |
//! |------------------------------|--------------------------------|--------------------|
//! | `GET /api/search?q=`         | catalog `search.getResults`    | `[]`               |
//! | `GET /api/songs/:id`         | catalog `song.getDetails` / `webapi.get` | 404      |
//! | `GET /api/lyrics?artist=&title=` | lyrics.ovh                 | `"Lyrics not found"` |
//! | `GET /api/youtube/search?q=` | YouTube results page           | `[]`               |
//! | `GET /api/autocomplete?q=`   | catalog `autocomplete.get`     | `null`             |
//! | `GET /api/trending`          | catalog `content.getTrending`  | `[]`               |

use axum::Json;
use axum::extract::{Path, Query, State};
use saavn_api::{DEFAULT_PAGE_SIZE, ImageQuality, Song};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use youtube_api::Video;

use crate::AppState;
use crate::error::ApiError;

pub const LYRICS_NOT_FOUND: &str = "Lyrics not found";

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    q: Option<String>,
    page: Option<String>,
    limit: Option<String>,
    quality: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SongParams {
    quality: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct QueryParam {
    q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LyricsParams {
    artist: Option<String>,
    title: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LyricsBody {
    pub lyrics: String,
}

pub async fn root() -> &'static str {
    "SurVerse API is Running"
}

pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Song>>, ApiError> {
    let q = required(params.q.as_deref(), "Query parameter \"q\" is required")?;
    let page = number_or(params.page.as_deref(), 1, "Query parameter \"page\" must be a number")?;
    let limit = number_or(
        params.limit.as_deref(),
        DEFAULT_PAGE_SIZE,
        "Query parameter \"limit\" must be a number",
    )?;
    let songs = state
        .catalog
        .search_page(q, page, limit, image_quality(params.quality.as_deref()))
        .await;
    tracing::debug!(q, count = songs.len(), "search");
    Ok(Json(songs))
}

pub async fn song(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<SongParams>,
) -> Result<Json<Song>, ApiError> {
    state
        .catalog
        .song(&id, image_quality(params.quality.as_deref()))
        .await
        .map(Json)
        .ok_or(ApiError::NotFound("Song not found"))
}

pub async fn lyrics(
    State(state): State<AppState>,
    Query(params): Query<LyricsParams>,
) -> Result<Json<LyricsBody>, ApiError> {
    const MISSING: &str = "Artist and Title required";
    let artist = required(params.artist.as_deref(), MISSING)?;
    let title = required(params.title.as_deref(), MISSING)?;

    let lyrics = state
        .lyrics
        .lyrics(artist, title)
        .await
        .unwrap_or_else(|| LYRICS_NOT_FOUND.to_owned());
    Ok(Json(LyricsBody { lyrics }))
}

pub async fn youtube_search(
    State(state): State<AppState>,
    Query(params): Query<QueryParam>,
) -> Result<Json<Vec<Video>>, ApiError> {
    let q = required(params.q.as_deref(), "Query parameter \"q\" is required")?;
    Ok(Json(state.youtube.search(q).await))
}

pub async fn autocomplete(
    State(state): State<AppState>,
    Query(params): Query<QueryParam>,
) -> Result<Json<Value>, ApiError> {
    let q = required(params.q.as_deref(), "Query parameter \"q\" is required")?;
    Ok(Json(state.catalog.autocomplete(q).await.unwrap_or(Value::Null)))
}

pub async fn trending(State(state): State<AppState>) -> Json<Value> {
    Json(state.catalog.trending().await)
}

/// A present, non-empty parameter.
fn required<'a>(value: Option<&'a str>, message: &'static str) -> Result<&'a str, ApiError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(ApiError::BadRequest(message))
}

/// An optional unsigned number; absent or empty means `default`.
fn number_or(value: Option<&str>, default: u32, message: &'static str) -> Result<u32, ApiError> {
    match value.filter(|v| !v.is_empty()) {
        Some(v) => v.parse().map_err(|_| ApiError::BadRequest(message)),
        None => Ok(default),
    }
}

/// `quality=high` selects 500x500 artwork; anything else keeps the default.
fn image_quality(param: Option<&str>) -> ImageQuality {
    match param {
        Some(q) if q.eq_ignore_ascii_case("high") => ImageQuality::High,
        _ => ImageQuality::Standard,
    }
}
