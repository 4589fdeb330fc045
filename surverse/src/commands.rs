//! One-shot catalog subcommands.
//!
//! Each returns the pretty-printed JSON the matching HTTP route would
//! answer with; `main` writes it to stdout.

use anyhow::{Result, bail};
use saavn_api::ImageQuality;
use serde::Serialize;

use crate::AppState;
use crate::routes::{LYRICS_NOT_FOUND, LyricsBody};

/// `surverse search <query>`: the normalized songs, `[]` if none.
pub async fn search(state: &AppState, query: &str, page: u32, limit: u32) -> Result<String> {
    let songs = state
        .catalog
        .search_page(query, page, limit, ImageQuality::Standard)
        .await;
    to_json(&songs)
}

/// `surverse info <id>`: one song with high resolution cover art.
pub async fn info(state: &AppState, id: &str) -> Result<String> {
    let Some(song) = state.catalog.song(id, ImageQuality::High).await else {
        bail!("song not found: {id}");
    };
    to_json(&song)
}

/// `surverse lyrics <artist> <title>`: `{ "lyrics": ... }`.
pub async fn lyrics(state: &AppState, artist: &str, title: &str) -> Result<String> {
    let lyrics = state
        .lyrics
        .lyrics(artist, title)
        .await
        .unwrap_or_else(|| LYRICS_NOT_FOUND.to_owned());
    to_json(&LyricsBody { lyrics })
}

/// `surverse videos <query>`
pub async fn videos(state: &AppState, query: &str) -> Result<String> {
    to_json(&state.youtube.search(query).await)
}

/// `surverse decrypt <ciphertext>`: the bare URL.
pub fn decrypt(ciphertext: &str) -> Result<String> {
    let Some(url) = saavn_api::decrypt_media_url(ciphertext) else {
        bail!("not a valid encrypted media URL");
    };
    Ok(url)
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
