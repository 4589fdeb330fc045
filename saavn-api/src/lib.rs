//! JioSaavn catalog client library.
//!
//! Wraps the undocumented `api.php` endpoint used by the JioSaavn web
//! player: song search, song lookup by numeric id or permalink token,
//! autocomplete, and trending.
//!
//! ```no_run
//! use saavn_api::{ImageQuality, SaavnClient};
//!
//! # async fn run() -> saavn_api::Result<()> {
//! let client = SaavnClient::new()?;
//! for song in client.search("arijit singh").await {
//!     println!("{} - {} ({:?})", song.artist, song.title, song.url);
//! }
//! let song = client.song("EToxUyFpcwQ", ImageQuality::High).await;
//! # Ok(())
//! # }
//! ```
//!
//! # API call mapping
//!
//! | Method                           | `__call`                            | Description             |
//! |----------------------------------|-------------------------------------|-------------------------|
//! | [`SaavnClient::search`]          | `search.getResults`                 | Song search             |
//! | [`SaavnClient::song`]            | `song.getDetails` / `webapi.get`    | Song by id or token     |
//! | [`SaavnClient::autocomplete`]    | `autocomplete.get`                  | Global autocomplete     |
//! | [`SaavnClient::trending`]        | `content.getTrending`               | Trending content        |
//!
//! # Failure model
//!
//! Operations never return transport errors: a failed call is logged via
//! `tracing` and yields an empty list, `None`, or an empty array. A song
//! whose stream URL cannot be decrypted is still returned, with `url: None`.

pub mod client;
pub mod crypto;
pub mod error;
pub mod normalize;
mod search;
mod track;
pub mod types;

pub use client::{SaavnClient, SaavnConfig};
pub use crypto::decrypt_media_url;
pub use error::{Result, SaavnError};
pub use search::DEFAULT_PAGE_SIZE;
pub use track::lookup_request;
pub use types::{ImageQuality, LookupKind, Song};
