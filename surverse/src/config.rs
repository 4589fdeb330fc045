//! Command-line and environment configuration.
//!
//! Every flag can also be set through the environment variable named next
//! to it, so the server can be configured the usual container way
//! (`PORT=8080 surverse`).

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "surverse",
    version,
    about = "SurVerse music API server & catalog CLI"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Address to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0", global = true)]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 5000, global = true)]
    pub port: u16,

    #[command(flatten)]
    pub upstream: UpstreamArgs,

    /// Log filter (same syntax as `RUST_LOG`)
    #[arg(long, env = "RUST_LOG", global = true)]
    pub log_filter: Option<String>,

    /// Write logs to daily-rotated files in this directory instead of stderr
    #[arg(long, env = "SURVERSE_LOG_DIR", global = true)]
    pub log_dir: Option<PathBuf>,
}

/// Where the upstream services live.
#[derive(Debug, Clone, Args)]
pub struct UpstreamArgs {
    /// Catalog `api.php` endpoint
    #[arg(long, env = "SAAVN_API_URL", default_value = saavn_api::client::DEFAULT_BASE_URL, global = true)]
    pub catalog_url: String,

    /// Lyrics service base URL
    #[arg(long, env = "LYRICS_API_URL", default_value = lyrics_api::DEFAULT_BASE_URL, global = true)]
    pub lyrics_url: String,

    /// YouTube base URL
    #[arg(long, env = "YOUTUBE_URL", default_value = youtube_api::DEFAULT_BASE_URL, global = true)]
    pub youtube_url: String,

    /// Timeout for each upstream request, in seconds
    #[arg(long, env = "UPSTREAM_TIMEOUT", default_value_t = 30, global = true)]
    pub timeout_secs: u64,
}

impl UpstreamArgs {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP API (default)
    Serve,
    /// Search the catalog for songs
    Search {
        /// Search keyword
        query: String,
        /// Max results
        #[arg(short, long, default_value_t = saavn_api::DEFAULT_PAGE_SIZE)]
        limit: u32,
        /// Result page (1-based)
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Show one song by numeric id or permalink token
    Info {
        /// Song id or token
        id: String,
    },
    /// Fetch lyrics
    Lyrics { artist: String, title: String },
    /// Search YouTube
    Videos {
        /// Search keyword
        query: String,
    },
    /// Decrypt an `encrypted_media_url` value
    Decrypt { ciphertext: String },
}
