use anyhow::{Context, Result};
use clap::Parser;
use surverse::{AppState, commands};
use surverse::config::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = surverse::logging::init(cli.log_filter.as_deref(), cli.log_dir.as_deref());
    let state = AppState::from_config(&cli.upstream).context("failed to build HTTP clients")?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => cmd_serve(state, &cli.host, cli.port).await,
        Command::Search { query, limit, page } => {
            print(&commands::search(&state, &query, page, limit).await?)
        }
        Command::Info { id } => print(&commands::info(&state, &id).await?),
        Command::Lyrics { artist, title } => print(&commands::lyrics(&state, &artist, &title).await?),
        Command::Videos { query } => print(&commands::videos(&state, &query).await?),
        Command::Decrypt { ciphertext } => print(&commands::decrypt(&ciphertext)?),
    }
}

// ── serve ──

async fn cmd_serve(state: AppState, host: &str, port: u16) -> Result<()> {
    let listener = tokio::net::TcpListener::bind((host, port))
        .await
        .with_context(|| format!("failed to bind {host}:{port}"))?;

    tracing::info!(
        addr = %listener.local_addr()?,
        catalog = state.catalog.base_url(),
        "SurVerse API listening"
    );

    axum::serve(listener, surverse::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

// ── catalog queries ──

fn print(output: &str) -> Result<()> {
    println!("{output}");
    Ok(())
}
