// repocard - renders a GitHub repository card in the terminal.

use std::fs::OpenOptions;
use std::sync::Mutex;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use repocard::app::App;
use repocard::cache::CacheStore;
use repocard::error::Result;
use repocard::github::GithubClient;

/// Render a GitHub repository card in the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Repository to display, as `owner/name`.
    owner_repo: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let cache = CacheStore::open()?;
    init_tracing(&cache)?;
    info!(
        repository = ?args.owner_repo,
        "starting repocard v{}",
        env!("CARGO_PKG_VERSION")
    );

    let client = GithubClient::new()?;
    let mut app = App::new(args.owner_repo, cache, client);
    app.activate();

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();
    result?;
    Ok(())
}

/// Log to a file next to the cache entries; the terminal belongs to the TUI.
fn init_tracing(cache: &CacheStore) -> Result<()> {
    let log = OpenOptions::new()
        .create(true)
        .append(true)
        .open(cache.dir().join("repocard.log"))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(log))
        .with_ansi(false)
        .init();
    Ok(())
}
