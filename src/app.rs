// App state and main event loop.
// Coordinates the cache with the single background fetch and selects
// which of the three views gets drawn.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

use crate::cache::{CACHE_TTL_MS, CacheStore, cache_key, now_ms};
use crate::error::Result;
use crate::github::GithubClient;
use crate::models::Repo;
use crate::ui;

type FetchOutcome = Result<Repo>;

/// What gets drawn this frame. Once a snapshot exists the card wins, even
/// while a background refresh is in flight or has failed.
#[derive(Debug)]
pub enum View<'a> {
    Loading,
    Error {
        owner_repo: &'a str,
        message: &'a str,
    },
    Card(&'a Repo),
}

/// Main application state.
pub struct App {
    /// Repository identifier, as `owner/name`. Without one the app stays
    /// on the loading placeholder and never fetches.
    pub owner_repo: Option<String>,
    /// Last snapshot obtained, from cache or network.
    pub repo: Option<Repo>,
    /// Message from a failed fetch attempt.
    pub error: Option<String>,
    /// Whether the app should exit.
    pub should_quit: bool,
    cache: CacheStore,
    client: GithubClient,
    tx: UnboundedSender<FetchOutcome>,
    rx: UnboundedReceiver<FetchOutcome>,
}

impl App {
    pub fn new(owner_repo: Option<String>, cache: CacheStore, client: GithubClient) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            owner_repo,
            repo: None,
            error: None,
            should_quit: false,
            cache,
            client,
            tx,
            rx,
        }
    }

    /// Serve the cached snapshot if one exists, and start at most one
    /// fetch when the cache is expired or empty. A fresh entry suppresses
    /// the fetch entirely.
    pub fn activate(&mut self) {
        let Some(owner_repo) = self.owner_repo.clone() else {
            debug!("no repository configured, staying on the placeholder");
            return;
        };
        let entry = self.cache.read(&cache_key(&owner_repo));
        let expired = entry.is_expired(now_ms(), CACHE_TTL_MS);
        if let Some(repo) = entry.data {
            debug!(%owner_repo, "rendering cached snapshot");
            self.repo = Some(repo);
        }
        if expired {
            info!(%owner_repo, "cache expired, fetching");
            let client = self.client.clone();
            let tx = self.tx.clone();
            // Detached on purpose: quitting stops draining the channel but
            // never aborts the request.
            tokio::spawn(async move {
                let _ = tx.send(client.fetch_repo(&owner_repo).await);
            });
        }
    }

    /// Select the view for the current state.
    pub fn view(&self) -> View<'_> {
        if let Some(repo) = &self.repo {
            View::Card(repo)
        } else if let Some(message) = &self.error {
            View::Error {
                owner_repo: self.owner_repo.as_deref().unwrap_or_default(),
                message,
            }
        } else {
            View::Loading
        }
    }

    /// Main event loop.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        while !self.should_quit {
            self.poll_fetch();
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_events()?;
        }
        Ok(())
    }

    /// Drain any completed fetch without blocking the draw loop.
    fn poll_fetch(&mut self) {
        while let Ok(outcome) = self.rx.try_recv() {
            self.apply(outcome);
        }
    }

    fn apply(&mut self, outcome: FetchOutcome) {
        match outcome {
            Ok(repo) => {
                if let Some(owner_repo) = &self.owner_repo {
                    if let Err(err) = self.cache.write(&cache_key(owner_repo), Some(&repo)) {
                        warn!(%err, "failed to persist the fetched snapshot");
                    }
                }
                self.repo = Some(repo);
                self.error = None;
            }
            Err(err) => {
                info!(%err, "fetch failed");
                self.error = Some(err.to_string());
            }
        }
    }

    /// Handle keyboard and other events.
    #[allow(clippy::collapsible_if)]
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                        _ => {}
                    }
                }
            }
        }
        Ok(())
    }
}
