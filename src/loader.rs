//! Background loading of articles.
//!
//! An [`ArticleLoader`] fetches one URL and parses the body on a spawned
//! tokio task, handing the result back to the caller through a oneshot
//! channel. Loading consumes the loader, so each load cycle delivers at most
//! one result.
//!
//! The loader only depends on the [`ArticleSource`] trait, which keeps it
//! testable without a network.

use crate::error::{NewsError, Result};
use crate::fetcher::{Fetcher, log_fetch_failure};
use crate::models::Article;
use crate::parser::{extract_articles, try_extract_articles};
use crate::utils::redact_url;
use std::sync::Arc;
use tokio::sync::oneshot;
use tracing::{Instrument, debug, error, info, instrument};

/// Something that can return the raw body behind a URL.
pub trait ArticleSource: Send + Sync + 'static {
    fn fetch_text(&self, url: &str) -> impl Future<Output = Result<String>> + Send;
}

impl ArticleSource for Fetcher {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        self.try_fetch(url).await
    }
}

/// The result of one load cycle, keeping failures apart from empty results.
#[derive(Debug)]
pub enum LoadOutcome {
    /// No URL was given, so nothing was requested.
    NotRequested,
    /// The request succeeded and matched no articles.
    NoMatches,
    /// One or more articles, in response order.
    Articles(Vec<Article>),
    /// Fetching or parsing failed.
    Failed(NewsError),
}

impl LoadOutcome {
    /// Collapse into the list shown to the user, surfacing failures as errors.
    ///
    /// `Ok(None)` only when nothing was requested.
    pub fn into_articles(self) -> Result<Option<Vec<Article>>> {
        match self {
            LoadOutcome::NotRequested => Ok(None),
            LoadOutcome::NoMatches => Ok(Some(Vec::new())),
            LoadOutcome::Articles(articles) => Ok(Some(articles)),
            LoadOutcome::Failed(e) => Err(e),
        }
    }
}

/// Loads the articles behind a single query URL.
#[derive(Debug)]
pub struct ArticleLoader<S> {
    source: Arc<S>,
    url: Option<String>,
}

impl<S: ArticleSource> ArticleLoader<S> {
    pub fn new(source: Arc<S>, url: Option<String>) -> Self {
        Self { source, url }
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Best-effort load.
    ///
    /// `None` when no URL was given or the response body was empty. Fetch and
    /// parse failures are logged and degrade to an empty or partial list.
    #[instrument(level = "info", skip_all, fields(url = ?self.url.as_deref().map(redact_url)))]
    pub async fn load(self) -> Option<Vec<Article>> {
        let Some(url) = self.url else {
            debug!("No URL; skipping request");
            return None;
        };
        let source = self.source;

        run_in_background(async move {
            let body = match source.fetch_text(&url).await {
                Ok(body) => body,
                Err(e) => {
                    log_fetch_failure(&e);
                    String::new()
                }
            };
            extract_articles(Some(&body))
        })
        .await
        .unwrap_or_else(|e| {
            error!(error = %e, "Background load failed");
            None
        })
    }

    /// Load with an explicit outcome instead of silent degradation.
    #[instrument(level = "info", skip_all, fields(url = ?self.url.as_deref().map(redact_url)))]
    pub async fn load_outcome(self) -> LoadOutcome {
        let Some(url) = self.url else {
            return LoadOutcome::NotRequested;
        };
        let source = self.source;

        let result = run_in_background(async move {
            let body = source.fetch_text(&url).await?;
            try_extract_articles(&body)
        })
        .await
        .and_then(|inner| inner);

        match result {
            Ok(articles) if articles.is_empty() => LoadOutcome::NoMatches,
            Ok(articles) => {
                info!(count = articles.len(), "Loaded articles");
                LoadOutcome::Articles(articles)
            }
            Err(e) => {
                error!(error = %e, "Load failed");
                LoadOutcome::Failed(e)
            }
        }
    }
}

/// Run `work` on its own task, inside the caller's span, and wait for its
/// single result.
async fn run_in_background<T, F>(work: F) -> Result<T>
where
    T: Send + 'static,
    F: Future<Output = T> + Send + 'static,
{
    let (tx, rx) = oneshot::channel();
    tokio::spawn(
        async move {
            let _ = tx.send(work.await);
        }
        .in_current_span(),
    );
    rx.await.map_err(|_| NewsError::Aborted)
}
