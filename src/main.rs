//! # Guardian News
//!
//! Fetches the latest articles from the Guardian content API and lists them
//! in the terminal: section, publication date, headline, contributors and
//! link.
//!
//! ## Usage
//!
//! ```sh
//! guardian_news -s technology -q rust
//! ```
//!
//! ## Flow
//!
//! 1. **Preferences**: read `config.yaml`, then apply command-line overrides
//! 2. **Query**: build the search URL
//! 3. **Load**: fetch and parse on a background task
//! 4. **Output**: print the list (or the empty state) and optionally export JSON
//!
//! Logs go to stderr; stdout only carries the article list.

use chrono::Local;
use clap::Parser;
use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod error;
mod fetcher;
mod loader;
mod models;
mod outputs;
mod parser;
mod query;
#[cfg(test)]
mod test_support;
mod utils;

use cli::Cli;
use config::{Preferences, default_config_path};
use fetcher::Fetcher;
use loader::ArticleLoader;
use models::Article;
use outputs::{json, terminal};
use query::build_search_url;
use utils::{ensure_writable_dir, redact_url};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("guardian_news starting up");

    let args = Cli::parse();
    debug!(
        config = ?args.config,
        search = ?args.search,
        section = ?args.section,
        order_by = ?args.order_by,
        api_key_set = args.api_key.is_some(),
        json_output_dir = ?args.json_output_dir,
        strict = args.strict,
        "Parsed CLI arguments"
    );

    // ---- Preferences ----
    let config_path = args
        .config
        .as_ref()
        .map(PathBuf::from)
        .or_else(default_config_path);
    let mut prefs = match &config_path {
        Some(path) => Preferences::load(path).await?,
        None => {
            warn!("No config directory available; using default preferences");
            Preferences::default()
        }
    };
    prefs.apply_cli(&args);
    info!(
        section = %prefs.section,
        search_term = %prefs.search_term,
        order_by = %prefs.order_by,
        "Preferences resolved"
    );

    // ---- Query ----
    let query_url = match build_search_url(&prefs) {
        Ok(url) => Some(url),
        Err(e) if args.strict => return Err(e.into()),
        Err(e) => {
            error!(error = %e, "Error with creating URL");
            None
        }
    };

    // ---- Load ----
    let fetcher = Arc::new(Fetcher::new(prefs.connect_timeout(), prefs.read_timeout())?);
    let loader = ArticleLoader::new(fetcher, query_url.clone());
    debug!(url = ?loader.url().map(redact_url), "Starting article load");

    let articles: Option<Vec<Article>> = if args.strict {
        loader.load_outcome().await.into_articles()?
    } else {
        loader.load().await
    };
    info!(
        count = articles.as_ref().map_or(0, Vec::len),
        "Articles loaded"
    );

    // ---- Output ----
    print!("{}", terminal::render_list(articles.as_deref()));

    if let (Some(dir), Some(articles), Some(url)) =
        (&args.json_output_dir, &articles, &query_url)
    {
        ensure_writable_dir(dir).await?;
        if let Err(e) = json::write_articles(articles, url, dir, Local::now()).await {
            error!(error = %e, "Failed to write JSON export");
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
