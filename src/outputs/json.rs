//! JSON export of loaded articles.
//!
//! Files are grouped by local date and named after the local time of the run,
//! so repeated runs on the same day never overwrite each other.

use crate::models::Article;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::error::Error;
use std::path::PathBuf;
use tokio::fs;
use tracing::{error, info, instrument};

#[derive(Debug, Serialize)]
struct Export<'a> {
    fetched_at: String,
    query_url: &'a str,
    articles: &'a [Article],
}

/// Write `articles` to `{json_output_dir}/{YYYY-MM-DD}/{HHMMSS}.json`.
///
/// Returns the path of the written file.
#[instrument(level = "info", skip_all, fields(json_output_dir = %json_output_dir, count = articles.len()))]
pub async fn write_articles(
    articles: &[Article],
    query_url: &str,
    json_output_dir: &str,
    now: DateTime<Local>,
) -> Result<PathBuf, Box<dyn Error>> {
    let export = Export {
        fetched_at: now.to_rfc3339(),
        query_url,
        articles,
    };
    let json = serde_json::to_string_pretty(&export)?;

    let dir = PathBuf::from(json_output_dir).join(now.format("%Y-%m-%d").to_string());
    info!(dir = %dir.display(), "Ensuring JSON directory exists");
    if let Err(e) = fs::create_dir_all(&dir).await {
        error!(dir = %dir.display(), error = %e, "Failed to create JSON dir");
        return Err(e.into());
    }

    let path = dir.join(format!("{}.json", now.format("%H%M%S")));
    fs::write(&path, json).await?;
    info!(path = %path.display(), "Wrote JSON export");
    Ok(path)
}
