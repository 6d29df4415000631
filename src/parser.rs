//! Conversion of a Guardian search response body into [`Article`]s.
//!
//! The `results` array is first read as raw JSON values and each entry is
//! then deserialized on its own. That keeps the entries preceding a malformed
//! one, which is what the best-effort [`extract_articles`] returns.

use crate::error::{NewsError, Result};
use crate::models::{Article, SearchEnvelope, SearchResult};
use crate::utils::truncate_for_log;
use serde_json::Value;
use tracing::{debug, error, instrument};

/// Best-effort extraction.
///
/// Returns `None` for an absent or empty body, which means "nothing to show"
/// and is distinct from an empty list. Any structural problem is logged and
/// the articles parsed before it are returned, in input order.
#[instrument(level = "debug", skip_all, fields(bytes = json.map_or(0, str::len)))]
pub fn extract_articles(json: Option<&str>) -> Option<Vec<Article>> {
    let json = match json {
        Some(body) if !body.is_empty() => body,
        _ => {
            debug!("Empty response body; nothing to parse");
            return None;
        }
    };

    let mut articles = Vec::new();
    if let Err(e) = collect_articles(json, &mut articles) {
        error!(
            error = %e,
            parsed = articles.len(),
            body_preview = %truncate_for_log(json, 200),
            "Problem parsing the JSON results"
        );
    }
    Some(articles)
}

/// Strict extraction: the first structural problem is returned as an error.
pub fn try_extract_articles(json: &str) -> Result<Vec<Article>> {
    let mut articles = Vec::new();
    collect_articles(json, &mut articles)?;
    Ok(articles)
}

fn collect_articles(json: &str, articles: &mut Vec<Article>) -> Result<()> {
    let envelope: SearchEnvelope<Value> = serde_json::from_str(json)?;
    for (index, entry) in envelope.response.results.into_iter().enumerate() {
        let result: SearchResult =
            serde_json::from_value(entry).map_err(|source| NewsError::Entry { index, source })?;
        articles.push(Article::from(result));
    }
    debug!(count = articles.len(), "Extracted articles");
    Ok(())
}
