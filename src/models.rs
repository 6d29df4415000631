//! Data models for Guardian articles and the search response they come from.
//!
//! This module defines:
//! - [`Article`]: one news item, immutable once built
//! - Wire types ([`SearchEnvelope`], [`SearchResponse`], [`SearchResult`],
//!   [`ContributorTag`]) matching the JSON returned by
//!   `https://content.guardianapis.com/search`
//!
//! The wire types use serde's `camelCase` renaming so the Rust fields stay
//! snake_case while matching keys such as `webPublicationDate`.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Separator placed between contributor names when an article has several.
pub const CONTRIBUTOR_SEPARATOR: &str = " & ";

/// A single news article.
///
/// Fields are private and only readable through accessors, so an `Article`
/// cannot change after construction. Equality is purely structural.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    title: String,
    section: String,
    /// Raw publication timestamp, e.g. `2018-05-24T10:00:00Z`.
    date: String,
    /// Contributor names joined by [`CONTRIBUTOR_SEPARATOR`], or `None`.
    author: Option<String>,
    url: String,
}

impl Article {
    pub fn new(
        title: impl Into<String>,
        section: impl Into<String>,
        date: impl Into<String>,
        author: Option<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            section: section.into(),
            date: date.into(),
            author,
            url: url.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Top-level object of a search response.
#[derive(Debug, Deserialize)]
pub struct SearchEnvelope<R> {
    pub response: SearchResponse<R>,
}

/// The `response` object. `R` is the element type of `results`, which lets the
/// parser keep entries as raw JSON and convert them one at a time.
#[derive(Debug, Deserialize)]
pub struct SearchResponse<R> {
    pub results: Vec<R>,
}

/// One entry of the `results` array. Keys not listed here are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub section_name: String,
    pub web_publication_date: String,
    pub web_url: String,
    pub web_title: String,
    pub tags: Vec<ContributorTag>,
}

/// A contributor tag, requested with `show-tags=contributor`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributorTag {
    pub web_title: String,
}

impl SearchResult {
    /// Contributor names in tag order, or `None` when there are no tags.
    pub fn contributors(&self) -> Option<String> {
        if self.tags.is_empty() {
            return None;
        }
        Some(
            self.tags
                .iter()
                .map(|tag| tag.web_title.as_str())
                .join(CONTRIBUTOR_SEPARATOR),
        )
    }
}

impl From<SearchResult> for Article {
    fn from(result: SearchResult) -> Self {
        let author = result.contributors();
        Article::new(
            result.web_title,
            result.section_name,
            result.web_publication_date,
            author,
            result.web_url,
        )
    }
}
