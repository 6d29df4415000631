//! Error taxonomy for fetching and parsing Guardian search results.
//!
//! The lossy entry points ([`crate::fetcher::Fetcher::fetch`],
//! [`crate::parser::extract_articles`]) log these and degrade to empty
//! results. The strict entry points return them so callers can tell
//! "no matches" apart from "the request failed".

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NewsError {
    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("response with error code: {0}")]
    Status(u16),

    #[error("problem parsing the JSON results: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed result at index {index}: {source}")]
    Entry {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("background load was aborted before delivering a result")]
    Aborted,
}

pub type Result<T> = std::result::Result<T, NewsError>;
