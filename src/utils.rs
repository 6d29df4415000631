//! Small helpers shared across modules.
//!
//! - Date reformatting for display
//! - String truncation for log previews
//! - Output directory validation
//! - API key redaction for logged URLs

use crate::query::API_KEY_PARAM;
use chrono::NaiveDateTime;
use std::error::Error;
use std::fs as stdfs;
use tokio::fs;
use tracing::{info, instrument, warn};
use url::Url;

const REDACTED: &str = "REDACTED";

/// Timestamp format used by `webPublicationDate`.
pub const API_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Human readable date, e.g. `May 24, 2018`.
pub const DISPLAY_DATE_FORMAT: &str = "%b %d, %Y";

/// Reformat an API timestamp for display.
///
/// An unparseable timestamp is logged and rendered as an empty string.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(display_date("2018-05-24T10:00:00Z"), "May 24, 2018");
/// assert_eq!(display_date("yesterday"), "");
/// ```
pub fn display_date(raw: &str) -> String {
    match NaiveDateTime::parse_from_str(raw, API_DATE_FORMAT) {
        Ok(parsed) => parsed.format(DISPLAY_DATE_FORMAT).to_string(),
        Err(e) => {
            warn!(date = %raw, error = %e, "Problem with the date formatter");
            String::new()
        }
    }
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut to at most `max` bytes (on a character boundary) with
/// an ellipsis and the number of dropped bytes appended.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…(+{} bytes)", &s[..end], s.len() - end)
}

/// Copy of `url` safe to log: the `api-key` query value is replaced.
///
/// A string that does not parse as a URL keeps only the part before `?`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     redact_url("https://x/search?q=rust&api-key=secret"),
///     "https://x/search?q=rust&api-key=REDACTED"
/// );
/// ```
pub fn redact_url(url: &str) -> String {
    let Ok(mut parsed) = Url::parse(url) else {
        return match url.split_once('?') {
            Some((base, _)) => format!("{base}?{REDACTED}"),
            None => url.to_string(),
        };
    };
    if !parsed.query_pairs().any(|(key, _)| key == API_KEY_PARAM) {
        return parsed.into();
    }

    let pairs: Vec<(String, String)> = parsed
        .query_pairs()
        .map(|(key, value)| {
            let value = if key == API_KEY_PARAM {
                REDACTED.to_string()
            } else {
                value.into_owned()
            };
            (key.into_owned(), value)
        })
        .collect();
    parsed.query_pairs_mut().clear().extend_pairs(pairs);
    parsed.into()
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if needed, then writes and removes a probe file.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(path).await?;
    let probe_path = format!("{}/..__probe_write__", path.trim_end_matches('/'));
    stdfs::File::create(&probe_path)?;
    let _ = stdfs::remove_file(&probe_path);
    info!("Output directory is writable");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_date() {
        assert_eq!(display_date("2018-05-24T10:00:00Z"), "May 24, 2018");
        assert_eq!(display_date("2018-02-02T23:59:59Z"), "Feb 02, 2018");
    }

    #[test]
    fn test_display_date_unparseable() {
        assert_eq!(display_date(""), "");
        assert_eq!(display_date("2018-05-24"), "");
        assert_eq!(display_date("2018-05-24T10:00:00+01:00"), "");
    }

    #[test]
    fn test_truncate_for_log_short_string() {
        assert_eq!(truncate_for_log("Hello, world!", 100), "Hello, world!");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.ends_with("…(+400 bytes)"));
    }

    #[test]
    fn test_truncate_for_log_respects_char_boundary() {
        // "é" is two bytes; cutting at 1 would split it
        let result = truncate_for_log("éé", 1);
        assert_eq!(result, "…(+4 bytes)");
    }

    #[test]
    fn test_redact_url_masks_api_key() {
        assert_eq!(
            redact_url("https://content.guardianapis.com/search?q=rust&api-key=secret&show-tags=contributor"),
            "https://content.guardianapis.com/search?q=rust&api-key=REDACTED&show-tags=contributor"
        );
    }

    #[test]
    fn test_redact_url_without_key_is_unchanged() {
        assert_eq!(
            redact_url("https://content.guardianapis.com/search?q=rust"),
            "https://content.guardianapis.com/search?q=rust"
        );
    }

    #[test]
    fn test_redact_url_unparseable_drops_query() {
        assert_eq!(redact_url("nope?api-key=secret"), "nope?REDACTED");
        assert_eq!(redact_url("not a url"), "not a url");
    }

    #[tokio::test]
    async fn test_ensure_writable_dir_creates_nested() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a/b");
        let nested = nested.to_str().unwrap();
        ensure_writable_dir(nested).await.unwrap();
        assert!(std::path::Path::new(nested).is_dir());
    }
}
