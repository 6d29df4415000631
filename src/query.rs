//! Construction of the Guardian search request URL.
//!
//! Example result:
//! `https://content.guardianapis.com/search?section=technology&order-by=newest&q=rust&show-tags=contributor&api-key=test`

use crate::config::Preferences;
use crate::error::{NewsError, Result};
use url::Url;

/// Query parameter carrying the API key.
pub const API_KEY_PARAM: &str = "api-key";

pub const GUARDIAN_SEARCH_URL: &str = "https://content.guardianapis.com/search";

/// Section value meaning "do not filter by section".
pub const ALL_SECTIONS: &str = "all";

/// Build the search URL for the given preferences.
///
/// `section` is only sent when it is not [`ALL_SECTIONS`], and `q` only when
/// the search term is non-empty. Contributor tags are always requested since
/// authors are read from them.
pub fn build_search_url(prefs: &Preferences) -> Result<String> {
    let mut url = Url::parse(&prefs.base_url).map_err(|source| NewsError::InvalidUrl {
        url: prefs.base_url.clone(),
        source,
    })?;

    {
        let mut pairs = url.query_pairs_mut();
        let section = prefs.section.trim();
        if !section.is_empty() && !section.eq_ignore_ascii_case(ALL_SECTIONS) {
            pairs.append_pair("section", section);
        }
        pairs.append_pair("order-by", &prefs.order_by);
        let term = prefs.search_term.trim();
        if !term.is_empty() {
            pairs.append_pair("q", term);
        }
        pairs.append_pair("show-tags", "contributor");
        pairs.append_pair(API_KEY_PARAM, &prefs.api_key);
    }

    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preferences() {
        let url = build_search_url(&Preferences::default()).unwrap();
        assert_eq!(
            url,
            "https://content.guardianapis.com/search?order-by=newest&show-tags=contributor&api-key=test"
        );
    }

    #[test]
    fn test_section_and_term() {
        let prefs = Preferences {
            section: "technology".to_string(),
            search_term: "rust".to_string(),
            ..Preferences::default()
        };
        assert_eq!(
            build_search_url(&prefs).unwrap(),
            "https://content.guardianapis.com/search?section=technology&order-by=newest&q=rust&show-tags=contributor&api-key=test"
        );
    }

    #[test]
    fn test_all_section_is_not_sent() {
        let prefs = Preferences {
            section: "ALL".to_string(),
            ..Preferences::default()
        };
        assert!(!build_search_url(&prefs).unwrap().contains("section="));
    }

    #[test]
    fn test_search_term_is_encoded() {
        let prefs = Preferences {
            search_term: "climate & energy".to_string(),
            ..Preferences::default()
        };
        let url = build_search_url(&prefs).unwrap();
        assert!(url.contains("q=climate+%26+energy"));
    }

    #[test]
    fn test_existing_query_is_kept() {
        let prefs = Preferences {
            base_url: "http://localhost:8080/search?page-size=5".to_string(),
            ..Preferences::default()
        };
        let url = build_search_url(&prefs).unwrap();
        assert!(url.starts_with("http://localhost:8080/search?page-size=5&order-by=newest"));
    }

    #[test]
    fn test_invalid_base_url() {
        let prefs = Preferences {
            base_url: "::nope".to_string(),
            ..Preferences::default()
        };
        assert!(matches!(
            build_search_url(&prefs),
            Err(NewsError::InvalidUrl { .. })
        ));
    }
}
