//! HTTP retrieval of Guardian search responses.
//!
//! One GET per call, no retries. Only status `200` counts as success.
//!
//! # Timeouts
//!
//! - Connect: 15 seconds
//! - Read: 10 seconds (per read, reset after every successful read)

use crate::error::{NewsError, Result};
use crate::utils::redact_url;
use reqwest::{Client, StatusCode};
use std::time::{Duration, Instant};
use tracing::{debug, error, info, instrument};
use url::Url;

pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_millis(15_000);
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_millis(10_000);

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Performs single GET requests and returns the body as text.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Build a fetcher with explicit connect and read timeouts.
    pub fn new(connect_timeout: Duration, read_timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .read_timeout(read_timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }

    /// Fetch `url`, returning the body or a typed error.
    ///
    /// A non-200 response is dropped unread, which releases its connection.
    /// The URL is only ever logged with its API key redacted.
    #[instrument(level = "info", skip_all, fields(url = %redact_url(url)))]
    pub async fn try_fetch(&self, url: &str) -> Result<String> {
        let parsed = Url::parse(url).map_err(|source| NewsError::InvalidUrl {
            url: redact_url(url),
            source,
        })?;

        let t0 = Instant::now();
        let response = self.client.get(parsed).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(NewsError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        info!(
            bytes = body.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Fetched response body"
        );
        Ok(body)
    }

    /// Fetch `url`, logging any failure and returning an empty body instead.
    pub async fn fetch(&self, url: &str) -> String {
        match self.try_fetch(url).await {
            Ok(body) => body,
            Err(e) => {
                log_fetch_failure(&e);
                debug!(url = %redact_url(url), "Returning empty body");
                String::new()
            }
        }
    }
}

/// Log a failed fetch with a message matching its kind.
pub(crate) fn log_fetch_failure(e: &NewsError) {
    match e {
        NewsError::InvalidUrl { .. } => error!(error = %e, "Error with creating URL"),
        NewsError::Status(code) => error!(code = *code, "Response with error code"),
        _ => error!(error = %e, "Problem retrieving the articles JSON result"),
    }
}
