//! Command-line interface definitions.
//!
//! Flags override the values read from the preferences file. The API key can
//! also come from the `GUARDIAN_API_KEY` environment variable.

use clap::Parser;

/// List the latest articles from the Guardian content API.
///
/// # Examples
///
/// ```sh
/// # Newest articles across all sections
/// guardian_news
///
/// # Technology articles mentioning Rust, also saved as JSON
/// guardian_news -s technology -q rust -j ./json
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to a config.yaml preferences file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Free text search term
    #[arg(short = 'q', long)]
    pub search: Option<String>,

    /// Section to filter by (e.g. technology), or "all"
    #[arg(short, long)]
    pub section: Option<String>,

    /// Result ordering: newest, oldest or relevance
    #[arg(long)]
    pub order_by: Option<String>,

    /// Guardian API key
    #[arg(long, env = "GUARDIAN_API_KEY")]
    pub api_key: Option<String>,

    /// Also write the loaded articles as JSON under this directory
    #[arg(short, long)]
    pub json_output_dir: Option<String>,

    /// Report fetch and parse failures and exit with an error instead of
    /// showing an empty list
    #[arg(long)]
    pub strict: bool,
}
