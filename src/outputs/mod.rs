//! Presentation and export of loaded articles.
//!
//! - [`terminal`]: plain text listing written to stdout
//! - [`json`]: JSON export, one file per run
//!
//! ```text
//! json_output_dir/
//! └── 2018-05-24/
//!     ├── 081502.json
//!     └── 173000.json
//! ```

pub mod json;
pub mod terminal;
