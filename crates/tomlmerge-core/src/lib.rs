//! # tomlmerge-core
//!
//! Merges an ordered list of TOML documents into one and renders the result
//! back to TOML. Later documents override earlier ones:
//!
//! - **Tables** merge key by key, recursively.
//! - **Everything else** (arrays, strings, numbers, booleans, datetimes) is
//!   replaced as a whole by the later document. Two arrays at the same key are
//!   never concatenated or merged element by element.
//!
//! ## Quick start
//!
//! ```rust
//! use tomlmerge_core::{merge, MergeOptions};
//!
//! let base = "name = \"app\"\nplugins = [\"a\", \"b\"]\n[server]\nport = 80\nhost = \"0.0.0.0\"";
//! let prod = "plugins = [\"c\"]\n[server]\nport = 443";
//!
//! let merged = merge(&[base, prod], &MergeOptions::default()).unwrap();
//! assert_eq!(
//!     merged,
//!     "name = \"app\"\nplugins = [ \"c\" ]\n\n[server]\nport = 443\nhost = \"0.0.0.0\""
//! );
//! ```
//!
//! ## Modules
//!
//! - [`types`] — the `Value` / `Table` tree the merge operates on
//! - [`parser`] — TOML text → `Value`
//! - [`merge`] — the `combine` rule and the left-to-right document fold
//! - [`render`] — `Table` → TOML text, including the numeric rendering policy
//! - [`error`] — error types

pub mod error;
pub mod merge;
pub mod parser;
pub mod render;
pub mod types;

pub use error::{MergeError, ParseError};
pub use merge::{combine, merge_documents};
pub use parser::parse;
pub use render::{render, RenderOptions};
pub use types::{Datetime, Table, Value};

use tracing::debug;

/// Options for [`merge`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeOptions {
    /// Render every number with float syntax (`1` → `1.0`). When false, every
    /// integral number renders as a bare integer, including ones declared as
    /// floats (`1.0` → `1`).
    pub numbers_as_float: bool,
}

/// Merge TOML documents and render the result as TOML.
///
/// Every document is parsed before any merging happens; the first one that
/// fails to parse aborts the call with [`MergeError::Parse`] carrying its
/// 0-based index.
pub fn merge<S: AsRef<str>>(configs: &[S], options: &MergeOptions) -> error::Result<String> {
    let merged = merge_to_value(configs)?;
    let out = render(&merged, &RenderOptions::from(options))?;
    debug!(bytes = out.len(), "rendered merged document");
    Ok(out)
}

/// Parse and merge TOML documents without rendering.
pub fn merge_to_value<S: AsRef<str>>(configs: &[S]) -> error::Result<Table> {
    if configs.is_empty() {
        return Err(MergeError::EmptyInput);
    }
    debug!(documents = configs.len(), "parsing configs");

    let documents = configs
        .iter()
        .enumerate()
        .map(|(index, text)| {
            parse(text.as_ref()).map_err(|source| MergeError::Parse { index, source })
        })
        .collect::<error::Result<Vec<Value>>>()?;

    merge_documents(documents)
}
