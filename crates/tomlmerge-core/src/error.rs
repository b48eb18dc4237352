//! Error types for parsing, merging and rendering.

use std::fmt;
use thiserror::Error;

/// Errors that can occur while merging TOML documents.
#[derive(Error, Debug)]
pub enum MergeError {
    /// `merge` was called with no documents.
    #[error("No configs provided")]
    EmptyInput,

    /// The document at `index` (0-based, in input order) is not valid TOML.
    #[error("Failed to parse config at index {index}: {source}")]
    Parse {
        index: usize,
        #[source]
        source: ParseError,
    },

    /// The document at `index` parsed, but its top level is not a table.
    #[error("Config at index {index} is not a table (found {found})")]
    InvalidRootShape { index: usize, found: &'static str },

    /// The merged tree nests deeper than the renderer's `max_depth`.
    #[error("Render error: maximum nesting depth of {max_depth} exceeded")]
    DepthExceeded { max_depth: usize },

    /// The merged tree could not be rendered.
    #[error("Render error: {0}")]
    Render(String),
}

impl MergeError {
    /// Index of the offending document, when the error concerns one.
    pub fn index(&self) -> Option<usize> {
        match self {
            MergeError::Parse { index, .. } | MergeError::InvalidRootShape { index, .. } => {
                Some(*index)
            }
            MergeError::EmptyInput
            | MergeError::DepthExceeded { .. }
            | MergeError::Render(_) => None,
        }
    }
}

/// A TOML syntax error reported by the parser.
///
/// `line` and `column` are 1-based and present when the parser reported where
/// the error is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub line: Option<usize>,
    pub column: Option<usize>,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.line, self.column) {
            (Some(line), Some(column)) => {
                write!(f, "Invalid TOML at line {line}, column {column}: {}", self.message)
            }
            _ => write!(f, "Invalid TOML: {}", self.message),
        }
    }
}

impl std::error::Error for ParseError {}

/// Convenience alias used throughout tomlmerge-core.
pub type Result<T> = std::result::Result<T, MergeError>;
