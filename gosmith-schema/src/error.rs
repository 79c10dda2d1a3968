//! Error types for source introspection.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for introspection operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The source text is not valid Go.
    #[error("{origin}:{line}:{column}: {message}")]
    Syntax {
        /// Where the source came from (file path or caller-supplied label).
        origin: String,
        /// 1-based line of the first offending token.
        line: usize,
        /// 1-based column of the first offending token.
        column: usize,
        /// Parser message.
        message: String,
    },

    /// The source file could not be read.
    #[error("open {}: {source}", path.display())]
    Io {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The Go grammar could not be loaded into the parser.
    #[error("failed to load Go grammar: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),
}

impl ParseError {
    /// Creates a syntax error.
    pub fn syntax(
        origin: impl Into<String>,
        line: usize,
        column: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::Syntax {
            origin: origin.into(),
            line,
            column,
            message: message.into(),
        }
    }

    /// Creates an IO error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
