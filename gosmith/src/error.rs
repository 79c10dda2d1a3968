//! Top-level error type.

use thiserror::Error;

/// Error type for a full generation run.
#[derive(Debug, Error)]
pub enum Error {
    /// The source could not be introspected.
    #[error("failed to parse src: {0}")]
    Parse(#[from] gosmith_schema::ParseError),

    /// The companion file could not be written.
    #[error("failed to write file: {0}")]
    Write(#[from] gosmith_codegen::WriteError),

    /// The external formatter failed.
    #[error("failed to format file: {message}")]
    Format {
        /// Formatter output or spawn error.
        message: String,
    },
}

impl Error {
    /// Creates a format error with the given message.
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format {
            message: message.into(),
        }
    }
}
