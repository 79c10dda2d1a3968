//! Error types for code synthesis.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for synthesis operations.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The destination could not be created or written.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        /// Destination path.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The declaration tree cannot be printed as valid Go.
    ///
    /// This indicates a model that broke the introspector's invariants.
    #[error("render error: {message}")]
    Render {
        /// Error message.
        message: String,
    },
}

impl WriteError {
    /// Creates an IO error for the given destination.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a render error with the given message.
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_io_display_and_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied");
        let err = WriteError::io("/readonly/out.go", io);
        assert_eq!(
            err.to_string(),
            "failed to write /readonly/out.go: permission denied"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_render_display() {
        let err = WriteError::render("empty identifier");
        assert_eq!(err.to_string(), "render error: empty identifier");
        assert!(err.source().is_none());
    }
}
