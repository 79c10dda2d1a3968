//! Post-processing of the written file with external Go tools.

use crate::error::Error;
use std::path::Path;
use std::process::Command;

/// External pass run over the destination after it is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PostFormat {
    /// Leave the file as rendered.
    #[default]
    None,
    /// `gofmt -w`: canonical layout only.
    Gofmt,
    /// `goimports -w`: canonical layout, and imports the generated
    /// declarations do not use are removed.
    Goimports,
}

impl PostFormat {
    /// Program invoked for this pass, if any.
    #[must_use]
    pub const fn program(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Gofmt => Some("gofmt"),
            Self::Goimports => Some("goimports"),
        }
    }

    /// Runs the pass over `path`.
    ///
    /// # Errors
    /// Returns `Error::Format` if the tool cannot be started or reports an
    /// error.
    pub fn apply(self, path: &Path) -> Result<(), Error> {
        match self.program() {
            Some(program) => rewrite_with(program, path),
            None => Ok(()),
        }
    }
}

/// Runs the given gofmt-compatible program with `-w` on a file.
///
/// # Errors
/// Returns `Error::Format` if the program cannot be started or exits non-zero.
pub fn rewrite_with(program: &str, path: &Path) -> Result<(), Error> {
    tracing::debug!("running {} -w {}", program, path.display());
    let output = Command::new(program)
        .arg("-w")
        .arg(path)
        .output()
        .map_err(|e| Error::format(format!("{program}: {e}")))?;

    if output.status.success() {
        Ok(())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(Error::format(format!(
            "{program} exited with {}: {}",
            output.status,
            stderr.trim()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_programs() {
        assert_eq!(PostFormat::None.program(), None);
        assert_eq!(PostFormat::Gofmt.program(), Some("gofmt"));
        assert_eq!(PostFormat::Goimports.program(), Some("goimports"));
        assert_eq!(PostFormat::default(), PostFormat::None);
    }

    #[test]
    fn test_none_leaves_file_alone() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("out.go");
        std::fs::write(&path, "package p\n").expect("Failed to write file");

        PostFormat::None.apply(&path).expect("Failed to apply");
        assert_eq!(
            std::fs::read_to_string(&path).expect("Failed to read file"),
            "package p\n"
        );
    }

    #[test]
    fn test_missing_program() {
        let err = rewrite_with("gosmith-no-such-formatter", Path::new("out.go")).unwrap_err();
        assert!(matches!(err, Error::Format { .. }));
        assert!(err.to_string().contains("gosmith-no-such-formatter"));
    }
}
