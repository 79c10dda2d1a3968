//! Non-fatal observations gathered during introspection.

use std::fmt;

/// What was noticed about a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// An exported field asked for `get` or `set`; both were dropped.
    ExportedAccessor,
    /// A directive entry that is not `init`, `get` or `set`.
    UnknownKeyword(String),
    /// A struct with type parameters was skipped.
    GenericRecord,
}

/// A non-fatal diagnostic tied to a record and optionally one of its fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Record name.
    pub record: String,
    /// Field name, if the diagnostic concerns a single field.
    pub field: Option<String>,
    /// What happened.
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    /// Creates a field-level diagnostic.
    pub fn field(record: impl Into<String>, field: impl Into<String>, kind: DiagnosticKind) -> Self {
        Self {
            record: record.into(),
            field: Some(field.into()),
            kind,
        }
    }

    /// Creates a record-level diagnostic.
    pub fn record(record: impl Into<String>, kind: DiagnosticKind) -> Self {
        Self {
            record: record.into(),
            field: None,
            kind,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = self.field.as_deref().unwrap_or_default();
        match &self.kind {
            DiagnosticKind::ExportedAccessor => write!(
                f,
                "{field} in {} is public. Public fields do not require getter and setter.",
                self.record
            ),
            DiagnosticKind::UnknownKeyword(word) => write!(
                f,
                "{field} in {} has unknown directive keyword '{word}', ignoring",
                self.record
            ),
            DiagnosticKind::GenericRecord => write!(
                f,
                "{} has type parameters; generic structs are not supported, skipping",
                self.record
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_exported_accessor() {
        let d = Diagnostic::field("StaticImage", "Category", DiagnosticKind::ExportedAccessor);
        assert_eq!(
            d.to_string(),
            "Category in StaticImage is public. Public fields do not require getter and setter."
        );
    }

    #[test]
    fn test_display_generic_record() {
        let d = Diagnostic::record("Box", DiagnosticKind::GenericRecord);
        assert!(d.to_string().starts_with("Box has type parameters"));
        assert!(d.field.is_none());
    }
}
