//! Naming-convention visibility of Go identifiers.

/// Visibility implied by an identifier's spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Leading underscore or lowercase letter; wrapped by accessors.
    Private,
    /// Anything else, including the empty name.
    Exported,
}

impl Visibility {
    /// Classifies a field name.
    #[must_use]
    pub fn of(name: &str) -> Self {
        match name.chars().next() {
            Some(c) if c == '_' || c.is_lowercase() => Self::Private,
            _ => Self::Exported,
        }
    }

    /// Returns true for implementation-private names.
    #[must_use]
    pub const fn is_private(self) -> bool {
        matches!(self, Self::Private)
    }
}
