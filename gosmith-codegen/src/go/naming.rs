//! Names of generated declarations.

/// Upper-cases the first character.
#[must_use]
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Constructor name, `New<Record>`; empty for an empty record name.
#[must_use]
pub fn constructor_name(record: &str) -> String {
    if record.is_empty() {
        return String::new();
    }
    format!("New{}", upper_first(record))
}

/// Getter name; empty for an empty field name.
#[must_use]
pub fn getter_name(field: &str) -> String {
    upper_first(field)
}

/// Setter name, `Set<Field>`; empty for an empty field name.
#[must_use]
pub fn setter_name(field: &str) -> String {
    if field.is_empty() {
        return String::new();
    }
    format!("Set{}", upper_first(field))
}

/// Constructor parameter name, distinct from the field it fills.
#[must_use]
pub fn param_name(field: &str) -> String {
    format!("m{}", upper_first(field))
}

/// Receiver variable, the lower-cased first character of the record name.
#[must_use]
pub fn receiver_name(record: &str) -> String {
    record
        .chars()
        .next()
        .map(|c| c.to_lowercase().collect())
        .unwrap_or_default()
}

/// Returns true if `s` is a Go identifier.
#[must_use]
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_alphabetic() => {
            chars.all(|c| c == '_' || c.is_alphanumeric())
        }
        _ => false,
    }
}
