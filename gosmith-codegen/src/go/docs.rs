//! Doc comments for generated declarations.

/// Doc comment of a constructor.
#[must_use]
pub fn constructor_doc(func_name: &str, record: &str) -> Vec<String> {
    vec![format!("// {func_name} is constructor for {record}")]
}

/// Doc comment of an accessor, derived from the field's own comment.
///
/// Go doc comments start with the name of the documented item, so the first
/// line's leading `// <field> `, `// ` or `//` is replaced by
/// `// <func_name> `. Remaining lines are copied as they are. A field without
/// comments gets a bare `// <func_name>`.
#[must_use]
pub fn accessor_doc(lines: &[String], func_name: &str, field: &str) -> Vec<String> {
    let Some((first, rest)) = lines.split_first() else {
        return vec![format!("// {func_name}")];
    };

    let prefixes = [format!("// {field} "), "// ".to_string(), "//".to_string()];
    let first = prefixes
        .iter()
        .find_map(|p| first.strip_prefix(p.as_str()))
        .map_or_else(
            || first.clone(),
            |tail| format!("// {func_name} {tail}").trim_end().to_string(),
        );

    std::iter::once(first).chain(rest.iter().cloned()).collect()
}
