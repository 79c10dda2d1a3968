//! Struct-tag lookup and generation directives.
//!
//! Tags follow the Go convention of space-separated `key:"value"` pairs. A
//! malformed tag simply stops the lookup, the same way `reflect.StructTag`
//! behaves, so a bad tag never aborts introspection.

/// Generation keywords requested through a struct tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directive {
    /// `init` was requested.
    pub init: bool,
    /// `get` was requested.
    pub get: bool,
    /// `set` was requested.
    pub set: bool,
    /// Entries that are not generation keywords.
    pub unknown: Vec<String>,
}

impl Directive {
    /// Parses a comma-separated directive value such as `init,get`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let mut directive = Self::default();
        for entry in value.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            match entry {
                "init" => directive.init = true,
                "get" => directive.get = true,
                "set" => directive.set = true,
                other => directive.unknown.push(other.to_string()),
            }
        }
        directive
    }

    /// Reads the directive stored under `key` in a raw tag body.
    #[must_use]
    pub fn from_tag(tag: &str, key: &str) -> Self {
        lookup(tag, key).map(|v| Self::parse(&v)).unwrap_or_default()
    }
}

/// Looks up `key` in a struct-tag body (delimiters already removed).
#[must_use]
pub fn lookup(tag: &str, key: &str) -> Option<String> {
    let mut rest = tag.as_bytes();
    loop {
        while let [b' ', tail @ ..] = rest {
            rest = tail;
        }
        if rest.is_empty() {
            return None;
        }

        let name_len = rest
            .iter()
            .position(|&b| b <= b' ' || b == b':' || b == b'"' || b == 0x7f)
            .unwrap_or(rest.len());
        if name_len == 0 || name_len + 1 >= rest.len() || rest[name_len] != b':' {
            return None;
        }
        if rest[name_len + 1] != b'"' {
            return None;
        }
        let name = &rest[..name_len];
        rest = &rest[name_len + 1..];

        let mut i = 1;
        while i < rest.len() && rest[i] != b'"' {
            if rest[i] == b'\\' {
                i += 1;
            }
            i += 1;
        }
        if i >= rest.len() {
            return None;
        }
        let quoted = &rest[..=i];
        rest = &rest[i + 1..];

        if name == key.as_bytes() {
            let quoted = std::str::from_utf8(quoted).ok()?;
            return unquote(quoted);
        }
    }
}

/// Removes the delimiters of a Go string literal and resolves its escapes.
///
/// Raw (backquoted) literals are returned verbatim minus carriage returns.
/// Returns `None` if the literal is not well formed.
#[must_use]
pub fn unquote(literal: &str) -> Option<String> {
    if let Some(raw) = literal
        .strip_prefix('`')
        .and_then(|s| s.strip_suffix('`'))
    {
        return Some(raw.replace('\r', ""));
    }

    let body = literal.strip_prefix('"')?.strip_suffix('"')?;
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let escaped = match chars.next()? {
            'a' => '\u{07}',
            'b' => '\u{08}',
            'f' => '\u{0c}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'v' => '\u{0b}',
            '\\' => '\\',
            '"' => '"',
            'x' => hex_char(&mut chars, 2)?,
            'u' => hex_char(&mut chars, 4)?,
            'U' => hex_char(&mut chars, 8)?,
            _ => return None,
        };
        out.push(escaped);
    }
    Some(out)
}

fn hex_char(chars: &mut std::str::Chars<'_>, digits: usize) -> Option<char> {
    let mut code = 0u32;
    for _ in 0..digits {
        code = code * 16 + chars.next()?.to_digit(16)?;
    }
    char::from_u32(code)
}
