//! SQL identifier escaping.
//!
//! Table and column names generated for a space are rendered either bare or
//! wrapped in double quotes, depending on
//! [`SpaceIndexingConfig::escape_all`](crate::SpaceIndexingConfig::escape_all).
//!
//! Quoting is visible to callers: when a space escapes all identifiers,
//! hand-written queries against it must quote table and column names too.

use std::borrow::Cow;

/// How generated table and column identifiers are written into SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IdentifierEscaping {
    /// Identifiers are written bare. Characters that are not valid in a
    /// bare identifier are replaced with `_`.
    #[default]
    Bare,
    /// Every identifier is wrapped in double quotes, preserving reserved
    /// words and arbitrary characters.
    Quoted,
}

impl IdentifierEscaping {
    /// Returns the escaping policy for the given escape-all flag.
    #[must_use]
    pub const fn from_escape_all(escape_all: bool) -> Self {
        if escape_all {
            Self::Quoted
        } else {
            Self::Bare
        }
    }

    /// Renders an identifier under this policy.
    ///
    /// Borrows the input when it can be used as is.
    pub fn apply<'a>(self, ident: &'a str) -> Cow<'a, str> {
        match self {
            Self::Quoted => Cow::Owned(quote(ident)),
            Self::Bare if is_bare_identifier(ident) => Cow::Borrowed(ident),
            Self::Bare => Cow::Owned(sanitize(ident)),
        }
    }
}

/// Returns true if `ident` is usable unquoted: a letter or `_` followed by
/// letters, digits or `_`.
#[must_use]
pub fn is_bare_identifier(ident: &str) -> bool {
    let mut chars = ident.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

fn quote(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 2);
    out.push('"');
    for c in ident.chars() {
        // Embedded quotes are doubled.
        if c == '"' {
            out.push('"');
        }
        out.push(c);
    }
    out.push('"');
    out
}

fn sanitize(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 1);
    if !ident.starts_with(|c: char| c.is_alphabetic() || c == '_') {
        out.push('_');
    }
    out.extend(ident.chars().map(|c| {
        if c.is_alphanumeric() || c == '_' {
            c
        } else {
            '_'
        }
    }));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_all_selects_policy() {
        assert_eq!(
            IdentifierEscaping::from_escape_all(false),
            IdentifierEscaping::Bare
        );
        assert_eq!(
            IdentifierEscaping::from_escape_all(true),
            IdentifierEscaping::Quoted
        );
    }

    #[test]
    fn quoted_wraps_every_identifier() {
        let policy = IdentifierEscaping::Quoted;
        assert_eq!(policy.apply("Person"), "\"Person\"");
        assert_eq!(policy.apply("order"), "\"order\"");
        assert_eq!(policy.apply("first name"), "\"first name\"");
        assert_eq!(policy.apply(""), "\"\"");
    }

    #[test]
    fn quoted_doubles_embedded_quotes() {
        assert_eq!(IdentifierEscaping::Quoted.apply("a\"b"), "\"a\"\"b\"");
    }

    #[test]
    fn bare_borrows_valid_identifiers() {
        let out = IdentifierEscaping::Bare.apply("_key");
        assert!(matches!(out, Cow::Borrowed("_key")));
        assert_eq!(IdentifierEscaping::Bare.apply("Person2"), "Person2");
    }

    #[test]
    fn bare_replaces_invalid_characters() {
        let policy = IdentifierEscaping::Bare;
        assert_eq!(policy.apply("first name"), "first_name");
        assert_eq!(policy.apply("my-cache"), "my_cache");
        assert_eq!(policy.apply("1st"), "_1st");
        assert_eq!(policy.apply(""), "_");
    }

    #[test]
    fn bare_identifier_rules() {
        assert!(is_bare_identifier("_val"));
        assert!(is_bare_identifier("Person"));
        assert!(!is_bare_identifier(""));
        assert!(!is_bare_identifier("9lives"));
        assert!(!is_bare_identifier("a.b"));
    }
}
