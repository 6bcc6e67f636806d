//! Key storage strategy.

use std::fmt;

/// How the engine stores the implicit key column of a space.
///
/// Derived from
/// [`SpaceIndexingConfig::index_fixed_typing`](crate::SpaceIndexingConfig::index_fixed_typing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyStorage {
    /// Keys are stored in an opaque binary form.
    ///
    /// Values of the same type may have keys of different types. The key
    /// column cannot be indexed, and using it in a query predicate is
    /// undefined: the outcome is whatever the engine does.
    #[default]
    Binary,
    /// Keys are converted to a fixed relational type when possible.
    ///
    /// All keys for a given value type must have the same type. The key
    /// column can be indexed and used in predicates.
    Typed,
}

impl KeyStorage {
    /// Returns the storage strategy for the given fixed typing flag.
    #[must_use]
    pub const fn from_fixed_typing(fixed_typing: bool) -> Self {
        if fixed_typing {
            Self::Typed
        } else {
            Self::Binary
        }
    }

    /// Returns true if the key column can carry an index.
    #[must_use]
    pub const fn is_indexable(self) -> bool {
        matches!(self, Self::Typed)
    }

    /// Returns true if the key column has defined behavior in query predicates.
    #[must_use]
    pub const fn supports_predicates(self) -> bool {
        matches!(self, Self::Typed)
    }
}

impl fmt::Display for KeyStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binary => f.write_str("binary"),
            Self::Typed => f.write_str("typed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_typing_selects_storage() {
        assert_eq!(KeyStorage::from_fixed_typing(false), KeyStorage::Binary);
        assert_eq!(KeyStorage::from_fixed_typing(true), KeyStorage::Typed);
        assert_eq!(KeyStorage::default(), KeyStorage::Binary);
    }

    #[test]
    fn binary_keys_are_opaque() {
        assert!(!KeyStorage::Binary.is_indexable());
        assert!(!KeyStorage::Binary.supports_predicates());
        assert!(KeyStorage::Typed.is_indexable());
        assert!(KeyStorage::Typed.supports_predicates());
    }

    #[test]
    fn key_storage_display() {
        assert_eq!(KeyStorage::Binary.to_string(), "binary");
        assert_eq!(KeyStorage::Typed.to_string(), "typed");
    }
}
