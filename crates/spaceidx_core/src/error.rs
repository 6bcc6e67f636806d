//! Error types for space registration.
//!
//! A [`SpaceIndexingConfig`](crate::SpaceIndexingConfig) never fails: it does
//! no validation. Errors only come from the [`SpaceRegistry`](crate::SpaceRegistry).

use thiserror::Error;

/// Result type for registry operations.
pub type IndexingResult<T> = Result<T, IndexingError>;

/// Errors that can occur while registering or looking up spaces.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexingError {
    /// A configuration for this space is already registered.
    #[error("space already configured: {name:?}")]
    DuplicateSpace {
        /// Name of the space.
        name: String,
    },

    /// No configuration is registered for this space.
    #[error("space not configured: {name:?}")]
    SpaceNotFound {
        /// Name of the space.
        name: String,
    },
}

impl IndexingError {
    /// Creates a duplicate space error.
    pub fn duplicate_space(name: impl Into<String>) -> Self {
        Self::DuplicateSpace { name: name.into() }
    }

    /// Creates a space not found error.
    pub fn space_not_found(name: impl Into<String>) -> Self {
        Self::SpaceNotFound { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_quote_names() {
        let err = IndexingError::duplicate_space("orders");
        assert_eq!(err.to_string(), "space already configured: \"orders\"");

        let err = IndexingError::space_not_found("");
        assert_eq!(err.to_string(), "space not configured: \"\"");
    }
}
