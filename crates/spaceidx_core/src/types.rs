//! Core type definitions.

use std::borrow::Borrow;
use std::fmt;

/// Name of a space (a cache or namespace of the grid).
///
/// The name is opaque: any string is accepted. The empty name denotes
/// the default (unnamed) space.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpaceName(String);

impl SpaceName {
    /// Creates a new space name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name of the default space.
    #[must_use]
    pub const fn default_space() -> Self {
        Self(String::new())
    }

    /// Returns the raw name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this names the default space.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the name and returns the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<&str> for SpaceName {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for SpaceName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<Option<&str>> for SpaceName {
    fn from(name: Option<&str>) -> Self {
        name.map(Self::from).unwrap_or_default()
    }
}

impl Borrow<str> for SpaceName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SpaceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SpaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_default() {
            f.write_str("space:<default>")
        } else {
            write!(f, "space:{}", self.0)
        }
    }
}
