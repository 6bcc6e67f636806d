//! Per-space indexing configuration.

use crate::ident::IdentifierEscaping;
use crate::key::KeyStorage;
use crate::types::SpaceName;
use std::borrow::Cow;
use std::fmt;

/// Indexing settings for one space.
///
/// A configuration is assembled during setup, through
/// [`SpaceIndexingConfig::builder`] or the consuming `with_*` methods, and
/// is immutable afterwards. The engine receives it behind an `Arc` (see
/// [`SpaceRegistry`](crate::SpaceRegistry)), so it can be read concurrently
/// and can no longer change once handed off.
///
/// No field is validated. All flags default to `false`: binary key storage,
/// no forced indexing of primitive keys or values, no identifier escaping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SpaceIndexingConfig {
    name: SpaceName,
    index_primitive_key: bool,
    index_primitive_value: bool,
    index_fixed_typing: bool,
    escape_all: bool,
}

impl SpaceIndexingConfig {
    /// Creates a configuration for the named space with every flag off.
    #[must_use]
    pub fn new(name: impl Into<SpaceName>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Starts building a configuration.
    #[must_use]
    pub fn builder() -> SpaceIndexingConfigBuilder {
        SpaceIndexingConfigBuilder::default()
    }

    /// Returns the name of the space this configuration applies to.
    ///
    /// Empty for the default space.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the space name.
    #[must_use]
    pub fn space_name(&self) -> &SpaceName {
        &self.name
    }

    /// Returns true if this configures the default (unnamed) space.
    #[must_use]
    pub fn is_default_space(&self) -> bool {
        self.name.is_default()
    }

    /// Whether the key column is indexed even when keys are primitive.
    #[must_use]
    pub const fn index_primitive_key(&self) -> bool {
        self.index_primitive_key
    }

    /// Whether the value column is indexed even when values are primitive.
    #[must_use]
    pub const fn index_primitive_value(&self) -> bool {
        self.index_primitive_value
    }

    /// Whether all values of one type share a single key type.
    ///
    /// If `false`, keys are stored in binary form so that the same value type
    /// can be stored under keys of different types. The key column then
    /// cannot be indexed, and its use in query predicates is undefined.
    ///
    /// If `true`, keys are converted to their SQL type where possible, which
    /// makes the key column indexable and queryable.
    #[must_use]
    pub const fn index_fixed_typing(&self) -> bool {
        self.index_fixed_typing
    }

    /// Whether generated table and column names are wrapped in double quotes.
    ///
    /// Needed when a name is a reserved word or is not a valid bare
    /// identifier (e.g. contains a space or a hyphen). When set, queries
    /// written against the space must quote table and column names as well.
    #[must_use]
    pub const fn escape_all(&self) -> bool {
        self.escape_all
    }

    /// Returns the key storage strategy the engine must use.
    #[must_use]
    pub const fn key_storage(&self) -> KeyStorage {
        KeyStorage::from_fixed_typing(self.index_fixed_typing)
    }

    /// Returns true if the key column may appear in query predicates.
    ///
    /// When false, such predicates are not rejected here; their outcome is
    /// left to the engine.
    #[must_use]
    pub const fn key_column_queryable(&self) -> bool {
        self.key_storage().supports_predicates()
    }

    /// Returns the identifier escaping policy for generated SQL.
    #[must_use]
    pub const fn identifier_escaping(&self) -> IdentifierEscaping {
        IdentifierEscaping::from_escape_all(self.escape_all)
    }

    /// Renders a table or column name the way generated SQL for this space
    /// spells it.
    pub fn escape_identifier<'a>(&self, ident: &'a str) -> Cow<'a, str> {
        self.identifier_escaping().apply(ident)
    }

    /// Returns this configuration with a different space name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<SpaceName>) -> Self {
        self.name = name.into();
        self
    }

    /// Returns this configuration with primitive key indexing set.
    #[must_use]
    pub fn with_index_primitive_key(mut self, value: bool) -> Self {
        self.index_primitive_key = value;
        self
    }

    /// Returns this configuration with primitive value indexing set.
    #[must_use]
    pub fn with_index_primitive_value(mut self, value: bool) -> Self {
        self.index_primitive_value = value;
        self
    }

    /// Returns this configuration with fixed key typing set.
    #[must_use]
    pub fn with_index_fixed_typing(mut self, value: bool) -> Self {
        self.index_fixed_typing = value;
        self
    }

    /// Returns this configuration with identifier escaping set.
    #[must_use]
    pub fn with_escape_all(mut self, value: bool) -> Self {
        self.escape_all = value;
        self
    }
}

impl fmt::Display for SpaceIndexingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Name is debug-quoted so distinct configs never render alike.
        write!(
            f,
            "SpaceIndexingConfig [name={:?}, index_primitive_key={}, index_primitive_value={}, \
             index_fixed_typing={}, escape_all={}]",
            self.name.as_str(),
            self.index_primitive_key,
            self.index_primitive_value,
            self.index_fixed_typing,
            self.escape_all,
        )
    }
}

/// Builder for [`SpaceIndexingConfig`].
///
/// Setters may be called in any order and any number of times; the last
/// value wins.
#[derive(Debug, Clone, Default)]
pub struct SpaceIndexingConfigBuilder {
    config: SpaceIndexingConfig,
}

impl SpaceIndexingConfigBuilder {
    /// Sets the space name.
    #[must_use]
    pub fn name(mut self, name: impl Into<SpaceName>) -> Self {
        self.config.name = name.into();
        self
    }

    /// Sets whether primitive keys are indexed.
    #[must_use]
    pub fn index_primitive_key(mut self, value: bool) -> Self {
        self.config.index_primitive_key = value;
        self
    }

    /// Sets whether primitive values are indexed.
    #[must_use]
    pub fn index_primitive_value(mut self, value: bool) -> Self {
        self.config.index_primitive_value = value;
        self
    }

    /// Sets whether keys use a fixed SQL type.
    #[must_use]
    pub fn index_fixed_typing(mut self, value: bool) -> Self {
        self.config.index_fixed_typing = value;
        self
    }

    /// Sets whether all generated identifiers are quoted.
    #[must_use]
    pub fn escape_all(mut self, value: bool) -> Self {
        self.config.escape_all = value;
        self
    }

    /// Finishes the configuration.
    #[must_use]
    pub fn build(self) -> SpaceIndexingConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_config() {
        let config = SpaceIndexingConfig::default();
        assert_eq!(config.name(), "");
        assert!(config.is_default_space());
        assert!(!config.index_primitive_key());
        assert!(!config.index_primitive_value());
        assert!(!config.index_fixed_typing());
        assert!(!config.escape_all());
    }

    #[test]
    fn builder_sets_only_named_fields() {
        let config = SpaceIndexingConfig::builder()
            .name("cache1")
            .index_fixed_typing(true)
            .build();

        assert_eq!(config.name(), "cache1");
        assert!(config.index_fixed_typing());
        assert!(!config.index_primitive_key());
        assert!(!config.index_primitive_value());
        assert!(!config.escape_all());
    }

    #[test]
    fn builder_last_write_wins() {
        let config = SpaceIndexingConfig::builder()
            .escape_all(true)
            .name("a")
            .escape_all(false)
            .name("b")
            .build();

        assert_eq!(config.name(), "b");
        assert!(!config.escape_all());
    }

    #[test]
    fn with_methods_match_builder() {
        let built = SpaceIndexingConfig::builder()
            .name("orders")
            .index_primitive_key(true)
            .index_primitive_value(true)
            .index_fixed_typing(true)
            .escape_all(true)
            .build();

        let chained = SpaceIndexingConfig::new("orders")
            .with_index_primitive_key(true)
            .with_index_primitive_value(true)
            .with_index_fixed_typing(true)
            .with_escape_all(true);

        assert_eq!(built, chained);
    }

    #[test]
    fn display_lists_all_fields() {
        let config = SpaceIndexingConfig::builder()
            .name("orders")
            .index_primitive_key(true)
            .index_primitive_value(true)
            .index_fixed_typing(true)
            .escape_all(true)
            .build();

        assert_eq!(
            config.to_string(),
            "SpaceIndexingConfig [name=\"orders\", index_primitive_key=true, \
             index_primitive_value=true, index_fixed_typing=true, escape_all=true]"
        );
    }

    #[test]
    fn display_quotes_default_name() {
        let rendered = SpaceIndexingConfig::default().to_string();
        assert!(rendered.contains("name=\"\""));
        assert_eq!(rendered.matches("=false").count(), 4);
    }

    #[test]
    fn fixed_typing_drives_key_storage() {
        let config = SpaceIndexingConfig::new("cache1");
        assert_eq!(config.key_storage(), KeyStorage::Binary);
        assert!(!config.key_column_queryable());

        let config = config.with_index_fixed_typing(true);
        assert_eq!(config.key_storage(), KeyStorage::Typed);
        assert!(config.key_column_queryable());
    }

    #[test]
    fn escape_all_drives_identifiers() {
        let config = SpaceIndexingConfig::new("people");
        assert_eq!(config.identifier_escaping(), IdentifierEscaping::Bare);
        assert_eq!(config.escape_identifier("first-name"), "first_name");

        let config = config.with_escape_all(true);
        assert_eq!(config.identifier_escaping(), IdentifierEscaping::Quoted);
        assert_eq!(config.escape_identifier("first-name"), "\"first-name\"");
    }

    #[test]
    fn config_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SpaceIndexingConfig>();
    }

    proptest! {
        #[test]
        fn name_round_trips(name in ".*") {
            let config = SpaceIndexingConfig::default().with_name(name.clone());
            prop_assert_eq!(config.name(), name.as_str());
            prop_assert!(!config.index_primitive_key());
            prop_assert!(!config.escape_all());
        }

        #[test]
        fn display_is_deterministic(name in "[a-z\"\\\\ ]{0,8}", key in any::<bool>(), fixed in any::<bool>()) {
            let a = SpaceIndexingConfig::new(name.clone())
                .with_index_primitive_key(key)
                .with_index_fixed_typing(fixed);
            let b = a.clone();
            prop_assert_eq!(a.to_string(), b.to_string());
        }
    }
}
