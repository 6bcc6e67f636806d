//! Property-based test generators using proptest.

use proptest::prelude::*;
use spaceidx_core::SpaceIndexingConfig;

/// Strategy for generating space names.
///
/// Names are opaque, so this includes the default (empty) name, reserved
/// words and characters that are not valid in bare SQL identifiers.
pub fn space_name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        1 => Just(String::new()),
        2 => prop::sample::select(vec!["order", "select", "my cache", "a-b", "\"quoted\""])
            .prop_map(str::to_owned),
        5 => prop::string::string_regex("[a-zA-Z_][a-zA-Z0-9_ \\-\"]{0,15}").expect("Invalid regex"),
    ]
}

/// A full assignment of the settings of a space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAssignment {
    /// Space name.
    pub name: String,
    /// Primitive key indexing.
    pub index_primitive_key: bool,
    /// Primitive value indexing.
    pub index_primitive_value: bool,
    /// Fixed key typing.
    pub index_fixed_typing: bool,
    /// Identifier escaping.
    pub escape_all: bool,
}

impl FieldAssignment {
    /// Builds the configuration carrying exactly these values.
    #[must_use]
    pub fn build(&self) -> SpaceIndexingConfig {
        SpaceIndexingConfig::builder()
            .name(self.name.as_str())
            .index_primitive_key(self.index_primitive_key)
            .index_primitive_value(self.index_primitive_value)
            .index_fixed_typing(self.index_fixed_typing)
            .escape_all(self.escape_all)
            .build()
    }
}

/// Strategy for generating field assignments.
pub fn field_assignment_strategy() -> impl Strategy<Value = FieldAssignment> {
    (
        space_name_strategy(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(name, index_primitive_key, index_primitive_value, index_fixed_typing, escape_all)| {
                FieldAssignment {
                    name,
                    index_primitive_key,
                    index_primitive_value,
                    index_fixed_typing,
                    escape_all,
                }
            },
        )
}

/// Strategy for generating configurations.
pub fn config_strategy() -> impl Strategy<Value = SpaceIndexingConfig> {
    field_assignment_strategy().prop_map(|fields| fields.build())
}

/// A single setter call on a configuration.
#[derive(Debug, Clone)]
pub enum SetterCall {
    /// Set the space name.
    Name(String),
    /// Set primitive key indexing.
    IndexPrimitiveKey(bool),
    /// Set primitive value indexing.
    IndexPrimitiveValue(bool),
    /// Set fixed key typing.
    IndexFixedTyping(bool),
    /// Set identifier escaping.
    EscapeAll(bool),
}

impl SetterCall {
    /// Applies the call to a configuration.
    #[must_use]
    pub fn apply(self, config: SpaceIndexingConfig) -> SpaceIndexingConfig {
        match self {
            Self::Name(name) => config.with_name(name),
            Self::IndexPrimitiveKey(v) => config.with_index_primitive_key(v),
            Self::IndexPrimitiveValue(v) => config.with_index_primitive_value(v),
            Self::IndexFixedTyping(v) => config.with_index_fixed_typing(v),
            Self::EscapeAll(v) => config.with_escape_all(v),
        }
    }
}

/// Strategy for generating setter calls.
pub fn setter_call_strategy() -> impl Strategy<Value = SetterCall> {
    prop_oneof![
        space_name_strategy().prop_map(SetterCall::Name),
        any::<bool>().prop_map(SetterCall::IndexPrimitiveKey),
        any::<bool>().prop_map(SetterCall::IndexPrimitiveValue),
        any::<bool>().prop_map(SetterCall::IndexFixedTyping),
        any::<bool>().prop_map(SetterCall::EscapeAll),
    ]
}

/// Configuration for property tests.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Number of test cases to run.
    pub cases: u32,
    /// Maximum shrink iterations.
    pub max_shrink_iters: u32,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_shrink_iters: 1000,
        }
    }
}

impl PropTestConfig {
    /// Creates a configuration for quick tests.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_shrink_iters: 100,
        }
    }

    /// Converts to proptest config.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            ..ProptestConfig::default()
        }
    }
}
