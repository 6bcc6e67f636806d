//! Test fixtures and registry helpers.

use spaceidx_core::{SpaceIndexingConfig, SpaceRegistry};
use std::sync::Once;
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Installs a tracing subscriber for tests.
///
/// Honors `RUST_LOG`, defaulting to `debug`. Safe to call from every test.
pub fn init_test_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Configuration with every flag enabled.
#[must_use]
pub fn all_flags_config(name: &str) -> SpaceIndexingConfig {
    SpaceIndexingConfig::builder()
        .name(name)
        .index_primitive_key(true)
        .index_primitive_value(true)
        .index_fixed_typing(true)
        .escape_all(true)
        .build()
}

/// Configuration for a space keyed by a single SQL type, with primitive
/// keys indexed.
#[must_use]
pub fn typed_keys_config(name: &str) -> SpaceIndexingConfig {
    SpaceIndexingConfig::builder()
        .name(name)
        .index_primitive_key(true)
        .index_fixed_typing(true)
        .build()
}

/// Creates a registry with a default configuration for each name.
///
/// # Panics
///
/// Panics if a name is repeated.
#[must_use]
pub fn registry_with(names: &[&str]) -> SpaceRegistry {
    SpaceRegistry::with_configs(names.iter().map(|name| SpaceIndexingConfig::new(*name)))
        .expect("Failed to build registry")
}
