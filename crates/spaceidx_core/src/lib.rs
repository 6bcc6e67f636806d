//! # spaceidx core
//!
//! Per-space configuration for the SQL indexing engine of a data grid.
//!
//! Every space (a named cache or namespace) can tune how its entries are
//! indexed and how generated SQL identifiers are escaped. This crate
//! provides:
//! - [`SpaceIndexingConfig`], the immutable per-space settings, and its builder
//! - [`KeyStorage`] and [`IdentifierEscaping`], the decisions an engine
//!   derives from those settings
//! - [`SpaceRegistry`], the per-space lookup table handed to the engine
//!
//! ## Example
//!
//! ```rust
//! use spaceidx_core::{KeyStorage, SpaceIndexingConfig, SpaceRegistry};
//!
//! let config = SpaceIndexingConfig::builder()
//!     .name("orders")
//!     .index_fixed_typing(true)
//!     .escape_all(true)
//!     .build();
//!
//! let registry = SpaceRegistry::new();
//! registry.register(config).unwrap();
//!
//! let orders = registry.resolve("orders");
//! assert_eq!(orders.key_storage(), KeyStorage::Typed);
//! assert_eq!(orders.escape_identifier("order"), "\"order\"");
//! ```
//!
//! ## Undefined combinations
//!
//! With `index_fixed_typing` disabled, keys are stored in binary form and
//! the implicit key column cannot be indexed. Using it in a query predicate
//! is undefined: the engine decides what happens, and nothing in this crate
//! rejects such a query.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod ident;
mod key;
mod registry;
mod types;

pub use config::{SpaceIndexingConfig, SpaceIndexingConfigBuilder};
pub use error::{IndexingError, IndexingResult};
pub use ident::{is_bare_identifier, IdentifierEscaping};
pub use key::KeyStorage;
pub use registry::SpaceRegistry;
pub use types::SpaceName;
