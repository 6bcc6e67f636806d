//! # spaceidx testkit
//!
//! Test utilities for spaceidx.
//!
//! This crate provides:
//! - Property-based test generators using proptest
//! - Configuration fixtures and registry helpers
//! - Tracing setup for tests
//!
//! ## Usage
//!
//! ```rust
//! use spaceidx_testkit::prelude::*;
//!
//! let registry = registry_with(&["orders", "people"]);
//! assert_eq!(registry.len(), 2);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
}

pub use fixtures::*;
pub use generators::*;
