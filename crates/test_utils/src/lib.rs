//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! retail store test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built users and bills for the common discount scenarios
//! - `builders`: Builder pattern for bill construction
//! - `assertions`: Custom assertion helpers for amounts
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
