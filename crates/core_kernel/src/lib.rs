//! Core Kernel - Foundational types shared by the retail store crates
//!
//! - Validated monetary amounts and percentage rates
//! - Typed identifiers for bills and users
//! - The kernel error type

pub mod money;
pub mod identifiers;
pub mod error;

pub use money::{Amount, Rate};
pub use identifiers::{BillId, UserId};
pub use error::CoreError;
