//! Discount Domain - Net Payable Amount Calculation
//!
//! This crate computes what a customer actually pays for a bill.
//!
//! # Discount Rules
//!
//! Applied in order for a single bill:
//! - **Role-based**: employees get 30%, affiliates 10% (non-grocery bills only)
//! - **Tenure-based**: 5% for customers of more than two years, only when no
//!   role-based discount applied (non-grocery bills only)
//! - **Secondary**: bills over 100 get a further 5 per 100 spent, groceries included
//!
//! The net amount is the bill amount minus all discounts, never below zero.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_discount::{Bill, User, UserRole, DiscountService, DiscountServiceImpl};
//!
//! let bill = Bill::new(200.0, false, User::new(UserRole::Employee, false));
//! let net = DiscountServiceImpl::new().calculate_net_payable_amount(&bill)?;
//! assert_eq!(net.value(), 130.0);
//! ```

pub mod bill;
pub mod net_amount;
pub mod rules;
pub mod service;
pub mod error;

pub use bill::{Bill, User, UserRole};
pub use net_amount::NetAmount;
pub use service::{DiscountBreakdown, DiscountService, DiscountServiceImpl};
pub use error::DiscountError;
