//! Request handlers

pub mod discount;
pub mod health;
