//! Test Data Builders
//!
//! Builder patterns for constructing bills with sensible defaults. Tests set
//! only the fields relevant to the scenario.

use core_kernel::{BillId, UserId};
use domain_discount::{Bill, User, UserRole};

/// Builder for constructing test bills
///
/// Defaults to a non-grocery bill of 100 for a new, regular customer, which
/// receives no discount at all.
pub struct TestBillBuilder {
    id: Option<BillId>,
    amount: f64,
    is_groceries: bool,
    user_id: Option<UserId>,
    role: UserRole,
    is_customer_over_two_years: bool,
}

impl Default for TestBillBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBillBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: None,
            amount: 100.0,
            is_groceries: false,
            user_id: None,
            role: UserRole::Other,
            is_customer_over_two_years: false,
        }
    }

    /// Sets the bill amount
    pub fn with_amount(mut self, amount: f64) -> Self {
        self.amount = amount;
        self
    }

    /// Marks the bill as groceries
    pub fn groceries(mut self) -> Self {
        self.is_groceries = true;
        self
    }

    /// Sets the purchaser's role
    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }

    /// Marks the purchaser as a customer of more than two years
    pub fn loyal(mut self) -> Self {
        self.is_customer_over_two_years = true;
        self
    }

    /// Assigns fresh bill and user identifiers
    pub fn with_ids(mut self) -> Self {
        self.id = Some(BillId::new());
        self.user_id = Some(UserId::new());
        self
    }

    /// Builds the bill
    pub fn build(self) -> Bill {
        Bill {
            id: self.id,
            amount: self.amount,
            is_groceries: self.is_groceries,
            user: User {
                id: self.user_id,
                role: self.role,
                is_customer_over_two_years: self.is_customer_over_two_years,
            },
        }
    }
}
