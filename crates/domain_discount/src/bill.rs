//! Bills and the users they belong to
//!
//! Both are immutable input values handed over fully populated by the host
//! application. Identifiers are optional and only used for log correlation.

use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{BillId, UserId};

/// The purchaser's relationship with the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    /// Store employee
    Employee,
    /// Store affiliate
    Affiliate,
    /// Any other customer
    #[default]
    Other,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UserRole::Employee => "EMPLOYEE",
            UserRole::Affiliate => "AFFILIATE",
            UserRole::Other => "OTHER",
        };
        f.write_str(name)
    }
}

/// The purchaser of a bill
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    pub role: UserRole,
    pub is_customer_over_two_years: bool,
}

impl User {
    /// Creates a user without an identifier
    pub fn new(role: UserRole, is_customer_over_two_years: bool) -> Self {
        Self {
            id: None,
            role,
            is_customer_over_two_years,
        }
    }

    /// Attaches an identifier
    pub fn with_id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }
}

/// A purchase bill subject to discounting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<BillId>,
    /// Gross bill amount; expected to be finite and non-negative
    pub amount: f64,
    pub is_groceries: bool,
    pub user: User,
}

impl Bill {
    /// Creates a bill without an identifier
    pub fn new(amount: f64, is_groceries: bool, user: User) -> Self {
        Self {
            id: None,
            amount,
            is_groceries,
            user,
        }
    }

    /// Attaches an identifier
    pub fn with_id(mut self, id: BillId) -> Self {
        self.id = Some(id);
        self
    }
}
