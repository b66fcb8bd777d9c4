//! Pre-built Test Fixtures
//!
//! Ready-to-use users, bills and JSON payloads for the common discount
//! scenarios.

use domain_discount::{Bill, User, UserRole};
use serde_json::{json, Value};

/// Fixture for user test data
pub struct UserFixtures;

impl UserFixtures {
    /// A store employee with no tenure
    pub fn employee() -> User {
        User::new(UserRole::Employee, false)
    }

    /// A store affiliate with no tenure
    pub fn affiliate() -> User {
        User::new(UserRole::Affiliate, false)
    }

    /// A regular customer of more than two years
    pub fn loyal_customer() -> User {
        User::new(UserRole::Other, true)
    }
}

/// Fixture for bill test data
pub struct BillFixtures;

impl BillFixtures {
    /// Non-grocery bill of 50 for an employee (net 35)
    pub fn employee_small() -> Bill {
        Bill::new(50.0, false, UserFixtures::employee())
    }

    /// Non-grocery bill of 50 for an affiliate (net 45)
    pub fn affiliate_small() -> Bill {
        Bill::new(50.0, false, UserFixtures::affiliate())
    }

    /// Non-grocery bill of 50 for a loyal customer (net 47.5)
    pub fn loyal_customer_small() -> Bill {
        Bill::new(50.0, false, UserFixtures::loyal_customer())
    }

    /// Non-grocery bill of 200 for an employee (net 130)
    pub fn employee_large() -> Bill {
        Bill::new(200.0, false, UserFixtures::employee())
    }

    /// Grocery bill of 200 for an employee (net 190)
    pub fn groceries_large() -> Bill {
        Bill::new(200.0, true, UserFixtures::employee())
    }
}

/// Fixture for bill request payloads in wire format
pub struct JsonFixtures;

impl JsonFixtures {
    /// Builds a bill payload with camelCase field names
    pub fn bill(amount: f64, is_groceries: bool, role: &str, over_two_years: bool) -> Value {
        json!({
            "amount": amount,
            "isGroceries": is_groceries,
            "user": {
                "role": role,
                "isCustomerOverTwoYears": over_two_years,
            }
        })
    }

    /// Non-grocery bill of 200 for an employee
    pub fn employee_large() -> Value {
        Self::bill(200.0, false, "EMPLOYEE", false)
    }
}
