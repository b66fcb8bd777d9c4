//! Discount rules
//!
//! Each rule is a pure function of the bill amount and the purchaser. The
//! service decides which rules apply and in what order.

use core_kernel::{Amount, Rate};

use crate::bill::{User, UserRole};

/// Discount rate for store employees
pub const EMPLOYEE_RATE: Rate = Rate::new(0.3);

/// Discount rate for store affiliates
pub const AFFILIATE_RATE: Rate = Rate::new(0.1);

/// Discount rate for customers of more than two years
pub const TENURE_RATE: Rate = Rate::new(0.05);

/// Bills strictly above this amount get the secondary discount
pub const SECONDARY_DISCOUNT_THRESHOLD: f64 = 100.0;

/// Secondary discount granted per 100 of bill amount
pub const SECONDARY_DISCOUNT_PER_HUNDRED: f64 = 5.0;

/// Returns the rate granted to a role, if any
pub fn role_rate(role: UserRole) -> Option<Rate> {
    match role {
        UserRole::Employee => Some(EMPLOYEE_RATE),
        UserRole::Affiliate => Some(AFFILIATE_RATE),
        UserRole::Other => None,
    }
}

/// Role-based discount: 30% for employees, 10% for affiliates, otherwise zero
pub fn role_based_discount(amount: Amount, role: UserRole) -> Amount {
    role_rate(role)
        .map(|rate| rate.apply(amount))
        .unwrap_or_else(Amount::zero)
}

/// Tenure-based discount: 5% for customers of more than two years
pub fn tenure_based_discount(amount: Amount, user: &User) -> Amount {
    if user.is_customer_over_two_years {
        TENURE_RATE.apply(amount)
    } else {
        Amount::zero()
    }
}

/// Secondary discount: `(amount / 100) * 5` for bills over 100
pub fn total_amount_discount(amount: Amount) -> Amount {
    if amount.value() > SECONDARY_DISCOUNT_THRESHOLD {
        amount.per_hundred(SECONDARY_DISCOUNT_PER_HUNDRED)
    } else {
        Amount::zero()
    }
}
