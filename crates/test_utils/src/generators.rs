//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating bills that satisfy the
//! input invariants (finite, non-negative amounts).

use domain_discount::{Bill, User, UserRole};
use proptest::prelude::*;

/// Strategy for generating any role
pub fn role_strategy() -> impl Strategy<Value = UserRole> {
    prop_oneof![
        Just(UserRole::Employee),
        Just(UserRole::Affiliate),
        Just(UserRole::Other),
    ]
}

/// Strategy for generating valid bill amounts, including whole hundreds and zero
pub fn amount_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(0.0),
        (0u32..1_000u32).prop_map(|n| n as f64 * 100.0),
        (0i64..100_000_000i64).prop_map(|cents| cents as f64 / 100.0),
        0.0f64..1.0e12f64,
    ]
}

/// Strategy for generating invalid bill amounts
pub fn invalid_amount_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
        -1.0e12f64..-1.0e-9f64,
    ]
}

/// Strategy for generating users
pub fn user_strategy() -> impl Strategy<Value = User> {
    (role_strategy(), any::<bool>())
        .prop_map(|(role, loyal)| User::new(role, loyal))
}

/// Strategy for generating valid bills
pub fn bill_strategy() -> impl Strategy<Value = Bill> {
    (amount_strategy(), any::<bool>(), user_strategy())
        .prop_map(|(amount, is_groceries, user)| Bill::new(amount, is_groceries, user))
}
