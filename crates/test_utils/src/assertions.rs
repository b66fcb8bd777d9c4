//! Custom Test Assertions
//!
//! Assertion helpers for amounts that give more meaningful failure messages
//! than the standard macros.

use domain_discount::{DiscountError, NetAmount};

/// Asserts that a net amount is within `tolerance` of the expected value
///
/// # Panics
///
/// Panics if the values differ by more than tolerance
pub fn assert_net_approx_eq(actual: &NetAmount, expected: f64, tolerance: f64) {
    let diff = (actual.value() - expected).abs();
    assert!(
        diff <= tolerance,
        "Net amount differs by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual.value(),
        expected,
        diff,
        tolerance
    );
}

/// Asserts that a net amount is not negative
pub fn assert_net_non_negative(actual: &NetAmount) {
    assert!(
        actual.value() >= 0.0,
        "Expected non-negative net amount, got {}",
        actual.value()
    );
}

/// Asserts that a calculation failed with a computation failure
pub fn assert_computation_failure<T: std::fmt::Debug>(result: &Result<T, DiscountError>) {
    assert!(
        matches!(result, Err(DiscountError::ComputationFailure { .. })),
        "Expected computation failure, got {:?}",
        result
    );
}
