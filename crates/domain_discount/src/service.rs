//! Net payable amount calculation
//!
//! `DiscountServiceImpl` applies the rules from [`crate::rules`] to a bill:
//! at most one of the role-based or tenure-based discounts, then the
//! secondary discount, then subtracts the total from the bill amount.

use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::Amount;

use crate::bill::Bill;
use crate::error::DiscountError;
use crate::net_amount::NetAmount;
use crate::rules::{role_based_discount, tenure_based_discount, total_amount_discount};

/// Calculates what a customer pays for a bill
///
/// Implementations must be stateless enough to be shared across request
/// handlers behind an `Arc<dyn DiscountService>`.
pub trait DiscountService: Send + Sync {
    /// Runs the calculation and returns every component of it
    ///
    /// # Errors
    ///
    /// Returns `DiscountError::ComputationFailure` if the bill cannot be
    /// evaluated, e.g. its amount is negative or not finite
    fn breakdown(&self, bill: &Bill) -> Result<DiscountBreakdown, DiscountError>;

    /// Calculates the net payable amount for a bill after applying discounts
    ///
    /// # Errors
    ///
    /// Same as [`DiscountService::breakdown`]
    fn calculate_net_payable_amount(&self, bill: &Bill) -> Result<NetAmount, DiscountError> {
        self.breakdown(bill).map(|breakdown| breakdown.net)
    }
}

/// Per-component view of a single calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountBreakdown {
    pub role_discount: Amount,
    /// Zero unless evaluated, which only happens when the role discount is zero
    pub tenure_discount: Amount,
    pub secondary_discount: Amount,
    pub total_discount: Amount,
    pub net: NetAmount,
}

/// Standard discount calculation
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscountServiceImpl;

impl DiscountServiceImpl {
    pub fn new() -> Self {
        Self
    }
}

impl DiscountService for DiscountServiceImpl {
    fn breakdown(&self, bill: &Bill) -> Result<DiscountBreakdown, DiscountError> {
        let amount = Amount::try_new(bill.amount)?;

        let mut role_discount = Amount::zero();
        let mut tenure_discount = Amount::zero();
        if !bill.is_groceries {
            role_discount = role_based_discount(amount, bill.user.role);
            if role_discount.is_zero() {
                tenure_discount = tenure_based_discount(amount, &bill.user);
            }
        }

        let secondary_discount = total_amount_discount(amount);
        let total_discount = role_discount + tenure_discount + secondary_discount;
        let net = NetAmount::new(amount - total_discount);

        debug!(
            bill_id = ?bill.id,
            role = %bill.user.role,
            groceries = bill.is_groceries,
            amount = amount.value(),
            discount = total_discount.value(),
            net = net.value(),
            "Calculated net payable amount"
        );

        Ok(DiscountBreakdown {
            role_discount,
            tenure_discount,
            secondary_discount,
            total_discount,
            net,
        })
    }
}
