//! Discount DTOs

use core_kernel::{BillId, UserId};
use domain_discount::{Bill, DiscountBreakdown, NetAmount, User, UserRole};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    #[serde(default)]
    pub id: Option<UserId>,
    pub role: UserRole,
    #[serde(default)]
    pub is_customer_over_two_years: bool,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BillRequest {
    #[serde(default)]
    pub id: Option<BillId>,
    #[validate(range(min = 0.0, message = "amount must not be negative"))]
    pub amount: f64,
    #[serde(default)]
    pub is_groceries: bool,
    pub user: UserRequest,
}

impl From<BillRequest> for Bill {
    fn from(request: BillRequest) -> Self {
        Bill {
            id: request.id,
            amount: request.amount,
            is_groceries: request.is_groceries,
            user: User {
                id: request.user.id,
                role: request.user.role,
                is_customer_over_two_years: request.user.is_customer_over_two_years,
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetAmountResponse {
    pub net_payable_amount: f64,
}

impl From<NetAmount> for NetAmountResponse {
    fn from(net: NetAmount) -> Self {
        Self {
            net_payable_amount: net.value(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownResponse {
    pub role_discount: f64,
    pub tenure_discount: f64,
    pub secondary_discount: f64,
    pub total_discount: f64,
    pub net_payable_amount: f64,
}

impl From<DiscountBreakdown> for BreakdownResponse {
    fn from(breakdown: DiscountBreakdown) -> Self {
        Self {
            role_discount: breakdown.role_discount.value(),
            tenure_discount: breakdown.tenure_discount.value(),
            secondary_discount: breakdown.secondary_discount.value(),
            total_discount: breakdown.total_discount.value(),
            net_payable_amount: breakdown.net.value(),
        }
    }
}
