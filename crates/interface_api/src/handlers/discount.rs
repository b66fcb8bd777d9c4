//! Discount handlers

use axum::{extract::State, Json};
use domain_discount::{Bill, DiscountService};
use validator::Validate;

use crate::dto::discount::{BillRequest, BreakdownResponse, NetAmountResponse};
use crate::{error::ApiError, AppState};

/// Calculates the net payable amount for a bill
pub async fn net_payable_amount(
    State(state): State<AppState>,
    Json(request): Json<BillRequest>,
) -> Result<Json<NetAmountResponse>, ApiError> {
    request.validate()?;
    let bill = Bill::from(request);

    let net = state.discount_service.calculate_net_payable_amount(&bill)?;

    Ok(Json(net.into()))
}

/// Returns each discount component for a bill
pub async fn breakdown(
    State(state): State<AppState>,
    Json(request): Json<BillRequest>,
) -> Result<Json<BreakdownResponse>, ApiError> {
    request.validate()?;
    let bill = Bill::from(request);

    let breakdown = state.discount_service.breakdown(&bill)?;

    Ok(Json(breakdown.into()))
}
