//! HTTP API Layer
//!
//! This crate exposes the discount calculation over HTTP using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for health and discount endpoints
//! - **Middleware**: Request IDs and request logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent JSON error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router();
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
    middleware as axum_middleware,
};
use domain_discount::{DiscountService, DiscountServiceImpl};
use tower_http::trace::TraceLayer;
use tower_http::cors::{CorsLayer, Any};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

use crate::middleware::request_logging_middleware;
use crate::handlers::{discount, health};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub discount_service: Arc<dyn DiscountService>,
}

/// Creates the main API router with the standard discount service
pub fn create_router() -> Router {
    create_router_with_service(Arc::new(DiscountServiceImpl::new()))
}

/// Creates the main API router around the given discount service
///
/// # Arguments
///
/// * `discount_service` - Calculator used by the discount handlers
///
/// Every response carries an `x-request-id` header, generated unless the
/// client sent one.
pub fn create_router_with_service(discount_service: Arc<dyn DiscountService>) -> Router {
    let state = AppState { discount_service };

    let public_routes = Router::new()
        .route("/health", get(health::health_check));

    let discount_routes = Router::new()
        .route("/net-payable-amount", post(discount::net_payable_amount))
        .route("/breakdown", post(discount::breakdown));

    let api_routes = Router::new()
        .nest("/discounts", discount_routes)
        .layer(axum_middleware::from_fn(request_logging_middleware));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
