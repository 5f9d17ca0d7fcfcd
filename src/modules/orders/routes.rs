//! HTTP handlers for order submission and lookup.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use pizzeria_http::error::AppError;

use super::{models::Order, registry::OrderRegistry};

/// Register an order and answer with its code as plain text
pub async fn submit_order(
    State(registry): State<Arc<OrderRegistry>>,
    payload: Result<Json<Order>, JsonRejection>,
) -> Result<String, AppError> {
    let Json(order) = payload?;
    let pizzas = order.pizzas.len();
    let total = order.total_price();

    let code = registry.register(order).await;

    tracing::info!(code = %code, pizzas, total, "order registered");
    Ok(code)
}

/// Fetch a registered order by code
pub async fn fetch_order(
    State(registry): State<Arc<OrderRegistry>>,
    Path(code): Path<String>,
) -> Result<Json<Order>, AppError> {
    match registry.lookup(&code).await {
        Some(order) => Ok(Json(order)),
        None => {
            tracing::debug!(code = %code, "order lookup missed");
            Err(AppError::not_found(format!(
                "no order registered under code '{code}'"
            )))
        }
    }
}
