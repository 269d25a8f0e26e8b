use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::{
    requests::{PlaceOrderRequest, OrderStatusRequest},
    responses::{OrderResponse, OrderListResponse},
};
use crate::api::extractors::{auth::{AuthUser, AdminUser}, json::JsonBody, path::PathParam};
use crate::domain::models::order::NewOrder;
use crate::domain::services::ordering::{order_total, plan_consumption};
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn place_order(
    State(state): State<Arc<AppState>>,
    AuthUser(caller): AuthUser,
    JsonBody(payload): JsonBody<PlaceOrderRequest>,
) -> Result<impl IntoResponse, AppError> {
    let product_id = payload.product_id
        .ok_or_else(|| AppError::Validation("O campo 'produto_id' é obrigatório.".into()))?;
    let quantity = payload.quantity.unwrap_or(1);
    if quantity < 1 {
        return Err(AppError::Validation("A quantidade deve ser pelo menos 1.".into()));
    }

    let product = state.product_repo.find_by_id(product_id).await?
        .ok_or_else(|| AppError::NotFound("Item do cardápio não encontrado.".into()))?;
    if !product.active {
        return Err(AppError::Validation("Item do cardápio indisponível.".into()));
    }

    let recipe = state.product_repo.recipe(product.id).await?;
    let draws = plan_consumption(&recipe, quantity)?;

    let payment_method = payload.payment_method
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty());
    let total = order_total(product.price, quantity)?;
    let order = NewOrder::new(caller.user_id, product.id, quantity, payment_method, total);

    let placed = state.order_repo.place(&order, &draws).await?;

    info!("Order {} placed by user {} for {} x {}", placed.id, caller.user_id, quantity, product.name);

    Ok((StatusCode::CREATED, Json(OrderResponse {
        msg: "Pedido realizado com sucesso!".to_string(),
        pedido: placed,
    })))
}

pub async fn list_orders(
    State(state): State<Arc<AppState>>,
    AuthUser(caller): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let pedidos = if caller.is_admin() {
        state.order_repo.list_all().await?
    } else {
        state.order_repo.list_by_user(caller.user_id).await?
    };

    Ok(Json(OrderListResponse { pedidos }))
}

pub async fn update_order_status(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    PathParam(order_id): PathParam<i64>,
    JsonBody(payload): JsonBody<OrderStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    let status = payload.status
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::Validation("O campo 'status' é obrigatório.".into()))?;

    let updated = state.order_repo.update_status(order_id, &status).await?;

    info!("Order {} moved to status {}", updated.id, updated.status);

    Ok(Json(OrderResponse {
        msg: "Status do pedido atualizado com sucesso!".to_string(),
        pedido: updated,
    }))
}
