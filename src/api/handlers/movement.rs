use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::{
    requests::RecordMovementRequest,
    responses::{MovementResponse, MovementListResponse},
};
use crate::api::extractors::{auth::AdminUser, json::JsonBody, path::PathParam};
use crate::domain::models::movement::{MovementKind, NewMovement};
use crate::domain::services::status_flag::require_flag;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn record_movement(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    JsonBody(payload): JsonBody<RecordMovementRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (Some(order_id), Some(total_value)) = (payload.order_id, payload.total_value) else {
        return Err(AppError::Validation("Os campos 'pedido_id' e 'valor_total' são obrigatórios.".into()));
    };
    if !total_value.is_finite() || total_value < 0.0 {
        return Err(AppError::Validation("Valor total inválido.".into()));
    }

    let inflow = match &payload.inflow {
        Some(value) => require_flag(value, "entrada")?,
        None => false,
    };
    let outflow = match &payload.outflow {
        Some(value) => require_flag(value, "saida")?,
        None => false,
    };
    let kind = MovementKind::from_flags(inflow, outflow)
        .ok_or_else(|| AppError::Validation("Informe exatamente um entre 'entrada' e 'saida'.".into()))?;

    if state.order_repo.find_by_id(order_id).await?.is_none() {
        return Err(AppError::NotFound("Pedido não encontrado.".into()));
    }

    let created = state.movement_repo.create(&NewMovement { order_id, total_value, kind }).await?;

    info!("Recorded {:?} movement {} for order {}", kind, created.id, order_id);

    Ok((StatusCode::CREATED, Json(MovementResponse {
        msg: "Movimento registrado com sucesso!".to_string(),
        movimento: created,
    })))
}

pub async fn list_order_movements(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    PathParam(order_id): PathParam<i64>,
) -> Result<impl IntoResponse, AppError> {
    if state.order_repo.find_by_id(order_id).await?.is_none() {
        return Err(AppError::NotFound("Pedido não encontrado.".into()));
    }

    let movimentos = state.movement_repo.list_by_order(order_id).await?;
    Ok(Json(MovementListResponse { movimentos }))
}
