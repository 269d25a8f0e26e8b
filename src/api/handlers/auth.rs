use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::error::AppError;
use crate::api::dtos::requests::LoginRequest;
use crate::api::extractors::json::JsonBody;
use crate::domain::models::auth::LoginResponse;
use crate::domain::services::password::verify_password;
use std::sync::Arc;
use tracing::{info, warn};

const INVALID_CREDENTIALS: &str = "Credenciais inválidas";

pub async fn login(
    State(state): State<Arc<AppState>>,
    JsonBody(payload): JsonBody<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let email = payload.email.as_deref().map(str::trim).unwrap_or_default();
    let password = payload.password.unwrap_or_default();

    let user = state.user_repo.find_by_email(email).await?
        .ok_or_else(|| AppError::Unauthorized(INVALID_CREDENTIALS.into()))?;

    if !verify_password(&password, &user.password_hash) {
        warn!("Failed login attempt for user {}", user.id);
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.into()));
    }

    if !user.active {
        return Err(AppError::Forbidden("Usuário desativado.".into()));
    }

    let access_token = state.auth_service.issue_access_token(&user)?;

    info!("User logged in: {}", user.id);

    Ok(Json(LoginResponse {
        access_token,
        role: user.role,
        name: user.name,
    }))
}
