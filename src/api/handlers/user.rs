use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::{
    requests::{RegisterUserRequest, UpdateUserRequest},
    responses::{UserCreatedResponse, UserUpdatedResponse, UserListResponse},
};
use crate::api::extractors::{auth::{AuthUser, AdminUser}, json::JsonBody, maybe_auth::MaybeAuthUser, path::PathParam};
use crate::domain::models::user::{is_known_role, NewUser, User, ROLE_ADMIN, ROLE_USER};
use crate::domain::services::{password::hash_password, status_flag::coerce_flag};
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

const MAX_PHONE_LEN: usize = 20;

fn trimmed(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn normalize_role(raw: &str) -> Result<String, AppError> {
    let role = raw.trim().to_lowercase();
    if !is_known_role(&role) {
        return Err(AppError::Validation(format!("Papel inválido. Use '{}' ou '{}'.", ROLE_USER, ROLE_ADMIN)));
    }
    Ok(role)
}

fn check_phone(phone: &str) -> Result<(), AppError> {
    if phone.chars().count() > MAX_PHONE_LEN {
        return Err(AppError::Validation(format!("Telefone deve ter no máximo {} caracteres.", MAX_PHONE_LEN)));
    }
    Ok(())
}

/// A clash only counts when the existing row is someone other than `own_id`.
fn taken_by_other(found: Option<User>, own_id: Option<i64>) -> bool {
    match (found, own_id) {
        (Some(existing), Some(id)) => existing.id != id,
        (Some(_), None) => true,
        (None, _) => false,
    }
}

pub async fn register_user(
    State(state): State<Arc<AppState>>,
    MaybeAuthUser(caller): MaybeAuthUser,
    JsonBody(payload): JsonBody<RegisterUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (Some(name), Some(phone), Some(email), Some(password)) = (
        trimmed(payload.name),
        trimmed(payload.phone),
        trimmed(payload.email),
        payload.password.filter(|p| !p.is_empty()),
    ) else {
        return Err(AppError::Validation("Nome, telefone, email e senha são obrigatórios.".into()));
    };

    let role = match payload.role.as_deref().map(str::trim).filter(|r| !r.is_empty()) {
        Some(raw) => normalize_role(raw)?,
        None => ROLE_USER.to_string(),
    };
    check_phone(&phone)?;

    if role == ROLE_ADMIN {
        let caller_is_admin = caller.as_ref().map(|c| c.is_admin()).unwrap_or(false);
        // The very first account may bootstrap itself as admin.
        if !caller_is_admin && state.user_repo.count().await? > 0 {
            return Err(AppError::Forbidden("Somente administradores podem criar administradores.".into()));
        }
    }

    if state.user_repo.find_by_email(&email).await?.is_some() {
        return Err(AppError::Conflict("Usuário já existente!".into()));
    }
    if state.user_repo.find_by_phone(&phone).await?.is_some() {
        return Err(AppError::Conflict("Este telefone já está cadastrado!".into()));
    }
    if state.user_repo.find_by_name(&name).await?.is_some() {
        return Err(AppError::Conflict("Este nome já está cadastrado!".into()));
    }

    let password_hash = hash_password(&password)?;
    let created = state.user_repo.create(&NewUser::new(name, phone, email, password_hash, role)).await?;

    info!("Created user {} with role {}", created.id, created.role);

    Ok((StatusCode::CREATED, Json(UserCreatedResponse {
        msg: "Usuário criado com sucesso!".to_string(),
        user_id: created.id,
    })))
}

pub async fn update_user(
    State(state): State<Arc<AppState>>,
    AuthUser(caller): AuthUser,
    PathParam(user_id): PathParam<i64>,
    JsonBody(payload): JsonBody<UpdateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !caller.can_manage(user_id) {
        return Err(AppError::Forbidden("Você só pode editar o próprio cadastro.".into()));
    }

    let mut user = state.user_repo.find_by_id(user_id).await?
        .ok_or_else(|| AppError::NotFound("Usuário não encontrado!".into()))?;

    if let Some(email) = trimmed(payload.email) {
        if taken_by_other(state.user_repo.find_by_email(&email).await?, Some(user.id)) {
            return Err(AppError::Conflict("Este email já está cadastrado!".into()));
        }
        user.email = email;
    }

    if let Some(phone) = trimmed(payload.phone) {
        check_phone(&phone)?;
        if taken_by_other(state.user_repo.find_by_phone(&phone).await?, Some(user.id)) {
            return Err(AppError::Conflict("Este telefone já está cadastrado!".into()));
        }
        user.phone = phone;
    }

    if let Some(name) = trimmed(payload.name) {
        if taken_by_other(state.user_repo.find_by_name(&name).await?, Some(user.id)) {
            return Err(AppError::Conflict("Este nome já está cadastrado!".into()));
        }
        user.name = name;
    }

    if let Some(raw_role) = trimmed(payload.role) {
        let role = normalize_role(&raw_role)?;
        if role != user.role && !caller.is_admin() {
            return Err(AppError::Forbidden("Somente administradores podem alterar o papel.".into()));
        }
        user.role = role;
    }

    // Unrecognized status values leave the flag untouched.
    if let Some(active) = payload.status.as_ref().and_then(coerce_flag) {
        if active != user.active && !caller.is_admin() {
            return Err(AppError::Forbidden("Somente administradores podem alterar o status.".into()));
        }
        user.active = active;
    }

    if let Some(password) = trimmed(payload.password) {
        user.password_hash = hash_password(&password)?;
    }

    let updated = state.user_repo.update(&user).await?;

    info!("Updated user {} (by {})", updated.id, caller.user_id);

    Ok(Json(UserUpdatedResponse::from(updated)))
}

pub async fn list_users(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
) -> Result<impl IntoResponse, AppError> {
    let usuarios = state.user_repo.list().await?;
    Ok(Json(UserListResponse { usuarios }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trimmed_drops_blank_values() {
        assert_eq!(trimmed(Some("  ana ".into())), Some("ana".into()));
        assert_eq!(trimmed(Some("   ".into())), None);
        assert_eq!(trimmed(None), None);
    }

    #[test]
    fn test_normalize_role() {
        assert_eq!(normalize_role(" Admin ").unwrap(), "admin");
        assert!(normalize_role("gerente").is_err());
    }
}
