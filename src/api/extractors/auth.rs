use axum::{
    extract::{FromRequestParts, FromRef},
    http::{header, request::Parts},
};
use crate::state::AppState;
use crate::domain::models::auth::Principal;
use crate::error::AppError;
use std::sync::Arc;
use tracing::Span;

pub struct AuthUser(pub Principal);

/// An authenticated caller holding the `admin` role.
pub struct AdminUser(pub Principal);

pub(crate) fn bearer_token(parts: &Parts) -> Option<&str> {
    parts.headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)
            .ok_or_else(|| AppError::Unauthorized("Token de acesso ausente".into()))?;

        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);
        let principal = app_state.auth_service.verify_access_token(token)?;

        Span::current().record("user_id", principal.user_id);

        Ok(AuthUser(principal))
    }
}

impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AuthUser(principal) = AuthUser::from_request_parts(parts, state).await?;

        if !principal.is_admin() {
            return Err(AppError::Forbidden("Acesso restrito a administradores.".into()));
        }

        Ok(AdminUser(principal))
    }
}
