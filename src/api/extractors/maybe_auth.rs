use axum::{
    extract::{FromRequestParts, FromRef},
    http::request::Parts,
};
use crate::state::AppState;
use crate::domain::models::auth::Principal;
use crate::api::extractors::auth::bearer_token;
use std::convert::Infallible;
use std::sync::Arc;
use tracing::debug;

pub struct MaybeAuthUser(pub Option<Principal>);

impl<S> FromRequestParts<S> for MaybeAuthUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = match bearer_token(parts) {
            Some(token) => token,
            None => return Ok(MaybeAuthUser(None)),
        };

        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);

        match app_state.auth_service.verify_access_token(token) {
            Ok(principal) => Ok(MaybeAuthUser(Some(principal))),
            Err(_) => {
                // Expired or forged token -> treat as guest
                debug!("MaybeAuth: ignoring invalid bearer token");
                Ok(MaybeAuthUser(None))
            }
        }
    }
}
