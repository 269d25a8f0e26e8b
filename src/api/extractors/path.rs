use axum::extract::FromRequestParts;
use crate::error::AppError;

/// `axum::extract::Path` whose rejection renders as a `{"msg": ...}` 400.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct PathParam<T>(pub T);
