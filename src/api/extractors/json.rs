use axum::extract::FromRequest;
use crate::error::AppError;

/// `axum::Json` whose rejection renders as a `{"msg": ...}` 400.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
