pub mod auth;
pub mod json;
pub mod maybe_auth;
pub mod path;
