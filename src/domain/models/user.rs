use serde::Serialize;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

pub const ROLE_USER: &str = "usuario";
pub const ROLE_ADMIN: &str = "admin";

pub fn is_known_role(role: &str) -> bool {
    role == ROLE_USER || role == ROLE_ADMIN
}

#[derive(Debug, Serialize, FromRow, Clone)]
pub struct User {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "telefone")]
    pub phone: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    #[serde(rename = "papel")]
    pub role: String,
    #[serde(rename = "status")]
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Row to insert; the id is assigned by SQLite.
pub struct NewUser {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

impl NewUser {
    pub fn new(name: String, phone: String, email: String, password_hash: String, role: String) -> Self {
        Self { name, phone, email, password_hash, role }
    }
}
