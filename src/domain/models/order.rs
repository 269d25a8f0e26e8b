use serde::Serialize;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

pub const DEFAULT_ORDER_STATUS: &str = "pendente";

pub struct NewOrder {
    pub user_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub payment_method: Option<String>,
    pub total_value: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl NewOrder {
    pub fn new(user_id: i64, product_id: i64, quantity: i64, payment_method: Option<String>, total_value: f64) -> Self {
        Self {
            user_id,
            product_id,
            quantity,
            payment_method,
            total_value,
            status: DEFAULT_ORDER_STATUS.to_string(),
            created_at: Utc::now(),
        }
    }
}

/// An order joined with the names of its user and product.
#[derive(Debug, Serialize, FromRow, Clone)]
pub struct OrderDetails {
    pub id: i64,
    #[serde(skip_serializing)]
    pub user_id: i64,
    #[serde(rename = "usuario")]
    pub user_name: Option<String>,
    #[serde(skip_serializing)]
    pub product_id: i64,
    #[serde(rename = "cardapio")]
    pub product_name: Option<String>,
    #[serde(rename = "quantidade")]
    pub quantity: i64,
    #[serde(rename = "metodo_pagamento")]
    pub payment_method: Option<String>,
    #[serde(rename = "data")]
    pub created_at: DateTime<Utc>,
    pub status: String,
    #[serde(rename = "valor_total")]
    pub total_value: f64,
}
