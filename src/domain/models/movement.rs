use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementKind {
    Inflow,
    Outflow,
}

impl MovementKind {
    /// Exactly one direction must be set.
    pub fn from_flags(inflow: bool, outflow: bool) -> Option<Self> {
        match (inflow, outflow) {
            (true, false) => Some(MovementKind::Inflow),
            (false, true) => Some(MovementKind::Outflow),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, FromRow, Clone)]
pub struct Movement {
    pub id: i64,
    #[serde(rename = "pedido_id")]
    pub order_id: i64,
    #[serde(rename = "valor_total")]
    pub total_value: f64,
    #[serde(rename = "entrada")]
    pub inflow: bool,
    #[serde(rename = "saida")]
    pub outflow: bool,
}

pub struct NewMovement {
    pub order_id: i64,
    pub total_value: f64,
    pub kind: MovementKind,
}
