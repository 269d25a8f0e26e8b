//! Loose boolean coercion for the `status`/`entrada`/`saida` fields.
//!
//! Clients send these flags as JSON booleans, numbers (`1` active, `2` inactive)
//! or strings (`"true"`, `"1"`, `"ativo"`, `"false"`, `"2"`, `"desativo"`).

use serde_json::Value;

use crate::error::AppError;

pub const INVALID_STATUS_MSG: &str = "Valor de 'status' inválido. Use true/false ou 1/2.";

/// Returns `None` when the value is not a recognized flag.
pub fn coerce_flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_i64() {
            Some(1) => Some(true),
            Some(2) => Some(false),
            _ => None,
        },
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "true" | "1" | "ativo" => Some(true),
            "false" | "2" | "desativo" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Like [`coerce_flag`] but rejects unrecognized values.
pub fn require_flag(value: &Value, field: &str) -> Result<bool, AppError> {
    coerce_flag(value).ok_or_else(|| {
        if field == "status" {
            AppError::Validation(INVALID_STATUS_MSG.to_string())
        } else {
            AppError::Validation(format!("Valor de '{}' inválido. Use true/false ou 1/2.", field))
        }
    })
}
