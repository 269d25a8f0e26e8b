use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::{
    requests::{CreateIngredientRequest, UpdateIngredientRequest},
    responses::{IngredientResponse, IngredientListResponse},
};
use crate::api::extractors::{auth::{AuthUser, AdminUser}, json::JsonBody, path::PathParam};
use crate::domain::models::ingredient::{Ingredient, NewIngredient, Unit};
use crate::domain::services::status_flag::require_flag;
use crate::error::AppError;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

fn parse_unit(raw: &str) -> Result<Unit, AppError> {
    raw.parse::<Unit>().map_err(AppError::Validation)
}

fn check_stock(quantity: f64) -> Result<f64, AppError> {
    if !quantity.is_finite() || quantity < 0.0 {
        return Err(AppError::Validation("Quantidade de estoque inválida.".into()));
    }
    Ok(quantity)
}

/// Stock sent on edit may be a number, a numeric string, or blank/null meaning zero.
fn parse_stock(value: Option<&Value>) -> Result<f64, AppError> {
    let invalid = || AppError::Validation("Quantidade de estoque inválida.".into());
    let quantity = match value {
        None | Some(Value::Null) => 0.0,
        Some(Value::Number(n)) => n.as_f64().ok_or_else(invalid)?,
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() || s.eq_ignore_ascii_case("none") {
                0.0
            } else {
                s.parse::<f64>().map_err(|_| invalid())?
            }
        }
        Some(_) => return Err(invalid()),
    };
    check_stock(quantity)
}

pub async fn create_ingredient(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    JsonBody(payload): JsonBody<CreateIngredientRequest>,
) -> Result<impl IntoResponse, AppError> {
    let name = payload.name.as_deref().map(str::trim).unwrap_or_default().to_string();
    let raw_unit = payload.unit.unwrap_or_default();
    if name.is_empty() || raw_unit.trim().is_empty() {
        return Err(AppError::Validation("Nome e unidade são obrigatórios.".into()));
    }

    let unit = parse_unit(&raw_unit)?;

    if state.ingredient_repo.find_by_name(&name).await?.is_some() {
        return Err(AppError::Conflict("Ingrediente com esse nome já existe.".into()));
    }

    let stock_quantity = check_stock(payload.stock_quantity.unwrap_or(0.0))?;
    let active = match &payload.status {
        Some(value) => require_flag(value, "status")?,
        None => true,
    };

    let created = state.ingredient_repo.create(&NewIngredient { name, unit, stock_quantity, active }).await?;

    info!("Created ingredient {} ({}{})", created.name, created.stock_quantity, created.unit);

    Ok((StatusCode::CREATED, Json(IngredientResponse {
        msg: "Ingrediente cadastrado com sucesso!".to_string(),
        ingrediente: created,
    })))
}

async fn find_ingredient(state: &AppState, lookup: &str, value: &str) -> Result<Option<Ingredient>, AppError> {
    match lookup {
        "id" => {
            let id = value.trim().parse::<i64>()
                .map_err(|_| AppError::Validation("ID inválido.".into()))?;
            state.ingredient_repo.find_by_id(id).await
        }
        "nome" => state.ingredient_repo.find_by_name(value.trim()).await,
        _ => Err(AppError::Validation("Parâmetro de busca inválido. Use 'id' ou 'nome'.".into())),
    }
}

pub async fn update_ingredient(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    PathParam((lookup, value)): PathParam<(String, String)>,
    JsonBody(payload): JsonBody<UpdateIngredientRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut ingredient = find_ingredient(&state, &lookup, &value).await?
        .ok_or_else(|| AppError::NotFound("Ingrediente não encontrado.".into()))?;

    if let Some(raw_name) = payload.name {
        let name = raw_name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::Validation("Nome não pode ser vazio.".into()));
        }
        if name != ingredient.name {
            if let Some(existing) = state.ingredient_repo.find_by_name(&name).await? {
                if existing.id != ingredient.id {
                    return Err(AppError::Conflict("Já existe um ingrediente com esse nome.".into()));
                }
            }
            ingredient.name = name;
        }
    }

    if let Some(raw_unit) = payload.unit {
        if raw_unit.trim().is_empty() {
            return Err(AppError::Validation("Unidade não pode ser vazia.".into()));
        }
        ingredient.unit = parse_unit(&raw_unit)?.as_str().to_string();
    }

    if let Some(stock) = payload.stock_quantity {
        ingredient.stock_quantity = parse_stock(stock.as_ref())?;
    }

    if let Some(status) = payload.status {
        ingredient.active = require_flag(status.as_ref().unwrap_or(&Value::Null), "status")?;
    }

    let updated = state.ingredient_repo.update(&ingredient).await?;

    info!("Updated ingredient {}", updated.id);

    Ok(Json(IngredientResponse {
        msg: "Ingrediente atualizado com sucesso!".to_string(),
        ingrediente: updated,
    }))
}

pub async fn list_ingredients(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let ingredients = state.ingredient_repo.list().await?;

    if ingredients.is_empty() {
        return Err(AppError::NotFound("Nenhum ingrediente encontrado.".into()));
    }

    Ok(Json(IngredientListResponse { produtos: ingredients }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_stock_variants() {
        assert_eq!(parse_stock(None).unwrap(), 0.0);
        assert_eq!(parse_stock(Some(&json!(null))).unwrap(), 0.0);
        assert_eq!(parse_stock(Some(&json!(""))).unwrap(), 0.0);
        assert_eq!(parse_stock(Some(&json!("None"))).unwrap(), 0.0);
        assert_eq!(parse_stock(Some(&json!(" 2.5 "))).unwrap(), 2.5);
        assert_eq!(parse_stock(Some(&json!(7))).unwrap(), 7.0);
    }

    #[test]
    fn test_parse_stock_rejects_garbage() {
        assert!(parse_stock(Some(&json!("muito"))).is_err());
        assert!(parse_stock(Some(&json!(-1))).is_err());
        assert!(parse_stock(Some(&json!([1]))).is_err());
    }
}
