use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::{
    requests::{CreateMenuItemRequest, RecipeLineRequest, StatusRequest},
    responses::{MenuItemResponse, MenuResponse},
};
use crate::api::extractors::{auth::AdminUser, json::JsonBody, path::PathParam};
use crate::domain::models::product::{MenuItem, NewProduct, RecipeItem, RecipeLine};
use crate::domain::services::status_flag::require_flag;
use crate::error::AppError;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn validate_recipe(lines: Vec<RecipeLineRequest>) -> Result<Vec<RecipeLine>, AppError> {
    if lines.is_empty() {
        return Err(AppError::Validation("O campo 'ingredientes' deve conter pelo menos um ingrediente.".into()));
    }

    lines
        .into_iter()
        .map(|line| match (line.ingredient_id, line.required_quantity) {
            (Some(ingredient_id), Some(required_quantity)) if ingredient_id > 0 && required_quantity > 0.0 => {
                Ok(RecipeLine { ingredient_id, required_quantity })
            }
            _ => Err(AppError::Validation(
                "Cada ingrediente precisa de ingrediente_id e quantidade_necessaria maior que zero.".into(),
            )),
        })
        .collect()
}

pub async fn create_menu_item(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    JsonBody(payload): JsonBody<CreateMenuItemRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (Some(name), Some(price), Some(category), Some(lines)) = (
        non_blank(payload.name),
        payload.price,
        non_blank(payload.category),
        payload.ingredients,
    ) else {
        return Err(AppError::Validation("Todos os campos são obrigatórios.".into()));
    };

    if !price.is_finite() || price < 0.0 {
        return Err(AppError::Validation("Preço inválido.".into()));
    }

    let recipe = validate_recipe(lines)?;

    if state.product_repo.find_by_name(&name).await?.is_some() {
        return Err(AppError::Conflict("Já existe um item com esse nome no cardápio.".into()));
    }

    for line in &recipe {
        if state.ingredient_repo.find_by_id(line.ingredient_id).await?.is_none() {
            return Err(AppError::Validation(format!("Ingrediente com id {} não encontrado.", line.ingredient_id)));
        }
    }

    let product = NewProduct {
        name,
        description: non_blank(payload.description),
        price,
        category,
    };
    let created = state.product_repo.create_with_recipe(&product, &recipe).await?;

    info!("Created menu item {} with {} recipe lines", created.name, recipe.len());

    Ok((StatusCode::CREATED, Json(MenuItemResponse {
        msg: "Item do cardápio cadastrado com sucesso!".to_string(),
        item: created,
    })))
}

pub async fn list_menu(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let products = state.product_repo.list_active().await?;

    let mut recipes: HashMap<i64, Vec<RecipeItem>> = HashMap::new();
    for line in state.product_repo.recipes_for_active().await? {
        recipes.entry(line.product_id).or_default().push(line);
    }

    let cardapio = products
        .into_iter()
        .map(|product| {
            let ingredients = recipes.remove(&product.id).unwrap_or_default();
            MenuItem { product, ingredients }
        })
        .collect();

    Ok(Json(MenuResponse { cardapio }))
}

pub async fn set_menu_item_status(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    PathParam(product_id): PathParam<i64>,
    JsonBody(payload): JsonBody<StatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    let active = require_flag(payload.status.as_ref().unwrap_or(&Value::Null), "status")?;
    let updated = state.product_repo.set_active(product_id, active).await?;

    info!("Menu item {} active={}", updated.id, updated.active);

    Ok(Json(MenuItemResponse {
        msg: "Status do item atualizado com sucesso!".to_string(),
        item: updated,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_recipe() {
        assert!(validate_recipe(vec![]).is_err());

        let ok = validate_recipe(vec![RecipeLineRequest { ingredient_id: Some(2), required_quantity: Some(0.5) }]).unwrap();
        assert_eq!(ok[0].ingredient_id, 2);

        let missing_qty = vec![RecipeLineRequest { ingredient_id: Some(2), required_quantity: None }];
        assert!(validate_recipe(missing_qty).is_err());

        let zero_qty = vec![RecipeLineRequest { ingredient_id: Some(2), required_quantity: Some(0.0) }];
        assert!(validate_recipe(zero_qty).is_err());
    }
}
