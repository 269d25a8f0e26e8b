use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Distinguishes an absent field (`None`) from an explicit `null` (`Some(None)`).
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    #[serde(rename = "senha")]
    pub password: Option<String>,
}

#[derive(Deserialize)]
pub struct RegisterUserRequest {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    #[serde(rename = "telefone")]
    pub phone: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "senha")]
    pub password: Option<String>,
    #[serde(rename = "papel")]
    pub role: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateUserRequest {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    #[serde(rename = "telefone")]
    pub phone: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "senha")]
    pub password: Option<String>,
    #[serde(rename = "papel")]
    pub role: Option<String>,
    pub status: Option<Value>,
}

#[derive(Deserialize)]
pub struct CreateIngredientRequest {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    #[serde(rename = "unidade")]
    pub unit: Option<String>,
    #[serde(rename = "quantidade_estoque")]
    pub stock_quantity: Option<f64>,
    pub status: Option<Value>,
}

#[derive(Deserialize)]
pub struct UpdateIngredientRequest {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    #[serde(rename = "unidade")]
    pub unit: Option<String>,
    #[serde(rename = "quantidade_estoque", default, deserialize_with = "present")]
    pub stock_quantity: Option<Option<Value>>,
    #[serde(default, deserialize_with = "present")]
    pub status: Option<Option<Value>>,
}

#[derive(Deserialize)]
pub struct RecipeLineRequest {
    #[serde(rename = "ingrediente_id", alias = "produto_id")]
    pub ingredient_id: Option<i64>,
    #[serde(rename = "quantidade_necessaria")]
    pub required_quantity: Option<f64>,
}

#[derive(Deserialize)]
pub struct CreateMenuItemRequest {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "preco")]
    pub price: Option<f64>,
    #[serde(rename = "categoria")]
    pub category: Option<String>,
    #[serde(rename = "ingredientes")]
    pub ingredients: Option<Vec<RecipeLineRequest>>,
}

#[derive(Deserialize)]
pub struct StatusRequest {
    pub status: Option<Value>,
}

#[derive(Deserialize)]
pub struct PlaceOrderRequest {
    #[serde(rename = "produto_id")]
    pub product_id: Option<i64>,
    #[serde(rename = "quantidade")]
    pub quantity: Option<i64>,
    #[serde(rename = "metodo_pagamento")]
    pub payment_method: Option<String>,
}

#[derive(Deserialize)]
pub struct OrderStatusRequest {
    pub status: Option<String>,
}

#[derive(Deserialize)]
pub struct RecordMovementRequest {
    #[serde(rename = "pedido_id")]
    pub order_id: Option<i64>,
    #[serde(rename = "valor_total")]
    pub total_value: Option<f64>,
    #[serde(rename = "entrada")]
    pub inflow: Option<Value>,
    #[serde(rename = "saida")]
    pub outflow: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_explicit_null_differs_from_absent() {
        let absent: UpdateIngredientRequest = serde_json::from_value(json!({})).unwrap();
        assert!(absent.stock_quantity.is_none());

        let null: UpdateIngredientRequest = serde_json::from_value(json!({"quantidade_estoque": null})).unwrap();
        assert!(matches!(null.stock_quantity, Some(None)));

        let set: UpdateIngredientRequest = serde_json::from_value(json!({"quantidade_estoque": "2.5"})).unwrap();
        assert_eq!(set.stock_quantity, Some(Some(json!("2.5"))));
    }

    #[test]
    fn test_recipe_line_accepts_legacy_key() {
        let line: RecipeLineRequest = serde_json::from_value(json!({"produto_id": 3, "quantidade_necessaria": 0.2})).unwrap();
        assert_eq!(line.ingredient_id, Some(3));

        let line: RecipeLineRequest = serde_json::from_value(json!({"ingrediente_id": 4, "quantidade_necessaria": 1})).unwrap();
        assert_eq!(line.ingredient_id, Some(4));
        assert_eq!(line.required_quantity, Some(1.0));
    }
}
