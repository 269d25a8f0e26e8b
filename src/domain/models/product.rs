use serde::Serialize;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, FromRow, Clone)]
pub struct Product {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "preco")]
    pub price: f64,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "status")]
    pub active: bool,
    #[serde(skip_serializing)]
    pub created_at: DateTime<Utc>,
}

pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
}

/// One line of a recipe as submitted: which ingredient and how much of it per unit sold.
#[derive(Debug, Clone)]
pub struct RecipeLine {
    pub ingredient_id: i64,
    pub required_quantity: f64,
}

/// A recipe line joined with its ingredient.
#[derive(Debug, Serialize, FromRow, Clone)]
pub struct RecipeItem {
    #[serde(skip_serializing)]
    pub product_id: i64,
    #[serde(rename = "ingrediente_id")]
    pub ingredient_id: i64,
    #[serde(rename = "nome")]
    pub ingredient_name: String,
    #[serde(rename = "quantidade_necessaria")]
    pub required_quantity: f64,
    #[serde(rename = "unidade")]
    pub unit: String,
    #[serde(skip_serializing)]
    pub stock_quantity: f64,
    #[serde(skip_serializing)]
    pub ingredient_active: bool,
}

#[derive(Debug, Serialize)]
pub struct MenuItem {
    #[serde(flatten)]
    pub product: Product,
    #[serde(rename = "ingredientes")]
    pub ingredients: Vec<RecipeItem>,
}
