use crate::domain::{models::ingredient::{Ingredient, NewIngredient}, ports::IngredientRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteIngredientRepo {
    pool: SqlitePool,
}

impl SqliteIngredientRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IngredientRepository for SqliteIngredientRepo {
    async fn create(&self, ingredient: &NewIngredient) -> Result<Ingredient, AppError> {
        sqlx::query_as::<_, Ingredient>(
            "INSERT INTO ingredients (name, unit, stock_quantity, active) VALUES (?, ?, ?, ?) RETURNING *"
        )
            .bind(&ingredient.name)
            .bind(ingredient.unit.as_str())
            .bind(ingredient.stock_quantity)
            .bind(ingredient.active)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Ingredient>, AppError> {
        sqlx::query_as::<_, Ingredient>("SELECT * FROM ingredients WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Ingredient>, AppError> {
        sqlx::query_as::<_, Ingredient>("SELECT * FROM ingredients WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Ingredient>, AppError> {
        sqlx::query_as::<_, Ingredient>("SELECT * FROM ingredients ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, ingredient: &Ingredient) -> Result<Ingredient, AppError> {
        sqlx::query_as::<_, Ingredient>(
            "UPDATE ingredients SET name=?, unit=?, stock_quantity=?, active=? WHERE id=? RETURNING *"
        )
            .bind(&ingredient.name)
            .bind(&ingredient.unit)
            .bind(ingredient.stock_quantity)
            .bind(ingredient.active)
            .bind(ingredient.id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound("Ingrediente não encontrado.".into()))
    }
}
