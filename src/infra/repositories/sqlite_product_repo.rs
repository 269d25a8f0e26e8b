use crate::domain::{
    models::product::{Product, NewProduct, RecipeLine, RecipeItem},
    ports::ProductRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::error;

const RECIPE_SELECT: &str =
    "SELECT pi.product_id AS product_id, i.id AS ingredient_id, i.name AS ingredient_name,
            pi.required_quantity AS required_quantity, i.unit AS unit,
            i.stock_quantity AS stock_quantity, i.active AS ingredient_active
     FROM product_ingredients pi
     JOIN ingredients i ON i.id = pi.ingredient_id";

pub struct SqliteProductRepo {
    pool: SqlitePool,
}

impl SqliteProductRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepo {
    async fn create_with_recipe(&self, product: &NewProduct, recipe: &[RecipeLine]) -> Result<Product, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let created = sqlx::query_as::<_, Product>(
            "INSERT INTO products (name, description, price, category, active, created_at) VALUES (?, ?, ?, ?, 1, ?) RETURNING *"
        )
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .bind(&product.category)
            .bind(Utc::now())
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        for line in recipe {
            sqlx::query("INSERT INTO product_ingredients (product_id, ingredient_id, required_quantity) VALUES (?, ?, ?)")
                .bind(created.id)
                .bind(line.ingredient_id)
                .bind(line.required_quantity)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    error!("Recipe line insert failed for product {}: {:?}", created.name, e);
                    AppError::Database(e)
                })?;
        }

        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError> {
        sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, AppError> {
        sqlx::query_as::<_, Product>("SELECT * FROM products WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_active(&self) -> Result<Vec<Product>, AppError> {
        sqlx::query_as::<_, Product>("SELECT * FROM products WHERE active = 1 ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn recipe(&self, product_id: i64) -> Result<Vec<RecipeItem>, AppError> {
        sqlx::query_as::<_, RecipeItem>(&format!("{} WHERE pi.product_id = ? ORDER BY pi.id ASC", RECIPE_SELECT))
            .bind(product_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn recipes_for_active(&self) -> Result<Vec<RecipeItem>, AppError> {
        sqlx::query_as::<_, RecipeItem>(&format!(
            "{} JOIN products p ON p.id = pi.product_id WHERE p.active = 1 ORDER BY pi.product_id ASC, pi.id ASC",
            RECIPE_SELECT
        ))
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn set_active(&self, id: i64, active: bool) -> Result<Product, AppError> {
        sqlx::query_as::<_, Product>("UPDATE products SET active = ? WHERE id = ? RETURNING *")
            .bind(active)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound("Item do cardápio não encontrado.".into()))
    }
}
