use crate::domain::{
    models::order::{NewOrder, OrderDetails},
    ports::OrderRepository,
    services::ordering::{StockDraw, STOCK_EPSILON},
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use tracing::{error, warn};

const ORDER_SELECT: &str =
    "SELECT o.id AS id, o.user_id AS user_id, u.name AS user_name,
            o.product_id AS product_id, p.name AS product_name,
            o.quantity AS quantity, o.payment_method AS payment_method,
            o.created_at AS created_at, o.status AS status, o.total_value AS total_value
     FROM orders o
     LEFT JOIN users u ON u.id = o.user_id
     LEFT JOIN products p ON p.id = o.product_id";

pub struct SqliteOrderRepo {
    pool: SqlitePool,
}

impl SqliteOrderRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for SqliteOrderRepo {
    async fn place(&self, order: &NewOrder, draws: &[StockDraw]) -> Result<OrderDetails, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        for draw in draws {
            // Guarded so a concurrent order can never push stock below zero.
            let result = sqlx::query(
                "UPDATE ingredients SET stock_quantity = MAX(stock_quantity - ?, 0)
                 WHERE id = ? AND active = 1 AND stock_quantity >= ? - ?"
            )
                .bind(draw.amount)
                .bind(draw.ingredient_id)
                .bind(draw.amount)
                .bind(STOCK_EPSILON)
                .execute(&mut *tx)
                .await
                .map_err(AppError::Database)?;

            if result.rows_affected() == 0 {
                warn!("Stock draw rejected for ingredient {}", draw.ingredient_id);
                return Err(AppError::Validation(format!(
                    "Estoque insuficiente para o ingrediente {}.",
                    draw.ingredient_name
                )));
            }
        }

        let row = sqlx::query(
            "INSERT INTO orders (user_id, product_id, quantity, payment_method, total_value, status, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING id"
        )
            .bind(order.user_id)
            .bind(order.product_id)
            .bind(order.quantity)
            .bind(&order.payment_method)
            .bind(order.total_value)
            .bind(&order.status)
            .bind(order.created_at)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                error!("SQLite order insert failed: {:?}", e);
                AppError::Database(e)
            })?;
        let id: i64 = row.get("id");

        let created = sqlx::query_as::<_, OrderDetails>(&format!("{} WHERE o.id = ?", ORDER_SELECT))
            .bind(id)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<OrderDetails>, AppError> {
        sqlx::query_as::<_, OrderDetails>(&format!("{} WHERE o.id = ?", ORDER_SELECT))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_all(&self) -> Result<Vec<OrderDetails>, AppError> {
        sqlx::query_as::<_, OrderDetails>(&format!("{} ORDER BY o.id DESC", ORDER_SELECT))
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_user(&self, user_id: i64) -> Result<Vec<OrderDetails>, AppError> {
        sqlx::query_as::<_, OrderDetails>(&format!("{} WHERE o.user_id = ? ORDER BY o.id DESC", ORDER_SELECT))
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update_status(&self, id: i64, status: &str) -> Result<OrderDetails, AppError> {
        let result = sqlx::query("UPDATE orders SET status = ? WHERE id = ?")
            .bind(status)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Pedido não encontrado.".into()));
        }

        self.find_by_id(id).await?
            .ok_or_else(|| AppError::NotFound("Pedido não encontrado.".into()))
    }
}
