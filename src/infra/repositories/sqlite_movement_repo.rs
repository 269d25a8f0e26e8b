use crate::domain::{
    models::movement::{Movement, MovementKind, NewMovement},
    ports::MovementRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteMovementRepo {
    pool: SqlitePool,
}

impl SqliteMovementRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovementRepository for SqliteMovementRepo {
    async fn create(&self, movement: &NewMovement) -> Result<Movement, AppError> {
        sqlx::query_as::<_, Movement>(
            "INSERT INTO movements (order_id, total_value, inflow, outflow) VALUES (?, ?, ?, ?) RETURNING *"
        )
            .bind(movement.order_id)
            .bind(movement.total_value)
            .bind(movement.kind == MovementKind::Inflow)
            .bind(movement.kind == MovementKind::Outflow)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_order(&self, order_id: i64) -> Result<Vec<Movement>, AppError> {
        sqlx::query_as::<_, Movement>("SELECT * FROM movements WHERE order_id = ? ORDER BY id ASC")
            .bind(order_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
