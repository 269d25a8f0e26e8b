use crate::domain::models::{
    user::{User, NewUser},
    ingredient::{Ingredient, NewIngredient},
    product::{Product, NewProduct, RecipeLine, RecipeItem},
    order::{NewOrder, OrderDetails},
    movement::{Movement, NewMovement},
};
use crate::domain::services::ordering::StockDraw;
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &NewUser) -> Result<User, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, AppError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<User>, AppError>;
    async fn count(&self) -> Result<i64, AppError>;
    async fn list(&self) -> Result<Vec<User>, AppError>;
    async fn update(&self, user: &User) -> Result<User, AppError>;
}

#[async_trait]
pub trait IngredientRepository: Send + Sync {
    async fn create(&self, ingredient: &NewIngredient) -> Result<Ingredient, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Ingredient>, AppError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Ingredient>, AppError>;
    async fn list(&self) -> Result<Vec<Ingredient>, AppError>;
    async fn update(&self, ingredient: &Ingredient) -> Result<Ingredient, AppError>;
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Inserts the product and its recipe atomically.
    async fn create_with_recipe(&self, product: &NewProduct, recipe: &[RecipeLine]) -> Result<Product, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, AppError>;
    async fn list_active(&self) -> Result<Vec<Product>, AppError>;
    async fn recipe(&self, product_id: i64) -> Result<Vec<RecipeItem>, AppError>;
    async fn recipes_for_active(&self) -> Result<Vec<RecipeItem>, AppError>;
    async fn set_active(&self, id: i64, active: bool) -> Result<Product, AppError>;
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Draws the stock and inserts the order in one transaction.
    async fn place(&self, order: &NewOrder, draws: &[StockDraw]) -> Result<OrderDetails, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<OrderDetails>, AppError>;
    async fn list_all(&self) -> Result<Vec<OrderDetails>, AppError>;
    async fn list_by_user(&self, user_id: i64) -> Result<Vec<OrderDetails>, AppError>;
    async fn update_status(&self, id: i64, status: &str) -> Result<OrderDetails, AppError>;
}

#[async_trait]
pub trait MovementRepository: Send + Sync {
    async fn create(&self, movement: &NewMovement) -> Result<Movement, AppError>;
    async fn list_by_order(&self, order_id: i64) -> Result<Vec<Movement>, AppError>;
}
