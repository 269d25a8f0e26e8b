use std::sync::Arc;
use crate::domain::ports::{
    UserRepository, IngredientRepository, ProductRepository, OrderRepository, MovementRepository,
};
use crate::domain::services::auth_service::AuthService;

#[derive(Clone)]
pub struct AppState {
    pub user_repo: Arc<dyn UserRepository>,
    pub ingredient_repo: Arc<dyn IngredientRepository>,
    pub product_repo: Arc<dyn ProductRepository>,
    pub order_repo: Arc<dyn OrderRepository>,
    pub movement_repo: Arc<dyn MovementRepository>,
    pub auth_service: Arc<AuthService>,
}
