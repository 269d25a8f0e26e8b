use serde::Serialize;

use crate::domain::models::{
    ingredient::Ingredient, movement::Movement, order::OrderDetails, product::{MenuItem, Product}, user::User,
};

#[derive(Serialize)]
pub struct UserCreatedResponse {
    pub msg: String,
    pub user_id: i64,
}

/// Body returned after editing a user.
#[derive(Serialize)]
pub struct UserUpdatedResponse {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "telefone")]
    pub phone: String,
    pub email: String,
    #[serde(rename = "papel")]
    pub role: String,
    pub status: bool,
}

impl From<User> for UserUpdatedResponse {
    fn from(user: User) -> Self {
        Self {
            name: user.name,
            phone: user.phone,
            email: user.email,
            role: user.role,
            status: user.active,
        }
    }
}

#[derive(Serialize)]
pub struct UserListResponse {
    pub usuarios: Vec<User>,
}

#[derive(Serialize)]
pub struct IngredientResponse {
    pub msg: String,
    pub ingrediente: Ingredient,
}

#[derive(Serialize)]
pub struct IngredientListResponse {
    pub produtos: Vec<Ingredient>,
}

#[derive(Serialize)]
pub struct MenuItemResponse {
    pub msg: String,
    pub item: Product,
}

#[derive(Serialize)]
pub struct MenuResponse {
    pub cardapio: Vec<MenuItem>,
}

#[derive(Serialize)]
pub struct OrderResponse {
    pub msg: String,
    pub pedido: OrderDetails,
}

#[derive(Serialize)]
pub struct OrderListResponse {
    pub pedidos: Vec<OrderDetails>,
}

#[derive(Serialize)]
pub struct MovementResponse {
    pub msg: String,
    pub movimento: Movement,
}

#[derive(Serialize)]
pub struct MovementListResponse {
    pub movimentos: Vec<Movement>,
}
