pub mod auth;
pub mod ingredient;
pub mod movement;
pub mod order;
pub mod product;
pub mod user;
