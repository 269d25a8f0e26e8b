pub mod auth;
pub mod health;
pub mod ingredient;
pub mod menu;
pub mod movement;
pub mod order;
pub mod user;
