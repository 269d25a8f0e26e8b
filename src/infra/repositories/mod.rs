pub mod sqlite_user_repo;
pub mod sqlite_ingredient_repo;
pub mod sqlite_product_repo;
pub mod sqlite_order_repo;
pub mod sqlite_movement_repo;
