pub mod auth_service;
pub mod ordering;
pub mod password;
pub mod status_flag;
