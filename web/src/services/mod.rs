pub mod api;
pub mod local_storage;
pub mod recipe_service;
pub mod user_service;
