pub mod api_client;
pub mod auth;
pub mod catalog;
pub mod dashboard;
pub mod models;
pub mod orders;
pub mod session_store;
pub mod users;
