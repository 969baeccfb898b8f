pub mod account_service;
pub mod checkout_service;
pub mod dashboard_service;
pub mod list_controller;
pub mod outcome;
pub mod session_context;
