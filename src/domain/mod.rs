pub mod cart;
pub mod catalog;
pub mod dashboard;
pub mod errors;
pub mod money;
pub mod order;
pub mod page;
pub mod ports;
pub mod session;
pub mod user;
