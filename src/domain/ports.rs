use async_trait::async_trait;

use crate::errors::AppError;

use super::catalog::LowStockItem;
use super::dashboard::{AnnualSales, DashboardStats, SalesOverview};
use super::order::{OrderDraft, OrderRecord};
use super::page::{PageRequest, PageSlice};
use super::session::Session;
use super::user::{Credentials, Registration};

/// Anything that can fetch one page of records for a list controller.
#[async_trait]
pub trait PageSource: Send + Sync {
    type Record: Send;

    async fn fetch_page(&self, request: &PageRequest) -> Result<PageSlice<Self::Record>, AppError>;
}

#[async_trait]
pub trait OrderGateway: Send + Sync {
    async fn create_order(&self, draft: &OrderDraft) -> Result<OrderRecord, AppError>;
}

/// Persistence for the signed-in session (token and user profile).
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Result<Option<Session>, AppError>;
    fn save(&self, session: &Session) -> Result<(), AppError>;
    fn clear(&self) -> Result<(), AppError>;
}

#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, credentials: &Credentials) -> Result<Session, AppError>;

    /// Returns the backend's confirmation message.
    async fn register(&self, registration: &Registration) -> Result<String, AppError>;
}

#[async_trait]
pub trait DashboardSource: Send + Sync {
    async fn stats(&self) -> Result<DashboardStats, AppError>;
    async fn recent_orders(&self, limit: u32) -> Result<Vec<OrderRecord>, AppError>;
    async fn low_stock(&self, threshold: u32) -> Result<Vec<LowStockItem>, AppError>;
    async fn sales_overview(&self, days: u32) -> Result<SalesOverview, AppError>;
    async fn annual_sales(&self, year: i32) -> Result<AnnualSales, AppError>;
}
