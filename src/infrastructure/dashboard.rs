use async_trait::async_trait;

use crate::domain::catalog::LowStockItem;
use crate::domain::dashboard::{AnnualSales, DashboardStats, SalesOverview};
use crate::domain::order::OrderRecord;
use crate::domain::ports::DashboardSource;
use crate::errors::AppError;

use super::api_client::ApiClient;

#[derive(Clone)]
pub struct DashboardApi {
    client: ApiClient,
}

impl DashboardApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DashboardSource for DashboardApi {
    async fn stats(&self) -> Result<DashboardStats, AppError> {
        self.client
            .send_envelope(self.client.get("/dashboard/stats"))
            .await
    }

    async fn recent_orders(&self, limit: u32) -> Result<Vec<OrderRecord>, AppError> {
        let builder = self
            .client
            .get("/dashboard/recent-orders")
            .query(&[("limit", limit)]);
        self.client.send_envelope(builder).await
    }

    async fn low_stock(&self, threshold: u32) -> Result<Vec<LowStockItem>, AppError> {
        let builder = self
            .client
            .get("/dashboard/low-stock")
            .query(&[("threshold", threshold)]);
        self.client.send_envelope(builder).await
    }

    async fn sales_overview(&self, days: u32) -> Result<SalesOverview, AppError> {
        let builder = self
            .client
            .get("/dashboard/sales-overview")
            .query(&[("days", days)]);
        self.client.send_envelope(builder).await
    }

    async fn annual_sales(&self, year: i32) -> Result<AnnualSales, AppError> {
        let builder = self
            .client
            .get("/dashboard/annual-sales")
            .query(&[("year", year)]);
        self.client.send_envelope(builder).await
    }
}
