use chrono::{Datelike, Utc};

use crate::domain::catalog::LowStockItem;
use crate::domain::dashboard::{AnnualSales, DashboardStats, SalesOverview};
use crate::domain::order::OrderRecord;
use crate::domain::ports::DashboardSource;
use crate::errors::AppError;

use super::outcome::Outcome;

pub const RECENT_ORDERS_LIMIT: u32 = 10;
pub const LOW_STOCK_THRESHOLD: u32 = 5;
pub const SALES_OVERVIEW_DAYS: u32 = 30;

/// Every panel of the admin dashboard, each with its own outcome.
#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    pub stats: Outcome<DashboardStats>,
    pub recent_orders: Outcome<Vec<OrderRecord>>,
    pub low_stock: Outcome<Vec<LowStockItem>>,
    pub sales: Outcome<SalesOverview>,
}

impl DashboardSnapshot {
    pub fn pending() -> Self {
        Self {
            stats: Outcome::Pending,
            recent_orders: Outcome::Pending,
            low_stock: Outcome::Pending,
            sales: Outcome::Pending,
        }
    }

    pub fn errors(&self) -> Vec<&AppError> {
        [
            self.stats.error(),
            self.recent_orders.error(),
            self.low_stock.error(),
            self.sales.error(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// First error that should end the session, if any panel saw one.
    pub fn auth_failure(&self) -> Option<&AppError> {
        self.errors().into_iter().find(|e| e.requires_login())
    }
}

pub struct DashboardService<D> {
    source: D,
}

impl<D: DashboardSource> DashboardService<D> {
    pub fn new(source: D) -> Self {
        Self { source }
    }

    /// Dispatches all panel requests together. A failing panel never
    /// affects the others.
    pub async fn load(&self) -> DashboardSnapshot {
        let (stats, recent_orders, low_stock, sales) = futures::join!(
            self.source.stats(),
            self.source.recent_orders(RECENT_ORDERS_LIMIT),
            self.source.low_stock(LOW_STOCK_THRESHOLD),
            self.source.sales_overview(SALES_OVERVIEW_DAYS),
        );
        let snapshot = DashboardSnapshot {
            stats: stats.into(),
            recent_orders: recent_orders.into(),
            low_stock: low_stock.into(),
            sales: sales.into(),
        };
        for e in snapshot.errors() {
            log::warn!("Dashboard panel failed: {}", e);
        }
        snapshot
    }

    /// Annual sales for `year`, defaulting to the current year.
    pub async fn annual_sales(&self, year: Option<i32>) -> Outcome<AnnualSales> {
        let year = year.unwrap_or_else(|| Utc::now().year());
        self.source.annual_sales(year).await.into()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use bigdecimal::BigDecimal;

    use super::*;

    #[derive(Default)]
    struct FakeDashboard {
        years: Mutex<Vec<i32>>,
    }

    #[async_trait]
    impl DashboardSource for FakeDashboard {
        async fn stats(&self) -> Result<DashboardStats, AppError> {
            Ok(DashboardStats {
                total_orders: 1234,
                total_revenue: BigDecimal::from(45678),
                ..Default::default()
            })
        }

        async fn recent_orders(&self, _limit: u32) -> Result<Vec<OrderRecord>, AppError> {
            Err(AppError::Network("timed out".into()))
        }

        async fn low_stock(&self, threshold: u32) -> Result<Vec<LowStockItem>, AppError> {
            Ok(vec![LowStockItem {
                item_name: "Hand Sanitizer".into(),
                current_stock: 3,
                min_stock_threshold: threshold as i32,
            }])
        }

        async fn sales_overview(&self, _days: u32) -> Result<SalesOverview, AppError> {
            Err(AppError::Forbidden)
        }

        async fn annual_sales(&self, year: i32) -> Result<AnnualSales, AppError> {
            self.years.lock().unwrap().push(year);
            Ok(AnnualSales {
                year,
                monthly_sales: Vec::new(),
            })
        }
    }

    #[tokio::test]
    async fn panels_resolve_independently() {
        let service = DashboardService::new(FakeDashboard::default());
        let snapshot = service.load().await;

        assert_eq!(snapshot.stats.success().unwrap().total_orders, 1234);
        assert_eq!(snapshot.low_stock.success().unwrap()[0].min_stock_threshold, 5);
        assert!(matches!(snapshot.recent_orders, Outcome::Failure(AppError::Network(_))));
        assert_eq!(snapshot.sales.error(), Some(&AppError::Forbidden));
        assert_eq!(snapshot.errors().len(), 2);
        assert!(snapshot.auth_failure().is_none());
    }

    #[tokio::test]
    async fn annual_sales_defaults_to_current_year() {
        let service = DashboardService::new(FakeDashboard::default());
        service.annual_sales(None).await;
        service.annual_sales(Some(2024)).await;
        let years = service.source.years.lock().unwrap().clone();
        assert_eq!(years, vec![Utc::now().year(), 2024]);
    }

    #[test]
    fn pending_snapshot_has_no_errors() {
        let snapshot = DashboardSnapshot::pending();
        assert!(snapshot.stats.is_pending());
        assert!(snapshot.errors().is_empty());
    }
}
