use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub total_orders: u64,
    #[serde(with = "super::money")]
    pub total_revenue: BigDecimal,
    pub total_products: u64,
    pub low_stock_count: u64,
    pub order_growth_percentage: f64,
    pub revenue_growth_percentage: f64,
    pub product_growth_percentage: f64,
    pub low_stock_change_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySales {
    pub date: String,
    pub revenue: f64,
    #[serde(default)]
    pub order_count: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SalesOverview {
    pub daily_sales: Vec<DailySales>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySales {
    pub month: String,
    pub revenue: f64,
    #[serde(default)]
    pub order_count: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnnualSales {
    pub year: i32,
    pub monthly_sales: Vec<MonthlySales>,
}

impl AnnualSales {
    pub fn total_revenue(&self) -> f64 {
        self.monthly_sales.iter().map(|m| m.revenue).sum()
    }
}

/// Compact figure for stat cards: `1234` -> `1.2K`, `2500000` -> `2.5M`.
pub fn format_count(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// Signed growth figure with one decimal, e.g. `+12.0%`.
pub fn format_growth(percentage: f64) -> String {
    let sign = if percentage >= 0.0 { "+" } else { "" };
    format!("{sign}{percentage:.1}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_stats_fall_back_to_zero() {
        let stats: DashboardStats =
            serde_json::from_str(r#"{"totalOrders": 1234, "totalRevenue": 45678.5}"#).unwrap();
        assert_eq!(stats.total_orders, 1234);
        assert_eq!(stats.low_stock_count, 0);
        assert_eq!(stats.order_growth_percentage, 0.0);
    }

    #[test]
    fn stat_card_formatting() {
        assert_eq!(format_count(567), "567");
        assert_eq!(format_count(1234), "1.2K");
        assert_eq!(format_count(2_500_000), "2.5M");
        assert_eq!(format_growth(12.0), "+12.0%");
        assert_eq!(format_growth(-5.0), "-5.0%");
    }

    #[test]
    fn annual_revenue_sums_months() {
        let annual: AnnualSales = serde_json::from_str(
            r#"{"year": 2026, "monthlySales": [
                {"month": "Jan", "revenue": 100.5, "orderCount": 3},
                {"month": "Feb", "revenue": 49.5, "orderCount": 1}]}"#,
        )
        .unwrap();
        assert_eq!(annual.total_revenue(), 150.0);
    }
}
