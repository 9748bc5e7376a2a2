use serde::{Deserialize, Serialize};

use crate::order::Order;

/// Headline figures for the overview page stat cards.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct OverviewStats {
    pub total_customers: i64,
    pub active_vendors: i64,
    pub total_products: i64,
    pub total_orders: i64,
    pub total_revenue: f64,
}

/// Row in the "Top Vendors" panel. `order_count` is resolved by joining
/// orders on the vendor name, not stored on the vendor row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct TopVendor {
    pub name: String,
    pub revenue: f64,
    pub order_count: i64,
    pub rating: f64,
}

/// Everything the overview page renders in one payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewMetrics {
    pub stats: OverviewStats,
    pub recent_orders: Vec<Order>,
    pub top_vendors: Vec<TopVendor>,
}
