use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Order row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct Order {
    pub id: Uuid,
    pub order_number: String,
    pub customer: String,
    pub vendor: String,
    pub items: i32,
    pub total: f64,
    pub status: String,
    pub payment_method: String,
    pub placed_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Order lifecycle states, in the sequence offered by the status picker.
pub const ORDER_STATUSES: &[&str] = &["pending", "processing", "shipped", "completed", "cancelled"];

/// Order status values matching the DB CHECK constraint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "processing" => Some(Self::Processing),
            "shipped" => Some(Self::Shipped),
            "completed" => Some(Self::Completed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

impl Order {
    /// Case-insensitive match against order number, customer name, or
    /// vendor name. An empty query matches everything.
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let q = query.to_lowercase();
        self.order_number.to_lowercase().contains(&q)
            || self.customer.to_lowercase().contains(&q)
            || self.vendor.to_lowercase().contains(&q)
    }

    /// Equality match on status; `"all"` matches everything.
    pub fn matches_status(&self, filter: &str) -> bool {
        filter == "all" || self.status == filter
    }
}

/// Counts for the stat cards above the order table.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OrderStats {
    pub total: usize,
    pub pending: usize,
    pub processing: usize,
    pub completed: usize,
    pub shipped: usize,
    pub cancelled: usize,
}

impl OrderStats {
    /// Partition the full (unfiltered) list on status.
    pub fn from_list(orders: &[Order]) -> Self {
        let count = |status: &str| orders.iter().filter(|o| o.status == status).count();
        Self {
            total: orders.len(),
            pending: count("pending"),
            processing: count("processing"),
            completed: count("completed"),
            shipped: count("shipped"),
            cancelled: count("cancelled"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::sample_orders;

    #[test]
    fn query_matches_number_customer_and_vendor() {
        let orders = sample_orders();
        let first = &orders[0];
        assert!(first.matches_query("ord-1234"));
        assert!(first.matches_query("amina"));
        assert!(first.matches_query("afristyle"));
        assert!(!first.matches_query("heritage"));
    }

    #[test]
    fn status_partition_covers_whole_list() {
        let stats = OrderStats::from_list(&sample_orders());
        assert_eq!(stats.total, 7);
        assert_eq!(
            stats.pending + stats.processing + stats.completed + stats.shipped + stats.cancelled,
            stats.total
        );
    }

    #[test]
    fn sample_counts_per_status() {
        let stats = OrderStats::from_list(&sample_orders());
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.processing, 2);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.shipped, 1);
        assert_eq!(stats.cancelled, 1);
    }

    #[test]
    fn status_vocabulary_matches_picker_order() {
        for s in ORDER_STATUSES {
            assert!(OrderStatus::from_str_opt(s).is_some());
        }
        assert_eq!(OrderStatus::from_str_opt("refunded"), None);
        assert_eq!(ORDER_STATUSES.len(), 5);
    }
}
