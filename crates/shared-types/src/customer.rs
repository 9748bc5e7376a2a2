use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Customer account row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub total_orders: i32,
    pub total_spent: f64,
    pub status: String,
    pub joined_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Customer account status values matching the DB CHECK constraint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum CustomerStatus {
    Active,
    Inactive,
}

impl CustomerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "active" => Some(Self::Active),
            "inactive" => Some(Self::Inactive),
            _ => None,
        }
    }
}

/// Status an enable/disable action moves the account to.
pub fn toggled_status(current: &str) -> &'static str {
    if current == "active" {
        "inactive"
    } else {
        "active"
    }
}

impl Customer {
    /// Case-insensitive match against name or email. An empty query
    /// matches everything.
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let q = query.to_lowercase();
        self.name.to_lowercase().contains(&q) || self.email.to_lowercase().contains(&q)
    }

    /// Equality match on status; the `"all"` filter matches everything.
    pub fn matches_status(&self, filter: &str) -> bool {
        filter == "all" || self.status == filter
    }
}

/// Counts for the stat cards above the customer table.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CustomerStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
}

impl CustomerStats {
    /// Partition the full (unfiltered) list on status.
    pub fn from_list(customers: &[Customer]) -> Self {
        Self {
            total: customers.len(),
            active: customers.iter().filter(|c| c.status == "active").count(),
            inactive: customers.iter().filter(|c| c.status == "inactive").count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::sample_customers;

    #[test]
    fn query_matches_name_and_email_case_insensitive() {
        let customers = sample_customers();
        let amina = &customers[0];
        assert!(amina.matches_query("amina"));
        assert!(amina.matches_query("AMINA"));
        assert!(amina.matches_query("amina@example.com"));
        assert!(!amina.matches_query("chidi"));
    }

    #[test]
    fn empty_query_matches_everything() {
        for c in sample_customers() {
            assert!(c.matches_query(""));
        }
    }

    #[test]
    fn all_filter_bypasses_status() {
        for c in sample_customers() {
            assert!(c.matches_status("all"));
        }
    }

    #[test]
    fn status_filter_is_exact() {
        let customers = sample_customers();
        let inactive: Vec<_> = customers
            .iter()
            .filter(|c| c.matches_status("inactive"))
            .collect();
        assert_eq!(inactive.len(), 1);
        assert_eq!(inactive[0].name, "Mohammed Ali");
    }

    #[test]
    fn stats_partition_full_list() {
        let stats = CustomerStats::from_list(&sample_customers());
        assert_eq!(stats.total, 5);
        assert_eq!(stats.active, 4);
        assert_eq!(stats.inactive, 1);
        assert_eq!(stats.active + stats.inactive, stats.total);
    }

    #[test]
    fn toggle_flips_between_active_and_inactive() {
        assert_eq!(toggled_status("active"), "inactive");
        assert_eq!(toggled_status("inactive"), "active");
    }
}
