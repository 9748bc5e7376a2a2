use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Vendor (store) row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct Vendor {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub product_count: i32,
    pub rating: f64,
    pub revenue: f64,
    pub status: String,
    pub verification_status: String,
    pub joined_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Vendor approval status values matching the DB CHECK constraint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum VendorStatus {
    Approved,
    Pending,
    Rejected,
}

impl VendorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Pending => "pending",
            Self::Rejected => "rejected",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "approved" => Some(Self::Approved),
            "pending" => Some(Self::Pending),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

/// Identity verification states, shown as a second badge next to the
/// approval status.
pub const VERIFICATION_STATUSES: &[&str] = &["verified", "pending", "unverified"];

impl Vendor {
    /// Case-insensitive match against store name or email. An empty query
    /// matches everything.
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let q = query.to_lowercase();
        self.name.to_lowercase().contains(&q) || self.email.to_lowercase().contains(&q)
    }

    /// Equality match on approval status; `"all"` matches everything.
    pub fn matches_status(&self, filter: &str) -> bool {
        filter == "all" || self.status == filter
    }

    pub fn is_verified(&self) -> bool {
        self.verification_status == "verified"
    }
}

/// Counts for the stat cards above the vendor table.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct VendorStats {
    pub total: usize,
    pub approved: usize,
    pub pending: usize,
    pub verified: usize,
}

impl VendorStats {
    /// Partition the full (unfiltered) list. `verified` counts the
    /// verification badge, not the approval status.
    pub fn from_list(vendors: &[Vendor]) -> Self {
        Self {
            total: vendors.len(),
            approved: vendors.iter().filter(|v| v.status == "approved").count(),
            pending: vendors.iter().filter(|v| v.status == "pending").count(),
            verified: vendors.iter().filter(|v| v.is_verified()).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::sample_vendors;

    #[test]
    fn query_matches_store_name_and_email() {
        let vendors = sample_vendors();
        let afristyle = &vendors[0];
        assert!(afristyle.matches_query("afristyle"));
        assert!(afristyle.matches_query("contact@afristyle.com"));
        assert!(afristyle.matches_query("BOUTIQUE"));
        assert!(!afristyle.matches_query("heritage"));
    }

    #[test]
    fn status_filter_separates_pending_vendors() {
        let vendors = sample_vendors();
        let pending: Vec<_> = vendors
            .iter()
            .filter(|v| v.matches_status("pending"))
            .collect();
        assert_eq!(pending.len(), 2);
        assert!(pending.iter().all(|v| v.status == "pending"));
    }

    #[test]
    fn stats_count_verification_independently_of_approval() {
        let stats = VendorStats::from_list(&sample_vendors());
        assert_eq!(stats.total, 5);
        assert_eq!(stats.approved, 3);
        assert_eq!(stats.pending, 2);
        // Fashion Hub is pending approval but its verification is also
        // pending, so only the three approved stores count as verified.
        assert_eq!(stats.verified, 3);
    }

    #[test]
    fn vendor_status_vocabulary_roundtrips() {
        for status in [
            VendorStatus::Approved,
            VendorStatus::Pending,
            VendorStatus::Rejected,
        ] {
            let parsed = VendorStatus::from_str_opt(status.as_str());
            assert_eq!(parsed, Some(status));
        }
        assert_eq!(VendorStatus::from_str_opt("suspended"), None);
    }
}
