use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Product listing row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub vendor: String,
    pub category: String,
    pub price: f64,
    pub stock: i32,
    pub status: String,
    pub rating: f64,
    pub sales: i32,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Categories offered by the category filter dropdown.
pub const PRODUCT_CATEGORIES: &[&str] = &["Clothing", "Accessories", "Jewelry", "Fabrics"];

/// Stock bands used by the stock filter and the table badge.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum StockLevel {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockLevel {
    /// Band for a stock count: more than 10 units is in stock, 1 to 10 is
    /// low, zero is out.
    pub fn of(stock: i32) -> Self {
        if stock == 0 {
            Self::OutOfStock
        } else if stock <= 10 {
            Self::LowStock
        } else {
            Self::InStock
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InStock => "in_stock",
            Self::LowStock => "low_stock",
            Self::OutOfStock => "out_of_stock",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::InStock => "In Stock",
            Self::LowStock => "Low Stock",
            Self::OutOfStock => "Out of Stock",
        }
    }
}

impl Product {
    /// Case-insensitive match against product name or vendor name. An
    /// empty query matches everything.
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let q = query.to_lowercase();
        self.name.to_lowercase().contains(&q) || self.vendor.to_lowercase().contains(&q)
    }

    /// Equality match on category; `"all"` matches everything.
    pub fn matches_category(&self, filter: &str) -> bool {
        filter == "all" || self.category == filter
    }

    /// Match on the stock band; `"all"` matches everything.
    pub fn matches_stock(&self, filter: &str) -> bool {
        filter == "all" || self.stock_level().as_str() == filter
    }

    pub fn stock_level(&self) -> StockLevel {
        StockLevel::of(self.stock)
    }
}

/// Counts for the stat cards above the product table.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductStats {
    pub total: usize,
    pub active: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
}

impl ProductStats {
    /// Partition the full (unfiltered) list. `active` counts the listing
    /// status; the stock columns count the computed bands.
    pub fn from_list(products: &[Product]) -> Self {
        Self {
            total: products.len(),
            active: products.iter().filter(|p| p.status == "active").count(),
            low_stock: products
                .iter()
                .filter(|p| p.stock_level() == StockLevel::LowStock)
                .count(),
            out_of_stock: products
                .iter()
                .filter(|p| p.stock_level() == StockLevel::OutOfStock)
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::sample_products;

    #[test]
    fn stock_bands_split_at_zero_and_ten() {
        assert_eq!(StockLevel::of(0), StockLevel::OutOfStock);
        assert_eq!(StockLevel::of(1), StockLevel::LowStock);
        assert_eq!(StockLevel::of(10), StockLevel::LowStock);
        assert_eq!(StockLevel::of(11), StockLevel::InStock);
        assert_eq!(StockLevel::of(156), StockLevel::InStock);
    }

    #[test]
    fn query_matches_product_or_vendor_name() {
        let products = sample_products();
        let dress = &products[0];
        assert!(dress.matches_query("ankara"));
        assert!(dress.matches_query("afristyle"));
        assert!(!dress.matches_query("kaftan"));
    }

    #[test]
    fn category_filter_is_exact() {
        let products = sample_products();
        let clothing: Vec<_> = products
            .iter()
            .filter(|p| p.matches_category("Clothing"))
            .collect();
        assert_eq!(clothing.len(), 2);
        assert!(products.iter().all(|p| p.matches_category("all")));
    }

    #[test]
    fn stock_filter_uses_computed_band_not_status() {
        let products = sample_products();
        let low: Vec<_> = products
            .iter()
            .filter(|p| p.matches_stock("low_stock"))
            .collect();
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].name, "Custom Embroidered Cap");

        let out: Vec<_> = products
            .iter()
            .filter(|p| p.matches_stock("out_of_stock"))
            .collect();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Leather Handbag");
    }

    #[test]
    fn combined_filters_intersect() {
        let products = sample_products();
        let hits: Vec<_> = products
            .iter()
            .filter(|p| {
                p.matches_query("afristyle")
                    && p.matches_category("Fabrics")
                    && p.matches_stock("in_stock")
            })
            .collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Ankara Print Fabric");
    }

    #[test]
    fn stats_partition_full_list() {
        let stats = ProductStats::from_list(&sample_products());
        assert_eq!(stats.total, 7);
        assert_eq!(stats.active, 5);
        assert_eq!(stats.low_stock, 1);
        assert_eq!(stats.out_of_stock, 1);
    }
}
