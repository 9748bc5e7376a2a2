//! Built-in sample rows substituted when a view's initial fetch fails.
//!
//! Keeping the dashboard renderable on a broken connection is a product
//! decision carried over from the hosted deployment; the rows mirror the
//! seed data so screenshots and demos stay consistent. Views surface the
//! substitution through [`crate::listing::DataSource::Sample`].

use chrono::{NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use crate::customer::Customer;
use crate::order::Order;
use crate::overview::{OverviewMetrics, OverviewStats, TopVendor};
use crate::product::Product;
use crate::vendor::Vendor;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn at_noon(d: NaiveDate) -> chrono::DateTime<Utc> {
    Utc.from_utc_datetime(&d.and_hms_opt(12, 0, 0).unwrap_or_default())
}

/// Five customer accounts spanning both statuses.
pub fn sample_customers() -> Vec<Customer> {
    let row = |name: &str,
               email: &str,
               phone: &str,
               location: &str,
               total_orders: i32,
               total_spent: f64,
               status: &str,
               joined: NaiveDate| Customer {
        id: Uuid::new_v4(),
        name: name.into(),
        email: email.into(),
        phone: phone.into(),
        location: location.into(),
        total_orders,
        total_spent,
        status: status.into(),
        joined_date: joined,
        created_at: at_noon(joined),
    };

    vec![
        row(
            "Amina Johnson",
            "amina@example.com",
            "+234 123 456 7890",
            "Jos, Plateau",
            12,
            45_000.0,
            "active",
            date(2024, 1, 15),
        ),
        row(
            "Chidi Okafor",
            "chidi@example.com",
            "+234 234 567 8901",
            "Lagos",
            8,
            32_500.0,
            "active",
            date(2024, 2, 20),
        ),
        row(
            "Sarah Williams",
            "sarah@example.com",
            "+234 345 678 9012",
            "Abuja",
            15,
            67_800.0,
            "active",
            date(2024, 1, 10),
        ),
        row(
            "Mohammed Ali",
            "mohammed@example.com",
            "+234 456 789 0123",
            "Kano",
            5,
            18_200.0,
            "inactive",
            date(2024, 3, 5),
        ),
        row(
            "Grace Eze",
            "grace@example.com",
            "+234 567 890 1234",
            "Enugu",
            20,
            89_500.0,
            "active",
            date(2023, 12, 1),
        ),
    ]
}

/// Five stores: three approved and verified, one pending, one brand new.
pub fn sample_vendors() -> Vec<Vendor> {
    let row = |name: &str,
               email: &str,
               phone: &str,
               location: &str,
               product_count: i32,
               rating: f64,
               revenue: f64,
               status: &str,
               verification: &str,
               joined: NaiveDate| Vendor {
        id: Uuid::new_v4(),
        name: name.into(),
        email: email.into(),
        phone: phone.into(),
        location: location.into(),
        product_count,
        rating,
        revenue,
        status: status.into(),
        verification_status: verification.into(),
        joined_date: joined,
        created_at: at_noon(joined),
    };

    vec![
        row(
            "AfriStyle Boutique",
            "contact@afristyle.com",
            "+234 123 456 7890",
            "Jos, Plateau",
            156,
            4.8,
            450_000.0,
            "approved",
            "verified",
            date(2023, 11, 10),
        ),
        row(
            "Traditional Crafts",
            "info@tradcrafts.com",
            "+234 234 567 8901",
            "Lagos",
            89,
            4.7,
            385_000.0,
            "approved",
            "verified",
            date(2023, 12, 5),
        ),
        row(
            "Jos Marketplace",
            "hello@josmarket.com",
            "+234 345 678 9012",
            "Jos, Plateau",
            203,
            4.6,
            320_000.0,
            "approved",
            "verified",
            date(2024, 1, 20),
        ),
        row(
            "Fashion Hub Nigeria",
            "contact@fashionhub.ng",
            "+234 456 789 0123",
            "Abuja",
            45,
            4.9,
            298_000.0,
            "pending",
            "pending",
            date(2024, 2, 14),
        ),
        row(
            "Heritage Designs",
            "info@heritage.ng",
            "+234 567 890 1234",
            "Kano",
            12,
            0.0,
            0.0,
            "pending",
            "unverified",
            date(2024, 3, 1),
        ),
    ]
}

/// Seven product listings across all four categories and stock bands.
pub fn sample_products() -> Vec<Product> {
    let row = |name: &str,
               vendor: &str,
               category: &str,
               price: f64,
               stock: i32,
               status: &str,
               rating: f64,
               sales: i32| Product {
        id: Uuid::new_v4(),
        name: name.into(),
        vendor: vendor.into(),
        category: category.into(),
        price,
        stock,
        status: status.into(),
        rating,
        sales,
        description: String::new(),
        created_at: at_noon(date(2024, 6, 1)),
    };

    vec![
        row(
            "Premium Ankara Dress",
            "AfriStyle Boutique",
            "Clothing",
            15_000.0,
            45,
            "active",
            4.8,
            89,
        ),
        row(
            "Handcrafted Jewelry Set",
            "Traditional Crafts",
            "Accessories",
            8_500.0,
            23,
            "active",
            4.7,
            67,
        ),
        row(
            "Designer Kaftan",
            "Fashion Hub",
            "Clothing",
            22_000.0,
            12,
            "active",
            4.9,
            45,
        ),
        row(
            "Leather Handbag",
            "Jos Marketplace",
            "Accessories",
            18_500.0,
            0,
            "out_of_stock",
            4.6,
            34,
        ),
        row(
            "Traditional Beaded Necklace",
            "Heritage Designs",
            "Jewelry",
            6_200.0,
            78,
            "active",
            4.5,
            123,
        ),
        row(
            "Ankara Print Fabric",
            "AfriStyle Boutique",
            "Fabrics",
            4_500.0,
            156,
            "active",
            4.8,
            234,
        ),
        row(
            "Custom Embroidered Cap",
            "Traditional Crafts",
            "Accessories",
            3_800.0,
            5,
            "low_stock",
            4.4,
            56,
        ),
    ]
}

/// Seven orders with statuses spanning all five lifecycle states.
pub fn sample_orders() -> Vec<Order> {
    let row = |number: &str,
               customer: &str,
               vendor: &str,
               items: i32,
               total: f64,
               status: &str,
               placed: NaiveDate,
               payment: &str| Order {
        id: Uuid::new_v4(),
        order_number: number.into(),
        customer: customer.into(),
        vendor: vendor.into(),
        items,
        total,
        status: status.into(),
        payment_method: payment.into(),
        placed_date: placed,
        created_at: at_noon(placed),
    };

    vec![
        row(
            "ORD-1234",
            "Amina Johnson",
            "AfriStyle Boutique",
            3,
            15_000.0,
            "completed",
            date(2024, 11, 28),
            "Card",
        ),
        row(
            "ORD-1235",
            "Chidi Okafor",
            "Traditional Crafts",
            1,
            8_500.0,
            "processing",
            date(2024, 11, 28),
            "Transfer",
        ),
        row(
            "ORD-1236",
            "Sarah Williams",
            "AfriStyle Boutique",
            2,
            22_000.0,
            "pending",
            date(2024, 11, 27),
            "Card",
        ),
        row(
            "ORD-1237",
            "Mohammed Ali",
            "Jos Marketplace",
            4,
            12_300.0,
            "shipped",
            date(2024, 11, 27),
            "Cash",
        ),
        row(
            "ORD-1238",
            "Grace Eze",
            "Traditional Crafts",
            1,
            6_700.0,
            "completed",
            date(2024, 11, 26),
            "Transfer",
        ),
        row(
            "ORD-1239",
            "John Doe",
            "Fashion Hub",
            2,
            18_900.0,
            "cancelled",
            date(2024, 11, 26),
            "Card",
        ),
        row(
            "ORD-1240",
            "Fatima Hassan",
            "Heritage Designs",
            5,
            34_500.0,
            "processing",
            date(2024, 11, 25),
            "Transfer",
        ),
    ]
}

/// Overview payload shown when the metrics query fails.
pub fn sample_overview() -> OverviewMetrics {
    OverviewMetrics {
        stats: OverviewStats {
            total_customers: 1_245,
            active_vendors: 89,
            total_products: 3_567,
            total_orders: 2_890,
            total_revenue: 2_400_000.0,
        },
        recent_orders: sample_orders().into_iter().take(5).collect(),
        top_vendors: vec![
            TopVendor {
                name: "AfriStyle Boutique".into(),
                revenue: 450_000.0,
                order_count: 234,
                rating: 4.8,
            },
            TopVendor {
                name: "Traditional Crafts".into(),
                revenue: 385_000.0,
                order_count: 198,
                rating: 4.7,
            },
            TopVendor {
                name: "Jos Marketplace".into(),
                revenue: 320_000.0,
                order_count: 167,
                rating: 4.6,
            },
            TopVendor {
                name: "Fashion Hub".into(),
                revenue: 298_000.0,
                order_count: 145,
                rating: 4.9,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn order_samples_are_exactly_seven_spanning_five_statuses() {
        let orders = sample_orders();
        assert_eq!(orders.len(), 7);

        let statuses: HashSet<&str> = orders.iter().map(|o| o.status.as_str()).collect();
        for s in ["completed", "processing", "pending", "shipped", "cancelled"] {
            assert!(statuses.contains(s), "missing status {s}");
        }
    }

    #[test]
    fn order_samples_are_newest_first() {
        let orders = sample_orders();
        for pair in orders.windows(2) {
            assert!(pair[0].placed_date >= pair[1].placed_date);
        }
    }

    #[test]
    fn ids_are_unique_within_each_sample_page() {
        let order_ids: HashSet<_> = sample_orders().iter().map(|o| o.id).collect();
        assert_eq!(order_ids.len(), 7);

        let product_ids: HashSet<_> = sample_products().iter().map(|p| p.id).collect();
        assert_eq!(product_ids.len(), 7);

        let customer_ids: HashSet<_> = sample_customers().iter().map(|c| c.id).collect();
        assert_eq!(customer_ids.len(), 5);

        let vendor_ids: HashSet<_> = sample_vendors().iter().map(|v| v.id).collect();
        assert_eq!(vendor_ids.len(), 5);
    }

    #[test]
    fn overview_panels_are_bounded() {
        let overview = sample_overview();
        assert_eq!(overview.recent_orders.len(), 5);
        assert_eq!(overview.top_vendors.len(), 4);
        assert_eq!(overview.stats.total_customers, 1_245);
    }

    #[test]
    fn vendor_samples_include_an_unverified_store() {
        let vendors = sample_vendors();
        assert!(vendors
            .iter()
            .any(|v| v.verification_status == "unverified" && v.revenue == 0.0));
    }
}
