use shared_types::{Order, OverviewStats, TopVendor};
use sqlx::PgPool;

/// Headline counts and revenue for the overview stat cards. Cancelled
/// orders still count toward the order total but not toward revenue.
pub async fn stats(pool: &PgPool) -> Result<OverviewStats, sqlx::Error> {
    sqlx::query_as::<_, OverviewStats>(
        "SELECT
            (SELECT COUNT(*) FROM customers) AS total_customers,
            (SELECT COUNT(*) FROM vendors WHERE status = 'approved') AS active_vendors,
            (SELECT COUNT(*) FROM products) AS total_products,
            (SELECT COUNT(*) FROM orders) AS total_orders,
            (SELECT COALESCE(SUM(total), 0) FROM orders WHERE status <> 'cancelled')
                AS total_revenue",
    )
    .fetch_one(pool)
    .await
}

pub async fn recent_orders(pool: &PgPool, limit: i64) -> Result<Vec<Order>, sqlx::Error> {
    sqlx::query_as::<_, Order>(
        "SELECT id, order_number, customer, vendor, items, total, status,
                payment_method, placed_date, created_at
         FROM orders
         ORDER BY created_at DESC
         LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// Highest-revenue vendors with their order counts. Orders reference the
/// vendor by display name, so the join is on the name column.
pub async fn top_vendors(pool: &PgPool, limit: i64) -> Result<Vec<TopVendor>, sqlx::Error> {
    sqlx::query_as::<_, TopVendor>(
        "SELECT v.name, v.revenue, COUNT(o.id) AS order_count, v.rating
         FROM vendors v
         LEFT JOIN orders o ON o.vendor = v.name
         GROUP BY v.id, v.name, v.revenue, v.rating
         ORDER BY v.revenue DESC
         LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}
