use shared_types::Order;
use sqlx::PgPool;
use uuid::Uuid;

pub async fn list(pool: &PgPool) -> Result<Vec<Order>, sqlx::Error> {
    sqlx::query_as::<_, Order>(
        "SELECT id, order_number, customer, vendor, items, total, status,
                payment_method, placed_date, created_at
         FROM orders
         ORDER BY created_at DESC
         LIMIT 100",
    )
    .fetch_all(pool)
    .await
}

/// Move one order to the given lifecycle status. Returns rows touched.
pub async fn set_status(pool: &PgPool, id: Uuid, status: &str) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE orders SET status = $1 WHERE id = $2")
        .bind(status)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
