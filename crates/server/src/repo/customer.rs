use shared_types::Customer;
use sqlx::PgPool;
use uuid::Uuid;

/// Newest customers first. The dashboard shows a single page; 100 rows
/// covers it with room to spare.
pub async fn list(pool: &PgPool) -> Result<Vec<Customer>, sqlx::Error> {
    sqlx::query_as::<_, Customer>(
        "SELECT id, name, email, phone, location, total_orders, total_spent,
                status, joined_date, created_at
         FROM customers
         ORDER BY created_at DESC
         LIMIT 100",
    )
    .fetch_all(pool)
    .await
}

/// Flip one customer to the given status. Returns rows touched.
pub async fn set_status(pool: &PgPool, id: Uuid, status: &str) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE customers SET status = $1 WHERE id = $2")
        .bind(status)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM customers WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
