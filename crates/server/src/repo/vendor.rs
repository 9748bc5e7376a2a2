use shared_types::Vendor;
use sqlx::PgPool;
use uuid::Uuid;

pub async fn list(pool: &PgPool) -> Result<Vec<Vendor>, sqlx::Error> {
    sqlx::query_as::<_, Vendor>(
        "SELECT id, name, email, phone, location, product_count, rating, revenue,
                status, verification_status, joined_date, created_at
         FROM vendors
         ORDER BY created_at DESC
         LIMIT 100",
    )
    .fetch_all(pool)
    .await
}

/// Move one vendor to the given approval status. Returns rows touched.
pub async fn set_status(pool: &PgPool, id: Uuid, status: &str) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE vendors SET status = $1 WHERE id = $2")
        .bind(status)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM vendors WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
