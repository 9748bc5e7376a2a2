use shared_types::{Product, UpdateProductRequest};
use sqlx::PgPool;
use uuid::Uuid;

pub async fn list(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
    sqlx::query_as::<_, Product>(
        "SELECT id, name, vendor, category, price, stock, status, rating,
                sales, description, created_at
         FROM products
         ORDER BY created_at DESC
         LIMIT 100",
    )
    .fetch_all(pool)
    .await
}

/// Apply the edit form to one listing. Returns rows touched.
pub async fn update(
    pool: &PgPool,
    id: Uuid,
    req: &UpdateProductRequest,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE products
         SET name = $1, price = $2, category = $3, stock = $4, description = $5
         WHERE id = $6",
    )
    .bind(&req.name)
    .bind(req.price)
    .bind(&req.category)
    .bind(req.stock)
    .bind(&req.description)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
