pub mod cookies;
pub mod jwt;
pub mod middleware;
pub mod password;

/// Promote the configured seed account into the admins directory at startup.
///
/// Looks up `[access] seed_admin_email` in the accounts table and inserts a
/// directory row with an explicit "admin" role if one is missing. A missing
/// account or DB error is non-fatal — the deployment may simply not have
/// registered the seed account yet.
pub async fn ensure_seed_admin(pool: &sqlx::PgPool, seed_email: Option<&str>) {
    let Some(email) = seed_email.filter(|e| !e.is_empty()) else {
        return;
    };

    let account_id: Option<i64> =
        match sqlx::query_scalar("SELECT id FROM accounts WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(pool)
            .await
        {
            Ok(id) => id,
            Err(e) => {
                tracing::error!(email, %e, "Seed admin lookup failed");
                return;
            }
        };

    let Some(account_id) = account_id else {
        tracing::info!(email, "Seed admin account not registered yet; skipping");
        return;
    };

    match sqlx::query(
        "INSERT INTO admins (account_id, role) VALUES ($1, 'admin')
         ON CONFLICT (account_id) DO UPDATE SET role = 'admin'",
    )
    .bind(account_id)
    .execute(pool)
    .await
    {
        Ok(_) => tracing::info!(account_id, email, "Seed admin directory row ensured"),
        Err(e) => tracing::error!(account_id, email, %e, "Failed to seed admin directory row"),
    }
}
