use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// Persist the SHA-256 hash of a freshly issued refresh token.
pub async fn store(
    pool: &PgPool,
    account_id: i64,
    token_hash: &str,
    expires_at: DateTime<Utc>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO refresh_tokens (account_id, token_hash, expires_at) VALUES ($1, $2, $3)",
    )
    .bind(account_id)
    .bind(token_hash)
    .bind(expires_at)
    .execute(pool)
    .await?;
    Ok(())
}

/// Revoke every live refresh token for an account (sign-out everywhere).
pub async fn revoke_all(pool: &PgPool, account_id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE refresh_tokens SET revoked = TRUE WHERE account_id = $1 AND revoked = FALSE",
    )
    .bind(account_id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

/// Whether the given token hash is stored and still live for the account.
pub async fn is_live(pool: &PgPool, account_id: i64, token_hash: &str) -> Result<bool, sqlx::Error> {
    let revoked: Option<bool> = sqlx::query_scalar(
        "SELECT revoked FROM refresh_tokens WHERE token_hash = $1 AND account_id = $2",
    )
    .bind(token_hash)
    .bind(account_id)
    .fetch_optional(pool)
    .await?;
    Ok(revoked == Some(false))
}
