use shared_types::AdminSession;
use sqlx::{FromRow, PgPool};

/// Sign-in account row. `password_hash` never leaves the server crate.
#[derive(Debug, Clone, FromRow)]
pub struct AccountRecord {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub display_name: String,
    pub phone: Option<String>,
}

impl AccountRecord {
    /// Client-safe view of this account, paired with the role from the
    /// admin directory (if any).
    pub fn to_session(&self, role: Option<String>) -> AdminSession {
        AdminSession {
            account_id: self.id,
            email: self.email.clone(),
            display_name: self.display_name.clone(),
            phone: self.phone.clone(),
            role,
        }
    }
}

pub async fn get_by_email(pool: &PgPool, email: &str) -> Result<Option<AccountRecord>, sqlx::Error> {
    sqlx::query_as::<_, AccountRecord>(
        "SELECT id, email, password_hash, display_name, phone
         FROM accounts WHERE LOWER(email) = LOWER($1)",
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

pub async fn get_by_id(pool: &PgPool, id: i64) -> Result<Option<AccountRecord>, sqlx::Error> {
    sqlx::query_as::<_, AccountRecord>(
        "SELECT id, email, password_hash, display_name, phone
         FROM accounts WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Update the profile fields on an account. Returns the number of rows touched.
pub async fn update_profile(
    pool: &PgPool,
    id: i64,
    display_name: &str,
    phone: Option<&str>,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE accounts SET display_name = $1, phone = $2, updated_at = NOW() WHERE id = $3",
    )
    .bind(display_name)
    .bind(phone)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

pub async fn update_password_hash(
    pool: &PgPool,
    id: i64,
    password_hash: &str,
) -> Result<u64, sqlx::Error> {
    let result =
        sqlx::query("UPDATE accounts SET password_hash = $1, updated_at = NOW() WHERE id = $2")
            .bind(password_hash)
            .bind(id)
            .execute(pool)
            .await?;
    Ok(result.rows_affected())
}
