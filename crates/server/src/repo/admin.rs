use shared_types::NotificationPrefs;
use sqlx::{FromRow, PgPool};

/// Admin directory row. Presence of a row (plus a passing role check)
/// is what authorizes an account for the dashboard.
#[derive(Debug, Clone, FromRow)]
pub struct AdminRecord {
    pub account_id: i64,
    pub role: Option<String>,
    pub email_notifications: bool,
    pub order_notifications: bool,
    pub vendor_notifications: bool,
    pub customer_notifications: bool,
    pub security_alerts: bool,
}

impl AdminRecord {
    pub fn notification_prefs(&self) -> NotificationPrefs {
        NotificationPrefs {
            email_notifications: self.email_notifications,
            order_notifications: self.order_notifications,
            vendor_notifications: self.vendor_notifications,
            customer_notifications: self.customer_notifications,
            security_alerts: self.security_alerts,
        }
    }
}

pub async fn get(pool: &PgPool, account_id: i64) -> Result<Option<AdminRecord>, sqlx::Error> {
    sqlx::query_as::<_, AdminRecord>(
        "SELECT account_id, role, email_notifications, order_notifications,
                vendor_notifications, customer_notifications, security_alerts
         FROM admins WHERE account_id = $1",
    )
    .bind(account_id)
    .fetch_optional(pool)
    .await
}

/// Save the notification toggles for one admin. Returns rows touched —
/// zero means the directory row vanished between check and save.
pub async fn update_notification_prefs(
    pool: &PgPool,
    account_id: i64,
    prefs: &NotificationPrefs,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE admins
         SET email_notifications = $1, order_notifications = $2,
             vendor_notifications = $3, customer_notifications = $4,
             security_alerts = $5
         WHERE account_id = $6",
    )
    .bind(prefs.email_notifications)
    .bind(prefs.order_notifications)
    .bind(prefs.vendor_notifications)
    .bind(prefs.customer_notifications)
    .bind(prefs.security_alerts)
    .bind(account_id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}
