use shared_types::{PlatformSettings, UpdatePlatformSettingsRequest};
use sqlx::PgPool;

/// Load the single platform settings row. The migration seeds it, so a
/// missing row only happens on a half-initialized database; defaults
/// cover that case.
pub async fn get_platform(pool: &PgPool) -> Result<PlatformSettings, sqlx::Error> {
    let row: Option<PlatformSettings> = sqlx::query_as::<_, PlatformSettings>(
        "SELECT site_name, support_email, currency, timezone, maintenance_mode
         FROM platform_settings WHERE id = 1",
    )
    .fetch_optional(pool)
    .await?;
    Ok(row.unwrap_or_default())
}

pub async fn update_platform(
    pool: &PgPool,
    req: &UpdatePlatformSettingsRequest,
) -> Result<PlatformSettings, sqlx::Error> {
    sqlx::query_as::<_, PlatformSettings>(
        "INSERT INTO platform_settings
            (id, site_name, support_email, currency, timezone, maintenance_mode, updated_at)
         VALUES (1, $1, $2, $3, $4, $5, NOW())
         ON CONFLICT (id) DO UPDATE
         SET site_name = $1, support_email = $2, currency = $3,
             timezone = $4, maintenance_mode = $5, updated_at = NOW()
         RETURNING site_name, support_email, currency, timezone, maintenance_mode",
    )
    .bind(&req.site_name)
    .bind(&req.support_email)
    .bind(&req.currency)
    .bind(&req.timezone)
    .bind(req.maintenance_mode)
    .fetch_one(pool)
    .await
}
