use dioxus::prelude::*;
use shared_types::{
    AdminSession, ChangePasswordRequest, NotificationPrefs, PlatformSettings,
    UpdatePlatformSettingsRequest, UpdateProfileRequest,
};

#[cfg(feature = "server")]
use crate::db::get_db;

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, SqlxErrorExt, ValidateRequest};

#[cfg(feature = "server")]
use crate::repo;

#[cfg(feature = "server")]
use super::auth::*;

/// Save the profile tab for the signed-in admin.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn update_profile(req: UpdateProfileRequest) -> Result<AdminSession, ServerFnError> {
    use shared_types::AppError;

    let session = require_admin().await?;

    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let db = get_db().await;
    let touched = repo::account::update_profile(
        db,
        session.account_id,
        &req.display_name,
        req.phone.as_deref(),
    )
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;

    if touched == 0 {
        return Err(AppError::not_found("Account not found").into_server_fn_error());
    }

    Ok(AdminSession {
        display_name: req.display_name,
        phone: req.phone,
        ..session
    })
}

/// Change the signed-in admin's password. Verifies the current password
/// first; other sessions stay signed in until their refresh tokens expire.
#[cfg_attr(feature = "server", tracing::instrument(skip(req)))]
#[server]
pub async fn change_password(req: ChangePasswordRequest) -> Result<(), ServerFnError> {
    use crate::auth::password as pw;
    use shared_types::AppError;

    let session = require_admin().await?;

    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let db = get_db().await;
    let account = repo::account::get_by_id(db, session.account_id)
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())?
        .ok_or_else(|| AppError::not_found("Account not found").into_server_fn_error())?;

    let valid = pw::verify_password(&req.current_password, &account.password_hash)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;

    if !valid {
        return Err(
            AppError::unauthorized("Current password is incorrect").into_server_fn_error(),
        );
    }

    let new_hash = pw::hash_password(&req.new_password)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;

    repo::account::update_password_hash(db, session.account_id, &new_hash)
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())?;

    Ok(())
}

/// Notification toggles for the signed-in admin.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_notification_prefs() -> Result<NotificationPrefs, ServerFnError> {
    let session = require_admin().await?;

    let db = get_db().await;
    let record = repo::admin::get(db, session.account_id)
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())?;

    Ok(record
        .map(|r| r.notification_prefs())
        .unwrap_or_default())
}

/// Save the notification toggles for the signed-in admin.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn update_notification_prefs(prefs: NotificationPrefs) -> Result<(), ServerFnError> {
    use shared_types::AppError;

    let session = require_admin().await?;

    let db = get_db().await;
    let touched = repo::admin::update_notification_prefs(db, session.account_id, &prefs)
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())?;

    if touched == 0 {
        return Err(AppError::not_found("Admin record not found").into_server_fn_error());
    }

    Ok(())
}

/// Marketplace-wide settings (Platform tab). Readable by any admin.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_platform_settings() -> Result<PlatformSettings, ServerFnError> {
    require_admin().await?;

    let db = get_db().await;
    repo::settings::get_platform(db)
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())
}

/// Save the Platform tab.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn update_platform_settings(
    req: UpdatePlatformSettingsRequest,
) -> Result<PlatformSettings, ServerFnError> {
    require_admin().await?;

    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let db = get_db().await;
    repo::settings::update_platform(db, &req)
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())
}
