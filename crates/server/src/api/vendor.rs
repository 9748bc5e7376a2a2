use dioxus::prelude::*;
use shared_types::Vendor;

#[cfg(feature = "server")]
use crate::db::get_db;

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, SqlxErrorExt};

#[cfg(feature = "server")]
use crate::repo;

#[cfg(feature = "server")]
use super::auth::*;

/// List vendors, newest first. Admin only.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_vendors() -> Result<Vec<Vendor>, ServerFnError> {
    require_admin().await?;

    let db = get_db().await;
    repo::vendor::list(db)
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())
}

/// Move a vendor to a new approval status (approve / reject / re-pend).
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn set_vendor_status(id: String, status: String) -> Result<(), ServerFnError> {
    use shared_types::{AppError, VendorStatus};

    require_admin().await?;

    let vendor_id = uuid::Uuid::parse_str(&id)
        .map_err(|_| AppError::bad_request("Invalid vendor ID").into_server_fn_error())?;

    if VendorStatus::from_str_opt(&status).is_none() {
        return Err(
            AppError::bad_request(format!("Invalid vendor status '{status}'"))
                .into_server_fn_error(),
        );
    }

    let db = get_db().await;
    let touched = repo::vendor::set_status(db, vendor_id, &status)
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())?;

    if touched == 0 {
        return Err(AppError::not_found("Vendor not found").into_server_fn_error());
    }

    Ok(())
}

/// Permanently remove a vendor. Their listings stay, keyed by store name.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn delete_vendor(id: String) -> Result<(), ServerFnError> {
    use shared_types::AppError;

    require_admin().await?;

    let vendor_id = uuid::Uuid::parse_str(&id)
        .map_err(|_| AppError::bad_request("Invalid vendor ID").into_server_fn_error())?;

    let db = get_db().await;
    let touched = repo::vendor::delete(db, vendor_id)
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())?;

    if touched == 0 {
        return Err(AppError::not_found("Vendor not found").into_server_fn_error());
    }

    Ok(())
}
