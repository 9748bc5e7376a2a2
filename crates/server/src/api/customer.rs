use dioxus::prelude::*;
use shared_types::Customer;

#[cfg(feature = "server")]
use crate::db::get_db;

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, SqlxErrorExt};

#[cfg(feature = "server")]
use crate::repo;

#[cfg(feature = "server")]
use super::auth::*;

/// List customer accounts, newest first. Admin only.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_customers() -> Result<Vec<Customer>, ServerFnError> {
    require_admin().await?;

    let db = get_db().await;
    repo::customer::list(db)
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())
}

/// Enable or disable a customer account.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn set_customer_status(id: String, status: String) -> Result<(), ServerFnError> {
    use shared_types::{AppError, CustomerStatus};

    require_admin().await?;

    let customer_id = uuid::Uuid::parse_str(&id)
        .map_err(|_| AppError::bad_request("Invalid customer ID").into_server_fn_error())?;

    if CustomerStatus::from_str_opt(&status).is_none() {
        return Err(
            AppError::bad_request(format!("Invalid customer status '{status}'"))
                .into_server_fn_error(),
        );
    }

    let db = get_db().await;
    let touched = repo::customer::set_status(db, customer_id, &status)
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())?;

    if touched == 0 {
        return Err(AppError::not_found("Customer not found").into_server_fn_error());
    }

    Ok(())
}

/// Permanently remove a customer account.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn delete_customer(id: String) -> Result<(), ServerFnError> {
    use shared_types::AppError;

    require_admin().await?;

    let customer_id = uuid::Uuid::parse_str(&id)
        .map_err(|_| AppError::bad_request("Invalid customer ID").into_server_fn_error())?;

    let db = get_db().await;
    let touched = repo::customer::delete(db, customer_id)
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())?;

    if touched == 0 {
        return Err(AppError::not_found("Customer not found").into_server_fn_error());
    }

    Ok(())
}
