use dioxus::prelude::*;
use shared_types::Order;

#[cfg(feature = "server")]
use crate::db::get_db;

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, SqlxErrorExt};

#[cfg(feature = "server")]
use crate::repo;

#[cfg(feature = "server")]
use super::auth::*;

/// List orders, newest first. Admin only.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_orders() -> Result<Vec<Order>, ServerFnError> {
    require_admin().await?;

    let db = get_db().await;
    repo::order::list(db)
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())
}

/// Move an order to a new lifecycle status.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn set_order_status(id: String, status: String) -> Result<(), ServerFnError> {
    use shared_types::{AppError, OrderStatus};

    require_admin().await?;

    let order_id = uuid::Uuid::parse_str(&id)
        .map_err(|_| AppError::bad_request("Invalid order ID").into_server_fn_error())?;

    if OrderStatus::from_str_opt(&status).is_none() {
        return Err(
            AppError::bad_request(format!("Invalid order status '{status}'"))
                .into_server_fn_error(),
        );
    }

    let db = get_db().await;
    let touched = repo::order::set_status(db, order_id, &status)
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())?;

    if touched == 0 {
        return Err(AppError::not_found("Order not found").into_server_fn_error());
    }

    Ok(())
}
