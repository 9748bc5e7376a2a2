use dioxus::prelude::*;
use shared_types::{Product, UpdateProductRequest};

#[cfg(feature = "server")]
use crate::db::get_db;

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, SqlxErrorExt, ValidateRequest};

#[cfg(feature = "server")]
use crate::repo;

#[cfg(feature = "server")]
use super::auth::*;

/// List product listings, newest first. Admin only.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_products() -> Result<Vec<Product>, ServerFnError> {
    require_admin().await?;

    let db = get_db().await;
    repo::product::list(db)
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())
}

/// Save the product edit form.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn update_product(id: String, req: UpdateProductRequest) -> Result<(), ServerFnError> {
    use shared_types::AppError;

    require_admin().await?;

    let product_id = uuid::Uuid::parse_str(&id)
        .map_err(|_| AppError::bad_request("Invalid product ID").into_server_fn_error())?;

    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let db = get_db().await;
    let touched = repo::product::update(db, product_id, &req)
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())?;

    if touched == 0 {
        return Err(AppError::not_found("Product not found").into_server_fn_error());
    }

    Ok(())
}

/// Permanently remove a product listing.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn delete_product(id: String) -> Result<(), ServerFnError> {
    use shared_types::AppError;

    require_admin().await?;

    let product_id = uuid::Uuid::parse_str(&id)
        .map_err(|_| AppError::bad_request("Invalid product ID").into_server_fn_error())?;

    let db = get_db().await;
    let touched = repo::product::delete(db, product_id)
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())?;

    if touched == 0 {
        return Err(AppError::not_found("Product not found").into_server_fn_error());
    }

    Ok(())
}
