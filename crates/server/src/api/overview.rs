use dioxus::prelude::*;
use shared_types::OverviewMetrics;

#[cfg(feature = "server")]
use crate::db::get_db;

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, SqlxErrorExt};

#[cfg(feature = "server")]
use crate::repo;

#[cfg(feature = "server")]
use super::auth::*;

/// Everything the overview page renders, in one round trip.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn overview_metrics() -> Result<OverviewMetrics, ServerFnError> {
    require_admin().await?;

    let db = get_db().await;

    let stats = repo::overview::stats(db)
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())?;

    let recent_orders = repo::overview::recent_orders(db, 5)
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())?;

    let top_vendors = repo::overview::top_vendors(db, 4)
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())?;

    Ok(OverviewMetrics {
        stats,
        recent_orders,
        top_vendors,
    })
}
