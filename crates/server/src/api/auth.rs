// Server-only auth helpers for server functions.
// These are shared across all api/* modules.

use dioxus::prelude::*;
use shared_types::{AdminSession, AppError, SessionVerdict};
use sqlx::PgPool;

use crate::db::get_db;
use crate::error_convert::AppErrorExt;
use crate::repo;

/// Extract and validate the caller's identity from the current request.
/// Checks middleware-injected Claims first, falls back to cookie parsing.
/// Returns the validated Claims or an "Authentication required" error.
pub(crate) fn require_auth() -> Result<crate::auth::jwt::Claims, ServerFnError> {
    use crate::auth::{cookies, jwt};

    let ctx = dioxus::fullstack::FullstackContext::current()
        .ok_or_else(|| AppError::unauthorized("Authentication required").into_server_fn_error())?;

    let parts = ctx.parts_mut();

    // Primary: Claims already validated by auth middleware
    if let Some(claims) = parts.extensions.get::<jwt::Claims>() {
        return Ok(claims.clone());
    }

    // Fallback: parse access token from cookies
    let headers = parts.headers.clone();
    let token = cookies::extract_access_token(&headers)
        .ok_or_else(|| AppError::unauthorized("Authentication required").into_server_fn_error())?;

    jwt::validate_access_token(&token)
        .map_err(|_| AppError::unauthorized("Invalid or expired token").into_server_fn_error())
}

/// Result of replaying an account against the admin directory.
/// `record_found` separates "no directory row" from "row fails the role
/// policy" so sign-in can word the two refusals differently.
pub(crate) struct DirectoryCheck {
    pub verdict: SessionVerdict,
    pub record_found: bool,
}

/// Replay an account against the admin directory.
///
/// Fail-closed: a lookup error is surfaced as a forbidden error rather
/// than letting an unverifiable caller through.
pub(crate) async fn check_directory(
    pool: &PgPool,
    account: &repo::account::AccountRecord,
) -> Result<DirectoryCheck, ServerFnError> {
    let admin = repo::admin::get(pool, account.id).await.map_err(|e| {
        tracing::error!(account_id = account.id, %e, "Admin directory lookup failed");
        AppError::forbidden("Unauthorized: Admin access only").into_server_fn_error()
    })?;

    let record_found = admin.is_some();
    let role = admin.as_ref().and_then(|a| a.role.clone());
    let authorized = record_found && crate::config::role_policy().permits(role.as_deref());

    Ok(DirectoryCheck {
        verdict: SessionVerdict {
            session: account.to_session(role),
            authorized,
        },
        record_found,
    })
}

/// Require the caller to be authenticated AND pass the admin directory
/// check. Every dashboard data endpoint goes through this.
pub(crate) async fn require_admin() -> Result<AdminSession, ServerFnError> {
    let claims = require_auth()?;
    let db = get_db().await;

    let account = repo::account::get_by_id(db, claims.sub)
        .await
        .map_err(|e| {
            tracing::error!(account_id = claims.sub, %e, "Account lookup failed");
            AppError::forbidden("Unauthorized: Admin access only").into_server_fn_error()
        })?;

    let Some(account) = account else {
        // Account deleted since the token was issued — clear stale cookies
        // so the client doesn't stay stuck in a broken signed-in state
        crate::auth::cookies::schedule_clear_cookies();
        tracing::warn!(
            account_id = claims.sub,
            "Auth token references non-existent account, clearing cookies"
        );
        return Err(AppError::unauthorized("Authentication required").into_server_fn_error());
    };

    let check = check_directory(db, &account).await?;
    if !check.verdict.authorized {
        return Err(AppError::forbidden("Unauthorized: Admin access only").into_server_fn_error());
    }

    Ok(check.verdict.session)
}
