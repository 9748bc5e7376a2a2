use dioxus::prelude::*;
use shared_types::{AdminSession, SessionVerdict};

#[cfg(feature = "server")]
use crate::db::get_db;

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, SqlxErrorExt, ValidateRequest};

#[cfg(feature = "server")]
use crate::repo;

#[cfg(feature = "server")]
use super::auth::*;

/// Sign in with email and password.
///
/// Credentials are verified first, then the admin directory check runs
/// BEFORE any session token is issued: an account that authenticates but
/// fails the role check gets a forbidden error and no cookies, leaving the
/// client exactly where it started.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn admin_login(email: String, password: String) -> Result<AdminSession, ServerFnError> {
    use crate::auth::{cookies, jwt, password as pw};
    use shared_types::{AppError, LoginRequest};

    let req = LoginRequest {
        email: email.clone(),
        password: password.clone(),
    };
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let db = get_db().await;
    let account = repo::account::get_by_email(db, &email)
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())?
        .ok_or_else(|| {
            AppError::unauthorized("Invalid email or password").into_server_fn_error()
        })?;

    let valid = pw::verify_password(&password, &account.password_hash)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;

    if !valid {
        return Err(AppError::unauthorized("Invalid email or password").into_server_fn_error());
    }

    // Authorization gate — runs before token issuance. Lookup errors deny.
    let check = check_directory(db, &account).await?;
    if !check.verdict.authorized {
        tracing::warn!(
            account_id = account.id,
            record_found = check.record_found,
            "Sign-in authenticated but failed the admin directory check"
        );
        let msg = if check.record_found {
            "Unauthorized: Admin access only"
        } else {
            "Admin record not found"
        };
        return Err(AppError::forbidden(msg).into_server_fn_error());
    }

    let access_token = jwt::create_access_token(account.id, &account.email)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;

    let (refresh_token, expires_at) = jwt::create_refresh_token(account.id, &account.email)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;

    // Store the hash of the refresh token — never persist raw JWTs
    let refresh_hash = jwt::hash_token(&refresh_token);
    repo::refresh_token::store(db, account.id, &refresh_hash, expires_at)
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())?;

    // Schedule cookies to be set by the middleware
    cookies::schedule_auth_cookies(&access_token, &refresh_token);

    Ok(check.verdict.session)
}

/// Replay the persisted session. Returns `None` when no valid session
/// exists; otherwise the directory check runs again and its verdict is
/// returned, so a role revoked mid-session takes effect on the next check.
///
/// First checks request extensions for `Claims` (set by auth_middleware
/// which already validated the token and handled transparent refresh).
/// Falls back to direct cookie parsing when extensions aren't available.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn current_admin_session() -> Result<Option<SessionVerdict>, ServerFnError> {
    use crate::auth::{cookies, jwt};

    let Some(ctx) = dioxus::fullstack::FullstackContext::current() else {
        return Ok(None);
    };

    let parts = ctx.parts_mut();

    // Primary: read Claims from extensions (auth_middleware already validated)
    let account_id = if let Some(claims) = parts.extensions.get::<jwt::Claims>() {
        Some(claims.sub)
    } else {
        // Fallback: parse cookies directly (covers cases where middleware didn't run)
        let headers = parts.headers.clone();
        let mut resolved = None;

        if let Some(token) = cookies::extract_access_token(&headers) {
            if let Ok(claims) = jwt::validate_access_token(&token) {
                resolved = Some(claims.sub);
            }
        }

        if resolved.is_none() {
            if let Some(refresh_token) = cookies::extract_refresh_token(&headers) {
                if let Ok(claims) = jwt::validate_refresh_token(&refresh_token) {
                    let db = get_db().await;
                    let token_hash = jwt::hash_token(&refresh_token);
                    let live = repo::refresh_token::is_live(db, claims.sub, &token_hash)
                        .await
                        .map_err(|e| e.into_app_error().into_server_fn_error())?;
                    if live {
                        resolved = Some(claims.sub);
                    }
                }
            }
        }

        resolved
    };

    let Some(account_id) = account_id else {
        return Ok(None);
    };

    let db = get_db().await;
    let account = repo::account::get_by_id(db, account_id)
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())?;

    let Some(account) = account else {
        // Account no longer exists — clear stale auth cookies
        cookies::schedule_clear_cookies();
        tracing::warn!(
            account_id,
            "Session references non-existent account, clearing cookies"
        );
        return Ok(None);
    };

    let check = check_directory(db, &account).await?;
    if !check.verdict.authorized {
        // The revert half of the contract: a persisted session that no
        // longer passes the directory check leaves no cookies behind.
        cookies::schedule_clear_cookies();
        tracing::warn!(
            account_id,
            record_found = check.record_found,
            "Persisted session failed the admin directory check, clearing cookies"
        );
    }
    Ok(Some(check.verdict))
}

/// Sign out by revoking all refresh tokens and clearing auth cookies.
///
/// Cookies are cleared even when the revoke fails, but the failure still
/// propagates: the tokens are live server-side until the revoke lands, so
/// the caller has to hear about it.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn admin_logout() -> Result<(), ServerFnError> {
    use crate::auth::{cookies, jwt};

    // Schedule cookie clearing via middleware
    cookies::schedule_clear_cookies();

    if let Some(ctx) = dioxus::fullstack::FullstackContext::current() {
        let headers = ctx.parts_mut().headers.clone();
        if let Some(token) = cookies::extract_access_token(&headers) {
            if let Ok(claims) = jwt::validate_access_token(&token) {
                let db = get_db().await;
                repo::refresh_token::revoke_all(db, claims.sub)
                    .await
                    .map_err(|e| {
                        tracing::error!(
                            account_id = claims.sub,
                            %e,
                            "Failed to revoke refresh tokens"
                        );
                        e.into_app_error().into_server_fn_error()
                    })?;
            }
        }
    }

    Ok(())
}
