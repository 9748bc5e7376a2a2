use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use sqlx::{Pool, Postgres};

use super::cookies::{self, CookieSlot, PendingCookieAction};
use super::jwt::{self, hash_token, validate_access_token, validate_refresh_token};

/// Permissive auth middleware that handles authentication and cookie management.
///
/// On each request:
/// 1. Validates the access token from cookies
/// 2. If expired, attempts transparent refresh using the refresh cookie
/// 3. Inserts a `CookieSlot` so server functions can schedule cookie changes
/// 4. After the handler runs, applies any pending cookie actions to the response
///
/// Does NOT reject unauthenticated requests — downstream handlers decide
/// authorization against the admins directory.
pub async fn auth_middleware(
    State(pool): State<Pool<Postgres>>,
    mut req: Request,
    next: Next,
) -> Response {
    let headers = req.headers().clone();
    let mut refresh_cookies: Option<(String, String)> = None;

    // Validate access token and insert Claims into extensions
    let access_token = cookies::extract_access_token(&headers);
    let mut needs_refresh = access_token.is_none();

    if let Some(token) = access_token {
        match validate_access_token(&token) {
            Ok(claims) => {
                req.extensions_mut().insert(claims);
            }
            Err(_) => {
                needs_refresh = true;
            }
        }
    }

    // Transparent refresh: access token missing (cookie expired) or invalid
    if needs_refresh {
        if let Some(refresh_token) = cookies::extract_refresh_token(&headers) {
            if let Some((new_access, new_refresh)) =
                try_transparent_refresh(&pool, &refresh_token, &mut req).await
            {
                refresh_cookies = Some((new_access, new_refresh));
            }
        }
    }

    // Insert the slot so server functions can schedule cookie changes
    let cookie_slot = CookieSlot::default();
    req.extensions_mut().insert(cookie_slot.clone());

    let mut response = next.run(req).await;

    // Apply cookies from transparent refresh
    if let Some((access, refresh)) = refresh_cookies {
        cookies::set_auth_cookies(response.headers_mut(), &access, &refresh);
    }

    // Apply any cookie action scheduled by server functions
    if let Some(action) = cookie_slot.0.lock().unwrap().take() {
        match action {
            PendingCookieAction::Set {
                access_token,
                refresh_token,
            } => {
                cookies::set_auth_cookies(response.headers_mut(), &access_token, &refresh_token);
            }
            PendingCookieAction::Clear => {
                cookies::clear_auth_cookies(response.headers_mut());
            }
        }
    }

    response
}

/// Attempt to transparently refresh the session using the refresh token.
/// On success: inserts new Claims into request extensions and returns
/// the new token pair for the middleware to set as cookies.
async fn try_transparent_refresh(
    pool: &Pool<Postgres>,
    refresh_token: &str,
    req: &mut Request,
) -> Option<(String, String)> {
    // Use validate_refresh_token — only accepts tokens with typ: "refresh"
    let claims = validate_refresh_token(refresh_token).ok()?;

    // Look up by hash, not raw token — the DB stores SHA-256 hashes
    let token_hash = hash_token(refresh_token);
    let stored: (i64, bool) = sqlx::query_as(
        "SELECT id, revoked FROM refresh_tokens WHERE token_hash = $1 AND account_id = $2",
    )
    .bind(&token_hash)
    .bind(claims.sub)
    .fetch_optional(pool)
    .await
    .ok()
    .flatten()?;

    let (stored_id, revoked) = stored;
    if revoked {
        return None;
    }

    let new_access = jwt::create_access_token(claims.sub, &claims.email).ok()?;
    let (new_refresh, expires_at) = jwt::create_refresh_token(claims.sub, &claims.email).ok()?;

    // Rotate: persist the replacement hash first, then revoke the old token.
    // If the INSERT fails the rotation is abandoned and the old token stays
    // live, so the client never holds a cookie the DB has no row for.
    let new_refresh_hash = hash_token(&new_refresh);
    sqlx::query(
        "INSERT INTO refresh_tokens (account_id, token_hash, expires_at) VALUES ($1, $2, $3)",
    )
    .bind(claims.sub)
    .bind(&new_refresh_hash)
    .bind(expires_at)
    .execute(pool)
    .await
    .ok()?;

    let _ = sqlx::query("UPDATE refresh_tokens SET revoked = TRUE WHERE id = $1")
        .bind(stored_id)
        .execute(pool)
        .await;

    // Validate the new access token to get fresh claims
    let new_claims = validate_access_token(&new_access).ok()?;
    req.extensions_mut().insert(new_claims);

    Some((new_access, new_refresh))
}
