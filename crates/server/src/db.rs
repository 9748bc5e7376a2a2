use axum::extract::FromRef;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

/// Shared application state passed to Axum handlers via `State`.
/// Derives `FromRef` so handlers can extract `State<PgPool>` directly.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub pool: Pool<Postgres>,
}

/// Pool created lazily so no connections open until the first query.
/// Keeps pool creation off any particular tokio runtime, which matters
/// for tests where each `#[tokio::test]` spins up its own.
static POOL: OnceLock<Pool<Postgres>> = OnceLock::new();
static MIGRATED: AtomicBool = AtomicBool::new(false);

/// Create a new database connection pool from environment variables.
pub fn create_pool() -> Pool<Postgres> {
    // Load .env file if present (ignored in production where env vars are set directly).
    let _ = dotenvy::dotenv();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let max_connections: u32 = std::env::var("DATABASE_MAX_CONNECTIONS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(10);

    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(std::time::Duration::from_secs(5))
        .connect_lazy(&database_url)
        .expect("Failed to create database pool")
}

/// Run database migrations against the given pool.
pub async fn run_migrations(pool: &Pool<Postgres>) {
    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .expect("Failed to run database migrations");
}

/// Get or initialize the database connection pool.
/// Migrations run once per process; subsequent calls return immediately.
///
/// Used by Dioxus server functions. The auth middleware receives the same
/// pool through `AppState` instead.
pub async fn get_db() -> &'static Pool<Postgres> {
    let pool = POOL.get_or_init(create_pool);

    // `swap` is atomic so only the first caller runs migrations; they are
    // idempotent regardless.
    if !MIGRATED.swap(true, Ordering::SeqCst) {
        run_migrations(pool).await;
    }

    pool
}
