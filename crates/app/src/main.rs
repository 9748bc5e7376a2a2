use dioxus::prelude::*;

mod auth;
mod format_helpers;
mod routes;

use auth::AdminAuthState;
use routes::Route;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        server::telemetry::init_tracing();
        server::config::load_config();
        server::health::record_start_time();

        let pool = server::db::create_pool();
        server::db::run_migrations(&pool).await;

        let access = server::config::access_config();
        server::auth::ensure_seed_admin(&pool, access.seed_admin_email.as_deref()).await;

        tracing::info!(
            allow_missing_role = access.allow_missing_role,
            "starting admin dashboard"
        );

        let state = server::db::AppState { pool: pool.clone() };

        let health = axum::Router::new()
            .route("/health", axum::routing::get(server::health::health_check))
            .with_state(pool);

        let router = dioxus::server::router(App)
            .merge(health)
            .layer(axum::middleware::from_fn_with_state(
                state,
                server::auth::middleware::auth_middleware,
            ))
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(AdminAuthState::new);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        shared_ui::theme::ThemeSeed {}
        shared_ui::ToastProvider {
            SuspenseBoundary {
                fallback: |_| rsx! {
                    div { class: "access-gate-loading",
                        p { "Loading..." }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
