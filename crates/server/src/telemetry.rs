use std::sync::OnceLock;

static INIT: OnceLock<()> = OnceLock::new();

/// Initialize the tracing subscriber for the whole process.
///
/// Filter comes from `RUST_LOG`, defaulting to `info` with quieter sqlx
/// output. Safe to call multiple times — only the first call installs the
/// subscriber.
pub fn init_tracing() {
    INIT.get_or_init(|| {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "info,sqlx=warn".into()),
            )
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init();
    });
}
