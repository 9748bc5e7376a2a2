use shared_types::{AccessConfig, AppConfig, RolePolicy};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Read `config.toml`, parse it, and store it in the global `OnceLock`.
/// Safe to call multiple times — only the first call has effect.
///
/// If the file is missing or unparseable, all sections fall back to their
/// defaults (notably `[access] allow_missing_role = true`).
pub fn load_config() {
    CONFIG.get_or_init(|| match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => {
            let config: AppConfig = toml::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!(%e, "Failed to parse {CONFIG_PATH}; using defaults");
                AppConfig::default()
            });
            tracing::info!(access = ?config.access, "Loaded {CONFIG_PATH}");
            config
        }
        Err(e) => {
            tracing::info!(%e, "{CONFIG_PATH} not found; using defaults");
            AppConfig::default()
        }
    });
}

/// Get the loaded config. Returns defaults if `load_config()` hasn't been
/// called yet (safe fallback for tests and server functions).
pub fn config() -> &'static AppConfig {
    static DEFAULT: OnceLock<AppConfig> = OnceLock::new();
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(AppConfig::default))
}

/// The `[access]` section of the loaded config.
pub fn access_config() -> &'static AccessConfig {
    &config().access
}

/// How admin directory records without a role are interpreted.
pub fn role_policy() -> RolePolicy {
    access_config().role_policy()
}
