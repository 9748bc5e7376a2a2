use serde::{Deserialize, Serialize};

use crate::models::RolePolicy;

fn default_true() -> bool {
    true
}

/// `[access]` section of `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccessConfig {
    /// Admin directory records without a `role` value pass the check.
    /// Matches the directory as deployed; set to `false` once every
    /// record carries an explicit role.
    #[serde(default = "default_true")]
    pub allow_missing_role: bool,
    /// Account promoted into the admin directory at startup if present.
    #[serde(default)]
    pub seed_admin_email: Option<String>,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            allow_missing_role: true,
            seed_admin_email: None,
        }
    }
}

impl AccessConfig {
    pub fn role_policy(&self) -> RolePolicy {
        RolePolicy::from_allow_missing(self.allow_missing_role)
    }
}

/// Root structure of `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub access: AccessConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_gets_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert!(config.access.allow_missing_role);
        assert!(config.access.seed_admin_email.is_none());
        assert_eq!(config.access.role_policy(), RolePolicy::AllowMissingRole);
    }

    #[test]
    fn access_section_overrides_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [access]
            allow_missing_role = false
            seed_admin_email = "admin@josvendors.com"
            "#,
        )
        .unwrap();
        assert!(!config.access.allow_missing_role);
        assert_eq!(
            config.access.seed_admin_email.as_deref(),
            Some("admin@josvendors.com")
        );
        assert_eq!(config.access.role_policy(), RolePolicy::RequireExplicitRole);
    }

    #[test]
    fn partial_access_section_keeps_remaining_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [access]
            seed_admin_email = "ops@josvendors.com"
            "#,
        )
        .unwrap();
        assert!(config.access.allow_missing_role);
        assert!(config.access.seed_admin_email.is_some());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let config: AppConfig = toml::from_str(
            r#"
            [access]
            allow_missing_role = true
            retired_option = "ignored"

            [unused_section]
            x = 1
            "#,
        )
        .unwrap();
        assert!(config.access.allow_missing_role);
    }
}
