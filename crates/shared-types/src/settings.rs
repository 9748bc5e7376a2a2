use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

fn default_site_name() -> String {
    "Jos Vendors Hub".to_string()
}

fn default_support_email() -> String {
    "support@josvendors.com".to_string()
}

fn default_currency() -> String {
    "NGN".to_string()
}

fn default_timezone() -> String {
    "Africa/Lagos".to_string()
}

/// Currencies offered by the platform settings dropdown.
pub const CURRENCIES: &[&str] = &["NGN", "USD", "GBP"];

/// Per-admin notification toggles (settings page, Notifications tab).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NotificationPrefs {
    #[serde(default = "default_true")]
    pub email_notifications: bool,
    #[serde(default = "default_true")]
    pub order_notifications: bool,
    #[serde(default = "default_true")]
    pub vendor_notifications: bool,
    #[serde(default)]
    pub customer_notifications: bool,
    #[serde(default = "default_true")]
    pub security_alerts: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            email_notifications: true,
            order_notifications: true,
            vendor_notifications: true,
            customer_notifications: false,
            security_alerts: true,
        }
    }
}

/// Marketplace-wide settings (settings page, Platform tab). Stored as a
/// single row; defaults apply until an admin saves the form once.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct PlatformSettings {
    #[serde(default = "default_site_name")]
    pub site_name: String,
    #[serde(default = "default_support_email")]
    pub support_email: String,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default)]
    pub maintenance_mode: bool,
}

impl Default for PlatformSettings {
    fn default() -> Self {
        Self {
            site_name: default_site_name(),
            support_email: default_support_email(),
            currency: default_currency(),
            timezone: default_timezone(),
            maintenance_mode: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_defaults_mute_only_customer_signups() {
        let prefs = NotificationPrefs::default();
        assert!(prefs.email_notifications);
        assert!(prefs.order_notifications);
        assert!(prefs.vendor_notifications);
        assert!(!prefs.customer_notifications);
        assert!(prefs.security_alerts);
    }

    #[test]
    fn partial_prefs_json_fills_in_defaults() {
        let prefs: NotificationPrefs =
            serde_json::from_str(r#"{"customer_notifications": true}"#).unwrap();
        assert!(prefs.customer_notifications);
        assert!(prefs.email_notifications);
        assert!(prefs.security_alerts);
    }

    #[test]
    fn platform_defaults_describe_the_lagos_deployment() {
        let settings = PlatformSettings::default();
        assert_eq!(settings.site_name, "Jos Vendors Hub");
        assert_eq!(settings.support_email, "support@josvendors.com");
        assert_eq!(settings.currency, "NGN");
        assert_eq!(settings.timezone, "Africa/Lagos");
        assert!(!settings.maintenance_mode);
    }

    #[test]
    fn default_currency_is_offered_by_the_dropdown() {
        assert!(CURRENCIES.contains(&PlatformSettings::default().currency.as_str()));
    }

    #[test]
    fn settings_roundtrip_through_json() {
        let mut settings = PlatformSettings::default();
        settings.maintenance_mode = true;
        settings.currency = "USD".into();
        let json = serde_json::to_string(&settings).unwrap();
        let parsed: PlatformSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, parsed);
    }
}
