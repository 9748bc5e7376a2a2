use serde::{Deserialize, Serialize};

/// How an admin directory record with no `role` value is interpreted.
///
/// The directory predates role data, so most records carry none.
/// `AllowMissingRole` treats those records as admins (matching the data as
/// deployed); `RequireExplicitRole` only accepts records where
/// `role = "admin"`. Configured via `[access] allow_missing_role`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub enum RolePolicy {
    #[default]
    AllowMissingRole,
    RequireExplicitRole,
}

impl RolePolicy {
    pub fn from_allow_missing(allow: bool) -> Self {
        if allow {
            RolePolicy::AllowMissingRole
        } else {
            RolePolicy::RequireExplicitRole
        }
    }

    /// Whether a directory record with the given role grants admin access.
    /// An empty string counts as missing.
    pub fn permits(&self, role: Option<&str>) -> bool {
        match role.filter(|r| !r.is_empty()) {
            Some(r) => r == "admin",
            None => matches!(self, RolePolicy::AllowMissingRole),
        }
    }
}

/// Signed-in admin info (safe to send to the client).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminSession {
    pub account_id: i64,
    pub email: String,
    pub display_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// Role from the admin directory record. `None` when the record
    /// carries no role; see [`RolePolicy`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Outcome of replaying a persisted session against the admin directory.
///
/// `authorized` is false when the account signed in but its directory
/// record no longer passes the role check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionVerdict {
    pub session: AdminSession,
    pub authorized: bool,
}

/// Sign-in request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 8, message = "Password must be at least 8 characters"))
    )]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(role: Option<&str>) -> AdminSession {
        AdminSession {
            account_id: 7,
            email: "admin@josvendors.com".into(),
            display_name: "Admin User".into(),
            phone: None,
            role: role.map(String::from),
        }
    }

    #[test]
    fn explicit_admin_role_always_permits() {
        assert!(RolePolicy::AllowMissingRole.permits(Some("admin")));
        assert!(RolePolicy::RequireExplicitRole.permits(Some("admin")));
    }

    #[test]
    fn non_admin_role_never_permits() {
        assert!(!RolePolicy::AllowMissingRole.permits(Some("vendor")));
        assert!(!RolePolicy::AllowMissingRole.permits(Some("support")));
        assert!(!RolePolicy::RequireExplicitRole.permits(Some("vendor")));
    }

    #[test]
    fn missing_role_depends_on_policy() {
        assert!(RolePolicy::AllowMissingRole.permits(None));
        assert!(!RolePolicy::RequireExplicitRole.permits(None));
    }

    #[test]
    fn empty_role_counts_as_missing() {
        assert!(RolePolicy::AllowMissingRole.permits(Some("")));
        assert!(!RolePolicy::RequireExplicitRole.permits(Some("")));
    }

    #[test]
    fn from_allow_missing_maps_both_ways() {
        assert_eq!(
            RolePolicy::from_allow_missing(true),
            RolePolicy::AllowMissingRole
        );
        assert_eq!(
            RolePolicy::from_allow_missing(false),
            RolePolicy::RequireExplicitRole
        );
    }

    #[test]
    fn session_roundtrip_preserves_missing_role() {
        let s = session(None);
        let json = serde_json::to_string(&s).unwrap();
        assert!(!json.contains("role"));
        let parsed: AdminSession = serde_json::from_str(&json).unwrap();
        assert_eq!(s, parsed);
    }

    #[test]
    fn verdict_deserializes_from_api_json() {
        let json = r#"{"session":{"account_id":3,"email":"ops@josvendors.com","display_name":"Ops","role":"admin"},"authorized":true}"#;
        let v: SessionVerdict = serde_json::from_str(json).unwrap();
        assert!(v.authorized);
        assert_eq!(v.session.role.as_deref(), Some("admin"));
    }
}
