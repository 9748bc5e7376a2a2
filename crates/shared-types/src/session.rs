use crate::models::{AdminSession, SessionVerdict};

/// Client-side authorization state for the admin area.
///
/// Transitions:
/// - `Resolving` -> `SignedOut` | `Granted` | `Denied` (persisted-session replay)
/// - `SignedOut` -> `Verifying` (sign-in submitted)
/// - `Verifying` -> `Granted` | `SignedOut` (sign-in resolves; a failed
///   role check leaves no session behind, so it lands on `SignedOut`)
/// - `Granted` | `Denied` -> `SignedOut` (sign-out)
///
/// Any re-check maps through [`AccessState::from_check`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AccessState {
    /// Persisted session not yet replayed. Render nothing gated on this.
    #[default]
    Resolving,
    SignedOut,
    /// Credential exchange or directory check in flight.
    Verifying,
    /// Session live and the directory check passed.
    Granted(AdminSession),
    /// A session exists but the directory check failed, or the check
    /// itself could not be completed. Treated as not authorized.
    Denied(Option<AdminSession>),
}

impl AccessState {
    /// Map a session re-check result onto the state machine. Lookup
    /// failures land on `Denied` rather than surfacing an error.
    pub fn from_check<E>(result: Result<Option<SessionVerdict>, E>) -> Self {
        match result {
            Ok(Some(v)) if v.authorized => AccessState::Granted(v.session),
            Ok(Some(v)) => AccessState::Denied(Some(v.session)),
            Ok(None) => AccessState::SignedOut,
            Err(_) => AccessState::Denied(None),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, AccessState::Resolving | AccessState::Verifying)
    }

    pub fn is_granted(&self) -> bool {
        matches!(self, AccessState::Granted(_))
    }

    pub fn session(&self) -> Option<&AdminSession> {
        match self {
            AccessState::Granted(s) => Some(s),
            AccessState::Denied(Some(s)) => Some(s),
            _ => None,
        }
    }
}

/// Monotonic counter separating the authoritative authorization check from
/// stale in-flight ones. `begin` supersedes every earlier epoch; a
/// resolution is applied only while its epoch is still current.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckEpoch {
    current: u64,
}

impl CheckEpoch {
    pub fn begin(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    pub fn is_current(&self, epoch: u64) -> bool {
        self.current == epoch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin(role: Option<&str>) -> AdminSession {
        AdminSession {
            account_id: 1,
            email: "admin@josvendors.com".into(),
            display_name: "Admin User".into(),
            phone: None,
            role: role.map(String::from),
        }
    }

    #[test]
    fn check_with_authorized_verdict_grants() {
        let verdict = SessionVerdict {
            session: admin(Some("admin")),
            authorized: true,
        };
        let state = AccessState::from_check::<()>(Ok(Some(verdict)));
        assert!(state.is_granted());
        assert_eq!(state.session().unwrap().email, "admin@josvendors.com");
    }

    #[test]
    fn check_with_unauthorized_verdict_denies_but_keeps_session() {
        let verdict = SessionVerdict {
            session: admin(Some("vendor")),
            authorized: false,
        };
        let state = AccessState::from_check::<()>(Ok(Some(verdict)));
        assert_eq!(state.session().unwrap().role.as_deref(), Some("vendor"));
        assert!(!state.is_granted());
    }

    #[test]
    fn check_without_session_signs_out() {
        let state = AccessState::from_check::<()>(Ok(None));
        assert_eq!(state, AccessState::SignedOut);
    }

    #[test]
    fn failed_check_denies_without_session() {
        let state = AccessState::from_check(Err("connection refused"));
        assert_eq!(state, AccessState::Denied(None));
        assert!(state.session().is_none());
        assert!(!state.is_granted());
    }

    #[test]
    fn initial_state_is_resolving_and_pending() {
        let state = AccessState::default();
        assert_eq!(state, AccessState::Resolving);
        assert!(state.is_pending());
        assert!(AccessState::Verifying.is_pending());
        assert!(!AccessState::SignedOut.is_pending());
    }

    #[test]
    fn epoch_begin_supersedes_earlier_checks() {
        let mut epoch = CheckEpoch::default();
        let first = epoch.begin();
        assert!(epoch.is_current(first));

        let second = epoch.begin();
        assert!(!epoch.is_current(first));
        assert!(epoch.is_current(second));
    }

    #[test]
    fn stale_epoch_stays_stale_across_further_checks() {
        let mut epoch = CheckEpoch::default();
        let first = epoch.begin();
        let _second = epoch.begin();
        let third = epoch.begin();
        assert!(!epoch.is_current(first));
        assert!(epoch.is_current(third));
    }
}
