use dioxus::prelude::*;
use shared_types::{AccessState, AdminSession, CheckEpoch};

/// Global authorization state for the admin area.
///
/// Holds the [`AccessState`] machine plus the epoch counter that separates
/// the authoritative check from stale in-flight ones. Components never set
/// the access signal directly: a check first calls [`AdminAuthState::begin_check`],
/// then applies its result through [`AdminAuthState::resolve_check`], which
/// silently discards resolutions from superseded checks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AdminAuthState {
    pub access: Signal<AccessState>,
    epoch: Signal<CheckEpoch>,
}

impl AdminAuthState {
    pub fn new() -> Self {
        Self::seeded(AccessState::Resolving)
    }

    /// Start from a known state instead of `Resolving`.
    pub fn seeded(initial: AccessState) -> Self {
        Self {
            access: Signal::new(initial),
            epoch: Signal::new(CheckEpoch::default()),
        }
    }

    /// Open a new check, superseding every earlier in-flight one.
    pub fn begin_check(&mut self) -> u64 {
        self.epoch.write().begin()
    }

    /// Apply a check result if its epoch is still current. Returns whether
    /// the state was applied.
    pub fn resolve_check(&mut self, epoch: u64, state: AccessState) -> bool {
        if self.epoch.read().is_current(epoch) {
            self.access.set(state);
            true
        } else {
            false
        }
    }

    /// Force a state, superseding any in-flight check.
    pub fn set_state(&mut self, state: AccessState) {
        self.epoch.write().begin();
        self.access.set(state);
    }

    pub fn is_granted(&self) -> bool {
        self.access.read().is_granted()
    }

    pub fn session(&self) -> Option<AdminSession> {
        self.access.read().session().cloned()
    }

    /// Replace the session payload without changing the grant. Used after
    /// profile edits so the navbar reflects the new display name.
    pub fn update_session(&mut self, session: AdminSession) {
        if self.access.read().is_granted() {
            self.access.set(AccessState::Granted(session));
        }
    }

    pub fn sign_out(&mut self) {
        self.set_state(AccessState::SignedOut);
    }
}

/// Hook to access the admin authorization state.
pub fn use_admin_auth() -> AdminAuthState {
    use_context::<AdminAuthState>()
}
