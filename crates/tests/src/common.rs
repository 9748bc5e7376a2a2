use shared_types::{AccessState, AdminSession, CheckEpoch, SessionVerdict};

/// Plain-state double for the client's authorization gate: the same
/// state-plus-epoch wiring the UI uses, without the reactive runtime.
pub struct Gate {
    pub access: AccessState,
    epoch: CheckEpoch,
}

impl Gate {
    pub fn new() -> Self {
        Self {
            access: AccessState::Resolving,
            epoch: CheckEpoch::default(),
        }
    }

    /// Open a new check epoch, superseding every earlier one.
    pub fn begin_check(&mut self) -> u64 {
        self.epoch.begin()
    }

    /// Apply a check resolution only while its epoch is still current.
    /// Returns whether the resolution was applied.
    pub fn resolve_check(&mut self, epoch: u64, state: AccessState) -> bool {
        if self.epoch.is_current(epoch) {
            self.access = state;
            true
        } else {
            false
        }
    }

    /// Force a state directly, superseding any in-flight check.
    pub fn set_state(&mut self, state: AccessState) {
        self.epoch.begin();
        self.access = state;
    }

    pub fn sign_out(&mut self) {
        self.set_state(AccessState::SignedOut);
    }
}

pub fn admin(role: Option<&str>) -> AdminSession {
    AdminSession {
        account_id: 1,
        email: "admin@josvendors.com".into(),
        display_name: "Admin User".into(),
        phone: None,
        role: role.map(String::from),
    }
}

pub fn verdict(role: Option<&str>, authorized: bool) -> SessionVerdict {
    SessionVerdict {
        session: admin(role),
        authorized,
    }
}
