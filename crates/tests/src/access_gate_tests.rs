use pretty_assertions::assert_eq;
use shared_types::AccessState;

use crate::common::{verdict, Gate};

#[test]
fn successful_sign_in_lands_on_granted() {
    let mut gate = Gate::new();
    gate.set_state(AccessState::SignedOut);

    let epoch = gate.begin_check();
    gate.access = AccessState::Verifying;
    assert!(gate.access.is_pending());

    let v = verdict(Some("admin"), true);
    assert!(gate.resolve_check(epoch, AccessState::Granted(v.session)));
    assert!(gate.access.is_granted());
}

#[test]
fn failed_credentials_land_back_on_signed_out() {
    let mut gate = Gate::new();
    gate.set_state(AccessState::SignedOut);

    let epoch = gate.begin_check();
    gate.access = AccessState::Verifying;

    // Credential exchange failed; no session exists afterwards.
    assert!(gate.resolve_check(epoch, AccessState::SignedOut));
    assert_eq!(gate.access, AccessState::SignedOut);
    assert!(gate.access.session().is_none());
}

#[test]
fn non_admin_role_is_denied_but_session_is_kept() {
    let mut gate = Gate::new();
    let epoch = gate.begin_check();

    let state = AccessState::from_check::<()>(Ok(Some(verdict(Some("vendor"), false))));
    assert!(gate.resolve_check(epoch, state));

    assert!(!gate.access.is_granted());
    // The denied screen still shows who is signed in.
    assert_eq!(
        gate.access.session().map(|s| s.role.clone()),
        Some(Some("vendor".to_string()))
    );
}

#[test]
fn failed_role_lookup_fails_closed() {
    let mut gate = Gate::new();
    let epoch = gate.begin_check();

    let state = AccessState::from_check(Err("directory unavailable"));
    assert!(gate.resolve_check(epoch, state));

    assert_eq!(gate.access, AccessState::Denied(None));
    assert!(!gate.access.is_granted());
}

#[test]
fn replay_without_persisted_session_signs_out() {
    let mut gate = Gate::new();
    assert_eq!(gate.access, AccessState::Resolving);

    let epoch = gate.begin_check();
    let state = AccessState::from_check::<()>(Ok(None));
    assert!(gate.resolve_check(epoch, state));
    assert_eq!(gate.access, AccessState::SignedOut);
}

#[test]
fn sign_out_clears_granted_state() {
    let mut gate = Gate::new();
    gate.set_state(AccessState::Granted(verdict(Some("admin"), true).session));
    assert!(gate.access.is_granted());

    gate.sign_out();
    assert_eq!(gate.access, AccessState::SignedOut);
}

#[test]
fn sign_out_while_signed_out_stays_signed_out() {
    let mut gate = Gate::new();
    gate.set_state(AccessState::SignedOut);

    gate.sign_out();
    assert_eq!(gate.access, AccessState::SignedOut);
}

#[test]
fn sign_out_clears_denied_state() {
    let mut gate = Gate::new();
    gate.set_state(AccessState::Denied(Some(
        verdict(Some("customer"), false).session,
    )));

    gate.sign_out();
    assert_eq!(gate.access, AccessState::SignedOut);
    assert!(gate.access.session().is_none());
}
