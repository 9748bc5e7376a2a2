use pretty_assertions::assert_eq;
use shared_types::AccessState;

use crate::common::{verdict, Gate};

#[test]
fn resubmit_discards_the_superseded_attempt() {
    let mut gate = Gate::new();
    gate.set_state(AccessState::SignedOut);

    let first = gate.begin_check();
    gate.access = AccessState::Verifying;

    // User resubmits before the first attempt resolves.
    let second = gate.begin_check();
    gate.access = AccessState::Verifying;

    // First attempt resolves late with a failure. It must not clobber
    // the in-flight second attempt.
    assert!(!gate.resolve_check(first, AccessState::SignedOut));
    assert_eq!(gate.access, AccessState::Verifying);

    // Second attempt resolves normally.
    let session = verdict(Some("admin"), true).session;
    assert!(gate.resolve_check(second, AccessState::Granted(session)));
    assert!(gate.access.is_granted());
}

#[test]
fn stale_grant_cannot_override_newer_failure() {
    let mut gate = Gate::new();
    gate.set_state(AccessState::SignedOut);

    let first = gate.begin_check();
    let second = gate.begin_check();

    assert!(gate.resolve_check(second, AccessState::SignedOut));

    // The older attempt comes back granted after the newer one already
    // failed. The grant is stale and must be dropped.
    let session = verdict(Some("admin"), true).session;
    assert!(!gate.resolve_check(first, AccessState::Granted(session)));
    assert_eq!(gate.access, AccessState::SignedOut);
}

#[test]
fn sign_out_invalidates_in_flight_checks() {
    let mut gate = Gate::new();
    gate.set_state(AccessState::Granted(verdict(Some("admin"), true).session));

    let in_flight = gate.begin_check();

    // Sign-out opens a new epoch of its own.
    gate.sign_out();

    let session = verdict(Some("admin"), true).session;
    assert!(!gate.resolve_check(in_flight, AccessState::Granted(session)));
    assert_eq!(gate.access, AccessState::SignedOut);
}

#[test]
fn each_resolution_applies_at_most_once_per_epoch_sequence() {
    let mut gate = Gate::new();

    let a = gate.begin_check();
    let b = gate.begin_check();
    let c = gate.begin_check();

    assert!(!gate.resolve_check(a, AccessState::SignedOut));
    assert!(!gate.resolve_check(b, AccessState::SignedOut));
    assert!(gate.resolve_check(c, AccessState::Denied(None)));
    assert_eq!(gate.access, AccessState::Denied(None));
}
