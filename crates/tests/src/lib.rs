//! Scenario tests for the admin dashboard's client-side state handling.
//!
//! These run against `shared-types` alone: the gate state machine, the
//! stale-check epoch, the list caches, and the sample fallbacks. No test
//! needs a database or a network connection.

#[cfg(test)]
mod common;

#[cfg(test)]
mod access_gate_tests;

#[cfg(test)]
mod stale_check_tests;

#[cfg(test)]
mod customer_view_tests;

#[cfg(test)]
mod vendor_view_tests;

#[cfg(test)]
mod product_view_tests;

#[cfg(test)]
mod order_view_tests;

#[cfg(test)]
mod error_message_tests;
