//! Synthetic match-history provider.
//!
//! Serves the provider wire format with generated data so the match API can
//! be developed and tested without upstream credentials. Generation is
//! deterministic for the lifetime of one server: values are seeded from the
//! requested identifier against a clock base fixed at construction, so
//! repeated fetches of the same match agree — the resolution pipeline
//! fetches canonical records more than once and relies on that.
//!
//! Escape hatches for exercising failure paths, keyed on names:
//! - players named `solo-*` never report the shared scrim match
//!   (disjoint histories, no quorum);
//! - players named `faulty-*` get a 500 from the history endpoint
//!   (fan-out failure isolation);
//! - matches identified `lost-*` 404 on the canonical endpoint
//!   (canonical record unavailable).

pub mod data;
pub mod server;

pub use server::{router, StubServer, StubState};
