//! Fundamental types for the Tournify match API.
//!
//! This crate defines the value types shared across every other crate in the
//! workspace: player identities and wire-timestamp handling.

pub mod player;
pub mod time;

pub use player::PlayerIdentity;
pub use time::{parse_instant, InstantParseError};
