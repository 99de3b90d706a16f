//! HTTP client for the upstream match-history provider.
//!
//! The provider exposes two operations: recent match identifiers for one
//! player, and the canonical record for one match. It is treated as
//! untrusted but available — responses are parsed defensively and every
//! request carries a hard timeout.

pub mod client;
pub mod config;
pub mod error;
pub mod records;

pub use client::ProviderClient;
pub use config::ProviderConfig;
pub use error::ProviderError;
pub use records::{HistoryMatch, HistoryResponse, MatchRecord, PlayerStatLine};
