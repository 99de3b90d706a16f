//! HTTP API for the Tournify match service.
//!
//! Thin routing layer over [`tournify_resolution::MatchResolver`]: request
//! bodies deserialize straight into the core's request type, reports
//! serialize straight back out, and the only mappings that live here are
//! hard failures to status codes.

pub mod error;
pub mod handlers;
pub mod server;

pub use error::RpcError;
pub use server::{router, AppState, RpcServer};
