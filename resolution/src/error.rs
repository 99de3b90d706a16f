use thiserror::Error;
use tournify_provider::ProviderError;

#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("player roster is empty")]
    EmptyRoster,

    /// A quorum over one source is vacuous; resolution needs at least two
    /// independent histories.
    #[error("at least two distinct players are required, got {0}")]
    RosterTooSmall(usize),

    /// The canonical record could not be fetched, so neither verification
    /// nor ranking can happen. The only mid-pipeline hard failure.
    #[error("canonical match record unavailable: {0}")]
    CanonicalUnavailable(ProviderError),
}
