use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider unreachable: {0}")]
    Unreachable(String),

    #[error("provider request failed: {0}")]
    RequestFailed(String),

    #[error("invalid response from provider: {0}")]
    InvalidResponse(String),
}
