use thiserror::Error;

/// Failures of the external gas price oracle.
#[derive(Error, Debug)]
pub enum OracleError {
    #[error("Oracle request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid oracle response: {0}")]
    InvalidResponse(String),
}

/// Failures of the bridge contract's gas price accessor.
#[derive(Error, Debug)]
pub enum ContractError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid gasPrice call response: {0}")]
    InvalidResponse(String),
}
