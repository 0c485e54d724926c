//! Stevedore - ship compose configurations to a deployer service.
//!
//! This library backs the `stevedore` CLI tool: it resolves a version tag
//! (explicit or the current git revision), builds the deployer endpoint URL
//! and POSTs the raw configuration bytes with a bearer-style token.

pub mod cli;
pub mod deploy;
pub mod git;

/// Library-level error type for stevedore operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Failed to resolve git revision: {0}")]
    Git(String),

    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// The deployer answered with an error status (>= 400).
    #[error("Deployer returned HTTP {status}")]
    Rejected { status: u16, body: String },
}

/// Result type alias for stevedore operations.
pub type Result<T> = std::result::Result<T, Error>;
