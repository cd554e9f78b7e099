use thiserror::Error;

/// Custom error types for hovertip
#[derive(Debug, Error)]
pub enum HovertipError {
    #[error("Invalid config file {0}: {1}")]
    InvalidConfig(String, String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
