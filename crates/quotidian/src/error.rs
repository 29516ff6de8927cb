//! Error types for the quotidian core
//!
//! Storage problems are the only typed failures; favoriting itself never
//! errors (load and save failures degrade to an empty or unwritten store).

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type alias for the quotidian core
pub type Result<T> = std::result::Result<T, AppError>;
