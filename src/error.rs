use thiserror::Error;

use crate::{api::ApiError, config::ConfigError};

/// Raised when `bookmarks update` is called without anything to change.
pub const NO_UPDATE_FIELDS: &str = "cannot update with no fields supplied";

/// Top-level error for a single invocation; every variant ends the process with status 1.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Validation(&'static str),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("telemetry initialization failed: {0}")]
    Telemetry(String),
}

impl CliError {
    pub fn telemetry(message: impl Into<String>) -> Self {
        Self::Telemetry(message.into())
    }
}
