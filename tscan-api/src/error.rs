//! Errors surfaced by the readability API

use thiserror::Error;

/// Why a document could not be turned into a report
#[derive(Error, Debug)]
pub enum ApiError {
    /// Settings, lexicons, input or analysis failed in the engine
    #[error("analysis failed: {0}")]
    Engine(#[from] tscan_engine::EngineError),

    /// The metric tree could not be serialised
    #[cfg(feature = "serde")]
    #[error("cannot serialise metrics: {0}")]
    Serde(#[from] serde_json::Error),
}

impl ApiError {
    /// True when the failure happened before any document was read
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            ApiError::Engine(tscan_engine::EngineError::ConfigError(_))
                | ApiError::Engine(tscan_engine::EngineError::Core(
                    tscan_core::CoreError::Lexicon(_) | tscan_core::CoreError::InvalidConfig(_)
                ))
        )
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
