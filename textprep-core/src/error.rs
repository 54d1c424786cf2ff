//! Layered error types
//!
//! Collaborators report [`ServiceError`]; the pipeline wraps those into
//! [`PipelineError`] together with the construction-time failures.

use crate::pipeline::Step;
use thiserror::Error;

/// Error reported by an external linguistic service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{service}: {message}")]
pub struct ServiceError {
    /// Name of the failing service (e.g. "spellchecker")
    pub service: String,
    /// What went wrong
    pub message: String,
}

impl ServiceError {
    /// Create a new service error
    pub fn new(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            message: message.into(),
        }
    }
}

/// Pipeline-level errors
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Bad construction-time input
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A required linguistic resource could not be acquired at construction
    #[error("resource '{resource}' unavailable: {reason}")]
    ResourceUnavailable {
        /// The resource that was requested
        resource: String,
        /// Why it could not be acquired
        reason: String,
    },

    /// A step's backing service failed during a transform call
    #[error("step '{step}' failed: {source}")]
    ExternalService {
        /// The step whose service failed
        step: Step,
        /// The underlying service error
        #[source]
        source: ServiceError,
    },
}

impl PipelineError {
    pub(crate) fn unavailable(resource: impl Into<String>, reason: impl Into<String>) -> Self {
        PipelineError::ResourceUnavailable {
            resource: resource.into(),
            reason: reason.into(),
        }
    }
}

impl From<toml::de::Error> for PipelineError {
    fn from(err: toml::de::Error) -> Self {
        PipelineError::Configuration(err.to_string())
    }
}

impl From<serde_json::Error> for PipelineError {
    fn from(err: serde_json::Error) -> Self {
        PipelineError::Configuration(err.to_string())
    }
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;
