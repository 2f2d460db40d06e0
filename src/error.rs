//! Error types for scene mutations and engine configuration.
//!
//! Neither error ever reaches the user as a failure: the engine logs it and
//! treats the operation that produced it as a no-op.

use crate::object::ObjectId;

/// Errors produced by a [`crate::scene::Scene`] collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SceneError {
    /// An object with this id is already on the scene.
    #[error("object {0} already exists")]
    DuplicateObject(ObjectId),

    /// No object with this id is on the scene.
    #[error("object {0} not found")]
    UnknownObject(ObjectId),
}

/// Errors produced while parsing [`crate::config::EngineConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration document is not valid JSON for the expected shape.
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field parsed but holds an unusable value.
    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}
