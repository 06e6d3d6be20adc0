//! Shared error types for the services crate.

use thiserror::Error;

use stroke_core::model::{EngineConfigError, GlyphError};

/// Errors reported by a `StrokeEngine` implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EngineError {
    #[error("stroke engine could not create an instance: {0}")]
    Instantiation(String),
}

/// Errors emitted by session operations.
///
/// Every variant is also surfaced to the learner as error feedback; the
/// session stays usable after any of them.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum SessionError {
    #[error(transparent)]
    InvalidInput(#[from] GlyphError),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Config(#[from] EngineConfigError),
}
