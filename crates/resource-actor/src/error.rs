//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself, shared by every resource actor.

/// Errors that can occur within the resource-actor runtime.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("No ids left to allocate")]
    IdsExhausted,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Wraps an entity's own error.
    pub fn entity<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        FrameworkError::EntityError(Box::new(error))
    }

    /// Recovers the entity's error type from an `EntityError`.
    ///
    /// Returns the framework error unchanged when it does not carry an `E`.
    pub fn into_entity<E>(self) -> Result<E, FrameworkError>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(e) => Ok(*e),
                Err(other) => Err(FrameworkError::EntityError(other)),
            },
            other => Err(other),
        }
    }
}
