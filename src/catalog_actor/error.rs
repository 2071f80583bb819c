//! Error types for the catalog actor.

use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// Product names are the join key against ingredient names and cannot be blank.
    #[error("Product name must not be empty")]
    EmptyName,

    #[error("Invalid price: {0}")]
    InvalidPrice(f64),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
