//! Error types for the Restaurant actor.

use thiserror::Error;

/// Errors that can occur during restaurant operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RestaurantError {
    /// No restaurant with the requested slug.
    #[error("Restaurant not found: {0}")]
    NotFound(String),

    /// The catalog entry carries an empty slug.
    #[error("Restaurant slug must not be empty")]
    InvalidSlug,

    /// A catalog entry with this slug already exists.
    #[error("Restaurant already in catalog: {0}")]
    DuplicateSlug(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for RestaurantError {
    fn from(msg: String) -> Self {
        RestaurantError::ActorCommunicationError(msg)
    }
}
