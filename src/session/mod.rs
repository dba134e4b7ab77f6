//! The order-creation session: the state a single "new order" view binds to.
//!
//! One [`NewOrderSession`] per view. It resolves the restaurant for the
//! current slug (memoized after the first successful fetch), owns exactly
//! one draft order at a time, submits it through the [`OrderClient`] and
//! records the save outcome for the view to observe.

pub mod new_order;

pub use new_order::*;

use crate::order_actor::OrderError;
use crate::restaurant_actor::RestaurantError;
use thiserror::Error;

/// Errors surfaced to the view layer by a session.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    /// The slug the session was opened with matches no restaurant.
    #[error("Unknown restaurant: {0}")]
    UnknownRestaurant(String),

    /// The restaurant lookup itself failed.
    #[error(transparent)]
    Lookup(#[from] RestaurantError),

    /// The order save was rejected.
    #[error(transparent)]
    Save(#[from] OrderError),
}
