//! Restaurant resource actor: read-mostly catalog data.
//!
//! Restaurants enter the system once (catalog seeding) and are never
//! mutated afterwards; the rest of the crate only resolves them by slug.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::RestaurantClient;
use crate::framework::ResourceActor;
use crate::model::Restaurant;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Creates a new Restaurant actor and its client.
pub fn new() -> (ResourceActor<Restaurant>, RestaurantClient) {
    // Restaurants carry their own slug as a natural key, so this generator
    // only backs entities created without one.
    let counter = Arc::new(AtomicU64::new(1));
    let next_id = move || {
        let id = counter.fetch_add(1, Ordering::SeqCst);
        format!("restaurant_{}", id)
    };

    let (actor, generic_client) = ResourceActor::new(32, next_id);
    let client = RestaurantClient::new(generic_client);

    (actor, client)
}
