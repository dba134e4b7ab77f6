//! System lifecycle and orchestration.
//!
//! Actors are simple; wiring them is where the coordination lives. This
//! module spawns the restaurant and order actors, injects the restaurant
//! client into the order actor's context, seeds the catalog, hands out
//! per-view sessions and coordinates graceful shutdown. The [`tracing`]
//! submodule holds the logging setup.

pub mod system;
pub mod tracing;

pub use system::*;
pub use tracing::*;
