//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).
//!
//! The rest of the crate never touches raw message passing; it goes through
//! these domain clients.

pub mod actor_client;
pub mod order_client;
pub mod restaurant_client;

pub use actor_client::*;
pub use order_client::*;
pub use restaurant_client::*;
