//! Pure data structures implementing the
//! [`ActorEntity`](crate::framework::ActorEntity) trait.

pub mod order;
pub mod restaurant;

pub use order::*;
pub use restaurant::*;
