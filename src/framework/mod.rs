//! Generic actor machinery for resource management.
//!
//! Each resource type (Restaurant, Order) gets its own actor: a Tokio task
//! that owns the entity store and processes requests sequentially, so no
//! locks are needed. Callers talk to it through a cloneable
//! [`ResourceClient`] whose operations are async methods returning
//! `Result` — the handle to the eventual outcome of a fetch or save.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns the entity store
//! - [`ResourceClient`] - Type-safe async client
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] for utilities to test clients and sessions without spawning
//! full actors.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
