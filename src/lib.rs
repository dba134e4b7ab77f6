//! # order-up
//!
//! An order-placement service for restaurant delivery, built as a small
//! actor system on Tokio.
//!
//! A customer-facing view binds to a [`NewOrderSession`](session::NewOrderSession):
//! it resolves the restaurant for a URL slug, holds one draft order at a
//! time, submits the draft and records the save outcome. The `Restaurant`
//! and `Order` collaborators behind it are resource actors, each owning its
//! store and processing requests sequentially in its own task.
//!
//! ## Module Tour
//!
//! - [`framework`] — the engine: generic [`ResourceActor`](framework::ResourceActor),
//!   [`ResourceClient`](framework::ResourceClient) and the
//!   [`ActorEntity`](framework::ActorEntity) trait, plus a
//!   [`MockClient`](framework::mock::MockClient) for testing without actors.
//! - [`model`] — pure data: [`Restaurant`](model::Restaurant) with its menu,
//!   [`Order`](model::Order) with delivery status, and their payload DTOs.
//! - [`restaurant_actor`], [`order_actor`] — concrete `ActorEntity`
//!   implementations. Order creation validates the referenced restaurant
//!   through the restaurant client injected as actor context.
//! - [`clients`] — typed wrappers hiding the message passing:
//!   [`RestaurantClient`](clients::RestaurantClient),
//!   [`OrderClient`](clients::OrderClient).
//! - [`session`] — the order-creation view state; the binding surface a
//!   rendered view consumes.
//! - [`lifecycle`] — [`OrderingSystem`](lifecycle::OrderingSystem)
//!   orchestration (spawn, wire, seed, shutdown) and tracing setup.
//!
//! ## Running the demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod restaurant_actor;
pub mod session;
