//! The contract every resource type implements to be managed by a
//! [`ResourceActor`](crate::framework::ResourceActor).

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by a
/// `ResourceActor`.
///
/// The associated types enforce payload safety at compile time: a
/// `Restaurant` actor cannot be sent an `OrderCreate`, and vice versa.
///
/// # Async & Context
/// The trait is `#[async_trait]` so hooks can call other actors. The
/// `Context` type carries those dependencies; it is injected into every hook
/// when the actor's `run()` loop starts, not at construction time, which
/// keeps actor wiring acyclic.
///
/// # Provided hooks
/// `on_create`, `on_delete` and `handle_action` have do-nothing defaults;
/// implement them only where the resource needs validation or side effects.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity (e.g. `String`).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The payload required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The payload required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations that don't fit the CRUD model
    /// (e.g. advancing an order's status).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Runtime dependencies injected into the actor. Use `()` if none.
    type Context: Send + Sync;

    /// The error type for this entity.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The identifier under which this entity is stored.
    fn id(&self) -> Self::Id;

    /// Natural key derived from the create payload, if the resource has one.
    ///
    /// Restaurants are keyed by the slug carried in their payload; orders
    /// have no natural key and fall back to the actor's id generator.
    fn create_id(_params: &Self::Create) -> Option<Self::Id> {
        None
    }

    /// Construct the entity from the assigned id and the create payload.
    /// Called synchronously, before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called immediately after the entity is constructed, before it is
    /// stored. Validation and cross-actor side effects go here.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
