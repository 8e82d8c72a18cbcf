//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every stored resource (profile, menu category,
//! menu item, gallery image, account, …) implements to be managed by the generic
//! `ResourceActor`. It fixes the associated types for ids, DTOs, list queries, actions,
//! context and errors, and provides the lifecycle hooks (`on_create`, `on_update`,
//! `on_delete`, `handle_action`).
//!
//! # Caller-supplied ids
//! Ids are chosen by the caller and handed to the actor with the create payload. The
//! actor only enforces uniqueness: creating an id that is already stored fails with
//! [`FrameworkError::AlreadyExists`](crate::FrameworkError::AlreadyExists).
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::matches`] (every entity matches every query by default)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! The default hook implementations do nothing (`Ok(())`).

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// This trait is `#[async_trait]` so hooks can await other actors. The `Context` type is
/// injected into every hook at `run()` time, which lets a category actor hold the client
/// of the item actor without either being constructed first.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity (e.g., String, a newtype over String).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Selection criteria accepted by `List` requests. Use `()` to list everything.
    type Query: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g., `SaveProfile`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One error enum per actor, shared by every operation on it.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full Entity from the ID and Payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Returns true when this entity belongs in the answer to `query`.
    fn matches(&self, _query: &Self::Query) -> bool {
        true
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called immediately after the entity is created and initialized.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the system.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
