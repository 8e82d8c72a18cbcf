//! # Actor Framework
//!
//! Building blocks for type-safe resource stores that live behind a message channel.
//! Each resource type (restaurant profile, menu category, menu item, gallery image,
//! account) is owned by one [`ResourceActor`] running in its own Tokio task; everything
//! else talks to it through a cloneable [`ResourceClient`].
//!
//! ## Why actors for a small CRUD backend?
//!
//! - State is isolated: no shared memory and no locks around the stores.
//! - Requests to one store are processed sequentially, so a read issued after a
//!   completed write always observes it.
//! - Resources that must coordinate (a category deleting its items) do so by sending
//!   messages to each other's clients instead of sharing data structures.
//!
//! **Further Reading**:
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - the stored record and its hooks
//! 2. **Runtime Layer** ([`ResourceActor`]) - message processing and the store
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - typed requests
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Category {
//!     id: String,
//!     name: String,
//! }
//!
//! #[derive(Debug)] struct CategoryCreate { name: String }
//! #[derive(Debug)] struct CategoryUpdate { name: Option<String> }
//! #[derive(Debug)] enum CategoryAction {}
//! #[derive(Debug, thiserror::Error)] #[error("{0}")] struct CategoryError(String);
//!
//! #[async_trait]
//! impl ActorEntity for Category {
//!     type Id = String;
//!     type Create = CategoryCreate;
//!     type Update = CategoryUpdate;
//!     type Query = ();
//!     type Action = CategoryAction;
//!     type ActionResult = ();
//!     type Context = ();
//!     type Error = CategoryError;
//!
//!     fn from_create_params(id: String, params: CategoryCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, name: params.name })
//!     }
//!
//!     async fn on_update(&mut self, update: CategoryUpdate, _ctx: &()) -> Result<(), Self::Error> {
//!         if let Some(name) = update.name { self.name = name; }
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, _: CategoryAction, _: &()) -> Result<(), Self::Error> {
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Category>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client
//!         .create("bbq".to_string(), CategoryCreate { name: "B.B.Q".into() })
//!         .await
//!         .unwrap();
//!     let category = client.get(id).await.unwrap().unwrap();
//!     assert_eq!(category.name, "B.B.Q");
//! }
//! ```
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via `run(context)`, not at construction
//! time. All actors are created first, then each is started with the clients it needs.
//! A category actor started with the item client as context can cascade deletes from
//! its `on_delete` hook.
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor
//! - Multiple actors run in **parallel**
//! - Dropping every client closes the channel and ends the actor's loop
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers requests from a queue of expectations instead of a
//! store, and [`mock::create_mock_client`] hands the raw request channel to the test.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
