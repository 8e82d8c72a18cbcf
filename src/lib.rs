//! # Restaurant Site
//!
//! > **A restaurant's public site and admin panel over resource actors.**
//!
//! The restaurant profile, the menu, the gallery and the caller accounts each live in
//! their own [`ResourceActor`](actor_framework::ResourceActor). A [`Backend`](backend::Backend)
//! facade checks access and talks to the actors; the [`QueryClient`](query::QueryClient)
//! caches its reads and invalidates them after writes; the [`view`] builders turn the
//! cached results into what the public page and the admin panel show.
//!
//! ## Architecture Notes
//!
//! ### 1. One Actor per Resource
//! Every resource is an [`ActorEntity`](actor_framework::ActorEntity) run by the generic
//! actor loop. Categories get the item client as their context so that deleting a
//! category deletes its items.
//!
//! ### 2. Access Control at the Facade
//! Reads are public. Writes need the admin role, which the account actor derives per
//! caller. Admins are seeded from [`config`].
//!
//! ### 3. Cache Invalidation as a Table
//! [`Mutation::invalidates`](query::Mutation::invalidates) lists the reads each write
//! makes stale. Nothing else is dropped, and nothing is dropped when a write fails.
//!
//! ### 4. Seed Fallback
//! The public menu shows the built-in catalog until the store holds its own, and never
//! shows the [`EXCLUDED_CATEGORY`](view::EXCLUDED_CATEGORY).
//!
//! ## Module Tour
//!
//! - [`model`]: plain data records shared by every layer.
//! - [`profile_actor`], [`menu_actor`], [`gallery_actor`], [`account_actor`]: the entities.
//! - [`clients`]: typed wrappers over the generic resource clients.
//! - [`backend`]: the access-checked remote interface.
//! - [`lifecycle`]: starting, wiring and stopping the actors, plus tracing setup.
//! - [`query`]: the cached reads and invalidating mutations.
//! - [`view`], [`admin`], [`site`]: what the site shows and how admins edit it.
//!
//! ### Running the Demo
//!
//! ```bash
//! SITE_ACCESS_ADMINS=aaaaa-aa RUST_LOG=info cargo run
//! ```

pub mod account_actor;
pub mod admin;
pub mod backend;
pub mod clients;
pub mod config;
pub mod gallery_actor;
pub mod lifecycle;
pub mod menu_actor;
pub mod model;
pub mod profile_actor;
pub mod query;
pub mod site;
pub mod view;
