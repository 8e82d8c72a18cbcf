//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).
//!
//! Each wrapper implements [`ActorClient`](actor_framework::ActorClient) for the shared
//! `get`/`list`/`delete` calls and adds the resource's own create and update calls.

pub mod account_client;
pub mod gallery_client;
pub mod menu_client;
pub mod profile_client;

pub use account_client::*;
pub use gallery_client::*;
pub use menu_client::*;
pub use profile_client::*;
