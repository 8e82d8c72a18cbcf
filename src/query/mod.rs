//! # Query Layer
//!
//! Client-side cache over the [`Backend`](crate::backend::Backend) reads. Each read is
//! cached under a [`QueryKey`]; each successful [`Mutation`] drops the keys listed for
//! it in [`Mutation::invalidates`], so the next read of those keys goes back to the
//! actors. Failed mutations leave the cache alone.

mod cache;
mod client;
mod error;
mod key;
mod status;

pub use cache::QueryCache;
pub use client::QueryClient;
pub use error::ClientError;
pub use key::{Mutation, QueryKey};
pub use status::QueryStatus;
