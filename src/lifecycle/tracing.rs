//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the `tracing-subscriber` formatter used by the binary.
//!
//! - **Configurable log levels** via the `RUST_LOG` environment variable
//! - **Compact format** with the module prefix hidden (`with_target(false)`); actors
//!   identify themselves with the `entity_type` field instead
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup with the seeded store size, and shutdown
//! - **Entity Operations**: Create, Get, List, Update, Delete and Actions, with ids
//! - **Backend Calls**: one span per operation, plus `warn` lines for rejected callers
//! - **Query Layer**: fetches, retries and invalidations
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Full payloads and cache activity
//! RUST_LOG=debug cargo run
//!
//! # Only the query layer
//! RUST_LOG=restaurant_site::query=debug cargo run
//! ```
//!
//! With `RUST_LOG=info`, deleting a category that holds two items looks like:
//!
//! ```text
//! INFO Deleted entity_type="MenuItem" id=12 size=26
//! INFO Deleted entity_type="MenuItem" id=13 size=25
//! INFO Deleted entity_type="MenuCategory" id=6 size=9
//! ```

/// Installs the global subscriber. Call once, at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type identifies the actor instead
        .compact()
        .init();
}
