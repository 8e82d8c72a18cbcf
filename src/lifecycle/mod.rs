//! Starting, wiring and stopping the backend actors.

pub mod restaurant_system;
pub mod tracing;

pub use self::restaurant_system::RestaurantSystem;
pub use self::tracing::setup_tracing;
