//! Records stored by the backend actors and exchanged with the site.
//!
//! Every record serializes with camelCase field names (`categoryId`, `altText`,
//! `googleMapsLink`, …), which is the shape the remote interface speaks.

pub mod gallery;
pub mod menu;
pub mod profile;
pub mod user;

pub use gallery::*;
pub use menu::*;
pub use profile::*;
pub use user::*;
