//! View models for the public site and the admin gate.
//!
//! Builders here are pure: they take query statuses and return values a renderer
//! would draw. No I/O happens in this module.

pub mod gallery;
pub mod gate;
pub mod menu;
pub mod nav;
pub mod sections;
pub mod seed;

pub use gallery::{GalleryView, ResolvedImage};
pub use gate::{AdminGate, GateView};
pub use menu::{CategoryGroup, MenuView, EXCLUDED_CATEGORY};
pub use nav::{nav_items, NavItem, Section};
pub use sections::{ContactView, LocationView, OverviewView};
