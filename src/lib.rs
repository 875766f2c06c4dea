//! Slide-out drawer for yew: a sidebar that can be docked, toggled, or
//! dragged open and closed from any edge of its container.
//!
//! The gesture engine in [`state`] has no browser dependency; the
//! [`components::Drawer`] component wires it to DOM touch events.

pub mod components;
pub mod model;
pub mod state;
pub mod util;

pub use components::{App, Drawer, DrawerProps};
pub use model::{DrawerConfig, Edge, GeometrySnapshot, OpenChangeReason, OpenRequest, TouchSample};
pub use state::{DrawerEngine, DrawerStyles, TouchState};
