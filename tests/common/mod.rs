//! Shared helpers for drawer integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use yew_drawer::model::{DrawerConfig, Edge, GeometrySnapshot, TouchSample};
use yew_drawer::state::DrawerEngine;

/// 200x150 sidebar in a 400x600 window.
pub fn geometry() -> GeometrySnapshot {
    GeometrySnapshot {
        sidebar_width: 200.0,
        sidebar_height: 150.0,
        sidebar_top: 0.0,
        drag_handle_top: 0.0,
        viewport_width: 400.0,
        viewport_height: 600.0,
    }
}

pub fn config(edge: Edge, open: bool) -> DrawerConfig {
    DrawerConfig {
        edge,
        open,
        ..Default::default()
    }
}

/// Engine with `geometry()` already reported.
pub fn measured_engine() -> DrawerEngine {
    let mut engine = DrawerEngine::new();
    engine.report_measured_size(geometry());
    engine
}

/// Start a single-finger drag at `from` and move it to `to`.
pub fn drag(engine: &mut DrawerEngine, from: (f64, f64), to: (f64, f64)) {
    engine.touch_start(TouchSample::new(1, from.0, from.1));
    engine.touch_move(&[TouchSample::new(1, to.0, to.1)]);
}
