//! Drag extent: how much of the sidebar is showing while a finger drags it.
//!
//! One implementation covers all four edges; the edge only picks the axis
//! (width or height) and the side of the window the sidebar hangs off.

use crate::model::{Axis, Edge, GeometrySnapshot, Side};
use crate::state::touch::Gesture;

/// Visible sidebar size along the edge's axis for an in-progress gesture.
///
/// When the drawer is open and the drag started on the sidebar, the sidebar
/// follows the finger's net movement and never grows past its measured size.
/// Otherwise it is pulled out to wherever the finger currently is, measured
/// from the window edge.
pub fn touch_sidebar_extent(
    edge: Edge,
    open: bool,
    geometry: &GeometrySnapshot,
    gesture: &Gesture,
) -> f64 {
    let axis = edge.axis();
    let extent = geometry.extent(axis);
    let start = gesture.start.along(axis);
    let current = gesture.current.along(axis);

    match edge.side() {
        Side::Trailing => {
            let far = geometry.viewport(axis);
            if open && far - start < extent {
                if current > start {
                    return extent + start - current;
                }
                return extent;
            }
            (far - current).min(extent)
        }
        Side::Leading => {
            // Top drawers live in page coordinates; shift touches into the
            // sidebar's own frame.
            let (start_offset, origin) = match axis {
                Axis::Horizontal => (start, 0.0),
                Axis::Vertical => (start - geometry.sidebar_top, geometry.drag_handle_top),
            };
            if open && start_offset < extent {
                if current > start {
                    return extent;
                }
                return extent - start + current;
            }
            (current - origin).min(extent)
        }
    }
}

/// `extent / measured`, with an unmeasured sidebar treated as fully closed.
/// Not clamped: a slight overshoot is fine for the styles built from it.
pub fn drag_percentage(extent: f64, measured: f64) -> f64 {
    if measured > 0.0 && extent.is_finite() {
        extent / measured
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Point;

    fn gesture(start: (f64, f64), current: (f64, f64)) -> Gesture {
        Gesture {
            identifier: 0,
            start: Point::new(start.0, start.1),
            current: Point::new(current.0, current.1),
        }
    }

    fn geometry() -> GeometrySnapshot {
        GeometrySnapshot {
            sidebar_width: 200.0,
            sidebar_height: 100.0,
            sidebar_top: 0.0,
            drag_handle_top: 0.0,
            viewport_width: 400.0,
            viewport_height: 600.0,
        }
    }

    #[test]
    fn left_closed_follows_finger() {
        let g = gesture((50.0, 0.0), (150.0, 0.0));
        assert_eq!(touch_sidebar_extent(Edge::Left, false, &geometry(), &g), 150.0);
        let far = gesture((50.0, 0.0), (350.0, 0.0));
        assert_eq!(touch_sidebar_extent(Edge::Left, false, &geometry(), &far), 200.0);
    }

    #[test]
    fn left_open_inside_tracks_displacement() {
        let g = gesture((150.0, 0.0), (90.0, 0.0));
        assert_eq!(touch_sidebar_extent(Edge::Left, true, &geometry(), &g), 140.0);
        let opening = gesture((150.0, 0.0), (190.0, 0.0));
        assert_eq!(touch_sidebar_extent(Edge::Left, true, &geometry(), &opening), 200.0);
    }

    #[test]
    fn left_open_outside_footprint_follows_finger() {
        let g = gesture((300.0, 0.0), (120.0, 0.0));
        assert_eq!(touch_sidebar_extent(Edge::Left, true, &geometry(), &g), 120.0);
    }

    #[test]
    fn right_closed_measures_from_window_edge() {
        let g = gesture((390.0, 0.0), (300.0, 0.0));
        assert_eq!(touch_sidebar_extent(Edge::Right, false, &geometry(), &g), 100.0);
        let far = gesture((390.0, 0.0), (10.0, 0.0));
        assert_eq!(touch_sidebar_extent(Edge::Right, false, &geometry(), &far), 200.0);
    }

    #[test]
    fn right_open_inside_footprint() {
        // Started 150px from the right edge, inside the 200px sidebar.
        let closing = gesture((250.0, 0.0), (300.0, 0.0));
        assert_eq!(touch_sidebar_extent(Edge::Right, true, &geometry(), &closing), 150.0);
        let opening = gesture((250.0, 0.0), (200.0, 0.0));
        assert_eq!(touch_sidebar_extent(Edge::Right, true, &geometry(), &opening), 200.0);
    }

    #[test]
    fn top_uses_offsets() {
        let geo = GeometrySnapshot {
            sidebar_top: 40.0,
            drag_handle_top: 40.0,
            ..geometry()
        };
        let closed = gesture((0.0, 45.0), (100.0, 100.0));
        assert_eq!(touch_sidebar_extent(Edge::Top, false, &geo, &closed), 60.0);
        // start offset 120 - 40 = 80 < 100, inside the sidebar
        let open = gesture((0.0, 120.0), (0.0, 90.0));
        assert_eq!(touch_sidebar_extent(Edge::Top, true, &geo, &open), 70.0);
    }

    #[test]
    fn bottom_mirrors_right() {
        let g = gesture((0.0, 590.0), (0.0, 540.0));
        assert_eq!(touch_sidebar_extent(Edge::Bottom, false, &geometry(), &g), 60.0);
        let open = gesture((0.0, 550.0), (0.0, 580.0));
        assert_eq!(touch_sidebar_extent(Edge::Bottom, true, &geometry(), &open), 70.0);
    }

    #[test]
    fn zero_measured_extent_is_closed() {
        assert_eq!(drag_percentage(50.0, 0.0), 0.0);
        assert_eq!(drag_percentage(0.0, 0.0), 0.0);
        assert_eq!(drag_percentage(150.0, 200.0), 0.75);
    }
}
