// Touch gesture tracking for the drawer.
//
// `TouchState` is a value: every event consumes the old state and returns the
// next one, so the host never sees a half-updated gesture.
use crate::model::{Axis, DrawerConfig, Edge, GeometrySnapshot, OpenRequest, Point, TouchSample};
use crate::state::extent::touch_sidebar_extent;

/// A scroll that arrives before the finger moved this far along the sliding
/// axis cancels the gesture: the user is scrolling the sidebar, not dragging it.
pub const CANCEL_DISTANCE_ON_SCROLL: f64 = 20.0;

/// The finger being tracked and where it went.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gesture {
    pub identifier: i32,
    pub start: Point,
    pub current: Point,
}

impl Gesture {
    pub fn begin(sample: TouchSample) -> Self {
        Self {
            identifier: sample.identifier,
            start: sample.point(),
            current: sample.point(),
        }
    }

    /// Net finger movement along `axis` (current - start).
    pub fn displacement(&self, axis: Axis) -> f64 {
        self.current.along(axis) - self.start.along(axis)
    }

    /// True while the finger has barely moved along the edge's sliding axis.
    pub fn in_cancel_distance(&self, edge: Edge) -> bool {
        self.displacement(edge.axis()).abs() < CANCEL_DISTANCE_ON_SCROLL
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum TouchState {
    #[default]
    Idle,
    Tracking(Gesture),
}

impl TouchState {
    pub fn is_touching(&self) -> bool {
        matches!(self, TouchState::Tracking(_))
    }

    pub fn gesture(&self) -> Option<&Gesture> {
        match self {
            TouchState::Idle => None,
            TouchState::Tracking(g) => Some(g),
        }
    }

    pub fn identifier(&self) -> Option<i32> {
        self.gesture().map(|g| g.identifier)
    }

    /// Start tracking `sample`. A second finger while already tracking is ignored.
    pub fn start(self, sample: TouchSample) -> Self {
        match self {
            TouchState::Idle => {
                tracing::debug!(
                    "drawer touch start id={} at ({}, {})",
                    sample.identifier,
                    sample.x,
                    sample.y
                );
                TouchState::Tracking(Gesture::begin(sample))
            }
            tracking => tracking,
        }
    }

    /// Follow the tracked finger. The first sample with a matching identifier wins;
    /// samples for other fingers are ignored.
    pub fn moved(self, samples: &[TouchSample]) -> Self {
        let TouchState::Tracking(mut gesture) = self else {
            return self;
        };
        if let Some(sample) = samples.iter().find(|s| s.identifier == gesture.identifier) {
            gesture.current = sample.point();
        }
        TouchState::Tracking(gesture)
    }

    /// Finger lifted (or the platform cancelled the touch). Always returns to
    /// `Idle`; yields a request when the drag crossed the toggle distance.
    pub fn release(
        self,
        config: &DrawerConfig,
        geometry: &GeometrySnapshot,
    ) -> (Self, Option<OpenRequest>) {
        let TouchState::Tracking(gesture) = self else {
            return (self, None);
        };
        let request = toggle_request(config, geometry, &gesture);
        tracing::debug!(
            "drawer touch end id={} request={:?}",
            gesture.identifier,
            request
        );
        (TouchState::Idle, request)
    }

    /// A scroll event inside the gesture surface.
    pub fn scrolled(self, edge: Edge) -> Self {
        match self {
            TouchState::Tracking(gesture) if gesture.in_cancel_distance(edge) => {
                tracing::debug!("drawer gesture id={} cancelled by scroll", gesture.identifier);
                TouchState::Idle
            }
            other => other,
        }
    }
}

/// Decide whether releasing `gesture` should flip the open state.
///
/// Open drawers close once dragged below `extent - drag_toggle_distance`;
/// closed drawers open once dragged past `drag_toggle_distance`.
pub fn toggle_request(
    config: &DrawerConfig,
    geometry: &GeometrySnapshot,
    gesture: &Gesture,
) -> Option<OpenRequest> {
    let measured = geometry.extent(config.edge.axis());
    let dragged = touch_sidebar_extent(config.edge, config.open, geometry, gesture);
    let flip = if config.open {
        dragged < measured - config.drag_toggle_distance
    } else {
        dragged > config.drag_toggle_distance
    };
    flip.then(|| OpenRequest::new(!config.open))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> GeometrySnapshot {
        GeometrySnapshot {
            sidebar_width: 200.0,
            sidebar_height: 150.0,
            viewport_width: 400.0,
            viewport_height: 600.0,
            ..Default::default()
        }
    }

    #[test]
    fn second_finger_does_not_replace_tracked_one() {
        let state = TouchState::Idle.start(TouchSample::new(1, 10.0, 10.0));
        let again = state.start(TouchSample::new(2, 99.0, 99.0));
        assert_eq!(state, again);
        assert_eq!(again.identifier(), Some(1));
    }

    #[test]
    fn move_while_idle_is_ignored() {
        let state = TouchState::Idle.moved(&[TouchSample::new(1, 5.0, 5.0)]);
        assert_eq!(state, TouchState::Idle);
    }

    #[test]
    fn move_takes_first_matching_sample() {
        let state = TouchState::Idle.start(TouchSample::new(7, 0.0, 0.0)).moved(&[
            TouchSample::new(3, 1.0, 1.0),
            TouchSample::new(7, 40.0, 2.0),
            TouchSample::new(7, 80.0, 3.0),
        ]);
        let g = state.gesture().unwrap();
        assert_eq!(g.current, Point::new(40.0, 2.0));
        assert_eq!(g.start, Point::new(0.0, 0.0));
    }

    #[test]
    fn move_without_matching_sample_keeps_state() {
        let state = TouchState::Idle.start(TouchSample::new(7, 5.0, 6.0));
        assert_eq!(state.moved(&[TouchSample::new(8, 100.0, 100.0)]), state);
    }

    #[test]
    fn release_while_idle_does_nothing() {
        let (state, request) = TouchState::Idle.release(&DrawerConfig::default(), &geometry());
        assert_eq!(state, TouchState::Idle);
        assert_eq!(request, None);
    }

    #[test]
    fn short_drag_does_not_toggle() {
        let config = DrawerConfig::default();
        let (state, request) = TouchState::Idle
            .start(TouchSample::new(1, 0.0, 0.0))
            .moved(&[TouchSample::new(1, 25.0, 0.0)])
            .release(&config, &geometry());
        assert_eq!(state, TouchState::Idle);
        assert_eq!(request, None);
    }

    #[test]
    fn scroll_after_horizontal_drag_keeps_gesture() {
        let state = TouchState::Idle
            .start(TouchSample::new(1, 10.0, 10.0))
            .moved(&[TouchSample::new(1, 60.0, 12.0)]);
        assert!(state.scrolled(Edge::Left).is_touching());
    }

    #[test]
    fn cancel_distance_is_sign_independent() {
        let forward = Gesture {
            identifier: 0,
            start: Point::new(100.0, 100.0),
            current: Point::new(119.0, 100.0),
        };
        let backward = Gesture {
            current: Point::new(81.0, 100.0),
            ..forward
        };
        for edge in [Edge::Left, Edge::Right] {
            assert!(forward.in_cancel_distance(edge));
            assert!(backward.in_cancel_distance(edge));
        }
    }
}
