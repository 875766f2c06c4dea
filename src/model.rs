//! Core data models for the drawer.
//! Everything here is plain data; the gesture engine in `state` works on these types.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

/// Edge of the container the sidebar is attached to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    #[default]
    Left,
    Right,
    Top,
    Bottom,
}

/// Axis the sidebar slides along.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Which end of the axis the edge sits on. Leading edges are at the origin
/// (left/top), trailing edges at the far window edge (right/bottom).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Leading,
    Trailing,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom];

    pub fn axis(self) -> Axis {
        match self {
            Edge::Left | Edge::Right => Axis::Horizontal,
            Edge::Top | Edge::Bottom => Axis::Vertical,
        }
    }

    pub fn side(self) -> Side {
        match self {
            Edge::Left | Edge::Top => Side::Leading,
            Edge::Right | Edge::Bottom => Side::Trailing,
        }
    }

    /// CSS property / class suffix for this edge.
    pub fn as_str(self) -> &'static str {
        match self {
            Edge::Left => "left",
            Edge::Right => "right",
            Edge::Top => "top",
            Edge::Bottom => "bottom",
        }
    }

    pub fn parse(s: &str) -> Option<Edge> {
        Edge::ALL.into_iter().find(|e| e.as_str() == s)
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn along(self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }
}

/// One finger as reported by the host (`Touch.identifier`, `clientX`, `clientY`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchSample {
    pub identifier: i32,
    pub x: f64,
    pub y: f64,
}

impl TouchSample {
    pub fn new(identifier: i32, x: f64, y: f64) -> Self {
        Self { identifier, x, y }
    }

    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

pub const DEFAULT_DRAG_TOGGLE_DISTANCE: f64 = 30.0;
pub const DEFAULT_DRAG_HANDLE_THICKNESS: f64 = 20.0;
pub const DEFAULT_CLASS_PREFIX: &str = "rc-drawer";

/// Caller supplied drawer settings. Immutable for the duration of a render;
/// the host owns `open` and `docked` and the engine only ever reads them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawerConfig {
    pub edge: Edge,
    pub touch: bool,
    pub transitions: bool,
    /// Pixels the sidebar has to be dragged before release flips the open state.
    pub drag_toggle_distance: f64,
    /// Thickness of the edge strip that starts an opening drag while closed.
    pub drag_handle_thickness: f64,
    pub enable_drag_handle: bool,
    pub docked: bool,
    pub open: bool,
    pub class_prefix: String,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            edge: Edge::Left,
            touch: true,
            transitions: true,
            drag_toggle_distance: DEFAULT_DRAG_TOGGLE_DISTANCE,
            drag_handle_thickness: DEFAULT_DRAG_HANDLE_THICKNESS,
            enable_drag_handle: true,
            docked: false,
            open: false,
            class_prefix: DEFAULT_CLASS_PREFIX.to_string(),
        }
    }
}

impl DrawerConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: DrawerConfig =
            serde_json::from_str(raw).context("Failed to parse drawer config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("Failed to serialize drawer config")
    }

    pub fn validate(&self) -> Result<()> {
        if !self.drag_toggle_distance.is_finite() || self.drag_toggle_distance < 0.0 {
            bail!(
                "drag_toggle_distance must be a non-negative number, got {}",
                self.drag_toggle_distance
            );
        }
        if !self.drag_handle_thickness.is_finite() || self.drag_handle_thickness < 0.0 {
            bail!(
                "drag_handle_thickness must be a non-negative number, got {}",
                self.drag_handle_thickness
            );
        }
        if self.class_prefix.trim().is_empty() {
            bail!("class_prefix must not be empty");
        }
        Ok(())
    }
}

/// Measured sidebar box and offsets, as last reported by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GeometrySnapshot {
    pub sidebar_width: f64,
    pub sidebar_height: f64,
    /// Absolute top offset of the sidebar; only the top edge uses it.
    pub sidebar_top: f64,
    /// Absolute top offset of the drag handle; only the top edge uses it.
    pub drag_handle_top: f64,
    /// Window inner size, the "far edge" for right/bottom drawers.
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl GeometrySnapshot {
    /// Sidebar size along `axis`.
    pub fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.sidebar_width,
            Axis::Vertical => self.sidebar_height,
        }
    }

    pub fn viewport(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.viewport_width,
            Axis::Vertical => self.viewport_height,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenChangeReason {
    pub overlay_clicked: bool,
}

/// A request for the host to change its open state. The host may ignore it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenRequest {
    pub open: bool,
    pub reason: OpenChangeReason,
}

impl OpenRequest {
    pub fn new(open: bool) -> Self {
        Self {
            open,
            reason: OpenChangeReason::default(),
        }
    }

    pub fn overlay_clicked() -> Self {
        Self {
            open: false,
            reason: OpenChangeReason {
                overlay_clicked: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_axis_and_side() {
        assert_eq!(Edge::Left.axis(), Axis::Horizontal);
        assert_eq!(Edge::Right.axis(), Axis::Horizontal);
        assert_eq!(Edge::Top.axis(), Axis::Vertical);
        assert_eq!(Edge::Bottom.axis(), Axis::Vertical);
        assert_eq!(Edge::Left.side(), Side::Leading);
        assert_eq!(Edge::Top.side(), Side::Leading);
        assert_eq!(Edge::Right.side(), Side::Trailing);
        assert_eq!(Edge::Bottom.side(), Side::Trailing);
    }

    #[test]
    fn edge_parse_matches_as_str() {
        for edge in Edge::ALL {
            assert_eq!(Edge::parse(edge.as_str()), Some(edge));
        }
        assert_eq!(Edge::parse("middle"), None);
    }

    #[test]
    fn config_defaults() {
        let c = DrawerConfig::default();
        assert_eq!(c.edge, Edge::Left);
        assert!(c.touch);
        assert!(c.transitions);
        assert_eq!(c.drag_toggle_distance, 30.0);
        assert_eq!(c.drag_handle_thickness, 20.0);
        assert!(!c.docked);
        assert!(!c.open);
        assert_eq!(c.class_prefix, "rc-drawer");
    }
}
