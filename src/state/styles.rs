//! Layout projection: turns config, geometry and touch state into the
//! inline styles applied to the sidebar, overlay, content and drag handle.

use crate::model::{Axis, DrawerConfig, Edge, GeometrySnapshot, Side};
use crate::state::extent::{drag_percentage, touch_sidebar_extent};
use crate::state::touch::TouchState;

/// What the drawer looks like on this render pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawerMode {
    /// A finger is dragging; `percentage` of the sidebar is showing.
    Dragging { percentage: f64 },
    Docked,
    Open,
    Closed,
}

impl DrawerMode {
    pub fn resolve(config: &DrawerConfig, geometry: &GeometrySnapshot, touch: &TouchState) -> Self {
        let measured = geometry.extent(config.edge.axis());
        if let Some(gesture) = touch.gesture() {
            let extent = touch_sidebar_extent(config.edge, config.open, geometry, gesture);
            DrawerMode::Dragging {
                percentage: drag_percentage(extent, measured),
            }
        } else if config.docked && measured != 0.0 {
            DrawerMode::Docked
        } else if config.open {
            DrawerMode::Open
        } else {
            DrawerMode::Closed
        }
    }
}

/// Sidebar translation along its axis, in percent of its own size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Translate {
    pub axis: Axis,
    pub percent: f64,
}

impl Translate {
    /// Translation for a sidebar showing `percentage` of itself on `edge`.
    /// Leading edges hide towards negative offsets, trailing towards positive.
    pub fn for_edge(edge: Edge, percentage: f64) -> Self {
        let hidden = (1.0 - percentage) * 100.0;
        let percent = match edge.side() {
            Side::Leading => -hidden,
            Side::Trailing => hidden,
        };
        Self {
            axis: edge.axis(),
            // avoid rendering "-0%"
            percent: if percent == 0.0 { 0.0 } else { percent },
        }
    }

    pub fn to_css(&self) -> String {
        let func = match self.axis {
            Axis::Horizontal => "translateX",
            Axis::Vertical => "translateY",
        };
        format!("{}({}%)", func, self.percent)
    }
}

/// Space reserved for a docked sidebar on the content area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentOffset {
    pub edge: Edge,
    pub px: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DrawerStyles {
    pub sidebar_transform: Translate,
    pub sidebar_transition_disabled: bool,
    pub overlay_opacity: f64,
    pub overlay_visible: bool,
    pub overlay_transition_disabled: bool,
    pub content_offset: Option<ContentOffset>,
    pub content_transition_disabled: bool,
}

pub fn compute_styles(
    config: &DrawerConfig,
    geometry: &GeometrySnapshot,
    touch: &TouchState,
) -> DrawerStyles {
    let edge = config.edge;
    let no_transition = touch.is_touching() || !config.transitions;
    let (sidebar_transform, overlay_opacity, overlay_visible, content_offset) =
        match DrawerMode::resolve(config, geometry, touch) {
            DrawerMode::Dragging { percentage } => (
                Translate::for_edge(edge, percentage),
                percentage,
                percentage > 0.0,
                None,
            ),
            DrawerMode::Docked => (
                Translate::for_edge(edge, 1.0),
                0.0,
                false,
                Some(ContentOffset {
                    edge,
                    px: geometry.extent(edge.axis()),
                }),
            ),
            DrawerMode::Open => (Translate::for_edge(edge, 1.0), 1.0, true, None),
            DrawerMode::Closed => (Translate::for_edge(edge, 0.0), 0.0, false, None),
        };

    DrawerStyles {
        sidebar_transform,
        sidebar_transition_disabled: no_transition,
        overlay_opacity,
        overlay_visible,
        overlay_transition_disabled: no_transition,
        content_offset,
        content_transition_disabled: no_transition,
    }
}

impl DrawerStyles {
    pub fn sidebar_css(&self) -> String {
        let transform = self.sidebar_transform.to_css();
        let mut css = format!("transform:{0}; -webkit-transform:{0};", transform);
        if self.sidebar_transition_disabled {
            css.push_str(" transition:none; -webkit-transition:none;");
        }
        css
    }

    pub fn overlay_css(&self) -> String {
        let visibility = if self.overlay_visible { "visible" } else { "hidden" };
        let mut css = format!("opacity:{}; visibility:{};", self.overlay_opacity, visibility);
        if self.overlay_transition_disabled {
            css.push_str(" transition:none;");
        }
        css
    }

    pub fn content_css(&self) -> String {
        let mut css = String::new();
        if let Some(offset) = self.content_offset {
            css.push_str(&format!("{}:{}px;", offset.edge.as_str(), offset.px));
        }
        if self.content_transition_disabled {
            if !css.is_empty() {
                css.push(' ');
            }
            css.push_str("transition:none;");
        }
        css
    }
}

/// Which element receives touch events.
#[derive(Clone, Debug, PartialEq)]
pub enum GestureSurface {
    None,
    /// Open drawer: the whole component, including scroll events.
    Root,
    /// Closed drawer: a thin strip along the edge.
    DragHandle,
}

pub fn gesture_surface(config: &DrawerConfig, touch_supported: bool) -> GestureSurface {
    if !(touch_supported && config.touch) {
        return GestureSurface::None;
    }
    if config.open {
        GestureSurface::Root
    } else if config.enable_drag_handle {
        GestureSurface::DragHandle
    } else {
        GestureSurface::None
    }
}

/// Inline style for the drag handle strip anchored to the drawer's edge.
pub fn drag_handle_css(config: &DrawerConfig) -> String {
    let thickness = config.drag_handle_thickness;
    match config.edge {
        Edge::Left => format!("position:fixed; top:0; bottom:0; left:0; width:{}px;", thickness),
        Edge::Right => format!("position:fixed; top:0; bottom:0; right:0; width:{}px;", thickness),
        Edge::Top => format!("position:fixed; left:0; right:0; top:0; height:{}px;", thickness),
        Edge::Bottom => {
            format!("position:fixed; left:0; right:0; bottom:0; height:{}px;", thickness)
        }
    }
}

/// CSS classes for the root element.
pub fn root_classes(
    config: &DrawerConfig,
    geometry: &GeometrySnapshot,
    touch: &TouchState,
) -> Vec<String> {
    let prefix = &config.class_prefix;
    let mut classes = vec![prefix.clone(), format!("{}-{}", prefix, config.edge)];
    match DrawerMode::resolve(config, geometry, touch) {
        DrawerMode::Docked => classes.push(format!("{}-docked", prefix)),
        DrawerMode::Open => classes.push(format!("{}-open", prefix)),
        DrawerMode::Dragging { .. } | DrawerMode::Closed => {}
    }
    classes
}
