pub mod engine;
pub mod extent;
pub mod styles;
pub mod touch;

pub use engine::DrawerEngine;
pub use extent::{drag_percentage, touch_sidebar_extent};
pub use styles::{
    DrawerMode, DrawerStyles, GestureSurface, Translate, compute_styles, drag_handle_css,
    gesture_surface, root_classes,
};
pub use touch::{CANCEL_DISTANCE_ON_SCROLL, Gesture, TouchState};
