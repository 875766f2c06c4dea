use crate::model::{DrawerConfig, GeometrySnapshot, OpenRequest, TouchSample};
use crate::state::styles::{self, DrawerStyles};
use crate::state::touch::TouchState;

/// Gesture tracker plus the last measured geometry. The host keeps one per
/// drawer and forwards its events here; `open`/`docked` always come from the
/// config passed in, never from the engine.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawerEngine {
    geometry: GeometrySnapshot,
    touch: TouchState,
}

impl DrawerEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn geometry(&self) -> &GeometrySnapshot {
        &self.geometry
    }

    pub fn touch(&self) -> &TouchState {
        &self.touch
    }

    pub fn is_touching(&self) -> bool {
        self.touch.is_touching()
    }

    /// Store a fresh measurement. Ignored mid-gesture so reflow from the drag
    /// itself can't move the reference size. Returns true when it changed.
    pub fn report_measured_size(&mut self, geometry: GeometrySnapshot) -> bool {
        if self.is_touching() || geometry == self.geometry {
            return false;
        }
        tracing::debug!(
            "drawer measured {}x{} (viewport {}x{})",
            geometry.sidebar_width,
            geometry.sidebar_height,
            geometry.viewport_width,
            geometry.viewport_height
        );
        self.geometry = geometry;
        true
    }

    pub fn touch_start(&mut self, sample: TouchSample) {
        self.touch = self.touch.start(sample);
    }

    pub fn touch_move(&mut self, samples: &[TouchSample]) {
        self.touch = self.touch.moved(samples);
    }

    pub fn touch_end(&mut self, config: &DrawerConfig) -> Option<OpenRequest> {
        let (touch, request) = self.touch.release(config, &self.geometry);
        self.touch = touch;
        if let Some(request) = request {
            tracing::info!("drawer requests open={}", request.open);
        }
        request
    }

    /// The platform aborted the touch; handled like a release.
    pub fn touch_cancel(&mut self, config: &DrawerConfig) -> Option<OpenRequest> {
        self.touch_end(config)
    }

    pub fn scroll(&mut self, config: &DrawerConfig) {
        self.touch = self.touch.scrolled(config.edge);
    }

    pub fn overlay_clicked(&self, config: &DrawerConfig) -> Option<OpenRequest> {
        config.open.then(OpenRequest::overlay_clicked)
    }

    pub fn compute_styles(&self, config: &DrawerConfig) -> DrawerStyles {
        styles::compute_styles(config, &self.geometry, &self.touch)
    }

    pub fn root_classes(&self, config: &DrawerConfig) -> Vec<String> {
        styles::root_classes(config, &self.geometry, &self.touch)
    }
}
