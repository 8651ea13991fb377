pub mod body;
pub mod layout;

use crate::api::config::DiagramConfig;
use crate::diagram::body::BodyCatalog;
use crate::diagram::layout::{layout_bodies, BodyLayout, LayoutParams};
use crate::input::event::DiagramEvent;
use crate::view::scale::{ScaleAxis, ScaleController, ZoomDirection};
use crate::view::scroll::{ScrollReport, ScrollUpdate, ScrollVirtualizer};

/// Everything the renderer needs besides per-body geometry. Recomputed on
/// every call, never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagramSnapshot {
    pub radius_scale: f64,
    pub distance_scale: f64,
    pub section: i64,
    /// Current surface offset.
    pub offset: f64,
    pub distance_km: i64,
}

/// One interactive diagram session: scale, scroll and the body list.
pub struct Diagram {
    config: DiagramConfig,
    scale: ScaleController,
    scroll: ScrollVirtualizer,
    bodies: BodyCatalog,
    /// Surface offset after the last processed scroll (wraps applied).
    offset: f64,
    /// Report of the last scroll notification, for the status text.
    last_report: Option<ScrollReport>,
}

impl Diagram {
    pub fn new(config: DiagramConfig, bodies: BodyCatalog) -> Self {
        let scale = ScaleController::from_config(&config);
        let scroll = ScrollVirtualizer::from_config(&config);
        Self {
            config,
            scale,
            scroll,
            bodies,
            offset: 0.0,
            last_report: None,
        }
    }

    pub fn config(&self) -> &DiagramConfig {
        &self.config
    }

    pub fn scale(&self) -> &ScaleController {
        &self.scale
    }

    pub fn scroll(&self) -> &ScrollVirtualizer {
        &self.scroll
    }

    pub fn bodies(&self) -> &BodyCatalog {
        &self.bodies
    }

    pub fn set_bodies(&mut self, bodies: BodyCatalog) {
        self.bodies = bodies;
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Apply one event. Scroll events return the resulting update so the
    /// caller can push a wrap back into its scroll surface.
    pub fn handle(&mut self, event: DiagramEvent) -> Option<ScrollUpdate> {
        match event {
            DiagramEvent::Scroll { offset } => Some(self.scroll_to(offset)),
            DiagramEvent::Zoom { axis, direction } => {
                self.zoom(axis, direction);
                None
            }
        }
    }

    pub fn scroll_to(&mut self, offset: f64) -> ScrollUpdate {
        let update = self.scroll.update(offset, self.scale.distance_power());
        self.offset = update.surface_offset();
        self.last_report = Some(update.report);
        update
    }

    /// Returns true if the scale changed.
    pub fn zoom(&mut self, axis: ScaleAxis, direction: ZoomDirection) -> bool {
        self.scale.zoom(axis, direction)
    }

    pub fn snapshot(&self) -> DiagramSnapshot {
        DiagramSnapshot {
            radius_scale: self.scale.radius_scale_factor(),
            distance_scale: self.scale.distance_scale_factor(),
            section: self.scroll.section(),
            offset: self.offset,
            distance_km: self.scroll.distance_km(self.offset, self.scale.distance_power()),
        }
    }

    pub fn layout(&self) -> Vec<BodyLayout> {
        let params = LayoutParams::new(&self.scale, &self.scroll, self.config.body_y);
        layout_bodies(self.bodies.iter(), &params)
    }

    /// Status lines for the last scroll notification, or placeholders before
    /// the first one.
    pub fn status_text(&self) -> String {
        match &self.last_report {
            Some(report) => report.to_string(),
            None => "Scroll: _\nSection: _\nDistance: _ km".to_string(),
        }
    }
}

impl Default for Diagram {
    fn default() -> Self {
        Self::new(DiagramConfig::default(), BodyCatalog::default())
    }
}
