use cosmic_core::{
    BodyCatalog, Diagram, DiagramConfig, DiagramEvent, DiagramSnapshot, InstanceBuffer,
    ScaleAxis, ScrollUpdate,
};

/// Owns one diagram session and the instance buffer the page reads.
///
/// The page creates a single `thread_local!` runner and drives it through the
/// free functions in `lib.rs`, because wasm-bindgen cannot export the session
/// directly with borrowed buffer pointers.
pub struct DiagramRunner {
    diagram: Diagram,
    instances: InstanceBuffer,
}

impl DiagramRunner {
    pub fn new(diagram: Diagram) -> Self {
        let mut runner = Self {
            instances: InstanceBuffer::with_capacity(diagram.bodies().len()),
            diagram,
        };
        runner.rebuild();
        runner
    }

    /// Build a session from optional JSON. Anything that fails to parse or
    /// validate is logged and replaced by its default.
    pub fn from_json(config_json: Option<&str>, bodies_json: Option<&str>) -> Self {
        let config = match config_json {
            Some(json) => DiagramConfig::from_json(json).unwrap_or_else(|e| {
                log::warn!("diagram config rejected, using defaults: {e}");
                DiagramConfig::default()
            }),
            None => DiagramConfig::default(),
        };
        let bodies = match bodies_json {
            Some(json) => BodyCatalog::from_json(json).unwrap_or_else(|e| {
                log::warn!("body list rejected, using defaults: {e}");
                BodyCatalog::default()
            }),
            None => BodyCatalog::default(),
        };
        Self::new(Diagram::new(config, bodies))
    }

    /// Apply an event and refresh the instance buffer.
    pub fn handle(&mut self, event: DiagramEvent) -> Option<ScrollUpdate> {
        let update = self.diagram.handle(event);
        self.rebuild();
        update
    }

    /// Process a scroll notification; returns the offset the surface must hold.
    pub fn scroll(&mut self, offset: f64) -> f64 {
        self.handle(DiagramEvent::Scroll { offset })
            .map(|u| u.surface_offset())
            .unwrap_or(offset)
    }

    /// Apply a zoom from bridge codes. Unknown axes are ignored.
    pub fn zoom(&mut self, axis: u32, direction: i32) -> bool {
        match DiagramEvent::zoom_from_codes(axis, direction) {
            Some(event) => {
                let before = self.diagram.scale().state();
                self.handle(event);
                before != self.diagram.scale().state()
            }
            None => {
                log::warn!("ignoring zoom on unknown axis {axis}");
                false
            }
        }
    }

    /// Replace the body list. Returns false (and keeps the old list) on bad input.
    pub fn load_bodies(&mut self, json: &str) -> bool {
        match BodyCatalog::from_json(json) {
            Ok(bodies) => {
                log::info!("loaded {} bodies", bodies.len());
                self.diagram.set_bodies(bodies);
                self.rebuild();
                true
            }
            Err(e) => {
                log::warn!("body list rejected: {e}");
                false
            }
        }
    }

    fn rebuild(&mut self) {
        self.instances.rebuild(&self.diagram.layout());
    }

    pub fn diagram(&self) -> &Diagram {
        &self.diagram
    }

    pub fn snapshot(&self) -> DiagramSnapshot {
        self.diagram.snapshot()
    }

    pub fn status_text(&self) -> String {
        self.diagram.status_text()
    }

    /// The current body list as JSON, so the page can draw symbols and colors
    /// next to the geometry it reads from the instance buffer.
    pub fn bodies_json(&self) -> String {
        self.diagram.bodies().to_json().unwrap_or_else(|e| {
            log::warn!("body list not serializable: {e}");
            "[]".to_string()
        })
    }

    pub fn legend(&self, axis: ScaleAxis) -> String {
        self.diagram.scale().legend(axis)
    }

    // ---- Pointer accessors for direct memory reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.instance_count()
    }

    pub fn instances(&self) -> &InstanceBuffer {
        &self.instances
    }
}
