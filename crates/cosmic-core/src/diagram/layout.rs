use glam::DVec2;

use crate::diagram::body::CelestialBody;
use crate::view::scale::ScaleController;
use crate::view::scroll::ScrollVirtualizer;

/// Inputs of the layout pass, captured once per frame so a scale change
/// never leaks into geometry that was already computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    pub radius_scale: f64,
    pub distance_scale: f64,
    /// Anchor bias plus the current section's shift.
    pub origin_x: f64,
    pub body_y: f64,
}

impl LayoutParams {
    pub fn new(scale: &ScaleController, scroll: &ScrollVirtualizer, body_y: f64) -> Self {
        Self {
            radius_scale: scale.radius_scale_factor(),
            distance_scale: scale.distance_scale_factor(),
            origin_x: scroll.render_offset() + scroll.section_shift(),
            body_y,
        }
    }
}

/// Screen geometry of one body, in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyLayout {
    /// Anchor of the body and centre of its orbit ring.
    pub center: DVec2,
    pub radius: f64,
    pub orbit_radius: f64,
    /// Glyph size in pixels.
    pub font_size: f64,
}

impl BodyLayout {
    /// Top edge of the body disc.
    pub fn top(&self) -> f64 {
        self.center.y - self.radius
    }

    /// Half-width of whatever is drawn for this body (disc or ring).
    pub fn half_extent(&self) -> f64 {
        self.radius.max(self.orbit_radius)
    }

    /// Whether any part of the body or its ring overlaps `[left, left + width]`.
    pub fn overlaps_span(&self, left: f64, width: f64) -> bool {
        let half = self.half_extent();
        self.center.x + half >= left && self.center.x - half <= left + width
    }
}

pub fn layout_body(body: &CelestialBody, params: &LayoutParams) -> BodyLayout {
    let orbit_radius = body.orbit_radius / params.distance_scale;
    let x_offset = body.x_offset / params.distance_scale;
    let radius = body.radius / params.radius_scale;
    BodyLayout {
        center: DVec2::new(orbit_radius + x_offset + params.origin_x, params.body_y),
        radius,
        orbit_radius,
        font_size: radius * body.font_size,
    }
}

/// Lay out bodies in list order (back to front).
pub fn layout_bodies<'a>(
    bodies: impl IntoIterator<Item = &'a CelestialBody>,
    params: &LayoutParams,
) -> Vec<BodyLayout> {
    bodies.into_iter().map(|body| layout_body(body, params)).collect()
}
