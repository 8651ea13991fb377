use crate::view::scale::{ScaleAxis, ZoomDirection};

/// Events the diagram understands. Each one is applied to completion before
/// the next; there is no queueing between a scroll and the wrap it causes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DiagramEvent {
    /// The scroll surface reported a new horizontal offset.
    Scroll { offset: f64 },
    /// A scale button was pressed.
    Zoom { axis: ScaleAxis, direction: ZoomDirection },
}

/// Numeric codes used by the browser bridge for [`ScaleAxis`] / [`ZoomDirection`].
pub const AXIS_RADIUS: u32 = 0;
pub const AXIS_DISTANCE: u32 = 1;

impl DiagramEvent {
    /// Decode a zoom event from the bridge's `(axis, direction)` pair.
    /// `direction > 0` zooms in, anything else zooms out. Unknown axes yield `None`.
    pub fn zoom_from_codes(axis: u32, direction: i32) -> Option<Self> {
        let axis = match axis {
            AXIS_RADIUS => ScaleAxis::Radius,
            AXIS_DISTANCE => ScaleAxis::Distance,
            _ => return None,
        };
        let direction = if direction > 0 { ZoomDirection::In } else { ZoomDirection::Out };
        Some(DiagramEvent::Zoom { axis, direction })
    }
}
