use bytemuck::{Pod, Zeroable};

use crate::diagram::layout::BodyLayout;

/// Per-body render data read by the page straight out of WASM memory.
/// 8 floats = 32 bytes per instance, in body list order.
///
/// Layout math is `f64`; this is the only place it narrows to `f32`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct BodyInstance {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub orbit_radius: f32,
    pub top: f32,
    pub font_size: f32,
    pub _pad0: f32,
    pub _pad1: f32,
}

impl BodyInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn from_layout(layout: &BodyLayout) -> Self {
        Self {
            x: layout.center.x as f32,
            y: layout.center.y as f32,
            radius: layout.radius as f32,
            orbit_radius: layout.orbit_radius as f32,
            top: layout.top() as f32,
            font_size: layout.font_size as f32,
            _pad0: 0.0,
            _pad1: 0.0,
        }
    }
}

/// Flat buffer of body instances, rebuilt after every state change.
pub struct InstanceBuffer {
    instances: Vec<BodyInstance>,
}

impl InstanceBuffer {
    pub fn new() -> Self {
        Self::with_capacity(16)
    }

    pub fn with_capacity(max: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max),
        }
    }

    /// Replace the contents with the given layouts.
    pub fn rebuild(&mut self, layouts: &[BodyLayout]) {
        self.instances.clear();
        self.instances.extend(layouts.iter().map(BodyInstance::from_layout));
    }

    pub fn instances(&self) -> &[BodyInstance] {
        &self.instances
    }

    /// The buffer viewed as raw floats.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(self.instances.as_slice())
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for InstanceBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    fn sample_layout() -> BodyLayout {
        BodyLayout {
            center: DVec2::new(650.0, 200.0),
            radius: 100.0,
            orbit_radius: 200.0,
            font_size: 100.0,
        }
    }

    #[test]
    fn body_instance_is_32_bytes() {
        assert_eq!(std::mem::size_of::<BodyInstance>(), BodyInstance::STRIDE_BYTES);
        assert_eq!(BodyInstance::FLOATS, 8);
    }

    #[test]
    fn rebuild_replaces_contents() {
        let mut buf = InstanceBuffer::new();
        buf.rebuild(&[sample_layout(), sample_layout()]);
        assert_eq!(buf.instance_count(), 2);
        buf.rebuild(&[sample_layout()]);
        assert_eq!(buf.instance_count(), 1);
    }

    #[test]
    fn float_view_matches_field_order() {
        let mut buf = InstanceBuffer::new();
        buf.rebuild(&[sample_layout()]);
        assert_eq!(buf.as_floats(), &[650.0, 200.0, 100.0, 200.0, 100.0, 100.0, 0.0, 0.0]);
    }
}
