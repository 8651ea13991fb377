/// Scroll virtualization: an unbounded horizontal diagram inside a finite
/// scroll surface.
///
/// The surface offset is kept between two thresholds. Crossing the right one
/// snaps the surface back to `increment` and moves to the next section;
/// crossing the left one snaps it to `increment + left_threshold` and moves
/// to the previous section. Forward sections carry lower indices, so the
/// logical origin of section `s` sits at `-s * increment`.
///
/// ```text
///   0   left                 increment                  right
///   |----|------------------------|--------------------------|--->
///        ^ back wrap lands here + left    forward wrap lands ^ at increment
/// ```

use std::fmt;

use crate::api::config::DiagramConfig;
use crate::view::scale::scale_factor;

pub const RIGHT_THRESHOLD: f64 = 100_000.0;
pub const LEFT_THRESHOLD: f64 = 100.0;
pub const INCREMENT: f64 = RIGHT_THRESHOLD / 2.0;
/// Pixel bias of the diagram anchor.
pub const RENDER_OFFSET: f64 = 400.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WrapDirection {
    /// Past the right threshold; section decreases.
    Forward,
    /// Below the left threshold; section increases.
    Back,
}

/// A wrap the host surface must apply: set its scroll offset to `reset_offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wrap {
    pub direction: WrapDirection,
    pub reset_offset: f64,
}

/// What the user sees for one scroll notification. Computed from the offset
/// and section as they were when the notification arrived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollReport {
    pub offset: f64,
    pub section: i64,
    pub distance_km: i64,
}

impl fmt::Display for ScrollReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scroll: {}\nSection: {}\nDistance: {} km",
            self.offset, self.section, self.distance_km
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollUpdate {
    pub report: ScrollReport,
    pub wrap: Option<Wrap>,
}

impl ScrollUpdate {
    /// Offset the surface holds after this update.
    pub fn surface_offset(&self) -> f64 {
        self.wrap.map(|w| w.reset_offset).unwrap_or(self.report.offset)
    }
}

/// Owns the section counter. Offsets are not validated: a real scroll
/// surface never reports negative values, and nothing here depends on it.
#[derive(Debug, Clone)]
pub struct ScrollVirtualizer {
    right_threshold: f64,
    left_threshold: f64,
    increment: f64,
    render_offset: f64,
    section: i64,
}

impl ScrollVirtualizer {
    pub fn new() -> Self {
        Self::from_config(&DiagramConfig::default())
    }

    pub fn from_config(config: &DiagramConfig) -> Self {
        Self {
            right_threshold: config.right_threshold,
            left_threshold: config.left_threshold,
            increment: config.increment(),
            render_offset: config.render_offset,
            section: 0,
        }
    }

    /// Start in a given section instead of the origin.
    pub fn with_section(mut self, section: i64) -> Self {
        self.section = section;
        self
    }

    pub fn section(&self) -> i64 {
        self.section
    }

    pub fn increment(&self) -> f64 {
        self.increment
    }

    pub fn left_threshold(&self) -> f64 {
        self.left_threshold
    }

    pub fn right_threshold(&self) -> f64 {
        self.right_threshold
    }

    pub fn render_offset(&self) -> f64 {
        self.render_offset
    }

    /// Horizontal shift applied to everything drawn in the current section.
    pub fn section_shift(&self) -> f64 {
        self.section as f64 * self.increment
    }

    /// Logical distance in km for a surface offset in the current section.
    pub fn distance_km(&self, offset: f64, distance_power: u32) -> i64 {
        let px = offset - self.section_shift() - self.render_offset;
        (px * scale_factor(distance_power)).floor() as i64
    }

    /// Process one scroll notification.
    pub fn update(&mut self, offset: f64, distance_power: u32) -> ScrollUpdate {
        let report = ScrollReport {
            offset,
            section: self.section,
            distance_km: self.distance_km(offset, distance_power),
        };

        let wrap = if offset > self.right_threshold {
            self.section -= 1;
            Some(Wrap {
                direction: WrapDirection::Forward,
                reset_offset: self.increment,
            })
        } else if offset < self.left_threshold && self.section != 0 {
            self.section += 1;
            Some(Wrap {
                direction: WrapDirection::Back,
                reset_offset: self.increment + self.left_threshold,
            })
        } else {
            None
        };

        if let Some(w) = wrap {
            log::debug!(
                "scroll wrap {:?} at offset {offset}: section {} -> {}, surface -> {}",
                w.direction,
                report.section,
                self.section,
                w.reset_offset
            );
        }

        ScrollUpdate { report, wrap }
    }
}

impl Default for ScrollVirtualizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic scramble for offset sequences (no external rand crate).
    fn hash(seed: u32) -> u32 {
        let mut n = seed;
        n = n.wrapping_mul(2654435761);
        n ^= n >> 16;
        n = n.wrapping_mul(2246822519);
        n ^= n >> 13;
        n
    }

    #[test]
    fn forward_wrap_from_origin() {
        let mut scroll = ScrollVirtualizer::new();
        let update = scroll.update(100_001.0, 0);
        let wrap = update.wrap.expect("should wrap");
        assert_eq!(wrap.direction, WrapDirection::Forward);
        assert_eq!(wrap.reset_offset, 50_000.0);
        assert_eq!(update.surface_offset(), 50_000.0);
        assert_eq!(scroll.section(), -1);
    }

    #[test]
    fn back_wrap_from_section_three() {
        let mut scroll = ScrollVirtualizer::new().with_section(3);
        let update = scroll.update(50.0, 0);
        let wrap = update.wrap.expect("should wrap");
        assert_eq!(wrap.direction, WrapDirection::Back);
        assert_eq!(update.surface_offset(), 50_100.0);
        assert_eq!(scroll.section(), 4);
    }

    #[test]
    fn origin_section_blocks_back_wrap() {
        let mut scroll = ScrollVirtualizer::new();
        for offset in [50.0, 0.0, 99.0, 10.0] {
            let update = scroll.update(offset, 4);
            assert!(update.wrap.is_none());
            assert_eq!(update.surface_offset(), offset);
            assert_eq!(scroll.section(), 0);
        }
    }

    #[test]
    fn thresholds_are_strict() {
        let mut scroll = ScrollVirtualizer::new().with_section(2);
        assert!(scroll.update(100_000.0, 0).wrap.is_none());
        assert!(scroll.update(100.0, 0).wrap.is_none());
        assert_eq!(scroll.section(), 2);
    }

    #[test]
    fn report_uses_pre_wrap_state() {
        let mut scroll = ScrollVirtualizer::new();
        let update = scroll.update(100_001.0, 0);
        assert_eq!(update.report.section, 0);
        assert_eq!(update.report.offset, 100_001.0);
        assert_eq!(update.report.distance_km, 99_601);
    }

    #[test]
    fn distance_is_continuous_across_forward_wrap() {
        let mut scroll = ScrollVirtualizer::new();
        scroll.update(100_001.0, 0);
        // Right after the wrap the surface sits at `increment` in section -1.
        assert_eq!(scroll.distance_km(50_000.0, 0), 99_600);
        assert_eq!(scroll.distance_km(50_001.0, 0), 99_601);
    }

    #[test]
    fn distance_is_continuous_across_back_wrap() {
        let mut scroll = ScrollVirtualizer::new().with_section(-1);
        let before = scroll.update(99.0, 0).report.distance_km;
        assert_eq!(scroll.section(), 0);
        // 99 in section -1 is the same place as 50 099 in section 0.
        let after = scroll.distance_km(50_099.0, 0);
        assert_eq!(before, after);
    }

    #[test]
    fn distance_scales_with_power() {
        let scroll = ScrollVirtualizer::new();
        assert_eq!(scroll.distance_km(401.0, 0), 1);
        assert_eq!(scroll.distance_km(401.0, 4), 10_000);
        assert_eq!(scroll.distance_km(400.5, 1), 5);
        assert_eq!(scroll.distance_km(0.0, 0), -400);
    }

    #[test]
    fn wraps_move_section_by_one_and_land_on_fixed_offsets() {
        let mut scroll = ScrollVirtualizer::new();
        for i in 0..5_000u32 {
            let offset = (hash(i) % 100_300) as f64;
            let before = scroll.section();
            let update = scroll.update(offset, 0);
            match update.wrap {
                Some(Wrap { direction: WrapDirection::Forward, reset_offset }) => {
                    assert_eq!(reset_offset, INCREMENT);
                    assert_eq!(scroll.section(), before - 1);
                }
                Some(Wrap { direction: WrapDirection::Back, reset_offset }) => {
                    assert_eq!(reset_offset, INCREMENT + LEFT_THRESHOLD);
                    assert_eq!(scroll.section(), before + 1);
                    assert_ne!(before, 0);
                }
                None => {
                    assert_eq!(scroll.section(), before);
                    assert_eq!(update.surface_offset(), offset);
                }
            }
            assert!(update.surface_offset() >= 0.0);
        }
    }

    #[test]
    fn report_text() {
        let report = ScrollReport { offset: 1_234.0, section: -2, distance_km: 100_834 };
        assert_eq!(report.to_string(), "Scroll: 1234\nSection: -2\nDistance: 100834 km");
    }

    #[test]
    fn custom_thresholds() {
        let config = DiagramConfig {
            right_threshold: 2_000.0,
            left_threshold: 10.0,
            ..DiagramConfig::default()
        };
        let mut scroll = ScrollVirtualizer::from_config(&config);
        assert_eq!(scroll.update(2_001.0, 0).surface_offset(), 1_000.0);
        assert_eq!(scroll.update(5.0, 0).surface_offset(), 1_010.0);
        assert_eq!(scroll.section(), 0);
    }
}
