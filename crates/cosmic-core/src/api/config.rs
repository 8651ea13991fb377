use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Largest scale power accepted from configuration. `10^15` is still an exact `f64`.
pub const POWER_LIMIT: u32 = 15;

/// Configuration for a diagram session. Every field has a default, so a
/// partial JSON object (or `{}`) is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramConfig {
    /// Surface offset above which the view wraps forward (default: 100000).
    pub right_threshold: f64,
    /// Surface offset below which the view wraps back (default: 100).
    pub left_threshold: f64,
    /// Fixed pixel bias of the diagram anchor (default: 400).
    pub render_offset: f64,
    /// Shared vertical position of every body (default: 200).
    pub body_y: f64,
    /// Upper bound of the radius power (default: 4).
    pub max_radius_power: u32,
    /// Upper bound of the distance power (default: 7).
    pub max_distance_power: u32,
    /// Radius power at session start (default: 3).
    pub initial_radius_power: u32,
    /// Distance power at session start (default: 4).
    pub initial_distance_power: u32,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            right_threshold: 100_000.0,
            left_threshold: 100.0,
            render_offset: 400.0,
            body_y: 200.0,
            max_radius_power: 4,
            max_distance_power: 7,
            initial_radius_power: 3,
            initial_distance_power: 4,
        }
    }
}

impl DiagramConfig {
    /// Offset the surface is reset to after a forward wrap; one section's width.
    pub fn increment(&self) -> f64 {
        self.right_threshold / 2.0
    }

    /// Parse and validate a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that wrapping keeps the surface inside `[left, right]` and that
    /// the scale powers are representable.
    pub fn validate(&self) -> Result<()> {
        let finite = [self.right_threshold, self.left_threshold, self.render_offset, self.body_y];
        if finite.iter().any(|v| !v.is_finite()) {
            return Err(Error::InvalidConfig("all distances must be finite".into()));
        }
        if self.left_threshold <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "left_threshold must be positive, got {}",
                self.left_threshold
            )));
        }
        if self.left_threshold >= self.increment() {
            return Err(Error::InvalidConfig(format!(
                "left_threshold {} must be below half of right_threshold {}",
                self.left_threshold, self.right_threshold
            )));
        }
        if self.max_radius_power > POWER_LIMIT || self.max_distance_power > POWER_LIMIT {
            return Err(Error::InvalidConfig(format!("scale powers are limited to {POWER_LIMIT}")));
        }
        if self.initial_radius_power > self.max_radius_power {
            return Err(Error::InvalidConfig(format!(
                "initial_radius_power {} exceeds max {}",
                self.initial_radius_power, self.max_radius_power
            )));
        }
        if self.initial_distance_power > self.max_distance_power {
            return Err(Error::InvalidConfig(format!(
                "initial_distance_power {} exceeds max {}",
                self.initial_distance_power, self.max_distance_power
            )));
        }
        Ok(())
    }
}
