use serde::{Deserialize, Serialize};

use crate::api::config::{DiagramConfig, POWER_LIMIT};

/// Default upper bound of the radius power.
pub const MAX_RADIUS_POWER: u32 = 4;
/// Default upper bound of the distance power.
pub const MAX_DISTANCE_POWER: u32 = 7;

/// Which of the two scale factors an adjustment targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleAxis {
    /// Body radii: `screen px = km / 10^radius_power`.
    Radius,
    /// Orbit radii, x offsets and scroll distance: `screen px = km / 10^distance_power`.
    Distance,
}

/// UI zoom direction. Zooming in shrinks the divisor, so it lowers the power.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoomDirection {
    In,
    Out,
}

/// The two scale exponents. Both always lie within the controller's bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScaleState {
    pub radius_power: u32,
    pub distance_power: u32,
}

/// Two independent bounded counters, each moved by exactly one step per call.
/// Steps past a bound are silently ignored so repeated clicks are always safe.
#[derive(Debug, Clone)]
pub struct ScaleController {
    state: ScaleState,
    max_radius_power: u32,
    max_distance_power: u32,
}

impl ScaleController {
    /// Default bounds `[0, 4]` and `[0, 7]`, starting at radius 3 / distance 4.
    pub fn new() -> Self {
        Self::from_config(&DiagramConfig::default())
    }

    /// Bounds are clamped to `POWER_LIMIT` even when the config was never validated.
    pub fn from_config(config: &DiagramConfig) -> Self {
        let max_radius_power = config.max_radius_power.min(POWER_LIMIT);
        let max_distance_power = config.max_distance_power.min(POWER_LIMIT);
        Self {
            state: ScaleState {
                radius_power: config.initial_radius_power.min(max_radius_power),
                distance_power: config.initial_distance_power.min(max_distance_power),
            },
            max_radius_power,
            max_distance_power,
        }
    }

    /// Default bounds with explicit starting powers (clamped into range).
    pub fn with_powers(radius_power: u32, distance_power: u32) -> Self {
        let mut controller = Self::new();
        controller.state = ScaleState {
            radius_power: radius_power.min(controller.max_radius_power),
            distance_power: distance_power.min(controller.max_distance_power),
        };
        controller
    }

    pub fn state(&self) -> ScaleState {
        self.state
    }

    pub fn radius_power(&self) -> u32 {
        self.state.radius_power
    }

    pub fn distance_power(&self) -> u32 {
        self.state.distance_power
    }

    pub fn max_power(&self, axis: ScaleAxis) -> u32 {
        match axis {
            ScaleAxis::Radius => self.max_radius_power,
            ScaleAxis::Distance => self.max_distance_power,
        }
    }

    pub fn power(&self, axis: ScaleAxis) -> u32 {
        match axis {
            ScaleAxis::Radius => self.state.radius_power,
            ScaleAxis::Distance => self.state.distance_power,
        }
    }

    /// Returns true if the power changed.
    pub fn increase_radius_power(&mut self) -> bool {
        self.increase(ScaleAxis::Radius)
    }

    pub fn decrease_radius_power(&mut self) -> bool {
        self.decrease(ScaleAxis::Radius)
    }

    pub fn increase_distance_power(&mut self) -> bool {
        self.increase(ScaleAxis::Distance)
    }

    pub fn decrease_distance_power(&mut self) -> bool {
        self.decrease(ScaleAxis::Distance)
    }

    /// Map a "+" / "-" activation onto the power: in = decrease, out = increase.
    pub fn zoom(&mut self, axis: ScaleAxis, direction: ZoomDirection) -> bool {
        match direction {
            ZoomDirection::In => self.decrease(axis),
            ZoomDirection::Out => self.increase(axis),
        }
    }

    pub fn increase(&mut self, axis: ScaleAxis) -> bool {
        let max = self.max_power(axis);
        let power = self.power_mut(axis);
        if *power >= max {
            return false;
        }
        *power += 1;
        log::debug!("{axis:?} power -> {}", *power);
        true
    }

    pub fn decrease(&mut self, axis: ScaleAxis) -> bool {
        let power = self.power_mut(axis);
        if *power == 0 {
            return false;
        }
        *power -= 1;
        log::debug!("{axis:?} power -> {}", *power);
        true
    }

    fn power_mut(&mut self, axis: ScaleAxis) -> &mut u32 {
        match axis {
            ScaleAxis::Radius => &mut self.state.radius_power,
            ScaleAxis::Distance => &mut self.state.distance_power,
        }
    }

    /// `10^radius_power`, the km-per-pixel divisor for body radii.
    pub fn radius_scale_factor(&self) -> f64 {
        scale_factor(self.state.radius_power)
    }

    /// `10^distance_power`, the km-per-pixel divisor for distances.
    pub fn distance_scale_factor(&self) -> f64 {
        scale_factor(self.state.distance_power)
    }

    /// Legend text shown next to the scale buttons, e.g. `"Radius px = km / 1000"`.
    pub fn legend(&self, axis: ScaleAxis) -> String {
        let label = match axis {
            ScaleAxis::Radius => "Radius",
            ScaleAxis::Distance => "Distance",
        };
        format!("{label} px = km / {}", scale_factor(self.power(axis)))
    }
}

impl Default for ScaleController {
    fn default() -> Self {
        Self::new()
    }
}

/// `10^power` as an exact `f64` for the powers a controller can reach.
pub fn scale_factor(power: u32) -> f64 {
    10f64.powi(power as i32)
}
