/// Celestial body descriptors and the default catalogue.
///
/// Sizes are physical (km); the layout divides them by the active scale
/// factors. Colors are CSS strings passed through untouched.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelestialBody {
    /// Body radius in km. Must be positive.
    pub radius: f64,
    /// Orbit radius in km. Zero for a body at the anchor.
    pub orbit_radius: f64,
    /// Extra horizontal offset in km.
    #[serde(default)]
    pub x_offset: f64,
    /// Glyph drawn on the body.
    pub symbol: String,
    pub color: String,
    #[serde(default = "default_font_color")]
    pub font_color: String,
    /// Glyph size relative to the on-screen radius (default: 1).
    #[serde(default = "default_font_size")]
    pub font_size: f64,
}

fn default_font_color() -> String {
    "black".to_string()
}

fn default_font_size() -> f64 {
    1.0
}

impl CelestialBody {
    pub fn validate(&self, index: usize) -> Result<()> {
        let invalid = |reason: String| Error::InvalidBody { index, reason };
        let numbers = [self.radius, self.orbit_radius, self.x_offset, self.font_size];
        if numbers.iter().any(|v| !v.is_finite()) {
            return Err(invalid("non-finite number".into()));
        }
        if self.radius <= 0.0 {
            return Err(invalid(format!("radius must be positive, got {}", self.radius)));
        }
        if self.orbit_radius < 0.0 {
            return Err(invalid(format!("orbit_radius must be >= 0, got {}", self.orbit_radius)));
        }
        if self.font_size <= 0.0 {
            return Err(invalid(format!("font_size must be positive, got {}", self.font_size)));
        }
        Ok(())
    }
}

/// Ordered body list. Render order is list order; the first body is drawn at the back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CelestialBody>", into = "Vec<CelestialBody>")]
pub struct BodyCatalog {
    bodies: Vec<CelestialBody>,
}

impl TryFrom<Vec<CelestialBody>> for BodyCatalog {
    type Error = Error;

    fn try_from(bodies: Vec<CelestialBody>) -> Result<Self> {
        Self::new(bodies)
    }
}

impl From<BodyCatalog> for Vec<CelestialBody> {
    fn from(catalog: BodyCatalog) -> Self {
        catalog.bodies
    }
}

impl BodyCatalog {
    pub fn new(bodies: Vec<CelestialBody>) -> Result<Self> {
        for (index, body) in bodies.iter().enumerate() {
            body.validate(index)?;
        }
        Ok(Self { bodies })
    }

    /// Parse a JSON array of bodies and validate each one.
    pub fn from_json(json: &str) -> Result<Self> {
        let bodies: Vec<CelestialBody> = serde_json::from_str(json)?;
        Self::new(bodies)
    }

    /// Serialize as the same JSON array `from_json` accepts, styling included.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.bodies)?)
    }

    pub fn bodies(&self) -> &[CelestialBody] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CelestialBody> {
        self.bodies.iter()
    }
}

impl Default for BodyCatalog {
    fn default() -> Self {
        Self { bodies: default_bodies() }
    }
}

/// The demo pair shown before any data is loaded: a star and one planet.
pub fn default_bodies() -> Vec<CelestialBody> {
    vec![
        CelestialBody {
            radius: 100.0,
            orbit_radius: 200.0,
            x_offset: 50.0,
            symbol: "☉".to_string(),
            color: "yellow".to_string(),
            font_color: "black".to_string(),
            font_size: 1.0,
        },
        CelestialBody {
            radius: 50.0,
            orbit_radius: 100.0,
            x_offset: 150.0,
            symbol: "⚪".to_string(),
            color: "blue".to_string(),
            font_color: "white".to_string(),
            font_size: 1.0,
        },
    ]
}
