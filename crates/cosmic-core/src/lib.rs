pub mod api;
pub mod bridge;
pub mod calendar;
pub mod diagram;
pub mod error;
pub mod input;
pub mod view;

// Re-export key types at crate root for convenience
pub use api::config::DiagramConfig;
pub use bridge::instance::{BodyInstance, InstanceBuffer};
pub use calendar::{format_mars_time, is_leap_year, to_mars, Instant, MartianDate};
pub use diagram::body::{default_bodies, BodyCatalog, CelestialBody};
pub use diagram::layout::{BodyLayout, LayoutParams};
pub use diagram::{Diagram, DiagramSnapshot};
pub use error::{Error, Result};
pub use input::event::DiagramEvent;
pub use view::scale::{ScaleAxis, ScaleController, ScaleState, ZoomDirection};
pub use view::scroll::{ScrollReport, ScrollUpdate, ScrollVirtualizer, Wrap, WrapDirection};
