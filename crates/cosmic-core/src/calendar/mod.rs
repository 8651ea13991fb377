pub mod instant;
pub mod mars;

pub use instant::Instant;
pub use mars::{format_mars_time, is_leap_year, to_mars, year_length_hours, MartianDate};
