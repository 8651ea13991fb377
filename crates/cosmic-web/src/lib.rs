//! Browser bindings for Cosmic Calendars.
//!
//! The page calls `diagram_init()` once, forwards every scroll notification
//! to `diagram_scroll()` (writing the returned offset back into the scroll
//! container), and forwards scale button presses to `diagram_zoom()`. Body
//! geometry is read straight from WASM memory via `get_instances_ptr()`;
//! symbols and colors come from `get_bodies_json()`.

pub mod runner;

pub use runner::DiagramRunner;

use std::cell::RefCell;

use cosmic_core::{format_mars_time, to_mars, Instant, ScaleAxis};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<DiagramRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut DiagramRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow.as_mut().expect("Diagram not initialized. Call diagram_init() first.");
        f(runner)
    })
}

/// Create the diagram session. Either argument may be omitted for defaults.
#[wasm_bindgen]
pub fn diagram_init(config_json: Option<String>, bodies_json: Option<String>) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let runner = DiagramRunner::from_json(config_json.as_deref(), bodies_json.as_deref());
    let count = runner.instance_count();

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("cosmic-calendars: diagram initialized with {count} bodies");
}

/// Returns the offset the scroll container must be set to (unchanged unless it wrapped).
#[wasm_bindgen]
pub fn diagram_scroll(offset: f64) -> f64 {
    with_runner(|r| r.scroll(offset))
}

/// `axis`: 0 = radius, 1 = distance. `direction`: positive zooms in ("+"), otherwise out ("-").
#[wasm_bindgen]
pub fn diagram_zoom(axis: u32, direction: i32) -> bool {
    with_runner(|r| r.zoom(axis, direction))
}

#[wasm_bindgen]
pub fn diagram_load_bodies(json: &str) -> bool {
    with_runner(|r| r.load_bodies(json))
}

// ---- Snapshot accessors ----

#[wasm_bindgen]
pub fn get_section() -> f64 {
    with_runner(|r| r.snapshot().section as f64)
}

#[wasm_bindgen]
pub fn get_offset() -> f64 {
    with_runner(|r| r.snapshot().offset)
}

#[wasm_bindgen]
pub fn get_distance_km() -> f64 {
    with_runner(|r| r.snapshot().distance_km as f64)
}

#[wasm_bindgen]
pub fn get_radius_scale() -> f64 {
    with_runner(|r| r.snapshot().radius_scale)
}

#[wasm_bindgen]
pub fn get_distance_scale() -> f64 {
    with_runner(|r| r.snapshot().distance_scale)
}

#[wasm_bindgen]
pub fn get_status_text() -> String {
    with_runner(|r| r.status_text())
}

#[wasm_bindgen]
pub fn get_radius_legend() -> String {
    with_runner(|r| r.legend(ScaleAxis::Radius))
}

#[wasm_bindgen]
pub fn get_distance_legend() -> String {
    with_runner(|r| r.legend(ScaleAxis::Distance))
}

/// The body list as a JSON array (`symbol`, `color`, `font_color`, `font_size`, ...),
/// in the same order as the instance buffer.
#[wasm_bindgen]
pub fn get_bodies_json() -> String {
    with_runner(|r| r.bodies_json())
}

// ---- Instance buffer accessors ----

#[wasm_bindgen]
pub fn get_instances_ptr() -> *const f32 {
    with_runner(|r| r.instances_ptr())
}

#[wasm_bindgen]
pub fn get_instance_count() -> u32 {
    with_runner(|r| r.instance_count())
}

#[wasm_bindgen]
pub fn get_instance_floats() -> u32 {
    cosmic_core::BodyInstance::FLOATS as u32
}

// ---- Mars clock ----

/// Martian date for a `Date.getTime()` value, as `"Year Y, day D, HH:MM:SS"`.
#[wasm_bindgen]
pub fn mars_time_at(unix_ms: f64) -> String {
    let out = format_mars_time(Instant::from_unix_millis_f64(unix_ms));
    log::info!("{out}");
    out
}

/// `[year, day, hour, minute, second]` for a `Date.getTime()` value.
#[wasm_bindgen]
pub fn mars_date_parts(unix_ms: f64) -> Vec<u32> {
    let (year, day, hour, minute, second) = to_mars(Instant::from_unix_millis_f64(unix_ms)).as_tuple();
    vec![year, day, hour, minute, second]
}

/// Sample the browser clock and convert it.
#[wasm_bindgen]
pub fn mars_time_now() -> String {
    mars_time_at(js_sys::Date::now())
}
