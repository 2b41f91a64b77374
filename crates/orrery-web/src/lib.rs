//! `#[wasm_bindgen]` surface of the orrery.
//!
//! The page calls `orrery_init` once, then `orrery_tick` from its animation
//! loop and reads the frame buffers straight out of wasm memory through the
//! pointer getters. Calls made before init are ignored with a warning.

pub mod runner;

use std::cell::RefCell;

use orrery::{Command, Layer};
use wasm_bindgen::prelude::*;

pub use runner::OrreryRunner;

thread_local! {
    static RUNNER: RefCell<Option<OrreryRunner>> = const { RefCell::new(None) };
}

fn with_runner<R>(fallback: R, f: impl FnOnce(&mut OrreryRunner) -> R) -> R {
    RUNNER.with(|cell| match cell.borrow_mut().as_mut() {
        Some(runner) => f(runner),
        None => {
            log::warn!("orrery not initialized, call orrery_init() first");
            fallback
        }
    })
}

#[wasm_bindgen]
pub fn orrery_init(config_json: Option<String>) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let runner = OrreryRunner::new(config_json.as_deref(), js_sys::Date::now());
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("orrery: initialized");
}

#[wasm_bindgen]
pub fn orrery_tick(dt: f64) {
    with_runner((), |r| r.tick(dt));
}

// ---- Commands ----

#[wasm_bindgen]
pub fn orrery_play() {
    with_runner((), |r| r.push(Command::Play));
}

#[wasm_bindgen]
pub fn orrery_pause() {
    with_runner((), |r| r.push(Command::Pause));
}

#[wasm_bindgen]
pub fn orrery_toggle_play() {
    with_runner((), |r| r.push(Command::TogglePlay));
}

#[wasm_bindgen]
pub fn orrery_set_time_scale(days_per_second: f64) {
    with_runner((), |r| r.push(Command::SetTimeScale(days_per_second)));
}

#[wasm_bindgen]
pub fn orrery_set_date(millis: f64) {
    with_runner((), |r| r.set_date_millis(millis));
}

#[wasm_bindgen]
pub fn orrery_shift_days(days: f64) {
    with_runner((), |r| r.push(Command::ShiftDays(days)));
}

#[wasm_bindgen]
pub fn orrery_set_sun_intensity(intensity: f64) {
    with_runner((), |r| r.push(Command::SetSunIntensity(intensity)));
}

/// `layer` indexes `Layer::ALL`.
#[wasm_bindgen]
pub fn orrery_set_layer(layer: u32, visible: bool) {
    match Layer::from_index(layer) {
        Some(layer) => with_runner((), |r| r.push(Command::SetLayer(layer, visible))),
        None => log::warn!("unknown layer index {layer}"),
    }
}

#[wasm_bindgen]
pub fn orrery_set_moons(parent: &str, visible: bool) {
    with_runner((), |r| {
        r.push(Command::SetMoons { parent: parent.to_owned(), visible })
    });
}

/// Follow an asteroid; `None` stops following.
#[wasm_bindgen]
pub fn orrery_select_asteroid(id: Option<String>) {
    with_runner((), |r| r.push(Command::SelectAsteroid(id)));
}

#[wasm_bindgen]
pub fn orrery_select_meteorite(id: Option<String>) {
    with_runner((), |r| r.push(Command::SelectMeteorite(id)));
}

#[wasm_bindgen]
pub fn orrery_set_meteorite_active(id: &str, active: bool) {
    with_runner((), |r| {
        r.push(Command::SetMeteoriteActive { id: id.to_owned(), active })
    });
}

#[wasm_bindgen]
pub fn orrery_spawn_meteorite() {
    with_runner((), |r| r.push(Command::SpawnRandomMeteorite));
}

/// Merge a partial state document. Returns false if it does not parse.
#[wasm_bindgen]
pub fn orrery_update(json: &str) -> bool {
    with_runner(false, |r| r.apply_update_json(json))
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_current_date() -> f64 {
    with_runner(0.0, |r| r.current_date_millis())
}

#[wasm_bindgen]
pub fn get_instances_ptr() -> *const f32 {
    with_runner(std::ptr::null(), |r| r.instances_ptr())
}

#[wasm_bindgen]
pub fn get_instance_count() -> u32 {
    with_runner(0, |r| r.instance_count())
}

#[wasm_bindgen]
pub fn get_max_instances() -> u32 {
    with_runner(0, |r| r.max_instances())
}

#[wasm_bindgen]
pub fn get_path_points_ptr() -> *const f32 {
    with_runner(std::ptr::null(), |r| r.path_points_ptr())
}

#[wasm_bindgen]
pub fn get_path_point_count() -> u32 {
    with_runner(0, |r| r.path_point_count())
}

#[wasm_bindgen]
pub fn get_path_segments_ptr() -> *const u32 {
    with_runner(std::ptr::null(), |r| r.path_segments_ptr())
}

#[wasm_bindgen]
pub fn get_path_segment_count() -> u32 {
    with_runner(0, |r| r.path_segment_count())
}

#[wasm_bindgen]
pub fn get_body_position(id: &str) -> Vec<f64> {
    with_runner(Vec::new(), |r| r.body_position(id))
}

// ---- JSON accessors ----

#[wasm_bindgen]
pub fn get_catalog_json() -> String {
    with_runner(String::new(), |r| r.catalog_json())
}

#[wasm_bindgen]
pub fn get_stats_json() -> String {
    with_runner(String::new(), |r| r.stats_json())
}

#[wasm_bindgen]
pub fn get_apsides_json() -> String {
    with_runner(String::new(), |r| r.apsides_json())
}

#[wasm_bindgen]
pub fn get_state_json() -> String {
    with_runner(String::new(), |r| r.state_json())
}

#[wasm_bindgen]
pub fn get_asteroids_json() -> String {
    with_runner(String::new(), |r| r.asteroids_json())
}

#[wasm_bindgen]
pub fn get_meteorites_json() -> String {
    with_runner(String::new(), |r| r.meteorites_json())
}
