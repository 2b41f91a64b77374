use orrery::core::time::{from_unix_millis, to_unix_millis};
use orrery::{apsidal_analysis, Command, Orrery, OrreryConfig, SimulationUpdate};
use serde::Serialize;

/// Owns the simulation on the wasm side.
///
/// The crate keeps one of these in a `thread_local!` and exports free
/// functions via `#[wasm_bindgen]`, because the page drives a single scene.
pub struct OrreryRunner {
    orrery: Orrery,
}

/// Serialize for the page, logging instead of failing the frame.
fn to_json<T: Serialize + ?Sized>(what: &str, value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|err| {
        log::error!("failed to serialize {what}: {err}");
        String::from("null")
    })
}

impl OrreryRunner {
    /// Start at `now_millis` (JS `Date.now()`). A bad config document is
    /// logged and replaced by the defaults.
    pub fn new(config_json: Option<&str>, now_millis: f64) -> Self {
        let config = match config_json {
            Some(json) => OrreryConfig::from_json(json).unwrap_or_else(|err| {
                log::warn!("invalid orrery config, using defaults: {err}");
                OrreryConfig::default()
            }),
            None => OrreryConfig::default(),
        };
        Self { orrery: Orrery::new(config, from_unix_millis(now_millis)) }
    }

    pub fn orrery(&self) -> &Orrery {
        &self.orrery
    }

    /// Run one animation frame; `dt` is real seconds since the last one.
    pub fn tick(&mut self, dt: f64) {
        self.orrery.tick(dt);
    }

    pub fn push(&mut self, command: Command) {
        self.orrery.push_command(command);
    }

    /// Queue a partial state document. Returns false when it does not parse.
    pub fn apply_update_json(&mut self, json: &str) -> bool {
        match SimulationUpdate::from_json(json) {
            Ok(update) => {
                self.push(Command::Update(update));
                true
            }
            Err(err) => {
                log::warn!("rejected state update: {err}");
                false
            }
        }
    }

    pub fn set_date_millis(&mut self, millis: f64) {
        self.push(Command::SetDate(from_unix_millis(millis)));
    }

    pub fn current_date_millis(&self) -> f64 {
        to_unix_millis(self.orrery.state().current_date)
    }

    // ---- Pointer accessors for wasm memory reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.orrery.frame().bodies.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.orrery.frame().bodies.instance_count()
    }

    pub fn max_instances(&self) -> u32 {
        self.orrery.config().max_instances as u32
    }

    pub fn path_points_ptr(&self) -> *const f32 {
        self.orrery.frame().paths.points().as_ptr()
    }

    pub fn path_point_count(&self) -> u32 {
        self.orrery.frame().paths.point_count()
    }

    pub fn path_segments_ptr(&self) -> *const u32 {
        self.orrery.frame().paths.segments().as_ptr()
    }

    pub fn path_segment_count(&self) -> u32 {
        self.orrery.frame().paths.segments().len() as u32
    }

    // ---- JSON accessors for the info panels ----

    pub fn catalog_json(&self) -> String {
        let bodies: Vec<_> = self.orrery.catalog().bodies().collect();
        to_json("catalog", &bodies)
    }

    pub fn stats_json(&self) -> String {
        to_json("catalog stats", &self.orrery.catalog().stats())
    }

    pub fn apsides_json(&self) -> String {
        let report = apsidal_analysis(
            self.orrery.catalog().bodies(),
            self.orrery.config().neptune_semi_major_axis,
        );
        to_json("apsidal report", &report)
    }

    pub fn state_json(&self) -> String {
        to_json("simulation state", self.orrery.state())
    }

    pub fn asteroids_json(&self) -> String {
        to_json("asteroids", self.orrery.asteroids())
    }

    pub fn meteorites_json(&self) -> String {
        to_json("meteorites", self.orrery.meteorites())
    }

    /// Scene position of a catalog body at the current date, as `[x, y, z]`.
    /// Empty when the id is unknown.
    pub fn body_position(&self, id: &str) -> Vec<f64> {
        let catalog = self.orrery.catalog();
        let date = self.orrery.state().current_date;
        catalog
            .position_of(id, date, &self.orrery.config().orbit)
            .map(|p| p.to_array().to_vec())
            .unwrap_or_default()
    }
}
