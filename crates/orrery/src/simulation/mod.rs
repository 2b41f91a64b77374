//! The running simulation: state, UI commands and per-frame output.

pub mod command;
pub mod frame;
pub mod state;

use time::OffsetDateTime;

use crate::catalog::asteroids::{famous_asteroids, Asteroid};
use crate::catalog::meteorites::{famous_meteorites, random_meteorite, Meteorite};
use crate::catalog::Catalog;
use crate::config::OrreryConfig;
use crate::core::time::FrameClock;
use crate::display::DisplayProfile;
use crate::rng::Rng;
pub use command::{Command, CommandQueue};
pub use frame::{build_frame, BodyInstance, FrameBuffers, FrameInputs, InstanceBuffer, PathBuffer};
pub use state::{Layer, SimulationState, SimulationUpdate, Visibility};

/// Owns everything that changes while the page is open.
///
/// The catalog is shared read-only; commands are applied at the start of
/// each tick, before time advances and the frame is rebuilt.
pub struct Orrery {
    catalog: Catalog,
    config: OrreryConfig,
    profile: &'static DisplayProfile,
    state: SimulationState,
    commands: CommandQueue,
    clock: FrameClock,
    rng: Rng,
    asteroids: Vec<Asteroid>,
    meteorites: Vec<Meteorite>,
    frame: FrameBuffers,
}

impl Orrery {
    pub fn new(config: OrreryConfig, now: OffsetDateTime) -> Self {
        let catalog = Catalog::solar_system();
        if let Err(err) = catalog.validate() {
            log::error!("catalog integrity check failed: {err}");
        }
        let mut orrery = Self {
            clock: FrameClock::new(config.max_frame_dt),
            rng: Rng::new(config.rng_seed),
            frame: FrameBuffers::new(config.max_instances),
            profile: DisplayProfile::builtin(),
            state: SimulationState::new(now),
            commands: CommandQueue::new(),
            asteroids: famous_asteroids(),
            meteorites: famous_meteorites(),
            catalog,
            config,
        };
        orrery.rebuild_frame();
        log::info!(
            "orrery ready: {} bodies, {} asteroids, {} meteorites",
            orrery.catalog.len(),
            orrery.asteroids.len(),
            orrery.meteorites.len()
        );
        orrery
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &OrreryConfig {
        &self.config
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn asteroids(&self) -> &[Asteroid] {
        &self.asteroids
    }

    pub fn meteorites(&self) -> &[Meteorite] {
        &self.meteorites
    }

    pub fn frame(&self) -> &FrameBuffers {
        &self.frame
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Queue a command for the next tick.
    pub fn push_command(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// One animation frame: apply queued commands, advance time by
    /// `frame_dt` real seconds, rebuild the frame buffers.
    pub fn tick(&mut self, frame_dt: f64) {
        for command in self.commands.drain() {
            self.apply(command);
        }
        self.state.tick(&mut self.clock, frame_dt);
        self.rebuild_frame();
    }

    fn apply(&mut self, command: Command) {
        log::debug!("command: {command:?}");
        match command {
            Command::Play => self.state.is_playing = true,
            Command::Pause => self.state.is_playing = false,
            Command::TogglePlay => self.state.is_playing = !self.state.is_playing,
            Command::SetTimeScale(scale) => self.state.set_time_scale(scale),
            Command::SetDate(date) => self.state.current_date = date,
            Command::ShiftDays(days) => self.state.shift_days(days),
            Command::SelectAsteroid(id) => self.select_asteroid(id),
            Command::SelectMeteorite(id) => self.state.selected_meteorite = id,
            Command::SetSunIntensity(intensity) => self.state.set_sun_intensity(intensity),
            Command::SetLayer(layer, on) => self.state.visibility.set_layer(layer, on),
            Command::SetMoons { parent, visible } => {
                self.state.visibility.moons.insert(parent, visible);
            }
            Command::Update(update) => {
                let previous = self.state.selected_asteroid.clone();
                self.state.apply(update);
                if self.state.selected_asteroid != previous {
                    let id = self.state.selected_asteroid.clone();
                    self.select_asteroid(id);
                }
            }
            Command::SpawnRandomMeteorite => {
                let meteorite = random_meteorite(&mut self.rng, self.state.current_date);
                log::info!("spawned meteorite {} ({})", meteorite.id, meteorite.name);
                self.meteorites.push(meteorite);
            }
            Command::SetMeteoriteActive { id, active } => {
                match self.meteorites.iter_mut().find(|m| m.id == id) {
                    Some(m) => m.is_active = active,
                    None => log::warn!("unknown meteorite `{id}`"),
                }
            }
        }
    }

    /// Follow an asteroid (or none), refreshing its cached orbit path.
    fn select_asteroid(&mut self, id: Option<String>) {
        let center = self.state.current_date;
        let samples = self.config.asteroid_trajectory_samples;
        for asteroid in &mut self.asteroids {
            let selected = id.as_deref() == Some(asteroid.id.as_str());
            asteroid.is_active = selected;
            if selected {
                asteroid.refresh_trajectory(center, samples, &self.config.orbit);
            }
        }
        if let Some(wanted) = id.as_deref() {
            if !self.asteroids.iter().any(|a| a.id == wanted) {
                log::warn!("unknown asteroid `{wanted}`");
            }
        }
        self.state.selected_asteroid = id;
    }

    fn rebuild_frame(&mut self) {
        let inputs = FrameInputs {
            catalog: &self.catalog,
            state: &self.state,
            config: &self.config,
            profile: self.profile,
            asteroids: &self.asteroids,
            meteorites: &self.meteorites,
        };
        build_frame(&inputs, &mut self.frame);
    }
}
