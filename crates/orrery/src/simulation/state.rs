use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use time::OffsetDateTime;

use crate::catalog::data::DEFAULT_VISIBLE_MOON_PARENTS;
use crate::core::time::{add_days, checked_add_days, FrameClock};

pub const DEFAULT_SUN_INTENSITY: f64 = 4.0;
pub const MIN_SUN_INTENSITY: f64 = 0.5;
pub const MAX_SUN_INTENSITY: f64 = 8.0;

/// Independent scene layers the UI can switch on and off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    Orbits,
    AsteroidPath,
    PlanetNames,
    Meteorites,
    MeteoriteTrails,
    Galaxies,
    AsteroidBelt,
    KuiperBelt,
    BeltDensity,
}

impl Layer {
    pub const ALL: [Layer; 9] = [
        Layer::Orbits,
        Layer::AsteroidPath,
        Layer::PlanetNames,
        Layer::Meteorites,
        Layer::MeteoriteTrails,
        Layer::Galaxies,
        Layer::AsteroidBelt,
        Layer::KuiperBelt,
        Layer::BeltDensity,
    ];

    /// Layer for a numeric id coming from JS (index into [`Layer::ALL`]).
    pub fn from_index(index: u32) -> Option<Layer> {
        Self::ALL.get(index as usize).copied()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visibility {
    pub orbits: bool,
    pub asteroid_path: bool,
    pub planet_names: bool,
    pub meteorites: bool,
    pub meteorite_trails: bool,
    pub galaxies: bool,
    pub asteroid_belt: bool,
    pub kuiper_belt: bool,
    pub belt_density: bool,
    /// Per-planet moon toggles. Planets not listed hide their moons.
    pub moons: BTreeMap<String, bool>,
}

impl Default for Visibility {
    fn default() -> Self {
        Self {
            orbits: true,
            asteroid_path: false,
            planet_names: true,
            meteorites: true,
            meteorite_trails: true,
            galaxies: true,
            asteroid_belt: true,
            kuiper_belt: true,
            belt_density: true,
            moons: DEFAULT_VISIBLE_MOON_PARENTS
                .iter()
                .map(|&id| (id.to_owned(), true))
                .collect(),
        }
    }
}

impl Visibility {
    pub fn layer(&self, layer: Layer) -> bool {
        match layer {
            Layer::Orbits => self.orbits,
            Layer::AsteroidPath => self.asteroid_path,
            Layer::PlanetNames => self.planet_names,
            Layer::Meteorites => self.meteorites,
            Layer::MeteoriteTrails => self.meteorite_trails,
            Layer::Galaxies => self.galaxies,
            Layer::AsteroidBelt => self.asteroid_belt,
            Layer::KuiperBelt => self.kuiper_belt,
            Layer::BeltDensity => self.belt_density,
        }
    }

    pub fn set_layer(&mut self, layer: Layer, on: bool) {
        let slot = match layer {
            Layer::Orbits => &mut self.orbits,
            Layer::AsteroidPath => &mut self.asteroid_path,
            Layer::PlanetNames => &mut self.planet_names,
            Layer::Meteorites => &mut self.meteorites,
            Layer::MeteoriteTrails => &mut self.meteorite_trails,
            Layer::Galaxies => &mut self.galaxies,
            Layer::AsteroidBelt => &mut self.asteroid_belt,
            Layer::KuiperBelt => &mut self.kuiper_belt,
            Layer::BeltDensity => &mut self.belt_density,
        };
        *slot = on;
    }

    /// Whether moons of `parent` are drawn.
    pub fn moons_of(&self, parent: &str) -> bool {
        self.moons.get(parent).copied().unwrap_or(false)
    }
}

/// The single mutable source of truth, read every frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    #[serde(with = "time::serde::rfc3339")]
    pub current_date: OffsetDateTime,
    /// Simulated days per real second.
    pub time_scale: f64,
    pub is_playing: bool,
    pub selected_asteroid: Option<String>,
    pub selected_meteorite: Option<String>,
    pub sun_intensity: f64,
    pub visibility: Visibility,
}

impl SimulationState {
    /// Defaults: paused at `now`, one day per second, every layer shown.
    pub fn new(now: OffsetDateTime) -> Self {
        Self {
            current_date: now,
            time_scale: 1.0,
            is_playing: false,
            selected_asteroid: None,
            selected_meteorite: None,
            sun_intensity: DEFAULT_SUN_INTENSITY,
            visibility: Visibility::default(),
        }
    }

    pub fn set_time_scale(&mut self, scale: f64) {
        if scale.is_finite() {
            self.time_scale = scale;
        } else {
            log::warn!("ignoring non-finite time scale {scale}");
        }
    }

    pub fn set_sun_intensity(&mut self, intensity: f64) {
        if intensity.is_nan() {
            log::warn!("ignoring NaN sun intensity");
            return;
        }
        self.sun_intensity = intensity.clamp(MIN_SUN_INTENSITY, MAX_SUN_INTENSITY);
    }

    /// Move the date by `days`. Past the end of the representable range the
    /// date is pinned to that end and playback stops.
    pub fn shift_days(&mut self, days: f64) {
        if !days.is_finite() {
            return;
        }
        match checked_add_days(self.current_date, days) {
            Some(date) => self.current_date = date,
            None => {
                self.current_date = add_days(self.current_date, days);
                self.is_playing = false;
                log::warn!("simulated date reached {}, playback stopped", self.current_date);
            }
        }
    }

    /// Advance simulated time by one real frame. Returns the days advanced
    /// (zero while paused).
    pub fn tick(&mut self, clock: &mut FrameClock, frame_dt: f64) -> f64 {
        if !self.is_playing {
            return 0.0;
        }
        let days = clock.advance(frame_dt, self.time_scale);
        self.shift_days(days);
        days
    }

    /// Merge a partial update. Absent fields keep their value; moon toggles
    /// merge per planet.
    pub fn apply(&mut self, update: SimulationUpdate) {
        if let Some(date) = update.current_date {
            self.current_date = date;
        }
        if let Some(scale) = update.time_scale {
            self.set_time_scale(scale);
        }
        if let Some(playing) = update.is_playing {
            self.is_playing = playing;
        }
        if let Some(selected) = update.selected_asteroid {
            self.selected_asteroid = selected;
        }
        if let Some(selected) = update.selected_meteorite {
            self.selected_meteorite = selected;
        }
        if let Some(intensity) = update.sun_intensity {
            self.set_sun_intensity(intensity);
        }

        let v = update.visibility;
        let toggles = [
            (Layer::Orbits, v.orbits),
            (Layer::AsteroidPath, v.asteroid_path),
            (Layer::PlanetNames, v.planet_names),
            (Layer::Meteorites, v.meteorites),
            (Layer::MeteoriteTrails, v.meteorite_trails),
            (Layer::Galaxies, v.galaxies),
            (Layer::AsteroidBelt, v.asteroid_belt),
            (Layer::KuiperBelt, v.kuiper_belt),
            (Layer::BeltDensity, v.belt_density),
        ];
        for (layer, value) in toggles {
            if let Some(on) = value {
                self.visibility.set_layer(layer, on);
            }
        }
        if let Some(moons) = v.moons {
            self.visibility.moons.extend(moons);
        }
    }
}

/// Distinguishes an absent field (`None`) from an explicit `null` (`Some(None)`).
fn explicit<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Some(Option::deserialize(deserializer)?))
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct VisibilityUpdate {
    pub orbits: Option<bool>,
    pub asteroid_path: Option<bool>,
    pub planet_names: Option<bool>,
    pub meteorites: Option<bool>,
    pub meteorite_trails: Option<bool>,
    pub galaxies: Option<bool>,
    pub asteroid_belt: Option<bool>,
    pub kuiper_belt: Option<bool>,
    pub belt_density: Option<bool>,
    pub moons: Option<BTreeMap<String, bool>>,
}

/// Partial [`SimulationState`], as sent by UI handlers.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulationUpdate {
    #[serde(with = "time::serde::rfc3339::option")]
    pub current_date: Option<OffsetDateTime>,
    pub time_scale: Option<f64>,
    pub is_playing: Option<bool>,
    #[serde(deserialize_with = "explicit")]
    pub selected_asteroid: Option<Option<String>>,
    #[serde(deserialize_with = "explicit")]
    pub selected_meteorite: Option<Option<String>>,
    pub sun_intensity: Option<f64>,
    pub visibility: VisibilityUpdate,
}

impl SimulationUpdate {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    const NOW: OffsetDateTime = datetime!(2026-10-19 12:00 UTC);

    #[test]
    fn defaults() {
        let s = SimulationState::new(NOW);
        assert_eq!(s.time_scale, 1.0);
        assert!(!s.is_playing);
        assert_eq!(s.sun_intensity, 4.0);
        assert!(s.visibility.orbits && s.visibility.kuiper_belt && s.visibility.galaxies);
        assert!(!s.visibility.asteroid_path);
        assert!(s.visibility.moons_of("jupiter"));
        assert!(!s.visibility.moons_of("mars"));
        assert!(!s.visibility.moons_of("pluto"));
    }

    #[test]
    fn paused_clock_does_not_move() {
        let mut s = SimulationState::new(NOW);
        let mut clock = FrameClock::new(0.25);
        assert_eq!(s.tick(&mut clock, 0.016), 0.0);
        assert_eq!(s.current_date, NOW);
    }

    #[test]
    fn playing_advances_by_dt_times_scale() {
        let mut s = SimulationState::new(NOW);
        s.is_playing = true;
        s.set_time_scale(10.0);
        let mut clock = FrameClock::new(0.25);
        let days = s.tick(&mut clock, 0.1);
        assert!((days - 1.0).abs() < 1e-12);
        assert_eq!(s.current_date, datetime!(2026-10-20 12:00 UTC));
    }

    #[test]
    fn playback_stops_at_end_of_time() {
        use crate::core::time::MAX_DATE;

        let mut s = SimulationState::new(datetime!(9999-12-30 0:00 UTC));
        s.is_playing = true;
        s.set_time_scale(1000.0);
        let mut clock = FrameClock::new(0.25);
        s.tick(&mut clock, 1.0 / 60.0);
        assert_eq!(s.current_date, MAX_DATE);
        assert!(!s.is_playing);
        // paused at the end, further frames are no-ops
        assert_eq!(s.tick(&mut clock, 1.0 / 60.0), 0.0);
        assert_eq!(s.current_date, MAX_DATE);
    }

    #[test]
    fn huge_shift_saturates() {
        use crate::core::time::{MAX_DATE, MIN_DATE};

        let mut s = SimulationState::new(NOW);
        s.shift_days(1e7);
        assert_eq!(s.current_date, MAX_DATE);
        s.shift_days(-1e9);
        assert_eq!(s.current_date, MIN_DATE);
        s.shift_days(f64::NAN);
        assert_eq!(s.current_date, MIN_DATE);
    }

    #[test]
    fn sun_intensity_clamped() {
        let mut s = SimulationState::new(NOW);
        s.set_sun_intensity(20.0);
        assert_eq!(s.sun_intensity, MAX_SUN_INTENSITY);
        s.set_sun_intensity(0.0);
        assert_eq!(s.sun_intensity, MIN_SUN_INTENSITY);
    }

    #[test]
    fn partial_merge_keeps_other_fields() {
        let mut s = SimulationState::new(NOW);
        s.selected_asteroid = Some("apophis".into());
        let update = SimulationUpdate::from_json(
            r#"{ "is_playing": true, "visibility": { "orbits": false, "moons": { "mars": true } } }"#,
        )
        .unwrap();
        s.apply(update);
        assert!(s.is_playing);
        assert!(!s.visibility.orbits);
        assert!(s.visibility.planet_names);
        assert!(s.visibility.moons_of("mars"));
        assert!(s.visibility.moons_of("earth"));
        assert_eq!(s.selected_asteroid.as_deref(), Some("apophis"));
        assert_eq!(s.current_date, NOW);
    }

    #[test]
    fn explicit_null_clears_selection() {
        let mut s = SimulationState::new(NOW);
        s.selected_asteroid = Some("bennu".into());
        s.apply(SimulationUpdate::from_json(r#"{ "selected_asteroid": null }"#).unwrap());
        assert_eq!(s.selected_asteroid, None);
    }

    #[test]
    fn update_sets_date() {
        let mut s = SimulationState::new(NOW);
        let update = SimulationUpdate::from_json(r#"{ "current_date": "2029-04-13T21:46:00Z" }"#);
        s.apply(update.unwrap());
        assert_eq!(s.current_date, datetime!(2029-04-13 21:46 UTC));
    }

    #[test]
    fn layers_by_index() {
        assert_eq!(Layer::from_index(0), Some(Layer::Orbits));
        assert_eq!(Layer::from_index(8), Some(Layer::BeltDensity));
        assert_eq!(Layer::from_index(9), None);
        let mut v = Visibility::default();
        for layer in Layer::ALL {
            v.set_layer(layer, false);
            assert!(!v.layer(layer));
        }
    }
}
