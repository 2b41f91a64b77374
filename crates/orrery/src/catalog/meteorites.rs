//! Meteorites: kinematic records moving in a straight line.
//!
//! Unlike every other body, a meteorite has no orbit. Its position is
//! `initial + velocity · elapsed`, with positions in AU already in the Y-up
//! scene frame and velocities in km/s.

use glam::DVec3;
use serde::{Deserialize, Serialize};
use time::{macros::date, Date, OffsetDateTime};

use crate::api::types::{iso_date, MeteoriteKind};
use crate::config::{OrbitConfig, AU_KM, SECONDS_PER_DAY};
use crate::core::time::{days_between, to_unix_millis};
use crate::rng::Rng;

/// Smallest and largest rendered meteorite size (scene units).
pub const MIN_DISPLAY_SIZE: f64 = 0.02;
pub const MAX_DISPLAY_SIZE: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meteorite {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: MeteoriteKind,
    /// kg
    pub mass: f64,
    /// km
    pub diameter: f64,
    /// km/s, scene axes.
    pub velocity: DVec3,
    /// AU at the reference date, scene axes.
    pub position: DVec3,
    /// Unit heading, informational.
    pub direction: DVec3,
    pub color: String,
    #[serde(with = "iso_date::option", default)]
    pub discovery_date: Option<Date>,
    /// Free-form; historical impacts predate any calendar.
    #[serde(default)]
    pub impact_date: Option<String>,
    #[serde(default)]
    pub impact_location: Option<String>,
    pub description: String,
    #[serde(default)]
    pub is_active: bool,
}

impl Meteorite {
    /// Velocity converted from km/s to AU/day.
    pub fn velocity_au_per_day(&self) -> DVec3 {
        self.velocity * (SECONDS_PER_DAY / AU_KM)
    }

    /// The instant `position` refers to: midnight UTC of the discovery date,
    /// or `now` for records without one.
    pub fn reference_date(&self, now: OffsetDateTime) -> OffsetDateTime {
        match self.discovery_date {
            Some(d) => d.midnight().assume_utc(),
            None => now,
        }
    }

    /// Position in AU at `date`.
    pub fn position_au(&self, date: OffsetDateTime, now: OffsetDateTime) -> DVec3 {
        let elapsed = days_between(self.reference_date(now), date);
        self.position + self.velocity_au_per_day() * elapsed
    }

    /// Scene position at `date`.
    pub fn position_at(
        &self,
        date: OffsetDateTime,
        now: OffsetDateTime,
        config: &OrbitConfig,
    ) -> DVec3 {
        self.position_au(date, now) * config.meteorite_scale
    }

    /// Rendered size: `diameter · 20`, clamped to stay visible but small.
    pub fn display_size(&self) -> f64 {
        (self.diameter * 20.0).clamp(MIN_DISPLAY_SIZE, MAX_DISPLAY_SIZE)
    }
}

struct Seed {
    id: &'static str,
    name: &'static str,
    kind: MeteoriteKind,
    mass: f64,
    diameter: f64,
    velocity: [f64; 3],
    position: [f64; 3],
    direction: [f64; 3],
    color: &'static str,
    discovery_date: Date,
    impact_date: Option<&'static str>,
    impact_location: Option<&'static str>,
    description: &'static str,
}

const FAMOUS: [Seed; 6] = [
    Seed {
        id: "chelyabinsk", name: "Chelyabinsk meteor", kind: MeteoriteKind::Asteroid,
        mass: 1.2e7, diameter: 0.017,
        velocity: [18.6, -2.5, 0.0], position: [0.98, 0.0, 0.1], direction: [-0.95, -0.3, 0.05],
        color: "#FF6B35", discovery_date: date!(2013-02-15),
        impact_date: Some("2013-02-15"), impact_location: Some("Chelyabinsk, Russia"),
        description: "Air burst over Russia in 2013; the shock wave injured about 1500 people.",
    },
    Seed {
        id: "tunguska", name: "Tunguska event", kind: MeteoriteKind::Comet,
        mass: 1e9, diameter: 0.06,
        velocity: [15.0, -8.0, 2.0], position: [0.99, 0.0, 0.05], direction: [-0.85, -0.5, 0.15],
        color: "#4ECDC4", discovery_date: date!(1908-06-30),
        impact_date: Some("1908-06-30"), impact_location: Some("Tunguska, Siberia"),
        description: "Air burst that flattened 2150 km² of Siberian forest.",
    },
    Seed {
        id: "chicxulub", name: "Chicxulub impactor", kind: MeteoriteKind::Asteroid,
        mass: 1e15, diameter: 10.0,
        velocity: [20.0, -15.0, 0.0], position: [1.2, 0.0, -0.2], direction: [-0.8, -0.6, 0.1],
        color: "#E74C3C", discovery_date: date!(1980-01-01),
        impact_date: Some("-66000000"), impact_location: Some("Yucatán Peninsula, Mexico"),
        description: "The impactor behind the extinction of the dinosaurs 66 million years ago.",
    },
    Seed {
        id: "hoba", name: "Hoba meteorite", kind: MeteoriteKind::Asteroid,
        mass: 60_000.0, diameter: 0.0027,
        velocity: [11.2, -5.0, 1.0], position: [1.0, 0.0, 0.0], direction: [-0.9, -0.4, 0.2],
        color: "#95A5A6", discovery_date: date!(1920-01-01),
        impact_date: Some("-80000"), impact_location: Some("Namibia"),
        description: "Largest known meteorite on Earth, an iron-nickel block of about 60 tonnes.",
    },
    Seed {
        id: "oumuamua", name: "1I/ʻOumuamua", kind: MeteoriteKind::Artificial,
        mass: 5e8, diameter: 0.4,
        velocity: [26.33, 0.0, 0.0], position: [-2.0, 0.0, 0.5], direction: [0.8, 0.1, -0.6],
        color: "#9B59B6", discovery_date: date!(2017-10-19),
        impact_date: None, impact_location: None,
        description: "First interstellar object detected passing through the solar system.",
    },
    Seed {
        id: "meteor-perseides", name: "Perseid (example)", kind: MeteoriteKind::Debris,
        mass: 0.001, diameter: 0.000001,
        velocity: [59.0, -10.0, 5.0], position: [1.0, 0.1, 0.05], direction: [-0.98, -0.15, -0.1],
        color: "#F39C12", discovery_date: date!(2024-08-12),
        impact_date: None, impact_location: None,
        description: "A grain from the Perseid stream, debris of comet Swift-Tuttle.",
    },
];

/// Historical impactors, all inactive.
pub fn famous_meteorites() -> Vec<Meteorite> {
    FAMOUS
        .iter()
        .map(|s| Meteorite {
            id: s.id.to_owned(),
            name: s.name.to_owned(),
            kind: s.kind,
            mass: s.mass,
            diameter: s.diameter,
            velocity: DVec3::from_array(s.velocity),
            position: DVec3::from_array(s.position),
            direction: DVec3::from_array(s.direction),
            color: s.color.to_owned(),
            discovery_date: Some(s.discovery_date),
            impact_date: s.impact_date.map(str::to_owned),
            impact_location: s.impact_location.map(str::to_owned),
            description: s.description.to_owned(),
            is_active: false,
        })
        .collect()
}

const RANDOM_KINDS: [MeteoriteKind; 3] =
    [MeteoriteKind::Asteroid, MeteoriteKind::Comet, MeteoriteKind::Debris];

/// A plausible, active meteorite discovered on `now`.
///
/// Mass is log-uniform in 10..10¹¹ kg, diameter follows from a 2000 kg/m³
/// density, speed is 11–72 km/s with a boosted vertical component, and the
/// entry point lies on a 1.5–3 AU ring aimed at a jittered origin.
pub fn random_meteorite(rng: &mut Rng, now: OffsetDateTime) -> Meteorite {
    let kind = RANDOM_KINDS[rng.next_int(RANDOM_KINDS.len() as u32) as usize];

    let mass = 10f64.powf(rng.range(1.0, 11.0));
    let diameter = (mass / 2000.0).cbrt() / 1000.0;

    let speed = rng.range(11.0, 72.0);
    let azimuth = rng.range(0.0, std::f64::consts::TAU);
    let elevation = rng.centered(0.75 * std::f64::consts::PI);
    let lift = rng.range(0.5, 1.0);
    let velocity = DVec3::new(
        speed * elevation.cos() * azimuth.cos(),
        speed * elevation.sin() * lift,
        speed * elevation.cos() * azimuth.sin(),
    );

    let entry_angle = rng.range(0.0, std::f64::consts::TAU);
    let entry_distance = rng.range(1.5, 3.0);
    let position = DVec3::new(
        entry_distance * entry_angle.cos(),
        rng.centered(1.0),
        entry_distance * entry_angle.sin(),
    );

    let target = DVec3::new(rng.centered(0.15), rng.centered(0.15), rng.centered(0.15));
    let direction = (target - position).normalize_or_zero();

    let label = format!("{kind:?}").to_lowercase();
    // xorshift never repeats a draw within its period, so ids stay unique
    // even when several meteorites spawn at the same simulated instant.
    let tag = rng.next_u64();
    Meteorite {
        id: format!("random-{}-{tag:016x}", to_unix_millis(now) as i64),
        name: format!("Meteorite {label} #{}", rng.next_int(1000)),
        kind,
        mass,
        diameter,
        velocity,
        position,
        direction,
        color: kind.color().to_owned(),
        discovery_date: Some(now.date()),
        impact_date: None,
        impact_location: None,
        description: format!("Randomly generated {label} meteorite with a mass of {mass:.2e} kg."),
        is_active: true,
    }
}
