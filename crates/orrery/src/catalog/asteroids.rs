//! Followed asteroids: lighter records than [`CelestialBody`](super::CelestialBody).
//!
//! Orbits are described by their apsides only. Eccentricity and semi-major
//! axis are derived, and the node longitude is synthesized from the id.

use glam::DVec3;
use serde::{Deserialize, Serialize};
use time::{macros::date, Date, OffsetDateTime};

use crate::api::types::{iso_date, AsteroidClass};
use crate::config::{OrbitConfig, DAYS_PER_YEAR};
use crate::orbit::trajectory::generate_trajectory;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asteroid {
    pub id: String,
    pub name: String,
    #[serde(with = "iso_date")]
    pub discovery_date: Date,
    /// Mean diameter (km).
    pub diameter: f64,
    pub class: AsteroidClass,
    /// Orbital period in **years**.
    pub orbital_period: f64,
    /// Perihelion (AU).
    pub perihelion: f64,
    /// Aphelion (AU).
    pub aphelion: f64,
    /// Inclination (degrees).
    pub inclination: f64,
    pub description: String,
    /// Cached orbit path in scene units; empty until refreshed.
    #[serde(default)]
    pub trajectory: Vec<DVec3>,
    #[serde(default)]
    pub is_active: bool,
}

impl Asteroid {
    /// `(q + Q) / 2`, in AU.
    pub fn semi_major_axis(&self) -> f64 {
        (self.perihelion + self.aphelion) / 2.0
    }

    /// `(Q - q) / (Q + q)`.
    pub fn eccentricity(&self) -> f64 {
        (self.aphelion - self.perihelion) / (self.aphelion + self.perihelion)
    }

    pub fn period_days(&self) -> f64 {
        self.orbital_period * DAYS_PER_YEAR
    }

    /// Resample the cached orbit path around `center`.
    pub fn refresh_trajectory(
        &mut self,
        center: OffsetDateTime,
        samples: usize,
        config: &OrbitConfig,
    ) {
        self.trajectory = generate_trajectory(&*self, center, samples, config);
        log::debug!("{}: trajectory refreshed ({} points)", self.id, self.trajectory.len());
    }
}

struct Seed {
    id: &'static str,
    name: &'static str,
    discovery_date: Date,
    diameter: f64,
    class: AsteroidClass,
    orbital_period: f64,
    perihelion: f64,
    aphelion: f64,
    inclination: f64,
    description: &'static str,
}

const FAMOUS: [Seed; 6] = [
    Seed {
        id: "apophis", name: "99942 Apophis", discovery_date: date!(2004-06-19),
        diameter: 0.34, class: AsteroidClass::NearEarth,
        orbital_period: 0.89, perihelion: 0.746, aphelion: 1.099, inclination: 3.33,
        description: "Near-Earth asteroid discovered in 2004; passes very close to Earth in 2029.",
    },
    Seed {
        id: "bennu", name: "101955 Bennu", discovery_date: date!(1999-09-11),
        diameter: 0.49, class: AsteroidClass::NearEarth,
        orbital_period: 1.20, perihelion: 0.897, aphelion: 1.356, inclination: 6.03,
        description: "Target of NASA's OSIRIS-REx mission; samples returned to Earth in 2023.",
    },
    Seed {
        id: "vesta", name: "4 Vesta", discovery_date: date!(1807-03-29),
        diameter: 525.0, class: AsteroidClass::MainBelt,
        orbital_period: 3.63, perihelion: 2.15, aphelion: 2.57, inclination: 7.14,
        description: "Second-largest body of the main belt, visited by the Dawn probe.",
    },
    Seed {
        id: "ceres", name: "1 Ceres", discovery_date: date!(1801-01-01),
        diameter: 939.0, class: AsteroidClass::MainBelt,
        orbital_period: 4.61, perihelion: 2.56, aphelion: 2.98, inclination: 10.59,
        description: "Largest dwarf planet of the asteroid belt, studied by the Dawn mission.",
    },
    Seed {
        id: "eros", name: "433 Eros", discovery_date: date!(1898-08-13),
        diameter: 16.84, class: AsteroidClass::NearEarth,
        orbital_period: 1.76, perihelion: 1.13, aphelion: 1.78, inclination: 10.83,
        description: "First asteroid a spacecraft landed on (NEAR Shoemaker, 2001).",
    },
    Seed {
        id: "itokawa", name: "25143 Itokawa", discovery_date: date!(1998-09-26),
        diameter: 0.33, class: AsteroidClass::NearEarth,
        orbital_period: 1.52, perihelion: 0.95, aphelion: 1.70, inclination: 1.62,
        description: "Target of Japan's Hayabusa mission, the first asteroid sample return.",
    },
];

/// The asteroids offered in the follow panel. Trajectories start empty.
pub fn famous_asteroids() -> Vec<Asteroid> {
    FAMOUS
        .iter()
        .map(|s| Asteroid {
            id: s.id.to_owned(),
            name: s.name.to_owned(),
            discovery_date: s.discovery_date,
            diameter: s.diameter,
            class: s.class,
            orbital_period: s.orbital_period,
            perihelion: s.perihelion,
            aphelion: s.aphelion,
            inclination: s.inclination,
            description: s.description.to_owned(),
            trajectory: Vec::new(),
            is_active: false,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::J2000;

    fn apophis() -> Asteroid {
        famous_asteroids().into_iter().find(|a| a.id == "apophis").unwrap()
    }

    #[test]
    fn derived_elements() {
        let a = apophis();
        assert!((a.semi_major_axis() - 0.9225).abs() < 1e-12);
        assert!((a.eccentricity() - 0.353 / 1.845).abs() < 1e-12);
        assert!((a.period_days() - 0.89 * 365.25).abs() < 1e-9);
    }

    #[test]
    fn all_orbits_bound() {
        for a in famous_asteroids() {
            let e = a.eccentricity();
            assert!((0.0..1.0).contains(&e), "{} has e = {e}", a.id);
            assert!(a.trajectory.is_empty());
            assert!(!a.is_active);
        }
    }

    #[test]
    fn refresh_fills_cache() {
        let mut a = apophis();
        a.refresh_trajectory(J2000, 50, &OrbitConfig::default());
        assert_eq!(a.trajectory.len(), 50);
    }

    #[test]
    fn serializes_discovery_date_as_iso() {
        let json = serde_json::to_value(apophis()).unwrap();
        assert_eq!(json["discovery_date"], "2004-06-19");
        assert_eq!(json["class"], "Near-Earth");
    }
}
