//! Orbital mechanics: Kepler solver, plane transform, position functions,
//! trajectories and apsidal statistics.
//!
//! Everything here is a pure function of its inputs. Positions are
//! `DVec3` in Y-up scene units.

pub mod apsides;
pub mod kepler;
pub mod position;
pub mod trajectory;
pub mod transform;

use glam::DVec3;
use time::OffsetDateTime;

use crate::catalog::asteroids::Asteroid;
use crate::catalog::CelestialBody;
use crate::config::OrbitConfig;

/// Anything that follows a closed orbit and can be sampled over one period.
pub trait Orbiter {
    /// Length of one revolution in days, unsigned. Zero for the star.
    fn orbital_period_days(&self) -> f64;

    /// Scene position at `date`.
    fn position_at(&self, date: OffsetDateTime, config: &OrbitConfig) -> DVec3;
}

impl Orbiter for CelestialBody {
    fn orbital_period_days(&self) -> f64 {
        self.period_days()
    }

    fn position_at(&self, date: OffsetDateTime, config: &OrbitConfig) -> DVec3 {
        position::position_of_planet_like_body(self, date, config)
    }
}

impl Orbiter for Asteroid {
    fn orbital_period_days(&self) -> f64 {
        self.period_days()
    }

    fn position_at(&self, date: OffsetDateTime, config: &OrbitConfig) -> DVec3 {
        position::position_of_asteroid(self, date, config)
    }
}

/// A moon paired with the body it orbits. Samples the moon's own period,
/// with the parent carried along.
#[derive(Debug, Clone, Copy)]
pub struct Satellite<'a> {
    pub moon: &'a CelestialBody,
    pub parent: &'a CelestialBody,
}

impl Orbiter for Satellite<'_> {
    fn orbital_period_days(&self) -> f64 {
        self.moon.period_days()
    }

    fn position_at(&self, date: OffsetDateTime, config: &OrbitConfig) -> DVec3 {
        position::position_of_moon(self.moon, self.parent, date, config)
    }
}

/// Apsides-based rendering of a body; see [`position::position_from_apsides`].
#[derive(Debug, Clone, Copy)]
pub struct ApsidalOrbit<'a>(pub &'a CelestialBody);

impl Orbiter for ApsidalOrbit<'_> {
    fn orbital_period_days(&self) -> f64 {
        self.0.period_days()
    }

    fn position_at(&self, date: OffsetDateTime, config: &OrbitConfig) -> DVec3 {
        position::position_from_apsides(self.0, date, config)
    }
}
