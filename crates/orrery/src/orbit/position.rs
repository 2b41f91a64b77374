//! Position functions: (body, date) → scene position.

use glam::DVec3;
use time::OffsetDateTime;

use super::kepler;
use super::transform::{orbital_to_scene, OrbitalPlane};
use crate::api::types::BodyKind;
use crate::catalog::asteroids::Asteroid;
use crate::catalog::{Catalog, CelestialBody};
use crate::config::OrbitConfig;
use crate::core::time::days_between;

/// Elements of one Kepler evaluation, already in scene units.
struct Ellipse {
    /// Signed period in days; negative flips the direction of travel.
    period_days: f64,
    semi_major_axis: f64,
    eccentricity: f64,
    plane: OrbitalPlane,
    amplify: f64,
}

impl Ellipse {
    /// Solve for the orbital-plane angle and radius `days` after the epoch.
    fn anomaly_and_radius(&self, days: f64, config: &OrbitConfig) -> (f64, f64) {
        kepler::assert_bound_orbit(self.eccentricity);
        let mean = kepler::mean_anomaly(days, self.period_days);
        let (nu, r) = if self.eccentricity > 0.0 {
            let s = kepler::solve(
                mean,
                self.eccentricity,
                config.kepler_tolerance,
                config.kepler_max_iterations,
            );
            (s.true_anomaly, self.semi_major_axis * s.radius_factor)
        } else {
            (mean, self.semi_major_axis)
        };
        if self.period_days < 0.0 {
            (-nu, r)
        } else {
            (nu, r)
        }
    }

    fn position(&self, days: f64, config: &OrbitConfig) -> DVec3 {
        let (nu, r) = self.anomaly_and_radius(days, config);
        orbital_to_scene(nu, r, &self.plane, self.amplify)
    }
}

/// Heliocentric position of a planet, dwarf planet or belt body.
///
/// The star (or anything without a period or distance) stays at the origin.
/// Missing eccentricity means a circular orbit.
///
/// # Panics
/// If the body's eccentricity is outside [0, 1).
pub fn position_of_planet_like_body(
    body: &CelestialBody,
    date: OffsetDateTime,
    config: &OrbitConfig,
) -> DVec3 {
    if body.is_root() {
        return DVec3::ZERO;
    }
    let ellipse = Ellipse {
        period_days: body.orbital_period,
        semi_major_axis: body.distance * config.orbital_scale,
        eccentricity: body.eccentricity_or_zero(),
        plane: body.plane(),
        amplify: config.planet_inclination_amplify,
    };
    ellipse.position(days_between(config.reference_epoch, date), config)
}

/// Moon offset from its parent, with the moon distance scale and amplification.
pub fn moon_offset(moon: &CelestialBody, date: OffsetDateTime, config: &OrbitConfig) -> DVec3 {
    if moon.is_root() {
        return DVec3::ZERO;
    }
    let ellipse = Ellipse {
        period_days: moon.orbital_period,
        semi_major_axis: moon.distance * config.moon_orbital_scale,
        eccentricity: moon.eccentricity_or_zero(),
        plane: moon.plane(),
        amplify: config.moon_inclination_amplify,
    };
    ellipse.position(days_between(config.reference_epoch, date), config)
}

/// Parent position plus the moon's own orbit around it. One level only.
pub fn position_of_moon(
    moon: &CelestialBody,
    parent: &CelestialBody,
    date: OffsetDateTime,
    config: &OrbitConfig,
) -> DVec3 {
    position_of_planet_like_body(parent, date, config) + moon_offset(moon, date, config)
}

/// Java-style `hash * 31 + unit` over UTF-16 code units, wrapping at 32 bits.
pub fn string_hash(s: &str) -> i32 {
    s.encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(unit as i32))
}

/// Synthetic, stable longitude of ascending node for an asteroid id (degrees).
pub fn asteroid_node_longitude(id: &str) -> f64 {
    ((string_hash(id) as i64).abs() % 360) as f64
}

/// Heliocentric position of a followed asteroid. Semi-major axis and
/// eccentricity come from the apsides; the node from the id hash.
pub fn position_of_asteroid(
    asteroid: &Asteroid,
    date: OffsetDateTime,
    config: &OrbitConfig,
) -> DVec3 {
    let ellipse = Ellipse {
        period_days: asteroid.period_days(),
        semi_major_axis: asteroid.semi_major_axis() * config.orbital_scale,
        eccentricity: asteroid.eccentricity(),
        plane: OrbitalPlane::new(asteroid.inclination, asteroid_node_longitude(&asteroid.id)),
        amplify: config.planet_inclination_amplify,
    };
    ellipse.position(days_between(config.reference_epoch, date), config)
}

/// Variant using the conic equation `a(1-e²)/(1+e·cos ν)` with `a = (q+Q)/2`
/// and true inclinations. Bodies without both apsides use
/// [`position_of_planet_like_body`].
pub fn position_from_apsides(
    body: &CelestialBody,
    date: OffsetDateTime,
    config: &OrbitConfig,
) -> DVec3 {
    let Some((q, big_q)) = body.apsides() else {
        return position_of_planet_like_body(body, date, config);
    };
    if body.is_root() {
        return DVec3::ZERO;
    }
    let e = body.eccentricity_or_zero();
    let ellipse = Ellipse {
        period_days: body.orbital_period,
        semi_major_axis: (q + big_q) / 2.0,
        eccentricity: e,
        plane: body.plane(),
        amplify: config.apsidal_inclination_amplify,
    };
    let (nu, _) = ellipse.anomaly_and_radius(days_between(config.reference_epoch, date), config);
    let r = ellipse.semi_major_axis * (1.0 - e * e) / (1.0 + e * nu.cos()) * config.orbital_scale;
    orbital_to_scene(nu, r, &ellipse.plane, ellipse.amplify)
}

impl Catalog {
    /// Scene position of any catalog body, resolving a moon's parent.
    /// Unknown ids and moons with a missing parent yield `None`.
    pub fn position_of(
        &self,
        id: &str,
        date: OffsetDateTime,
        config: &OrbitConfig,
    ) -> Option<DVec3> {
        let Some(body) = self.get(id) else {
            log::warn!("position requested for unknown body `{id}`");
            return None;
        };
        self.position_of_body(body, date, config)
    }

    pub fn position_of_body(
        &self,
        body: &CelestialBody,
        date: OffsetDateTime,
        config: &OrbitConfig,
    ) -> Option<DVec3> {
        if body.kind != BodyKind::Moon {
            return Some(position_of_planet_like_body(body, date, config));
        }
        match self.parent_of(body) {
            Some(parent) => Some(position_of_moon(body, parent, date, config)),
            None => {
                log::warn!("moon `{}` has no resolvable parent {:?}", body.id, body.parent);
                None
            }
        }
    }
}
