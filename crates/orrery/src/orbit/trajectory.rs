//! Orbit paths and meteorite trails.

use glam::DVec3;
use time::OffsetDateTime;

use super::Orbiter;
use crate::catalog::meteorites::Meteorite;
use crate::config::OrbitConfig;
use crate::core::time::add_days;

/// `samples` evenly spaced offsets covering `[-span/2, +span/2]`, both ends
/// included. One sample sits at the centre; zero samples is empty.
pub fn centered_offsets(span: f64, samples: usize) -> impl Iterator<Item = f64> {
    let last = samples.saturating_sub(1).max(1) as f64;
    (0..samples).map(move |i| {
        if samples == 1 {
            0.0
        } else {
            -span / 2.0 + span * i as f64 / last
        }
    })
}

/// Sample one full period of `body` centred on `center`.
///
/// Pure: the same inputs always give the same path. Since both ends are
/// included the first and last points coincide for a Kepler orbit.
pub fn generate_trajectory<O: Orbiter + ?Sized>(
    body: &O,
    center: OffsetDateTime,
    samples: usize,
    config: &OrbitConfig,
) -> Vec<DVec3> {
    let period = body.orbital_period_days();
    centered_offsets(period, samples)
        .map(|offset| body.position_at(add_days(center, offset), config))
        .collect()
}

/// Linear trail of a meteorite: `samples` points `step_hours` apart,
/// centred on `now`.
pub fn meteorite_trail(
    meteorite: &Meteorite,
    now: OffsetDateTime,
    samples: usize,
    step_hours: f64,
    config: &OrbitConfig,
) -> Vec<DVec3> {
    let span = step_hours / 24.0 * samples.saturating_sub(1) as f64;
    centered_offsets(span, samples)
        .map(|offset| meteorite.position_at(add_days(now, offset), now, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::asteroids::famous_asteroids;
    use crate::catalog::meteorites::famous_meteorites;
    use crate::catalog::Catalog;
    use crate::config::{J2000, METEORITE_TRAIL_SAMPLES};
    use crate::orbit::{ApsidalOrbit, Satellite};
    use time::macros::datetime;

    #[test]
    fn offsets_include_both_ends() {
        let v: Vec<_> = centered_offsets(10.0, 5).collect();
        assert_eq!(v, [-5.0, -2.5, 0.0, 2.5, 5.0]);
        assert_eq!(centered_offsets(10.0, 1).collect::<Vec<_>>(), [0.0]);
        assert_eq!(centered_offsets(10.0, 0).count(), 0);
    }

    #[test]
    fn planet_trajectory_closes() {
        let catalog = Catalog::solar_system();
        let config = OrbitConfig::default();
        for id in ["mercury", "earth", "jupiter", "pluto"] {
            let body = catalog.get(id).unwrap();
            let path = generate_trajectory(body, datetime!(2024-01-01 0:00 UTC), 200, &config);
            assert_eq!(path.len(), 200);
            let gap = (path[0] - path[199]).length();
            assert!(gap < 1e-6 * path[0].length(), "{id}: gap {gap}");
        }
    }

    #[test]
    fn asteroid_trajectory_closes() {
        let config = OrbitConfig::default();
        let apophis = &famous_asteroids()[0];
        let path = generate_trajectory(apophis, J2000, 40, &config);
        assert_eq!(path.len(), 40);
        assert!((path[0] - path[39]).length() < 1e-6);
    }

    #[test]
    fn trajectory_is_restartable() {
        let catalog = Catalog::solar_system();
        let mars = catalog.get("mars").unwrap();
        let config = OrbitConfig::default();
        let a = generate_trajectory(mars, J2000, 64, &config);
        let b = generate_trajectory(mars, J2000, 64, &config);
        assert_eq!(a, b);
    }

    #[test]
    fn single_sample_is_centre_position() {
        let catalog = Catalog::solar_system();
        let venus = catalog.get("venus").unwrap();
        let config = OrbitConfig::default();
        let path = generate_trajectory(venus, J2000, 1, &config);
        assert_eq!(path, [venus.position_at(J2000, &config)]);
    }

    #[test]
    fn moon_and_apsidal_trajectories() {
        let catalog = Catalog::solar_system();
        let config = OrbitConfig::default();
        let io = Satellite {
            moon: catalog.get("io").unwrap(),
            parent: catalog.get("jupiter").unwrap(),
        };
        assert_eq!(generate_trajectory(&io, J2000, 40, &config).len(), 40);

        let sedna = ApsidalOrbit(catalog.get("sedna").unwrap());
        let path = generate_trajectory(&sedna, J2000, 100, &config);
        assert!((path[0] - path[99]).length() < 1e-6 * path[0].length());
    }

    #[test]
    fn meteorite_trail_is_straight_and_centred() {
        let config = OrbitConfig::default();
        let m = &famous_meteorites()[0];
        let now = datetime!(2013-02-20 0:00 UTC);
        let trail = meteorite_trail(m, now, METEORITE_TRAIL_SAMPLES, 12.0, &config);
        assert_eq!(trail.len(), 41);
        assert!((trail[20] - m.position_at(now, now, &config)).length() < 1e-9);
        let step = trail[1] - trail[0];
        for pair in trail.windows(2) {
            assert!(((pair[1] - pair[0]) - step).length() < 1e-9);
        }
        // ±10 days of travel at the record's speed
        let expected = m.velocity_au_per_day().length() * 20.0 * config.meteorite_scale;
        assert!(((trail[40] - trail[0]).length() - expected).abs() < 1e-9);
    }
}
