use serde::{Deserialize, Serialize};
use time::{macros::datetime, OffsetDateTime};

use crate::orbit::kepler::{KEPLER_MAX_ITERATIONS, KEPLER_TOLERANCE};

// ── Presentation constants ───────────────────────────────────────────

/// Scene units per astronomical unit for heliocentric orbits.
pub const ORBITAL_SCALE_FACTOR: f64 = 15.0;
/// Scene units per kilometre for moon orbits around their parent.
/// Much larger than the true AU→km ratio so moons stay visible.
pub const MOON_ORBITAL_SCALE_FACTOR: f64 = 0.03;
/// Scene units per AU for meteorite positions and trails.
pub const METEORITE_SCALE_FACTOR: f64 = 10.0;

/// Visual exaggeration of orbital inclination for planets and asteroids.
pub const PLANET_INCLINATION_AMPLIFY: f64 = 1.5;
/// Visual exaggeration of orbital inclination for moons.
pub const MOON_INCLINATION_AMPLIFY: f64 = 1.2;
/// The apsides-based variant renders true inclinations.
pub const APSIDAL_INCLINATION_AMPLIFY: f64 = 1.0;

// ── Physical constants ───────────────────────────────────────────────

/// Kilometres per astronomical unit.
pub const AU_KM: f64 = 149_597_870.7;
pub const SECONDS_PER_DAY: f64 = 86_400.0;
/// Julian year in days (asteroid periods are stored in years).
pub const DAYS_PER_YEAR: f64 = 365.25;
/// Semi-major axis of Neptune in AU, the transneptunian boundary.
pub const NEPTUNE_SEMI_MAJOR_AXIS_AU: f64 = 30.07;

/// J2000.0 reference epoch.
pub const J2000: OffsetDateTime = datetime!(2000-01-01 12:00 UTC);

// ── Sampling ─────────────────────────────────────────────────────────

/// Default number of samples for a followed asteroid's orbit path.
pub const ASTEROID_TRAJECTORY_SAMPLES: usize = 200;
/// Meteorite trail points: ±20 half-day steps around the current date.
pub const METEORITE_TRAIL_SAMPLES: usize = 41;

/// Tuning for the orbital pipeline. Every field has a named-constant default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    /// Scene units per AU (planets, dwarf planets, asteroids).
    pub orbital_scale: f64,
    /// Scene units per km (moons, relative to their parent).
    pub moon_orbital_scale: f64,
    /// Scene units per AU for meteorites.
    pub meteorite_scale: f64,
    pub planet_inclination_amplify: f64,
    pub moon_inclination_amplify: f64,
    pub apsidal_inclination_amplify: f64,
    /// Epoch at which every mean anomaly is zero.
    #[serde(with = "time::serde::rfc3339")]
    pub reference_epoch: OffsetDateTime,
    /// Kepler solver convergence tolerance (radians).
    pub kepler_tolerance: f64,
    /// Kepler solver iteration cap.
    pub kepler_max_iterations: u32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            orbital_scale: ORBITAL_SCALE_FACTOR,
            moon_orbital_scale: MOON_ORBITAL_SCALE_FACTOR,
            meteorite_scale: METEORITE_SCALE_FACTOR,
            planet_inclination_amplify: PLANET_INCLINATION_AMPLIFY,
            moon_inclination_amplify: MOON_INCLINATION_AMPLIFY,
            apsidal_inclination_amplify: APSIDAL_INCLINATION_AMPLIFY,
            reference_epoch: J2000,
            kepler_tolerance: KEPLER_TOLERANCE,
            kepler_max_iterations: KEPLER_MAX_ITERATIONS,
        }
    }
}

/// Configuration for the whole orrery, provided by the host page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrreryConfig {
    pub orbit: OrbitConfig,
    /// Samples for the followed asteroid's orbit path (default: 200).
    pub asteroid_trajectory_samples: usize,
    /// Points in a meteorite trail (default: 41).
    pub meteorite_trail_samples: usize,
    /// Hours between meteorite trail points (default: 12).
    pub meteorite_trail_step_hours: f64,
    /// Perihelion threshold for the "closer than Neptune" flag (AU).
    pub neptune_semi_major_axis: f64,
    /// Longest real frame delta accepted by the clock, in seconds.
    /// Longer frames (background tabs) are clamped.
    pub max_frame_dt: f64,
    /// Maximum bodies in the per-frame instance buffer (default: 128).
    pub max_instances: usize,
    /// Seed for the random meteorite generator.
    pub rng_seed: u64,
}

impl Default for OrreryConfig {
    fn default() -> Self {
        Self {
            orbit: OrbitConfig::default(),
            asteroid_trajectory_samples: ASTEROID_TRAJECTORY_SAMPLES,
            meteorite_trail_samples: METEORITE_TRAIL_SAMPLES,
            meteorite_trail_step_hours: 12.0,
            neptune_semi_major_axis: NEPTUNE_SEMI_MAJOR_AXIS_AU,
            max_frame_dt: 0.25,
            max_instances: 128,
            rng_seed: 42,
        }
    }
}

/// Errors raised while loading configuration documents.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The document is not valid JSON for the expected shape.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value parsed but is out of its allowed range.
    #[error("invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl OrreryConfig {
    /// Parse a config from a JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the pipeline produce NaN or nothing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("orbit.orbital_scale", self.orbit.orbital_scale),
            ("orbit.moon_orbital_scale", self.orbit.moon_orbital_scale),
            ("orbit.meteorite_scale", self.orbit.meteorite_scale),
            ("orbit.kepler_tolerance", self.orbit.kepler_tolerance),
            ("meteorite_trail_step_hours", self.meteorite_trail_step_hours),
            ("max_frame_dt", self.max_frame_dt),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be a positive number, got {value}"),
                });
            }
        }
        if self.orbit.kepler_max_iterations == 0 {
            return Err(ConfigError::Invalid {
                field: "orbit.kepler_max_iterations",
                reason: "must be at least 1".into(),
            });
        }
        if self.max_instances == 0 {
            return Err(ConfigError::Invalid {
                field: "max_instances",
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_named_constants() {
        let config = OrreryConfig::default();
        assert_eq!(config.orbit.orbital_scale, ORBITAL_SCALE_FACTOR);
        assert_eq!(config.orbit.moon_orbital_scale, MOON_ORBITAL_SCALE_FACTOR);
        assert_eq!(config.orbit.reference_epoch, J2000);
        assert_eq!(config.orbit.kepler_tolerance, KEPLER_TOLERANCE);
        assert_eq!(config.orbit.kepler_max_iterations, KEPLER_MAX_ITERATIONS);
        assert_eq!(config.asteroid_trajectory_samples, 200);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_partial_config() {
        let json = r#"{
            "orbit": { "orbital_scale": 20.0 },
            "max_instances": 64
        }"#;
        let config = OrreryConfig::from_json(json).unwrap();
        assert_eq!(config.orbit.orbital_scale, 20.0);
        assert_eq!(config.orbit.moon_orbital_scale, MOON_ORBITAL_SCALE_FACTOR);
        assert_eq!(config.max_instances, 64);
        assert_eq!(config.meteorite_trail_samples, METEORITE_TRAIL_SAMPLES);
    }

    #[test]
    fn parse_epoch_override() {
        let json = r#"{ "orbit": { "reference_epoch": "2000-01-01T00:00:00Z" } }"#;
        let config = OrreryConfig::from_json(json).unwrap();
        assert_eq!(config.orbit.reference_epoch, datetime!(2000-01-01 0:00 UTC));
    }

    #[test]
    fn reject_non_positive_scale() {
        let json = r#"{ "orbit": { "orbital_scale": 0.0 } }"#;
        match OrreryConfig::from_json(json) {
            Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, "orbit.orbital_scale"),
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn reject_malformed_json() {
        assert!(matches!(
            OrreryConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
