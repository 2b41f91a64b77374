//! Physical radius → rendered radius.
//!
//! Real radii span three orders of magnitude, so each body class is
//! compressed with its own factor and clamp. Per-body multipliers come from
//! a JSON profile embedded in the crate.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::api::types::BodyKind;
use crate::catalog::CelestialBody;
use crate::config::ConfigError;

const BUILTIN_PROFILE: &str = include_str!("../data/display_profile.json");

/// Compression rule for one body class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassScale {
    /// Radius that maps to `factor` scene units (km).
    pub reference_radius_km: f64,
    pub factor: f64,
    pub min: f64,
    pub max: f64,
    /// Extra multiplier per body id, applied before clamping.
    #[serde(default)]
    pub overrides: HashMap<String, f64>,
}

impl ClassScale {
    fn radius(&self, body: &CelestialBody) -> f64 {
        let multiplier = self.overrides.get(body.id).copied().unwrap_or(1.0);
        let radius = body.radius / self.reference_radius_km * self.factor * multiplier;
        radius.clamp(self.min, self.max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayProfile {
    pub star_radius: f64,
    /// Used for dwarf planets and belt asteroids.
    pub fallback_radius: f64,
    pub planet: ClassScale,
    pub moon: ClassScale,
}

impl Default for DisplayProfile {
    /// Class formulas without per-body overrides.
    fn default() -> Self {
        Self {
            star_radius: 1.5,
            fallback_radius: 0.05,
            planet: ClassScale {
                reference_radius_km: 6371.0,
                factor: 0.2,
                min: 0.05,
                max: 1.5,
                overrides: HashMap::new(),
            },
            moon: ClassScale {
                reference_radius_km: 6371.0,
                factor: 0.05,
                min: 0.02,
                max: 0.3,
                overrides: HashMap::new(),
            },
        }
    }
}

impl DisplayProfile {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The profile shipped with the crate.
    pub fn builtin() -> &'static DisplayProfile {
        static PROFILE: OnceLock<DisplayProfile> = OnceLock::new();
        PROFILE.get_or_init(|| {
            Self::from_json(BUILTIN_PROFILE).unwrap_or_else(|err| {
                log::error!("built-in display profile unreadable ({err}), overrides disabled");
                Self::default()
            })
        })
    }

    pub fn display_radius(&self, body: &CelestialBody) -> f64 {
        match body.kind {
            BodyKind::Star => self.star_radius,
            BodyKind::Planet => self.planet.radius(body),
            BodyKind::Moon => self.moon.radius(body),
            BodyKind::Asteroid | BodyKind::DwarfPlanet => self.fallback_radius,
        }
    }
}

/// Rendered radius of `body` under the built-in profile.
pub fn display_radius(body: &CelestialBody) -> f64 {
    DisplayProfile::builtin().display_radius(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn radius_of(id: &str) -> f64 {
        display_radius(Catalog::solar_system().get(id).unwrap())
    }

    #[test]
    fn builtin_profile_parses() {
        let profile = DisplayProfile::from_json(BUILTIN_PROFILE).unwrap();
        assert_eq!(profile.planet.overrides.len(), 2);
        assert_eq!(profile.moon.overrides["moon"], 2.0);
    }

    #[test]
    fn class_formulas() {
        assert_eq!(radius_of("sun"), 1.5);
        assert!((radius_of("earth") - 0.2).abs() < 1e-12);
        assert!((radius_of("mercury") - 2439.7 / 6371.0 * 0.2).abs() < 1e-12);
        assert_eq!(radius_of("pluto"), 0.05);
        assert_eq!(radius_of("vesta-asteroid"), 0.05);
    }

    #[test]
    fn giants_are_compressed() {
        let jupiter = radius_of("jupiter");
        assert!((jupiter - 69_911.0 / 6371.0 * 0.2 * 0.3).abs() < 1e-12);
        let saturn = radius_of("saturn");
        assert!((saturn - 58_232.0 / 6371.0 * 0.2 * 0.25).abs() < 1e-12);
        // no override for Uranus
        assert!((radius_of("uranus") - 25_362.0 / 6371.0 * 0.2).abs() < 1e-12);
    }

    #[test]
    fn notable_moons_boosted_small_moons_clamped() {
        assert!((radius_of("moon") - 1737.4 / 6371.0 * 0.05 * 2.0).abs() < 1e-12);
        assert!((radius_of("titan") - 2574.0 / 6371.0 * 0.05 * 1.8).abs() < 1e-12);
        assert_eq!(radius_of("mimas"), 0.02);
    }

    #[test]
    fn default_profile_ignores_overrides() {
        let catalog = Catalog::solar_system();
        let moon = catalog.get("moon").unwrap();
        let plain = DisplayProfile::default().display_radius(moon);
        assert!((plain - 1737.4 / 6371.0 * 0.05).abs() < 1e-12);
    }

    #[test]
    fn malformed_profile_rejected() {
        assert!(matches!(
            DisplayProfile::from_json(r#"{ "star_radius": "big" }"#),
            Err(ConfigError::Parse(_))
        ));
    }
}
