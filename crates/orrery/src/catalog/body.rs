use serde::Serialize;

use crate::api::types::BodyKind;
use crate::orbit::transform::OrbitalPlane;

/// One entry of the constants table. Immutable; shared by reference.
///
/// `distance` is in AU for heliocentric bodies and in km for moons, and the
/// same units apply to `perihelion`/`aphelion`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CelestialBody {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: BodyKind,
    /// Mean physical radius (km).
    pub radius: f64,
    /// Mean distance / semi-major axis from the parent.
    pub distance: f64,
    /// Display colour as `#RRGGBB`.
    pub color: &'static str,
    /// Sidereal rotation period (days). Negative means retrograde rotation.
    pub rotation_period: f64,
    /// Orbital period (days). Negative means retrograde revolution; 0 for the star.
    pub orbital_period: f64,
    /// Id of the body this one orbits. `None` only for the star.
    pub parent: Option<&'static str>,
    /// Orbital inclination (degrees).
    pub inclination: f64,
    /// Longitude of ascending node (degrees).
    pub longitude_of_ascending_node: f64,
    /// Obliquity (degrees).
    pub axial_tilt: Option<f64>,
    pub eccentricity: Option<f64>,
    pub perihelion: Option<f64>,
    pub aphelion: Option<f64>,
    /// Mass (kg).
    pub mass: Option<f64>,
}

impl CelestialBody {
    /// Template for table entries; every entry overrides what it knows.
    pub const BLANK: CelestialBody = CelestialBody {
        id: "",
        name: "",
        kind: BodyKind::Planet,
        radius: 0.0,
        distance: 0.0,
        color: "#FFFFFF",
        rotation_period: 0.0,
        orbital_period: 0.0,
        parent: Some("sun"),
        inclination: 0.0,
        longitude_of_ascending_node: 0.0,
        axial_tilt: None,
        eccentricity: None,
        perihelion: None,
        aphelion: None,
        mass: None,
    };

    /// Orbits nothing and sits at the origin.
    pub fn is_root(&self) -> bool {
        self.parent.is_none() || self.orbital_period == 0.0 || self.distance == 0.0
    }

    /// Revolves opposite to the conventional direction.
    pub fn is_retrograde(&self) -> bool {
        self.orbital_period < 0.0
    }

    pub fn eccentricity_or_zero(&self) -> f64 {
        self.eccentricity.unwrap_or(0.0)
    }

    pub fn plane(&self) -> OrbitalPlane {
        OrbitalPlane::new(self.inclination, self.longitude_of_ascending_node)
    }

    /// Perihelion and aphelion, when both are in the table.
    pub fn apsides(&self) -> Option<(f64, f64)> {
        match (self.perihelion, self.aphelion) {
            (Some(q), Some(big_q)) => Some((q, big_q)),
            _ => None,
        }
    }

    /// Orbital period in days, unsigned.
    pub fn period_days(&self) -> f64 {
        self.orbital_period.abs()
    }
}
