//! Orbital-plane → scene transform.
//!
//! The scene is **Y-up**: the ecliptic is the XZ plane and out-of-plane motion
//! shows up on Y. Every position function in the crate goes through
//! [`orbital_to_scene`] so there is a single axis convention.

use glam::{DMat3, DVec3};

pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Orientation of an orbital plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrbitalPlane {
    /// Inclination to the ecliptic (degrees).
    pub inclination_deg: f64,
    /// Longitude of ascending node (degrees).
    pub ascending_node_deg: f64,
}

impl OrbitalPlane {
    pub fn new(inclination_deg: f64, ascending_node_deg: f64) -> Self {
        Self { inclination_deg, ascending_node_deg }
    }

    /// Rotation taking orbital-plane coordinates into the ecliptic frame
    /// (Z out of plane). Inclination is multiplied by `amplify`; the node is not.
    pub fn rotation(&self, amplify: f64) -> DMat3 {
        let inclination = self.inclination_deg * DEG_TO_RAD * amplify;
        let node = self.ascending_node_deg * DEG_TO_RAD;
        // Inclination about X first, then the node about Z.
        DMat3::from_rotation_z(node) * DMat3::from_rotation_x(inclination)
    }
}

/// Position in the orbital plane: perihelion along +X, z = 0.
#[inline]
pub fn planar_position(true_anomaly: f64, radius: f64) -> DVec3 {
    DVec3::new(true_anomaly.cos() * radius, true_anomaly.sin() * radius, 0.0)
}

/// Ecliptic frame (Z out of plane) → scene frame (Y up).
#[inline]
pub fn ecliptic_to_scene(p: DVec3) -> DVec3 {
    DVec3::new(p.x, p.z, p.y)
}

/// Full transform: planar point, inclination about X, node about Z, Y-up swap.
pub fn orbital_to_scene(
    true_anomaly: f64,
    radius: f64,
    plane: &OrbitalPlane,
    amplify: f64,
) -> DVec3 {
    let planar = planar_position(true_anomaly, radius);
    ecliptic_to_scene(plane.rotation(amplify) * planar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn close(a: DVec3, b: DVec3) -> bool {
        (a - b).length() < 1e-9
    }

    #[test]
    fn flat_orbit_stays_in_ecliptic() {
        let p = orbital_to_scene(FRAC_PI_2, 10.0, &OrbitalPlane::default(), 1.5);
        assert!(close(p, DVec3::new(0.0, 0.0, 10.0)), "p = {p}");
    }

    #[test]
    fn inclination_lifts_out_of_plane() {
        // 90° inclination: the quarter-orbit point ends up straight "up"
        let plane = OrbitalPlane::new(90.0, 0.0);
        let p = orbital_to_scene(FRAC_PI_2, 2.0, &plane, 1.0);
        assert!(close(p, DVec3::new(0.0, 2.0, 0.0)), "p = {p}");
    }

    #[test]
    fn node_rotates_within_ecliptic() {
        let plane = OrbitalPlane::new(0.0, 90.0);
        let p = orbital_to_scene(0.0, 1.0, &plane, 1.0);
        assert!(close(p, DVec3::new(0.0, 0.0, 1.0)), "p = {p}");
    }

    #[test]
    fn amplification_only_scales_inclination() {
        let plane = OrbitalPlane::new(20.0, 0.0);
        let base = orbital_to_scene(FRAC_PI_2, 1.0, &plane, 1.0);
        let amplified = orbital_to_scene(FRAC_PI_2, 1.0, &OrbitalPlane::new(30.0, 0.0), 1.0);
        assert!(close(orbital_to_scene(FRAC_PI_2, 1.0, &plane, 1.5), amplified));
        assert!(!close(base, amplified));
    }

    #[test]
    fn rotation_preserves_radius() {
        let plane = OrbitalPlane::new(156.885, 197.19);
        for i in 0..16 {
            let nu = i as f64 * 0.4;
            let p = orbital_to_scene(nu, 7.5, &plane, 1.2);
            assert!((p.length() - 7.5).abs() < 1e-9);
        }
    }
}
