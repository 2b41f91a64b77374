use glam::DVec3;
use serde::Serialize;

/// A band of camera distances with its own label in the navigation UI.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NavigationScale {
    /// Inclusive bounds in scene units.
    pub min: f64,
    pub max: f64,
    pub name: &'static str,
    pub description: &'static str,
}

pub const SCALES: [NavigationScale; 5] = [
    NavigationScale {
        min: 0.1,
        max: 1e3,
        name: "Planetary",
        description: "Planetary surfaces and moons",
    },
    NavigationScale {
        min: 1e3,
        max: 1e5,
        name: "Local system",
        description: "Planets and their orbits",
    },
    NavigationScale {
        min: 1e5,
        max: 1e7,
        name: "Stellar system",
        description: "A star and its complete planetary system",
    },
    NavigationScale {
        min: 1e7,
        max: 1e9,
        name: "Interstellar",
        description: "Nearby stars and neighbouring systems",
    },
    NavigationScale {
        min: 1e9,
        max: 6.3e11,
        name: "Galactic",
        description: "Spiral arms and the structure of the Milky Way",
    },
];

/// The first scale whose range holds `camera_distance`; the planetary scale
/// when none does.
pub fn current_scale(camera_distance: f64) -> &'static NavigationScale {
    SCALES
        .iter()
        .find(|s| camera_distance >= s.min && camera_distance <= s.max)
        .unwrap_or(&SCALES[0])
}

/// Apparent brightness of a star, in [0.1, 2].
pub fn star_brightness(luminosity: f64, distance: f64, camera_distance: f64) -> f64 {
    let apparent = luminosity.log10() - 2.5 * (distance * distance).log10();
    (apparent + camera_distance / 1e6).clamp(0.1, 2.0)
}

/// Rendered star size, at least 50 scene units.
pub fn star_size(luminosity: f64, _distance: f64, camera_distance: f64) -> f64 {
    let base = luminosity.sqrt() * 100.0;
    let zoom = (camera_distance / 1e5).clamp(0.5, 5.0);
    (base * zoom).max(50.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VisibilityRange {
    pub min: f64,
    pub max: f64,
}

/// Camera distances at which a system `system_distance` light-years away
/// shows its planets.
pub fn planet_visibility_range(system_distance: f64) -> VisibilityRange {
    let base = system_distance * 1000.0;
    VisibilityRange { min: base * 0.001, max: base * 100.0 }
}

/// Camera distance that frames a whole planetary system at `system_position`.
pub fn optimal_camera_distance(system_position: DVec3) -> f64 {
    (system_position.length() * 0.3).max(5e5)
}
