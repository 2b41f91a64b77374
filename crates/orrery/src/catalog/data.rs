//! Constants table: mean orbital elements and physical properties.
//!
//! Planet and moon values are mean J2000 elements. Distances are AU for
//! heliocentric bodies and km for moons. Moon inclinations are relative to
//! the parent's equator.

use super::body::CelestialBody;
use crate::api::types::BodyKind;

const B: CelestialBody = CelestialBody::BLANK;

// ── Sun, planets and moons ───────────────────────────────────────────

pub static SOLAR_SYSTEM: &[CelestialBody] = &[
    CelestialBody {
        id: "sun", name: "Sun", kind: BodyKind::Star,
        radius: 696_340.0, distance: 0.0, color: "#FDB813",
        rotation_period: 25.38, orbital_period: 0.0, parent: None,
        axial_tilt: Some(7.25), mass: Some(1.989e30),
        ..B
    },
    CelestialBody {
        id: "mercury", name: "Mercury",
        radius: 2439.7, distance: 0.387098, color: "#8C7853",
        rotation_period: 58.6, orbital_period: 87.97,
        inclination: 7.005, longitude_of_ascending_node: 48.331, axial_tilt: Some(0.034),
        eccentricity: Some(0.2056), perihelion: Some(0.3075), aphelion: Some(0.4667),
        ..B
    },
    CelestialBody {
        id: "venus", name: "Venus",
        radius: 6051.8, distance: 0.723332, color: "#FFC649",
        rotation_period: -243.018, orbital_period: 224.70,
        inclination: 3.395, longitude_of_ascending_node: 76.680, axial_tilt: Some(177.36),
        eccentricity: Some(0.0067), perihelion: Some(0.7184), aphelion: Some(0.7282),
        ..B
    },
    CelestialBody {
        id: "earth", name: "Earth",
        radius: 6371.0, distance: 1.0, color: "#6B93D6",
        rotation_period: 0.99726968, orbital_period: 365.256363004,
        inclination: 0.00005, longitude_of_ascending_node: -11.26064, axial_tilt: Some(23.4392811),
        eccentricity: Some(0.0167), perihelion: Some(0.9833), aphelion: Some(1.0167),
        ..B
    },
    CelestialBody {
        id: "moon", name: "Moon", kind: BodyKind::Moon,
        radius: 1737.4, distance: 384_400.0, color: "#C8C8C8",
        rotation_period: 27.321661, orbital_period: 27.321661, parent: Some("earth"),
        inclination: 5.145, longitude_of_ascending_node: 125.08,
        ..B
    },
    CelestialBody {
        id: "mars", name: "Mars",
        radius: 3389.5, distance: 1.523679, color: "#CD5C5C",
        rotation_period: 1.025957, orbital_period: 686.971,
        inclination: 1.850, longitude_of_ascending_node: 49.558, axial_tilt: Some(25.19),
        eccentricity: Some(0.0934), perihelion: Some(1.382), aphelion: Some(1.666),
        ..B
    },
    CelestialBody {
        id: "jupiter", name: "Jupiter",
        radius: 69_911.0, distance: 5.204267, color: "#D8CA9D",
        rotation_period: 0.41354, orbital_period: 4332.59,
        inclination: 1.303, longitude_of_ascending_node: 100.464, axial_tilt: Some(3.13),
        eccentricity: Some(0.049), perihelion: Some(4.950), aphelion: Some(5.458),
        ..B
    },
    CelestialBody {
        id: "io", name: "Io", kind: BodyKind::Moon,
        radius: 1821.6, distance: 421_800.0, color: "#FFFF99",
        rotation_period: 1.769138, orbital_period: 1.769138, parent: Some("jupiter"),
        inclination: 0.036, longitude_of_ascending_node: 43.977,
        ..B
    },
    CelestialBody {
        id: "europa", name: "Europa", kind: BodyKind::Moon,
        radius: 1560.8, distance: 671_034.0, color: "#87CEEB",
        rotation_period: 3.551181, orbital_period: 3.551181, parent: Some("jupiter"),
        inclination: 0.466, longitude_of_ascending_node: 219.106,
        ..B
    },
    CelestialBody {
        id: "ganymede", name: "Ganymede", kind: BodyKind::Moon,
        radius: 2634.1, distance: 1_070_412.0, color: "#A0A0A0",
        rotation_period: 7.15455296, orbital_period: 7.15455296, parent: Some("jupiter"),
        inclination: 0.177, longitude_of_ascending_node: 63.552,
        ..B
    },
    CelestialBody {
        id: "callisto", name: "Callisto", kind: BodyKind::Moon,
        radius: 2410.3, distance: 1_882_709.0, color: "#666666",
        rotation_period: 16.6890184, orbital_period: 16.6890184, parent: Some("jupiter"),
        inclination: 0.192, longitude_of_ascending_node: 298.848,
        ..B
    },
    CelestialBody {
        id: "saturn", name: "Saturn",
        radius: 58_232.0, distance: 9.5826, color: "#FAD5A5",
        rotation_period: 0.44401, orbital_period: 10_759.22,
        inclination: 2.485, longitude_of_ascending_node: 113.665, axial_tilt: Some(26.73),
        eccentricity: Some(0.0565), perihelion: Some(9.024), aphelion: Some(10.086),
        ..B
    },
    CelestialBody {
        id: "mimas", name: "Mimas", kind: BodyKind::Moon,
        radius: 198.2, distance: 185_539.0, color: "#C0C0C0",
        rotation_period: 0.942422, orbital_period: 0.942422, parent: Some("saturn"),
        inclination: 1.574, longitude_of_ascending_node: 139.771,
        ..B
    },
    CelestialBody {
        id: "enceladus", name: "Enceladus", kind: BodyKind::Moon,
        radius: 252.1, distance: 238_020.0, color: "#F0F0F0",
        rotation_period: 1.370218, orbital_period: 1.370218, parent: Some("saturn"),
        inclination: 0.009, longitude_of_ascending_node: 169.508,
        ..B
    },
    CelestialBody {
        id: "titan", name: "Titan", kind: BodyKind::Moon,
        radius: 2574.0, distance: 1_221_830.0, color: "#FFA500",
        rotation_period: 15.945421, orbital_period: 15.945421, parent: Some("saturn"),
        inclination: 0.306, longitude_of_ascending_node: 28.057,
        ..B
    },
    CelestialBody {
        id: "iapetus", name: "Iapetus", kind: BodyKind::Moon,
        radius: 734.5, distance: 3_561_300.0, color: "#8B7355",
        rotation_period: 79.3215, orbital_period: 79.3215, parent: Some("saturn"),
        inclination: 15.47, longitude_of_ascending_node: 139.204,
        ..B
    },
    CelestialBody {
        id: "uranus", name: "Uranus",
        radius: 25_362.0, distance: 19.2184, color: "#4FD0E7",
        rotation_period: -0.71833, orbital_period: 30_688.5,
        inclination: 0.773, longitude_of_ascending_node: 74.006, axial_tilt: Some(97.77),
        eccentricity: Some(0.0457), perihelion: Some(18.324), aphelion: Some(20.078),
        ..B
    },
    CelestialBody {
        id: "miranda", name: "Miranda", kind: BodyKind::Moon,
        radius: 235.8, distance: 129_390.0, color: "#B0B0B0",
        rotation_period: 1.413479, orbital_period: 1.413479, parent: Some("uranus"),
        inclination: 4.232, longitude_of_ascending_node: 326.438,
        ..B
    },
    CelestialBody {
        id: "ariel", name: "Ariel", kind: BodyKind::Moon,
        radius: 578.9, distance: 191_020.0, color: "#D3D3D3",
        rotation_period: 2.520379, orbital_period: 2.520379, parent: Some("uranus"),
        inclination: 0.260, longitude_of_ascending_node: 22.394,
        ..B
    },
    CelestialBody {
        id: "umbriel", name: "Umbriel", kind: BodyKind::Moon,
        radius: 584.7, distance: 266_300.0, color: "#808080",
        rotation_period: 4.144177, orbital_period: 4.144177, parent: Some("uranus"),
        inclination: 0.128, longitude_of_ascending_node: 33.485,
        ..B
    },
    CelestialBody {
        id: "titania", name: "Titania", kind: BodyKind::Moon,
        radius: 788.4, distance: 435_910.0, color: "#A9A9A9",
        rotation_period: 8.705872, orbital_period: 8.705872, parent: Some("uranus"),
        inclination: 0.340, longitude_of_ascending_node: 99.771,
        ..B
    },
    CelestialBody {
        id: "oberon", name: "Oberon", kind: BodyKind::Moon,
        radius: 761.4, distance: 583_520.0, color: "#969696",
        rotation_period: 13.463234, orbital_period: 13.463234, parent: Some("uranus"),
        inclination: 0.058, longitude_of_ascending_node: 279.771,
        ..B
    },
    CelestialBody {
        id: "neptune", name: "Neptune",
        radius: 24_622.0, distance: 30.07, color: "#4169E1",
        rotation_period: 0.6713, orbital_period: 60_190.03,
        inclination: 1.767, longitude_of_ascending_node: 131.784, axial_tilt: Some(28.32),
        eccentricity: Some(0.0113), perihelion: Some(29.81), aphelion: Some(30.33),
        ..B
    },
    CelestialBody {
        id: "triton", name: "Triton", kind: BodyKind::Moon,
        radius: 1353.4, distance: 354_759.0, color: "#FFB6C1",
        // retrograde: revolves backwards around Neptune
        rotation_period: -5.876854, orbital_period: -5.876854, parent: Some("neptune"),
        inclination: 156.885, longitude_of_ascending_node: 197.19,
        ..B
    },
    CelestialBody {
        id: "nereid", name: "Nereid", kind: BodyKind::Moon,
        radius: 170.0, distance: 5_513_818.0, color: "#C0C0C0",
        rotation_period: 360.1362, orbital_period: 360.1362, parent: Some("neptune"),
        inclination: 7.23, longitude_of_ascending_node: 334.762,
        ..B
    },
];

// ── Asteroid belt ────────────────────────────────────────────────────

pub static ASTEROID_BELT: &[CelestialBody] = &[
    CelestialBody {
        id: "ceres-asteroid", name: "Ceres", kind: BodyKind::Asteroid,
        radius: 473.0, distance: 2.766, color: "#C4B5A0",
        rotation_period: 0.378, orbital_period: 1681.6,
        inclination: 10.59, eccentricity: Some(0.0756),
        ..B
    },
    CelestialBody {
        id: "vesta-asteroid", name: "Vesta", kind: BodyKind::Asteroid,
        radius: 262.7, distance: 2.361, color: "#E6DDD4",
        rotation_period: 0.2226, orbital_period: 1325.4,
        inclination: 7.14, eccentricity: Some(0.0887),
        ..B
    },
    CelestialBody {
        id: "pallas-asteroid", name: "Pallas", kind: BodyKind::Asteroid,
        radius: 256.0, distance: 2.772, color: "#B8B8B8",
        rotation_period: 0.325, orbital_period: 1686.9,
        inclination: 34.83, eccentricity: Some(0.2313),
        ..B
    },
    CelestialBody {
        id: "hygiea-asteroid", name: "Hygiea", kind: BodyKind::Asteroid,
        radius: 217.0, distance: 3.139, color: "#696969",
        rotation_period: 1.151, orbital_period: 2029.2,
        inclination: 3.84, eccentricity: Some(0.117),
        ..B
    },
];

// ── Kuiper belt ──────────────────────────────────────────────────────

pub static KUIPER_BELT: &[CelestialBody] = &[
    CelestialBody {
        id: "pluto", name: "Pluto", kind: BodyKind::DwarfPlanet,
        radius: 1188.3, distance: 39.482, color: "#DEB887",
        rotation_period: -6.387230, orbital_period: 90_560.0,
        inclination: 17.16, axial_tilt: Some(122.53),
        eccentricity: Some(0.2488), perihelion: Some(29.7), aphelion: Some(49.3),
        ..B
    },
    CelestialBody {
        id: "charon", name: "Charon", kind: BodyKind::Moon,
        radius: 606.0, distance: 19_591.0, color: "#A0A0A0",
        rotation_period: 6.387230, orbital_period: 6.387230, parent: Some("pluto"),
        inclination: 0.08, eccentricity: Some(0.0002),
        ..B
    },
    CelestialBody {
        id: "quaoar", name: "Quaoar", kind: BodyKind::DwarfPlanet,
        radius: 555.0, distance: 43.405, color: "#8B4513",
        rotation_period: 0.73, orbital_period: 103_765.0,
        inclination: 8.00, eccentricity: Some(0.039),
        ..B
    },
    CelestialBody {
        id: "sedna", name: "Sedna", kind: BodyKind::DwarfPlanet,
        radius: 497.0, distance: 518.57, color: "#CD853F",
        rotation_period: 0.43, orbital_period: 4_155_840.0,
        inclination: 11.93,
        eccentricity: Some(0.854), perihelion: Some(76.0), aphelion: Some(937.0),
        ..B
    },
    CelestialBody {
        id: "orcus", name: "Orcus", kind: BodyKind::DwarfPlanet,
        radius: 458.5, distance: 39.419, color: "#708090",
        rotation_period: 0.458, orbital_period: 90_465.0,
        inclination: 20.57, eccentricity: Some(0.226),
        ..B
    },
];

// ── Dwarf planets ────────────────────────────────────────────────────

pub static DWARF_PLANETS: &[CelestialBody] = &[
    CelestialBody {
        id: "ceres", name: "Ceres", kind: BodyKind::DwarfPlanet,
        radius: 473.0, distance: 2.766, color: "#C4B5A0",
        rotation_period: 0.378, orbital_period: 1681.6,
        inclination: 10.59, axial_tilt: Some(4.0),
        eccentricity: Some(0.0756), perihelion: Some(2.556), aphelion: Some(2.976),
        ..B
    },
    CelestialBody {
        id: "eris", name: "Eris", kind: BodyKind::DwarfPlanet,
        radius: 1163.0, distance: 67.78, color: "#E6E6FA",
        rotation_period: 1.08, orbital_period: 203_830.0,
        inclination: 44.04, axial_tilt: Some(0.0),
        eccentricity: Some(0.44), perihelion: Some(38.2), aphelion: Some(97.6),
        ..B
    },
    CelestialBody {
        id: "haumea", name: "Haumea", kind: BodyKind::DwarfPlanet,
        radius: 816.0, distance: 43.34, color: "#D3D3D3",
        rotation_period: 0.163, orbital_period: 103_468.0,
        inclination: 28.19, axial_tilt: Some(0.0),
        eccentricity: Some(0.189), perihelion: Some(35.16), aphelion: Some(51.52),
        ..B
    },
    CelestialBody {
        id: "makemake", name: "Makemake", kind: BodyKind::DwarfPlanet,
        radius: 715.0, distance: 45.79, color: "#8B4513",
        rotation_period: 0.95, orbital_period: 112_897.0,
        inclination: 28.96, axial_tilt: Some(0.0),
        eccentricity: Some(0.159), perihelion: Some(38.51), aphelion: Some(53.07),
        ..B
    },
];

/// Moons shown by default, keyed by parent planet id.
pub const DEFAULT_VISIBLE_MOON_PARENTS: [&str; 5] =
    ["earth", "jupiter", "saturn", "uranus", "neptune"];
