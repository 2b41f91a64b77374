pub mod api;
pub mod catalog;
pub mod config;
pub mod core;
pub mod display;
pub mod orbit;
pub mod rng;
pub mod simulation;
pub mod view;

// Re-export key types at crate root for convenience
pub use api::types::{AsteroidClass, BodyKind, CatalogGroup, MeteoriteKind};
pub use catalog::asteroids::{famous_asteroids, Asteroid};
pub use catalog::meteorites::{famous_meteorites, random_meteorite, Meteorite};
pub use catalog::{Catalog, CatalogError, CatalogStats, CelestialBody};
pub use config::{ConfigError, OrbitConfig, OrreryConfig, J2000};
pub use core::time::FrameClock;
pub use display::{display_radius, DisplayProfile};
pub use orbit::apsides::{apsidal_analysis, ApsidalReport};
pub use orbit::kepler::solve_eccentric_anomaly;
pub use orbit::position::{
    position_from_apsides, position_of_asteroid, position_of_moon, position_of_planet_like_body,
};
pub use orbit::trajectory::{generate_trajectory, meteorite_trail};
pub use orbit::{Orbiter, Satellite};
pub use simulation::{
    BodyInstance, Command, FrameBuffers, Layer, Orrery, SimulationState, SimulationUpdate,
};
