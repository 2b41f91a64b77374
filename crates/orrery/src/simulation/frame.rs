//! Per-frame buffers read by the renderer.

use bytemuck::{Pod, Zeroable};
use glam::DVec3;

use super::state::SimulationState;
use crate::api::types::{parse_hex_color, BodyKind, CatalogGroup};
use crate::catalog::asteroids::Asteroid;
use crate::catalog::meteorites::Meteorite;
use crate::catalog::Catalog;
use crate::config::OrreryConfig;
use crate::display::DisplayProfile;
use crate::orbit::position::position_of_asteroid;
use crate::orbit::trajectory::meteorite_trail;

/// Kind tag for meteorites; catalog kinds use [`BodyKind::tag`].
pub const METEORITE_TAG: f32 = 5.0;

/// One visible body. Must match the JS side: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct BodyInstance {
    /// Scene position, Y up.
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Rendered radius in scene units.
    pub radius: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// [`BodyKind::tag`] or [`METEORITE_TAG`].
    pub kind: f32,
}

impl BodyInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn new(position: DVec3, radius: f64, color: &str, kind: f32) -> Self {
        let p = position.as_vec3();
        let (r, g, b) = parse_hex_color(color);
        Self { x: p.x, y: p.y, z: p.z, radius: radius as f32, r, g, b, kind }
    }

    pub fn position(&self) -> DVec3 {
        DVec3::new(self.x as f64, self.y as f64, self.z as f64)
    }
}

/// Bounded list of body instances, rebuilt every frame.
#[derive(Debug)]
pub struct InstanceBuffer {
    instances: Vec<BodyInstance>,
    capacity: usize,
    dropped: usize,
}

impl InstanceBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
            capacity,
            dropped: 0,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.dropped = 0;
    }

    /// Append unless full. Returns whether the instance was kept.
    pub fn push(&mut self, instance: BodyInstance) -> bool {
        if self.instances.len() >= self.capacity {
            self.dropped += 1;
            return false;
        }
        self.instances.push(instance);
        true
    }

    pub fn instances(&self) -> &[BodyInstance] {
        &self.instances
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Instances that did not fit this frame.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Flat `f32` view of the instance data.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }

    /// Raw pointer to instance data for reads from wasm memory.
    pub fn instances_ptr(&self) -> *const f32 {
        self.as_floats().as_ptr()
    }
}

/// Polylines (orbit paths, meteorite trails) packed as xyz triples, with
/// the point count of each line in `segments`.
#[derive(Debug, Default)]
pub struct PathBuffer {
    points: Vec<f32>,
    segments: Vec<u32>,
}

impl PathBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.segments.clear();
    }

    pub fn push_path(&mut self, path: &[DVec3]) {
        if path.is_empty() {
            return;
        }
        for p in path {
            let p = p.as_vec3();
            self.points.extend_from_slice(&[p.x, p.y, p.z]);
        }
        self.segments.push(path.len() as u32);
    }

    pub fn points(&self) -> &[f32] {
        &self.points
    }

    pub fn segments(&self) -> &[u32] {
        &self.segments
    }

    pub fn point_count(&self) -> u32 {
        (self.points.len() / 3) as u32
    }
}

/// Everything the renderer reads after a tick.
#[derive(Debug)]
pub struct FrameBuffers {
    pub bodies: InstanceBuffer,
    pub paths: PathBuffer,
    /// Overflow count last logged, so a full buffer warns once, not per frame.
    reported_dropped: usize,
}

impl FrameBuffers {
    pub fn new(max_instances: usize) -> Self {
        Self {
            bodies: InstanceBuffer::new(max_instances),
            paths: PathBuffer::new(),
            reported_dropped: 0,
        }
    }

    /// Whether this frame's overflow differs from the last one reported.
    fn overflow_changed(&mut self) -> bool {
        let dropped = self.bodies.dropped();
        let changed = dropped != self.reported_dropped;
        self.reported_dropped = dropped;
        changed
    }
}

/// Inputs of one frame, borrowed from the simulation.
pub struct FrameInputs<'a> {
    pub catalog: &'a Catalog,
    pub state: &'a SimulationState,
    pub config: &'a OrreryConfig,
    pub profile: &'a DisplayProfile,
    pub asteroids: &'a [Asteroid],
    pub meteorites: &'a [Meteorite],
}

fn group_visible(group: CatalogGroup, state: &SimulationState) -> bool {
    match group {
        CatalogGroup::MainSystem | CatalogGroup::DwarfPlanets => true,
        CatalogGroup::AsteroidBelt => state.visibility.asteroid_belt,
        CatalogGroup::KuiperBelt => state.visibility.kuiper_belt,
    }
}

/// Rebuild `out` for the state's current date.
///
/// Catalog bodies come first in table order, then the followed asteroid,
/// then active meteorites.
pub fn build_frame(inputs: &FrameInputs<'_>, out: &mut FrameBuffers) {
    let FrameInputs { catalog, state, config, profile, asteroids, meteorites } = *inputs;
    let date = state.current_date;
    let orbit = &config.orbit;
    out.bodies.clear();
    out.paths.clear();

    for entry in catalog.entries() {
        let body = entry.body;
        if !group_visible(entry.group, state) {
            continue;
        }
        let moons_shown = body.parent.is_some_and(|p| state.visibility.moons_of(p));
        if body.kind == BodyKind::Moon && !moons_shown {
            continue;
        }
        let Some(position) = catalog.position_of_body(body, date, orbit) else {
            continue;
        };
        out.bodies.push(BodyInstance::new(
            position,
            profile.display_radius(body),
            body.color,
            body.kind.tag(),
        ));
    }

    if let Some(id) = state.selected_asteroid.as_deref() {
        match asteroids.iter().find(|a| a.id == id) {
            Some(asteroid) => {
                out.bodies.push(BodyInstance::new(
                    position_of_asteroid(asteroid, date, orbit),
                    profile.fallback_radius,
                    asteroid.class.color(),
                    BodyKind::Asteroid.tag(),
                ));
                if state.visibility.asteroid_path {
                    out.paths.push_path(&asteroid.trajectory);
                }
            }
            None => log::warn!("selected asteroid `{id}` is not loaded"),
        }
    }

    if state.visibility.meteorites {
        for m in meteorites.iter().filter(|m| m.is_active) {
            out.bodies.push(BodyInstance::new(
                m.position_at(date, date, orbit),
                m.display_size(),
                &m.color,
                METEORITE_TAG,
            ));
            if state.visibility.meteorite_trails {
                let trail = meteorite_trail(
                    m,
                    date,
                    config.meteorite_trail_samples,
                    config.meteorite_trail_step_hours,
                    orbit,
                );
                out.paths.push_path(&trail);
            }
        }
    }

    if out.overflow_changed() && out.bodies.dropped() > 0 {
        log::warn!(
            "instance buffer full: {} bodies dropped (capacity {})",
            out.bodies.dropped(),
            config.max_instances
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::asteroids::famous_asteroids;
    use crate::catalog::meteorites::famous_meteorites;
    use crate::config::J2000;

    struct Fixture {
        catalog: Catalog,
        state: SimulationState,
        config: OrreryConfig,
        asteroids: Vec<Asteroid>,
        meteorites: Vec<Meteorite>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                catalog: Catalog::solar_system(),
                state: SimulationState::new(J2000),
                config: OrreryConfig::default(),
                asteroids: famous_asteroids(),
                meteorites: famous_meteorites(),
            }
        }

        fn build(&self) -> FrameBuffers {
            let mut out = FrameBuffers::new(self.config.max_instances);
            let inputs = FrameInputs {
                catalog: &self.catalog,
                state: &self.state,
                config: &self.config,
                profile: DisplayProfile::builtin(),
                asteroids: &self.asteroids,
                meteorites: &self.meteorites,
            };
            build_frame(&inputs, &mut out);
            out
        }
    }

    fn count_kind(out: &FrameBuffers, kind: f32) -> usize {
        out.bodies.instances().iter().filter(|i| i.kind == kind).count()
    }

    #[test]
    fn body_instance_is_8_floats() {
        assert_eq!(std::mem::size_of::<BodyInstance>(), 32);
        assert_eq!(BodyInstance::STRIDE_BYTES, 32);
    }

    #[test]
    fn default_frame_contents() {
        let f = Fixture::new();
        let out = f.build();
        // Charon stays hidden: Pluto has no moon toggle by default.
        assert_eq!(count_kind(&out, BodyKind::Moon.tag()), 16);
        assert_eq!(count_kind(&out, BodyKind::Star.tag()), 1);
        assert_eq!(count_kind(&out, BodyKind::Planet.tag()), 8);
        assert_eq!(count_kind(&out, METEORITE_TAG), 0);
        assert_eq!(out.bodies.instance_count(), 37);
        assert_eq!(out.bodies.as_floats().len(), 37 * 8);
    }

    #[test]
    fn sun_first_at_origin() {
        let out = Fixture::new().build();
        let sun = out.bodies.instances()[0];
        assert_eq!(sun.position(), DVec3::ZERO);
        assert_eq!(sun.radius, 1.5);
        assert_eq!(sun.kind, 0.0);
    }

    #[test]
    fn belt_toggles_filter_groups() {
        let mut f = Fixture::new();
        f.state.visibility.asteroid_belt = false;
        f.state.visibility.kuiper_belt = false;
        let out = f.build();
        // 4 belt asteroids and 4 visible Kuiper objects gone
        assert_eq!(out.bodies.instance_count(), 37 - 8);
    }

    #[test]
    fn moon_toggle_hides_moons() {
        let mut f = Fixture::new();
        f.state.visibility.moons.insert("jupiter".into(), false);
        let out = f.build();
        assert_eq!(count_kind(&out, BodyKind::Moon.tag()), 12);
    }

    #[test]
    fn followed_asteroid_and_path() {
        let mut f = Fixture::new();
        f.asteroids[0].refresh_trajectory(J2000, 50, &f.config.orbit);
        f.state.selected_asteroid = Some(f.asteroids[0].id.clone());
        let out = f.build();
        assert_eq!(out.bodies.instance_count(), 38);
        assert!(out.paths.segments().is_empty());

        f.state.visibility.asteroid_path = true;
        let out = f.build();
        assert_eq!(out.paths.segments(), [50]);
        assert_eq!(out.paths.point_count(), 50);
    }

    #[test]
    fn active_meteorites_with_trails() {
        let mut f = Fixture::new();
        f.meteorites[0].is_active = true;
        f.meteorites[4].is_active = true;
        let out = f.build();
        assert_eq!(count_kind(&out, METEORITE_TAG), 2);
        assert_eq!(out.paths.segments(), [41, 41]);

        f.state.visibility.meteorite_trails = false;
        assert!(f.build().paths.segments().is_empty());
        f.state.visibility.meteorites = false;
        assert_eq!(count_kind(&f.build(), METEORITE_TAG), 0);
    }

    #[test]
    fn capacity_is_enforced() {
        let mut f = Fixture::new();
        f.config.max_instances = 10;
        let out = f.build();
        assert_eq!(out.bodies.instance_count(), 10);
        assert_eq!(out.bodies.dropped(), 27);
    }

    #[test]
    fn overflow_reported_only_when_it_changes() {
        let mut f = Fixture::new();
        f.config.max_instances = 10;
        let mut out = FrameBuffers::new(f.config.max_instances);
        out.bodies.push(BodyInstance::default());
        for _ in 0..11 {
            out.bodies.push(BodyInstance::default());
        }
        assert!(out.overflow_changed());
        assert!(!out.overflow_changed());

        out.bodies.clear();
        assert!(out.overflow_changed());
        assert!(!out.overflow_changed());

        let inputs = FrameInputs {
            catalog: &f.catalog,
            state: &f.state,
            config: &f.config,
            profile: DisplayProfile::builtin(),
            asteroids: &f.asteroids,
            meteorites: &f.meteorites,
        };
        build_frame(&inputs, &mut out);
        assert!(!out.overflow_changed());
        assert_eq!(out.bodies.dropped(), 27);
    }
}
