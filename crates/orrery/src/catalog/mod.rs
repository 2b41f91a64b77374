//! The constants table and read-only queries over it.
//!
//! Loaded once, never mutated; every consumer borrows from the same
//! [`Catalog`].

pub mod asteroids;
pub mod body;
pub mod data;
pub mod meteorites;

use std::collections::HashMap;

use serde::Serialize;

use crate::api::types::{BodyKind, CatalogGroup};
pub use body::CelestialBody;

/// Integrity problems found by [`Catalog::validate`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("expected exactly one root body, found {0}")]
    RootCount(usize),

    #[error("root body `{id}` must have orbital period 0, has {period}")]
    RootPeriod { id: &'static str, period: f64 },

    #[error("body `{id}` references unknown parent `{parent}`")]
    MissingParent { id: &'static str, parent: &'static str },

    #[error("body `{id}` is not rooted at the star (parent chain loops)")]
    Unrooted { id: &'static str },

    #[error("body `{id}` has unbound eccentricity {eccentricity}")]
    Eccentricity { id: &'static str, eccentricity: f64 },

    #[error("duplicate body id `{0}`")]
    DuplicateId(&'static str),
}

/// A table row plus the section it came from.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub body: &'static CelestialBody,
    pub group: CatalogGroup,
}

/// Summary counts for the info panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub planets: usize,
    pub moons: usize,
    pub dwarf_planets: usize,
    pub asteroids: usize,
    pub kuiper_belt_objects: usize,
    pub asteroid_belt_objects: usize,
    pub total: usize,
}

/// Immutable lookup over every body in the constants table.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<&'static str, usize>,
}

impl Catalog {
    /// Build from explicit sections, in iteration order.
    pub fn from_sections(sections: &[(&'static [CelestialBody], CatalogGroup)]) -> Self {
        let mut entries = Vec::new();
        let mut index = HashMap::new();
        for &(bodies, group) in sections {
            for body in bodies {
                if index.insert(body.id, entries.len()).is_some() {
                    log::warn!("duplicate catalog id `{}`, later entry wins lookups", body.id);
                }
                entries.push(CatalogEntry { body, group });
            }
        }
        Self { entries, index }
    }

    /// The built-in solar system table.
    pub fn solar_system() -> Self {
        let catalog = Self::from_sections(&[
            (data::SOLAR_SYSTEM, CatalogGroup::MainSystem),
            (data::ASTEROID_BELT, CatalogGroup::AsteroidBelt),
            (data::KUIPER_BELT, CatalogGroup::KuiperBelt),
            (data::DWARF_PLANETS, CatalogGroup::DwarfPlanets),
        ]);
        log::debug!("catalog loaded: {} bodies", catalog.len());
        catalog
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&'static CelestialBody> {
        self.index.get(id).map(|&i| self.entries[i].body)
    }

    pub fn group_of(&self, id: &str) -> Option<CatalogGroup> {
        self.index.get(id).map(|&i| self.entries[i].group)
    }

    /// The body `body` orbits, if any.
    pub fn parent_of(&self, body: &CelestialBody) -> Option<&'static CelestialBody> {
        body.parent.and_then(|id| self.get(id))
    }

    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    pub fn bodies(&self) -> impl Iterator<Item = &'static CelestialBody> + '_ {
        self.entries.iter().map(|e| e.body)
    }

    pub fn in_group(
        &self,
        group: CatalogGroup,
    ) -> impl Iterator<Item = &'static CelestialBody> + '_ {
        self.entries.iter().filter(move |e| e.group == group).map(|e| e.body)
    }

    /// The star at the origin.
    pub fn root(&self) -> Option<&'static CelestialBody> {
        self.bodies().find(|b| b.parent.is_none())
    }

    /// Planets orbiting the star, innermost first.
    pub fn planets_ordered(&self) -> Vec<&'static CelestialBody> {
        let mut planets: Vec<_> = self
            .bodies()
            .filter(|b| b.kind == BodyKind::Planet && b.parent == Some("sun"))
            .collect();
        planets.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        planets
    }

    /// Entries of the dwarf-planet section, in table order.
    pub fn dwarf_planets(&self) -> Vec<&'static CelestialBody> {
        self.in_group(CatalogGroup::DwarfPlanets).collect()
    }

    /// Moons orbiting `parent_id`, nearest first.
    pub fn moons_of(&self, parent_id: &str) -> Vec<&'static CelestialBody> {
        let mut moons: Vec<_> = self
            .bodies()
            .filter(|b| b.kind == BodyKind::Moon && b.parent == Some(parent_id))
            .collect();
        moons.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        moons
    }

    pub fn stats(&self) -> CatalogStats {
        let count = |kind: BodyKind| self.bodies().filter(|b| b.kind == kind).count();
        CatalogStats {
            planets: count(BodyKind::Planet),
            moons: count(BodyKind::Moon),
            dwarf_planets: count(BodyKind::DwarfPlanet),
            asteroids: count(BodyKind::Asteroid),
            kuiper_belt_objects: self.in_group(CatalogGroup::KuiperBelt).count(),
            asteroid_belt_objects: self.in_group(CatalogGroup::AsteroidBelt).count(),
            total: self.len(),
        }
    }

    /// Check the table invariants: one root with period 0, every parent
    /// resolvable and rooted at the star, bound eccentricities, unique ids.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.index.len() != self.entries.len() {
            let mut seen = std::collections::HashSet::new();
            for body in self.bodies() {
                if !seen.insert(body.id) {
                    return Err(CatalogError::DuplicateId(body.id));
                }
            }
        }

        let roots: Vec<_> = self.bodies().filter(|b| b.parent.is_none()).collect();
        if roots.len() != 1 {
            return Err(CatalogError::RootCount(roots.len()));
        }
        let root = roots[0];
        if root.orbital_period != 0.0 {
            return Err(CatalogError::RootPeriod { id: root.id, period: root.orbital_period });
        }

        for body in self.bodies() {
            if let Some(e) = body.eccentricity {
                if !(0.0..1.0).contains(&e) {
                    return Err(CatalogError::Eccentricity { id: body.id, eccentricity: e });
                }
            }

            let mut current = body;
            let mut hops = 0;
            while let Some(parent_id) = current.parent {
                current = self
                    .get(parent_id)
                    .ok_or(CatalogError::MissingParent { id: current.id, parent: parent_id })?;
                hops += 1;
                if hops > self.entries.len() {
                    return Err(CatalogError::Unrooted { id: body.id });
                }
            }
        }
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::solar_system()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_is_valid() {
        let catalog = Catalog::solar_system();
        assert_eq!(catalog.validate(), Ok(()));
    }

    #[test]
    fn single_root_is_the_sun() {
        let catalog = Catalog::solar_system();
        let root = catalog.root().unwrap();
        assert_eq!(root.id, "sun");
        assert_eq!(root.orbital_period, 0.0);
    }

    #[test]
    fn planets_in_order() {
        let catalog = Catalog::solar_system();
        let names: Vec<_> = catalog.planets_ordered().iter().map(|b| b.id).collect();
        assert_eq!(
            names,
            ["mercury", "venus", "earth", "mars", "jupiter", "saturn", "uranus", "neptune"]
        );
    }

    #[test]
    fn moons_sorted_by_distance() {
        let catalog = Catalog::solar_system();
        let ids: Vec<_> = catalog.moons_of("jupiter").iter().map(|b| b.id).collect();
        assert_eq!(ids, ["io", "europa", "ganymede", "callisto"]);
        assert!(catalog.moons_of("mercury").is_empty());
    }

    #[test]
    fn charon_orbits_pluto() {
        let catalog = Catalog::solar_system();
        let charon = catalog.get("charon").unwrap();
        assert_eq!(catalog.parent_of(charon).unwrap().id, "pluto");
        assert_eq!(catalog.group_of("charon"), Some(CatalogGroup::KuiperBelt));
    }

    #[test]
    fn stats_count_classes() {
        let stats = Catalog::solar_system().stats();
        assert_eq!(stats.planets, 8);
        assert_eq!(stats.moons, 17);
        assert_eq!(stats.asteroids, 4);
        assert_eq!(stats.dwarf_planets, 8);
        assert_eq!(stats.kuiper_belt_objects, 5);
        assert_eq!(stats.total, 38);
    }

    static ORPHAN: &[CelestialBody] = &[
        CelestialBody { id: "sun", parent: None, ..CelestialBody::BLANK },
        CelestialBody { id: "lost", parent: Some("vulcan"), ..CelestialBody::BLANK },
    ];

    #[test]
    fn missing_parent_detected() {
        let catalog = Catalog::from_sections(&[(ORPHAN, CatalogGroup::MainSystem)]);
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::MissingParent { id: "lost", parent: "vulcan" })
        );
    }

    static TWO_STARS: &[CelestialBody] = &[
        CelestialBody { id: "a", parent: None, ..CelestialBody::BLANK },
        CelestialBody { id: "b", parent: None, ..CelestialBody::BLANK },
    ];

    #[test]
    fn two_roots_rejected() {
        let catalog = Catalog::from_sections(&[(TWO_STARS, CatalogGroup::MainSystem)]);
        assert_eq!(catalog.validate(), Err(CatalogError::RootCount(2)));
    }

    static LOOP: &[CelestialBody] = &[
        CelestialBody { id: "sun", parent: None, ..CelestialBody::BLANK },
        CelestialBody { id: "x", parent: Some("y"), ..CelestialBody::BLANK },
        CelestialBody { id: "y", parent: Some("x"), ..CelestialBody::BLANK },
    ];

    #[test]
    fn parent_loop_rejected() {
        let catalog = Catalog::from_sections(&[(LOOP, CatalogGroup::MainSystem)]);
        assert_eq!(catalog.validate(), Err(CatalogError::Unrooted { id: "x" }));
    }
}
