//! Apsidal statistics over the constants table.
//!
//! Extremes are taken over the transneptunian objects only, by a linear scan
//! in iteration order with strict comparisons, so on ties the first body
//! encountered wins.

use serde::Serialize;

use crate::api::types::BodyKind;
use crate::catalog::CelestialBody;

/// Heliocentric distance below which a planet counts as inner (AU).
pub const INNER_PLANET_LIMIT_AU: f64 = 2.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrbitRegion {
    InnerPlanets,
    OuterPlanets,
    Transneptunian,
}

/// Extent of an orbit, falling back to the mean distance for missing apsides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrbitalVariation {
    pub min_distance: f64,
    pub max_distance: f64,
    /// `(max - min) / min · 100`.
    pub variation_percent: f64,
}

pub fn orbital_variation(body: &CelestialBody) -> OrbitalVariation {
    let min = body.perihelion.unwrap_or(body.distance);
    let max = body.aphelion.unwrap_or(body.distance);
    OrbitalVariation {
        min_distance: min,
        max_distance: max,
        variation_percent: (max - min) / min * 100.0,
    }
}

/// Beyond Neptune on average but with a perihelion inside its orbit.
pub fn crosses_neptune_orbit(body: &CelestialBody, neptune_semi_major_axis: f64) -> bool {
    match body.perihelion {
        Some(q) => body.distance > neptune_semi_major_axis && q < neptune_semi_major_axis,
        None => false,
    }
}

/// Panel grouping. Moons and belt asteroids belong to no region.
pub fn region_of(body: &CelestialBody, neptune_semi_major_axis: f64) -> Option<OrbitRegion> {
    if body.parent != Some("sun") {
        return None;
    }
    match body.kind {
        BodyKind::Planet if body.distance < INNER_PLANET_LIMIT_AU => {
            Some(OrbitRegion::InnerPlanets)
        }
        BodyKind::Planet => Some(OrbitRegion::OuterPlanets),
        BodyKind::DwarfPlanet if body.distance > neptune_semi_major_axis => {
            Some(OrbitRegion::Transneptunian)
        }
        _ => None,
    }
}

/// Per-body row of the analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApsidalEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub perihelion: f64,
    pub aphelion: f64,
    pub eccentricity: f64,
    pub variation_percent: f64,
    pub region: Option<OrbitRegion>,
    pub crosses_neptune_orbit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Extreme {
    pub id: &'static str,
    pub value: f64,
}

/// Extremes among the transneptunian entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ApsidalExtremes {
    pub max_eccentricity: Option<Extreme>,
    pub max_aphelion: Option<Extreme>,
    pub min_perihelion: Option<Extreme>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ApsidalReport {
    /// Bodies with both apsides, in input order.
    pub entries: Vec<ApsidalEntry>,
    pub extremes: ApsidalExtremes,
}

impl ApsidalReport {
    pub fn entry(&self, id: &str) -> Option<&ApsidalEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn in_region(&self, region: OrbitRegion) -> impl Iterator<Item = &ApsidalEntry> {
        self.entries.iter().filter(move |e| e.region == Some(region))
    }

    /// Ids of bodies flagged as able to come inside Neptune's orbit.
    pub fn neptune_crossers(&self) -> Vec<&'static str> {
        self.entries
            .iter()
            .filter(|e| e.crosses_neptune_orbit)
            .map(|e| e.id)
            .collect()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Keep `current` unless `candidate` is strictly better.
fn keep_first(
    current: &mut Option<Extreme>,
    candidate: Extreme,
    better: impl Fn(f64, f64) -> bool,
) {
    match current {
        Some(best) if !better(candidate.value, best.value) => {}
        _ => *current = Some(candidate),
    }
}

/// Variation, Neptune flag and region for every body with both apsides,
/// plus the extremes among the transneptunian ones.
pub fn apsidal_analysis<'a>(
    bodies: impl IntoIterator<Item = &'a CelestialBody>,
    neptune_semi_major_axis: f64,
) -> ApsidalReport {
    let mut report = ApsidalReport::default();
    for body in bodies {
        let Some((q, big_q)) = body.apsides() else {
            continue;
        };
        let eccentricity = body
            .eccentricity
            .unwrap_or((big_q - q) / (big_q + q));
        let entry = ApsidalEntry {
            id: body.id,
            name: body.name,
            perihelion: q,
            aphelion: big_q,
            eccentricity,
            variation_percent: (big_q - q) / q * 100.0,
            region: region_of(body, neptune_semi_major_axis),
            crosses_neptune_orbit: crosses_neptune_orbit(body, neptune_semi_major_axis),
        };

        if entry.region == Some(OrbitRegion::Transneptunian) {
            let x = &mut report.extremes;
            let e = Extreme { id: body.id, value: eccentricity };
            keep_first(&mut x.max_eccentricity, e, |a, b| a > b);
            keep_first(&mut x.max_aphelion, Extreme { id: body.id, value: big_q }, |a, b| a > b);
            keep_first(&mut x.min_perihelion, Extreme { id: body.id, value: q }, |a, b| a < b);
        }

        report.entries.push(entry);
    }
    log::debug!("apsidal analysis: {} bodies", report.entries.len());
    report
}
