//! Kepler's equation. Pure math, no catalog dependencies.
//!
//! Uses f64 throughout; callers convert to f32 only when packing frame buffers.

use std::f64::consts::{PI, TAU};

/// Default convergence tolerance for [`solve_eccentric_anomaly`] (radians).
pub const KEPLER_TOLERANCE: f64 = 1e-12;
/// Default iteration cap for [`solve_eccentric_anomaly`].
pub const KEPLER_MAX_ITERATIONS: u32 = 50;

/// Eccentricity above which Newton's method starts from π instead of M.
const HIGH_ECCENTRICITY: f64 = 0.8;

/// Panics unless `eccentricity` describes a bound ellipse.
#[inline]
pub fn assert_bound_orbit(eccentricity: f64) {
    assert!(
        (0.0..1.0).contains(&eccentricity),
        "eccentricity {eccentricity} is outside [0, 1); only bound elliptical orbits are supported"
    );
}

/// Mean anomaly in [0, 2π) after `days` of an orbit lasting `period_days`.
/// The sign of the period is ignored; retrograde handling belongs to the caller.
pub fn mean_anomaly(days: f64, period_days: f64) -> f64 {
    assert!(
        period_days != 0.0 && period_days.is_finite(),
        "orbital period must be non-zero and finite, got {period_days}"
    );
    TAU * (days / period_days.abs()).rem_euclid(1.0)
}

/// Solve Kepler's equation `E - e·sin(E) = M` by Newton-Raphson with the
/// default tolerance and iteration cap.
pub fn solve_eccentric_anomaly(mean_anomaly: f64, eccentricity: f64) -> f64 {
    solve_eccentric_anomaly_with(
        mean_anomaly,
        eccentricity,
        KEPLER_TOLERANCE,
        KEPLER_MAX_ITERATIONS,
    )
}

/// Newton-Raphson on Kepler's equation, stopping once the correction drops
/// below `tolerance` or after `max_iterations`, returning the best estimate.
/// `e == 0` returns `mean_anomaly` untouched.
pub fn solve_eccentric_anomaly_with(
    mean_anomaly: f64,
    eccentricity: f64,
    tolerance: f64,
    max_iterations: u32,
) -> f64 {
    assert_bound_orbit(eccentricity);
    if eccentricity == 0.0 {
        return mean_anomaly;
    }

    let mut ea = if eccentricity > HIGH_ECCENTRICITY {
        PI
    } else {
        mean_anomaly
    };
    for _ in 0..max_iterations {
        let delta = (ea - eccentricity * ea.sin() - mean_anomaly) / (1.0 - eccentricity * ea.cos());
        ea -= delta;
        if delta.abs() < tolerance {
            break;
        }
    }
    ea
}

/// True anomaly from eccentric anomaly (half-angle form).
pub fn true_anomaly(eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    if eccentricity == 0.0 {
        return eccentric_anomaly;
    }
    let half = eccentric_anomaly / 2.0;
    2.0 * ((1.0 + eccentricity).sqrt() * half.sin()).atan2((1.0 - eccentricity).sqrt() * half.cos())
}

/// Distance from the focus as a fraction of the semi-major axis.
#[inline]
pub fn radius_factor(eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    1.0 - eccentricity * eccentric_anomaly.cos()
}

/// Point on an orbit expressed in its own plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnomalySolution {
    pub mean: f64,
    pub eccentric: f64,
    pub true_anomaly: f64,
    /// `1 - e·cos(E)`; multiply by the semi-major axis for the radius.
    pub radius_factor: f64,
}

/// Run the whole solver chain for one mean anomaly.
pub fn solve(
    mean_anomaly: f64,
    eccentricity: f64,
    tolerance: f64,
    max_iterations: u32,
) -> AnomalySolution {
    let eccentric =
        solve_eccentric_anomaly_with(mean_anomaly, eccentricity, tolerance, max_iterations);
    AnomalySolution {
        mean: mean_anomaly,
        eccentric,
        true_anomaly: true_anomaly(eccentric, eccentricity),
        radius_factor: radius_factor(eccentric, eccentricity),
    }
}
