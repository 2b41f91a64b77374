use time::{Duration, OffsetDateTime, PrimitiveDateTime};

use crate::config::SECONDS_PER_DAY;

/// Earliest and latest instants a simulated date can hold.
pub const MIN_DATE: OffsetDateTime = PrimitiveDateTime::MIN.assume_utc();
pub const MAX_DATE: OffsetDateTime = PrimitiveDateTime::MAX.assume_utc();

/// Fractional days from `epoch` to `date` (negative before the epoch).
pub fn days_between(epoch: OffsetDateTime, date: OffsetDateTime) -> f64 {
    (date - epoch).as_seconds_f64() / SECONDS_PER_DAY
}

/// Shift a date by a fractional number of days, or `None` when the result
/// falls outside [`MIN_DATE`, `MAX_DATE`].
pub fn checked_add_days(date: OffsetDateTime, days: f64) -> Option<OffsetDateTime> {
    let shift = Duration::checked_seconds_f64(days * SECONDS_PER_DAY)?;
    date.checked_add(shift)
}

/// Shift a date by a fractional number of days, saturating at the ends of
/// the representable range. NaN leaves the date unchanged.
pub fn add_days(date: OffsetDateTime, days: f64) -> OffsetDateTime {
    if days.is_nan() {
        return date;
    }
    checked_add_days(date, days).unwrap_or(if days < 0.0 { MIN_DATE } else { MAX_DATE })
}

/// Build a UTC date from JS `Date.now()` style milliseconds.
/// Out-of-range input falls back to the Unix epoch.
pub fn from_unix_millis(millis: f64) -> OffsetDateTime {
    let nanos = (millis * 1_000_000.0) as i128;
    OffsetDateTime::from_unix_timestamp_nanos(nanos).unwrap_or_else(|err| {
        log::warn!("timestamp {millis} ms out of range ({err}), using Unix epoch");
        OffsetDateTime::UNIX_EPOCH
    })
}

/// Milliseconds since the Unix epoch, for handing dates back to JS.
pub fn to_unix_millis(date: OffsetDateTime) -> f64 {
    (date.unix_timestamp_nanos() / 1_000_000) as f64
}

/// Frame-delta clock for simulated time.
///
/// Converts real frame deltas into simulated days. Simulated time advances by
/// exactly `dt * time_scale` per frame regardless of frame rate; single frame
/// deltas are capped so a backgrounded tab does not jump years ahead.
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Largest accepted real frame delta in seconds.
    max_dt: f64,
    /// Total real seconds accumulated while playing.
    elapsed: f64,
}

impl FrameClock {
    pub fn new(max_dt: f64) -> Self {
        Self { max_dt, elapsed: 0.0 }
    }

    /// Feed one real frame delta. Returns the simulated days to advance.
    pub fn advance(&mut self, frame_dt: f64, time_scale: f64) -> f64 {
        if !(frame_dt.is_finite() && frame_dt > 0.0) {
            return 0.0;
        }
        let dt = frame_dt.min(self.max_dt);
        self.elapsed += dt;
        dt * time_scale
    }

    /// Real seconds the clock has advanced in total.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn max_dt(&self) -> f64 {
        self.max_dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::J2000;
    use time::macros::datetime;

    #[test]
    fn days_between_half_day() {
        let date = datetime!(2000-01-02 0:00 UTC);
        assert!((days_between(J2000, date) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn days_between_is_signed() {
        let date = datetime!(1999-12-31 12:00 UTC);
        assert!((days_between(J2000, date) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn add_days_round_trips() {
        let later = add_days(J2000, 365.256363004);
        assert!((days_between(J2000, later) - 365.256363004).abs() < 1e-9);
    }

    #[test]
    fn add_days_saturates_at_range_ends() {
        let late = datetime!(9999-12-01 0:00 UTC);
        assert_eq!(checked_add_days(late, 1e7), None);
        assert_eq!(add_days(late, 1e7), MAX_DATE);
        assert_eq!(add_days(J2000, -1e9), MIN_DATE);
        assert_eq!(add_days(J2000, f64::INFINITY), MAX_DATE);
        assert_eq!(add_days(J2000, f64::NAN), J2000);
        assert_eq!(checked_add_days(late, 30.0), Some(datetime!(9999-12-31 0:00 UTC)));
    }

    #[test]
    fn unix_millis_round_trip() {
        let date = from_unix_millis(946_728_000_000.0);
        assert_eq!(date, J2000);
        assert_eq!(to_unix_millis(date), 946_728_000_000.0);
    }

    #[test]
    fn clock_scales_by_time_scale() {
        let mut clock = FrameClock::new(0.25);
        let days = clock.advance(0.1, 10.0);
        assert!((days - 1.0).abs() < 1e-12);
    }

    #[test]
    fn clock_caps_long_frames() {
        let mut clock = FrameClock::new(0.25);
        let days = clock.advance(5.0, 1.0);
        assert_eq!(days, 0.25);
        assert_eq!(clock.elapsed(), 0.25);
    }

    #[test]
    fn clock_ignores_bad_deltas() {
        let mut clock = FrameClock::new(0.25);
        assert_eq!(clock.advance(-1.0, 1.0), 0.0);
        assert_eq!(clock.advance(f64::NAN, 1.0), 0.0);
        assert_eq!(clock.elapsed(), 0.0);
    }
}
