//! Civil UTC → Modified Julian Date.
//!
//! The MJD epoch is 1858-Nov-17 00:00 UTC; the fractional part encodes
//! time of day. Valid for proleptic Gregorian dates.
//!
//! Intermediate quotients truncate toward zero on the floating-point
//! value, not mathematical floor. This matches the classic formulation
//! and matters when the shifted year goes negative, so it must not be
//! "fixed" to `floor`.

use crate::civil::CivilTime;

/// Convert a UTC civil time to a Modified Julian Date.
///
/// Uses the standard algorithm with March as the first computational
/// month: January and February count as months 10 and 11 of the
/// previous year, aligning the century/day-of-century split with the
/// leap-day boundary.
pub fn civil_to_mjd(utc: &CivilTime) -> f64 {
    let day_fraction = utc.day_fraction();

    let (m, y) = if utc.month <= 2 {
        (utc.month + 9, utc.year - 1)
    } else {
        (utc.month - 3, utc.year)
    };

    let yy = y % 100;
    let c = (y - yy) / 100;
    let x1 = (146_097.0 * c as f64 / 4.0).trunc();
    let x2 = (1461.0 * yy as f64 / 4.0).trunc();
    let x3 = ((153.0 * m as f64 + 2.0) / 5.0).trunc();

    x1 + x2 + x3 + utc.day as f64 - 678_882.0 + day_fraction
}

/// Integer MJD day number (truncated toward zero).
pub fn mjd_day(mjd: f64) -> i64 {
    mjd.trunc() as i64
}
