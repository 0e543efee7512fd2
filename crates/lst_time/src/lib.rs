//! Civil → sidereal time conversions for the watchface core.
//!
//! This crate provides:
//! - `CivilTime`, the calendar snapshot taken from the host clock
//! - Civil UTC → Modified Julian Date conversion
//! - MJD → Greenwich Mean Sidereal Time (IAU 1982 polynomial, in turns)
//! - GMST → Local Sidereal Time for an east-positive observer longitude
//! - Calendar helpers (weekday, day of year) used by the date readout

pub mod civil;
pub mod mjd;
pub mod sidereal;

pub use civil::{CivilTime, ClockSnapshot, Weekday};
pub use mjd::{civil_to_mjd, mjd_day};
pub use sidereal::{DUT1_SECONDS, J2000_MJD, SOLAR_TO_SIDEREAL, gmst_to_lst, mjd_to_gmst};
