//! Civil calendar date/time snapshot.
//!
//! Provides `CivilTime`, the immutable calendar snapshot the host clock
//! hands to the conversion pipeline once per update cycle, and the
//! calendar helpers the date readout needs.

/// A civil calendar date/time with a daylight-saving flag.
///
/// `month` is 1-based (January = 1). `second` may be 60 to carry a
/// leap second through the pipeline without clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivilTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub dst: bool,
}

impl CivilTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            dst: false,
        }
    }

    /// Fraction of the day past midnight, in [0, 1).
    pub fn day_fraction(&self) -> f64 {
        let hours =
            self.hour as f64 + self.minute as f64 / 60.0 + self.second as f64 / 3600.0;
        hours / 24.0
    }

    /// 1-based ordinal day of the year (Gregorian leap rule).
    pub fn day_of_year(&self) -> u32 {
        const CUMULATIVE: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];
        let mut doy = CUMULATIVE[self.month as usize - 1] + self.day;
        if self.month > 2 && is_leap_year(self.year) {
            doy += 1;
        }
        doy
    }
}

/// Gregorian leap year test.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Local and UTC snapshots of the same instant, taken once per cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockSnapshot {
    pub local: CivilTime,
    pub utc: CivilTime,
}

/// Day of the week, derived from the integer Modified Julian Date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// Weekday of an integer MJD day number. MJD 0 (1858-Nov-17) was a Wednesday.
    pub fn from_mjd_day(mjd_day: i64) -> Self {
        match (mjd_day + 3).rem_euclid(7) {
            0 => Self::Sunday,
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            _ => Self::Saturday,
        }
    }

    /// Three-letter English abbreviation, as the date readout prints it.
    pub fn abbrev(self) -> &'static str {
        match self {
            Self::Sunday => "Sun",
            Self::Monday => "Mon",
            Self::Tuesday => "Tue",
            Self::Wednesday => "Wed",
            Self::Thursday => "Thu",
            Self::Friday => "Fri",
            Self::Saturday => "Sat",
        }
    }
}
