//! The six display readouts and their formatting contract.
//!
//! Clock strings are 24-hour `HH:MM`. The LST readout truncates hours
//! and minutes (no rounding up across a minute boundary). MJD displays
//! as a truncated integer. The date line carries abbreviated weekday,
//! year-month-day, and ordinal day of year.

use lst_config::ObserverConfig;
use lst_time::{CivilTime, ClockSnapshot, Weekday, civil_to_mjd, gmst_to_lst, mjd_day, mjd_to_gmst};

/// One of the six text readouts on the face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Readout {
    LocalTime,
    LocalDate,
    DstFlag,
    UtcTime,
    Mjd,
    LstTime,
}

impl Readout {
    /// All readouts in display order.
    pub const ALL: [Readout; 6] = [
        Readout::LocalTime,
        Readout::LocalDate,
        Readout::DstFlag,
        Readout::UtcTime,
        Readout::Mjd,
        Readout::LstTime,
    ];
}

/// The formatted strings of one update cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadoutSet {
    pub local_time: String,
    pub local_date: String,
    pub dst_flag: String,
    pub utc_time: String,
    pub mjd: String,
    pub lst_time: String,
}

impl ReadoutSet {
    pub fn text(&self, readout: Readout) -> &str {
        match readout {
            Readout::LocalTime => &self.local_time,
            Readout::LocalDate => &self.local_date,
            Readout::DstFlag => &self.dst_flag,
            Readout::UtcTime => &self.utc_time,
            Readout::Mjd => &self.mjd,
            Readout::LstTime => &self.lst_time,
        }
    }

    /// Deliver every readout to the rendering collaborator.
    pub fn push_to(&self, sink: &mut dyn ReadoutSink) {
        for readout in Readout::ALL {
            sink.set_text(readout, self.text(readout));
        }
    }
}

/// The external rendering collaborator. Receives formatted text only.
pub trait ReadoutSink {
    fn set_text(&mut self, readout: Readout, text: &str);
}

/// Run the full conversion pipeline for one snapshot and format all
/// six readouts. Pure: the observer config is passed in by reference.
pub fn compute_readouts(snapshot: &ClockSnapshot, config: &ObserverConfig) -> ReadoutSet {
    let mjd = civil_to_mjd(&snapshot.utc);
    let gmst = mjd_to_gmst(mjd);
    let lst = gmst_to_lst(gmst, config.longitude_deg);

    ReadoutSet {
        local_time: format_clock(&snapshot.local),
        local_date: format_date(&snapshot.local),
        dst_flag: format_dst(snapshot.local.dst),
        utc_time: format_clock(&snapshot.utc),
        mjd: format_mjd(mjd),
        lst_time: format_lst(lst),
    }
}

/// 24-hour `HH:MM`.
pub fn format_clock(t: &CivilTime) -> String {
    format!("{:02}:{:02}", t.hour, t.minute)
}

/// Abbreviated weekday, ISO-like date, ordinal day of year.
pub fn format_date(t: &CivilTime) -> String {
    let weekday = Weekday::from_mjd_day(mjd_day(civil_to_mjd(t)));
    format!(
        "{} {:04}-{:02}-{:02} DOY {:03}",
        weekday.abbrev(),
        t.year,
        t.month,
        t.day,
        t.day_of_year()
    )
}

/// Fixed 3-character marker: `DST` or blank.
pub fn format_dst(dst: bool) -> String {
    if dst { "DST".to_string() } else { "   ".to_string() }
}

/// Truncated integer day count.
pub fn format_mjd(mjd: f64) -> String {
    format!("MJD {}", mjd.trunc() as i64)
}

/// `HH:MM` with truncated hours and truncated fractional minutes.
pub fn format_lst(lst_hours: f64) -> String {
    let hours = lst_hours.trunc();
    let minutes = ((lst_hours - hours) * 60.0).trunc();
    format!("{:02}:{:02}", hours as u32, minutes as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(utc: CivilTime) -> ClockSnapshot {
        ClockSnapshot { local: utc, utc }
    }

    #[test]
    fn clock_is_zero_padded() {
        let t = CivilTime::new(2024, 6, 1, 7, 5, 0);
        assert_eq!(format_clock(&t), "07:05");
    }

    #[test]
    fn lst_truncates_not_rounds() {
        // 18.6974 h is 18:41.84; the readout must show :41, not :42.
        assert_eq!(format_lst(18.697_4), "18:41");
        assert_eq!(format_lst(0.0), "00:00");
        assert_eq!(format_lst(23.999), "23:59");
    }

    #[test]
    fn mjd_truncates() {
        assert_eq!(format_mjd(51_544.99), "MJD 51544");
    }

    #[test]
    fn dst_marker_is_three_chars() {
        assert_eq!(format_dst(true), "DST");
        assert_eq!(format_dst(false), "   ");
        assert_eq!(format_dst(false).len(), 3);
    }

    #[test]
    fn date_line_y2k() {
        let t = CivilTime::new(2000, 1, 1, 12, 0, 0);
        assert_eq!(format_date(&t), "Sat 2000-01-01 DOY 001");
    }

    #[test]
    fn readouts_at_j2000_greenwich() {
        let utc = CivilTime::new(2000, 1, 1, 12, 0, 0);
        let set = compute_readouts(&snapshot(utc), &ObserverConfig::default());
        assert_eq!(set.local_time, "12:00");
        assert_eq!(set.utc_time, "12:00");
        assert_eq!(set.mjd, "MJD 51544");
        // GMST at J2000 noon ≈ 18.6974 h; Greenwich LST equals it.
        assert_eq!(set.lst_time, "18:41");
        assert_eq!(set.dst_flag, "   ");
    }

    #[test]
    fn longitude_shifts_lst_only() {
        let utc = CivilTime::new(2000, 1, 1, 12, 0, 0);
        let greenwich = compute_readouts(&snapshot(utc), &ObserverConfig::default());
        let atca = compute_readouts(
            &snapshot(utc),
            &ObserverConfig {
                longitude_deg: 149.550_138_8,
            },
        );
        assert_eq!(greenwich.utc_time, atca.utc_time);
        assert_eq!(greenwich.mjd, atca.mjd);
        assert_ne!(greenwich.lst_time, atca.lst_time);
    }

    #[test]
    fn push_to_delivers_all_six() {
        struct Capture(Vec<(Readout, String)>);
        impl ReadoutSink for Capture {
            fn set_text(&mut self, readout: Readout, text: &str) {
                self.0.push((readout, text.to_string()));
            }
        }

        let utc = CivilTime::new(2024, 3, 20, 6, 40, 0);
        let set = compute_readouts(&snapshot(utc), &ObserverConfig::default());
        let mut sink = Capture(Vec::new());
        set.push_to(&mut sink);
        assert_eq!(sink.0.len(), 6);
        assert_eq!(sink.0[0].0, Readout::LocalTime);
        assert_eq!(sink.0[5].0, Readout::LstTime);
    }
}
