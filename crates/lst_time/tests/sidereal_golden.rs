//! Golden-value tests for the civil → MJD → GMST → LST pipeline.

use lst_time::{CivilTime, J2000_MJD, SOLAR_TO_SIDEREAL, civil_to_mjd, gmst_to_lst, mjd_to_gmst};

#[test]
fn mjd_epoch_anchor_is_zero() {
    let t = CivilTime::new(1858, 11, 17, 0, 0, 0);
    let mjd = civil_to_mjd(&t);
    assert!(mjd.abs() < 1e-9, "1858-11-17T00:00Z → {mjd}, expected 0.0");
}

#[test]
fn j2000_noon_is_51544_5() {
    let t = CivilTime::new(2000, 1, 1, 12, 0, 0);
    assert_eq!(civil_to_mjd(&t), J2000_MJD);
}

#[test]
fn gmst_at_j2000_matches_published_value() {
    // GMST at J2000.0 noon ≈ 18.697h ≈ 0.7790 turns.
    let gmst = mjd_to_gmst(J2000_MJD);
    assert!(
        (gmst - 0.7790).abs() < 1e-4,
        "GMST at J2000 = {gmst} turns"
    );
    let hours = gmst * 24.0;
    assert!((hours - 18.697).abs() < 3e-3, "GMST at J2000 = {hours} h");
}

#[test]
fn lst_identity_at_zero_longitude() {
    for &gmst in &[0.0, 0.1, 0.5, 0.779, 0.999_999] {
        assert_eq!(gmst_to_lst(gmst, 0.0), gmst * 24.0);
    }
}

#[test]
fn lst_full_turn_invariance() {
    for &gmst in &[0.05, 0.33, 0.5, 0.91] {
        let l0 = gmst_to_lst(gmst, 0.0);
        let l360 = gmst_to_lst(gmst, 360.0);
        let diff = (l0 - l360).abs();
        assert!(
            diff < 1e-9 || diff > 23.999_999,
            "longitude 360° must match 0°: {l0} vs {l360}"
        );
    }
}

#[test]
fn lst_advances_at_sidereal_rate() {
    // For a fixed longitude, LST gains ~1.00273790935 h per UTC hour.
    let longitude = 149.550_138_8;
    let base = CivilTime::new(2024, 6, 15, 3, 0, 0);
    let later = CivilTime::new(2024, 6, 15, 4, 0, 0);

    let lst0 = gmst_to_lst(mjd_to_gmst(civil_to_mjd(&base)), longitude);
    let lst1 = gmst_to_lst(mjd_to_gmst(civil_to_mjd(&later)), longitude);

    let mut delta = lst1 - lst0;
    if delta < 0.0 {
        delta += 24.0;
    }
    assert!(
        (delta - SOLAR_TO_SIDEREAL).abs() < 1e-6,
        "LST advanced {delta} h over one UTC hour"
    );
}

#[test]
fn pipeline_stays_in_display_range() {
    // Sweep a few decades at odd offsets; LST must always land in [0, 24).
    let mut sample = Vec::new();
    let mut y = 1970;
    while y <= 2040 {
        sample.push(CivilTime::new(y, 7, 14, 21, 47, 20));
        y += 7;
    }
    for t in &sample {
        for &lon in &[-720.0, -149.55, 0.0, 149.55, 360.0, 540.0] {
            let lst = gmst_to_lst(mjd_to_gmst(civil_to_mjd(t)), lon);
            assert!(
                (0.0..24.000_001).contains(&lst),
                "LST out of range for {t:?} lon {lon}: {lst}"
            );
        }
    }
}
