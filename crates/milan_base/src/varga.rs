//! Sidereal and harmonic (varga) longitude correction, plus lunar phase.
//!
//! A varga chart of division `n` is obtained by multiplying the sidereal
//! longitude by `n` and reducing modulo 360. Division 1 is the rasi chart.

use crate::util::normalize_360;

/// Apply ayanamsha and harmonic division to a tropical longitude.
///
/// `division` 0 is treated as 1.
pub fn varga_longitude(tropical_lon_deg: f64, ayanamsha_deg: f64, division: u16) -> f64 {
    let sidereal = normalize_360(tropical_lon_deg - ayanamsha_deg);
    normalize_360(sidereal * division.max(1) as f64)
}

/// True while the Moon is waxing (shukla paksha).
///
/// Waxing when the Moon's elongation east of the Sun lies in [0, 180).
pub fn moon_waxing(sun_lon_deg: f64, moon_lon_deg: f64) -> bool {
    normalize_360(moon_lon_deg - sun_lon_deg) < 180.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rasi_chart_only_subtracts_ayanamsha() {
        let lon = varga_longitude(280.5, 23.85, 1);
        assert!((lon - 256.65).abs() < 1e-10);
    }

    #[test]
    fn zero_division_is_rasi() {
        assert_eq!(varga_longitude(100.0, 0.0, 0), varga_longitude(100.0, 0.0, 1));
    }

    #[test]
    fn navamsha_multiplies_and_wraps() {
        // 50 deg * 9 = 450 → 90
        let lon = varga_longitude(50.0, 0.0, 9);
        assert!((lon - 90.0).abs() < 1e-10);
    }

    #[test]
    fn negative_sidereal_wraps() {
        let lon = varga_longitude(10.0, 24.0, 1);
        assert!((lon - 346.0).abs() < 1e-10);
    }

    #[test]
    fn waxing_and_waning() {
        assert!(moon_waxing(0.0, 90.0));
        assert!(moon_waxing(350.0, 10.0));
        assert!(!moon_waxing(0.0, 180.0));
        assert!(!moon_waxing(0.0, 270.0));
    }
}
