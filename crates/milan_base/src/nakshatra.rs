//! Lunar mansions in the 27-fold and 28-fold schemes.
//!
//! The 27-fold scheme splits the ecliptic into equal 13 deg 20' sectors of
//! four padas each. The 28-fold scheme carves Abhijit out of the tail of
//! Uttara Ashadha and the head of Shravana. Compatibility tables address
//! nakshatras by 1-based number (Ashwini = 1).

use crate::graha::Graha;
use crate::util::normalize_360;

pub const NAKSHATRA_SPAN_27: f64 = 360.0 / 27.0;

/// A quarter of [`NAKSHATRA_SPAN_27`].
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN_27 / 4.0;

/// The 27 nakshatras, Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

use Nakshatra::*;

pub const ALL_NAKSHATRAS_27: [Nakshatra; 27] = [
    Ashwini, Bharani, Krittika, Rohini, Mrigashira, Ardra, Punarvasu, Pushya, Ashlesha,
    Magha, PurvaPhalguni, UttaraPhalguni, Hasta, Chitra, Swati, Vishakha, Anuradha, Jyeshtha,
    Mula, PurvaAshadha, UttaraAshadha, Shravana, Dhanishtha, Shatabhisha, PurvaBhadrapada,
    UttaraBhadrapada, Revati,
];

/// Sector names of the 28-fold scheme; Abhijit is at [`ABHIJIT_INDEX`].
pub const NAKSHATRA_28_NAMES: [&str; 28] = [
    "Ashwini", "Bharani", "Krittika", "Rohini", "Mrigashira", "Ardra", "Punarvasu",
    "Pushya", "Ashlesha", "Magha", "Purva Phalguni", "Uttara Phalguni", "Hasta", "Chitra",
    "Swati", "Vishakha", "Anuradha", "Jyeshtha", "Mula", "Purva Ashadha", "Uttara Ashadha",
    "Abhijit", "Shravana", "Dhanishtha", "Shatabhisha", "Purva Bhadrapada",
    "Uttara Bhadrapada", "Revati",
];

pub const ABHIJIT_INDEX: u8 = 21;

/// 276 deg 40'.
const ABHIJIT_START: f64 = 276.0 + 40.0 / 60.0;
/// 280 deg 53' 20".
const ABHIJIT_END: f64 = 280.0 + 53.0 / 60.0 + 20.0 / 3600.0;

/// Vimshottari dasha lords, Ashwini onwards; the cycle repeats every nine.
const DASHA_LORDS: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// Purushartha, the aim a nakshatra is traditionally said to pursue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Purushartha {
    Dharma,
    Artha,
    Kama,
    Moksha,
}

/// Aims of Ashwini through Revati. The cycle runs forward and back in
/// blocks of eight; Abhijit takes the Kama slot before Shravana.
const GOALS: [Purushartha; 27] = {
    use Purushartha::*;
    [
        Dharma, Artha, Kama, Moksha, Moksha, Kama, Artha, Dharma, Dharma, Artha, Kama, Moksha,
        Moksha, Kama, Artha, Dharma, Dharma, Artha, Kama, Moksha, Moksha, Artha, Dharma, Dharma,
        Artha, Kama, Moksha,
    ]
};

/// Position of a 27-scheme index in the 28-scheme.
const fn to_28(index: u8) -> u8 {
    if index < ABHIJIT_INDEX { index } else { index + 1 }
}

impl Nakshatra {
    pub const fn name(self) -> &'static str {
        NAKSHATRA_28_NAMES[to_28(self as u8) as usize]
    }

    /// 0-based (Ashwini = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based (Ashwini = 1).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    pub const fn lord(self) -> Graha {
        DASHA_LORDS[(self as u8 % 9) as usize]
    }

    pub const fn goal(self) -> Purushartha {
        GOALS[self as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    /// 0-based index of `nakshatra`.
    pub nakshatra_index: u8,
    /// 1-4.
    pub pada: u8,
    /// Offset from the start of the nakshatra, in degrees.
    pub degrees_in_nakshatra: f64,
}

/// Nakshatra and pada of a sidereal longitude in the 27-fold scheme.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(sidereal_lon_deg);
    // 360 - epsilon can round up to 27
    let index = ((lon / NAKSHATRA_SPAN_27) as u8).min(26);
    let degrees_in_nakshatra = lon - f64::from(index) * NAKSHATRA_SPAN_27;
    NakshatraInfo {
        nakshatra: ALL_NAKSHATRAS_27[usize::from(index)],
        nakshatra_index: index,
        pada: ((degrees_in_nakshatra / PADA_SPAN) as u8).min(3) + 1,
        degrees_in_nakshatra,
    }
}

/// A sector of the 28-fold scheme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nakshatra28Info {
    /// 0-based; Abhijit is 21 and Revati 27.
    pub nakshatra_index: u8,
    /// 1-4, or 0 inside Abhijit.
    pub pada: u8,
    pub degrees_in_nakshatra: f64,
}

impl Nakshatra28Info {
    pub const fn number(&self) -> u8 {
        self.nakshatra_index + 1
    }

    pub const fn name(&self) -> &'static str {
        NAKSHATRA_28_NAMES[self.nakshatra_index as usize]
    }
}

/// `(start, end)` in degrees of each 28-fold sector.
///
/// Only Uttara Ashadha, Abhijit and Shravana differ from the uniform grid.
pub fn nakshatra28_boundaries() -> [(f64, f64); 28] {
    let span = NAKSHATRA_SPAN_27;
    std::array::from_fn(|i| match i {
        20 => (20.0 * span, ABHIJIT_START),
        21 => (ABHIJIT_START, ABHIJIT_END),
        22 => (ABHIJIT_END, 22.0 * span),
        _ => {
            let k = (if i < 20 { i } else { i - 1 }) as f64;
            (k * span, (k + 1.0) * span)
        }
    })
}

/// Sector and pada of a sidereal longitude in the 28-fold scheme.
///
/// Padas inside the shortened sectors divide that sector's own span.
pub fn nakshatra28_from_longitude(sidereal_lon_deg: f64) -> Nakshatra28Info {
    let lon = normalize_360(sidereal_lon_deg);
    let index = if (ABHIJIT_START..ABHIJIT_END).contains(&lon) {
        ABHIJIT_INDEX
    } else {
        to_28(nakshatra_from_longitude(lon).nakshatra_index)
    };
    let (start, end) = nakshatra28_boundaries()[usize::from(index)];
    let degrees_in_nakshatra = lon - start;
    let pada = if index == ABHIJIT_INDEX {
        0
    } else {
        ((degrees_in_nakshatra / ((end - start) / 4.0)) as u8).min(3) + 1
    };
    Nakshatra28Info {
        nakshatra_index: index,
        pada,
        degrees_in_nakshatra,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_skip_abhijit() {
        assert_eq!(Ashwini.name(), "Ashwini");
        assert_eq!(UttaraAshadha.name(), "Uttara Ashadha");
        assert_eq!(Shravana.name(), "Shravana");
        assert_eq!(Revati.name(), "Revati");
        for (i, n) in ALL_NAKSHATRAS_27.iter().enumerate() {
            assert_eq!(usize::from(n.index()), i);
            assert_ne!(n.name(), "Abhijit");
        }
    }

    #[test]
    fn lords_repeat_every_nine() {
        assert_eq!(Ashwini.lord(), Graha::Ketu);
        assert_eq!(Magha.lord(), Graha::Ketu);
        assert_eq!(Mula.lord(), Graha::Ketu);
        assert_eq!(Rohini.lord(), Graha::Chandra);
        assert_eq!(Revati.lord(), Graha::Buddh);
    }

    #[test]
    fn goals_follow_the_eight_cycle() {
        assert_eq!(Ashwini.goal(), Purushartha::Dharma);
        assert_eq!(Rohini.goal(), Purushartha::Moksha);
        assert_eq!(Pushya.goal(), Purushartha::Dharma);
        assert_eq!(UttaraAshadha.goal(), Purushartha::Moksha);
        assert_eq!(Shravana.goal(), Purushartha::Artha);
        assert_eq!(Revati.goal(), Purushartha::Moksha);
        for goal in [
            Purushartha::Dharma,
            Purushartha::Artha,
            Purushartha::Kama,
            Purushartha::Moksha,
        ] {
            let n = ALL_NAKSHATRAS_27.iter().filter(|n| n.goal() == goal).count();
            assert!((6..=8).contains(&n), "{goal:?}: {n}");
        }
    }

    #[test]
    fn sector_starts_are_pada_one() {
        for i in 0..27u8 {
            let info = nakshatra_from_longitude(f64::from(i) * NAKSHATRA_SPAN_27 + 1e-9);
            assert_eq!(info.nakshatra_index, i);
            assert_eq!(info.pada, 1);
        }
    }

    #[test]
    fn padas_advance_every_quarter() {
        for p in 0..4u8 {
            let lon = f64::from(p) * PADA_SPAN + 0.1;
            assert_eq!(nakshatra_from_longitude(lon).pada, p + 1);
        }
    }

    #[test]
    fn negative_longitude_lands_in_revati() {
        assert_eq!(nakshatra_from_longitude(-1.0).nakshatra, Revati);
        assert_eq!(nakshatra_from_longitude(359.999_999_999_999).nakshatra, Revati);
    }

    #[test]
    fn sectors_tile_the_circle() {
        let bounds = nakshatra28_boundaries();
        assert!(bounds[0].0.abs() < 1e-10);
        assert!((bounds[27].1 - 360.0).abs() < 1e-10);
        for pair in bounds.windows(2) {
            assert!((pair[1].0 - pair[0].1).abs() < 1e-10);
        }
    }

    #[test]
    fn abhijit_and_its_neighbours() {
        let info = nakshatra28_from_longitude(278.5);
        assert_eq!(info.name(), "Abhijit");
        assert_eq!(info.number(), 22);
        assert_eq!(info.pada, 0);
        assert_eq!(nakshatra28_from_longitude(270.0).nakshatra_index, 20);
        assert_eq!(nakshatra28_from_longitude(281.0).nakshatra_index, 22);
        assert_eq!(nakshatra28_from_longitude(350.0).name(), "Revati");
    }

    #[test]
    fn shortened_sector_padas() {
        // Uttara Ashadha spans 266.67..276.67 in the 28-fold scheme
        let info = nakshatra28_from_longitude(276.5);
        assert_eq!(info.nakshatra_index, 20);
        assert_eq!(info.pada, 4);
    }
}
