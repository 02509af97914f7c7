//! Rashi (zodiac sign) classification and DMS formatting.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Mesha (Aries) at 0 deg of sidereal longitude. Sign numbers
//! used by the compatibility tables are 1-based (Mesha = 1, Meena = 12).

use crate::util::normalize_360;

/// Sidereal signs, Mesha first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = {
    use Rashi::*;
    [Mesha, Vrishabha, Mithuna, Karka, Simha, Kanya, Tula, Vrischika, Dhanu, Makara, Kumbha, Meena]
};

/// `(sanskrit, western)` names, Mesha first.
const RASHI_NAMES: [(&str, &str); 12] = [
    ("Mesha", "Aries"),
    ("Vrishabha", "Taurus"),
    ("Mithuna", "Gemini"),
    ("Karka", "Cancer"),
    ("Simha", "Leo"),
    ("Kanya", "Virgo"),
    ("Tula", "Libra"),
    ("Vrischika", "Scorpio"),
    ("Dhanu", "Sagittarius"),
    ("Makara", "Capricorn"),
    ("Kumbha", "Aquarius"),
    ("Meena", "Pisces"),
];

/// Width of one sign in degrees.
pub const SIGN_SPAN: f64 = 30.0;

impl Rashi {
    pub const fn name(self) -> &'static str {
        RASHI_NAMES[self as usize].0
    }

    pub const fn western_name(self) -> &'static str {
        RASHI_NAMES[self as usize].1
    }

    /// Mesha = 0.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based sign number used by the compatibility tables.
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Rashi from a 1-based sign number. Returns None outside 1..=12.
    pub fn from_number(number: u8) -> Option<Rashi> {
        let index = usize::from(number.checked_sub(1)?);
        ALL_RASHIS.get(index).copied()
    }

    /// Tattva; the four elements repeat from Mesha.
    pub const fn element(self) -> RashiElement {
        match self as u8 % 4 {
            0 => RashiElement::Fire,
            1 => RashiElement::Earth,
            2 => RashiElement::Air,
            _ => RashiElement::Water,
        }
    }

    /// Chara, sthira, dvisvabhava in turn from Mesha.
    pub const fn mobility(self) -> RashiMobility {
        match self as u8 % 3 {
            0 => RashiMobility::Movable,
            1 => RashiMobility::Fixed,
            _ => RashiMobility::Dual,
        }
    }
}

/// Rashi element classification.
///
/// Fire: Mesha, Simha, Dhanu. Earth: Vrishabha, Kanya, Makara.
/// Air: Mithuna, Tula, Kumbha. Water: Karka, Vrischika, Meena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RashiElement {
    Fire,
    Earth,
    Air,
    Water,
}

/// Rashi mobility classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RashiMobility {
    /// Chara: Mesha, Karka, Tula, Makara.
    Movable,
    /// Sthira: Vrishabha, Simha, Vrischika, Kumbha.
    Fixed,
    /// Dvisvabhava: Mithuna, Kanya, Dhanu, Meena.
    Dual,
}

/// An angle split into sexagesimal parts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    pub degrees: u16,
    pub minutes: u8,
    /// Fractional arc-seconds, below 60.
    pub seconds: f64,
}

/// Where a longitude falls within its sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RashiInfo {
    pub rashi: Rashi,
    /// Same as `rashi.index()`.
    pub rashi_index: u8,
    pub dms: Dms,
    /// Offset into the sign, in [0, 30).
    pub degrees_in_rashi: f64,
}

/// Split an angle into degrees, arc-minutes and arc-seconds.
///
/// The sign is dropped.
pub fn deg_to_dms(deg: f64) -> Dms {
    let abs = deg.abs();
    let whole = abs.trunc();
    let minutes_f = (abs - whole) * 60.0;
    let minutes = minutes_f.trunc();
    Dms {
        degrees: whole as u16,
        minutes: minutes as u8,
        seconds: (minutes_f - minutes) * 60.0,
    }
}

/// Sign of a sidereal longitude; Mesha covers [0, 30).
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let lon = normalize_360(sidereal_lon_deg);
    // 360 - epsilon can round up to 12
    let rashi_index = ((lon / SIGN_SPAN) as u8).min(11);
    let degrees_in_rashi = lon - f64::from(rashi_index) * SIGN_SPAN;
    RashiInfo {
        rashi: ALL_RASHIS[usize::from(rashi_index)],
        rashi_index,
        dms: deg_to_dms(degrees_in_rashi),
        degrees_in_rashi,
    }
}
