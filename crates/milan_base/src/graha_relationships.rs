//! Graha friendship and dignity classification.
//!
//! Provides exaltation/debilitation data, moolatrikone ranges, own-sign
//! ownership, natural (naisargika) friendship, temporal (tatkalika)
//! friendship, the compound level relating a body to its sign ruler, and the
//! four-way ruler relation consumed by the compatibility protocols.

use serde::{Deserialize, Serialize};

use crate::graha::{Graha, rashi_lord, rashi_lord_by_number};
use crate::rashi::{Rashi, rashi_from_longitude};
use crate::util::inclusive_distance;

// ---------------------------------------------------------------------------
// Exaltation, debilitation, moolatrikone, own signs
// ---------------------------------------------------------------------------

/// Exaltation degree (sidereal) for sapta grahas. Returns None for Rahu/Ketu.
///
/// Sun 10 Ari, Moon 3 Tau, Mars 28 Cap, Mercury 15 Vir, Jupiter 5 Can,
/// Venus 27 Pis, Saturn 20 Lib.
pub const fn exaltation_degree(graha: Graha) -> Option<f64> {
    match graha {
        Graha::Surya => Some(10.0),
        Graha::Chandra => Some(33.0),
        Graha::Mangal => Some(298.0),
        Graha::Buddh => Some(165.0),
        Graha::Guru => Some(95.0),
        Graha::Shukra => Some(357.0),
        Graha::Shani => Some(200.0),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Debilitation degree = exaltation + 180 mod 360. Returns None for Rahu/Ketu.
pub const fn debilitation_degree(graha: Graha) -> Option<f64> {
    match exaltation_degree(graha) {
        Some(e) => {
            let d = e + 180.0;
            if d >= 360.0 { Some(d - 360.0) } else { Some(d) }
        }
        None => None,
    }
}

/// Moolatrikone range: (sign number, start_deg_in_sign, end_deg_in_sign).
///
/// Sun 0-20 Leo, Moon 4-20 Tau, Mars 0-12 Ari, Mercury 16-20 Vir,
/// Jupiter 0-10 Sag, Venus 0-15 Lib, Saturn 0-20 Aqu.
pub const fn moolatrikone_range(graha: Graha) -> Option<(u8, f64, f64)> {
    match graha {
        Graha::Surya => Some((5, 0.0, 20.0)),
        Graha::Chandra => Some((2, 4.0, 20.0)),
        Graha::Mangal => Some((1, 0.0, 12.0)),
        Graha::Buddh => Some((6, 16.0, 20.0)),
        Graha::Guru => Some((9, 0.0, 10.0)),
        Graha::Shukra => Some((7, 0.0, 15.0)),
        Graha::Shani => Some((11, 0.0, 20.0)),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Own-sign numbers (1-based) for sapta grahas. Empty for Rahu/Ketu.
pub fn own_signs(graha: Graha) -> &'static [u8] {
    match graha {
        Graha::Surya => &[5],
        Graha::Chandra => &[4],
        Graha::Mangal => &[1, 8],
        Graha::Buddh => &[3, 6],
        Graha::Guru => &[9, 12],
        Graha::Shukra => &[2, 7],
        Graha::Shani => &[10, 11],
        Graha::Rahu | Graha::Ketu => &[],
    }
}

/// Dignity flags of a graha at a sidereal longitude.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DignityFlags {
    pub exalted: bool,
    pub debilitated: bool,
    pub own_sign: bool,
    pub moolatrikone: bool,
}

/// Sign number containing a fixed degree.
fn sign_of(deg: f64) -> u8 {
    rashi_from_longitude(deg).rashi_index + 1
}

/// Compute dignity flags for a graha. Rahu/Ketu always return all-false.
pub fn dignity_flags(graha: Graha, sidereal_lon: f64) -> DignityFlags {
    let info = rashi_from_longitude(sidereal_lon);
    let sign = info.rashi_index + 1;

    let exalted = exaltation_degree(graha).is_some_and(|d| sign_of(d) == sign);
    let debilitated = debilitation_degree(graha).is_some_and(|d| sign_of(d) == sign);
    let moolatrikone = moolatrikone_range(graha).is_some_and(|(mt_sign, start, end)| {
        mt_sign == sign && info.degrees_in_rashi >= start && info.degrees_in_rashi < end
    });

    DignityFlags {
        exalted,
        debilitated,
        own_sign: own_signs(graha).contains(&sign),
        moolatrikone,
    }
}

// ---------------------------------------------------------------------------
// Natural Friendship (Naisargika Maitri)
// ---------------------------------------------------------------------------

/// Natural relationship between two grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NaisargikaMaitri {
    Friend,
    Enemy,
    Neutral,
}

/// Natural friendship of `graha` toward `other`.
/// Returns Neutral for any pairing involving Rahu/Ketu and for self-pairs.
pub const fn naisargika_maitri(graha: Graha, other: Graha) -> NaisargikaMaitri {
    use Graha::*;
    use NaisargikaMaitri::*;

    match (graha, other) {
        (Rahu | Ketu, _) | (_, Rahu | Ketu) => Neutral,

        // Sun: friends=Moon,Mars,Jupiter; enemies=Venus,Saturn
        (Surya, Chandra | Mangal | Guru) => Friend,
        (Surya, Shukra | Shani) => Enemy,

        // Moon: friends=Sun,Mercury; no enemies
        (Chandra, Surya | Buddh) => Friend,

        // Mars: friends=Sun,Moon,Jupiter; enemies=Mercury
        (Mangal, Surya | Chandra | Guru) => Friend,
        (Mangal, Buddh) => Enemy,

        // Mercury: friends=Sun,Venus; enemies=Moon
        (Buddh, Surya | Shukra) => Friend,
        (Buddh, Chandra) => Enemy,

        // Jupiter: friends=Sun,Moon,Mars; enemies=Mercury,Venus
        (Guru, Surya | Chandra | Mangal) => Friend,
        (Guru, Buddh | Shukra) => Enemy,

        // Venus: friends=Mercury,Saturn; enemies=Sun,Moon
        (Shukra, Buddh | Shani) => Friend,
        (Shukra, Surya | Chandra) => Enemy,

        // Saturn: friends=Mercury,Venus; enemies=Sun,Moon,Mars
        (Shani, Buddh | Shukra) => Friend,
        (Shani, Surya | Chandra | Mangal) => Enemy,

        _ => Neutral,
    }
}

// ---------------------------------------------------------------------------
// Temporal Friendship (Tatkalika Maitri)
// ---------------------------------------------------------------------------

/// Temporal relationship based on current sign positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TatkalikaMaitri {
    Friend,
    Enemy,
}

/// Temporal friendship between two 1-based sign numbers.
///
/// Inclusive distance 2, 3, 4, 10, 11 or 12 ⇒ friend; 1, 5, 6, 7, 8, 9 ⇒ enemy.
pub fn tatkalika_maitri(from_sign: u8, to_sign: u8) -> TatkalikaMaitri {
    match inclusive_distance(from_sign, to_sign, 12) {
        2 | 3 | 4 | 10 | 11 | 12 => TatkalikaMaitri::Friend,
        _ => TatkalikaMaitri::Enemy,
    }
}

// ---------------------------------------------------------------------------
// Compound relation to the sign ruler
// ---------------------------------------------------------------------------

/// Compound dignity level of a body relative to its sign ruler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompoundMaitri {
    OwnSign,
    AdhiMitra,
    Mitra,
    Sama,
    Shatru,
    AdhiShatru,
}

/// Combine natural and temporal friendship into the five-fold level.
pub fn panchadha_maitri(
    naisargika: NaisargikaMaitri,
    tatkalika: TatkalikaMaitri,
) -> CompoundMaitri {
    use CompoundMaitri as C;
    use NaisargikaMaitri as N;
    use TatkalikaMaitri as T;

    match (naisargika, tatkalika) {
        (N::Friend, T::Friend) => C::AdhiMitra,
        (N::Friend, T::Enemy) => C::Sama,
        (N::Neutral, T::Friend) => C::Mitra,
        (N::Neutral, T::Enemy) => C::Shatru,
        (N::Enemy, T::Friend) => C::Sama,
        (N::Enemy, T::Enemy) => C::AdhiShatru,
    }
}

/// Natural, temporal and compound relation of a body to its sign ruler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RulerRelationship {
    pub ruler: Graha,
    pub natural: NaisargikaMaitri,
    /// None when the ruler's position is unknown.
    pub temporary: Option<TatkalikaMaitri>,
    pub compound: CompoundMaitri,
}

/// Relationship of `graha` in `sign` to that sign's ruler.
///
/// `ruler_sign` is the sign the ruler itself occupies in the same chart;
/// without it the compound level falls back to the natural relation alone.
pub fn ruler_relationship(
    graha: Graha,
    sign: u8,
    ruler_sign: Option<u8>,
) -> Option<RulerRelationship> {
    let ruler = rashi_lord_by_number(sign)?;
    let natural = naisargika_maitri(graha, ruler);
    let temporary = ruler_sign.map(|rs| tatkalika_maitri(sign, rs));

    let compound = if ruler == graha {
        CompoundMaitri::OwnSign
    } else {
        match temporary {
            Some(t) => panchadha_maitri(natural, t),
            None => match natural {
                NaisargikaMaitri::Friend => CompoundMaitri::Mitra,
                NaisargikaMaitri::Neutral => CompoundMaitri::Sama,
                NaisargikaMaitri::Enemy => CompoundMaitri::Shatru,
            },
        }
    };

    Some(RulerRelationship {
        ruler,
        natural,
        temporary,
        compound,
    })
}

// ---------------------------------------------------------------------------
// Ruler-to-ruler relation used by compatibility rules
// ---------------------------------------------------------------------------

/// Four-way relation between two sign rulers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LordRelation {
    /// Both signs share the same ruler.
    Own,
    Friend,
    Neutral,
    Enemy,
}

impl LordRelation {
    /// Row/column position in four-by-four relation tables.
    pub const fn index(self) -> usize {
        match self {
            Self::Own => 0,
            Self::Friend => 1,
            Self::Neutral => 2,
            Self::Enemy => 3,
        }
    }

    /// Lowercase label, as used in output descriptors.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Own => "own",
            Self::Friend => "friend",
            Self::Neutral => "neutral",
            Self::Enemy => "enemy",
        }
    }
}

/// Natural relation of the ruler of `sign` toward the ruler of `other_sign`.
pub fn lord_relation(sign: u8, other_sign: u8) -> Option<LordRelation> {
    let a = rashi_lord_by_number(sign)?;
    let b = rashi_lord_by_number(other_sign)?;
    Some(if a == b {
        LordRelation::Own
    } else {
        match naisargika_maitri(a, b) {
            NaisargikaMaitri::Friend => LordRelation::Friend,
            NaisargikaMaitri::Neutral => LordRelation::Neutral,
            NaisargikaMaitri::Enemy => LordRelation::Enemy,
        }
    })
}

/// True when both signs share the same ruler.
pub fn same_sign_lord(sign: u8, other_sign: u8) -> bool {
    match (Rashi::from_number(sign), Rashi::from_number(other_sign)) {
        (Some(a), Some(b)) => rashi_lord(a) == rashi_lord(b),
        _ => false,
    }
}
