//! Body keys and the read-only corrected position snapshot.
//!
//! A [`BodyPosition`] stores only the corrected longitude and the chart
//! context; sign and nakshatra are always derived from the longitude on
//! access, so they can never disagree with it.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::BaseError;
use crate::graha::Graha;
use crate::graha_relationships::{DignityFlags, RulerRelationship, dignity_flags};
use crate::nakshatra::{
    Nakshatra28Info, NakshatraInfo, nakshatra_from_longitude, nakshatra28_from_longitude,
};
use crate::rashi::{Rashi, RashiInfo, rashi_from_longitude};
use crate::util::{inclusive_distance, normalize_360};

/// Two-letter body codes accepted in charts and pair requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BodyKey {
    Su,
    Mo,
    Ma,
    Me,
    Ju,
    Ve,
    Sa,
    Ra,
    Ke,
    /// Ascendant.
    As,
    /// Descendant.
    Ds,
}

/// All body keys in chart order.
pub const ALL_BODY_KEYS: [BodyKey; 11] = [
    BodyKey::Su,
    BodyKey::Mo,
    BodyKey::Ma,
    BodyKey::Me,
    BodyKey::Ju,
    BodyKey::Ve,
    BodyKey::Sa,
    BodyKey::Ra,
    BodyKey::Ke,
    BodyKey::As,
    BodyKey::Ds,
];

/// The seven classical grahas plus ascendant and descendant.
pub const DEFAULT_BODY_KEYS: [BodyKey; 9] = [
    BodyKey::Su,
    BodyKey::Mo,
    BodyKey::Ma,
    BodyKey::Me,
    BodyKey::Ju,
    BodyKey::Ve,
    BodyKey::Sa,
    BodyKey::As,
    BodyKey::Ds,
];

impl BodyKey {
    /// Lowercase two-letter code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Su => "su",
            Self::Mo => "mo",
            Self::Ma => "ma",
            Self::Me => "me",
            Self::Ju => "ju",
            Self::Ve => "ve",
            Self::Sa => "sa",
            Self::Ra => "ra",
            Self::Ke => "ke",
            Self::As => "as",
            Self::Ds => "ds",
        }
    }

    /// Graha for planetary keys; None for the angles.
    pub const fn graha(self) -> Option<Graha> {
        match self {
            Self::Su => Some(Graha::Surya),
            Self::Mo => Some(Graha::Chandra),
            Self::Ma => Some(Graha::Mangal),
            Self::Me => Some(Graha::Buddh),
            Self::Ju => Some(Graha::Guru),
            Self::Ve => Some(Graha::Shukra),
            Self::Sa => Some(Graha::Shani),
            Self::Ra => Some(Graha::Rahu),
            Self::Ke => Some(Graha::Ketu),
            Self::As | Self::Ds => None,
        }
    }

    /// Body key of a graha.
    pub const fn from_graha(graha: Graha) -> BodyKey {
        match graha {
            Graha::Surya => Self::Su,
            Graha::Chandra => Self::Mo,
            Graha::Mangal => Self::Ma,
            Graha::Buddh => Self::Me,
            Graha::Guru => Self::Ju,
            Graha::Shukra => Self::Ve,
            Graha::Shani => Self::Sa,
            Graha::Rahu => Self::Ra,
            Graha::Ketu => Self::Ke,
        }
    }
}

impl Display for BodyKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for BodyKey {
    type Err = BaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        ALL_BODY_KEYS
            .iter()
            .copied()
            .find(|k| k.code() == lower)
            .ok_or_else(|| BaseError::UnknownBody(s.to_string()))
    }
}

/// Corrected position of one body in one chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPosition {
    key: BodyKey,
    longitude: f64,
    latitude: f64,
    speed: f64,
    house: Option<u8>,
    relation: Option<RulerRelationship>,
}

impl BodyPosition {
    /// Snapshot from an already corrected (sidereal, varga) longitude.
    pub fn new(key: BodyKey, longitude: f64, latitude: f64, speed: f64) -> Self {
        Self {
            key,
            longitude: normalize_360(longitude),
            latitude,
            speed,
            house: None,
            relation: None,
        }
    }

    /// Attach the whole-sign house counted from the ascendant sign.
    pub fn with_house(mut self, ascendant_sign: u8) -> Self {
        self.house = Some(inclusive_distance(ascendant_sign, self.sign(), 12));
        self
    }

    /// Attach the relation to the sign ruler computed from chart context.
    pub fn with_relation(mut self, relation: Option<RulerRelationship>) -> Self {
        self.relation = relation;
        self
    }

    pub fn key(&self) -> BodyKey {
        self.key
    }

    /// Corrected longitude in [0, 360).
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// True when the longitude is a usable number.
    pub fn is_valid(&self) -> bool {
        self.longitude.is_finite()
    }

    pub fn rashi_info(&self) -> RashiInfo {
        rashi_from_longitude(self.longitude)
    }

    pub fn rashi(&self) -> Rashi {
        self.rashi_info().rashi
    }

    /// 1-based sign number.
    pub fn sign(&self) -> u8 {
        self.rashi_info().rashi_index + 1
    }

    pub fn nakshatra_info(&self) -> NakshatraInfo {
        nakshatra_from_longitude(self.longitude)
    }

    /// 1-based 27-scheme nakshatra number.
    pub fn nakshatra(&self) -> u8 {
        self.nakshatra_info().nakshatra_index + 1
    }

    pub fn pada(&self) -> u8 {
        self.nakshatra_info().pada
    }

    pub fn nakshatra28_info(&self) -> Nakshatra28Info {
        nakshatra28_from_longitude(self.longitude)
    }

    /// 1-based 28-scheme nakshatra number.
    pub fn nakshatra28(&self) -> u8 {
        self.nakshatra28_info().number()
    }

    /// Whole-sign house (1-12), None without an ascendant.
    pub fn house(&self) -> Option<u8> {
        self.house
    }

    /// Dignity flags; all false for nodes and angles.
    pub fn dignity(&self) -> DignityFlags {
        match self.key.graha() {
            Some(g) => dignity_flags(g, self.longitude),
            None => DignityFlags::default(),
        }
    }

    /// Relation to the sign ruler; None for angles.
    pub fn relation(&self) -> Option<RulerRelationship> {
        self.relation
    }
}
