//! Chart input: the per-subject source of corrected body positions.
//!
//! A [`Chart`] takes raw tropical positions, applies ayanamsha and varga
//! once at construction, and answers position queries by body key. Scoring
//! code depends only on the [`ChartSource`] trait.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::body::{BodyKey, BodyPosition};
use crate::error::{BaseError, Result};
use crate::graha::rashi_lord_by_number;
use crate::graha_relationships::ruler_relationship;
use crate::varga::{moon_waxing, varga_longitude};

/// Subject gender tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "f", alias = "female")]
    Female,
    #[serde(rename = "m", alias = "male")]
    Male,
}

impl Gender {
    pub const fn code(self) -> &'static str {
        match self {
            Self::Female => "f",
            Self::Male => "m",
        }
    }

    pub const fn is_female(self) -> bool {
        matches!(self, Self::Female)
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Gender {
    type Err = BaseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "f" | "female" => Ok(Self::Female),
            "m" | "male" => Ok(Self::Male),
            _ => Err(BaseError::InvalidGender(s.to_string())),
        }
    }
}

/// Anything that can answer "corrected position of body K" for one subject.
pub trait ChartSource {
    /// Gender of the chart's subject.
    fn gender(&self) -> Gender;

    /// Corrected position, or None when the body is unavailable or invalid.
    fn position(&self, key: BodyKey) -> Option<BodyPosition>;

    /// Lunar phase flag used by the vihanga rule.
    fn moon_waxing(&self) -> bool;
}

/// Raw tropical position as supplied by the ephemeris layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawBody {
    /// Tropical ecliptic longitude in degrees.
    pub lng: f64,
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub spd: f64,
}

#[derive(Debug, Deserialize)]
struct ChartInput {
    gender: Gender,
    #[serde(default)]
    ayanamsha: f64,
    #[serde(default = "default_varga")]
    varga: u16,
    bodies: BTreeMap<String, RawBody>,
}

fn default_varga() -> u16 {
    1
}

/// Concrete chart with positions corrected for one ayanamsha and varga.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    gender: Gender,
    ayanamsha: f64,
    varga: u16,
    positions: BTreeMap<BodyKey, BodyPosition>,
    moon_waxing: bool,
}

impl Chart {
    /// Build a chart from raw tropical positions.
    ///
    /// When `as` is present and `ds` is not, the descendant is placed
    /// opposite the ascendant. Houses are whole-sign from the ascendant.
    pub fn new(
        gender: Gender,
        ayanamsha: f64,
        varga: u16,
        bodies: &BTreeMap<BodyKey, RawBody>,
    ) -> Self {
        let mut raw = bodies.clone();
        let has_ds = raw.contains_key(&BodyKey::Ds);
        if let (Some(asc), false) = (raw.get(&BodyKey::As).copied(), has_ds) {
            raw.insert(
                BodyKey::Ds,
                RawBody {
                    lng: asc.lng + 180.0,
                    lat: -asc.lat,
                    spd: asc.spd,
                },
            );
        }

        let corrected: BTreeMap<BodyKey, BodyPosition> = raw
            .iter()
            .map(|(&key, b)| {
                let lon = varga_longitude(b.lng, ayanamsha, varga);
                (key, BodyPosition::new(key, lon, b.lat, b.spd))
            })
            .collect();

        let asc_sign = corrected.get(&BodyKey::As).map(BodyPosition::sign);
        let positions = corrected
            .iter()
            .map(|(&key, pos)| {
                let relation = key.graha().and_then(|g| {
                    let ruler_sign = rashi_lord_by_number(pos.sign())
                        .and_then(|lord| corrected.get(&BodyKey::from_graha(lord)))
                        .map(BodyPosition::sign);
                    ruler_relationship(g, pos.sign(), ruler_sign)
                });
                let mut p = pos.with_relation(relation);
                if let Some(a) = asc_sign {
                    p = p.with_house(a);
                }
                (key, p)
            })
            .collect();

        let waxing = match (raw.get(&BodyKey::Su), raw.get(&BodyKey::Mo)) {
            (Some(su), Some(mo)) => moon_waxing(su.lng, mo.lng),
            _ => false,
        };

        Self {
            gender,
            ayanamsha,
            varga: varga.max(1),
            positions,
            moon_waxing: waxing,
        }
    }

    /// Parse a chart from JSON:
    /// `{ "gender": "f", "ayanamsha": 23.85, "varga": 1, "bodies": { "su": { "lng": 10.0 } } }`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let input: ChartInput = serde_json::from_str(json)?;
        let mut bodies = BTreeMap::new();
        for (code, raw) in input.bodies {
            bodies.insert(code.parse::<BodyKey>()?, raw);
        }
        Ok(Self::new(input.gender, input.ayanamsha, input.varga, &bodies))
    }

    /// Read and parse a chart JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn ayanamsha(&self) -> f64 {
        self.ayanamsha
    }

    pub fn varga(&self) -> u16 {
        self.varga
    }

    /// All corrected positions in body-key order.
    pub fn positions(&self) -> impl Iterator<Item = &BodyPosition> {
        self.positions.values()
    }
}

impl ChartSource for Chart {
    fn gender(&self) -> Gender {
        self.gender
    }

    fn position(&self, key: BodyKey) -> Option<BodyPosition> {
        self.positions.get(&key).copied().filter(BodyPosition::is_valid)
    }

    fn moon_waxing(&self) -> bool {
        self.moon_waxing
    }
}
