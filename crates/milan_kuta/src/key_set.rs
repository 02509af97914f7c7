//! Key grammar and the catalog of named key-sets.
//!
//! A key is `name`, `name/variant` or `name/scale/N`. `N` is either a number
//! (the target maximum) or a variant name whose `max` becomes the target.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::config::Protocol;
use crate::error::ConfigError;

/// Rescale target of a key.
#[derive(Debug, Clone, PartialEq)]
pub enum ScaleSpec {
    /// Explicit target maximum.
    Value(f64),
    /// Use the named variant's maximum.
    Variant(String),
}

/// A parsed protocol key.
#[derive(Debug, Clone, PartialEq)]
pub struct KeySpec {
    raw: String,
    name: String,
    variant: Option<String>,
    scale: Option<ScaleSpec>,
}

impl KeySpec {
    /// Parse a key string. Never fails; unknown names score as zero rows.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let mut parts = raw.split('/');
        let name = parts.next().unwrap_or_default().to_string();
        let (variant, scale) = match (parts.next(), parts.next()) {
            (Some("scale"), Some(target)) => {
                let scale = match target.parse::<f64>() {
                    Ok(v) => ScaleSpec::Value(v),
                    Err(_) => ScaleSpec::Variant(target.to_string()),
                };
                (None, Some(scale))
            }
            (Some("scale"), None) | (None, _) => (None, None),
            (Some(v), _) if v.is_empty() => (None, None),
            (Some(v), _) => (Some(v.to_string()), None),
        };
        Self {
            raw: raw.to_string(),
            name,
            variant,
            scale,
        }
    }

    /// The key as written, e.g. `tara/scale/6`.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Base protocol name, e.g. `tara`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn variant(&self) -> Option<&str> {
        self.variant.as_deref()
    }

    pub fn scale(&self) -> Option<&ScaleSpec> {
        self.scale.as_ref()
    }

    pub fn protocol(&self) -> Option<Protocol> {
        Protocol::from_name(&self.name)
    }
}

impl Display for KeySpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

const ASHTA: [&str; 8] = [
    "varna",
    "vashya",
    "tara",
    "yoni",
    "grahamaitri",
    "gana",
    "rashi",
    "nadi",
];

const DVADASHA_EXTRA: [&str; 4] = ["rajju", "vedha", "stri", "mahendra"];

const DASHA: [&str; 10] = [
    "vashya/dasha",
    "tara/scale/6",
    "yoni",
    "grahamaitri",
    "gana/scale/dasha",
    "rashi",
    "rajju/dasha",
    "vedha",
    "mahendra",
    "stri",
];

const SAPTA: [&str; 7] = [
    "varna/scale/5",
    "vashya",
    "tara/scale/6",
    "yoni",
    "grahamaitri/sapta",
    "gana/sapta",
    "rashi/scale/8",
];

const OTHER: [&str; 4] = ["gotra", "vihanga", "yonyanukulya", "vainashika"];

/// Named key-sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KutaType {
    Ashta,
    Dvadasha,
    Dasha,
    Sapta,
    Other,
    DashaAshta,
    DashaAshtaDvadasha,
    DashaSaptaDvadasha,
    All,
}

pub const ALL_KUTA_TYPES: [KutaType; 9] = [
    KutaType::Ashta,
    KutaType::Dvadasha,
    KutaType::Dasha,
    KutaType::Sapta,
    KutaType::Other,
    KutaType::DashaAshta,
    KutaType::DashaAshtaDvadasha,
    KutaType::DashaSaptaDvadasha,
    KutaType::All,
];

/// Key-sets that have an exposed sub-total.
pub const SUBTOTAL_TYPES: [KutaType; 4] = [
    KutaType::Ashta,
    KutaType::Dasha,
    KutaType::Dvadasha,
    KutaType::Sapta,
];

impl KutaType {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashta => "ashta",
            Self::Dvadasha => "dvadasha",
            Self::Dasha => "dasha",
            Self::Sapta => "sapta",
            Self::Other => "other",
            Self::DashaAshta => "dashaashta",
            Self::DashaAshtaDvadasha => "dashaashtadvadasha",
            Self::DashaSaptaDvadasha => "dashasaptadvadasha",
            Self::All => "all",
        }
    }

    /// Ordered keys, de-duplicated by base name with the first occurrence kept.
    pub fn keys(self) -> Vec<&'static str> {
        let dvadasha = || ASHTA.iter().chain(DVADASHA_EXTRA.iter());
        let chained: Vec<&'static str> = match self {
            Self::Ashta => ASHTA.to_vec(),
            Self::Dvadasha => dvadasha().copied().collect(),
            Self::Dasha => DASHA.to_vec(),
            Self::Sapta => SAPTA.to_vec(),
            Self::Other => OTHER.to_vec(),
            Self::DashaAshta => DASHA.iter().chain(ASHTA.iter()).copied().collect(),
            Self::DashaAshtaDvadasha => DASHA
                .iter()
                .chain(ASHTA.iter())
                .chain(dvadasha())
                .copied()
                .collect(),
            Self::DashaSaptaDvadasha => DASHA
                .iter()
                .chain(SAPTA.iter())
                .chain(dvadasha())
                .copied()
                .collect(),
            Self::All => DASHA
                .iter()
                .chain(ASHTA.iter())
                .chain(dvadasha())
                .chain(SAPTA.iter())
                .chain(OTHER.iter())
                .copied()
                .collect(),
        };
        dedup_by_base(chained)
    }

    pub fn key_specs(self) -> Vec<KeySpec> {
        self.keys().into_iter().map(KeySpec::parse).collect()
    }
}

fn base_name(key: &str) -> &str {
    key.split('/').next().unwrap_or(key)
}

fn dedup_by_base(keys: Vec<&'static str>) -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::with_capacity(keys.len());
    for key in keys {
        if !out.iter().any(|k| base_name(k) == base_name(key)) {
            out.push(key);
        }
    }
    out
}

impl Display for KutaType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KutaType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        ALL_KUTA_TYPES
            .iter()
            .copied()
            .find(|t| t.name() == lower)
            .ok_or_else(|| ConfigError::UnknownKutaType(s.to_string()))
    }
}
