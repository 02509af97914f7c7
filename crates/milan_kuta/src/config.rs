//! Typed protocol configuration.
//!
//! Each protocol key maps to one [`ProtocolConfig`] shape. Entries are parsed
//! and validated once when the engine loads them; anything that fails either
//! step becomes [`ProtocolConfig::Unconfigured`] and scores as a zero row.
//!
//! Nakshatra tables are indexed by nakshatra number − 1 and sign tables by
//! sign number − 1.

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use milan_base::{Gender, LordRelation};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

/// Square or rectangular score table.
pub type Matrix = Vec<Vec<f64>>;

/// Cell lookup that tolerates ragged or short tables.
pub(crate) fn cell(matrix: &Matrix, row: usize, col: usize) -> Option<f64> {
    matrix.get(row)?.get(col).copied()
}

// ---------------------------------------------------------------------------
// Protocol names
// ---------------------------------------------------------------------------

/// The sixteen scoring protocols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Protocol {
    Varna,
    Vashya,
    Tara,
    Yoni,
    GrahaMaitri,
    Gana,
    Rashi,
    Nadi,
    Rajju,
    Vedha,
    Stri,
    Mahendra,
    Gotra,
    Vihanga,
    Yonyanukulya,
    Vainashika,
}

/// All protocols in catalog order.
pub const ALL_PROTOCOLS: [Protocol; 16] = [
    Protocol::Varna,
    Protocol::Vashya,
    Protocol::Tara,
    Protocol::Yoni,
    Protocol::GrahaMaitri,
    Protocol::Gana,
    Protocol::Rashi,
    Protocol::Nadi,
    Protocol::Rajju,
    Protocol::Vedha,
    Protocol::Stri,
    Protocol::Mahendra,
    Protocol::Gotra,
    Protocol::Vihanga,
    Protocol::Yonyanukulya,
    Protocol::Vainashika,
];

impl Protocol {
    /// Configuration key of the protocol.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Varna => "varna",
            Self::Vashya => "vashya",
            Self::Tara => "tara",
            Self::Yoni => "yoni",
            Self::GrahaMaitri => "grahamaitri",
            Self::Gana => "gana",
            Self::Rashi => "rashi",
            Self::Nadi => "nadi",
            Self::Rajju => "rajju",
            Self::Vedha => "vedha",
            Self::Stri => "stri",
            Self::Mahendra => "mahendra",
            Self::Gotra => "gotra",
            Self::Vihanga => "vihanga",
            Self::Yonyanukulya => "yonyanukulya",
            Self::Vainashika => "vainashika",
        }
    }

    /// Protocol for a configuration key, case-sensitive.
    pub fn from_name(name: &str) -> Option<Protocol> {
        ALL_PROTOCOLS.iter().copied().find(|p| p.name() == name)
    }
}

// ---------------------------------------------------------------------------
// Ordered variant dictionary
// ---------------------------------------------------------------------------

/// Named variants in document order.
///
/// Order matters: without an override the first variant is active.
#[derive(Debug, Clone, PartialEq)]
pub struct Variants<V> {
    entries: Vec<(String, V)>,
}

impl<V> Default for Variants<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> Variants<V> {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, name: &str) -> Option<&V> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// The preferred name if it exists, else the first variant's name.
    pub fn resolve(&self, preferred: Option<&str>) -> Option<&str> {
        preferred
            .and_then(|p| self.names().find(|n| *n == p))
            .or_else(|| self.names().next())
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Variants<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct VariantsVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for VariantsVisitor<V> {
            type Value = Variants<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of named variants")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries: Vec<(String, V)> = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, value)) = map.next_entry::<String, V>()? {
                    match entries.iter_mut().find(|(n, _)| *n == name) {
                        Some(slot) => slot.1 = value,
                        None => entries.push((name, value)),
                    }
                }
                Ok(Variants { entries })
            }
        }

        deserializer.deserialize_map(VariantsVisitor(PhantomData))
    }
}

// ---------------------------------------------------------------------------
// Shared variant shapes
// ---------------------------------------------------------------------------

/// A variant that swaps in its own score matrix.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MatrixVariant {
    pub matrix: Matrix,
    #[serde(default)]
    pub max: Option<f64>,
}

/// Resolve the matrix and variant max: named variant first, then the
/// protocol-level matrix.
fn pick_matrix<'a>(
    variants: &'a Variants<MatrixVariant>,
    matrix: Option<&'a Matrix>,
    variant: Option<&str>,
) -> Option<(&'a Matrix, Option<f64>)> {
    match variant.and_then(|v| variants.get(v)) {
        Some(v) => Some((&v.matrix, v.max)),
        None => matrix.map(|m| (m, None)),
    }
}

fn check_len<T>(table: &[T], len: usize, msg: &'static str) -> Result<(), &'static str> {
    if table.len() == len { Ok(()) } else { Err(msg) }
}

// ---------------------------------------------------------------------------
// Per-protocol shapes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VarnaConfig {
    #[serde(default)]
    pub match_type: bool,
    #[serde(default)]
    pub max: Option<f64>,
    /// Varna number (1-based) per sign.
    pub sign_varna: Vec<u8>,
    /// Row = female varna − 1, column = male varna − 1.
    pub groom_scores: Matrix,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RashiConfig {
    #[serde(default)]
    pub match_type: bool,
    #[serde(default)]
    pub max: Option<f64>,
    /// Score by inclusive sign distance − 1.
    pub sign_differences: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaraConfig {
    #[serde(default)]
    pub match_type: bool,
    #[serde(default)]
    pub max: Option<f64>,
    /// Score by tara (distance reduced mod 9, 0 → 9) − 1.
    pub scores: Vec<f64>,
}

/// Outcome selector for nadi rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NadiCompare {
    Same,
    Different,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NadiRule {
    pub mode: String,
    pub action: String,
    pub compare: NadiCompare,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NadiConfig {
    #[serde(default)]
    pub match_type: bool,
    #[serde(default)]
    pub max: Option<f64>,
    pub nakshatra_nadi: Vec<u8>,
    pub rules: Vec<NadiRule>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YoniBonus {
    pub female_matches: bool,
    pub male_matches: bool,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YoniConfig {
    #[serde(default)]
    pub match_type: bool,
    #[serde(default)]
    pub max: Option<f64>,
    /// Yoni category (1..=14) per nakshatra.
    pub nakshatra_yoni: Vec<u8>,
    /// Natural gender of each nakshatra's yoni animal.
    #[serde(default)]
    pub nakshatra_gender: Option<Vec<Gender>>,
    #[serde(default)]
    pub matrix: Option<Matrix>,
    #[serde(default)]
    pub variants: Variants<MatrixVariant>,
    #[serde(default)]
    pub bonus: Vec<YoniBonus>,
}

impl YoniConfig {
    pub(crate) fn matrix_for(&self, variant: Option<&str>) -> Option<(&Matrix, Option<f64>)> {
        pick_matrix(&self.variants, self.matrix.as_ref(), variant)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GanaBonus {
    pub female: u8,
    pub male: u8,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GanaConfig {
    #[serde(default)]
    pub match_type: bool,
    #[serde(default)]
    pub max: Option<f64>,
    /// Gana category (1..=3) per nakshatra.
    pub nakshatra_gana: Vec<u8>,
    #[serde(default)]
    pub matrix: Option<Matrix>,
    #[serde(default)]
    pub variants: Variants<MatrixVariant>,
    #[serde(default)]
    pub bonus: Vec<GanaBonus>,
}

impl GanaConfig {
    pub(crate) fn matrix_for(&self, variant: Option<&str>) -> Option<(&Matrix, Option<f64>)> {
        pick_matrix(&self.variants, self.matrix.as_ref(), variant)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignVashya {
    /// Signs each sign holds in vashya, by sign − 1.
    pub allowed: Vec<Vec<u8>>,
    pub female_score: f64,
    pub male_score: f64,
    #[serde(default)]
    pub max: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DegreeRange {
    pub from: f64,
    pub to: f64,
    pub vashya: u8,
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DegreeVashya {
    pub ranges: Vec<DegreeRange>,
    /// Name of the grid in the protocol's `grids` table.
    pub grid: String,
    #[serde(default)]
    pub max: Option<f64>,
}

/// The two vashya algorithms.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "rule", rename_all = "lowercase")]
pub enum VashyaRule {
    Sign(SignVashya),
    Degree(DegreeVashya),
}

impl VashyaRule {
    pub fn max(&self) -> Option<f64> {
        match self {
            Self::Sign(s) => s.max,
            Self::Degree(d) => d.max,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VashyaConfig {
    #[serde(default)]
    pub match_type: bool,
    #[serde(default)]
    pub max: Option<f64>,
    pub variants: Variants<VashyaRule>,
    #[serde(default)]
    pub grids: BTreeMap<String, Matrix>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrahaMaitriConfig {
    #[serde(default)]
    pub match_type: bool,
    #[serde(default)]
    pub max: Option<f64>,
    /// Rows and columns ordered own, friend, neutral, enemy.
    #[serde(default)]
    pub matrix: Option<Matrix>,
    #[serde(default)]
    pub variants: Variants<MatrixVariant>,
}

impl GrahaMaitriConfig {
    pub(crate) fn matrix_for(&self, variant: Option<&str>) -> Option<(&Matrix, Option<f64>)> {
        pick_matrix(&self.variants, self.matrix.as_ref(), variant)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MahendraVariant {
    pub score: f64,
    #[serde(default)]
    pub max: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MahendraConfig {
    #[serde(default)]
    pub match_type: bool,
    #[serde(default)]
    pub max: Option<f64>,
    /// Compatible male nakshatra numbers by female nakshatra − 1.
    pub compatible: Vec<Vec<u8>>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub variants: Variants<MahendraVariant>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct VedhaScores {
    pub clear: f64,
    pub blocked: f64,
}

/// Replaces one direction's score for a given nakshatra.
///
/// `index` 0 is the female direction, 1 the male direction.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct VedhaOverride {
    pub nakshatra: u8,
    pub index: u8,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VedhaConfig {
    #[serde(default)]
    pub match_type: bool,
    #[serde(default)]
    pub max: Option<f64>,
    /// Nakshatra numbers obstructed by each nakshatra.
    pub blocking: Vec<Vec<u8>>,
    pub scores: VedhaScores,
    #[serde(default)]
    pub overrides: Vec<VedhaOverride>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RajjuDirection {
    Up,
    Down,
    Neutral,
}

impl RajjuDirection {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RajjuPoint {
    pub body: String,
    pub direction: RajjuDirection,
}

/// Predicate over a rajju pair; unset fields are not checked.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RajjuCondition {
    #[serde(default)]
    pub same_body: Option<bool>,
    #[serde(default)]
    pub same_direction: Option<bool>,
    #[serde(default)]
    pub both_up: Option<bool>,
    #[serde(default)]
    pub both_down: Option<bool>,
    #[serde(default)]
    pub opposite_direction: Option<bool>,
    /// Either subject's body equals this.
    #[serde(default)]
    pub either_body: Option<String>,
    /// Both subjects' bodies are in this list.
    #[serde(default)]
    pub bodies: Option<Vec<String>>,
    #[serde(default)]
    pub same_sign_lord: Option<bool>,
    /// Relation of the female sign lord toward the male sign lord.
    #[serde(default)]
    pub lord_relation: Option<LordRelation>,
    /// Signs are seventh from each other.
    #[serde(default)]
    pub mutual_seventh: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RajjuRule {
    #[serde(flatten)]
    pub when: RajjuCondition,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RajjuBonus {
    #[serde(flatten)]
    pub when: RajjuCondition,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RajjuRuleSet {
    #[serde(default)]
    pub rules: Vec<RajjuRule>,
    #[serde(default)]
    pub bonus: Vec<RajjuBonus>,
    #[serde(default)]
    pub max: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RajjuConfig {
    #[serde(default)]
    pub match_type: bool,
    #[serde(default)]
    pub max: Option<f64>,
    pub nakshatra_rajju: Vec<RajjuPoint>,
    #[serde(default)]
    pub variants: Variants<RajjuRuleSet>,
    #[serde(default)]
    pub rules: Vec<RajjuRule>,
    #[serde(default)]
    pub bonus: Vec<RajjuBonus>,
}

impl RajjuConfig {
    /// Rules, bonus and variant max for the variant, else the top-level set.
    pub(crate) fn rule_set(
        &self,
        variant: Option<&str>,
    ) -> (&[RajjuRule], &[RajjuBonus], Option<f64>) {
        match variant.and_then(|v| self.variants.get(v)) {
            Some(set) => (&set.rules, &set.bonus, set.max),
            None => (&self.rules, &self.bonus, None),
        }
    }
}

/// Inclusive distance range with its score.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct StriRange {
    pub from: u8,
    pub to: u8,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StriBonus {
    pub nakshatras: Vec<u8>,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StriConfig {
    #[serde(default)]
    pub match_type: bool,
    #[serde(default)]
    pub max: Option<f64>,
    pub ranges: Vec<StriRange>,
    #[serde(default)]
    pub same_nakshatra_bonus: Option<StriBonus>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct VainashikaScores {
    pub matched: f64,
    pub unmatched: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VainashikaConfig {
    #[serde(default)]
    pub match_type: bool,
    #[serde(default)]
    pub max: Option<f64>,
    /// `[female nakshatra, male nakshatra]` pairs.
    pub pairs: Vec<[u8; 2]>,
    pub scores: VainashikaScores,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YonyanukulyaVariant {
    /// Category per nakshatra.
    pub nakshatra_gender: Vec<String>,
    /// Name of the score table in the protocol's `tables`.
    pub table: String,
    #[serde(default)]
    pub max: Option<f64>,
}

/// Female category → male category → score.
pub type CategoryTable = BTreeMap<String, BTreeMap<String, f64>>;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YonyanukulyaConfig {
    #[serde(default)]
    pub match_type: bool,
    #[serde(default)]
    pub max: Option<f64>,
    pub variants: Variants<YonyanukulyaVariant>,
    #[serde(default)]
    pub tables: BTreeMap<String, CategoryTable>,
}

/// Bird per nakshatra, either fixed or split by lunar phase.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum BirdTable {
    Flat(Vec<u8>),
    /// `[waxing, waning]`.
    Phased(Vec<Vec<u8>>),
}

impl BirdTable {
    pub fn bird(&self, nakshatra_index: usize, waxing: bool) -> Option<u8> {
        match self {
            Self::Flat(row) => row.get(nakshatra_index).copied(),
            Self::Phased(rows) => rows
                .get(if waxing { 0 } else { 1 })?
                .get(nakshatra_index)
                .copied(),
        }
    }

    fn is_well_formed(&self) -> bool {
        match self {
            Self::Flat(row) => row.len() == 27,
            Self::Phased(rows) => rows.len() == 2 && rows.iter().all(|r| r.len() == 27),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct VihangaRelations {
    #[serde(default)]
    pub friends: Vec<[u8; 2]>,
    #[serde(default)]
    pub enemies: Vec<[u8; 2]>,
    #[serde(default)]
    pub same: f64,
    #[serde(default)]
    pub friend: f64,
    #[serde(default)]
    pub neutral: f64,
    #[serde(default)]
    pub enemy: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VihangaVariant {
    pub birds: BirdTable,
    /// Score by inclusive female → male bird distance − 1.
    #[serde(default)]
    pub distance_scores: Option<Vec<f64>>,
    #[serde(default)]
    pub relations: Option<VihangaRelations>,
    #[serde(default)]
    pub max: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VihangaConfig {
    #[serde(default)]
    pub match_type: bool,
    #[serde(default)]
    pub max: Option<f64>,
    pub variants: Variants<VihangaVariant>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct GotraScores {
    pub same: f64,
    pub different: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GotraConfig {
    #[serde(default)]
    pub match_type: bool,
    #[serde(default)]
    pub max: Option<f64>,
    /// Gotra number per 28-scheme nakshatra.
    pub nakshatra_gotra: Vec<u8>,
    pub scores: GotraScores,
}

// ---------------------------------------------------------------------------
// Tagged union
// ---------------------------------------------------------------------------

/// One loaded protocol definition.
#[derive(Debug, Clone, PartialEq)]
pub enum ProtocolConfig {
    Varna(VarnaConfig),
    Rashi(RashiConfig),
    Tara(TaraConfig),
    Nadi(NadiConfig),
    Yoni(YoniConfig),
    Gana(GanaConfig),
    Vashya(VashyaConfig),
    GrahaMaitri(GrahaMaitriConfig),
    Mahendra(MahendraConfig),
    Vedha(VedhaConfig),
    Rajju(RajjuConfig),
    Stri(StriConfig),
    Vainashika(VainashikaConfig),
    Yonyanukulya(YonyanukulyaConfig),
    Vihanga(VihangaConfig),
    Gotra(GotraConfig),
    /// Missing, unknown or malformed entry.
    Unconfigured,
}

fn shape<'a, T: Deserialize<'a>>(value: &'a Value) -> Result<T, String> {
    T::deserialize(value).map_err(|e| e.to_string())
}

impl ProtocolConfig {
    /// Parse and validate one entry of the protocol map.
    ///
    /// Never fails: problems are logged and yield `Unconfigured`.
    pub fn parse(key: &str, value: &Value) -> Self {
        let Some(protocol) = Protocol::from_name(key) else {
            warn!(protocol = key, "unknown protocol key, ignored");
            return Self::Unconfigured;
        };
        match Self::try_parse(protocol, value) {
            Ok(config) => config,
            Err(reason) => {
                warn!(protocol = key, %reason, "malformed protocol entry, treated as unconfigured");
                Self::Unconfigured
            }
        }
    }

    fn try_parse(protocol: Protocol, value: &Value) -> Result<Self, String> {
        let config = match protocol {
            Protocol::Varna => Self::Varna(shape(value)?),
            Protocol::Rashi => Self::Rashi(shape(value)?),
            Protocol::Tara => Self::Tara(shape(value)?),
            Protocol::Nadi => Self::Nadi(shape(value)?),
            Protocol::Yoni => Self::Yoni(shape(value)?),
            Protocol::Gana => Self::Gana(shape(value)?),
            Protocol::Vashya => Self::Vashya(shape(value)?),
            Protocol::GrahaMaitri => Self::GrahaMaitri(shape(value)?),
            Protocol::Mahendra => Self::Mahendra(shape(value)?),
            Protocol::Vedha => Self::Vedha(shape(value)?),
            Protocol::Rajju => Self::Rajju(shape(value)?),
            Protocol::Stri => Self::Stri(shape(value)?),
            Protocol::Vainashika => Self::Vainashika(shape(value)?),
            Protocol::Yonyanukulya => Self::Yonyanukulya(shape(value)?),
            Protocol::Vihanga => Self::Vihanga(shape(value)?),
            Protocol::Gotra => Self::Gotra(shape(value)?),
        };
        config.validate().map_err(str::to_string)?;
        Ok(config)
    }

    /// Structural checks that deserialization alone cannot express.
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        match self {
            Self::Varna(c) => check_len(&c.sign_varna, 12, "signVarna must have 12 entries"),
            Self::Rashi(c) => {
                check_len(&c.sign_differences, 12, "signDifferences must have 12 entries")
            }
            Self::Tara(c) => check_len(&c.scores, 9, "scores must have 9 entries"),
            Self::Nadi(c) => check_len(&c.nakshatra_nadi, 27, "nakshatraNadi must have 27 entries"),
            Self::Yoni(c) => {
                check_len(&c.nakshatra_yoni, 27, "nakshatraYoni must have 27 entries")?;
                if let Some(g) = &c.nakshatra_gender {
                    check_len(g, 27, "nakshatraGender must have 27 entries")?;
                }
                if c.matrix.is_none() && c.variants.is_empty() {
                    return Err("yoni needs a matrix or variants");
                }
                Ok(())
            }
            Self::Gana(c) => {
                check_len(&c.nakshatra_gana, 27, "nakshatraGana must have 27 entries")?;
                if c.matrix.is_none() && c.variants.is_empty() {
                    return Err("gana needs a matrix or variants");
                }
                Ok(())
            }
            Self::Vashya(c) => {
                if c.variants.is_empty() {
                    return Err("vashya needs at least one variant");
                }
                Ok(())
            }
            Self::GrahaMaitri(c) => {
                if c.matrix.is_none() && c.variants.is_empty() {
                    return Err("grahamaitri needs a matrix or variants");
                }
                Ok(())
            }
            Self::Mahendra(c) => {
                check_len(&c.compatible, 27, "compatible must have 27 entries")?;
                if c.score.is_none() && c.variants.is_empty() {
                    return Err("mahendra needs a score or variants");
                }
                Ok(())
            }
            Self::Vedha(c) => check_len(&c.blocking, 27, "blocking must have 27 entries"),
            Self::Rajju(c) => {
                check_len(&c.nakshatra_rajju, 27, "nakshatraRajju must have 27 entries")
            }
            Self::Stri(c) => {
                if c.ranges.is_empty() {
                    return Err("stri needs at least one range");
                }
                Ok(())
            }
            Self::Vainashika(_) => Ok(()),
            Self::Yonyanukulya(c) => {
                if c.variants.is_empty() {
                    return Err("yonyanukulya needs at least one variant");
                }
                for (_, v) in c.variants.iter() {
                    check_len(&v.nakshatra_gender, 27, "nakshatraGender must have 27 entries")?;
                }
                Ok(())
            }
            Self::Vihanga(c) => {
                if c.variants.is_empty() {
                    return Err("vihanga needs at least one variant");
                }
                if c.variants.iter().any(|(_, v)| !v.birds.is_well_formed()) {
                    return Err("birds must be 27 entries or two rows of 27");
                }
                Ok(())
            }
            Self::Gotra(c) => {
                check_len(&c.nakshatra_gotra, 28, "nakshatraGotra must have 28 entries")
            }
            Self::Unconfigured => Ok(()),
        }
    }

    /// The `matchType` gate. Always false when unconfigured.
    pub fn is_active(&self) -> bool {
        match self {
            Self::Varna(c) => c.match_type,
            Self::Rashi(c) => c.match_type,
            Self::Tara(c) => c.match_type,
            Self::Nadi(c) => c.match_type,
            Self::Yoni(c) => c.match_type,
            Self::Gana(c) => c.match_type,
            Self::Vashya(c) => c.match_type,
            Self::GrahaMaitri(c) => c.match_type,
            Self::Mahendra(c) => c.match_type,
            Self::Vedha(c) => c.match_type,
            Self::Rajju(c) => c.match_type,
            Self::Stri(c) => c.match_type,
            Self::Vainashika(c) => c.match_type,
            Self::Yonyanukulya(c) => c.match_type,
            Self::Vihanga(c) => c.match_type,
            Self::Gotra(c) => c.match_type,
            Self::Unconfigured => false,
        }
    }

    /// Protocol-level default maximum.
    pub fn default_max(&self) -> Option<f64> {
        match self {
            Self::Varna(c) => c.max,
            Self::Rashi(c) => c.max,
            Self::Tara(c) => c.max,
            Self::Nadi(c) => c.max,
            Self::Yoni(c) => c.max,
            Self::Gana(c) => c.max,
            Self::Vashya(c) => c.max,
            Self::GrahaMaitri(c) => c.max,
            Self::Mahendra(c) => c.max,
            Self::Vedha(c) => c.max,
            Self::Rajju(c) => c.max,
            Self::Stri(c) => c.max,
            Self::Vainashika(c) => c.max,
            Self::Yonyanukulya(c) => c.max,
            Self::Vihanga(c) => c.max,
            Self::Gotra(c) => c.max,
            Self::Unconfigured => None,
        }
    }

    /// Variant names in document order; empty for variant-less shapes.
    pub fn variant_names(&self) -> Vec<&str> {
        match self {
            Self::Yoni(c) => c.variants.names().collect(),
            Self::Gana(c) => c.variants.names().collect(),
            Self::Vashya(c) => c.variants.names().collect(),
            Self::GrahaMaitri(c) => c.variants.names().collect(),
            Self::Mahendra(c) => c.variants.names().collect(),
            Self::Rajju(c) => c.variants.names().collect(),
            Self::Yonyanukulya(c) => c.variants.names().collect(),
            Self::Vihanga(c) => c.variants.names().collect(),
            _ => Vec::new(),
        }
    }

    pub fn has_variant(&self, name: &str) -> bool {
        self.variant_names().contains(&name)
    }

    /// Override if it names an existing variant, else the first variant.
    pub fn resolve_variant(&self, preferred: Option<&str>) -> Option<String> {
        let resolved = match self {
            Self::Yoni(c) => c.variants.resolve(preferred),
            Self::Gana(c) => c.variants.resolve(preferred),
            Self::Vashya(c) => c.variants.resolve(preferred),
            Self::GrahaMaitri(c) => c.variants.resolve(preferred),
            Self::Mahendra(c) => c.variants.resolve(preferred),
            Self::Rajju(c) => c.variants.resolve(preferred),
            Self::Yonyanukulya(c) => c.variants.resolve(preferred),
            Self::Vihanga(c) => c.variants.resolve(preferred),
            _ => None,
        };
        resolved.map(str::to_string)
    }

    /// The named variant's own maximum, if it defines one.
    pub fn variant_max(&self, name: &str) -> Option<f64> {
        match self {
            Self::Yoni(c) => c.variants.get(name)?.max,
            Self::Gana(c) => c.variants.get(name)?.max,
            Self::Vashya(c) => c.variants.get(name)?.max(),
            Self::GrahaMaitri(c) => c.variants.get(name)?.max,
            Self::Mahendra(c) => c.variants.get(name)?.max,
            Self::Rajju(c) => c.variants.get(name)?.max,
            Self::Yonyanukulya(c) => c.variants.get(name)?.max,
            Self::Vihanga(c) => c.variants.get(name)?.max,
            _ => None,
        }
    }
}
