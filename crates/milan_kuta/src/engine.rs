//! The scoring engine: configuration, dispatch and post-processing.
//!
//! A [`KutaEngine`] is built once from a protocol map and is immutable
//! afterwards. Every scoring call is a pure function of the loaded
//! configuration and the two subjects, so one engine can be shared freely.
//!
//! Scoring never fails. A missing, disabled or malformed protocol, an
//! unavailable body or a table lookup outside the configured data all
//! produce a zero row (score 0, max 0, descriptors `-`).

use std::collections::BTreeMap;
use std::path::Path;

use milan_base::{BodyKey, ChartSource, DEFAULT_BODY_KEYS};
use serde_json::{Map, Value};
use tracing::debug;

use crate::config::{Protocol, ProtocolConfig};
use crate::error::ConfigError;
use crate::key_set::{KeySpec, KutaType, ScaleSpec};
use crate::protocols::{Outcome, evaluate};
use crate::row::{ResultRow, ScoreRow, SimpleResult};
use crate::subject::{ScoringSubject, SubjectPair};

#[derive(Debug, Clone, PartialEq)]
struct LoadedProtocol {
    config: ProtocolConfig,
    /// Resolved once at load time.
    active_variant: Option<String>,
}

/// Immutable multi-protocol scoring engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KutaEngine {
    protocols: BTreeMap<Protocol, LoadedProtocol>,
}

impl KutaEngine {
    /// Load a protocol map and resolve each protocol's active variant.
    ///
    /// The active variant is the override when it names an existing
    /// variant, else the first variant in document order.
    pub fn load_configuration(
        protocols: &Map<String, Value>,
        variant_overrides: &BTreeMap<String, String>,
    ) -> Self {
        let mut loaded = BTreeMap::new();
        for (key, value) in protocols {
            let config = ProtocolConfig::parse(key, value);
            let Some(protocol) = Protocol::from_name(key) else {
                continue;
            };
            let preferred = variant_overrides.get(key).map(String::as_str);
            let active_variant = config.resolve_variant(preferred);
            if let Some(requested) = preferred {
                if active_variant.as_deref() != Some(requested) {
                    debug!(
                        protocol = key.as_str(),
                        requested,
                        "variant override not found, using default"
                    );
                }
            }
            if let Some(variant) = &active_variant {
                debug!(
                    protocol = key.as_str(),
                    variant = variant.as_str(),
                    "active variant resolved"
                );
            }
            loaded.insert(
                protocol,
                LoadedProtocol {
                    config,
                    active_variant,
                },
            );
        }
        Self { protocols: loaded }
    }

    /// Parse a JSON object keyed by protocol name.
    pub fn from_json_str(
        json: &str,
        variant_overrides: &BTreeMap<String, String>,
    ) -> Result<Self, ConfigError> {
        match serde_json::from_str::<Value>(json)? {
            Value::Object(map) => Ok(Self::load_configuration(&map, variant_overrides)),
            _ => Err(ConfigError::NotAnObject),
        }
    }

    /// Read and parse a protocol configuration file.
    pub fn from_json_file(
        path: &Path,
        variant_overrides: &BTreeMap<String, String>,
    ) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content, variant_overrides)
    }

    /// Loaded configuration of a protocol, if present.
    pub fn config(&self, protocol: Protocol) -> Option<&ProtocolConfig> {
        self.protocols.get(&protocol).map(|p| &p.config)
    }

    /// Variant resolved at load time.
    pub fn active_variant(&self, protocol: Protocol) -> Option<&str> {
        self.protocols
            .get(&protocol)
            .and_then(|p| p.active_variant.as_deref())
    }

    // -----------------------------------------------------------------------
    // Single item
    // -----------------------------------------------------------------------

    /// Score one key for one subject pair.
    pub fn compute_item(&self, spec: &KeySpec, pair: &SubjectPair) -> ScoreRow {
        let head = head_label(
            pair.first().key(),
            Some(pair.first().longitude()),
            pair.second().key(),
            Some(pair.second().longitude()),
        );
        let mut row = ScoreRow::zero(spec.name(), spec.raw(), head);

        let Some(loaded) = spec.protocol().and_then(|p| self.protocols.get(&p)) else {
            return row;
        };
        let config = &loaded.config;
        if !config.is_active() {
            return row;
        }

        let variant = spec
            .variant()
            .filter(|v| config.has_variant(v))
            .or(loaded.active_variant.as_deref());
        let Some(outcome) = evaluate(config, pair, variant) else {
            debug!(key = spec.raw(), "table lookup out of range, zero row");
            return row;
        };

        let (score, max) = finish_score(&outcome, config, spec);
        row.score = score;
        row.max = max;
        row.c1_value = outcome.c1.unwrap_or_else(|| {
            format!("nakshatra/{}/{}", pair.first().nakshatra(), pair.nakshatra_distance())
        });
        row.c2_value = outcome.c2.unwrap_or_else(|| {
            format!(
                "nakshatra/{}/{}",
                pair.second().nakshatra(),
                pair.nakshatra_distance_back()
            )
        });
        row.variant = variant.map(str::to_string);
        row
    }

    /// Parse a key string and score it.
    pub fn compute_key(&self, key: &str, pair: &SubjectPair) -> ScoreRow {
        self.compute_item(&KeySpec::parse(key), pair)
    }

    // -----------------------------------------------------------------------
    // Body pairs
    // -----------------------------------------------------------------------

    /// Score an explicit key list for body `k1` of `chart1` against body
    /// `k2` of `chart2`.
    pub fn compute_specs(
        &self,
        chart1: &dyn ChartSource,
        chart2: &dyn ChartSource,
        k1: BodyKey,
        k2: BodyKey,
        specs: &[KeySpec],
    ) -> ResultRow {
        let p1 = chart1.position(k1);
        let p2 = chart2.position(k2);
        let values = match (p1, p2) {
            (Some(p1), Some(p2)) => {
                debug!(k1 = %k1, k2 = %k2, keys = specs.len(), "scoring body pair");
                let pair = SubjectPair::new(
                    ScoringSubject::new(&p1, chart1.gender(), chart1.moon_waxing()),
                    ScoringSubject::new(&p2, chart2.gender(), chart2.moon_waxing()),
                );
                specs.iter().map(|s| self.compute_item(s, &pair)).collect()
            }
            _ => {
                debug!(k1 = %k1, k2 = %k2, "body unavailable, zero rows");
                let head = head_label(
                    k1,
                    p1.map(|p| p.longitude()),
                    k2,
                    p2.map(|p| p.longitude()),
                );
                specs
                    .iter()
                    .map(|s| ScoreRow::zero(s.name(), s.raw(), head.clone()))
                    .collect()
            }
        };
        ResultRow {
            k1: k1.code().to_string(),
            k2: k2.code().to_string(),
            values,
        }
    }

    /// Score every key of a key-set for one body pair.
    pub fn compute_single(
        &self,
        chart1: &dyn ChartSource,
        chart2: &dyn ChartSource,
        k1: BodyKey,
        k2: BodyKey,
        kuta: KutaType,
    ) -> ResultRow {
        self.compute_specs(chart1, chart2, k1, k2, &kuta.key_specs())
    }

    /// Score body pairs drawn from `body_keys` (default keys when empty).
    ///
    /// With `all_combinations` every ordered pair is scored, otherwise only
    /// same-index pairs.
    pub fn compute_all_pairs(
        &self,
        chart1: &dyn ChartSource,
        chart2: &dyn ChartSource,
        body_keys: &[BodyKey],
        all_combinations: bool,
        kuta: KutaType,
    ) -> Vec<ResultRow> {
        let keys = if body_keys.is_empty() {
            &DEFAULT_BODY_KEYS[..]
        } else {
            body_keys
        };
        let specs = kuta.key_specs();
        if all_combinations {
            keys.iter()
                .flat_map(|&a| keys.iter().map(move |&b| (a, b)))
                .map(|(a, b)| self.compute_specs(chart1, chart2, a, b, &specs))
                .collect()
        } else {
            keys.iter()
                .map(|&k| self.compute_specs(chart1, chart2, k, k, &specs))
                .collect()
        }
    }
}

/// Strip rows to `{ key, value }` for the API boundary.
pub fn simplify(rows: &[ResultRow]) -> Vec<SimpleResult> {
    rows.iter().map(SimpleResult::from).collect()
}

/// Default max, then rescale.
fn finish_score(outcome: &Outcome, config: &ProtocolConfig, spec: &KeySpec) -> (f64, f64) {
    let mut score = outcome.score;
    let mut max = outcome.max.or(config.default_max()).unwrap_or(0.0);
    let target = match spec.scale() {
        Some(ScaleSpec::Value(v)) => Some(*v),
        Some(ScaleSpec::Variant(name)) => config.variant_max(name),
        None => None,
    };
    if let Some(target) = target.filter(|t| *t > 0.0 && max > 0.0) {
        score = score / max * target;
        max = target;
    }
    (score, max)
}

fn head_label(k1: BodyKey, lon1: Option<f64>, k2: BodyKey, lon2: Option<f64>) -> String {
    let fmt = |lon: Option<f64>| match lon {
        Some(l) => format!("{l:.2}°"),
        None => "-".to_string(),
    };
    format!("{k1} {} / {k2} {}", fmt(lon1), fmt(lon2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use milan_base::{BodyPosition, Gender};
    use serde_json::json;

    fn engine(config: Value) -> KutaEngine {
        let Value::Object(map) = config else {
            panic!("fixture must be an object")
        };
        KutaEngine::load_configuration(&map, &BTreeMap::new())
    }

    fn pair(lon1: f64, lon2: f64) -> SubjectPair {
        let mo = BodyPosition::new(BodyKey::Mo, lon1, 0.0, 13.0);
        let ve = BodyPosition::new(BodyKey::Ve, lon2, 0.0, 1.0);
        SubjectPair::new(
            ScoringSubject::new(&mo, Gender::Female, true),
            ScoringSubject::new(&ve, Gender::Male, true),
        )
    }

    fn tara() -> Value {
        json!({ "matchType": true, "max": 3, "scores": [1.5, 0, 1.5, 0, 1.5, 0, 1.5, 0, 1.5] })
    }

    #[test]
    fn engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<KutaEngine>();
    }

    #[test]
    fn head_and_title() {
        let e = engine(json!({ "tara": tara() }));
        let row = e.compute_key("tara", &pair(10.0, 200.5));
        assert_eq!(row.title, "kuta/tara");
        assert_eq!(row.head, "mo 10.00° / ve 200.50°");
        assert_eq!(row.max, 3.0);
    }

    #[test]
    fn numeric_rescale() {
        let e = engine(json!({ "tara": tara() }));
        let row = e.compute_key("tara/scale/6", &pair(10.0, 10.0));
        assert_eq!(row.key, "tara");
        assert_eq!(row.variant_key, "tara/scale/6");
        assert_eq!(row.max, 6.0);
        assert!((row.score - 6.0).abs() < 1e-10);
    }

    #[test]
    fn disabled_protocol_is_zero_row() {
        let mut t = tara();
        t["matchType"] = json!(false);
        let e = engine(json!({ "tara": t }));
        let row = e.compute_key("tara", &pair(10.0, 10.0));
        assert_eq!(row.score, 0.0);
        assert_eq!(row.max, 0.0);
        assert_eq!(row.c1_value, "-");
    }

    #[test]
    fn fallback_descriptor_uses_nakshatra_distance() {
        let e = engine(json!({
            "vainashika": {
                "matchType": true, "max": 1,
                "pairs": [], "scores": { "matched": 0, "unmatched": 1 }
            }
        }));
        // nakshatra 1 and 3
        let row = e.compute_key("vainashika", &pair(5.0, 30.0));
        assert_eq!(row.c1_value, "nakshatra/1/3");
        assert_eq!(row.c2_value, "nakshatra/3/26");
        assert_eq!(row.score, 1.0);
    }

    #[test]
    fn unset_max_defaults_to_zero() {
        let mut t = tara();
        if let Some(m) = t.as_object_mut() {
            m.remove("max");
        }
        let e = engine(json!({ "tara": t }));
        let row = e.compute_key("tara/scale/6", &pair(10.0, 10.0));
        // no max, so no rescale
        assert_eq!(row.max, 0.0);
        assert_eq!(row.score, 3.0);
    }

    #[test]
    fn named_scale_uses_variant_max() {
        let e = engine(json!({
            "gana": {
                "matchType": true, "max": 6,
                "nakshatraGana": vec![1; 27],
                "variants": {
                    "ashta": { "matrix": [[6, 6, 1], [5, 6, 0], [1, 0, 6]] },
                    "dasha": { "matrix": [[4, 3, 0], [3, 4, 0], [0, 0, 4]], "max": 4 }
                }
            }
        }));
        assert_eq!(e.active_variant(Protocol::Gana), Some("ashta"));
        let row = e.compute_key("gana/scale/dasha", &pair(5.0, 5.0));
        assert_eq!(row.max, 4.0);
        assert!((row.score - 4.0).abs() < 1e-10);
        assert_eq!(row.variant.as_deref(), Some("ashta"));
        // pinned variant
        let row = e.compute_key("gana/dasha", &pair(5.0, 5.0));
        assert_eq!(row.variant.as_deref(), Some("dasha"));
        assert_eq!(row.max, 4.0);
    }

    #[test]
    fn override_selects_variant() {
        let config = json!({
            "mahendra": {
                "matchType": true, "max": 1,
                "compatible": vec![vec![1u8]; 27],
                "variants": { "a": { "score": 1, "max": 1 }, "b": { "score": 3, "max": 3 } }
            }
        });
        let Value::Object(map) = config else { unreachable!() };
        let overrides = BTreeMap::from([("mahendra".to_string(), "b".to_string())]);
        let e = KutaEngine::load_configuration(&map, &overrides);
        assert_eq!(e.active_variant(Protocol::Mahendra), Some("b"));

        let overrides = BTreeMap::from([("mahendra".to_string(), "zz".to_string())]);
        let e = KutaEngine::load_configuration(&map, &overrides);
        assert_eq!(e.active_variant(Protocol::Mahendra), Some("a"));
    }

    #[test]
    fn unknown_key_is_zero_row() {
        let e = engine(json!({ "tara": tara() }));
        let row = e.compute_key("astro", &pair(10.0, 10.0));
        assert_eq!(row.key, "astro");
        assert_eq!(row.score, 0.0);
        assert_eq!(row.title, "kuta/astro");
    }

    #[test]
    fn non_object_root_is_error() {
        let err = KutaEngine::from_json_str("[1, 2]", &BTreeMap::new()).unwrap_err();
        assert!(matches!(err, ConfigError::NotAnObject));
        assert!(KutaEngine::from_json_str("{", &BTreeMap::new()).is_err());
    }

    #[test]
    fn head_with_missing_body() {
        assert_eq!(
            head_label(BodyKey::Su, Some(1.0), BodyKey::As, None),
            "su 1.00° / as -"
        );
    }
}
