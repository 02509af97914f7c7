//! Property checks over random longitude pairs, using the shipped protocol
//! configuration.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use milan_base::{BodyKey, BodyPosition, Gender};
use milan_kuta::{KutaEngine, KutaType, ScoringSubject, SubjectPair, total_for};
use proptest::prelude::*;

const SAMPLE_CONFIG: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../data/kuta_protocols.json"
));

fn engine() -> &'static KutaEngine {
    static ENGINE: OnceLock<KutaEngine> = OnceLock::new();
    ENGINE.get_or_init(|| KutaEngine::from_json_str(SAMPLE_CONFIG, &BTreeMap::new()).unwrap())
}

fn subject(lon: f64, gender: Gender, waxing: bool) -> ScoringSubject {
    ScoringSubject::new(&BodyPosition::new(BodyKey::Mo, lon, 0.0, 13.0), gender, waxing)
}

fn female_first(f: f64, m: f64, waxing: bool) -> SubjectPair {
    SubjectPair::new(
        subject(f, Gender::Female, waxing),
        subject(m, Gender::Male, waxing),
    )
}

fn male_first(f: f64, m: f64, waxing: bool) -> SubjectPair {
    SubjectPair::new(
        subject(m, Gender::Male, waxing),
        subject(f, Gender::Female, waxing),
    )
}

/// Protocols whose sample tables carry no bonus on top of the maximum.
const BOUNDED: [&str; 13] = [
    "varna",
    "vashya",
    "tara",
    "grahamaitri",
    "gana",
    "rashi",
    "nadi",
    "vedha",
    "mahendra",
    "gotra",
    "vainashika",
    "vihanga",
    "yonyanukulya",
];

const GENDER_RESOLVED: [&str; 9] = [
    "varna",
    "vashya",
    "grahamaitri",
    "mahendra",
    "vedha",
    "stri",
    "nadi",
    "yoni",
    "gana",
];

proptest! {
    #[test]
    fn rashi_and_tara_ignore_subject_order(a in 0.0f64..360.0, b in 0.0f64..360.0) {
        for key in ["rashi", "tara"] {
            let x = engine().compute_key(key, &female_first(a, b, true)).score;
            let y = engine().compute_key(key, &female_first(b, a, true)).score;
            prop_assert_eq!(x, y, "{}", key);
        }
    }

    #[test]
    fn argument_order_does_not_change_score(
        f in 0.0f64..360.0,
        m in 0.0f64..360.0,
        waxing in any::<bool>(),
    ) {
        for key in GENDER_RESOLVED {
            let x = engine().compute_key(key, &female_first(f, m, waxing));
            let y = engine().compute_key(key, &male_first(f, m, waxing));
            prop_assert_eq!(x.score, y.score, "{}", key);
            prop_assert_eq!(x.max, y.max, "{}", key);
        }
    }

    #[test]
    fn argument_order_swaps_descriptors(f in 0.0f64..360.0, m in 0.0f64..360.0) {
        for key in ["varna", "vashya", "grahamaitri", "yoni"] {
            let x = engine().compute_key(key, &female_first(f, m, true));
            let y = engine().compute_key(key, &male_first(f, m, true));
            prop_assert_eq!(&x.c1_value, &y.c2_value, "{}", key);
            prop_assert_eq!(&x.c2_value, &y.c1_value, "{}", key);
        }
    }

    #[test]
    fn bounded_protocols_stay_within_max(
        f in 0.0f64..360.0,
        m in 0.0f64..360.0,
        waxing in any::<bool>(),
    ) {
        for key in BOUNDED {
            let row = engine().compute_key(key, &female_first(f, m, waxing));
            prop_assert!(row.score >= 0.0, "{} below zero", key);
            prop_assert!(row.score <= row.max + 1e-9, "{} above max", key);
        }
    }

    #[test]
    fn numeric_scale_is_linear(
        f in 0.0f64..360.0,
        m in 0.0f64..360.0,
        target in 0.5f64..20.0,
    ) {
        let pair = female_first(f, m, true);
        let base = engine().compute_key("tara", &pair);
        let scaled = engine().compute_key(&format!("tara/scale/{target}"), &pair);
        prop_assert!((scaled.max - target).abs() < 1e-9);
        prop_assert!((scaled.score - base.score / base.max * target).abs() < 1e-9);
    }

    #[test]
    fn totals_are_plain_sums(f in 0.0f64..360.0, m in 0.0f64..360.0) {
        let pair = female_first(f, m, true);
        let rows: Vec<_> = KutaType::All
            .key_specs()
            .iter()
            .map(|s| engine().compute_item(s, &pair))
            .collect();
        for kind in [KutaType::Ashta, KutaType::Dasha, KutaType::Sapta] {
            let keys = kind.keys();
            let total = total_for(&rows, &keys);
            let expected: f64 = rows
                .iter()
                .filter(|r| keys.contains(&r.variant_key.as_str()))
                .map(|r| r.score)
                .sum();
            prop_assert!((total.score - expected).abs() < 1e-9);
        }
    }
}
