//! Sub-totals over a named subset of rows.
//!
//! A total is always the plain sum of the matching rows; the synthetic
//! `total` row is built by the same summation.

use serde::Serialize;

use crate::key_set::{KutaType, SUBTOTAL_TYPES};
use crate::row::ScoreRow;

/// Summed score and maximum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Total {
    pub score: f64,
    pub max: f64,
}

/// Sum rows whose `variant_key` is in `keys`.
pub fn total_for<S: AsRef<str>>(rows: &[ScoreRow], keys: &[S]) -> Total {
    rows.iter()
        .filter(|r| keys.iter().any(|k| k.as_ref() == r.variant_key))
        .fold(Total::default(), |acc, r| Total {
            score: acc.score + r.score,
            max: acc.max + r.max,
        })
}

/// Append a synthetic `total` row summed over `keys`.
pub fn with_total<S: AsRef<str>>(mut rows: Vec<ScoreRow>, keys: &[S]) -> Vec<ScoreRow> {
    let total = total_for(&rows, keys);
    let head = rows
        .first()
        .map(|r| r.head.clone())
        .unwrap_or_else(|| "-".to_string());
    let mut row = ScoreRow::zero("total", "total", head);
    row.score = total.score;
    row.max = total.max;
    rows.push(row);
    rows
}

/// Sub-totals for ashta, dasha, dvadasha and sapta.
///
/// A set is skipped unless every one of its keys has a row. Union key-sets
/// keep one suffix per protocol, so `all` never completes ashta or sapta.
pub fn subtotals(rows: &[ScoreRow]) -> Vec<(KutaType, Total)> {
    SUBTOTAL_TYPES
        .iter()
        .filter(|t| t.is_covered_by(rows))
        .map(|&t| (t, t.total_for(rows)))
        .collect()
}

impl KutaType {
    /// Total over this key-set's own keys.
    pub fn total_for(self, rows: &[ScoreRow]) -> Total {
        total_for(rows, &self.keys())
    }

    /// True when `rows` holds a row for every key of this set.
    pub fn is_covered_by(self, rows: &[ScoreRow]) -> bool {
        self.keys()
            .iter()
            .all(|k| rows.iter().any(|r| r.variant_key == *k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(variant_key: &str, score: f64, max: f64) -> ScoreRow {
        let key = variant_key.split('/').next().unwrap_or(variant_key);
        let mut r = ScoreRow::zero(key, variant_key, "mo 1.00° / mo 2.00°".into());
        r.score = score;
        r.max = max;
        r
    }

    #[test]
    fn sums_only_listed_keys() {
        let rows = vec![row("tara", 1.5, 3.0), row("yoni", 2.0, 4.0), row("nadi", 8.0, 8.0)];
        let t = total_for(&rows, &["tara", "nadi"]);
        assert_eq!(t, Total { score: 9.5, max: 11.0 });
    }

    #[test]
    fn suffix_must_match_exactly() {
        let rows = vec![row("tara/scale/6", 3.0, 6.0)];
        assert_eq!(total_for(&rows, &["tara"]), Total::default());
        assert_eq!(total_for(&rows, &["tara/scale/6"]).max, 6.0);
    }

    #[test]
    fn total_row_appended() {
        let rows = vec![row("tara", 1.5, 3.0), row("yoni", 2.0, 4.0)];
        let out = with_total(rows, &["tara", "yoni"]);
        assert_eq!(out.len(), 3);
        let last = &out[2];
        assert_eq!(last.key, "total");
        assert_eq!(last.score, 3.5);
        assert_eq!(last.max, 7.0);
        assert_eq!(last.head, "mo 1.00° / mo 2.00°");
    }

    #[test]
    fn kuta_type_totals() {
        let rows: Vec<ScoreRow> = KutaType::Dasha
            .keys()
            .into_iter()
            .map(|k| row(k, 1.0, 2.0))
            .collect();
        let t = KutaType::Dasha.total_for(&rows);
        assert_eq!(t, Total { score: 10.0, max: 20.0 });
        // dasha rows share only yoni, grahamaitri and rashi with ashta
        assert_eq!(KutaType::Ashta.total_for(&rows).score, 3.0);
        assert_eq!(subtotals(&rows), vec![(KutaType::Dasha, t)]);
    }

    #[test]
    fn partial_sets_have_no_subtotal() {
        let rows: Vec<ScoreRow> = KutaType::All
            .keys()
            .into_iter()
            .map(|k| row(k, 1.0, 2.0))
            .collect();
        assert!(!KutaType::Ashta.is_covered_by(&rows));
        assert!(!KutaType::Sapta.is_covered_by(&rows));
        let kinds: Vec<KutaType> = subtotals(&rows).into_iter().map(|(t, _)| t).collect();
        assert_eq!(kinds, vec![KutaType::Dasha]);
        assert!(subtotals(&[]).is_empty());
    }
}
