//! Tara (dina): nakshatra distance reduced to the nine-star cycle.

use super::{Outcome, slot};
use crate::config::TaraConfig;
use crate::subject::SubjectPair;

/// Distance reduced mod 9 with 0 mapped to 9.
fn tara_of(distance: u8) -> u8 {
    match distance % 9 {
        0 => 9,
        t => t,
    }
}

pub(crate) fn score(config: &TaraConfig, pair: &SubjectPair) -> Option<Outcome> {
    let t1 = tara_of(pair.nakshatra_distance());
    let t2 = tara_of(pair.nakshatra_distance_back());
    let s1 = *config.scores.get(slot(t1)?)?;
    let s2 = *config.scores.get(slot(t2)?)?;
    Some(Outcome::new(s1 + s2).with_values(format!("tara/{t1}"), format!("tara/{t2}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocols::fixtures::{nak, pair};

    fn config() -> TaraConfig {
        TaraConfig {
            match_type: true,
            max: Some(3.0),
            scores: vec![1.5, 0.0, 1.5, 0.0, 1.5, 0.0, 1.5, 0.0, 1.5],
        }
    }

    #[test]
    fn reduction_wraps_to_nine() {
        assert_eq!(tara_of(1), 1);
        assert_eq!(tara_of(9), 9);
        assert_eq!(tara_of(18), 9);
        assert_eq!(tara_of(27), 9);
        assert_eq!(tara_of(10), 1);
    }

    #[test]
    fn same_nakshatra_doubles_first_entry() {
        let mut c = config();
        c.scores[0] = 1.25;
        let out = score(&c, &pair(nak(5), nak(5))).unwrap();
        assert_eq!(out.score, 2.5);
        assert_eq!(out.c1.as_deref(), Some("tara/1"));
    }

    #[test]
    fn both_directions_summed() {
        // 1 -> 3 is distance 3 (tara 3 = 1.5), 3 -> 1 is distance 26 (tara 8 = 0)
        let out = score(&config(), &pair(nak(1), nak(3))).unwrap();
        assert_eq!(out.score, 1.5);
    }
}
