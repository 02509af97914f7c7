//! Vedha: mutually obstructing nakshatras.

use super::Outcome;
use crate::config::VedhaConfig;
use crate::subject::{ScoringSubject, SubjectPair};

/// Score of one direction: 0 for the female side, 1 for the male side.
fn direction(
    config: &VedhaConfig,
    subject: &ScoringSubject,
    other: &ScoringSubject,
    index: u8,
) -> Option<f64> {
    let blocked = config
        .blocking
        .get(subject.nakshatra_index())?
        .contains(&other.nakshatra());
    let base = if blocked {
        config.scores.blocked
    } else {
        config.scores.clear
    };
    let overridden = config
        .overrides
        .iter()
        .find(|o| o.nakshatra == subject.nakshatra() && o.index == index)
        .map(|o| o.score);
    Some(overridden.unwrap_or(base))
}

pub(crate) fn score(config: &VedhaConfig, pair: &SubjectPair) -> Option<Outcome> {
    let (female, male) = (pair.female(), pair.male());
    let f = direction(config, female, male, 0)?;
    let m = direction(config, male, female, 1)?;
    Some(Outcome::new((f + m) / 2.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{VedhaOverride, VedhaScores};
    use crate::protocols::fixtures::{nak, pair, swapped};

    fn config() -> VedhaConfig {
        let mut blocking = vec![Vec::new(); 27];
        // Ashwini <-> Jyeshtha, Bharani <-> Anuradha
        blocking[0] = vec![18];
        blocking[17] = vec![1];
        blocking[1] = vec![17];
        blocking[16] = vec![2];
        // one-sided entry
        blocking[4] = vec![9];
        VedhaConfig {
            match_type: true,
            max: Some(1.0),
            blocking,
            scores: VedhaScores {
                clear: 1.0,
                blocked: 0.0,
            },
            overrides: Vec::new(),
        }
    }

    #[test]
    fn clear_pair_scores_full() {
        let out = score(&config(), &pair(nak(1), nak(2))).unwrap();
        assert_eq!(out.score, 1.0);
        assert!(out.c1.is_none());
    }

    #[test]
    fn mutual_block_scores_zero() {
        assert_eq!(score(&config(), &pair(nak(1), nak(18))).unwrap().score, 0.0);
    }

    #[test]
    fn one_sided_block_averages() {
        assert_eq!(score(&config(), &pair(nak(5), nak(9))).unwrap().score, 0.5);
        assert_eq!(score(&config(), &swapped(nak(5), nak(9))).unwrap().score, 0.5);
    }

    #[test]
    fn override_replaces_one_direction() {
        let mut c = config();
        c.overrides = vec![VedhaOverride {
            nakshatra: 1,
            index: 0,
            score: 0.25,
        }];
        // female Ashwini blocked by male Jyeshtha: female side overridden
        let out = score(&c, &pair(nak(1), nak(18))).unwrap();
        assert_eq!(out.score, 0.125);
        // male side in Ashwini is index 1, not overridden
        let out = score(&c, &pair(nak(18), nak(1))).unwrap();
        assert_eq!(out.score, 0.0);
    }
}
