//! Stri deergha: distance of the male nakshatra from the female one.

use milan_base::inclusive_distance;

use super::Outcome;
use crate::config::StriConfig;
use crate::subject::SubjectPair;

pub(crate) fn score(config: &StriConfig, pair: &SubjectPair) -> Option<Outcome> {
    let (female, male) = (pair.female(), pair.male());
    let distance = inclusive_distance(female.nakshatra(), male.nakshatra(), 27);
    let mut score = config
        .ranges
        .iter()
        .find(|r| (r.from..=r.to).contains(&distance))
        .map(|r| r.score)
        .unwrap_or(0.0);

    if let Some(bonus) = &config.same_nakshatra_bonus {
        if distance == 1 && bonus.nakshatras.contains(&female.nakshatra()) {
            score += bonus.value;
        }
    }
    Some(Outcome::new(score))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{StriBonus, StriRange};
    use crate::protocols::fixtures::{nak, pair, swapped};

    fn config() -> StriConfig {
        StriConfig {
            match_type: true,
            max: Some(1.0),
            ranges: vec![
                StriRange {
                    from: 1,
                    to: 9,
                    score: 0.0,
                },
                StriRange {
                    from: 10,
                    to: 13,
                    score: 0.5,
                },
                StriRange {
                    from: 14,
                    to: 27,
                    score: 1.0,
                },
            ],
            same_nakshatra_bonus: Some(StriBonus {
                nakshatras: vec![4, 5],
                value: 0.5,
            }),
        }
    }

    #[test]
    fn distance_bands() {
        assert_eq!(score(&config(), &pair(nak(1), nak(5))).unwrap().score, 0.0);
        assert_eq!(score(&config(), &pair(nak(1), nak(11))).unwrap().score, 0.5);
        assert_eq!(score(&config(), &pair(nak(1), nak(20))).unwrap().score, 1.0);
    }

    #[test]
    fn counted_from_female_in_either_order() {
        assert_eq!(score(&config(), &swapped(nak(1), nak(20))).unwrap().score, 1.0);
        // male before female wraps around
        assert_eq!(score(&config(), &pair(nak(20), nak(1))).unwrap().score, 0.0);
    }

    #[test]
    fn same_nakshatra_bonus() {
        assert_eq!(score(&config(), &pair(nak(4), nak(4))).unwrap().score, 0.5);
        assert_eq!(score(&config(), &pair(nak(6), nak(6))).unwrap().score, 0.0);
    }
}
