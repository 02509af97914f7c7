//! Rajju: body part and direction of each nakshatra, matched by rules.

use milan_base::{LordRelation, inclusive_distance, lord_relation, same_sign_lord};

use super::Outcome;
use crate::config::{RajjuCondition, RajjuConfig, RajjuDirection, RajjuPoint};
use crate::subject::{ScoringSubject, SubjectPair};

/// Everything a rajju condition can test.
struct Facts<'a> {
    female_body: &'a str,
    male_body: &'a str,
    same_body: bool,
    same_direction: bool,
    both_up: bool,
    both_down: bool,
    opposite_direction: bool,
    same_sign_lord: bool,
    lord_relation: Option<LordRelation>,
    mutual_seventh: bool,
}

fn check(expected: Option<bool>, actual: bool) -> bool {
    expected.is_none_or(|e| e == actual)
}

fn satisfied(when: &RajjuCondition, facts: &Facts<'_>) -> bool {
    check(when.same_body, facts.same_body)
        && check(when.same_direction, facts.same_direction)
        && check(when.both_up, facts.both_up)
        && check(when.both_down, facts.both_down)
        && check(when.opposite_direction, facts.opposite_direction)
        && check(when.same_sign_lord, facts.same_sign_lord)
        && check(when.mutual_seventh, facts.mutual_seventh)
        && when
            .either_body
            .as_deref()
            .is_none_or(|b| facts.female_body == b || facts.male_body == b)
        && when.bodies.as_ref().is_none_or(|list| {
            list.iter().any(|b| b == facts.female_body) && list.iter().any(|b| b == facts.male_body)
        })
        && when
            .lord_relation
            .is_none_or(|rel| facts.lord_relation == Some(rel))
}

fn point_of<'a>(config: &'a RajjuConfig, subject: &ScoringSubject) -> Option<&'a RajjuPoint> {
    config.nakshatra_rajju.get(subject.nakshatra_index())
}

pub(crate) fn score(config: &RajjuConfig, pair: &SubjectPair, variant: Option<&str>) -> Option<Outcome> {
    let (female, male) = (pair.female(), pair.male());
    let fp = point_of(config, female)?;
    let mp = point_of(config, male)?;

    let up = |p: &RajjuPoint| p.direction == RajjuDirection::Up;
    let down = |p: &RajjuPoint| p.direction == RajjuDirection::Down;
    let facts = Facts {
        female_body: &fp.body,
        male_body: &mp.body,
        same_body: fp.body == mp.body,
        same_direction: fp.direction == mp.direction,
        both_up: up(fp) && up(mp),
        both_down: down(fp) && down(mp),
        opposite_direction: (up(fp) && down(mp)) || (down(fp) && up(mp)),
        same_sign_lord: same_sign_lord(female.sign(), male.sign()),
        lord_relation: lord_relation(female.sign(), male.sign()),
        mutual_seventh: inclusive_distance(female.sign(), male.sign(), 12) == 7,
    };

    let (rules, bonus, variant_max) = config.rule_set(variant);
    let base = rules
        .iter()
        .find(|r| satisfied(&r.when, &facts))
        .map(|r| r.score)
        .unwrap_or(0.0);
    let extra: f64 = bonus
        .iter()
        .filter(|b| satisfied(&b.when, &facts))
        .map(|b| b.value)
        .sum();

    let first = point_of(config, pair.first())?;
    let second = point_of(config, pair.second())?;
    Some(Outcome::new(base + extra).with_max(variant_max).with_values(
        format!("rajju/{}/{}", first.body, first.direction.label()),
        format!("rajju/{}/{}", second.body, second.direction.label()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocols::fixtures::{nak, pair};
    use serde_json::json;

    /// Classical pada/kati/nabhi/kantha/shiro sequence with alternating
    /// up and down runs.
    fn config() -> RajjuConfig {
        let bodies = ["pada", "kati", "nabhi", "kantha", "shiro", "kantha", "nabhi", "kati", "pada"];
        let table: Vec<_> = (0..27)
            .map(|i| {
                let body = bodies[i % 9];
                let direction = if (i / 9) % 2 == 0 { "up" } else { "down" };
                json!({ "body": body, "direction": direction })
            })
            .collect();
        serde_json::from_value(json!({
            "matchType": true,
            "max": 4,
            "nakshatraRajju": table,
            "rules": [
                { "sameBody": false, "score": 4 },
                { "sameBody": true, "eitherBody": "shiro", "score": 0 },
                { "sameBody": true, "oppositeDirection": true, "score": 2 },
                { "sameBody": true, "score": 1 }
            ],
            "bonus": [
                { "sameBody": true, "sameSignLord": true, "oppositeDirection": true,
                  "lordRelation": "own", "mutualSeventh": false, "value": 1 }
            ],
            "variants": {
                "dasha": {
                    "rules": [{ "sameBody": false, "score": 1 }],
                    "max": 1
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn different_body_full_score() {
        let out = score(&config(), &pair(nak(1), nak(2)), None).unwrap();
        assert_eq!(out.score, 4.0);
        assert_eq!(out.c1.as_deref(), Some("rajju/pada/up"));
        assert_eq!(out.c2.as_deref(), Some("rajju/kati/up"));
    }

    #[test]
    fn first_matching_rule_wins() {
        // nakshatra 5 and 14 are both shiro
        let out = score(&config(), &pair(nak(5), nak(14)), None).unwrap();
        assert_eq!(out.score, 0.0);
        // nakshatra 1 (pada up) and 10 (pada down): opposite direction
        let out = score(&config(), &pair(nak(1), nak(10)), None).unwrap();
        assert_eq!(out.score, 2.0);
        // nakshatra 1 and 9 (pada, both up)
        let out = score(&config(), &pair(nak(1), nak(9)), None).unwrap();
        assert_eq!(out.score, 1.0);
    }

    #[test]
    fn bonus_adds_to_rule_score() {
        // Ashlesha (pada up) in Karka and Magha (pada down) in Simha: lords differ
        let out = score(&config(), &pair(112.0, 122.0), None).unwrap();
        assert_eq!(out.score, 2.0);
        // Ashwini (pada up) in Mesha and Jyeshtha (pada down) in Vrischika:
        // both ruled by Mangal, eighth from each other
        let out = score(&config(), &pair(5.0, 230.0), None).unwrap();
        assert_eq!(out.score, 3.0);
    }

    #[test]
    fn bonus_is_not_clamped() {
        let mut c = config();
        c.rules[2].score = 4.0;
        let out = score(&c, &pair(5.0, 230.0), None).unwrap();
        assert_eq!(out.score, 5.0);
        assert!(out.score > c.max.unwrap_or_default());
    }

    #[test]
    fn variant_rules_and_max() {
        let out = score(&config(), &pair(nak(1), nak(2)), Some("dasha")).unwrap();
        assert_eq!(out.score, 1.0);
        assert_eq!(out.max, Some(1.0));
        // no matching variant rule
        let out = score(&config(), &pair(nak(1), nak(10)), Some("dasha")).unwrap();
        assert_eq!(out.score, 0.0);
    }
}
