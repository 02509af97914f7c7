//! Vainashika: listed destructive nakshatra pairs.

use super::Outcome;
use crate::config::VainashikaConfig;
use crate::subject::SubjectPair;

pub(crate) fn score(config: &VainashikaConfig, pair: &SubjectPair) -> Option<Outcome> {
    let key = [pair.female().nakshatra(), pair.male().nakshatra()];
    let score = if config.pairs.contains(&key) {
        config.scores.matched
    } else {
        config.scores.unmatched
    };
    Some(Outcome::new(score))
}
