//! Gotra: clan of the 28-scheme nakshatra.

use super::{Outcome, describe, slot};
use crate::config::GotraConfig;
use crate::subject::{ScoringSubject, SubjectPair};

fn gotra_of(config: &GotraConfig, subject: &ScoringSubject) -> Option<u8> {
    config.nakshatra_gotra.get(slot(subject.nakshatra28())?).copied()
}

pub(crate) fn score(config: &GotraConfig, pair: &SubjectPair) -> Option<Outcome> {
    let a = gotra_of(config, pair.first())?;
    let b = gotra_of(config, pair.second())?;
    let score = if a == b {
        config.scores.same
    } else {
        config.scores.different
    };
    let (c1, c2) = describe(pair, "gotra", |s| gotra_of(config, s))?;
    Some(Outcome::new(score).with_values(c1, c2))
}
