//! Nadi: same or different pulse category.

use super::{Outcome, describe};
use crate::config::{NadiCompare, NadiConfig};
use crate::subject::{ScoringSubject, SubjectPair};

fn nadi_of(config: &NadiConfig, subject: &ScoringSubject) -> Option<u8> {
    config.nakshatra_nadi.get(subject.nakshatra_index()).copied()
}

pub(crate) fn score(config: &NadiConfig, pair: &SubjectPair) -> Option<Outcome> {
    let a = nadi_of(config, pair.first())?;
    let b = nadi_of(config, pair.second())?;
    let compare = if a == b {
        NadiCompare::Same
    } else {
        NadiCompare::Different
    };
    let score = config
        .rules
        .iter()
        .find(|r| r.mode == "value" && r.action == "score" && r.compare == compare)
        .map(|r| r.value)
        .unwrap_or(0.0);
    let (c1, c2) = describe(pair, "nadi", |s| nadi_of(config, s))?;
    Some(Outcome::new(score).with_values(c1, c2))
}
