//! Varna: caste grade of each sign, scored from the groom-score table.

use super::{Outcome, describe, slot};
use crate::config::{VarnaConfig, cell};
use crate::subject::{ScoringSubject, SubjectPair};

fn varna_of(config: &VarnaConfig, subject: &ScoringSubject) -> Option<u8> {
    config.sign_varna.get(subject.sign_index()).copied()
}

pub(crate) fn score(config: &VarnaConfig, pair: &SubjectPair) -> Option<Outcome> {
    let female = varna_of(config, pair.female())?;
    let male = varna_of(config, pair.male())?;
    let score = cell(&config.groom_scores, slot(female)?, slot(male)?)?;
    let (c1, c2) = describe(pair, "varna", |s| varna_of(config, s))?;
    Some(Outcome::new(score).with_values(c1, c2))
}
