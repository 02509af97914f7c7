//! Yoni: animal symbol of each nakshatra, with a gender bonus.

use milan_base::Gender;

use super::{Outcome, describe, slot};
use crate::config::{YoniConfig, cell};
use crate::subject::{ScoringSubject, SubjectPair};

fn yoni_of(config: &YoniConfig, subject: &ScoringSubject) -> Option<u8> {
    config.nakshatra_yoni.get(subject.nakshatra_index()).copied()
}

/// True when the subject's gender equals its yoni's natural gender.
fn gender_matches(config: &YoniConfig, subject: &ScoringSubject, gender: Gender) -> bool {
    config
        .nakshatra_gender
        .as_ref()
        .and_then(|g| g.get(subject.nakshatra_index()))
        .is_some_and(|natural| *natural == gender)
}

pub(crate) fn score(config: &YoniConfig, pair: &SubjectPair, variant: Option<&str>) -> Option<Outcome> {
    let (matrix, variant_max) = config.matrix_for(variant)?;
    let female = yoni_of(config, pair.female())?;
    let male = yoni_of(config, pair.male())?;
    let mut score = cell(matrix, slot(female)?, slot(male)?)?;

    if pair.genders_differ() {
        let female_matches = gender_matches(config, pair.female(), Gender::Female);
        let male_matches = gender_matches(config, pair.male(), Gender::Male);
        score += config
            .bonus
            .iter()
            .filter(|b| b.female_matches == female_matches && b.male_matches == male_matches)
            .map(|b| b.value)
            .sum::<f64>();
    }

    let (c1, c2) = describe(pair, "yoni", |s| yoni_of(config, s))?;
    Some(Outcome::new(score).with_max(variant_max).with_values(c1, c2))
}
