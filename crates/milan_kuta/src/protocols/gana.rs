//! Gana: temperament of each nakshatra (deva, manushya, rakshasa).

use super::{Outcome, describe, slot};
use crate::config::{GanaConfig, cell};
use crate::subject::{ScoringSubject, SubjectPair};

fn gana_of(config: &GanaConfig, subject: &ScoringSubject) -> Option<u8> {
    config.nakshatra_gana.get(subject.nakshatra_index()).copied()
}

pub(crate) fn score(config: &GanaConfig, pair: &SubjectPair, variant: Option<&str>) -> Option<Outcome> {
    let (matrix, variant_max) = config.matrix_for(variant)?;
    let female = gana_of(config, pair.female())?;
    let male = gana_of(config, pair.male())?;
    let base = cell(matrix, slot(female)?, slot(male)?)?;
    let bonus: f64 = config
        .bonus
        .iter()
        .filter(|b| b.female == female && b.male == male)
        .map(|b| b.value)
        .sum();
    let (c1, c2) = describe(pair, "gana", |s| gana_of(config, s))?;
    Some(Outcome::new(base + bonus).with_max(variant_max).with_values(c1, c2))
}
