//! Graha maitri: friendship between the two sign rulers.

use milan_base::lord_relation;

use super::Outcome;
use crate::config::{GrahaMaitriConfig, cell};
use crate::subject::SubjectPair;

pub(crate) fn score(
    config: &GrahaMaitriConfig,
    pair: &SubjectPair,
    variant: Option<&str>,
) -> Option<Outcome> {
    let (matrix, variant_max) = config.matrix_for(variant)?;
    let (female, male) = (pair.female(), pair.male());
    let female_rel = lord_relation(female.sign(), male.sign())?;
    let male_rel = lord_relation(male.sign(), female.sign())?;
    let score = cell(matrix, female_rel.index(), male_rel.index())?;

    let (first_rel, second_rel) = if pair.female_first() {
        (female_rel, male_rel)
    } else {
        (male_rel, female_rel)
    };
    Some(Outcome::new(score).with_max(variant_max).with_values(
        format!("dignity/{}", first_rel.label()),
        format!("dignity/{}", second_rel.label()),
    ))
}
