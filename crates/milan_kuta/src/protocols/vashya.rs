//! Vashya: mutual control, either by sign lists or by degree ranges.

use super::{Outcome, slot};
use crate::config::{DegreeRange, DegreeVashya, SignVashya, VashyaConfig, VashyaRule, cell};
use crate::subject::{ScoringSubject, SubjectPair};

pub(crate) fn score(config: &VashyaConfig, pair: &SubjectPair, variant: Option<&str>) -> Option<Outcome> {
    let rule = match variant.and_then(|v| config.variants.get(v)) {
        Some(rule) => rule,
        None => config.variants.iter().next().map(|(_, r)| r)?,
    };
    let outcome = match rule {
        VashyaRule::Sign(sign) => by_sign(sign, pair)?,
        VashyaRule::Degree(degree) => by_degree(config, degree, pair)?,
    };
    Some(outcome.with_max(rule.max()))
}

/// True when `other`'s sign is in the allowed list of `subject`'s sign.
fn holds(rule: &SignVashya, subject: &ScoringSubject, other: &ScoringSubject) -> Option<bool> {
    let allowed = rule.allowed.get(subject.sign_index())?;
    Some(allowed.contains(&other.sign()))
}

fn by_sign(rule: &SignVashya, pair: &SubjectPair) -> Option<Outcome> {
    let (female, male) = (pair.female(), pair.male());
    let female_hit = holds(rule, female, male)?;
    let male_hit = holds(rule, male, female)?;
    let score = match (female_hit, male_hit) {
        (true, true) => (rule.female_score + rule.male_score) / 2.0,
        (true, false) => rule.female_score,
        (false, true) => rule.male_score,
        (false, false) => 0.0,
    };
    Some(Outcome::new(score).with_values(
        format!("rashi/{}", pair.first().sign()),
        format!("rashi/{}", pair.second().sign()),
    ))
}

fn range_of(ranges: &[DegreeRange], longitude: f64) -> Option<&DegreeRange> {
    ranges
        .iter()
        .find(|r| longitude >= r.from && longitude < r.to)
}

fn range_label(range: &DegreeRange) -> String {
    match &range.label {
        Some(label) => label.clone(),
        None => format!("vashya/{}", range.vashya),
    }
}

fn by_degree(config: &VashyaConfig, rule: &DegreeVashya, pair: &SubjectPair) -> Option<Outcome> {
    let grid = config.grids.get(&rule.grid)?;
    let female = range_of(&rule.ranges, pair.female().longitude())?;
    let male = range_of(&rule.ranges, pair.male().longitude())?;
    let score = cell(grid, slot(female.vashya)?, slot(male.vashya)?)?;

    let first = range_of(&rule.ranges, pair.first().longitude())?;
    let second = range_of(&rule.ranges, pair.second().longitude())?;
    Some(Outcome::new(score).with_values(range_label(first), range_label(second)))
}
