//! Yonyanukulya: nakshatra gender categories scored by table.

use super::Outcome;
use crate::config::{YonyanukulyaConfig, YonyanukulyaVariant};
use crate::subject::{ScoringSubject, SubjectPair};

fn category_of<'a>(variant: &'a YonyanukulyaVariant, subject: &ScoringSubject) -> Option<&'a str> {
    variant
        .nakshatra_gender
        .get(subject.nakshatra_index())
        .map(String::as_str)
}

pub(crate) fn score(
    config: &YonyanukulyaConfig,
    pair: &SubjectPair,
    variant: Option<&str>,
) -> Option<Outcome> {
    let active = match variant.and_then(|v| config.variants.get(v)) {
        Some(v) => v,
        None => config.variants.iter().next().map(|(_, v)| v)?,
    };
    let table = config.tables.get(&active.table)?;
    let female = category_of(active, pair.female())?;
    let male = category_of(active, pair.male())?;
    let score = *table.get(female)?.get(male)?;

    let c1 = category_of(active, pair.first())?;
    let c2 = category_of(active, pair.second())?;
    Some(
        Outcome::new(score)
            .with_max(active.max)
            .with_values(format!("yonyanukulya/{c1}"), format!("yonyanukulya/{c2}")),
    )
}
