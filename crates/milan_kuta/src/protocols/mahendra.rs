//! Mahendra: male nakshatra in the female nakshatra's compatible list.

use super::Outcome;
use crate::config::MahendraConfig;
use crate::subject::SubjectPair;

pub(crate) fn score(
    config: &MahendraConfig,
    pair: &SubjectPair,
    variant: Option<&str>,
) -> Option<Outcome> {
    let compatible = config.compatible.get(pair.female().nakshatra_index())?;
    if !compatible.contains(&pair.male().nakshatra()) {
        return Some(Outcome::new(0.0));
    }
    match variant.and_then(|v| config.variants.get(v)) {
        Some(v) => Some(Outcome::new(v.score).with_max(v.max)),
        None => Some(Outcome::new(config.score?)),
    }
}
