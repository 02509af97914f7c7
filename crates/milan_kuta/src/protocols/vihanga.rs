//! Vihanga (pakshi): bird of each nakshatra, optionally by lunar phase.

use milan_base::inclusive_distance;

use super::Outcome;
use crate::config::{VihangaConfig, VihangaRelations, VihangaVariant};
use crate::subject::{ScoringSubject, SubjectPair};

fn bird_of(variant: &VihangaVariant, subject: &ScoringSubject) -> Option<u8> {
    variant
        .birds
        .bird(subject.nakshatra_index(), subject.moon_waxing())
}

fn by_relation(relations: &VihangaRelations, female: u8, male: u8) -> f64 {
    let listed = |list: &[[u8; 2]]| {
        list.iter()
            .any(|&[a, b]| (a == female && b == male) || (a == male && b == female))
    };
    if female == male {
        relations.same
    } else if listed(&relations.friends) {
        relations.friend
    } else if listed(&relations.enemies) {
        relations.enemy
    } else {
        relations.neutral
    }
}

pub(crate) fn score(config: &VihangaConfig, pair: &SubjectPair, variant: Option<&str>) -> Option<Outcome> {
    let active = match variant.and_then(|v| config.variants.get(v)) {
        Some(v) => v,
        None => config.variants.iter().next().map(|(_, v)| v)?,
    };
    let female = bird_of(active, pair.female())?;
    let male = bird_of(active, pair.male())?;

    let score = match (&active.distance_scores, &active.relations) {
        (Some(table), _) => {
            let count = u8::try_from(table.len()).ok()?;
            let distance = inclusive_distance(female, male, count);
            *table.get(usize::from(distance.checked_sub(1)?))?
        }
        (None, Some(relations)) => by_relation(relations, female, male),
        (None, None) => return None,
    };

    let c1 = bird_of(active, pair.first())?;
    let c2 = bird_of(active, pair.second())?;
    Some(
        Outcome::new(score)
            .with_max(active.max)
            .with_values(format!("vihanga/{c1}"), format!("vihanga/{c2}")),
    )
}
