//! Rashi (bhakoot): sign distance in both directions.

use milan_base::inclusive_distance;

use super::{Outcome, slot};
use crate::config::RashiConfig;
use crate::subject::SubjectPair;

pub(crate) fn score(config: &RashiConfig, pair: &SubjectPair) -> Option<Outcome> {
    let (a, b) = (pair.first().sign(), pair.second().sign());
    let forward = inclusive_distance(a, b, 12);
    let backward = inclusive_distance(b, a, 12);
    let table = &config.sign_differences;
    let s1 = *table.get(slot(forward)?)?;
    let s2 = *table.get(slot(backward)?)?;
    Some(
        Outcome::new((s1 + s2) / 2.0)
            .with_values(format!("rashi/{a}/{forward}"), format!("rashi/{b}/{backward}")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocols::fixtures::{pair, sign};

    fn config() -> RashiConfig {
        RashiConfig {
            match_type: true,
            max: Some(7.0),
            sign_differences: vec![7.0, 0.0, 7.0, 7.0, 0.0, 0.0, 7.0, 0.0, 0.0, 7.0, 7.0, 0.0],
        }
    }

    #[test]
    fn averages_both_directions() {
        // 1 -> 2 is distance 2 (0), 2 -> 1 is distance 12 (0)
        assert_eq!(score(&config(), &pair(sign(1), sign(2))).unwrap().score, 0.0);
        // 1 -> 3 distance 3 (7), 3 -> 1 distance 11 (7)
        assert_eq!(score(&config(), &pair(sign(1), sign(3))).unwrap().score, 7.0);
        // 1 -> 4 distance 4 (7), 4 -> 1 distance 10 (7)
        assert_eq!(score(&config(), &pair(sign(1), sign(4))).unwrap().score, 7.0);
        // 1 -> 5 distance 5 (0), 5 -> 1 distance 9 (0)
        assert_eq!(score(&config(), &pair(sign(1), sign(5))).unwrap().score, 0.0);
    }

    #[test]
    fn asymmetric_table_averages() {
        let mut c = config();
        c.sign_differences[1] = 4.0;
        // forward distance 2 (4), backward 12 (0)
        let out = score(&c, &pair(sign(6), sign(7))).unwrap();
        assert_eq!(out.score, 2.0);
        assert_eq!(out.c1.as_deref(), Some("rashi/6/2"));
        assert_eq!(out.c2.as_deref(), Some("rashi/7/12"));
    }

    #[test]
    fn symmetric_in_arguments() {
        for a in 1..=12 {
            for b in 1..=12 {
                let x = score(&config(), &pair(sign(a), sign(b))).unwrap().score;
                let y = score(&config(), &pair(sign(b), sign(a))).unwrap().score;
                assert_eq!(x, y);
            }
        }
    }
}
