//! Scoring subjects: the minimal per-body view every protocol consumes.
//!
//! Protocol code only sees [`ScoringSubject`] through a [`SubjectPair`],
//! never the underlying [`BodyPosition`].

use milan_base::{
    BodyKey, BodyPosition, Gender, Graha, Purushartha, RashiElement, RashiMobility,
    inclusive_distance, rashi_lord,
};

/// One body of one chart, projected for scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringSubject {
    key: BodyKey,
    gender: Gender,
    position: BodyPosition,
    moon_waxing: bool,
}

impl ScoringSubject {
    pub fn new(position: &BodyPosition, gender: Gender, moon_waxing: bool) -> Self {
        Self {
            key: position.key(),
            gender,
            position: *position,
            moon_waxing,
        }
    }

    pub fn key(&self) -> BodyKey {
        self.key
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn longitude(&self) -> f64 {
        self.position.longitude()
    }

    /// 1-based sign number.
    pub fn sign(&self) -> u8 {
        self.position.sign()
    }

    /// 0-based sign index, for table lookup.
    pub fn sign_index(&self) -> usize {
        (self.sign() - 1) as usize
    }

    /// 1-based 27-scheme nakshatra number.
    pub fn nakshatra(&self) -> u8 {
        self.position.nakshatra()
    }

    /// 0-based 27-scheme nakshatra index, for table lookup.
    pub fn nakshatra_index(&self) -> usize {
        (self.nakshatra() - 1) as usize
    }

    /// 1-based 28-scheme nakshatra number.
    pub fn nakshatra28(&self) -> u8 {
        self.position.nakshatra28()
    }

    /// Ruler of the sign.
    pub fn ruler(&self) -> Graha {
        rashi_lord(self.position.rashi())
    }

    /// Vimshottari lord of the nakshatra.
    pub fn nakshatra_ruler(&self) -> Graha {
        self.position.nakshatra_info().nakshatra.lord()
    }

    pub fn nakshatra_goal(&self) -> Purushartha {
        self.position.nakshatra_info().nakshatra.goal()
    }

    pub fn element(&self) -> RashiElement {
        self.position.rashi().element()
    }

    pub fn mobility(&self) -> RashiMobility {
        self.position.rashi().mobility()
    }

    pub fn moon_waxing(&self) -> bool {
        self.moon_waxing
    }
}

/// Two subjects in argument order, with the gender orientation fixed once.
///
/// `female()` is the first subject when it is female or when the second is
/// not; otherwise the second. Algorithms that depend on gender read only
/// `female()` and `male()`, so swapping arguments with genders fixed cannot
/// change their result.
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectPair {
    first: ScoringSubject,
    second: ScoringSubject,
    female_first: bool,
}

impl SubjectPair {
    pub fn new(first: ScoringSubject, second: ScoringSubject) -> Self {
        let female_first = first.gender().is_female() || !second.gender().is_female();
        Self {
            first,
            second,
            female_first,
        }
    }

    /// Subject built from the first chart.
    pub fn first(&self) -> &ScoringSubject {
        &self.first
    }

    /// Subject built from the second chart.
    pub fn second(&self) -> &ScoringSubject {
        &self.second
    }

    pub fn female_first(&self) -> bool {
        self.female_first
    }

    pub fn female(&self) -> &ScoringSubject {
        if self.female_first {
            &self.first
        } else {
            &self.second
        }
    }

    pub fn male(&self) -> &ScoringSubject {
        if self.female_first {
            &self.second
        } else {
            &self.first
        }
    }

    /// True when the two subjects carry different gender tags.
    pub fn genders_differ(&self) -> bool {
        self.first.gender() != self.second.gender()
    }

    /// Inclusive nakshatra distance first → second (1..=27).
    pub fn nakshatra_distance(&self) -> u8 {
        inclusive_distance(self.first.nakshatra(), self.second.nakshatra(), 27)
    }

    /// Inclusive nakshatra distance second → first (1..=27).
    pub fn nakshatra_distance_back(&self) -> u8 {
        inclusive_distance(self.second.nakshatra(), self.first.nakshatra(), 27)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject(key: BodyKey, lon: f64, gender: Gender) -> ScoringSubject {
        ScoringSubject::new(&BodyPosition::new(key, lon, 0.0, 1.0), gender, true)
    }

    #[test]
    fn derived_accessors() {
        let s = subject(BodyKey::Mo, 95.0, Gender::Female);
        assert_eq!(s.sign(), 4);
        assert_eq!(s.sign_index(), 3);
        assert_eq!(s.nakshatra(), 8);
        assert_eq!(s.nakshatra_index(), 7);
        assert_eq!(s.ruler(), Graha::Chandra);
        assert_eq!(s.nakshatra_ruler(), Graha::Shani);
        assert_eq!(s.nakshatra_goal(), Purushartha::Dharma);
        assert_eq!(s.element(), RashiElement::Water);
        assert_eq!(s.mobility(), RashiMobility::Movable);
    }

    #[test]
    fn female_first_orientation() {
        let f = subject(BodyKey::Mo, 10.0, Gender::Female);
        let m = subject(BodyKey::Mo, 200.0, Gender::Male);

        let p = SubjectPair::new(f.clone(), m.clone());
        assert!(p.female_first());
        assert_eq!(p.female().gender(), Gender::Female);

        let q = SubjectPair::new(m, f);
        assert!(!q.female_first());
        assert_eq!(q.female().gender(), Gender::Female);
        assert_eq!(q.male().gender(), Gender::Male);
    }

    #[test]
    fn same_gender_first_takes_female_role() {
        let a = subject(BodyKey::Su, 10.0, Gender::Male);
        let b = subject(BodyKey::Su, 20.0, Gender::Male);
        let p = SubjectPair::new(a, b);
        assert!(p.female_first());
        assert!((p.female().longitude() - 10.0).abs() < 1e-10);
        assert!(!p.genders_differ());
    }

    #[test]
    fn nakshatra_distances_wrap() {
        let a = subject(BodyKey::Mo, 355.0, Gender::Female);
        let b = subject(BodyKey::Mo, 5.0, Gender::Male);
        let p = SubjectPair::new(a, b);
        assert_eq!(p.nakshatra_distance(), 2);
        assert_eq!(p.nakshatra_distance_back(), 27);
    }
}
