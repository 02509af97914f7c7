//! Grahas and sign lordship.
//!
//! Compatibility rules that compare sign rulers (graha maitri, the rajju
//! bonus) resolve them through [`rashi_lord`].

use crate::rashi::Rashi;

/// The 9 Vedic grahas, in weekday order followed by the nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

use Graha::*;

pub const ALL_GRAHAS: [Graha; 9] = [Surya, Chandra, Mangal, Buddh, Guru, Shukra, Shani, Rahu, Ketu];

/// Grahas that own signs; the nodes are left out.
pub const SAPTA_GRAHAS: [Graha; 7] = [Surya, Chandra, Mangal, Buddh, Guru, Shukra, Shani];

const GRAHA_NAMES: [&str; 9] = [
    "Surya", "Chandra", "Mangal", "Buddh", "Guru", "Shukra", "Shani", "Rahu", "Ketu",
];

/// Lords of Mesha through Meena.
const SIGN_LORDS: [Graha; 12] = [
    Mangal, Shukra, Buddh, Chandra, Surya, Buddh, Shukra, Mangal, Guru, Shani, Shani, Guru,
];

impl Graha {
    pub const fn name(self) -> &'static str {
        GRAHA_NAMES[self as usize]
    }

    /// Position in [`ALL_GRAHAS`].
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn is_node(self) -> bool {
        matches!(self, Rahu | Ketu)
    }
}

pub const fn rashi_lord(rashi: Rashi) -> Graha {
    SIGN_LORDS[rashi.index() as usize]
}

/// Lord by 1-based sign number; `None` outside 1..=12.
pub fn rashi_lord_by_number(sign: u8) -> Option<Graha> {
    Rashi::from_number(sign).map(rashi_lord)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_follow_enum_order() {
        for (i, g) in ALL_GRAHAS.iter().enumerate() {
            assert_eq!(usize::from(g.index()), i);
        }
        assert_eq!(Shukra.name(), "Shukra");
        assert_eq!(Ketu.name(), "Ketu");
    }

    #[test]
    fn only_nodes_are_nodes() {
        let nodes: Vec<Graha> = ALL_GRAHAS.into_iter().filter(|g| g.is_node()).collect();
        assert_eq!(nodes, vec![Rahu, Ketu]);
    }

    #[test]
    fn every_sign_lord_is_a_sapta_graha() {
        for sign in 1..=12 {
            let lord = rashi_lord_by_number(sign).unwrap();
            assert!(SAPTA_GRAHAS.contains(&lord), "sign {sign}");
        }
        assert_eq!(rashi_lord(Rashi::Karka), Chandra);
        assert_eq!(rashi_lord(Rashi::Simha), Surya);
        assert_eq!(rashi_lord(Rashi::Vrischika), Mangal);
        assert_eq!(rashi_lord(Rashi::Kumbha), Shani);
        assert_eq!(rashi_lord(Rashi::Meena), Guru);
    }

    #[test]
    fn sign_numbers_out_of_range() {
        assert_eq!(rashi_lord_by_number(0), None);
        assert_eq!(rashi_lord_by_number(13), None);
    }
}
