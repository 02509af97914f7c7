//! Positional projection for Vedic compatibility scoring.
//!
//! This crate provides:
//! - Rashi, nakshatra (27 and 28 schemes) and pada lookup from a longitude
//! - Graha lordship, dignity and the natural/temporal/compound friendships
//! - Ayanamsha and varga correction of tropical longitudes
//! - A [`ChartSource`] abstraction over one subject's corrected positions
//!
//! Everything here is pure math over plain longitudes; no ephemeris access.

pub mod body;
pub mod chart;
pub mod error;
pub mod graha;
pub mod graha_relationships;
pub mod nakshatra;
pub mod rashi;
pub mod util;
pub mod varga;

pub use body::{ALL_BODY_KEYS, BodyKey, BodyPosition, DEFAULT_BODY_KEYS};
pub use chart::{Chart, ChartSource, Gender, RawBody};
pub use error::{BaseError, Result};
pub use graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS, rashi_lord, rashi_lord_by_number};
pub use graha_relationships::{
    CompoundMaitri, DignityFlags, LordRelation, NaisargikaMaitri, RulerRelationship,
    TatkalikaMaitri, dignity_flags, lord_relation, naisargika_maitri, panchadha_maitri,
    ruler_relationship, same_sign_lord, tatkalika_maitri,
};
pub use nakshatra::{
    ABHIJIT_INDEX, ALL_NAKSHATRAS_27, NAKSHATRA_28_NAMES, NAKSHATRA_SPAN_27, Nakshatra,
    Nakshatra28Info, NakshatraInfo, PADA_SPAN, Purushartha, nakshatra_from_longitude,
    nakshatra28_boundaries, nakshatra28_from_longitude,
};
pub use rashi::{
    ALL_RASHIS, Dms, Rashi, RashiElement, RashiInfo, RashiMobility, deg_to_dms,
    rashi_from_longitude,
};
pub use util::{inclusive_distance, normalize_360};
pub use varga::{moon_waxing, varga_longitude};
