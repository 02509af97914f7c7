//! Protocol algorithms.
//!
//! Each algorithm is a pure function of its configuration shape, the
//! subject pair and the active variant name. A `None` return means a table
//! lookup fell outside the configured data; the engine turns that into a
//! zero row.

mod gana;
mod gotra;
mod grahamaitri;
mod mahendra;
mod nadi;
mod rajju;
mod rashi;
mod stri;
mod tara;
mod vainashika;
mod varna;
mod vashya;
mod vedha;
mod vihanga;
mod yoni;
mod yonyanukulya;

use crate::config::ProtocolConfig;
use crate::subject::{ScoringSubject, SubjectPair};

/// Raw algorithm result before post-processing.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Outcome {
    pub score: f64,
    /// Unset means the protocol default applies.
    pub max: Option<f64>,
    /// Descriptor of the first subject; unset falls back to the nakshatra form.
    pub c1: Option<String>,
    pub c2: Option<String>,
}

impl Outcome {
    pub fn new(score: f64) -> Self {
        Self {
            score,
            max: None,
            c1: None,
            c2: None,
        }
    }

    pub fn with_max(mut self, max: Option<f64>) -> Self {
        self.max = max;
        self
    }

    /// Descriptors in argument order.
    pub fn with_values(mut self, c1: String, c2: String) -> Self {
        self.c1 = Some(c1);
        self.c2 = Some(c2);
        self
    }
}

/// Dispatch to the algorithm for this shape.
pub(crate) fn evaluate(
    config: &ProtocolConfig,
    pair: &SubjectPair,
    variant: Option<&str>,
) -> Option<Outcome> {
    match config {
        ProtocolConfig::Varna(c) => varna::score(c, pair),
        ProtocolConfig::Rashi(c) => rashi::score(c, pair),
        ProtocolConfig::Tara(c) => tara::score(c, pair),
        ProtocolConfig::Nadi(c) => nadi::score(c, pair),
        ProtocolConfig::Yoni(c) => yoni::score(c, pair, variant),
        ProtocolConfig::Gana(c) => gana::score(c, pair, variant),
        ProtocolConfig::Vashya(c) => vashya::score(c, pair, variant),
        ProtocolConfig::GrahaMaitri(c) => grahamaitri::score(c, pair, variant),
        ProtocolConfig::Mahendra(c) => mahendra::score(c, pair, variant),
        ProtocolConfig::Vedha(c) => vedha::score(c, pair),
        ProtocolConfig::Rajju(c) => rajju::score(c, pair, variant),
        ProtocolConfig::Stri(c) => stri::score(c, pair),
        ProtocolConfig::Vainashika(c) => vainashika::score(c, pair),
        ProtocolConfig::Yonyanukulya(c) => yonyanukulya::score(c, pair, variant),
        ProtocolConfig::Vihanga(c) => vihanga::score(c, pair, variant),
        ProtocolConfig::Gotra(c) => gotra::score(c, pair),
        ProtocolConfig::Unconfigured => None,
    }
}

/// 0-based index of a 1-based table number.
pub(crate) fn slot(number: u8) -> Option<usize> {
    number.checked_sub(1).map(usize::from)
}

/// Per-subject descriptors in argument order, built from one projection.
pub(crate) fn describe<T: std::fmt::Display>(
    pair: &SubjectPair,
    prefix: &str,
    f: impl Fn(&ScoringSubject) -> Option<T>,
) -> Option<(String, String)> {
    let a = f(pair.first())?;
    let b = f(pair.second())?;
    Some((format!("{prefix}/{a}"), format!("{prefix}/{b}")))
}
