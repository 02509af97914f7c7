//! Multi-protocol Kuta compatibility scoring.
//!
//! This crate provides:
//! - Typed protocol configuration loaded from JSON, with ordered variants
//! - Sixteen table-driven scoring algorithms behind one dispatcher
//! - Key-set catalog (ashta, dasha, dvadasha, sapta, other and unions)
//! - Per-pair and cross-pair scoring with rescaling and zero-row fallback
//! - Sub-totals over named key subsets
//!
//! ```no_run
//! use std::collections::BTreeMap;
//! use std::path::Path;
//!
//! use milan_base::{BodyKey, Chart};
//! use milan_kuta::{KutaEngine, KutaType};
//!
//! let engine = KutaEngine::from_json_file(Path::new("data/kuta_protocols.json"), &BTreeMap::new())?;
//! let c1 = Chart::from_json_file(Path::new("her.json"))?;
//! let c2 = Chart::from_json_file(Path::new("his.json"))?;
//! let rows = engine.compute_all_pairs(&c1, &c2, &[BodyKey::Mo], false, KutaType::Ashta);
//! let total = KutaType::Ashta.total_for(&rows[0].values);
//! println!("{} / {}", total.score, total.max);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod aggregate;
pub mod config;
pub mod engine;
pub mod error;
pub mod key_set;
mod protocols;
pub mod row;
pub mod subject;

pub use aggregate::{Total, subtotals, total_for, with_total};
pub use config::{ALL_PROTOCOLS, Protocol, ProtocolConfig, Variants};
pub use engine::{KutaEngine, simplify};
pub use error::ConfigError;
pub use key_set::{ALL_KUTA_TYPES, KeySpec, KutaType, SUBTOTAL_TYPES, ScaleSpec};
pub use row::{ResultRow, ScoreRow, SimpleResult, SimpleRow};
pub use subject::{ScoringSubject, SubjectPair};
