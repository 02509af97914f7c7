mod telemetry;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use milan_base::{
    BodyKey, Chart, deg_to_dms, nakshatra_from_longitude, nakshatra28_from_longitude,
    rashi_from_longitude,
};
use milan_kuta::{
    ALL_PROTOCOLS, KutaEngine, KutaType, ProtocolConfig, ResultRow, ScoreRow, Total, simplify,
    subtotals, with_total,
};
use serde::Serialize;
use tracing::info;

#[derive(Parser)]
#[command(name = "milan", about = "Kuta compatibility scoring CLI")]
struct Cli {
    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Nakshatra from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
        /// Scheme: 27 (default) or 28
        #[arg(long, default_value = "27")]
        scheme: u32,
    },
    /// Convert degrees to DMS
    Dms {
        /// Angle in decimal degrees
        deg: f64,
    },
    /// List the keys of a key-set
    Keys {
        /// ashta, dvadasha, dasha, sapta, other, dashaashta, ... or all
        #[arg(long, default_value = "all")]
        kuta: KutaType,
    },
    /// Show how each protocol in a configuration file was loaded
    Protocols {
        /// Protocol configuration (JSON object keyed by protocol name)
        #[arg(long)]
        config: PathBuf,
        /// Variant override, key=name (repeatable)
        #[arg(long = "variant")]
        variants: Vec<String>,
    },
    /// Score two charts against each other
    Match {
        /// Protocol configuration (JSON object keyed by protocol name)
        #[arg(long)]
        config: PathBuf,
        /// First chart (JSON)
        #[arg(long)]
        chart1: PathBuf,
        /// Second chart (JSON)
        #[arg(long)]
        chart2: PathBuf,
        /// Key-set to score
        #[arg(long, default_value = "ashta")]
        kuta: KutaType,
        /// Comma-separated body codes (default: su,mo,ma,me,ju,ve,sa,as,ds)
        #[arg(long, value_delimiter = ',')]
        bodies: Vec<BodyKey>,
        /// Score every ordered body pair instead of same-key pairs
        #[arg(long)]
        all_combinations: bool,
        /// Emit only { key, value } per row
        #[arg(long)]
        simple: bool,
        /// Variant override, key=name (repeatable)
        #[arg(long = "variant")]
        variants: Vec<String>,
    },
}

/// One body pair with its total row and the standard sub-totals.
#[derive(Serialize)]
struct PairReport {
    k1: String,
    k2: String,
    values: Vec<ScoreRow>,
    subtotals: BTreeMap<&'static str, Total>,
}

impl PairReport {
    fn new(row: ResultRow, kuta: KutaType) -> Self {
        let subtotals = subtotals(&row.values)
            .into_iter()
            .map(|(t, total)| (t.name(), total))
            .collect();
        Self {
            k1: row.k1,
            k2: row.k2,
            values: with_total(row.values, &kuta.keys()),
            subtotals,
        }
    }
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}

/// Parse repeated `key=name` pairs.
fn parse_variants(raw: &[String]) -> Result<BTreeMap<String, String>, String> {
    raw.iter()
        .map(|entry| {
            entry
                .split_once('=')
                .filter(|(k, v)| !k.trim().is_empty() && !v.trim().is_empty())
                .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
                .ok_or_else(|| format!("Invalid variant override: {entry} (expected key=name)"))
        })
        .collect()
}

fn load_engine(config: &Path, variants: &[String]) -> KutaEngine {
    let overrides = parse_variants(variants).unwrap_or_else(|e| fail(e));
    KutaEngine::from_json_file(config, &overrides)
        .unwrap_or_else(|e| fail(format!("Failed to load {}: {e}", config.display())))
}

fn load_chart(path: &Path) -> Chart {
    Chart::from_json_file(path)
        .unwrap_or_else(|e| fail(format!("Failed to load chart {}: {e}", path.display())))
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => fail(format!("Failed to serialize output: {e}")),
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = telemetry::init(&cli.log_level) {
        fail(e);
    }

    match cli.command {
        Commands::Rashi { lon } => {
            let info = rashi_from_longitude(lon);
            let dms = info.dms;
            println!(
                "{} ({}) - {} deg {} min {:.1} sec ({:.4} deg in rashi)",
                info.rashi.name(),
                info.rashi.western_name(),
                dms.degrees,
                dms.minutes,
                dms.seconds,
                info.degrees_in_rashi
            );
        }

        Commands::Nakshatra { lon, scheme } => match scheme {
            27 => {
                let info = nakshatra_from_longitude(lon);
                println!(
                    "{} (index {}) - Pada {} ({:.4} deg in nakshatra)",
                    info.nakshatra.name(),
                    info.nakshatra_index,
                    info.pada,
                    info.degrees_in_nakshatra
                );
            }
            28 => {
                let info = nakshatra28_from_longitude(lon);
                println!(
                    "{} (index {}) - Pada {} ({:.4} deg in nakshatra)",
                    info.name(),
                    info.nakshatra_index,
                    info.pada,
                    info.degrees_in_nakshatra
                );
            }
            _ => fail(format!("Invalid scheme: {scheme}. Use 27 or 28.")),
        },

        Commands::Dms { deg } => {
            let d = deg_to_dms(deg);
            println!("{} deg {} min {:.2} sec", d.degrees, d.minutes, d.seconds);
        }

        Commands::Keys { kuta } => {
            for key in kuta.keys() {
                println!("{key}");
            }
        }

        Commands::Protocols { config, variants } => {
            let engine = load_engine(&config, &variants);
            for protocol in ALL_PROTOCOLS {
                let state = match engine.config(protocol) {
                    None => "absent",
                    Some(c) if c.is_active() => "active",
                    Some(ProtocolConfig::Unconfigured) => "unconfigured",
                    Some(_) => "disabled",
                };
                match engine.active_variant(protocol) {
                    Some(v) => println!("{:<14} {state} (variant {v})", protocol.name()),
                    None => println!("{:<14} {state}", protocol.name()),
                }
            }
        }

        Commands::Match {
            config,
            chart1,
            chart2,
            kuta,
            bodies,
            all_combinations,
            simple,
            variants,
        } => {
            let engine = load_engine(&config, &variants);
            let c1 = load_chart(&chart1);
            let c2 = load_chart(&chart2);
            info!(kuta = kuta.name(), pairs = bodies.len(), all_combinations, "scoring charts");
            let rows = engine.compute_all_pairs(&c1, &c2, &bodies, all_combinations, kuta);
            if simple {
                print_json(&simplify(&rows));
            } else {
                let reports: Vec<PairReport> =
                    rows.into_iter().map(|r| PairReport::new(r, kuta)).collect();
                print_json(&reports);
            }
        }
    }
}
