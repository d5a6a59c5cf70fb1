//! Treningsbelastning for løping: ATL/CTL/TSB, ACWR, hjerteeffektivitet og anbefalinger
//! beregnet fra en glissen logg med økter.

pub mod cardiac;
pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod ingest;
pub mod metrics;
pub mod pace;
pub mod pipeline;
pub mod smoothing;
pub mod state;
pub mod storage;
pub mod summary;
pub mod timeline;
pub mod types;
pub mod workload;

#[cfg(feature = "python")]
mod py;

pub use classify::TrainingType;
pub use config::EngineConfig;
pub use error::{EngineError, FieldError, Result};
pub use ingest::{read_csv, read_csv_path, read_json_rows, Ingested, RawSessionRow};
pub use metrics::Metrics;
pub use pace::{parse_pace, PaceParseError, PaceSeconds};
pub use pipeline::{analyze, analyze_ingested, enrich, latest_state};
pub use state::{CardiacStatus, FormStatus, Recommendation};
pub use storage::{load_config, save_report};
pub use types::{EnrichedSession, LatestState, Report, Session, SummaryStats};
pub use workload::InjuryRisk;
