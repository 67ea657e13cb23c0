//! Classification core for a personal respiratory-health tracker.
//!
//! Vitals log entries and six-minute walk tests come in from the recording
//! layer; severity bands, desaturation trends, alerts and summary figures
//! go back out to whatever renders them.

pub mod alerts;
pub mod classification;
pub mod history;
pub mod models;
pub mod settings;
pub mod utils;

pub use alerts::{alert_messages, evaluate_alerts, evaluate_recent, Alert, AlertConfig, AlertKind};
pub use classification::{
    assess_walk_test, classify, classify_trend, DesaturationTrend, PatientContext, SeverityBand,
    TrendReading, WalkTestAssessment,
};
pub use history::{SummaryStats, TimeRange};
pub use models::{
    BorgScore, DistanceUnit, Phase, PhaseReading, Symptom, VitalsReading, WalkTestResult,
};
pub use settings::{PatientProfile, ProfileStore};
pub use utils::init_logging;
