pub mod validation;
pub mod vitals;

pub use vitals::{BorgScore, Symptom, VitalsReading};
pub use walk_test::{DistanceUnit, Phase, PhaseReading, WalkTestResult};
