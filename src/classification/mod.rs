pub mod assessment;
pub mod band;
pub mod rules;
pub mod severity;
pub mod trend;

pub use assessment::{assess_walk_test, PhaseAssessment, WalkTestAssessment};
pub use band::{DesaturationTrend, SeverityBand, TrendReading};
pub use rules::{CautionCeiling, Cutpoints, FlowBracket, RuleFamily};
pub use severity::{classify, PatientContext};
pub use trend::{classify_trend, significant_drop_threshold};
