use serde::{Deserialize, Serialize};

use crate::classification::band::SeverityBand;
use crate::classification::rules::{cutpoints, FlowBracket, RuleFamily};
use crate::models::Phase;

/// Patient context a reading is judged against.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PatientContext {
    /// `None` means the status was never recorded; classified as healthy.
    pub has_copd: Option<bool>,
    pub oxygen_on: Option<bool>,
    pub oxygen_flow: Option<f64>,
}

impl PatientContext {
    pub fn new(has_copd: Option<bool>, oxygen_on: Option<bool>, oxygen_flow: Option<f64>) -> Self {
        Self {
            has_copd,
            oxygen_on,
            oxygen_flow,
        }
    }

    pub fn family(&self) -> RuleFamily {
        RuleFamily::from_comorbidity(self.has_copd)
    }

    pub fn flow_bracket(&self) -> FlowBracket {
        FlowBracket::from_oxygen(self.oxygen_on, self.oxygen_flow)
    }

    /// Severity of `spo2` at `phase`, or `None` when there is nothing to judge.
    pub fn classify(&self, spo2: Option<f64>, phase: Phase) -> Option<SeverityBand> {
        let spo2 = spo2.filter(|v| !v.is_nan())?;
        Some(cutpoints(self.family(), phase, self.flow_bracket()).band(spo2))
    }
}

/// Classify a single SpO2 reading.
///
/// Returns `None` for an absent or NaN reading so callers can render it
/// neutrally. Out-of-range values (negative, above 100) are compared like
/// any other number.
pub fn classify(
    spo2: Option<f64>,
    has_copd: Option<bool>,
    oxygen_on: Option<bool>,
    oxygen_flow: Option<f64>,
    phase: Phase,
) -> Option<SeverityBand> {
    PatientContext::new(has_copd, oxygen_on, oxygen_flow).classify(spo2, phase)
}
