//! Per-test view of a six-minute walk test: a band per phase, the
//! start-to-end desaturation trend and the normalised distance.

use serde::{Deserialize, Serialize};

use crate::classification::band::{SeverityBand, TrendReading};
use crate::classification::severity::PatientContext;
use crate::classification::trend::classify_trend;
use crate::models::{Phase, WalkTestResult};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PhaseAssessment {
    pub phase: Phase,
    pub spo2: Option<f64>,
    pub pulse: Option<f64>,
    pub band: Option<SeverityBand>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WalkTestAssessment {
    pub test_id: Option<String>,
    /// Start, mid, end, recovery.
    pub phases: [PhaseAssessment; 4],
    pub trend: Option<TrendReading>,
    pub distance_meters: Option<f64>,
}

impl WalkTestAssessment {
    pub fn phase(&self, phase: Phase) -> &PhaseAssessment {
        &self.phases[phase.index()]
    }

    /// Most severe band across the phases that could be classified.
    pub fn worst_band(&self) -> Option<SeverityBand> {
        self.phases.iter().filter_map(|p| p.band).max()
    }
}

impl WalkTestResult {
    pub fn patient_context(&self) -> PatientContext {
        PatientContext::new(self.has_copd, self.oxygen_on, self.oxygen_flow)
    }
}

pub fn assess_walk_test(test: &WalkTestResult) -> WalkTestAssessment {
    let context = test.patient_context();

    let phases = Phase::ALL.map(|phase| {
        let reading = test.reading(phase);
        PhaseAssessment {
            phase,
            spo2: reading.spo2,
            pulse: reading.pulse,
            band: context.classify(reading.spo2, phase),
        }
    });

    let trend = classify_trend(test.start.spo2, test.end.spo2, test.has_copd, test.oxygen_on);

    WalkTestAssessment {
        test_id: test.id.clone(),
        phases,
        trend,
        distance_meters: test.distance_meters(),
    }
}
