//! Vitals log data model.
//!
//! A `VitalsReading` is one entry of the ongoing log: pulse-oximeter values,
//! supplemental oxygen status, Borg breathlessness and a symptom checklist.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed vocabulary offered by the symptom checklist.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Symptom {
    IncreasedDyspnea,
    IncreasedFatigue,
    CoughChange,
    SputumChange,
    Wheezing,
    Headache,
    AnkleSwelling,
    Confusion,
}

impl Symptom {
    pub const ALL: [Symptom; 8] = [
        Symptom::IncreasedDyspnea,
        Symptom::IncreasedFatigue,
        Symptom::CoughChange,
        Symptom::SputumChange,
        Symptom::Wheezing,
        Symptom::Headache,
        Symptom::AnkleSwelling,
        Symptom::Confusion,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Symptom::IncreasedDyspnea => "increasedDyspnea",
            Symptom::IncreasedFatigue => "increasedFatigue",
            Symptom::CoughChange => "coughChange",
            Symptom::SputumChange => "sputumChange",
            Symptom::Wheezing => "wheezing",
            Symptom::Headache => "headache",
            Symptom::AnkleSwelling => "ankleSwelling",
            Symptom::Confusion => "confusion",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Symptom::IncreasedDyspnea => "Increased Dyspnea (Breathlessness)",
            Symptom::IncreasedFatigue => "Increased Fatigue",
            Symptom::CoughChange => "Cough Change (Frequency/Character)",
            Symptom::SputumChange => "Sputum Change (Volume/Color)",
            Symptom::Wheezing => "Wheezing",
            Symptom::Headache => "Headache",
            Symptom::AnkleSwelling => "Ankle Swelling",
            Symptom::Confusion => "Confusion / Increased Drowsiness",
        }
    }
}

/// Borg CR10 breathlessness score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct BorgScore(u8);

impl BorgScore {
    pub const MAX: u8 = 10;

    /// Returns `None` for values above the top of the scale.
    pub fn new(value: u8) -> Option<Self> {
        (value <= Self::MAX).then_some(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn label(&self) -> &'static str {
        match self.0 {
            0 => "Nothing at all",
            1 => "Very slight",
            2 => "Slight",
            3 => "Moderate",
            4 => "Somewhat severe",
            5 => "Severe",
            6 => "Severe+",
            7 => "Very severe",
            8 => "Very severe+",
            9 => "Almost maximum",
            _ => "Maximum",
        }
    }
}

/// One entry of the vitals log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VitalsReading {
    pub id: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub spo2: Option<f64>,
    pub pulse: Option<f64>,
    pub oxygen_on: bool,
    /// L/min; only meaningful while `oxygen_on`.
    pub oxygen_flow: Option<f64>,
    pub borg: Option<BorgScore>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub symptoms: BTreeSet<Symptom>,
    pub notes: Option<String>,
}

impl VitalsReading {
    /// Blank reading at `timestamp`, off oxygen, with a fresh id.
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Some(uuid::Uuid::new_v4().to_string()),
            timestamp,
            spo2: None,
            pulse: None,
            oxygen_on: false,
            oxygen_flow: None,
            borg: None,
            symptoms: BTreeSet::new(),
            notes: None,
        }
    }

    pub fn with_spo2(mut self, spo2: f64) -> Self {
        self.spo2 = Some(spo2);
        self
    }

    pub fn with_pulse(mut self, pulse: f64) -> Self {
        self.pulse = Some(pulse);
        self
    }

    pub fn with_oxygen(mut self, flow_lpm: f64) -> Self {
        self.oxygen_on = true;
        self.oxygen_flow = Some(flow_lpm);
        self
    }

    pub fn with_borg(mut self, borg: BorgScore) -> Self {
        self.borg = Some(borg);
        self
    }

    pub fn with_symptom(mut self, symptom: Symptom) -> Self {
        self.symptoms.insert(symptom);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// SpO2 when present and numeric.
    pub fn spo2_value(&self) -> Option<f64> {
        self.spo2.filter(|v| !v.is_nan())
    }

    /// Pulse when present and numeric.
    pub fn pulse_value(&self) -> Option<f64> {
        self.pulse.filter(|v| !v.is_nan())
    }
}
