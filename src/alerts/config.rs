use serde::{Deserialize, Serialize};

/// Thresholds for the rolling-window alert rules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AlertConfig {
    /// Trailing window the evaluator looks at
    pub window_hours: i64,

    /// Readings strictly below this SpO2 count as low
    pub low_spo2_below: f64,
    /// Low readings needed before alerting; 0 is treated as 1
    pub low_spo2_min_count: usize,

    /// Most recent readings with a pulse that must all agree
    pub pulse_sample_size: usize,
    pub pulse_high_above: f64,
    pub pulse_low_below: f64,

    /// Most recent on-oxygen readings that must all exceed the ceiling
    pub co2_sample_size: usize,
    pub co2_spo2_above: f64,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            window_hours: 24,
            low_spo2_below: 88.0,
            low_spo2_min_count: 3,
            pulse_sample_size: 3,
            pulse_high_above: 110.0,
            pulse_low_below: 50.0,
            co2_sample_size: 3,
            co2_spo2_above: 94.0,
        }
    }
}
