//! Individual alert rules. Each returns at most one alert.

use serde::{Deserialize, Serialize};

use crate::alerts::config::AlertConfig;
use crate::models::VitalsReading;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum AlertKind {
    LowSpo2,
    PulseHigh,
    PulseLow,
    Co2Retention,
}

impl AlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::LowSpo2 => "lowSpo2",
            AlertKind::PulseHigh => "pulseHigh",
            AlertKind::PulseLow => "pulseLow",
            AlertKind::Co2Retention => "co2Retention",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

/// Last `n` items of `values`, or `None` when fewer than `n` exist.
fn last_n<T>(values: Vec<T>, n: usize) -> Option<Vec<T>> {
    if n == 0 || values.len() < n {
        return None;
    }
    let skip = values.len() - n;
    Some(values.into_iter().skip(skip).collect())
}

pub fn check_low_spo2(readings: &[VitalsReading], config: &AlertConfig) -> Option<Alert> {
    let low_count = readings
        .iter()
        .filter_map(VitalsReading::spo2_value)
        .filter(|&spo2| spo2 < config.low_spo2_below)
        .count();

    if low_count < config.low_spo2_min_count.max(1) {
        return None;
    }

    Some(Alert {
        kind: AlertKind::LowSpo2,
        message: format!(
            "Multiple low SpO₂ readings (<{}%) detected recently ({} times). Consider contacting your provider.",
            config.low_spo2_below, low_count
        ),
    })
}

pub fn check_pulse_trend(readings: &[VitalsReading], config: &AlertConfig) -> Option<Alert> {
    let pulses: Vec<f64> = readings.iter().filter_map(VitalsReading::pulse_value).collect();
    let recent = last_n(pulses, config.pulse_sample_size)?;

    if recent.iter().all(|&p| p > config.pulse_high_above) {
        return Some(Alert {
            kind: AlertKind::PulseHigh,
            message: format!(
                "Pulse rate has been consistently high (>{} bpm) in recent readings. Please review.",
                config.pulse_high_above
            ),
        });
    }

    if recent.iter().all(|&p| p < config.pulse_low_below) {
        return Some(Alert {
            kind: AlertKind::PulseLow,
            message: format!(
                "Pulse rate has been consistently low (<{} bpm) in recent readings. Please review.",
                config.pulse_low_below
            ),
        });
    }

    None
}

/// Informational only: sustained high saturation on supplemental oxygen.
pub fn check_co2_retention(readings: &[VitalsReading], config: &AlertConfig) -> Option<Alert> {
    let on_oxygen: Vec<f64> = readings
        .iter()
        .filter(|r| r.oxygen_on)
        .filter_map(VitalsReading::spo2_value)
        .collect();
    let recent = last_n(on_oxygen, config.co2_sample_size)?;

    if !recent.iter().all(|&spo2| spo2 > config.co2_spo2_above) {
        return None;
    }

    Some(Alert {
        kind: AlertKind::Co2Retention,
        message: format!(
            "Warning: SpO₂ consistently >{}% while using oxygen. Discuss with your doctor if this could indicate CO₂ retention.",
            config.co2_spo2_above
        ),
    })
}
