use serde::{Deserialize, Serialize};

use crate::models::VitalsReading;

const LOW_SPO2_BELOW: f64 = 88.0;

/// Aggregate figures for a set of vitals readings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub reading_count: usize,
    pub average_spo2: Option<f64>,
    pub lowest_spo2: Option<f64>,
    pub readings_below_88: usize,
    /// Share of SpO2 readings below 88 %, 0 when there are none.
    pub percentage_below_88: f64,
    pub average_pulse: Option<f64>,
    pub average_borg: Option<f64>,
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

impl SummaryStats {
    pub fn from_readings(readings: &[VitalsReading]) -> Self {
        let spo2: Vec<f64> = readings.iter().filter_map(VitalsReading::spo2_value).collect();
        let pulse: Vec<f64> = readings.iter().filter_map(VitalsReading::pulse_value).collect();
        let borg: Vec<f64> = readings
            .iter()
            .filter_map(|r| r.borg.map(|b| b.value() as f64))
            .collect();

        let readings_below_88 = spo2.iter().filter(|&&v| v < LOW_SPO2_BELOW).count();
        let percentage_below_88 = if spo2.is_empty() {
            0.0
        } else {
            readings_below_88 as f64 / spo2.len() as f64 * 100.0
        };

        Self {
            reading_count: readings.len(),
            average_spo2: mean(&spo2),
            lowest_spo2: spo2.iter().copied().reduce(f64::min),
            readings_below_88,
            percentage_below_88,
            average_pulse: mean(&pulse),
            average_borg: mean(&borg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BorgScore;
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn empty_input_has_no_averages() {
        let stats = SummaryStats::from_readings(&[]);
        assert_eq!(stats, SummaryStats::default());
        assert_eq!(stats.percentage_below_88, 0.0);
    }

    #[test]
    fn aggregates_only_present_values() {
        let base = Utc.with_ymd_and_hms(2024, 7, 1, 8, 0, 0).unwrap();
        let readings = vec![
            VitalsReading::new(base).with_spo2(86.0).with_pulse(90.0),
            VitalsReading::new(base + Duration::hours(1)).with_spo2(92.0),
            VitalsReading::new(base + Duration::hours(2))
                .with_spo2(94.0)
                .with_borg(BorgScore::new(3).unwrap()),
            VitalsReading::new(base + Duration::hours(3))
                .with_pulse(70.0)
                .with_borg(BorgScore::new(4).unwrap()),
        ];

        let stats = SummaryStats::from_readings(&readings);
        assert_eq!(stats.reading_count, 4);
        let average = stats.average_spo2.unwrap();
        assert!((average - (86.0 + 92.0 + 94.0) / 3.0).abs() < 1e-9);
        assert_eq!(stats.lowest_spo2, Some(86.0));
        assert_eq!(stats.readings_below_88, 1);
        assert!((stats.percentage_below_88 - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(stats.average_pulse, Some(80.0));
        assert_eq!(stats.average_borg, Some(3.5));
    }
}
