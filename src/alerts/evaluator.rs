use chrono::{DateTime, Duration, Utc};

use crate::alerts::config::AlertConfig;
use crate::alerts::rules::{check_co2_retention, check_low_spo2, check_pulse_trend, Alert};
use crate::models::VitalsReading;
use crate::log_debug;

const ENABLE_LOGS: bool = true;

/// Readings inside `[now - window_hours, now]`, oldest first.
///
/// A window too long to represent has no lower bound.
pub fn trailing_window(
    readings: &[VitalsReading],
    now: DateTime<Utc>,
    config: &AlertConfig,
) -> Vec<VitalsReading> {
    let start = Duration::try_hours(config.window_hours).and_then(|d| now.checked_sub_signed(d));
    let mut window: Vec<VitalsReading> = readings
        .iter()
        .filter(|r| start.map_or(true, |s| r.timestamp >= s) && r.timestamp <= now)
        .cloned()
        .collect();
    window.sort_by_key(|r| r.timestamp);
    window
}

/// Run every rule over an already-windowed, time-ordered slice.
///
/// Alerts come back in a fixed order: low SpO2, pulse, CO2 retention.
pub fn evaluate_alerts(readings: &[VitalsReading], config: &AlertConfig) -> Vec<Alert> {
    let alerts: Vec<Alert> = [
        check_low_spo2(readings, config),
        check_pulse_trend(readings, config),
        check_co2_retention(readings, config),
    ]
    .into_iter()
    .flatten()
    .collect();

    log_debug!(
        "Evaluated {} readings, {} alert(s) active",
        readings.len(),
        alerts.len()
    );

    alerts
}

/// Display strings for the active alerts; empty means nothing to show.
pub fn alert_messages(readings: &[VitalsReading], config: &AlertConfig) -> Vec<String> {
    evaluate_alerts(readings, config)
        .into_iter()
        .map(|alert| alert.message)
        .collect()
}

/// Select the trailing window ending at `now` and evaluate it.
pub fn evaluate_recent(
    readings: &[VitalsReading],
    now: DateTime<Utc>,
    config: &AlertConfig,
) -> Vec<Alert> {
    let window = trailing_window(readings, now, config);
    evaluate_alerts(&window, config)
}
