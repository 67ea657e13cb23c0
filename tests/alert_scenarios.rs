use breathetrack_lib::{
    alert_messages, evaluate_recent, AlertConfig, AlertKind, SummaryStats, VitalsReading,
};
use chrono::{DateTime, Duration, TimeZone, Utc};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 9, 3, 18, 0, 0).unwrap()
}

fn readings_with<F>(values: &[f64], build: F) -> Vec<VitalsReading>
where
    F: Fn(VitalsReading, f64) -> VitalsReading,
{
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let hours_ago = (values.len() - i) as i64;
            build(VitalsReading::new(now() - Duration::hours(hours_ago)), v)
        })
        .collect()
}

#[test]
fn three_low_readings_raise_an_alert_naming_the_count() {
    let readings = readings_with(&[85.0, 86.0, 87.0], |r, v| r.with_spo2(v));
    let messages = alert_messages(&readings, &AlertConfig::default());
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains('3'));
}

#[test]
fn two_low_readings_are_not_enough() {
    let readings = readings_with(&[85.0, 92.0, 86.0], |r, v| r.with_spo2(v));
    assert!(alert_messages(&readings, &AlertConfig::default()).is_empty());
}

#[test]
fn sustained_high_pulse() {
    let readings = readings_with(&[120.0, 115.0, 130.0], |r, v| r.with_pulse(v));
    let alerts = evaluate_recent(&readings, now(), &AlertConfig::default());
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].kind, AlertKind::PulseHigh);
    assert!(alerts[0].message.contains("consistently high"));
    assert!(!alerts[0].message.contains("consistently low"));
}

#[test]
fn mixed_pulse_is_quiet() {
    let readings = readings_with(&[120.0, 40.0, 130.0], |r, v| r.with_pulse(v));
    assert!(evaluate_recent(&readings, now(), &AlertConfig::default()).is_empty());
}

#[test]
fn high_saturation_on_oxygen_flags_co2_retention() {
    let readings = readings_with(&[96.0, 95.0, 97.0], |r, v| r.with_spo2(v).with_oxygen(2.0));
    let alerts = evaluate_recent(&readings, now(), &AlertConfig::default());
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].kind, AlertKind::Co2Retention);
}

#[test]
fn summary_matches_alert_window() {
    let readings = readings_with(&[85.0, 86.0, 87.0, 95.0], |r, v| r.with_spo2(v));
    let stats = SummaryStats::from_readings(&readings);
    assert_eq!(stats.readings_below_88, 3);
    assert_eq!(stats.lowest_spo2, Some(85.0));
    assert_eq!(stats.percentage_below_88, 75.0);
}
