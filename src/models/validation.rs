//! Validation applied by the recording layer before a record is saved.
//!
//! Classification never depends on these checks having run.

use anyhow::{bail, Result};

use super::{VitalsReading, WalkTestResult};

fn validate_measurement(value: Option<f64>, field: &str) -> Result<()> {
    if let Some(v) = value {
        if !v.is_finite() || v < 0.0 {
            bail!("Invalid {field}. Must be a non-negative number");
        }
    }
    Ok(())
}

pub fn validate_reading(reading: &VitalsReading) -> Result<()> {
    let has_note = reading
        .notes
        .as_deref()
        .map(|n| !n.trim().is_empty())
        .unwrap_or(false);

    if reading.spo2.is_none()
        && reading.pulse.is_none()
        && reading.borg.is_none()
        && reading.symptoms.is_empty()
        && !has_note
    {
        bail!("Please enter at least one value (SpO₂, Pulse, Borg, Symptoms, or Notes)");
    }

    if reading.oxygen_on && reading.oxygen_flow.is_none() {
        bail!("Oxygen flow rate is required when on oxygen");
    }

    validate_measurement(reading.spo2, "SpO₂")?;
    validate_measurement(reading.pulse, "pulse")?;
    validate_measurement(reading.oxygen_flow, "oxygen flow")?;

    // BorgScore::new already caps the scale; guard values built through serde.
    if let Some(borg) = reading.borg {
        if borg.value() > 10 {
            bail!("Invalid Borg score. Must be between 0 and 10");
        }
    }

    Ok(())
}

pub fn validate_walk_test(test: &WalkTestResult) -> Result<()> {
    if test.oxygen_on == Some(true) && test.oxygen_flow.is_none() {
        bail!("Oxygen flow rate is required when on oxygen");
    }
    validate_measurement(test.oxygen_flow, "oxygen flow")?;

    for phase in crate::models::Phase::ALL {
        let reading = test.reading(phase);
        validate_measurement(reading.spo2, "SpO₂")?;
        validate_measurement(reading.pulse, "pulse")?;
    }

    if test.distance.is_some() {
        validate_measurement(test.distance, "distance")?;
        if test.distance_unit.is_none() {
            bail!("Distance unit is required when a distance is recorded");
        }
    }

    Ok(())
}
