use serde::{Deserialize, Serialize};

/// Severity of a single SpO2 reading. Ordered from least to most severe.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum SeverityBand {
    Normal,
    Caution,
    Low,
}

impl SeverityBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityBand::Normal => "normal",
            SeverityBand::Caution => "caution",
            SeverityBand::Low => "low",
        }
    }

    /// 0 for normal up to 2 for low.
    pub fn severity_rank(&self) -> u8 {
        match self {
            SeverityBand::Normal => 0,
            SeverityBand::Caution => 1,
            SeverityBand::Low => 2,
        }
    }
}

/// Direction of SpO2 change between a pre- and post-exercise reading.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum DesaturationTrend {
    Improved,
    Mild,
    Significant,
}

impl DesaturationTrend {
    pub fn as_str(&self) -> &'static str {
        match self {
            DesaturationTrend::Improved => "improved",
            DesaturationTrend::Mild => "mild",
            DesaturationTrend::Significant => "significant",
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            DesaturationTrend::Improved => '▲',
            DesaturationTrend::Mild => '―',
            DesaturationTrend::Significant => '▼',
        }
    }
}

/// Trend plus the drop it was computed from (positive = desaturation).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrendReading {
    pub trend: DesaturationTrend,
    pub drop: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_order_by_severity() {
        assert!(SeverityBand::Normal < SeverityBand::Caution);
        assert!(SeverityBand::Caution < SeverityBand::Low);
        assert_eq!(SeverityBand::Low.severity_rank(), 2);
    }

    #[test]
    fn identifiers_are_stable() {
        assert_eq!(serde_json::to_string(&SeverityBand::Caution).unwrap(), "\"caution\"");
        assert_eq!(
            serde_json::to_string(&DesaturationTrend::Significant).unwrap(),
            "\"significant\""
        );
        assert_eq!(DesaturationTrend::Significant.glyph(), '▼');
    }
}
