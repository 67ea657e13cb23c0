//! SpO2 severity rule table.
//!
//! Every (family, phase, flow bracket) combination maps to a pair of
//! cutpoints. A reading is `low` below `low_below`, `caution` while it stays
//! under the caution ceiling, and `normal` otherwise. Predicates are checked
//! in that order, so a caution ceiling at or below `low_below` leaves the
//! caution band empty.

use serde::{Deserialize, Serialize};

use crate::classification::band::SeverityBand;
use crate::models::Phase;

/// Which set of clinical targets applies to the patient.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum RuleFamily {
    Healthy,
    Copd,
}

impl RuleFamily {
    /// Only an explicit `true` selects the COPD targets.
    pub fn from_comorbidity(has_copd: Option<bool>) -> Self {
        if has_copd == Some(true) {
            RuleFamily::Copd
        } else {
            RuleFamily::Healthy
        }
    }
}

/// Supplemental oxygen bracket, in L/min.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum FlowBracket {
    Off,
    UpToOne,
    Two,
    ThreeToFour,
    AboveFour,
}

impl FlowBracket {
    pub const ALL: [FlowBracket; 5] = [
        FlowBracket::Off,
        FlowBracket::UpToOne,
        FlowBracket::Two,
        FlowBracket::ThreeToFour,
        FlowBracket::AboveFour,
    ];

    /// Bracket for the effective flow. Off oxygen is always `Off`; on oxygen
    /// a missing or NaN flow counts as 0 L/min. Flows that fall between the
    /// named brackets (1.5, 2.5, 4.5 ...) land in `AboveFour`.
    pub fn from_oxygen(oxygen_on: Option<bool>, oxygen_flow: Option<f64>) -> Self {
        if oxygen_on != Some(true) {
            return FlowBracket::Off;
        }
        let flow = oxygen_flow.filter(|f| !f.is_nan()).unwrap_or(0.0);

        if flow <= 1.0 {
            FlowBracket::UpToOne
        } else if flow == 2.0 {
            FlowBracket::Two
        } else if (3.0..=4.0).contains(&flow) {
            FlowBracket::ThreeToFour
        } else {
            FlowBracket::AboveFour
        }
    }

    fn index(self) -> usize {
        match self {
            FlowBracket::Off => 0,
            FlowBracket::UpToOne => 1,
            FlowBracket::Two => 2,
            FlowBracket::ThreeToFour => 3,
            FlowBracket::AboveFour => 4,
        }
    }
}

/// Upper edge of the caution band.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum CautionCeiling {
    /// caution while `spo2 < x`
    Below(f64),
    /// caution while `spo2 <= x`
    AtMost(f64),
}

impl CautionCeiling {
    fn contains(&self, spo2: f64) -> bool {
        match *self {
            CautionCeiling::Below(x) => spo2 < x,
            CautionCeiling::AtMost(x) => spo2 <= x,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Cutpoints {
    pub low_below: f64,
    pub caution: CautionCeiling,
}

impl Cutpoints {
    const fn below(low_below: f64, caution_below: f64) -> Self {
        Self {
            low_below,
            caution: CautionCeiling::Below(caution_below),
        }
    }

    const fn at_most(low_below: f64, caution_max: f64) -> Self {
        Self {
            low_below,
            caution: CautionCeiling::AtMost(caution_max),
        }
    }

    /// Band for a numeric (non-NaN) reading.
    pub fn band(&self, spo2: f64) -> SeverityBand {
        if spo2 < self.low_below {
            SeverityBand::Low
        } else if self.caution.contains(spo2) {
            SeverityBand::Caution
        } else {
            SeverityBand::Normal
        }
    }
}

// Indexed by Phase::index().
const HEALTHY: [Cutpoints; 4] = [
    Cutpoints::at_most(95.0, 95.0), // start
    Cutpoints::below(95.0, 95.0),   // mid: no caution band
    Cutpoints::at_most(94.0, 94.0), // end
    Cutpoints::at_most(95.0, 95.0), // recovery
];

// Resting targets; recovery reuses them.
const COPD_REST: [Cutpoints; 5] = [
    Cutpoints::at_most(90.0, 91.0),
    Cutpoints::at_most(88.0, 89.0),
    Cutpoints::at_most(90.0, 91.0),
    Cutpoints::at_most(93.0, 92.0),
    Cutpoints::at_most(94.0, 94.0),
];

// Indexed by [Phase::index()][FlowBracket::index()].
const COPD: [[Cutpoints; 5]; 4] = [
    COPD_REST,
    [
        Cutpoints::below(88.0, 92.0),
        Cutpoints::below(88.0, 90.0),
        Cutpoints::below(90.0, 92.0),
        Cutpoints::below(91.0, 93.0),
        Cutpoints::below(92.0, 94.0),
    ],
    [
        Cutpoints::below(88.0, 90.0),
        Cutpoints::below(88.0, 90.0),
        Cutpoints::below(90.0, 92.0),
        Cutpoints::below(92.0, 93.0),
        Cutpoints::below(93.0, 94.0),
    ],
    COPD_REST,
];

/// Cutpoints for a rule-table cell. The healthy family ignores the bracket.
pub fn cutpoints(family: RuleFamily, phase: Phase, bracket: FlowBracket) -> Cutpoints {
    match family {
        RuleFamily::Healthy => HEALTHY[phase.index()],
        RuleFamily::Copd => COPD[phase.index()][bracket.index()],
    }
}
