use std::fmt;

use serde::{Deserialize, Serialize};

/// Økttype ut fra fast ukemønster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrainingType {
    #[serde(rename = "Sustained Pace")]
    SustainedPace,
    #[serde(rename = "Intervals")]
    Intervals,
    #[serde(rename = "Long Run")]
    LongRun,
    #[serde(rename = "Other")]
    Other,
}

impl TrainingType {
    /// tirsdag (1) → Sustained Pace, torsdag (3) → Intervals, lørdag (5) → Long Run
    pub fn from_weekday(weekday_index: u32) -> Self {
        match weekday_index {
            1 => TrainingType::SustainedPace,
            3 => TrainingType::Intervals,
            5 => TrainingType::LongRun,
            _ => TrainingType::Other,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TrainingType::SustainedPace => "Sustained Pace",
            TrainingType::Intervals => "Intervals",
            TrainingType::LongRun => "Long Run",
            TrainingType::Other => "Other",
        }
    }

    /// Typene som har egen oppsummering.
    pub const KEY_SESSIONS: [TrainingType; 3] = [
        TrainingType::SustainedPace,
        TrainingType::Intervals,
        TrainingType::LongRun,
    ];
}

impl fmt::Display for TrainingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekly_pattern() {
        let labels: Vec<_> = (0..7).map(TrainingType::from_weekday).collect();
        assert_eq!(
            labels,
            vec![
                TrainingType::Other,
                TrainingType::SustainedPace,
                TrainingType::Other,
                TrainingType::Intervals,
                TrainingType::Other,
                TrainingType::LongRun,
                TrainingType::Other,
            ]
        );
    }
}
