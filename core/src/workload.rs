use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::EnrichedSession;

/// Skaderisiko ut fra ACWR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InjuryRisk {
    #[serde(rename = "No data")]
    NoData,
    #[serde(rename = "Underload")]
    Underload,
    #[serde(rename = "Safe Zone")]
    SafeZone,
    #[serde(rename = "Caution")]
    Caution,
    #[serde(rename = "High Risk")]
    HighRisk,
}

impl InjuryRisk {
    pub const ALL: [InjuryRisk; 5] = [
        InjuryRisk::SafeZone,
        InjuryRisk::Caution,
        InjuryRisk::HighRisk,
        InjuryRisk::Underload,
        InjuryRisk::NoData,
    ];

    /// <0.8 Underload, [0.8, 1.3] Safe Zone, (1.3, 1.5] Caution, >1.5 High Risk, NaN No data
    pub fn classify(ratio: f64) -> Self {
        if ratio.is_nan() {
            InjuryRisk::NoData
        } else if ratio < 0.8 {
            InjuryRisk::Underload
        } else if ratio <= 1.3 {
            InjuryRisk::SafeZone
        } else if ratio <= 1.5 {
            InjuryRisk::Caution
        } else {
            InjuryRisk::HighRisk
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InjuryRisk::NoData => "No data",
            InjuryRisk::Underload => "Underload",
            InjuryRisk::SafeZone => "Safe Zone",
            InjuryRisk::Caution => "Caution",
            InjuryRisk::HighRisk => "High Risk",
        }
    }
}

impl fmt::Display for InjuryRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Glidende sum over de siste `window` øktene (inkl. gjeldende).
///
/// NaN hoppes over; et vindu uten noen endelig verdi gir NaN.
pub fn trailing_sum(values: &[f64], window: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len());
    for i in 0..values.len() {
        let start = (i + 1).saturating_sub(window);
        let mut sum = 0.0;
        let mut n = 0usize;
        for v in &values[start..=i] {
            if v.is_finite() {
                sum += v;
                n += 1;
            }
        }
        out.push(if n == 0 { f64::NAN } else { sum });
    }
    out
}

/// ACWR = akutt / (kronisk / 4). Kronisk = 0 eller NaN → NaN.
pub fn acute_chronic_ratio(acute: f64, chronic: f64) -> f64 {
    if !chronic.is_finite() || chronic == 0.0 || !acute.is_finite() {
        return f64::NAN;
    }
    acute / (chronic / 4.0)
}

/// Fyller akutt/kronisk sum, ratio og risikoklasse per økt. Vinduene teller økter, ikke dager.
pub fn apply_workload(sessions: &mut [EnrichedSession], acute_window: usize, chronic_window: usize) {
    let loads: Vec<f64> = sessions.iter().map(|s| s.load_proxy).collect();
    let acute = trailing_sum(&loads, acute_window);
    let chronic = trailing_sum(&loads, chronic_window);

    for ((s, a), c) in sessions.iter_mut().zip(acute).zip(chronic) {
        s.acute_load_7d = a;
        s.chronic_load_28d = c;
        s.acute_chronic_ratio = acute_chronic_ratio(a, c);
        s.injury_risk = InjuryRisk::classify(s.acute_chronic_ratio);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_sum_shorter_history() {
        let out = trailing_sum(&[1.0, 2.0, 3.0, 4.0], 3);
        assert_eq!(out, vec![1.0, 3.0, 6.0, 9.0]);
    }

    #[test]
    fn trailing_sum_skips_nan() {
        let out = trailing_sum(&[f64::NAN, 2.0, f64::NAN], 2);
        assert!(out[0].is_nan());
        assert_eq!(out[1], 2.0);
        assert_eq!(out[2], 2.0);
    }

    #[test]
    fn zero_chronic_is_nan() {
        assert!(acute_chronic_ratio(0.0, 0.0).is_nan());
        assert_eq!(InjuryRisk::classify(acute_chronic_ratio(0.0, 0.0)), InjuryRisk::NoData);
    }
}
