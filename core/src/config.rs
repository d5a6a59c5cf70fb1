use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Faste parametre for motoren. Alle felt kan utelates i JSON (default brukes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// TE aerob × faktor = belastning (TSS-estimat)
    pub load_scale: f64,
    /// span for ATL (fatigue)
    pub fatigue_span: usize,
    /// span for CTL (fitness)
    pub fitness_span: usize,
    /// antall økter i akutt vindu
    pub acute_window: usize,
    /// antall økter i kronisk vindu
    pub chronic_window: usize,
    pub baseline_window: usize,
    pub baseline_min_periods: usize,
    /// antall siste økter for hjerte-regelen
    pub cardiac_history: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            load_scale: 20.0,
            fatigue_span: 7,
            fitness_span: 42,
            acute_window: 7,
            chronic_window: 28,
            baseline_window: 10,
            baseline_min_periods: 3,
            cardiac_history: 5,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.load_scale.is_finite() {
            return Err(EngineError::InvalidConfig("load_scale må være et endelig tall".into()));
        }
        let windows = [
            ("fatigue_span", self.fatigue_span),
            ("fitness_span", self.fitness_span),
            ("acute_window", self.acute_window),
            ("chronic_window", self.chronic_window),
            ("baseline_window", self.baseline_window),
            ("baseline_min_periods", self.baseline_min_periods),
            ("cardiac_history", self.cardiac_history),
        ];
        if let Some((name, _)) = windows.iter().find(|(_, v)| *v == 0) {
            return Err(EngineError::InvalidConfig(format!("{name} må være > 0")));
        }
        if self.baseline_min_periods > self.baseline_window {
            return Err(EngineError::InvalidConfig(
                "baseline_min_periods kan ikke være større enn baseline_window".into(),
            ));
        }
        Ok(())
    }
}
