use std::fmt;

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

use crate::classify::TrainingType;
use crate::summary::nan_mean;
use crate::types::EnrichedSession;

/// Formstatus fra TSB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FormStatus {
    #[serde(rename = "Fresh")]
    Fresh,
    #[serde(rename = "Balanced")]
    Balanced,
    #[serde(rename = "Moderately Fatigued")]
    ModeratelyFatigued,
    #[serde(rename = "Very Fatigued")]
    VeryFatigued,
}

impl FormStatus {
    /// >5 Fresh, (−5, 5] Balanced, (−10, −5] Moderately Fatigued, ellers Very Fatigued
    pub fn classify(form: f64) -> Self {
        if form > 5.0 {
            FormStatus::Fresh
        } else if form > -5.0 {
            FormStatus::Balanced
        } else if form > -10.0 {
            FormStatus::ModeratelyFatigued
        } else {
            FormStatus::VeryFatigued
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormStatus::Fresh => "Fresh",
            FormStatus::Balanced => "Balanced",
            FormStatus::ModeratelyFatigued => "Moderately Fatigued",
            FormStatus::VeryFatigued => "Very Fatigued",
        }
    }
}

/// Status for hjerteeffektivitet ut fra avvik mot baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CardiacStatus {
    #[serde(rename = "Normal")]
    Normal,
    #[serde(rename = "Slightly Elevated")]
    SlightlyElevated,
    #[serde(rename = "Deteriorated")]
    Deteriorated,
    #[serde(rename = "Insufficient data")]
    InsufficientData,
}

impl CardiacStatus {
    /// <5 % Normal, [5, 10) % Slightly Elevated, ≥10 % Deteriorated
    pub fn classify(deviation_pct: f64) -> Self {
        if deviation_pct.is_nan() {
            CardiacStatus::InsufficientData
        } else if deviation_pct < 5.0 {
            CardiacStatus::Normal
        } else if deviation_pct < 10.0 {
            CardiacStatus::SlightlyElevated
        } else {
            CardiacStatus::Deteriorated
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CardiacStatus::Normal => "Normal",
            CardiacStatus::SlightlyElevated => "Slightly Elevated",
            CardiacStatus::Deteriorated => "Deteriorated",
            CardiacStatus::InsufficientData => "Insufficient data",
        }
    }
}

impl fmt::Display for FormStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for CardiacStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Anbefalinger som tagger. Serialiseres som `{ "tag": .., "message": .. }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    EasePriorSustainedPace,
    RecoverAfterLongRuns,
    AccumulatedFatigue,
    FreezeVolume,
    RecoveryDaysNeeded,
    AllClear,
}

impl Recommendation {
    pub fn tag(self) -> &'static str {
        match self {
            Recommendation::EasePriorSustainedPace => "ease_prior_sustained_pace",
            Recommendation::RecoverAfterLongRuns => "recover_after_long_runs",
            Recommendation::AccumulatedFatigue => "accumulated_fatigue",
            Recommendation::FreezeVolume => "freeze_volume",
            Recommendation::RecoveryDaysNeeded => "recovery_days_needed",
            Recommendation::AllClear => "all_clear",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Recommendation::EasePriorSustainedPace => {
                "You arrive at interval sessions with accumulated fatigue. Consider easing the sustained-pace day before."
            }
            Recommendation::RecoverAfterLongRuns => {
                "Long runs leave you heavily fatigued. Make sure to recover well in the days after."
            }
            Recommendation::AccumulatedFatigue => {
                "Cardiac efficiency has deteriorated lately. Sign of accumulated fatigue."
            }
            Recommendation::FreezeVolume => {
                "CRITICAL: Your load ratio is high. Do not increase volume this week."
            }
            Recommendation::RecoveryDaysNeeded => {
                "CRITICAL: You need at least 2-3 recovery days before training hard."
            }
            Recommendation::AllClear => "All looks good! Keep following your current training plan.",
        }
    }
}

impl Serialize for Recommendation {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut st = serializer.serialize_struct("Recommendation", 2)?;
        st.serialize_field("tag", self.tag())?;
        st.serialize_field("message", self.message())?;
        st.end()
    }
}

/// Tersklene for reglene.
const FATIGUED_ARRIVAL_FORM: f64 = -5.0;
const CARDIAC_DRIFT_PCT: f64 = 5.0;
const ACWR_FREEZE: f64 = 1.3;
const CRITICAL_FORM: f64 = -10.0;

fn mean_form_of(sessions: &[EnrichedSession], tt: TrainingType) -> f64 {
    nan_mean(sessions.iter().filter(|s| s.training_type == tt).map(|s| s.form))
}

/// Evaluerer alle regler uavhengig, i fast rekkefølge. Ingen treff → `AllClear`.
///
/// `cardiac_history` er antall siste økter som inngår i hjerte-regelen (5).
pub fn recommendations(sessions: &[EnrichedSession], cardiac_history: usize) -> Vec<Recommendation> {
    let mut out = Vec::new();
    let Some(latest) = sessions.last() else {
        return vec![Recommendation::AllClear];
    };

    if mean_form_of(sessions, TrainingType::Intervals) < FATIGUED_ARRIVAL_FORM {
        out.push(Recommendation::EasePriorSustainedPace);
    }
    if mean_form_of(sessions, TrainingType::LongRun) < FATIGUED_ARRIVAL_FORM {
        out.push(Recommendation::RecoverAfterLongRuns);
    }
    if sessions.len() >= cardiac_history {
        let tail = &sessions[sessions.len() - cardiac_history..];
        if nan_mean(tail.iter().map(|s| s.efficiency_deviation_pct)) > CARDIAC_DRIFT_PCT {
            out.push(Recommendation::AccumulatedFatigue);
        }
    }
    if latest.acute_chronic_ratio > ACWR_FREEZE {
        out.push(Recommendation::FreezeVolume);
    }
    if latest.form < CRITICAL_FORM {
        out.push(Recommendation::RecoveryDaysNeeded);
    }

    if out.is_empty() {
        out.push(Recommendation::AllClear);
    }
    out
}
