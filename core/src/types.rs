use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::classify::TrainingType;
use crate::state::{CardiacStatus, FormStatus, Recommendation};
use crate::workload::InjuryRisk;

/// Én treningsøkt slik den kommer fra innlesingen. Numeriske felt er NaN når de mangler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub date: NaiveDate,
    pub distance: f64,        // km
    pub aerobic_effect: f64,  // TE aerob (0–5)
    pub mean_heart_rate: f64, // bpm
    pub mean_pace: Option<String>, // "M:SS" per km
}

impl Session {
    /// 0 = mandag .. 6 = søndag
    pub fn weekday_index(&self) -> u32 {
        self.date.weekday().num_days_from_monday()
    }

    pub fn load_proxy(&self, scale: f64) -> f64 {
        self.aerobic_effect * scale
    }
}

/// Én kalenderdag i den tette tidslinjen. Kun internt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyLoadPoint {
    pub date: NaiveDate,
    pub load_proxy: f64,
    pub fatigue: f64,
    pub fitness: f64,
    pub form: f64,
}

impl DailyLoadPoint {
    pub fn new(date: NaiveDate, load_proxy: f64) -> Self {
        Self { date, load_proxy, fatigue: 0.0, fitness: 0.0, form: 0.0 }
    }
}

/// Økt med alle avledede felt. NaN serialiseres som `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedSession {
    pub date: NaiveDate,
    pub weekday_index: u32,
    pub training_type: TrainingType,
    pub distance: f64,
    pub aerobic_effect: f64,
    pub mean_heart_rate: f64,
    pub mean_pace: Option<String>,
    pub load_proxy: f64,

    pub fatigue: f64,
    pub fitness: f64,
    pub form: f64,

    pub acute_load_7d: f64,
    pub chronic_load_28d: f64,
    pub acute_chronic_ratio: f64,
    pub injury_risk: InjuryRisk,

    pub pace_seconds_per_km: f64,
    pub speed_kmh: f64,
    pub cardiac_efficiency: f64,
    pub cardiac_efficiency_baseline: f64,
    pub efficiency_deviation_pct: f64,
}

impl EnrichedSession {
    /// Starter en beriket rad; kurve-, ratio- og hjertefelt fylles av de neste stegene.
    pub fn from_session(s: &Session, load_scale: f64) -> Self {
        let weekday_index = s.weekday_index();
        Self {
            date: s.date,
            weekday_index,
            training_type: TrainingType::from_weekday(weekday_index),
            distance: s.distance,
            aerobic_effect: s.aerobic_effect,
            mean_heart_rate: s.mean_heart_rate,
            mean_pace: s.mean_pace.clone(),
            load_proxy: s.load_proxy(load_scale),
            fatigue: f64::NAN,
            fitness: f64::NAN,
            form: f64::NAN,
            acute_load_7d: f64::NAN,
            chronic_load_28d: f64::NAN,
            acute_chronic_ratio: f64::NAN,
            injury_risk: InjuryRisk::NoData,
            pace_seconds_per_km: f64::NAN,
            speed_kmh: f64::NAN,
            cardiac_efficiency: f64::NAN,
            cardiac_efficiency_baseline: f64::NAN,
            efficiency_deviation_pct: f64::NAN,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStats {
    pub session_count: usize,
    pub span_days: i64,
    pub total_distance_km: f64,
    pub mean_aerobic_effect: f64,
}

/// Detaljer om siste økt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatestSession {
    pub date: NaiveDate,
    pub training_type: TrainingType,
    pub distance: f64,
    pub load_proxy: f64,
    pub aerobic_effect: f64,
}

/// Snitt per økttype (Sustained Pace / Intervals / Long Run).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeBreakdown {
    pub training_type: TrainingType,
    pub count: usize,
    pub mean_distance: f64,
    pub mean_load: f64,
    pub mean_heart_rate: f64,
    pub mean_form: f64,
    pub arrives_fatigued: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskCount {
    pub risk: InjuryRisk,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatestState {
    pub form: f64,
    pub form_status: FormStatus,
    pub acute_chronic_ratio: f64,
    pub injury_risk: InjuryRisk,
    pub efficiency_deviation_pct: f64,
    pub cardiac_status: CardiacStatus,
    pub recommendations: Vec<Recommendation>,
    pub summary: SummaryStats,
    pub latest_session: LatestSession,
    pub by_type: Vec<TypeBreakdown>,
    pub risk_distribution: Vec<RiskCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub sessions: Vec<EnrichedSession>,
    pub latest: LatestState,
}
