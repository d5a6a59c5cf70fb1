use crate::classify::TrainingType;
use crate::types::{EnrichedSession, LatestSession, RiskCount, SummaryStats, TypeBreakdown};
use crate::workload::InjuryRisk;

/// Snitt som hopper over NaN. Tom eller bare NaN → NaN.
pub fn nan_mean<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    let (sum, n) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if n == 0 { f64::NAN } else { sum / n as f64 }
}

/// Sum som hopper over NaN.
pub fn nan_sum<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    values.into_iter().filter(|v| v.is_finite()).sum()
}

/// Antall økter, spenn i dager, total distanse og snitt TE aerob.
pub fn summary_stats(sessions: &[EnrichedSession]) -> SummaryStats {
    let span_days = match (sessions.first(), sessions.last()) {
        (Some(f), Some(l)) => (l.date - f.date).num_days(),
        _ => 0,
    };
    SummaryStats {
        session_count: sessions.len(),
        span_days,
        total_distance_km: nan_sum(sessions.iter().map(|s| s.distance)),
        mean_aerobic_effect: nan_mean(sessions.iter().map(|s| s.aerobic_effect)),
    }
}

pub fn latest_session(s: &EnrichedSession) -> LatestSession {
    LatestSession {
        date: s.date,
        training_type: s.training_type,
        distance: s.distance,
        load_proxy: s.load_proxy,
        aerobic_effect: s.aerobic_effect,
    }
}

/// Snitt per nøkkeltype. Typer uten økter utelates.
pub fn breakdown_by_type(sessions: &[EnrichedSession]) -> Vec<TypeBreakdown> {
    TrainingType::KEY_SESSIONS
        .iter()
        .filter_map(|&tt| {
            let rows: Vec<&EnrichedSession> = sessions.iter().filter(|s| s.training_type == tt).collect();
            if rows.is_empty() {
                return None;
            }
            let mean_form = nan_mean(rows.iter().map(|s| s.form));
            Some(TypeBreakdown {
                training_type: tt,
                count: rows.len(),
                mean_distance: nan_mean(rows.iter().map(|s| s.distance)),
                mean_load: nan_mean(rows.iter().map(|s| s.load_proxy)),
                mean_heart_rate: nan_mean(rows.iter().map(|s| s.mean_heart_rate)),
                mean_form,
                arrives_fatigued: mean_form < -5.0,
            })
        })
        .collect()
}

/// Fordeling av risikoklasser; klasser med 0 økter utelates.
pub fn risk_distribution(sessions: &[EnrichedSession]) -> Vec<RiskCount> {
    InjuryRisk::ALL
        .iter()
        .map(|&risk| RiskCount {
            risk,
            count: sessions.iter().filter(|s| s.injury_risk == risk).count(),
        })
        .filter(|rc| rc.count > 0)
        .collect()
}
