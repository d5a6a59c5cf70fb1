use crate::cardiac::apply_cardiac;
use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::ingest::Ingested;
use crate::metrics::{
    malformed_fields_total, pipeline_runs_total, rows_dropped_total, sessions_processed_total, Metrics,
};
use crate::smoothing::{apply_load_curves, join_load_curves};
use crate::state::{recommendations, CardiacStatus, FormStatus};
use crate::summary::{breakdown_by_type, latest_session, risk_distribution, summary_stats};
use crate::timeline::densify;
use crate::types::{EnrichedSession, LatestState, Report, Session};
use crate::workload::apply_workload;

/// Beriker økter: klassifisering → tidslinje + ATL/CTL/TSB → ACWR → hjerteeffektivitet.
///
/// Øktene sorteres stabilt på dato; flere økter samme dag beholder innbyrdes rekkefølge.
/// Returnerer også antall tempofelt som ikke kunne tolkes.
pub fn enrich(sessions: &[Session], cfg: &EngineConfig) -> Result<(Vec<EnrichedSession>, usize)> {
    if sessions.is_empty() {
        return Err(EngineError::EmptyInput);
    }

    let mut rows: Vec<EnrichedSession> = sessions
        .iter()
        .map(|s| EnrichedSession::from_session(s, cfg.load_scale))
        .collect();
    rows.sort_by_key(|r| r.date);

    let loads: Vec<_> = rows.iter().map(|r| (r.date, r.load_proxy)).collect();
    let mut daily = densify(&loads)?;
    apply_load_curves(&mut daily, cfg.fatigue_span, cfg.fitness_span);
    join_load_curves(&mut rows, &daily)?;

    apply_workload(&mut rows, cfg.acute_window, cfg.chronic_window);
    let bad_paces = apply_cardiac(&mut rows, cfg.baseline_window, cfg.baseline_min_periods);

    Ok((rows, bad_paces))
}

/// Status for siste økt + anbefalinger og oppsummering.
pub fn latest_state(rows: &[EnrichedSession], cfg: &EngineConfig) -> Result<LatestState> {
    let last = rows.last().ok_or(EngineError::EmptyInput)?;

    Ok(LatestState {
        form: last.form,
        form_status: FormStatus::classify(last.form),
        acute_chronic_ratio: last.acute_chronic_ratio,
        injury_risk: last.injury_risk,
        efficiency_deviation_pct: last.efficiency_deviation_pct,
        cardiac_status: CardiacStatus::classify(last.efficiency_deviation_pct),
        recommendations: recommendations(rows, cfg.cardiac_history),
        summary: summary_stats(rows),
        latest_session: latest_session(last),
        by_type: breakdown_by_type(rows),
        risk_distribution: risk_distribution(rows),
    })
}

/// Full analyse av én logg. Ingen tilstand tas med mellom kall.
pub fn analyze(sessions: &[Session], cfg: &EngineConfig, metrics: Option<&Metrics>) -> Result<Report> {
    cfg.validate()?;
    let (rows, bad_paces) = enrich(sessions, cfg)?;
    let latest = latest_state(&rows, cfg)?;

    if let Some(m) = metrics {
        pipeline_runs_total(m).inc();
        sessions_processed_total(m).inc_by(rows.len() as u64);
        malformed_fields_total(m).inc_by(bad_paces as u64);
    }

    log::info!(
        "analyse: {} økter over {} dager, form={:.1} ({}), ACWR={:.2} ({})",
        latest.summary.session_count,
        latest.summary.span_days,
        latest.form,
        latest.form_status,
        latest.acute_chronic_ratio,
        latest.injury_risk,
    );

    Ok(Report { sessions: rows, latest })
}

/// Som [`analyze`], men fra innleste rader (teller også feltfeil og droppede rader).
pub fn analyze_ingested(ingested: &Ingested, cfg: &EngineConfig, metrics: Option<&Metrics>) -> Result<Report> {
    if let Some(m) = metrics {
        malformed_fields_total(m).inc_by(ingested.malformed_fields as u64);
        rows_dropped_total(m).inc_by(ingested.dropped_rows as u64);
    }
    if ingested.dropped_rows > 0 {
        log::warn!("{} rader uten gyldig dato ble hoppet over", ingested.dropped_rows);
    }
    analyze(&ingested.sessions, cfg, metrics)
}
