use std::collections::HashMap;

use chrono::NaiveDate;

use crate::error::{EngineError, Result};
use crate::types::{DailyLoadPoint, EnrichedSession};

/// Eksponentielt glidende snitt, ikke-justert rekursiv form.
///
/// α = 2/(span+1), avg[0] = x[0], avg[i] = avg[i-1] + α·(x[i] − avg[i-1]).
/// Beregnes strengt fremover; akkumuleringsrekkefølgen er den samme som utdata.
pub fn ewma(values: &[f64], span: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len());
    let alpha = 2.0 / (span as f64 + 1.0);

    let mut prev: Option<f64> = None;
    for &x in values {
        let next = match prev {
            None => x,
            Some(p) => p + alpha * (x - p),
        };
        out.push(next);
        prev = Some(next);
    }
    out
}

/// Fyller fatigue (ATL), fitness (CTL) og form (TSB = CTL − ATL) på den tette tidslinjen.
pub fn apply_load_curves(daily: &mut [DailyLoadPoint], fatigue_span: usize, fitness_span: usize) {
    let loads: Vec<f64> = daily.iter().map(|p| p.load_proxy).collect();
    let atl = ewma(&loads, fatigue_span);
    let ctl = ewma(&loads, fitness_span);

    for ((p, a), c) in daily.iter_mut().zip(atl).zip(ctl) {
        p.fatigue = a;
        p.fitness = c;
        p.form = c - a;
    }
}

/// Henter dagens kurveverdier inn på hver økt (eksakt datomatch).
/// Økter samme dag deler samme verdier.
pub fn join_load_curves(sessions: &mut [EnrichedSession], daily: &[DailyLoadPoint]) -> Result<()> {
    let by_date: HashMap<NaiveDate, &DailyLoadPoint> = daily.iter().map(|p| (p.date, p)).collect();

    for s in sessions.iter_mut() {
        let day = by_date
            .get(&s.date)
            .ok_or(EngineError::TimelineGap { date: s.date })?;
        s.fatigue = day.fatigue;
        s.fitness = day.fitness;
        s.form = day.form;
    }
    Ok(())
}
