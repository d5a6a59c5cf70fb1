use crate::pace::parse_pace;
use crate::types::EnrichedSession;

/// Hjerteeffektivitet = puls / fart (km/t). Lavere er bedre.
pub fn cardiac_efficiency(mean_heart_rate: f64, speed_kmh: f64) -> f64 {
    mean_heart_rate / speed_kmh
}

/// Glidende snitt over de siste `window` verdiene, krever minst `min_periods` endelige verdier.
pub fn rolling_mean(values: &[f64], window: usize, min_periods: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len());
    for i in 0..values.len() {
        let start = (i + 1).saturating_sub(window);
        let finite: Vec<f64> = values[start..=i].iter().copied().filter(|v| v.is_finite()).collect();
        if finite.len() < min_periods || finite.is_empty() {
            out.push(f64::NAN);
        } else {
            out.push(finite.iter().sum::<f64>() / finite.len() as f64);
        }
    }
    out
}

/// Avvik i % fra baseline. NaN når baseline mangler.
pub fn deviation_pct(value: f64, baseline: f64) -> f64 {
    (value - baseline) / baseline * 100.0
}

/// Tempo → fart → effektivitet, deretter baseline og avvik per økt.
///
/// Returnerer antall økter der tempoet ikke kunne tolkes.
pub fn apply_cardiac(sessions: &mut [EnrichedSession], baseline_window: usize, min_periods: usize) -> usize {
    let mut malformed = 0usize;

    for s in sessions.iter_mut() {
        let parsed = match s.mean_pace.as_deref() {
            Some(text) => parse_pace(text).map_err(|e| e.to_string()),
            None => Err("tempo mangler".to_string()),
        };
        match parsed {
            Ok(pace) => {
                s.pace_seconds_per_km = f64::from(pace.0);
                s.speed_kmh = pace.speed_kmh();
            }
            Err(reason) => {
                log::warn!("{}: {reason} – hjerteeffektivitet settes til NaN", s.date);
                malformed += 1;
                s.pace_seconds_per_km = f64::NAN;
                s.speed_kmh = f64::NAN;
            }
        }
        s.cardiac_efficiency = cardiac_efficiency(s.mean_heart_rate, s.speed_kmh);
    }

    let eff: Vec<f64> = sessions.iter().map(|s| s.cardiac_efficiency).collect();
    let baseline = rolling_mean(&eff, baseline_window, min_periods);
    for (s, b) in sessions.iter_mut().zip(baseline) {
        s.cardiac_efficiency_baseline = b;
        s.efficiency_deviation_pct = deviation_pct(s.cardiac_efficiency, b);
    }

    malformed
}
