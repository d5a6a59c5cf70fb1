use std::fmt;

use crate::types::Report;

/// Visningsvalg sendes inn eksplisitt; motoren leser aldri disse.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub decimals: usize,
    pub show_table: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { decimals: 1, show_table: false }
    }
}

fn num(v: f64, dp: usize) -> String {
    if v.is_finite() { format!("{v:.dp$}") } else { "n/a".to_string() }
}

fn signed(v: f64, dp: usize) -> String {
    if v.is_finite() { format!("{v:+.dp$}") } else { "n/a".to_string() }
}

/// Tekstrapport: oppsummering, varselpanel, siste økt, per type, anbefalinger og (valgfritt) tabell.
pub struct ReportView<'a> {
    pub report: &'a Report,
    pub opts: &'a RenderOptions,
}

impl fmt::Display for ReportView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dp = self.opts.decimals;
        let l = &self.report.latest;

        writeln!(f, "--- Training Load Report ---")?;
        writeln!(
            f,
            "Sessions: {} | Span: {} days | Distance: {} km | Mean aerobic TE: {}",
            l.summary.session_count,
            l.summary.span_days,
            num(l.summary.total_distance_km, dp),
            num(l.summary.mean_aerobic_effect, 2),
        )?;

        writeln!(f, "\n[Alerts]")?;
        writeln!(f, "Form (TSB):   {} ({})", l.form_status, num(l.form, dp))?;
        writeln!(f, "Injury risk:  {} ({})", l.injury_risk, num(l.acute_chronic_ratio, 2))?;
        writeln!(f, "Cardiac:      {} ({}%)", l.cardiac_status, signed(l.efficiency_deviation_pct, dp))?;

        let s = &l.latest_session;
        writeln!(f, "\n[Latest session]")?;
        writeln!(
            f,
            "{} | {} | {} km | load {} | TE {}",
            s.date.format("%d/%m/%Y"),
            s.training_type,
            num(s.distance, 2),
            num(s.load_proxy, dp),
            num(s.aerobic_effect, 1),
        )?;

        if !l.by_type.is_empty() {
            writeln!(f, "\n[By session type]")?;
            for b in &l.by_type {
                writeln!(
                    f,
                    "{} ({}): dist {} km | load {} | HR {} bpm | form on arrival {}{}",
                    b.training_type,
                    b.count,
                    num(b.mean_distance, 2),
                    num(b.mean_load, dp),
                    num(b.mean_heart_rate, 0),
                    num(b.mean_form, dp),
                    if b.arrives_fatigued { " – arriving fatigued" } else { "" },
                )?;
            }
        }

        writeln!(f, "\n[Recommendations]")?;
        for r in &l.recommendations {
            writeln!(f, "- {}", r.message())?;
        }

        if !l.risk_distribution.is_empty() {
            writeln!(f, "\n[Risk distribution]")?;
            let total = self.report.sessions.len().max(1) as f64;
            for rc in &l.risk_distribution {
                let pct = rc.count as f64 / total * 100.0;
                writeln!(f, "{}: {} ({pct:.1}%)", rc.risk, rc.count)?;
            }
        }

        if self.opts.show_table {
            writeln!(f, "\n[Sessions]")?;
            writeln!(
                f,
                "{:<10} {:<14} {:>8} {:>7} {:>7} {:>7} {:>7} {:>6}  {}",
                "Date", "Type", "Dist", "Load", "ATL", "CTL", "TSB", "ACWR", "Risk"
            )?;
            for r in &self.report.sessions {
                writeln!(
                    f,
                    "{:<10} {:<14} {:>8} {:>7} {:>7} {:>7} {:>7} {:>6}  {}",
                    r.date.format("%Y-%m-%d").to_string(),
                    r.training_type.label(),
                    num(r.distance, 2),
                    num(r.load_proxy, dp),
                    num(r.fatigue, dp),
                    num(r.fitness, dp),
                    num(r.form, dp),
                    num(r.acute_chronic_ratio, 2),
                    r.injury_risk,
                )?;
            }
        }
        Ok(())
    }
}

pub fn render_report(report: &Report, opts: &RenderOptions) -> String {
    ReportView { report, opts }.to_string()
}

pub fn print_report(report: &Report, opts: &RenderOptions) {
    print!("{}", ReportView { report, opts });
}
