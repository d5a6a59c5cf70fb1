use prometheus::{IntCounter, Opts, Registry};

/// Tellere for pipeline-kjøringer. Eies av kalleren og sendes inn eksplisitt.
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pipeline_runs: IntCounter,
    sessions_processed: IntCounter,
    malformed_fields: IntCounter,
    rows_dropped: IntCounter,
}

impl std::fmt::Debug for Metrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Metrics")
            .field("pipeline_runs", &self.pipeline_runs.get())
            .field("sessions_processed", &self.sessions_processed.get())
            .field("malformed_fields", &self.malformed_fields.get())
            .field("rows_dropped", &self.rows_dropped.get())
            .finish()
    }
}

fn counter(registry: &Registry, name: &str, help: &str) -> prometheus::Result<IntCounter> {
    let c = IntCounter::with_opts(Opts::new(name, help).namespace("loadmonitor"))?;
    registry.register(Box::new(c.clone()))?;
    Ok(c)
}

impl Metrics {
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();
        Ok(Self {
            pipeline_runs: counter(&registry, "pipeline_runs_total", "Antall fullførte analyser")?,
            sessions_processed: counter(&registry, "sessions_processed_total", "Økter analysert")?,
            malformed_fields: counter(&registry, "malformed_fields_total", "Felt som ble NaN")?,
            rows_dropped: counter(&registry, "rows_dropped_total", "Rader uten gyldig dato")?,
            registry,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

pub fn pipeline_runs_total(m: &Metrics) -> &IntCounter {
    &m.pipeline_runs
}

pub fn sessions_processed_total(m: &Metrics) -> &IntCounter {
    &m.sessions_processed
}

pub fn malformed_fields_total(m: &Metrics) -> &IntCounter {
    &m.malformed_fields
}

pub fn rows_dropped_total(m: &Metrics) -> &IntCounter {
    &m.rows_dropped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_are_registered() {
        let m = Metrics::new().unwrap();
        malformed_fields_total(&m).inc();
        let families = m.registry().gather();
        let names: Vec<_> = families.iter().map(|f| f.get_name().to_string()).collect();
        assert!(names.contains(&"loadmonitor_malformed_fields_total".to_string()));
        assert_eq!(malformed_fields_total(&m).get(), 1);
    }
}
