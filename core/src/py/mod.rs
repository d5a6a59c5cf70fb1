// Python-binding for presentasjonslaget. Bygges kun med `--features python`.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::ingest::{read_csv_path, read_json_rows};
use crate::pipeline::analyze_ingested;
use crate::types::Report;

fn to_py_err(e: EngineError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

fn config_from(cfg_json: Option<&str>) -> PyResult<EngineConfig> {
    match cfg_json {
        None => Ok(EngineConfig::default()),
        Some(s) => {
            let de = &mut serde_json::Deserializer::from_str(s);
            serde_path_to_error::deserialize(de)
                .map_err(|e| to_py_err(EngineError::json(e)))
        }
    }
}

fn report_json(report: &Report) -> PyResult<String> {
    serde_json::to_string(report).map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Analyserer en CSV-fil og returnerer rapporten som JSON.
#[pyfunction]
#[pyo3(signature = (path, cfg_json=None))]
fn analyze_csv(path: &str, cfg_json: Option<&str>) -> PyResult<String> {
    let cfg = config_from(cfg_json)?;
    let ingested = read_csv_path(std::path::Path::new(path)).map_err(to_py_err)?;
    let report = analyze_ingested(&ingested, &cfg, None).map_err(to_py_err)?;
    report_json(&report)
}

/// Analyserer rader gitt som JSON-liste og returnerer rapporten som JSON.
#[pyfunction]
#[pyo3(signature = (rows_json, cfg_json=None))]
fn analyze_rows_json(rows_json: &str, cfg_json: Option<&str>) -> PyResult<String> {
    let cfg = config_from(cfg_json)?;
    let ingested = read_json_rows(rows_json).map_err(to_py_err)?;
    let report = analyze_ingested(&ingested, &cfg, None).map_err(to_py_err)?;
    report_json(&report)
}

#[pymodule]
fn loadmonitor_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(analyze_csv, m)?)?;
    m.add_function(wrap_pyfunction!(analyze_rows_json, m)?)?;
    Ok(())
}
