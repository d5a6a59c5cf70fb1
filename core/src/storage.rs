use std::path::Path;

use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::types::Report;

/// Leser inn konfigurasjon fra disk (JSON).
/// Hvis filen ikke finnes, returneres default-konfigurasjon.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<EngineConfig> {
    let path = path.as_ref();
    if !path.exists() {
        log::info!("Fant ikke konfig på {}, bruker default", path.display());
        return Ok(EngineConfig::default());
    }

    let contents = std::fs::read_to_string(path)?;
    let de = &mut serde_json::Deserializer::from_str(&contents);
    let cfg: EngineConfig = serde_path_to_error::deserialize(de).map_err(EngineError::json)?;
    cfg.validate()?;
    log::info!("Konfig lastet fra {}", path.display());
    Ok(cfg)
}

/// Lagrer rapporten til disk som JSON (pretty-print). NaN skrives som null.
pub fn save_report<P: AsRef<Path>>(report: &Report, path: P) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(report).map_err(|e| EngineError::Json {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    std::fs::write(path, json)?;
    log::info!("Rapport lagret til {} ({} økter)", path.display(), report.sessions.len());
    Ok(())
}
