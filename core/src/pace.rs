use thiserror::Error;

/// Tempo i sekunder per kilometer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PaceSeconds(pub u32);

impl PaceSeconds {
    /// Fart i km/t = 3600 / sek_per_km
    pub fn speed_kmh(self) -> f64 {
        3600.0 / f64::from(self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaceParseError {
    #[error("tomt tempo")]
    Empty,
    #[error("tempo '{0}' er ikke på formen M:SS")]
    Format(String),
    #[error("ugyldig tall i tempo '{0}'")]
    Number(String),
    #[error("tempo kan ikke være 0:00")]
    Zero,
}

/// Tolker "M:SS" (min:sek per km) til sekunder per km.
///
/// Whitespace rundt trimmes. Nøyaktig to deler, begge ikke-negative heltall.
pub fn parse_pace(text: &str) -> Result<PaceSeconds, PaceParseError> {
    let t = text.trim();
    if t.is_empty() {
        return Err(PaceParseError::Empty);
    }

    let mut parts = t.split(':');
    let (min, sec) = match (parts.next(), parts.next(), parts.next()) {
        (Some(m), Some(s), None) => (m.trim(), s.trim()),
        _ => return Err(PaceParseError::Format(t.to_string())),
    };

    let min: u32 = min.parse().map_err(|_| PaceParseError::Number(t.to_string()))?;
    let sec: u32 = sec.parse().map_err(|_| PaceParseError::Number(t.to_string()))?;

    let total = min
        .checked_mul(60)
        .and_then(|m| m.checked_add(sec))
        .ok_or_else(|| PaceParseError::Number(t.to_string()))?;
    if total == 0 {
        return Err(PaceParseError::Zero);
    }
    Ok(PaceSeconds(total))
}
