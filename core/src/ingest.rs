use std::fmt;
use std::io::Read;

use chrono::{NaiveDate, NaiveDateTime};
use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

use crate::error::{EngineError, FieldError, Result};
use crate::types::Session;

// ──────────────────────────────────────────────────────────────────────────────
// RÅ RAD: tolerant for tall/tekst/tomme felt, engelske og spanske kolonnenavn
// ──────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSessionRow {
    #[serde(default, alias = "Date", alias = "Fecha", deserialize_with = "lenient_text")]
    pub date: Option<String>,
    #[serde(default, alias = "Distance", alias = "Distancia", deserialize_with = "lenient_text")]
    pub distance: Option<String>,
    #[serde(
        default,
        alias = "Aerobic Effect",
        alias = "Aerobic TE",
        alias = "TE aeróbico",
        deserialize_with = "lenient_text"
    )]
    pub aerobic_effect: Option<String>,
    #[serde(
        default,
        alias = "Mean Heart Rate",
        alias = "Avg HR",
        alias = "Frecuencia cardiaca media",
        alias = "Frecuencia cardíaca media",
        deserialize_with = "lenient_text"
    )]
    pub mean_heart_rate: Option<String>,
    #[serde(
        default,
        alias = "Mean Pace",
        alias = "Avg Pace",
        alias = "Ritmo medio",
        deserialize_with = "lenient_text"
    )]
    pub mean_pace: Option<String>,
}

/// Godtar streng, tall eller null/tomt felt og gir tekst tilbake.
fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct TextVisitor;

    impl<'de> Visitor<'de> for TextVisitor {
        type Value = Option<String>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("tekst, tall eller tomt felt")
        }

        fn visit_none<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D2: Deserializer<'de>>(self, d: D2) -> std::result::Result<Self::Value, D2::Error> {
            d.deserialize_any(TextVisitor)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Self::Value, E> {
            let t = v.trim();
            Ok(if t.is_empty() { None } else { Some(t.to_string()) })
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_i128<E: de::Error>(self, v: i128) -> std::result::Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_u128<E: de::Error>(self, v: u128) -> std::result::Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }
    }

    deserializer.deserialize_option(TextVisitor)
}

// ──────────────────────────────────────────────────────────────────────────────
// KONVERTERING (rå → Session)
// ──────────────────────────────────────────────────────────────────────────────

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d/%m/%Y", "%Y/%m/%d"];
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"];

pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let t = text.trim();
    DATE_FORMATS
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(t, f).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|f| NaiveDateTime::parse_from_str(t, f).ok())
                .map(|dt| dt.date())
        })
}

fn parse_number(field: &'static str, raw: Option<&str>) -> std::result::Result<f64, FieldError> {
    let raw = raw.ok_or(FieldError::Missing { field })?;
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(FieldError::Unparseable { field, raw: raw.to_string() }),
    }
}

/// Utfallet av én rad. `None` betyr at raden mangler gyldig dato og droppes.
#[derive(Debug, Clone)]
pub struct RowOutcome {
    pub session: Option<Session>,
    pub field_errors: Vec<FieldError>,
}

impl RawSessionRow {
    /// Feltfeil absorberes som NaN. Tempo tolkes først i hjerteberegningen.
    pub fn into_session(self) -> RowOutcome {
        let mut field_errors = Vec::new();
        let mut number = |field: &'static str, raw: Option<&str>| match parse_number(field, raw) {
            Ok(v) => v,
            Err(e) => {
                field_errors.push(e);
                f64::NAN
            }
        };

        let distance = number("distance", self.distance.as_deref());
        let aerobic_effect = number("aerobic_effect", self.aerobic_effect.as_deref());
        let mean_heart_rate = number("mean_heart_rate", self.mean_heart_rate.as_deref());

        let date = match self.date.as_deref() {
            Some(raw) => match parse_date(raw) {
                Some(d) => Some(d),
                None => {
                    field_errors.push(FieldError::Unparseable { field: "date", raw: raw.to_string() });
                    None
                }
            },
            None => {
                field_errors.push(FieldError::Missing { field: "date" });
                None
            }
        };

        RowOutcome {
            session: date.map(|date| Session {
                date,
                distance,
                aerobic_effect,
                mean_heart_rate,
                mean_pace: self.mean_pace,
            }),
            field_errors,
        }
    }
}

/// Resultat av innlesing: gyldige økter + tellere for feltfeil og droppede rader.
#[derive(Debug, Clone, Default)]
pub struct Ingested {
    pub sessions: Vec<Session>,
    pub malformed_fields: usize,
    pub dropped_rows: usize,
}

impl Ingested {
    pub fn from_rows<I: IntoIterator<Item = RawSessionRow>>(rows: I) -> Self {
        let mut out = Ingested::default();
        for (i, row) in rows.into_iter().enumerate() {
            let outcome = row.into_session();
            for e in &outcome.field_errors {
                log::warn!("rad {}: {e}", i + 1);
            }
            match outcome.session {
                Some(s) => {
                    // datofeil teller som droppet rad, ikke som feltfeil
                    out.malformed_fields += outcome.field_errors.len();
                    out.sessions.push(s);
                }
                None => {
                    out.malformed_fields += outcome.field_errors.len().saturating_sub(1);
                    out.dropped_rows += 1;
                }
            }
        }
        out
    }
}

/// Leser en CSV-eksport (Garmin/Strava-lignende) med header.
/// Korte rader godtas; manglende kolonner blir tomme felt.
pub fn read_csv<R: Read>(reader: R) -> Result<Ingested> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let mut rows = Vec::new();
    for rec in rdr.deserialize::<RawSessionRow>() {
        rows.push(rec?);
    }
    log::debug!("csv: {} rader lest", rows.len());
    Ok(Ingested::from_rows(rows))
}

pub fn read_csv_path(path: &std::path::Path) -> Result<Ingested> {
    let file = std::fs::File::open(path)?;
    read_csv(file)
}

/// Leser rader fra en JSON-liste. Feil rapporteres med sti (f.eks. `[3].Distance`).
pub fn read_json_rows(json: &str) -> Result<Ingested> {
    let de = &mut serde_json::Deserializer::from_str(json);
    let rows: Vec<RawSessionRow> = serde_path_to_error::deserialize(de).map_err(EngineError::json)?;
    Ok(Ingested::from_rows(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 5, 7);
        assert_eq!(parse_date("2024-05-07"), expected);
        assert_eq!(parse_date("07/05/2024"), expected);
        assert_eq!(parse_date("2024-05-07 06:30:00"), expected);
        assert_eq!(parse_date("yesterday"), None);
    }

    #[test]
    fn bad_number_becomes_nan() {
        let row = RawSessionRow {
            date: Some("2024-05-07".into()),
            distance: Some("10.5".into()),
            aerobic_effect: Some("--".into()),
            mean_heart_rate: None,
            mean_pace: Some("5:10".into()),
        };
        let out = row.into_session();
        let s = out.session.unwrap();
        assert_eq!(s.distance, 10.5);
        assert!(s.aerobic_effect.is_nan());
        assert!(s.mean_heart_rate.is_nan());
        assert_eq!(out.field_errors.len(), 2);
    }
}
