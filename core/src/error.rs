use chrono::NaiveDate;
use thiserror::Error;

/// Harde feil fra motoren og adapterne rundt den.
///
/// Feil i enkeltfelt (`FieldError`) er ikke her: de absorberes lokalt og blir NaN.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("ingen økter i input – ingen datoperiode å analysere")]
    EmptyInput,

    #[error("dato {date} mangler i den daglige tidslinjen")]
    TimelineGap { date: NaiveDate },

    #[error("ugyldig konfigurasjon: {0}")]
    InvalidConfig(String),

    #[error("CSV-feil: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO-feil: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON-feil ved {path}: {message}")]
    Json { path: String, message: String },
}

impl EngineError {
    pub(crate) fn json(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        EngineError::Json {
            path: err.path().to_string(),
            message: err.inner().to_string(),
        }
    }
}

/// Et felt i en rad som ikke kunne tolkes. Raden behandles videre med NaN i feltet.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    #[error("felt '{field}' mangler")]
    Missing { field: &'static str },

    #[error("felt '{field}' kunne ikke tolkes: '{raw}'")]
    Unparseable { field: &'static str, raw: String },
}

pub type Result<T> = std::result::Result<T, EngineError>;
