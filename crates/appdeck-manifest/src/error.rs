use thiserror::Error;

/// Errors from rendering, parsing, or splicing the persisted module.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Record collection markers not found in module text")]
    MarkerNotFound,

    #[error("Record is missing required field '{field}'")]
    MissingField { field: &'static str },

    #[error("Record block is not terminated before the collection ends")]
    UnterminatedRecord,

    #[error("Cannot parse record line: {line}")]
    InvalidLine { line: String },

    #[error(transparent)]
    Core(#[from] appdeck_core::CoreError),
}

impl ManifestError {
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    pub fn invalid_line(line: impl Into<String>) -> Self {
        Self::InvalidLine { line: line.into() }
    }
}

pub type Result<T> = std::result::Result<T, ManifestError>;
