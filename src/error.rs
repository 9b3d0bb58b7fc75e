use thiserror::Error;

/// Errors raised while computing dates or assembling a certificate.
#[derive(Debug, Error)]
pub enum CertError {
    #[error("missing required input: {0}")]
    InvalidInput(&'static str),
    #[error("required fields are empty: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("invalid date for {field}: {value:?} (expected YYYY-MM-DD)")]
    InvalidDate { field: &'static str, value: String },
    #[error("date arithmetic out of range")]
    DateOutOfRange,
    #[error("template rendering failed: {0}")]
    Template(#[from] tera::Error),
    #[error("failed to load issuer profile: {0}")]
    IssuerProfile(String),
}

pub type Result<T> = std::result::Result<T, CertError>;
