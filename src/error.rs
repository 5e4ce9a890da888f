use thiserror::Error;

use crate::models::FieldKind;

#[derive(Error, Debug)]
pub enum FunnelError {
    #[error("unknown funnel field '{0}'")]
    UnknownField(String),

    #[error("field '{field}' expects a {expected} value, got {actual}")]
    TypeMismatch {
        field: &'static str,
        expected: FieldKind,
        actual: FieldKind,
    },

    #[error("invalid value '{value}' for field '{field}'")]
    InvalidValue { field: &'static str, value: String },

    #[error("malformed edit '{0}', expected key=value")]
    MalformedEdit(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type FunnelResult<T> = Result<T, FunnelError>;
