use std::fmt;

use serde::Serialize;
use ts_rs::TS;

/// Crate-wide error type. Serializes with a stable `{code, detail}` shape
/// so callers can match on the code instead of parsing message text.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(tag = "code", content = "detail")]
#[ts(export)]
pub enum AppError {
    MissingConfig { var: String },
    InvalidConfig { var: String, message: String },
    DateParse { field: String, value: String },
    IoError { message: String },
    JsonError { message: String },
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::MissingConfig { var } => {
                write!(f, "{var} environment variable not set")
            }
            AppError::InvalidConfig { var, message } => {
                write!(f, "Invalid {var}: {message}")
            }
            AppError::DateParse { field, value } => {
                write!(f, "Invalid date for {field}: {value:?} (expected YYYY-MM-DD)")
            }
            AppError::IoError { message } => write!(f, "I/O error: {message}"),
            AppError::JsonError { message } => write!(f, "JSON error: {message}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::IoError {
            message: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::JsonError {
            message: e.to_string(),
        }
    }
}
