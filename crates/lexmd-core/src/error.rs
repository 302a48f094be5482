//! Structured errors for the library façade.
//!
//! Every failure is reduced to an [`ErrorCode`] plus a message so callers
//! on the other side of a JSON boundary can branch on the code.

use std::fmt;

use lexmd_dimensions::DimensionError;
use lexmd_report::ContractViolation;
use lexmd_settings::SettingsError;
use lexmd_spectrum::SpectrumError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error codes for lexmd operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Malformed token sequence.
    InvalidInput,
    /// Invalid settings, unknown indicator key or bad coefficient table.
    InvalidSettings,
    /// Invalid JSON input.
    InvalidJson,
    /// Unknown operation mode.
    UnknownMode,
    /// I/O error while reading settings or tables.
    IoError,
    /// Spectrum, curve and results did not belong together.
    ContractViolation,
    /// Internal error (unexpected state).
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::InvalidInput => write!(f, "invalid_input"),
            ErrorCode::InvalidSettings => write!(f, "invalid_settings"),
            ErrorCode::InvalidJson => write!(f, "invalid_json"),
            ErrorCode::UnknownMode => write!(f, "unknown_mode"),
            ErrorCode::IoError => write!(f, "io_error"),
            ErrorCode::ContractViolation => write!(f, "contract_violation"),
            ErrorCode::InternalError => write!(f, "internal_error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexmdError {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl LexmdError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(
        code: ErrorCode,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            details: Some(details.into()),
        }
    }

    pub fn invalid_input(err: impl fmt::Display) -> Self {
        Self::new(ErrorCode::InvalidInput, format!("Invalid input: {err}"))
    }

    pub fn invalid_json(err: impl fmt::Display) -> Self {
        Self::new(ErrorCode::InvalidJson, format!("Invalid JSON: {err}"))
    }

    pub fn unknown_mode(mode: &str) -> Self {
        Self::new(ErrorCode::UnknownMode, format!("Unknown mode: {mode}"))
    }

    /// An `only` entry that names no indicator.
    pub fn unknown_indicator(key: &str) -> Self {
        Self::with_details(
            ErrorCode::InvalidSettings,
            format!("Unknown indicator key '{key}'"),
            "see `lexmd explain list` for the supported keys",
        )
    }

    /// A JSON argument of the wrong shape.
    pub fn invalid_field(field: &str, expected: &str) -> Self {
        Self::new(
            ErrorCode::InvalidSettings,
            format!("Invalid value for '{field}': expected {expected}"),
        )
    }

    pub fn io_error(err: impl fmt::Display) -> Self {
        Self::new(ErrorCode::IoError, format!("I/O error: {err}"))
    }

    pub fn internal(err: impl fmt::Display) -> Self {
        Self::new(ErrorCode::InternalError, format!("Internal error: {err}"))
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(
                r#"{{"code":"{}","message":"{}"}}"#,
                self.code, self.message
            )
        })
    }
}

impl fmt::Display for LexmdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(details) = &self.details {
            write!(f, "[{}] {}: {}", self.code, self.message, details)
        } else {
            write!(f, "[{}] {}", self.code, self.message)
        }
    }
}

impl std::error::Error for LexmdError {}

impl From<SpectrumError> for LexmdError {
    fn from(err: SpectrumError) -> Self {
        Self::invalid_input(err)
    }
}

impl From<SettingsError> for LexmdError {
    fn from(err: SettingsError) -> Self {
        match err {
            SettingsError::IoError(e) => Self::io_error(e),
            other => Self::new(ErrorCode::InvalidSettings, other.to_string()),
        }
    }
}

impl From<DimensionError> for LexmdError {
    fn from(err: DimensionError) -> Self {
        match err {
            DimensionError::IoError(e) => Self::io_error(e),
            other => Self::new(ErrorCode::InvalidSettings, other.to_string()),
        }
    }
}

impl From<ContractViolation> for LexmdError {
    fn from(err: ContractViolation) -> Self {
        Self::new(ErrorCode::ContractViolation, err.to_string())
    }
}

impl From<serde_json::Error> for LexmdError {
    fn from(err: serde_json::Error) -> Self {
        Self::invalid_json(err)
    }
}

/// Envelope returned by [`crate::ffi::run_json`].
///
/// - Success: `{"ok": true, "data": {...}}`
/// - Error: `{"ok": false, "error": {"code": "...", "message": "..."}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<LexmdError>,
}

impl ResponseEnvelope {
    pub fn success(data: Value) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(err: &LexmdError) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(err.clone()),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| match &self.error {
            Some(err) => format!(
                r#"{{"ok":false,"error":{{"code":"{}","message":"{}"}}}}"#,
                err.code, err.message
            ),
            None => r#"{"ok":false,"error":{"code":"internal_error","message":"unserializable response"}}"#
                .to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_serialize_to_snake_case() {
        let err = LexmdError::unknown_mode("foo");
        assert!(err.to_json().contains("\"code\":\"unknown_mode\""));
        let err = LexmdError::new(ErrorCode::ContractViolation, "x");
        assert!(err.to_json().contains("\"code\":\"contract_violation\""));
    }

    #[test]
    fn display_includes_code_and_details() {
        let err = LexmdError::unknown_indicator("zipf");
        let display = err.to_string();
        assert!(display.starts_with("[invalid_settings] Unknown indicator key 'zipf'"));
        assert!(display.contains("lexmd explain list"));
    }

    #[test]
    fn spectrum_errors_map_to_invalid_input() {
        let err: LexmdError = SpectrumError::EmptyToken { index: 3 }.into();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert!(err.message.contains("position 3"));
    }

    #[test]
    fn settings_io_errors_keep_their_code() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: LexmdError = SettingsError::IoError(io).into();
        assert_eq!(err.code, ErrorCode::IoError);

        let err: LexmdError = SettingsError::EmptySeparator.into();
        assert_eq!(err.code, ErrorCode::InvalidSettings);
    }

    #[test]
    fn coefficient_io_errors_keep_their_code() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "locked");
        let err: LexmdError = DimensionError::IoError(io).into();
        assert_eq!(err.code, ErrorCode::IoError);
        assert!(err.message.contains("locked"));

        let err: LexmdError = DimensionError::MissingName.into();
        assert_eq!(err.code, ErrorCode::InvalidSettings);
    }

    #[test]
    fn envelope_omits_absent_parts() {
        let ok = ResponseEnvelope::success(serde_json::json!({"n": 1})).to_json();
        assert_eq!(ok, r#"{"ok":true,"data":{"n":1}}"#);

        let err = ResponseEnvelope::error(&LexmdError::unknown_mode("x")).to_json();
        let parsed: Value = serde_json::from_str(&err).unwrap();
        assert_eq!(parsed["ok"], false);
        assert!(parsed.get("data").is_none());
        assert_eq!(parsed["error"]["code"], "unknown_mode");
    }
}
