use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

pub type ValidationResult = Result<(), ValidationError>;

pub const INVALID_AUDIENCE_MESSAGE: &str = "Invalid audience";

/// Bearer token error codes (RFC 6750 §3.1) a host pipeline surfaces to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidRequest,
    InvalidToken,
    InsufficientScope,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidRequest => "invalid_request",
            ErrorCode::InvalidToken => "invalid_token",
            ErrorCode::InsufficientScope => "insufficient_scope",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// Expected audience absent from the claim, including a missing or empty claim.
    InvalidAudience,
}

/// Failure verdict handed back to the token-validation pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("[{code}] {message}")]
pub struct ValidationError {
    #[serde(skip)]
    kind: ValidationErrorKind,
    code: ErrorCode,
    message: Cow<'static, str>,
}

impl ValidationError {
    pub fn invalid_audience() -> Self {
        Self {
            kind: ValidationErrorKind::InvalidAudience,
            code: ErrorCode::InvalidToken,
            message: Cow::Borrowed(INVALID_AUDIENCE_MESSAGE),
        }
    }

    pub fn kind(&self) -> ValidationErrorKind {
        self.kind
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("expected audience must not be empty")]
    EmptyAudience,
    #[error("environment variable '{0}' is not set")]
    MissingVariable(&'static str),
}
