use tracing::debug;

use crate::claims::HasAudience;
use crate::error::{ValidationError, ValidationResult};

/// A single check run by the token-validation pipeline against a decoded token.
pub trait TokenValidator<T: ?Sized> {
    fn validate(&self, token: &T) -> ValidationResult;
}

/// Accepts a token only when its `aud` claim contains the configured audience.
///
/// Matching is exact and case-sensitive. A missing claim, an empty claim and a
/// claim without the configured value all fail the same way with
/// [`ValidationError::invalid_audience`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudienceValidator {
    audience: String,
}

impl AudienceValidator {
    pub fn new(audience: impl Into<String>) -> Self {
        Self {
            audience: audience.into(),
        }
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub fn validate_audiences<S: AsRef<str>>(&self, audiences: &[S]) -> ValidationResult {
        if audiences.iter().any(|value| value.as_ref() == self.audience) {
            debug!(audience = %self.audience, "token audience accepted");
            return Ok(());
        }

        debug!(
            expected = %self.audience,
            presented = audiences.len(),
            "token audience rejected"
        );
        Err(ValidationError::invalid_audience())
    }
}

impl<T> TokenValidator<T> for AudienceValidator
where
    T: HasAudience + ?Sized,
{
    fn validate(&self, token: &T) -> ValidationResult {
        self.validate_audiences(token.audience())
    }
}
