pub mod claims;
pub mod config;
pub mod error;
pub mod validator;

pub use claims::{Audiences, DecodedClaims, HasAudience};
pub use config::{load_audience_config, load_audience_config_from, AudienceConfig, AUDIENCE_ENV};
pub use error::{
    ConfigError, ErrorCode, ValidationError, ValidationErrorKind, ValidationResult,
    INVALID_AUDIENCE_MESSAGE,
};
pub use validator::{AudienceValidator, TokenValidator};
