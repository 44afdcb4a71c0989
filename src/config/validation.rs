//! Configuration validation.
//!
//! Pure function over a loaded `ServerConfig`; reports every problem, not
//! only the first one.

use thiserror::Error;

use crate::config::schema::ServerConfig;

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("must supply --port")]
    MissingPort,

    #[error("listener host must not be empty")]
    EmptyHost,

    #[error("shutdown grace period must be greater than zero")]
    ZeroGracePeriod,
}

/// Check value ranges that serde cannot express.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.port == 0 {
        errors.push(ValidationError::MissingPort);
    }
    if config.listener.host.trim().is_empty() {
        errors.push(ValidationError::EmptyHost);
    }
    if config.shutdown.grace_period_secs == 0 {
        errors.push(ValidationError::ZeroGracePeriod);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(validate_config(&ServerConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ServerConfig::default();
        config.listener.port = 0;
        config.listener.host = " ".into();
        config.shutdown.grace_period_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::MissingPort,
                ValidationError::EmptyHost,
                ValidationError::ZeroGracePeriod,
            ]
        );
        assert_eq!(errors[0].to_string(), "must supply --port");
    }
}
