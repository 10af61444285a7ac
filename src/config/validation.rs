//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses, probe paths and value ranges
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ProberConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::ProberConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: &[&str] = &["pretty", "json"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("component must not be empty")]
    EmptyComponent,

    #[error("{field}: invalid socket address {value:?}")]
    InvalidAddress { field: &'static str, value: String },

    #[error("{field}: path {value:?} must start with '/' and contain no captures or wildcards")]
    InvalidPath { field: &'static str, value: String },

    #[error("healthy_path and ready_path must differ (both {0:?})")]
    DuplicatePath(String),

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,

    #[error("unknown log level {0:?}")]
    UnknownLogLevel(String),

    #[error("unknown log format {0:?}")]
    UnknownLogFormat(String),
}

/// Check a parsed configuration, collecting every problem found.
pub fn validate_config(config: &ProberConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.component.trim().is_empty() {
        errors.push(ValidationError::EmptyComponent);
    }

    check_address(&mut errors, "listener.bind_address", &config.listener.bind_address);
    if config.observability.metrics_enabled {
        check_address(
            &mut errors,
            "observability.metrics_address",
            &config.observability.metrics_address,
        );
    }

    check_path(&mut errors, "probes.healthy_path", &config.probes.healthy_path);
    check_path(&mut errors, "probes.ready_path", &config.probes.ready_path);
    if config.probes.healthy_path == config.probes.ready_path {
        errors.push(ValidationError::DuplicatePath(config.probes.ready_path.clone()));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(config.observability.log_level.clone()));
    }

    if !LOG_FORMATS.contains(&config.observability.log_format.as_str()) {
        errors.push(ValidationError::UnknownLogFormat(config.observability.log_format.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_address(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        });
    }
}

/// Probe paths are literal routes: no `:param`, `{capture}` or `*wildcard`
/// segments, which the router would either treat as patterns or reject.
fn check_path(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    let literal = value.starts_with('/')
        && !value.contains(['{', '}', '*'])
        && !value.split('/').any(|segment| segment.starts_with(':'));

    if !literal {
        errors.push(ValidationError::InvalidPath {
            field,
            value: value.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&ProberConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ProberConfig::default();
        config.component = " ".into();
        config.listener.bind_address = "not-an-address".into();
        config.probes.healthy_path = "healthy".into();
        config.timeouts.request_secs = 0;
        config.observability.log_level = "loud".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(errors.contains(&ValidationError::EmptyComponent));
        assert!(errors.contains(&ValidationError::ZeroTimeout));
        assert!(errors.contains(&ValidationError::UnknownLogLevel("loud".into())));
    }

    #[test]
    fn test_route_patterns_rejected() {
        for path in ["/:live", "/-/:ready", "/{id}", "/health}", "/{*rest}", "/-/*"] {
            let mut config = ProberConfig::default();
            config.probes.healthy_path = path.into();

            let errors = validate_config(&config).unwrap_err();
            assert_eq!(
                errors,
                vec![ValidationError::InvalidPath {
                    field: "probes.healthy_path",
                    value: path.into(),
                }],
                "{path} should be rejected"
            );
        }
    }

    #[test]
    fn test_literal_paths_accepted() {
        let mut config = ProberConfig::default();
        config.probes.healthy_path = "/healthz.v1".into();
        config.probes.ready_path = "/status/ready-check".into();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_duplicate_paths_rejected() {
        let mut config = ProberConfig::default();
        config.probes.ready_path = config.probes.healthy_path.clone();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::DuplicatePath("/-/healthy".into())]);
    }

    #[test]
    fn test_metrics_address_only_checked_when_enabled() {
        let mut config = ProberConfig::default();
        config.observability.metrics_address = "nope".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(
            errors.as_slice(),
            [ValidationError::InvalidAddress { field: "observability.metrics_address", .. }]
        ));
    }

    #[test]
    fn test_log_level_is_case_insensitive() {
        let mut config = ProberConfig::default();
        config.observability.log_level = "DEBUG".into();
        assert!(validate_config(&config).is_ok());
    }
}
