use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a user lookup did not produce any details.
///
/// This is the closed set of failures the result-style lookup may report.
/// Callers have to match on it before they get at a premium.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING-KEBAB-CASE")]
pub enum LookupFailure {
    #[error("user not found")]
    UserNotFound,
    #[error("service not available")]
    ServiceNotAvailable,
}

/// Failure modes of reaching into a [`User`](crate::model::User) for a first name.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessError {
    #[error("the user has no name")]
    MissingName,
    #[error("the name has no whitespace-delimited token")]
    EmptyName,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read pricing file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse pricing rules: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for field '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_failure_display() {
        assert_eq!(LookupFailure::UserNotFound.to_string(), "user not found");
        assert_eq!(
            LookupFailure::ServiceNotAvailable.to_string(),
            "service not available"
        );
    }

    #[test]
    fn test_lookup_failure_wire_names() {
        let json = serde_json::to_string(&LookupFailure::UserNotFound).unwrap();
        assert_eq!(json, "\"USER-NOT-FOUND\"");

        let parsed: LookupFailure = serde_json::from_str("\"SERVICE-NOT-AVAILABLE\"").unwrap();
        assert_eq!(parsed, LookupFailure::ServiceNotAvailable);
    }

    #[test]
    fn test_invalid_config_display() {
        let error = ConfigError::invalid("young_premium", "must be greater than zero");
        let display = format!("{}", error);
        assert!(display.contains("young_premium"));
        assert!(display.contains("greater than zero"));
    }

    #[test]
    fn test_errors_are_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<LookupFailure>();
        assert_sync::<LookupFailure>();
        assert_send::<ConfigError>();
        assert_sync::<ConfigError>();
    }
}
