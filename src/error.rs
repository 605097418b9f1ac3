//! Error types for the CLT Shift Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while simulating shifts or
//! loading jurisdiction configuration.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::ShiftSimulationResult;

/// The main error type for the CLT Shift Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use clt_shift_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rules.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rules.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Work regime code was not found in the configuration.
    #[error("Work regime not found: {code}")]
    RegimeNotFound {
        /// The regime code that was not found.
        code: String,
    },

    /// An input value was malformed or outside its domain.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The input field that was invalid.
        field: String,
        /// A description of what made the input invalid.
        message: String,
    },

    /// The forward simulation hit its safety cap before reaching the target.
    ///
    /// The truncated simulation is carried along so callers can inspect it,
    /// but it must not be presented as a normal exit time.
    #[error(
        "Target of {target_net_minutes} net minutes unreachable within {real_minutes} simulated minutes (reached {reached_minutes})"
    )]
    UnreachableTarget {
        /// The requested net minutes.
        target_net_minutes: Decimal,
        /// The effective minutes accumulated when the simulation stopped.
        reached_minutes: Decimal,
        /// The real minutes simulated when the simulation stopped.
        real_minutes: u32,
        /// The degenerate, truncated simulation result.
        truncated: Box<ShiftSimulationResult>,
    },
}

impl EngineError {
    /// Shorthand for building an [`EngineError::InvalidInput`].
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/rules.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/rules.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_regime_not_found_displays_code() {
        let error = EngineError::RegimeNotFound {
            code: "four_day".to_string(),
        };
        assert_eq!(error.to_string(), "Work regime not found: four_day");
    }

    #[test]
    fn test_invalid_input_displays_field_and_message() {
        let error = EngineError::invalid_input("target_net_minutes", "must not be negative");
        assert_eq!(
            error.to_string(),
            "Invalid input 'target_net_minutes': must not be negative"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_regime_not_found() -> EngineResult<()> {
            Err(EngineError::RegimeNotFound {
                code: "unknown".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_regime_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
