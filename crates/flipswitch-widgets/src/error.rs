//! Error types for flipswitch widgets.

use thiserror::Error;

/// Errors returned by switch operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwitchError {
    /// A setter was given a value outside its valid range. The previous
    /// value is kept.
    #[error("invalid {name}: {value} ({reason})")]
    InvalidArgument {
        /// Name of the rejected setting.
        name: &'static str,
        /// The rejected value.
        value: i64,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// The switch was disposed and no longer accepts operations.
    #[error("switch has been disposed")]
    Disposed,

    /// A configuration document could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result alias for switch operations.
pub type Result<T> = std::result::Result<T, SwitchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = SwitchError::InvalidArgument {
            name: "animation_step",
            value: 0,
            reason: "must be greater than zero",
        };
        assert_eq!(
            err.to_string(),
            "invalid animation_step: 0 (must be greater than zero)"
        );
    }

    #[test]
    fn test_disposed_display() {
        assert_eq!(SwitchError::Disposed.to_string(), "switch has been disposed");
    }

    #[test]
    fn test_config_display() {
        let err = SwitchError::Config("expected a boolean".into());
        assert!(err.to_string().starts_with("configuration error"));
    }
}
