//! Error handling for WoodCraft
//!
//! Scene operations are total and never fail; these errors only surface at
//! the edges where text or external data enters the system:
//! - Catalog lookups by profile id
//! - Numeric text entry from property editors
//! - Color values
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// No catalog profile with the given id
    #[error("Unknown lumber profile: {id}")]
    UnknownProfile {
        /// The requested profile id.
        id: String,
    },

    /// Text could not be parsed as a number
    #[error("Invalid number '{input}': {reason}")]
    InvalidNumber {
        /// The rejected input text.
        input: String,
        /// Why the text was rejected.
        reason: String,
    },

    /// A value parsed but is NaN or infinite
    #[error("Value for {field} must be finite")]
    NonFinite {
        /// The field the value was meant for.
        field: String,
    },

    /// A value that must be strictly positive was zero or negative
    #[error("Value for {field} must be positive, got {value}")]
    NonPositive {
        /// The field the value was meant for.
        field: String,
        /// The rejected value.
        value: f64,
    },

    /// Color text is not a `#rrggbb` hex triplet
    #[error("Invalid color '{0}', expected #rrggbb")]
    InvalidColor(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_display() {
        let err = CoreError::UnknownProfile {
            id: "3x5".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown lumber profile: 3x5");

        let err = CoreError::NonPositive {
            field: "grid_size".to_string(),
            value: -1.0,
        };
        assert_eq!(err.to_string(), "Value for grid_size must be positive, got -1");

        let err = CoreError::InvalidColor("red".to_string());
        assert_eq!(err.to_string(), "Invalid color 'red', expected #rrggbb");
    }
}
