//! Unit conversion utilities
//!
//! Stored values are always inches. The display unit only changes how
//! lengths are presented and how typed text is interpreted.
//! Supports decimal and fractional inch parsing and formatting.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const INCHES_PER_FOOT: f64 = 12.0;
const CM_PER_INCH: f64 = 2.54;

/// Display unit preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DisplayUnit {
    /// Inches (storage unit)
    #[default]
    #[serde(rename = "inches")]
    Inches,
    /// Feet
    #[serde(rename = "feet")]
    Feet,
    /// Centimeters
    #[serde(rename = "cm")]
    Centimeters,
}

impl DisplayUnit {
    /// All units in menu order.
    pub const ALL: [DisplayUnit; 3] = [Self::Inches, Self::Feet, Self::Centimeters];

    /// Short label used next to values ("in", "ft", "cm")
    pub fn label(&self) -> &'static str {
        match self {
            Self::Inches => "in",
            Self::Feet => "ft",
            Self::Centimeters => "cm",
        }
    }

    /// Converts a stored inch value into this unit.
    pub fn from_inches(&self, inches: f64) -> f64 {
        match self {
            Self::Inches => inches,
            Self::Feet => inches / INCHES_PER_FOOT,
            Self::Centimeters => inches * CM_PER_INCH,
        }
    }

    /// Converts a value in this unit back to inches.
    pub fn to_inches(&self, value: f64) -> f64 {
        match self {
            Self::Inches => value,
            Self::Feet => value * INCHES_PER_FOOT,
            Self::Centimeters => value / CM_PER_INCH,
        }
    }
}

impl fmt::Display for DisplayUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inches => write!(f, "inches"),
            Self::Feet => write!(f, "feet"),
            Self::Centimeters => write!(f, "cm"),
        }
    }
}

impl FromStr for DisplayUnit {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "inches" | "inch" | "in" | "\"" => Ok(Self::Inches),
            "feet" | "foot" | "ft" | "'" => Ok(Self::Feet),
            "cm" | "centimeters" | "centimetres" => Ok(Self::Centimeters),
            _ => Err(format!("Unknown unit: {}", s)),
        }
    }
}

/// Format a stored length for display
///
/// * `inches` - Value in inches
/// * `unit` - Target display unit
pub fn format_length(inches: f64, unit: DisplayUnit) -> String {
    format!("{:.2}", unit.from_inches(inches))
}

/// Format a stored length with its unit label, e.g. `96.00 in`
pub fn format_length_with_label(inches: f64, unit: DisplayUnit) -> String {
    format!("{} {}", format_length(inches, unit), unit.label())
}

/// Parse typed length text to inches
///
/// Inches and feet accept whole/fraction combinations such as `1 1/2`.
/// Empty input is zero. NaN and infinities are rejected even though
/// Rust's float parser accepts them.
///
/// * `input` - String to parse
/// * `unit` - Unit the user is typing in
pub fn parse_length(input: &str, unit: DisplayUnit) -> Result<f64> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(0.0);
    }

    let value = match unit {
        DisplayUnit::Centimeters => parse_decimal(input)?,
        DisplayUnit::Inches | DisplayUnit::Feet => {
            if input.contains('/') {
                parse_mixed_fraction(input)?
            } else {
                parse_decimal(input)?
            }
        }
    };

    if !value.is_finite() {
        return Err(CoreError::NonFinite {
            field: "length".to_string(),
        });
    }

    Ok(unit.to_inches(value))
}

fn invalid(input: &str, reason: &str) -> CoreError {
    CoreError::InvalidNumber {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_decimal(input: &str) -> Result<f64> {
    input
        .parse::<f64>()
        .map_err(|e| invalid(input, &e.to_string()))
}

fn parse_mixed_fraction(input: &str) -> Result<f64> {
    let negative = input.starts_with('-');
    let mut total = 0.0;

    for part in input.trim_start_matches('-').split_whitespace() {
        if part.contains('/') {
            let frac_parts: Vec<&str> = part.split('/').collect();
            if frac_parts.len() != 2 {
                return Err(invalid(input, "Invalid fraction format"));
            }
            let num = frac_parts[0]
                .parse::<f64>()
                .map_err(|_| invalid(input, "Invalid numerator"))?;
            let den = frac_parts[1]
                .parse::<f64>()
                .map_err(|_| invalid(input, "Invalid denominator"))?;
            if den == 0.0 {
                return Err(invalid(input, "Division by zero"));
            }
            total += num / den;
        } else {
            total += part
                .parse::<f64>()
                .map_err(|_| invalid(input, "Invalid number part"))?;
        }
    }

    Ok(if negative { -total } else { total })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inch_decimal() {
        assert_eq!(format_length(96.0, DisplayUnit::Inches), "96.00");
        assert_eq!(parse_length("10.5", DisplayUnit::Inches).unwrap(), 10.5);
    }

    #[test]
    fn test_inch_fraction() {
        assert_eq!(parse_length("1 1/2", DisplayUnit::Inches).unwrap(), 1.5);
        assert_eq!(parse_length("5 1/8", DisplayUnit::Inches).unwrap(), 5.125);
        assert_eq!(parse_length("3/4", DisplayUnit::Inches).unwrap(), 0.75);
        assert_eq!(parse_length("-1/2", DisplayUnit::Inches).unwrap(), -0.5);
    }

    #[test]
    fn test_feet_and_cm() {
        assert_eq!(parse_length("8", DisplayUnit::Feet).unwrap(), 96.0);
        assert_eq!(parse_length("2 1/2", DisplayUnit::Feet).unwrap(), 30.0);
        assert_eq!(parse_length("2.54", DisplayUnit::Centimeters).unwrap(), 1.0);
        assert_eq!(format_length(96.0, DisplayUnit::Feet), "8.00");
        assert_eq!(format_length(10.0, DisplayUnit::Centimeters), "25.40");
        assert_eq!(format_length_with_label(96.0, DisplayUnit::Inches), "96.00 in");
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(parse_length("", DisplayUnit::Inches).unwrap(), 0.0);
        assert_eq!(parse_length("  10.5  ", DisplayUnit::Inches).unwrap(), 10.5);
        assert_eq!(parse_length("  1  1/2  ", DisplayUnit::Inches).unwrap(), 1.5);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(parse_length("abc", DisplayUnit::Inches).is_err());
        assert!(parse_length("1/0", DisplayUnit::Inches).is_err());
        assert!(parse_length("1/2/3", DisplayUnit::Inches).is_err());
        assert!(parse_length("1/2", DisplayUnit::Centimeters).is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(
            parse_length("NaN", DisplayUnit::Inches),
            Err(CoreError::NonFinite { .. })
        ));
        assert!(matches!(
            parse_length("inf", DisplayUnit::Feet),
            Err(CoreError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_unit_from_str() {
        assert_eq!("in".parse::<DisplayUnit>().unwrap(), DisplayUnit::Inches);
        assert_eq!("Feet".parse::<DisplayUnit>().unwrap(), DisplayUnit::Feet);
        assert_eq!("cm".parse::<DisplayUnit>().unwrap(), DisplayUnit::Centimeters);
        assert!("furlong".parse::<DisplayUnit>().is_err());
    }

    #[test]
    fn test_unit_serde_names() {
        let json = serde_json::to_string(&DisplayUnit::Centimeters).unwrap();
        assert_eq!(json, "\"cm\"");
        let unit: DisplayUnit = serde_json::from_str("\"feet\"").unwrap();
        assert_eq!(unit, DisplayUnit::Feet);
    }
}
