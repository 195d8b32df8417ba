//! Data models shared across the workspace
//!
//! This module provides:
//! - Piece identifiers
//! - Display colors
//! - The lumber catalog (profiles with nominal and actual dimensions)

pub mod lumber;

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identifier of a placed piece
///
/// Generated from a random v4 UUID at creation; never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PieceId(Uuid);

impl PieceId {
    /// Create a fresh unique id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID, e.g. one read back from a project file
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// The underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for PieceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PieceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Display color as a `#rrggbb` hex triplet
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    /// Parse a `#rrggbb` color; the stored form is lowercase.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        let hex = text
            .strip_prefix('#')
            .ok_or_else(|| CoreError::InvalidColor(text.to_string()))?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(CoreError::InvalidColor(text.to_string()));
        }
        Ok(Self(format!("#{}", hex.to_ascii_lowercase())))
    }

    /// Build from a hex literal known to be well formed (catalog data).
    pub(crate) fn from_trusted(hex: &str) -> Self {
        Self(hex.to_ascii_lowercase())
    }

    /// Red, green and blue components
    pub fn rgb(&self) -> (u8, u8, u8) {
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&self.0[range], 16).unwrap_or_default()
        };
        (channel(1..3), channel(3..5), channel(5..7))
    }

    /// The hex text, e.g. `#d4a574`
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Color {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_ids_are_unique() {
        let a = PieceId::new();
        let b = PieceId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_piece_id_round_trips_through_text() {
        let id = PieceId::new();
        let parsed: PieceId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_color_parse() {
        let color = Color::parse("#D4A574").unwrap();
        assert_eq!(color.as_str(), "#d4a574");
        assert_eq!(color.rgb(), (0xd4, 0xa5, 0x74));

        assert!(Color::parse("D4A574").is_err());
        assert!(Color::parse("#D4A57").is_err());
        assert!(Color::parse("#GGGGGG").is_err());
    }

    #[test]
    fn test_color_serde_rejects_garbage() {
        let ok: Color = serde_json::from_str("\"#5D4E37\"").unwrap();
        assert_eq!(ok.to_string(), "#5d4e37");
        assert!(serde_json::from_str::<Color>("\"walnut\"").is_err());
    }
}
