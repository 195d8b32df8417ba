//! Property-panel edits for project state.
//!
//! Text typed into the panel is parsed here. Bad input never reaches the
//! store as NaN: positions and angles fall back to zero, lengths to the
//! profile's stock length.

use woodcraft_core::{parse_length, Color, PieceId};

use super::ProjectState;
use crate::piece::{Axis, PiecePatch};

impl ProjectState {
    /// Set one position axis from text in the current display unit.
    pub fn edit_position_axis(&mut self, id: PieceId, axis: Axis, text: &str) -> bool {
        let Some(piece) = self.store.get(id) else {
            return false;
        };
        let value = parse_length(text, self.unit).unwrap_or_else(|e| {
            tracing::debug!("Position {} input {:?} rejected: {}", axis, text, e);
            0.0
        });
        let position = piece.position.with(axis, value);
        self.update_piece(id, &PiecePatch::new().position(position))
    }

    /// Set one rotation axis from text in degrees.
    pub fn edit_rotation_axis_degrees(&mut self, id: PieceId, axis: Axis, text: &str) -> bool {
        let Some(piece) = self.store.get(id) else {
            return false;
        };
        let degrees = text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|d| d.is_finite())
            .unwrap_or(0.0);
        let rotation = piece.rotation.with(axis, degrees.to_radians());
        self.update_piece(id, &PiecePatch::new().rotation(rotation))
    }

    /// Set the length override from text in the current display unit.
    ///
    /// Unparseable or non-positive input uses the profile's stock length.
    pub fn edit_length(&mut self, id: PieceId, text: &str) -> bool {
        let Some(piece) = self.store.get(id) else {
            return false;
        };
        let length = parse_length(text, self.unit)
            .ok()
            .filter(|len| *len > 0.0)
            .unwrap_or(piece.profile.default_length);
        self.update_piece(id, &PiecePatch::new().custom_length(length))
    }

    /// Set the piece color from `#rrggbb` text; invalid colors are ignored.
    pub fn edit_color(&mut self, id: PieceId, text: &str) -> bool {
        match Color::parse(text) {
            Ok(color) => self.update_piece(id, &PiecePatch::new().color(color)),
            Err(e) => {
                tracing::warn!("Ignoring color edit: {}", e);
                false
            }
        }
    }
}
