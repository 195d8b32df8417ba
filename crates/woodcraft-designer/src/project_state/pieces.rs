//! Piece operations (add, remove, update, select, duplicate, clear) for project state.

use std::sync::Arc;

use woodcraft_core::{CoreError, LumberProfile, PieceId, ProjectEvent};

use super::ProjectState;
use crate::piece::{PiecePatch, PlacedPiece, Vec3};

impl ProjectState {
    /// Place a new piece of `profile`.
    ///
    /// Without a position (or with a non-finite one) the piece rests on the
    /// ground plane at the origin.
    pub fn add_piece(&mut self, profile: Arc<LumberProfile>, position: Option<Vec3>) -> PieceId {
        let default = PlacedPiece::default_position(&profile);
        let position = match position {
            Some(p) if p.is_finite() => p,
            Some(p) => {
                tracing::warn!("Ignoring non-finite drop position {}", p);
                default
            }
            None => default,
        };

        let piece = PlacedPiece::new(profile, position);
        let id = piece.id;
        tracing::debug!("Adding {} piece {} at {}", piece.profile.id, id, position);
        self.store.push(piece);
        self.publish(ProjectEvent::PieceAdded { id });
        id
    }

    /// Place a new piece by catalog id.
    pub fn add_piece_by_id(
        &mut self,
        profile_id: &str,
        position: Option<Vec3>,
    ) -> Result<PieceId, CoreError> {
        let profile = self.catalog.require(profile_id)?;
        Ok(self.add_piece(profile, position))
    }

    /// Remove a piece; clears the selection if it pointed at it.
    ///
    /// Returns false when no piece has this id.
    pub fn remove_piece(&mut self, id: PieceId) -> bool {
        if self.store.remove(id).is_none() {
            tracing::trace!("remove_piece: no piece {}", id);
            return false;
        }

        let was_selected = self.selected == Some(id);
        if was_selected {
            self.selected = None;
        }
        tracing::debug!("Removed piece {}", id);
        self.publish(ProjectEvent::PieceRemoved { id, was_selected });
        true
    }

    /// Merge `patch` into a piece, replacing only the fields it sets.
    ///
    /// The patch is rejected whole when any value is non-finite or a scale
    /// or length is not positive. Returns true when the patch was applied.
    pub fn update_piece(&mut self, id: PieceId, patch: &PiecePatch) -> bool {
        if patch.is_empty() {
            return false;
        }
        if let Err(e) = patch.validate() {
            tracing::warn!("Ignoring update of piece {}: {}", id, e);
            return false;
        }
        if self.store.modify(id, |piece| patch.apply_to(piece)).is_none() {
            tracing::trace!("update_piece: no piece {}", id);
            return false;
        }

        tracing::debug!("Updated piece {}", id);
        self.publish(ProjectEvent::PieceUpdated { id });
        true
    }

    /// Set or clear the selection.
    ///
    /// An id that does not resolve clears the selection instead, so the
    /// selection never dangles.
    pub fn select_piece(&mut self, id: Option<PieceId>) {
        let resolved = match id {
            Some(id) if self.store.contains(id) => Some(id),
            Some(id) => {
                tracing::debug!("select_piece: no piece {}, clearing selection", id);
                None
            }
            None => None,
        };

        if resolved == self.selected {
            return;
        }
        self.selected = resolved;
        self.publish(ProjectEvent::SelectionChanged { selected: resolved });
    }

    /// Copy a piece with a fresh id, offset by the duplicate offset.
    ///
    /// The selection stays on the original.
    pub fn duplicate_piece(&mut self, id: PieceId) -> Option<PieceId> {
        let Some(source) = self.store.get(id) else {
            tracing::trace!("duplicate_piece: no piece {}", id);
            return None;
        };

        let copy = source.duplicate(self.defaults.duplicate_offset);
        let new_id = copy.id;
        tracing::debug!("Duplicated piece {} as {}", id, new_id);
        self.store.push(copy);
        self.publish(ProjectEvent::PieceAdded { id: new_id });
        Some(new_id)
    }

    /// Remove every piece, clear the selection and reset the name.
    pub fn clear_project(&mut self) {
        self.store.clear();
        self.selected = None;
        self.name = self.defaults.name.clone();
        tracing::debug!("Project cleared");
        self.publish(ProjectEvent::ProjectCleared);
    }

    /// Swap in a whole project in one step.
    pub(crate) fn replace_project(&mut self, name: String, pieces: Vec<PlacedPiece>) {
        let piece_count = pieces.len();
        self.store.replace_all(pieces);
        self.selected = None;
        self.name = name;
        tracing::debug!("Loaded project {:?} with {} pieces", self.name, piece_count);
        self.publish(ProjectEvent::ProjectLoaded {
            name: self.name.clone(),
            piece_count,
        });
    }
}
