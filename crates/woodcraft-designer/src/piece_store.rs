//! Ordered storage for placed pieces.
//!
//! Iteration follows insertion order. The revision counter increases on
//! every change to the list or to a piece, so derived views (snap
//! candidates, cut lists) can tell when they are stale.

use crate::piece::PlacedPiece;
use woodcraft_core::PieceId;

/// Ordered collection of [`PlacedPiece`]s.
#[derive(Debug, Clone, Default)]
pub struct PieceStore {
    pieces: Vec<PlacedPiece>,
    revision: u64,
}

impl PieceStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pieces.
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Pieces in insertion order.
    pub fn as_slice(&self) -> &[PlacedPiece] {
        &self.pieces
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlacedPiece> {
        self.pieces.iter()
    }

    /// Gets a piece by id.
    pub fn get(&self, id: PieceId) -> Option<&PlacedPiece> {
        self.pieces.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: PieceId) -> bool {
        self.get(id).is_some()
    }

    /// Counter that changes whenever the stored pieces change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Appends a piece.
    pub(crate) fn push(&mut self, piece: PlacedPiece) {
        self.pieces.push(piece);
        self.bump();
    }

    /// Removes a piece, keeping the order of the rest.
    pub(crate) fn remove(&mut self, id: PieceId) -> Option<PlacedPiece> {
        let index = self.pieces.iter().position(|p| p.id == id)?;
        let removed = self.pieces.remove(index);
        self.bump();
        Some(removed)
    }

    /// Mutates a piece in place. The revision moves only when the piece exists.
    pub(crate) fn modify<R>(
        &mut self,
        id: PieceId,
        f: impl FnOnce(&mut PlacedPiece) -> R,
    ) -> Option<R> {
        let piece = self.pieces.iter_mut().find(|p| p.id == id)?;
        let result = f(piece);
        self.bump();
        Some(result)
    }

    /// Swaps in a whole new list in one step.
    pub(crate) fn replace_all(&mut self, pieces: Vec<PlacedPiece>) {
        self.pieces = pieces;
        self.bump();
    }

    pub(crate) fn clear(&mut self) {
        self.pieces.clear();
        self.bump();
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<'a> IntoIterator for &'a PieceStore {
    type Item = &'a PlacedPiece;
    type IntoIter = std::slice::Iter<'a, PlacedPiece>;

    fn into_iter(self) -> Self::IntoIter {
        self.pieces.iter()
    }
}
