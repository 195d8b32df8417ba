//! Cut-list aggregation.
//!
//! Groups placed pieces by (profile id, effective length) into shopping-list
//! rows. Orientation and position are not part of the key. Rows are sorted
//! by display name with a stable, case-sensitive ordinal comparison, so rows
//! with equal names keep first-occurrence order, and member ids follow piece
//! insertion order.

use serde::Serialize;
use std::collections::HashMap;
use woodcraft_core::{format_length, DisplayUnit, PieceId, ProfileId};

use crate::piece::PlacedPiece;

/// One row of the cut list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CutListItem {
    pub profile_id: ProfileId,
    /// Profile display name
    pub lumber_type: String,
    pub quantity: usize,
    /// Effective length, inches
    pub length: f64,
    /// Member piece ids in insertion order
    pub pieces: Vec<PieceId>,
}

impl CutListItem {
    /// Combined length of all pieces in this row, inches.
    pub fn total_length(&self) -> f64 {
        self.length * self.quantity as f64
    }
}

/// Reduce `pieces` to cut-list rows.
pub fn compute_cut_list(pieces: &[PlacedPiece]) -> Vec<CutListItem> {
    let mut index: HashMap<(&str, u64), usize> = HashMap::new();
    let mut items: Vec<CutListItem> = Vec::new();

    for piece in pieces {
        let length = piece.effective_length();
        // +0.0 folds -0.0 into 0.0 so both share a key
        let key = (piece.profile.id.as_str(), (length + 0.0).to_bits());

        match index.get(&key) {
            Some(&i) => {
                let item = &mut items[i];
                item.quantity += 1;
                item.pieces.push(piece.id);
            }
            None => {
                index.insert(key, items.len());
                items.push(CutListItem {
                    profile_id: piece.profile.id.clone(),
                    lumber_type: piece.profile.name.clone(),
                    quantity: 1,
                    length,
                    pieces: vec![piece.id],
                });
            }
        }
    }

    items.sort_by(|a, b| a.lumber_type.cmp(&b.lumber_type));
    items
}

/// Totals over a cut list.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CutListSummary {
    pub rows: usize,
    pub total_pieces: usize,
    /// Sum of all piece lengths, inches
    pub total_length: f64,
}

impl CutListSummary {
    pub fn from_items(items: &[CutListItem]) -> Self {
        Self {
            rows: items.len(),
            total_pieces: items.iter().map(|i| i.quantity).sum(),
            total_length: items.iter().map(CutListItem::total_length).sum(),
        }
    }
}

/// Plain-text table of the cut list for terminal output.
pub fn render_cut_list(items: &[CutListItem], unit: DisplayUnit) -> String {
    let mut out = String::new();
    let name_width = items
        .iter()
        .map(|i| i.lumber_type.chars().count())
        .max()
        .unwrap_or(0)
        .max("Lumber".len());

    out.push_str(&format!(
        "{:<name_width$}  {:>4}  {:>10}\n",
        "Lumber",
        "Qty",
        format!("Length ({})", unit.label()),
    ));
    for item in items {
        out.push_str(&format!(
            "{:<name_width$}  {:>4}  {:>10}\n",
            item.lumber_type,
            item.quantity,
            format_length(item.length, unit),
        ));
    }

    let summary = CutListSummary::from_items(items);
    out.push_str(&format!(
        "{} pieces, {} {} total\n",
        summary.total_pieces,
        format_length(summary.total_length, unit),
        unit.label()
    ));
    out
}
