//! # Snap Engine
//!
//! Grid quantization of proposed transforms and alignment candidates for
//! the snap overlay.
//!
//! Quantization is pure and idempotent. Candidate computation is a read-only
//! derivation of the piece list, the selection and the snap toggle;
//! [`SnapCandidateCache`] memoises it between frames.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use woodcraft_core::PieceId;
use woodcraft_settings::Config;

use crate::geometry::{world_face_centers, Face};
use crate::piece::{PlacedPiece, Vec3};
use crate::piece_store::PieceStore;

/// Extra reach added to the longer piece when gathering candidates, inches.
pub const DEFAULT_SNAP_DISTANCE: f64 = 5.0;
/// Rotation snap increment: 15 degrees.
pub const ROTATION_STEP: f64 = PI / 12.0;
/// Scale snap increment.
pub const SCALE_STEP: f64 = 0.1;

/// Round `value` to the nearest multiple of `step`, halves rounding up.
///
/// Values that are not finite, and steps that are not positive and finite,
/// pass through unchanged. Negative zero is normalised to zero.
pub fn quantize(value: f64, step: f64) -> f64 {
    if !value.is_finite() || !step.is_finite() || step <= 0.0 {
        return value;
    }
    (value / step + 0.5).floor() * step + 0.0
}

/// Quantize each component independently.
pub fn quantize_vec(v: Vec3, step: f64) -> Vec3 {
    v.map(|c| quantize(c, step))
}

/// Snap parameters in effect for a project.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapSettings {
    /// Grid cell size, inches
    pub grid_size: f64,
    pub enabled: bool,
    /// Radians
    pub rotation_step: f64,
    pub scale_step: f64,
    pub candidate_distance: f64,
}

impl Default for SnapSettings {
    fn default() -> Self {
        Self {
            grid_size: 1.0,
            enabled: true,
            rotation_step: ROTATION_STEP,
            scale_step: SCALE_STEP,
            candidate_distance: DEFAULT_SNAP_DISTANCE,
        }
    }
}

impl SnapSettings {
    /// Build from the editor configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            grid_size: config.grid.size,
            enabled: config.grid.snap_enabled,
            rotation_step: config.rotation_step_radians(),
            scale_step: config.snap.scale_step,
            candidate_distance: config.snap.candidate_distance,
        }
    }

    /// Grid-quantize a proposed position; unchanged when snapping is off.
    pub fn snap_position(&self, position: Vec3) -> Vec3 {
        if !self.enabled {
            return position;
        }
        quantize_vec(position, self.grid_size)
    }

    /// Quantize each angle to the rotation step; unchanged when snapping is off.
    pub fn snap_rotation(&self, rotation: Vec3) -> Vec3 {
        if !self.enabled {
            return rotation;
        }
        quantize_vec(rotation, self.rotation_step)
    }

    /// Quantize scale to the scale step, never below one step.
    pub fn snap_scale(&self, scale: Vec3) -> Vec3 {
        if !self.enabled {
            return scale;
        }
        let step = self.scale_step;
        scale.map(|s| {
            let q = quantize(s, step);
            if q.is_finite() && step.is_finite() && step > 0.0 {
                q.max(step)
            } else {
                q
            }
        })
    }
}

/// An alignment point offered while a piece is selected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapCandidate {
    /// World-space face center, inches
    pub point: Vec3,
    /// Piece the face belongs to
    pub source: PieceId,
    pub face: Face,
}

/// Alignment candidates with the default 5" reach.
pub fn compute_snap_candidates(
    pieces: &[PlacedPiece],
    selected: Option<PieceId>,
    enabled: bool,
) -> Vec<SnapCandidate> {
    compute_snap_candidates_within(pieces, selected, enabled, DEFAULT_SNAP_DISTANCE)
}

/// Alignment candidates: the six world face centers of every other piece
/// that is near the selected one.
///
/// Proximity is tested per axis on piece centers: every axis must be
/// closer than `max(selected length, other length) + snap_distance`.
/// Empty when snapping is off or the selection does not resolve.
pub fn compute_snap_candidates_within(
    pieces: &[PlacedPiece],
    selected: Option<PieceId>,
    enabled: bool,
    snap_distance: f64,
) -> Vec<SnapCandidate> {
    if !enabled {
        return Vec::new();
    }
    let Some(selected) = selected.and_then(|id| pieces.iter().find(|p| p.id == id)) else {
        return Vec::new();
    };

    let selected_length = selected.effective_length();
    let mut candidates = Vec::new();

    for other in pieces.iter().filter(|p| p.id != selected.id) {
        let threshold = selected_length.max(other.effective_length()) + snap_distance;
        let delta = selected.position - other.position;
        let near = delta.to_array().iter().all(|d| d.abs() < threshold);
        if !near {
            continue;
        }
        candidates.extend(
            world_face_centers(other)
                .into_iter()
                .map(|(face, point)| SnapCandidate {
                    point,
                    source: other.id,
                    face,
                }),
        );
    }

    candidates
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct CacheKey {
    revision: u64,
    selected: Option<PieceId>,
    enabled: bool,
    distance_bits: u64,
}

/// Memoised snap candidates keyed on (store revision, selection, snap toggle).
#[derive(Debug, Clone, Default)]
pub struct SnapCandidateCache {
    key: Option<CacheKey>,
    candidates: Vec<SnapCandidate>,
    recomputations: usize,
}

impl SnapCandidateCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Candidates for the current inputs, recomputed only when a key part changed.
    pub fn get(
        &mut self,
        store: &PieceStore,
        selected: Option<PieceId>,
        snap: &SnapSettings,
    ) -> &[SnapCandidate] {
        let key = CacheKey {
            revision: store.revision(),
            selected,
            enabled: snap.enabled,
            distance_bits: snap.candidate_distance.to_bits(),
        };
        if self.key != Some(key) {
            self.candidates = compute_snap_candidates_within(
                store.as_slice(),
                selected,
                snap.enabled,
                snap.candidate_distance,
            );
            self.key = Some(key);
            self.recomputations += 1;
            tracing::trace!("Recomputed {} snap candidates", self.candidates.len());
        }
        &self.candidates
    }

    /// Drop the cached result.
    pub fn invalidate(&mut self) {
        self.key = None;
        self.candidates.clear();
    }

    /// How many times the candidates were actually computed.
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }
}
