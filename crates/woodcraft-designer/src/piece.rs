//! Placed pieces and partial piece updates.
//!
//! A [`PlacedPiece`] is one board in the scene. It refers to its catalog
//! profile through a shared pointer, so the profile data is never copied or
//! mutated per piece. All scene values are in inches and radians.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use std::sync::Arc;
use woodcraft_core::{Color, CoreError, LumberProfile, PieceId};

/// World axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "X"),
            Axis::Y => write!(f, "Y"),
            Axis::Z => write!(f, "Z"),
        }
    }
}

/// Three-component vector, serialized as a plain `[x, y, z]` array.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    pub const ONE: Vec3 = Vec3::new(1.0, 1.0, 1.0);

    /// Creates a new vector.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// True when every component is finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Component along `axis`.
    pub fn get(&self, axis: Axis) -> f64 {
        self.to_array()[axis.index()]
    }

    /// Copy with the component along `axis` replaced.
    pub fn with(self, axis: Axis, value: f64) -> Self {
        let mut values = self.to_array();
        values[axis.index()] = value;
        values.into()
    }

    /// Apply `f` to every component.
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }

    /// Component-wise product.
    pub fn component_mul(self, other: Vec3) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    pub fn to_vector(self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(v: Vec3) -> Self {
        v.to_array()
    }
}

impl From<Vector3<f64>> for Vec3 {
    fn from(v: Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}

/// A board placed in the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedPiece {
    pub id: PieceId,
    pub profile: Arc<LumberProfile>,
    /// Center of the board, inches
    pub position: Vec3,
    /// Independent X/Y/Z angles in radians, composed in XYZ order
    pub rotation: Vec3,
    pub scale: Vec3,
    pub color: Color,
    /// Overrides the profile's stock length when set
    pub custom_length: Option<f64>,
}

impl PlacedPiece {
    /// Creates a piece for `profile` at `position` with the profile's defaults.
    pub fn new(profile: Arc<LumberProfile>, position: Vec3) -> Self {
        Self {
            id: PieceId::new(),
            color: profile.color.clone(),
            custom_length: Some(profile.default_length),
            profile,
            position,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    /// Resting position on the ground plane: `(0, actual_height / 2, 0)`.
    pub fn default_position(profile: &LumberProfile) -> Vec3 {
        Vec3::new(0.0, profile.actual_height / 2.0, 0.0)
    }

    /// Length used for geometry and the cut list.
    ///
    /// An override that is not a positive finite number falls back to the
    /// profile's stock length.
    pub fn effective_length(&self) -> f64 {
        self.custom_length
            .filter(|len| len.is_finite() && *len > 0.0)
            .unwrap_or(self.profile.default_length)
    }

    /// Copy of this piece with a fresh id, moved by `offset`.
    pub fn duplicate(&self, offset: Vec3) -> Self {
        Self {
            id: PieceId::new(),
            position: self.position + offset,
            ..self.clone()
        }
    }
}

/// A partial update for [`PlacedPiece`]: only the fields set are replaced.
///
/// `custom_length` is doubly optional: `Some(None)` clears the override.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PiecePatch {
    pub position: Option<Vec3>,
    pub rotation: Option<Vec3>,
    pub scale: Option<Vec3>,
    pub color: Option<Color>,
    pub custom_length: Option<Option<f64>>,
}

impl PiecePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(mut self, position: Vec3) -> Self {
        self.position = Some(position);
        self
    }

    pub fn rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = Some(rotation);
        self
    }

    pub fn scale(mut self, scale: Vec3) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn custom_length(mut self, length: f64) -> Self {
        self.custom_length = Some(Some(length));
        self
    }

    pub fn clear_custom_length(mut self) -> Self {
        self.custom_length = Some(None);
        self
    }

    /// True when the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.position.is_none()
            && self.rotation.is_none()
            && self.scale.is_none()
            && self.color.is_none()
            && self.custom_length.is_none()
    }

    /// Check every numeric field. A patch is applied whole or not at all.
    pub fn validate(&self) -> Result<(), CoreError> {
        for (field, value) in [
            ("position", self.position),
            ("rotation", self.rotation),
            ("scale", self.scale),
        ] {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(CoreError::NonFinite {
                        field: field.to_string(),
                    });
                }
            }
        }

        if let Some(scale) = self.scale {
            if let Some(bad) = scale.to_array().into_iter().find(|s| *s <= 0.0) {
                return Err(CoreError::NonPositive {
                    field: "scale".to_string(),
                    value: bad,
                });
            }
        }

        if let Some(Some(length)) = self.custom_length {
            if !length.is_finite() {
                return Err(CoreError::NonFinite {
                    field: "custom_length".to_string(),
                });
            }
            if length <= 0.0 {
                return Err(CoreError::NonPositive {
                    field: "custom_length".to_string(),
                    value: length,
                });
            }
        }

        Ok(())
    }

    /// Merge into `piece`. Callers validate first.
    pub(crate) fn apply_to(&self, piece: &mut PlacedPiece) {
        if let Some(position) = self.position {
            piece.position = position;
        }
        if let Some(rotation) = self.rotation {
            piece.rotation = rotation;
        }
        if let Some(scale) = self.scale {
            piece.scale = scale;
        }
        if let Some(color) = &self.color {
            piece.color = color.clone();
        }
        if let Some(length) = self.custom_length {
            piece.custom_length = length;
        }
    }
}
