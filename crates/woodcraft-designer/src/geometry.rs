//! # Piece Geometry
//!
//! World-space geometry of placed boards.
//!
//! A board is a box of `(effective length, actual height, actual width)`
//! along its local X/Y/Z axes. Its three stored angles are composed in XYZ
//! order, i.e. the world matrix is `Rx · Ry · Rz`, and points are
//! transformed by scale, then rotation, then translation.

use nalgebra::{Rotation3, Vector3};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::piece::{PlacedPiece, Vec3};

/// One of the six box faces, named by its local outward normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    /// +X, the far end of the board
    PosX,
    /// -X, the near end of the board
    NegX,
    /// +Y, top
    PosY,
    /// -Y, bottom
    NegY,
    /// +Z, one edge
    PosZ,
    /// -Z, the opposite edge
    NegZ,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::PosX,
        Face::NegX,
        Face::PosY,
        Face::NegY,
        Face::PosZ,
        Face::NegZ,
    ];

    /// Outward unit normal in the piece's local frame.
    pub fn local_normal(&self) -> Vector3<f64> {
        match self {
            Face::PosX => Vector3::x(),
            Face::NegX => -Vector3::x(),
            Face::PosY => Vector3::y(),
            Face::NegY => -Vector3::y(),
            Face::PosZ => Vector3::z(),
            Face::NegZ => -Vector3::z(),
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Face::PosX => "+X",
            Face::NegX => "-X",
            Face::PosY => "+Y",
            Face::NegY => "-Y",
            Face::PosZ => "+Z",
            Face::NegZ => "-Z",
        };
        f.write_str(name)
    }
}

/// Rotation matrix for three independent angles composed in XYZ order.
pub fn rotation_matrix(rotation: Vec3) -> Rotation3<f64> {
    let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), rotation.x);
    let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), rotation.y);
    let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), rotation.z);
    rx * ry * rz
}

/// Unscaled box size: length, height, width.
pub fn base_dimensions(piece: &PlacedPiece) -> Vec3 {
    Vec3::new(
        piece.effective_length(),
        piece.profile.actual_height,
        piece.profile.actual_width,
    )
}

/// Box size with the piece's scale applied.
pub fn extents(piece: &PlacedPiece) -> Vec3 {
    base_dimensions(piece).component_mul(piece.scale)
}

/// Map a point in the piece's unscaled local frame to world space.
pub fn local_to_world(piece: &PlacedPiece, local: Vector3<f64>) -> Vec3 {
    let scaled = local.component_mul(&piece.scale.to_vector());
    let rotated = rotation_matrix(piece.rotation) * scaled;
    Vec3::from(rotated + piece.position.to_vector())
}

/// World-space center of one face.
pub fn world_face_center(piece: &PlacedPiece, face: Face) -> Vec3 {
    let half = base_dimensions(piece).to_vector() / 2.0;
    local_to_world(piece, face.local_normal().component_mul(&half))
}

/// World-space centers of all six faces, in [`Face::ALL`] order.
pub fn world_face_centers(piece: &PlacedPiece) -> [(Face, Vec3); 6] {
    Face::ALL.map(|face| (face, world_face_center(piece, face)))
}

/// Axis-aligned world bounds `(min, max)` of the rotated box.
pub fn world_bounds(piece: &PlacedPiece) -> (Vec3, Vec3) {
    let half = base_dimensions(piece).to_vector() / 2.0;
    let mut min = Vector3::repeat(f64::INFINITY);
    let mut max = Vector3::repeat(f64::NEG_INFINITY);

    for sx in [-1.0, 1.0] {
        for sy in [-1.0, 1.0] {
            for sz in [-1.0, 1.0] {
                let corner = local_to_world(
                    piece,
                    Vector3::new(sx * half.x, sy * half.y, sz * half.z),
                )
                .to_vector();
                min = min.inf(&corner);
                max = max.sup(&corner);
            }
        }
    }

    (Vec3::from(min), Vec3::from(max))
}
