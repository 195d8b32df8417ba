//! Serialization and deserialization for project files.
//!
//! Implements export/import of `.woodcraft` project documents: JSON with
//! camelCase keys holding the project name, the pieces, an RFC 3339 export
//! timestamp and a schema version. Pieces reference their lumber profile by
//! id; the profile data itself is never written.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use woodcraft_core::{Color, CoreError, LumberCatalog, PieceId, ProfileId};

use crate::piece::{PiecePatch, PlacedPiece, Vec3};

/// Project file schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// File extension for project documents
pub const FILE_EXTENSION: &str = "woodcraft";

/// Errors while reading a project document.
#[derive(Error, Debug)]
pub enum ProjectFileError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid project JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported schema version {found} (expected {expected})", expected = SCHEMA_VERSION)]
    UnsupportedVersion { found: String },

    #[error("Piece {piece} uses unknown lumber profile '{profile}'")]
    UnknownProfile { piece: PieceId, profile: ProfileId },

    #[error("Piece id {piece} appears more than once")]
    DuplicatePieceId { piece: PieceId },

    #[error("Piece {piece} is invalid: {source}")]
    InvalidPiece {
        piece: PieceId,
        #[source]
        source: CoreError,
    },
}

/// Complete project document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFile {
    pub name: String,
    pub pieces: Vec<PieceData>,
    pub exported_at: DateTime<Utc>,
    pub schema_version: String,
}

/// Serialized piece
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieceData {
    pub id: PieceId,
    pub profile_id: ProfileId,
    pub position: Vec3,
    pub rotation: Vec3,
    #[serde(default = "default_scale")]
    pub scale: Vec3,
    pub color: Color,
    #[serde(default)]
    pub custom_length: Option<f64>,
}

fn default_scale() -> Vec3 {
    Vec3::ONE
}

impl PieceData {
    /// Snapshot of a placed piece.
    pub fn from_piece(piece: &PlacedPiece) -> Self {
        Self {
            id: piece.id,
            profile_id: piece.profile.id.clone(),
            position: piece.position,
            rotation: piece.rotation,
            scale: piece.scale,
            color: piece.color.clone(),
            custom_length: piece.custom_length,
        }
    }

    /// Rebuild a placed piece, resolving the profile in `catalog`.
    ///
    /// The id from the file is kept. Numeric fields get the same checks as
    /// an interactive update.
    pub fn to_piece(&self, catalog: &LumberCatalog) -> Result<PlacedPiece, ProjectFileError> {
        let profile =
            catalog
                .get(self.profile_id.as_str())
                .ok_or_else(|| ProjectFileError::UnknownProfile {
                    piece: self.id,
                    profile: self.profile_id.clone(),
                })?;

        let patch = PiecePatch {
            position: Some(self.position),
            rotation: Some(self.rotation),
            scale: Some(self.scale),
            color: Some(self.color.clone()),
            custom_length: Some(self.custom_length),
        };
        patch
            .validate()
            .map_err(|source| ProjectFileError::InvalidPiece {
                piece: self.id,
                source,
            })?;

        let mut piece = PlacedPiece::new(profile, self.position);
        piece.id = self.id;
        patch.apply_to(&mut piece);
        Ok(piece)
    }
}

impl ProjectFile {
    /// Create a document for `name` stamped with the current time
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pieces: Vec::new(),
            exported_at: Utc::now(),
            schema_version: SCHEMA_VERSION.to_string(),
        }
    }

    /// Document for `pieces`, in their current order
    pub fn from_pieces(name: impl Into<String>, pieces: &[PlacedPiece]) -> Self {
        let mut file = Self::new(name);
        file.pieces = pieces.iter().map(PieceData::from_piece).collect();
        file
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String, ProjectFileError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse JSON and check the schema's major version
    pub fn from_json(json: &str) -> Result<Self, ProjectFileError> {
        let file: ProjectFile = serde_json::from_str(json)?;
        file.check_version()?;
        Ok(file)
    }

    /// Resolve every piece against `catalog`; fails on the first bad piece.
    ///
    /// Piece ids must be unique within the document.
    pub fn to_pieces(&self, catalog: &LumberCatalog) -> Result<Vec<PlacedPiece>, ProjectFileError> {
        let mut seen = HashSet::with_capacity(self.pieces.len());
        self.pieces
            .iter()
            .map(|p| {
                if !seen.insert(p.id) {
                    return Err(ProjectFileError::DuplicatePieceId { piece: p.id });
                }
                p.to_piece(catalog)
            })
            .collect()
    }

    fn check_version(&self) -> Result<(), ProjectFileError> {
        let major = |v: &str| v.split('.').next().map(str::to_string);
        if major(&self.schema_version) != major(SCHEMA_VERSION) {
            return Err(ProjectFileError::UnsupportedVersion {
                found: self.schema_version.clone(),
            });
        }
        Ok(())
    }

    /// Save project to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = self.to_json().context("Failed to serialize project")?;

        std::fs::write(path.as_ref(), json).with_context(|| {
            format!("Failed to write project file {}", path.as_ref().display())
        })?;

        Ok(())
    }

    /// Load project from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).with_context(|| {
            format!("Failed to read project file {}", path.as_ref().display())
        })?;

        let file = Self::from_json(&content).context("Failed to parse project file")?;

        Ok(file)
    }
}

/// File name offered when exporting: whitespace runs become `_`.
pub fn suggested_file_name(project_name: &str) -> String {
    let stem = project_name.split_whitespace().collect::<Vec<_>>().join("_");
    let stem = if stem.is_empty() { "project" } else { &stem };
    format!("{}.{}", stem, FILE_EXTENSION)
}
