//! # Furniture Template Module
//!
//! Ready-made furniture layouts that replace the current project.
//!
//! A template is an ordered list of `(profile id, position, rotation,
//! length)` tuples in inches and radians. Applying one clears the project,
//! then for every tuple places a piece and patches in its rotation and
//! length, in list order. Libraries can be saved to and loaded from JSON so
//! users can keep their own layouts next to the built-in ones.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;
use std::path::Path;
use woodcraft_core::{PieceId, ProfileId};

use crate::piece::{PiecePatch, Vec3};
use crate::project_state::ProjectState;

/// One piece of a template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplatePiece {
    pub profile_id: ProfileId,
    /// Inches
    pub position: Vec3,
    /// Radians, XYZ order
    pub rotation: Vec3,
    /// Length override, inches
    #[serde(default)]
    pub length: Option<f64>,
}

impl TemplatePiece {
    fn new(profile_id: &str, position: [f64; 3], rotation: [f64; 3], length: f64) -> Self {
        Self {
            profile_id: ProfileId(profile_id.to_string()),
            position: position.into(),
            rotation: rotation.into(),
            length: Some(length),
        }
    }
}

/// A furniture layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurnitureTemplate {
    /// Unique template identifier
    pub id: String,
    pub name: String,
    pub description: String,
    pub pieces: Vec<TemplatePiece>,
}

impl FurnitureTemplate {
    /// Matches search query
    pub fn matches_search(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.id.to_lowercase().contains(&q)
            || self.name.to_lowercase().contains(&q)
            || self.description.to_lowercase().contains(&q)
    }
}

/// Result of applying a template.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateApplication {
    /// Ids of the placed pieces, in template order
    pub added: Vec<PieceId>,
    /// Profiles that were not in the catalog
    pub skipped: Vec<ProfileId>,
}

/// Ordered collection of templates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateLibrary {
    templates: Vec<FurnitureTemplate>,
}

impl TemplateLibrary {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in templates: simple table, basic shelf and workbench
    pub fn builtin() -> Self {
        let templates = vec![
            FurnitureTemplate {
                id: "simple-table".to_string(),
                name: "Simple Table".to_string(),
                description: "4 legs, 1 top frame".to_string(),
                pieces: vec![
                    // Legs
                    TemplatePiece::new("4x4", [-20.0, 15.0, -15.0], [0.0, 0.0, 0.0], 30.0),
                    TemplatePiece::new("4x4", [20.0, 15.0, -15.0], [0.0, 0.0, 0.0], 30.0),
                    TemplatePiece::new("4x4", [-20.0, 15.0, 15.0], [0.0, 0.0, 0.0], 30.0),
                    TemplatePiece::new("4x4", [20.0, 15.0, 15.0], [0.0, 0.0, 0.0], 30.0),
                    // Top rails
                    TemplatePiece::new("2x4", [0.0, 32.0, -15.0], [0.0, 0.0, FRAC_PI_2], 48.0),
                    TemplatePiece::new("2x4", [0.0, 32.0, 15.0], [0.0, 0.0, FRAC_PI_2], 48.0),
                    TemplatePiece::new(
                        "2x4",
                        [-20.0, 32.0, 0.0],
                        [0.0, FRAC_PI_2, FRAC_PI_2],
                        30.0,
                    ),
                    TemplatePiece::new(
                        "2x4",
                        [20.0, 32.0, 0.0],
                        [0.0, FRAC_PI_2, FRAC_PI_2],
                        30.0,
                    ),
                ],
            },
            FurnitureTemplate {
                id: "basic-shelf".to_string(),
                name: "Basic Shelf".to_string(),
                description: "3-tier bookshelf".to_string(),
                pieces: vec![
                    // Sides
                    TemplatePiece::new("2x10", [-20.0, 20.0, 0.0], [0.0, 0.0, 0.0], 48.0),
                    TemplatePiece::new("2x10", [20.0, 20.0, 0.0], [0.0, 0.0, 0.0], 48.0),
                    // Shelves
                    TemplatePiece::new("1x6", [0.0, 5.0, 0.0], [0.0, 0.0, FRAC_PI_2], 36.0),
                    TemplatePiece::new("1x6", [0.0, 20.0, 0.0], [0.0, 0.0, FRAC_PI_2], 36.0),
                    TemplatePiece::new("1x6", [0.0, 35.0, 0.0], [0.0, 0.0, FRAC_PI_2], 36.0),
                ],
            },
            FurnitureTemplate {
                id: "workbench".to_string(),
                name: "Workbench".to_string(),
                description: "Heavy duty bench".to_string(),
                pieces: vec![
                    // Legs
                    TemplatePiece::new("4x4", [-30.0, 15.0, -10.0], [0.0, 0.0, 0.0], 36.0),
                    TemplatePiece::new("4x4", [30.0, 15.0, -10.0], [0.0, 0.0, 0.0], 36.0),
                    TemplatePiece::new("4x4", [-30.0, 15.0, 10.0], [0.0, 0.0, 0.0], 36.0),
                    TemplatePiece::new("4x4", [30.0, 15.0, 10.0], [0.0, 0.0, 0.0], 36.0),
                    // Top planks
                    TemplatePiece::new("2x6", [0.0, 33.0, -5.0], [0.0, 0.0, FRAC_PI_2], 72.0),
                    TemplatePiece::new("2x6", [0.0, 33.0, 5.0], [0.0, 0.0, FRAC_PI_2], 72.0),
                    // Stretchers
                    TemplatePiece::new("2x4", [0.0, 5.0, -10.0], [0.0, 0.0, FRAC_PI_2], 60.0),
                    TemplatePiece::new("2x4", [0.0, 5.0, 10.0], [0.0, 0.0, FRAC_PI_2], 60.0),
                ],
            },
        ];
        Self { templates }
    }

    /// Add template to library
    pub fn add_template(&mut self, template: FurnitureTemplate) -> Result<()> {
        if self.exists(&template.id) {
            return Err(anyhow!("Template with ID '{}' already exists", template.id));
        }
        self.templates.push(template);
        Ok(())
    }

    /// Get template by ID
    pub fn get_template(&self, id: &str) -> Option<&FurnitureTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Remove template by ID
    pub fn remove_template(&mut self, id: &str) -> Option<FurnitureTemplate> {
        let index = self.templates.iter().position(|t| t.id == id)?;
        Some(self.templates.remove(index))
    }

    /// All templates in library order
    pub fn list_all(&self) -> &[FurnitureTemplate] {
        &self.templates
    }

    /// Search templates by query
    pub fn search(&self, query: &str) -> Vec<&FurnitureTemplate> {
        self.templates
            .iter()
            .filter(|t| t.matches_search(query))
            .collect()
    }

    /// Get template count
    pub fn count(&self) -> usize {
        self.templates.len()
    }

    /// Check if template exists
    pub fn exists(&self, id: &str) -> bool {
        self.get_template(id).is_some()
    }

    /// Save library to JSON file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize templates")?;
        std::fs::write(path.as_ref(), json).with_context(|| {
            format!("Failed to write template file {}", path.as_ref().display())
        })?;
        Ok(())
    }

    /// Load library from JSON file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).with_context(|| {
            format!("Failed to read template file {}", path.as_ref().display())
        })?;
        let library: Self =
            serde_json::from_str(&content).context("Failed to parse template file")?;
        Ok(library)
    }
}

impl ProjectState {
    /// Replace the project with `template`.
    ///
    /// Clears first, then places and patches each piece in order. Pieces
    /// whose profile is not in the catalog are skipped with a warning.
    pub fn apply_template(&mut self, template: &FurnitureTemplate) -> TemplateApplication {
        tracing::info!("Applying template '{}'", template.id);
        self.clear_project();

        let mut result = TemplateApplication::default();
        for entry in &template.pieces {
            let Some(profile) = self.catalog().get(entry.profile_id.as_str()) else {
                tracing::warn!(
                    "Template '{}' uses unknown profile '{}', skipping",
                    template.id,
                    entry.profile_id
                );
                result.skipped.push(entry.profile_id.clone());
                continue;
            };

            let id = self.add_piece(profile, Some(entry.position));
            let mut patch = PiecePatch::new().rotation(entry.rotation);
            if let Some(length) = entry.length {
                patch = patch.custom_length(length);
            }
            self.update_piece(id, &patch);
            result.added.push(id);
        }
        result
    }
}
