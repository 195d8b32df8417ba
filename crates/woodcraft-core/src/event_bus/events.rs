//! Event type definitions for the event bus.
//!
//! Every mutation of a project publishes exactly one event once the
//! mutation is complete. Events carry ids only, never piece data, so
//! observers re-read the project state instead of keeping copies.

use serde::{Deserialize, Serialize};

use crate::data::PieceId;

/// Root event enum for project events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProjectEvent {
    /// A piece was appended to the piece list
    PieceAdded {
        /// Id of the new piece.
        id: PieceId,
    },
    /// A piece was removed
    PieceRemoved {
        /// Id of the removed piece.
        id: PieceId,
        /// Whether the removal also cleared the selection.
        was_selected: bool,
    },
    /// Fields of an existing piece changed
    PieceUpdated {
        /// Id of the changed piece.
        id: PieceId,
    },
    /// The selected piece changed
    SelectionChanged {
        /// The newly selected piece, if any.
        selected: Option<PieceId>,
    },
    /// All pieces were removed and the name reset
    ProjectCleared,
    /// The whole project was replaced (template or file)
    ProjectLoaded {
        /// Name of the loaded project.
        name: String,
        /// Number of pieces after loading.
        piece_count: usize,
    },
    /// A project-level setting changed
    SettingsChanged(SettingKind),
}

impl ProjectEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            ProjectEvent::PieceAdded { .. }
            | ProjectEvent::PieceRemoved { .. }
            | ProjectEvent::PieceUpdated { .. } => EventCategory::Pieces,
            ProjectEvent::SelectionChanged { .. } => EventCategory::Selection,
            ProjectEvent::ProjectCleared | ProjectEvent::ProjectLoaded { .. } => {
                EventCategory::Project
            }
            ProjectEvent::SettingsChanged(_) => EventCategory::Settings,
        }
    }

    /// Whether observers of the piece list should refresh
    pub fn touches_pieces(&self) -> bool {
        matches!(
            self.category(),
            EventCategory::Pieces | EventCategory::Project
        )
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            ProjectEvent::PieceAdded { id } => format!("Piece added: {}", id),
            ProjectEvent::PieceRemoved { id, .. } => format!("Piece removed: {}", id),
            ProjectEvent::PieceUpdated { id } => format!("Piece updated: {}", id),
            ProjectEvent::SelectionChanged { selected: Some(id) } => {
                format!("Selected: {}", id)
            }
            ProjectEvent::SelectionChanged { selected: None } => "Selection cleared".to_string(),
            ProjectEvent::ProjectCleared => "Project cleared".to_string(),
            ProjectEvent::ProjectLoaded { name, piece_count } => {
                format!("Project loaded: {} ({} pieces)", name, piece_count)
            }
            ProjectEvent::SettingsChanged(kind) => format!("Setting changed: {:?}", kind),
        }
    }
}

/// Which project-level setting changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SettingKind {
    /// Project name
    ProjectName,
    /// Active interaction tool
    ActiveTool,
    /// Camera view mode
    ViewMode,
    /// Grid size
    GridSize,
    /// Snap-to-grid toggle
    SnapToGrid,
    /// Dimension label toggle
    ShowDimensions,
    /// Display unit
    Unit,
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Piece list mutations.
    Pieces,
    /// Selection changes.
    Selection,
    /// Whole-project replacement or clearing.
    Project,
    /// Tool, view, grid and display settings.
    Settings,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Pieces => write!(f, "Pieces"),
            EventCategory::Selection => write!(f, "Selection"),
            EventCategory::Project => write!(f, "Project"),
            EventCategory::Settings => write!(f, "Settings"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_categories() {
        let id = PieceId::new();
        assert_eq!(
            ProjectEvent::PieceAdded { id }.category(),
            EventCategory::Pieces
        );
        assert_eq!(
            ProjectEvent::SelectionChanged { selected: None }.category(),
            EventCategory::Selection
        );
        assert_eq!(ProjectEvent::ProjectCleared.category(), EventCategory::Project);
        assert_eq!(
            ProjectEvent::SettingsChanged(SettingKind::GridSize).category(),
            EventCategory::Settings
        );
    }

    #[test]
    fn test_touches_pieces() {
        assert!(ProjectEvent::ProjectCleared.touches_pieces());
        assert!(!ProjectEvent::SettingsChanged(SettingKind::Unit).touches_pieces());
    }
}
