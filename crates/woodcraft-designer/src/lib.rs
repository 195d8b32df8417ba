//! # WoodCraft Designer
//!
//! The scene core of the furniture designer: the placed lumber pieces, the
//! operations that create and mutate them, tool and view state, grid
//! snapping during transforms and the cut list derived from the scene.
//!
//! ## Architecture
//!
//! ```text
//! ProjectState (single source of truth)
//!   ├── PieceStore (ordered pieces, revision counter)
//!   ├── Selection, ActiveTool, ViewMode
//!   ├── SnapSettings ── Snap engine (quantize, candidates)
//!   └── EventBus (observers)
//!
//! Derived on demand
//!   ├── Cut list
//!   ├── Snap candidates
//!   └── Status summary
//!
//! Edges
//!   ├── Input reducer (pointer, drag, keyboard, drop)
//!   ├── Templates
//!   └── Project files (JSON export/import)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use woodcraft_designer::{ProjectState, Vec3};
//!
//! let mut project = ProjectState::new();
//! let id = project.add_piece_by_id("2x4", Some(Vec3::new(0.0, 1.75, 0.0)))?;
//! project.select_piece(Some(id));
//!
//! let cut_list = project.cut_list();
//! assert_eq!(cut_list[0].quantity, 1);
//! # Ok::<(), woodcraft_core::CoreError>(())
//! ```

pub mod cut_list;
pub mod geometry;
pub mod input;
pub mod piece;
pub mod piece_store;
pub mod project_state;
pub mod serialization;
pub mod snap;
pub mod templates;
pub mod tools;

pub use cut_list::{compute_cut_list, render_cut_list, CutListItem, CutListSummary};
pub use geometry::{rotation_matrix, world_bounds, world_face_centers, Face};
pub use input::{reduce, InputEvent, Key, KeyAction, KeyPress};
pub use piece::{Axis, PiecePatch, PlacedPiece, Vec3};
pub use piece_store::PieceStore;
pub use project_state::{
    ProjectDefaults, ProjectState, StatusSummary, DEFAULT_DUPLICATE_OFFSET, DEFAULT_PROJECT_NAME,
};
pub use serialization::{
    suggested_file_name, PieceData, ProjectFile, ProjectFileError, FILE_EXTENSION, SCHEMA_VERSION,
};
pub use snap::{
    compute_snap_candidates, compute_snap_candidates_within, quantize, quantize_vec,
    SnapCandidate, SnapCandidateCache, SnapSettings, DEFAULT_SNAP_DISTANCE, ROTATION_STEP,
    SCALE_STEP,
};
pub use templates::{FurnitureTemplate, TemplateApplication, TemplateLibrary, TemplatePiece};
pub use tools::{ActiveTool, GizmoMode, ViewMode};
