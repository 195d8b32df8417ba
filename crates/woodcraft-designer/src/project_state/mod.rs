//! Project state: the single source of truth for an open project.
//! Owns the placed pieces, the selection, tool and view state, and the
//! event bus observers subscribe to.
//!
//! This module is split into submodules for better organization:
//! - `pieces`: Add, remove, update, select, duplicate, clear
//! - `settings`: Tool, view, grid, label, unit and name setters
//! - `properties`: Text-field edits from the properties panel
//! - `file_io`: Export, import, save and load

mod file_io;
mod pieces;
mod properties;
mod settings;

use std::fmt;
use std::sync::Arc;

use woodcraft_core::{
    standard_catalog, DisplayUnit, EventBus, LumberCatalog, PieceId, ProjectEvent,
};
use woodcraft_settings::Config;

use crate::cut_list::{compute_cut_list, CutListItem};
use crate::piece::{PlacedPiece, Vec3};
use crate::piece_store::PieceStore;
use crate::snap::{compute_snap_candidates_within, SnapCandidate, SnapSettings};
use crate::tools::{ActiveTool, ViewMode};

/// Name given to new and cleared projects unless configured otherwise.
pub const DEFAULT_PROJECT_NAME: &str = "Untitled Project";

/// Offset applied to duplicated pieces unless configured otherwise.
pub const DEFAULT_DUPLICATE_OFFSET: Vec3 = Vec3::new(5.0, 0.0, 5.0);

/// Values a project starts from and resets to.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDefaults {
    pub name: String,
    pub duplicate_offset: Vec3,
    pub snap: SnapSettings,
    pub show_dimensions: bool,
    pub unit: DisplayUnit,
}

impl Default for ProjectDefaults {
    fn default() -> Self {
        Self {
            name: DEFAULT_PROJECT_NAME.to_string(),
            duplicate_offset: DEFAULT_DUPLICATE_OFFSET,
            snap: SnapSettings::default(),
            show_dimensions: true,
            unit: DisplayUnit::Inches,
        }
    }
}

impl From<&Config> for ProjectDefaults {
    fn from(config: &Config) -> Self {
        Self {
            name: config.project.default_name.clone(),
            duplicate_offset: Vec3::from(config.editing.duplicate_offset),
            snap: SnapSettings::from_config(config),
            show_dimensions: config.display.show_dimensions,
            unit: config.display.unit,
        }
    }
}

/// State of one open project
///
/// Every mutation is a total function: unknown ids and invalid numbers are
/// ignored rather than reported. Each successful mutation publishes exactly
/// one [`ProjectEvent`] after the change is complete.
#[derive(Debug)]
pub struct ProjectState {
    name: String,
    store: PieceStore,
    selected: Option<PieceId>,
    active_tool: ActiveTool,
    view_mode: ViewMode,
    snap: SnapSettings,
    show_dimensions: bool,
    unit: DisplayUnit,
    defaults: ProjectDefaults,
    catalog: Arc<LumberCatalog>,
    events: EventBus,
}

impl ProjectState {
    /// Creates an empty project with built-in defaults and the standard catalog.
    pub fn new() -> Self {
        Self::with_defaults(ProjectDefaults::default())
    }

    /// Creates an empty project seeded from the editor configuration.
    pub fn with_config(config: &Config) -> Self {
        Self::with_defaults(ProjectDefaults::from(config))
    }

    pub fn with_defaults(defaults: ProjectDefaults) -> Self {
        Self {
            name: defaults.name.clone(),
            store: PieceStore::new(),
            selected: None,
            active_tool: ActiveTool::default(),
            view_mode: ViewMode::default(),
            snap: defaults.snap,
            show_dimensions: defaults.show_dimensions,
            unit: defaults.unit,
            defaults,
            catalog: Arc::new(standard_catalog().clone()),
            events: EventBus::new(),
        }
    }

    /// Use `catalog` for id lookups (drops, templates, imports).
    pub fn with_catalog(mut self, catalog: Arc<LumberCatalog>) -> Self {
        self.catalog = catalog;
        self
    }

    /// Use a specific event bus, e.g. one with history enabled.
    pub fn with_event_bus(mut self, events: EventBus) -> Self {
        self.events = events;
        self
    }

    pub fn project_name(&self) -> &str {
        &self.name
    }

    /// Pieces in insertion order.
    pub fn pieces(&self) -> &[PlacedPiece] {
        self.store.as_slice()
    }

    pub fn store(&self) -> &PieceStore {
        &self.store
    }

    pub fn piece(&self, id: PieceId) -> Option<&PlacedPiece> {
        self.store.get(id)
    }

    /// Number of pieces; non-zero means there is work a clear would discard.
    pub fn piece_count(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn selected_piece_id(&self) -> Option<PieceId> {
        self.selected
    }

    pub fn selected_piece(&self) -> Option<&PlacedPiece> {
        self.selected.and_then(|id| self.store.get(id))
    }

    pub fn active_tool(&self) -> ActiveTool {
        self.active_tool
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn grid_size(&self) -> f64 {
        self.snap.grid_size
    }

    pub fn snap_to_grid(&self) -> bool {
        self.snap.enabled
    }

    pub fn snap_settings(&self) -> &SnapSettings {
        &self.snap
    }

    pub fn show_dimensions(&self) -> bool {
        self.show_dimensions
    }

    pub fn unit(&self) -> DisplayUnit {
        self.unit
    }

    pub fn defaults(&self) -> &ProjectDefaults {
        &self.defaults
    }

    pub fn catalog(&self) -> &LumberCatalog {
        &self.catalog
    }

    /// Bus to subscribe to for change notifications.
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Current cut list, derived fresh from the pieces.
    pub fn cut_list(&self) -> Vec<CutListItem> {
        compute_cut_list(self.pieces())
    }

    /// Alignment candidates around the selected piece.
    pub fn snap_candidates(&self) -> Vec<SnapCandidate> {
        compute_snap_candidates_within(
            self.pieces(),
            self.selected,
            self.snap.enabled,
            self.snap.candidate_distance,
        )
    }

    /// Status-bar read model.
    pub fn status(&self) -> StatusSummary {
        StatusSummary {
            piece_count: self.piece_count(),
            selected_profile: self.selected_piece().map(|p| p.profile.name.clone()),
            snap_enabled: self.snap.enabled,
            show_dimensions: self.show_dimensions,
            unit: self.unit,
        }
    }

    pub(crate) fn publish(&self, event: ProjectEvent) {
        self.events.publish(event);
    }
}

impl Default for ProjectState {
    fn default() -> Self {
        Self::new()
    }
}

/// What the status bar shows.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusSummary {
    pub piece_count: usize,
    pub selected_profile: Option<String>,
    pub snap_enabled: bool,
    pub show_dimensions: bool,
    pub unit: DisplayUnit,
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "On"
    } else {
        "Off"
    }
}

impl fmt::Display for StatusSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pieces: {}", self.piece_count)?;
        if let Some(name) = &self.selected_profile {
            write!(f, " | Selected: {}", name)?;
        }
        write!(
            f,
            " | Grid: {} | Dims: {} | Units: {}",
            on_off(self.snap_enabled),
            on_off(self.show_dimensions),
            self.unit
        )
    }
}
