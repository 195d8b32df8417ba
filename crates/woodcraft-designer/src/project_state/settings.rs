//! Tool, view, grid, label, unit and name setters for project state.

use woodcraft_core::{DisplayUnit, ProjectEvent, SettingKind};

use super::ProjectState;
use crate::tools::{ActiveTool, ViewMode};

impl ProjectState {
    pub fn set_active_tool(&mut self, tool: ActiveTool) {
        if self.active_tool == tool {
            return;
        }
        tracing::debug!("Active tool: {}", tool);
        self.active_tool = tool;
        self.changed(SettingKind::ActiveTool);
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if self.view_mode == mode {
            return;
        }
        tracing::debug!("View mode: {}", mode);
        self.view_mode = mode;
        self.changed(SettingKind::ViewMode);
    }

    /// Set the grid cell size in inches; non-positive or non-finite sizes are ignored.
    pub fn set_grid_size(&mut self, size: f64) {
        if !size.is_finite() || size <= 0.0 {
            tracing::warn!("Ignoring invalid grid size {}", size);
            return;
        }
        if self.snap.grid_size == size {
            return;
        }
        tracing::debug!("Grid size: {}", size);
        self.snap.grid_size = size;
        self.changed(SettingKind::GridSize);
    }

    pub fn toggle_snap_to_grid(&mut self) {
        self.snap.enabled = !self.snap.enabled;
        tracing::debug!("Snap to grid: {}", self.snap.enabled);
        self.changed(SettingKind::SnapToGrid);
    }

    pub fn toggle_show_dimensions(&mut self) {
        self.show_dimensions = !self.show_dimensions;
        tracing::debug!("Show dimensions: {}", self.show_dimensions);
        self.changed(SettingKind::ShowDimensions);
    }

    /// Change the display unit. Stored values stay in inches.
    pub fn set_unit(&mut self, unit: DisplayUnit) {
        if self.unit == unit {
            return;
        }
        tracing::debug!("Display unit: {}", unit);
        self.unit = unit;
        self.changed(SettingKind::Unit);
    }

    /// Rename the project. Surrounding whitespace is trimmed; blank names are ignored.
    pub fn set_project_name(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            tracing::debug!("Ignoring blank project name");
            return;
        }
        if self.name == name {
            return;
        }
        self.name = name.to_string();
        self.changed(SettingKind::ProjectName);
    }

    fn changed(&self, kind: SettingKind) {
        self.publish(ProjectEvent::SettingsChanged(kind));
    }
}
