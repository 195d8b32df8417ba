//! File I/O operations (export, import, save, load) for project state.

use std::path::Path;

use super::ProjectState;
use crate::serialization::{suggested_file_name, ProjectFile, ProjectFileError};

impl ProjectState {
    /// Snapshot of the project as an export document.
    pub fn to_project_file(&self) -> ProjectFile {
        ProjectFile::from_pieces(&self.name, self.pieces())
    }

    /// Export the project as pretty-printed JSON.
    pub fn export_json(&self) -> Result<String, ProjectFileError> {
        self.to_project_file().to_json()
    }

    /// Replace the whole project with the contents of `file`.
    ///
    /// Every piece is resolved before anything changes, so a bad document
    /// leaves the current project untouched.
    pub fn load_project_file(&mut self, file: &ProjectFile) -> Result<(), ProjectFileError> {
        let pieces = file.to_pieces(&self.catalog)?;
        let name = match file.name.trim() {
            "" => self.defaults.name.clone(),
            name => name.to_string(),
        };
        self.replace_project(name, pieces);
        Ok(())
    }

    /// Import a project from JSON text.
    pub fn import_json(&mut self, json: &str) -> Result<(), ProjectFileError> {
        let file = ProjectFile::from_json(json)?;
        self.load_project_file(&file)
    }

    /// Save project to file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        self.to_project_file().save_to_file(path)
    }

    /// Load project from file.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let file = ProjectFile::load_from_file(&path)?;
        self.load_project_file(&file)?;
        Ok(())
    }

    /// File name to offer when exporting this project.
    pub fn suggested_file_name(&self) -> String {
        suggested_file_name(&self.name)
    }
}
