//! Input events and the reducer that applies them to a project.
//!
//! The rendering layer turns pointer and keyboard activity into
//! [`InputEvent`]s. How an event is interpreted depends on the active tool:
//! in the delete tool a pointer-down on a piece removes it, in every other
//! tool it selects. Transform drags only apply while a gizmo tool is active
//! and are quantized by the snap engine before they reach the store.

use std::fmt;

use serde::{Deserialize, Serialize};
use woodcraft_core::PieceId;

use crate::piece::{PiecePatch, Vec3};
use crate::project_state::ProjectState;
use crate::tools::{ActiveTool, GizmoMode};

/// A key as reported by the windowing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Char(char),
    Delete,
    Backspace,
}

/// A key press with its modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyPress {
    pub key: Key,
    /// Ctrl, or Cmd on macOS
    pub ctrl: bool,
}

impl KeyPress {
    pub fn plain(key: Key) -> Self {
        Self { key, ctrl: false }
    }

    pub fn ctrl(key: Key) -> Self {
        Self { key, ctrl: true }
    }

    pub fn char(c: char) -> Self {
        Self::plain(Key::Char(c))
    }
}

impl fmt::Display for KeyPress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            f.write_str("Ctrl+")?;
        }
        match self.key {
            Key::Char(c) => write!(f, "{}", c.to_ascii_uppercase()),
            Key::Delete => f.write_str("Delete"),
            Key::Backspace => f.write_str("Backspace"),
        }
    }
}

/// What a key press does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    SetTool(ActiveTool),
    ToggleSnap,
    ToggleDimensions,
    DuplicateSelected,
    RemoveSelected,
}

impl KeyPress {
    /// Look up the action bound to this key, if any.
    pub fn action(&self) -> Option<KeyAction> {
        let c = match self.key {
            Key::Delete | Key::Backspace => return Some(KeyAction::RemoveSelected),
            Key::Char(c) => c.to_ascii_lowercase(),
        };
        match (c, self.ctrl) {
            ('v', _) => Some(KeyAction::SetTool(ActiveTool::Select)),
            ('g', true) => Some(KeyAction::ToggleSnap),
            ('g', false) => Some(KeyAction::SetTool(ActiveTool::Move)),
            ('r', _) => Some(KeyAction::SetTool(ActiveTool::Rotate)),
            ('s', false) => Some(KeyAction::SetTool(ActiveTool::Scale)),
            ('m', _) => Some(KeyAction::SetTool(ActiveTool::Measure)),
            ('d', true) => Some(KeyAction::DuplicateSelected),
            ('d', false) => Some(KeyAction::ToggleDimensions),
            _ => None,
        }
    }
}

/// Interaction from the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Click on a piece, or on empty space when `piece` is `None`.
    PointerDown { piece: Option<PieceId> },
    /// Continuous gizmo update with the proposed, unsnapped transform.
    TransformDrag {
        piece: PieceId,
        position: Vec3,
        rotation: Vec3,
        scale: Vec3,
    },
    Key(KeyPress),
    /// A catalog entry dropped into the scene.
    DropProfile {
        profile_id: String,
        position: Option<Vec3>,
    },
}

/// Apply `event` to `state` and return the new state.
pub fn reduce(mut state: ProjectState, event: &InputEvent) -> ProjectState {
    state.dispatch(event);
    state
}

impl ProjectState {
    /// Apply one input event in place.
    pub fn dispatch(&mut self, event: &InputEvent) {
        match event {
            InputEvent::PointerDown { piece } => self.pointer_down(*piece),
            InputEvent::TransformDrag {
                piece,
                position,
                rotation,
                scale,
            } => self.transform_drag(*piece, *position, *rotation, *scale),
            InputEvent::Key(key) => self.key_press(*key),
            InputEvent::DropProfile {
                profile_id,
                position,
            } => {
                if let Err(e) = self.add_piece_by_id(profile_id, *position) {
                    tracing::warn!("Ignoring drop: {}", e);
                }
            }
        }
    }

    fn pointer_down(&mut self, piece: Option<PieceId>) {
        match (self.active_tool(), piece) {
            (ActiveTool::Delete, Some(id)) => {
                self.remove_piece(id);
            }
            (_, piece) => self.select_piece(piece),
        }
    }

    fn transform_drag(&mut self, id: PieceId, position: Vec3, rotation: Vec3, scale: Vec3) {
        let Some(mode) = self.active_tool().gizmo_mode() else {
            tracing::trace!("Drag ignored, {} tool has no gizmo", self.active_tool());
            return;
        };
        if self.selected_piece_id() != Some(id) {
            tracing::trace!("Drag ignored, piece {} is not selected", id);
            return;
        }

        let snap = self.snap_settings();
        let (position, rotation, scale) = match mode {
            GizmoMode::Translate => (snap.snap_position(position), rotation, scale),
            GizmoMode::Rotate => (position, snap.snap_rotation(rotation), scale),
            GizmoMode::Scale => (position, rotation, snap.snap_scale(scale)),
        };

        let patch = PiecePatch::new()
            .position(position)
            .rotation(rotation)
            .scale(scale);
        self.update_piece(id, &patch);
    }

    fn key_press(&mut self, key: KeyPress) {
        let Some(action) = key.action() else {
            return;
        };
        tracing::trace!("{} -> {:?}", key, action);
        match action {
            KeyAction::SetTool(tool) => self.set_active_tool(tool),
            KeyAction::ToggleSnap => self.toggle_snap_to_grid(),
            KeyAction::ToggleDimensions => self.toggle_show_dimensions(),
            KeyAction::DuplicateSelected => {
                if let Some(id) = self.selected_piece_id() {
                    self.duplicate_piece(id);
                }
            }
            KeyAction::RemoveSelected => {
                if let Some(id) = self.selected_piece_id() {
                    self.remove_piece(id);
                }
            }
        }
    }
}
