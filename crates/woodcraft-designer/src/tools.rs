//! Interaction tools and camera view modes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Interaction tool. Any tool may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveTool {
    #[default]
    Select,
    Move,
    Rotate,
    Scale,
    /// Click-to-delete: pointer-down removes instead of selecting
    Delete,
    /// Read-only distance inspection; behaves like select
    Measure,
}

/// Which transform a gizmo drag edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GizmoMode {
    Translate,
    Rotate,
    Scale,
}

impl ActiveTool {
    pub const ALL: [ActiveTool; 6] = [
        ActiveTool::Select,
        ActiveTool::Move,
        ActiveTool::Rotate,
        ActiveTool::Scale,
        ActiveTool::Delete,
        ActiveTool::Measure,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActiveTool::Select => "select",
            ActiveTool::Move => "move",
            ActiveTool::Rotate => "rotate",
            ActiveTool::Scale => "scale",
            ActiveTool::Delete => "delete",
            ActiveTool::Measure => "measure",
        }
    }

    /// Gizmo attached to the selected piece while this tool is active.
    pub fn gizmo_mode(&self) -> Option<GizmoMode> {
        match self {
            ActiveTool::Move => Some(GizmoMode::Translate),
            ActiveTool::Rotate => Some(GizmoMode::Rotate),
            ActiveTool::Scale => Some(GizmoMode::Scale),
            _ => None,
        }
    }

    /// Keyboard shortcut, if the tool has one.
    pub fn shortcut(&self) -> Option<char> {
        match self {
            ActiveTool::Select => Some('V'),
            ActiveTool::Move => Some('G'),
            ActiveTool::Rotate => Some('R'),
            ActiveTool::Scale => Some('S'),
            ActiveTool::Measure => Some('M'),
            ActiveTool::Delete => None,
        }
    }
}

impl fmt::Display for ActiveTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActiveTool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tool| tool.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown tool: {}", s))
    }
}

/// Camera view mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    #[serde(alias = "3d")]
    Perspective,
    Top,
    Front,
    Side,
}

impl ViewMode {
    pub const ALL: [ViewMode; 4] = [
        ViewMode::Perspective,
        ViewMode::Top,
        ViewMode::Front,
        ViewMode::Side,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Perspective => "perspective",
            ViewMode::Top => "top",
            ViewMode::Front => "front",
            ViewMode::Side => "side",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "perspective" | "3d" => Ok(ViewMode::Perspective),
            "top" => Ok(ViewMode::Top),
            "front" => Ok(ViewMode::Front),
            "side" => Ok(ViewMode::Side),
            _ => Err(format!("Unknown view mode: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_round_trip_names() {
        for tool in ActiveTool::ALL {
            assert_eq!(tool.as_str().parse::<ActiveTool>(), Ok(tool));
        }
        assert!("lasso".parse::<ActiveTool>().is_err());
    }

    #[test]
    fn test_gizmo_only_for_transform_tools() {
        assert_eq!(ActiveTool::Move.gizmo_mode(), Some(GizmoMode::Translate));
        assert_eq!(ActiveTool::Rotate.gizmo_mode(), Some(GizmoMode::Rotate));
        assert_eq!(ActiveTool::Scale.gizmo_mode(), Some(GizmoMode::Scale));
        assert_eq!(ActiveTool::Select.gizmo_mode(), None);
        assert_eq!(ActiveTool::Delete.gizmo_mode(), None);
        assert_eq!(ActiveTool::Measure.gizmo_mode(), None);
    }

    #[test]
    fn test_view_mode_accepts_3d_alias() {
        assert_eq!("3d".parse::<ViewMode>(), Ok(ViewMode::Perspective));
        let mode: ViewMode = serde_json::from_str("\"3d\"").unwrap();
        assert_eq!(mode, ViewMode::Perspective);
        assert_eq!(
            serde_json::to_string(&ViewMode::Perspective).unwrap(),
            "\"perspective\""
        );
    }
}
