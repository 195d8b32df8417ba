//! # WoodCraft
//!
//! Furniture design with standard lumber stock: place boards in a 3D scene,
//! move, rotate and scale them with grid snapping, and derive the cut list
//! needed to build the result.
//!
//! ## Architecture
//!
//! WoodCraft is organized as a workspace with multiple crates:
//!
//! 1. **woodcraft-core** - Lumber catalog, identifiers, units, errors, events
//! 2. **woodcraft-settings** - Editor configuration (TOML/JSON)
//! 3. **woodcraft-designer** - Project state, snapping, cut list, templates, files
//! 4. **woodcraft** - This crate and the command-line front end

pub use woodcraft_core::data;
pub use woodcraft_designer as designer;
pub use woodcraft_settings as settings;

pub use woodcraft_core::{
    format_length, parse_length, standard_catalog, Color, CoreError, DisplayUnit, EventBus,
    EventFilter, LumberCatalog, LumberCategory, LumberProfile, PieceId, ProfileId, ProjectEvent,
};

pub use woodcraft_designer::{
    compute_cut_list, render_cut_list, reduce, ActiveTool, CutListItem, FurnitureTemplate,
    InputEvent, KeyPress, PiecePatch, PlacedPiece, ProjectFile, ProjectState, SnapSettings,
    TemplateLibrary, Vec3, ViewMode,
};

pub use woodcraft_settings::{Config, EditorConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Honours `RUST_LOG`; without it only `info` and above are shown.
pub fn init_logging() -> anyhow::Result<()> {
    init_logging_with_level(tracing::Level::INFO)
}

/// Initialize logging with `level` as the default directive.
pub fn init_logging_with_level(level: tracing::Level) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
