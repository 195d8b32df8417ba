//! # WoodCraft Core
//!
//! Core types and utilities shared by the WoodCraft crates.
//! Provides the lumber catalog, identifiers, display units with
//! numeric input parsing, error types and the project event bus.

pub mod data;
pub mod error;
pub mod event_bus;
pub mod units;

pub use data::{
    lumber::{standard_catalog, LumberCatalog, LumberCategory, LumberProfile, ProfileId},
    Color, PieceId,
};

pub use error::{CoreError, Result};

pub use event_bus::{
    EventBus, EventBusConfig, EventCategory, EventFilter, ProjectEvent, SettingKind,
    SubscriptionId,
};

pub use units::{format_length, parse_length, DisplayUnit};
