//! # Event Bus Module
//!
//! Publish/subscribe notifications for project state changes.
//!
//! ## Overview
//!
//! Each open project owns its own [`EventBus`]; there is no global
//! instance. Panels and renderers subscribe and re-derive what they
//! display from the project whenever an event arrives:
//! - Publishers emit typed events without knowing subscribers
//! - Subscribers filter by category
//!
//! ## Usage
//!
//! ```rust
//! use woodcraft_core::event_bus::{EventBus, EventCategory, EventFilter, ProjectEvent};
//!
//! let bus = EventBus::new();
//! let subscription = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::Project]),
//!     |event| println!("{}", event.description()),
//! );
//!
//! bus.publish(ProjectEvent::ProjectCleared);
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
