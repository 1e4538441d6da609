//! Model module - Application state and data types
//!
//! This module contains all the data structures and state management for the application.
//! It is organized into submodules by responsibility:
//!
//! - `types`: Core type definitions (tracks, screens, UI state)
//! - `catalog`: The compiled-in track catalog
//! - `snapshot`: Immutable view of the whole application state
//! - `app_model`: The state store that publishes snapshots

mod types;
mod catalog;
mod snapshot;
mod app_model;

// Re-export all public types for convenient access
pub use types::{Screen, Track, UiState};

pub use snapshot::{ErrorBanner, Snapshot};

pub use app_model::AppModel;
