//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! Rendering is a pure function of the latest snapshot plus the controller's
//! ephemeral UI state. It is organized into submodules by component type:
//!
//! - `utils`: Shared utility functions (truncation, scrollable lists)
//! - `layout`: Navigation bar and search field
//! - `content`: The three screens and their track lists
//! - `now_playing`: Persistent playback strip
//! - `overlays`: Modal overlays (error, help)

mod utils;
mod layout;
mod content;
mod now_playing;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::{Snapshot, UiState};
use now_playing::NOW_PLAYING_HEIGHT;

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, snapshot: &Snapshot, ui_state: &UiState) {
        let strip_height = if snapshot.current.is_some() { NOW_PLAYING_HEIGHT } else { 0 };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),               // Active screen
                Constraint::Length(strip_height), // Now playing
                Constraint::Length(3),            // Navigation
            ])
            .split(frame.area());

        content::render_main_content(frame, chunks[0], snapshot, ui_state);

        if let Some(track) = &snapshot.current {
            now_playing::render_now_playing(frame, chunks[1], track, snapshot.is_playing);
        }

        layout::render_nav_bar(frame, chunks[2], snapshot.screen);

        // Error notification overlay (if there's an error)
        if let Some(error) = &snapshot.error {
            overlays::render_error_notification(frame, error);
        }

        // Help popup overlay (if open)
        if ui_state.show_help_popup {
            overlays::render_help_popup(frame);
        }
    }
}
