//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that handles user input,
//! turns it into intents, applies them to the model and drives the audio engine.
//! It is organized into submodules by responsibility:
//!
//! - `input`: Key event handling
//! - `playback`: Play / pause intents and their engine commands
//! - `navigation`: Screen switching, list cursor and search editing
//! - `player_events`: Outcomes reported back by the audio engine

mod input;
mod playback;
mod navigation;
mod player_events;

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc::UnboundedReceiver, watch};

use crate::audio::{PlayerEvent, PlayerHandle};
use crate::model::{AppModel, Screen, Snapshot, Track, UiState};

/// A user request to change application state
#[derive(Clone, Debug, PartialEq)]
pub enum Intent {
    SetScreen(Screen),
    ToggleFavorite(Arc<Track>),
    UpdateSearch(String),
    Play(Arc<Track>),
    /// The now-playing strip: pause if playing, resume the current track otherwise
    TogglePlayback,
    Quit,
}

pub struct AppController {
    pub(crate) model: AppModel,
    pub(crate) player: PlayerHandle,
    pub(crate) ui: UiState,
    player_events: UnboundedReceiver<PlayerEvent>,
    /// URL of the current track if its last load failed; the engine has
    /// nothing queued for it, so resuming means loading again
    failed_url: Option<String>,
    error_timeout: Duration,
    should_quit: bool,
}

impl AppController {
    pub fn new(
        model: AppModel,
        player: PlayerHandle,
        player_events: UnboundedReceiver<PlayerEvent>,
        error_timeout: Duration,
    ) -> Self {
        Self {
            model,
            player,
            ui: UiState::default(),
            player_events,
            failed_url: None,
            error_timeout,
            should_quit: false,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.model.subscribe()
    }

    #[allow(dead_code)]
    pub fn snapshot(&self) -> Snapshot {
        self.model.snapshot()
    }

    pub fn ui_state(&self) -> &UiState {
        &self.ui
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn report_error(&self, message: String) {
        self.model.set_error(message);
    }

    pub fn dispatch(&mut self, intent: Intent) {
        tracing::trace!(?intent, "Dispatching intent");
        match intent {
            Intent::SetScreen(screen) => self.set_screen(screen),
            Intent::ToggleFavorite(track) => self.toggle_favorite(&track),
            Intent::UpdateSearch(query) => self.update_search(&query),
            Intent::Play(track) => self.play_track(track),
            Intent::TogglePlayback => self.toggle_playback(),
            Intent::Quit => {
                tracing::info!("Quit requested");
                self.should_quit = true;
            }
        }
    }

    /// Periodic housekeeping, called once per loop iteration.
    pub fn tick(&mut self) {
        self.poll_player_events();
        self.model.auto_clear_old_errors(self.error_timeout);
    }

    /// Releases the audio engine. Safe to call more than once.
    pub fn shutdown(&mut self) {
        self.player.release();
    }

    pub(crate) fn format_load_error(reason: &str) -> String {
        let lower = reason.to_lowercase();

        if lower.contains("404") {
            "Track not found on the server.".to_string()
        } else if lower.contains("403") || lower.contains("401") {
            "The server refused access to this track.".to_string()
        } else if lower.contains("request failed")
            || lower.contains("dns")
            || lower.contains("connect")
            || lower.contains("timed out")
        {
            "Network unreachable. Check your connection.".to_string()
        } else if lower.contains("unsupported audio format") {
            "This track's audio format is not supported.".to_string()
        } else if lower.contains("audio output") {
            "No audio output device available.".to_string()
        } else {
            reason.to_string()
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::audio::testing::EngineCall;

    #[test]
    fn quit_intent_sets_flag() {
        let (mut controller, _, _) = controller();
        assert!(!controller.should_quit());
        controller.dispatch(Intent::Quit);
        assert!(controller.should_quit());
    }

    #[test]
    fn shutdown_releases_engine_exactly_once() {
        let (mut controller, engine, _) = controller();
        controller.shutdown();
        controller.shutdown();
        drop(controller);
        let releases = engine
            .calls()
            .into_iter()
            .filter(|c| *c == EngineCall::Release)
            .count();
        assert_eq!(releases, 1);
    }

    #[test]
    fn load_errors_become_readable_messages() {
        assert_eq!(
            AppController::format_load_error("HTTP status client error (404 Not Found)"),
            "Track not found on the server."
        );
        assert_eq!(
            AppController::format_load_error("request failed for https://x: dns error"),
            "Network unreachable. Check your connection."
        );
        assert_eq!(AppController::format_load_error("weird"), "weird");
    }
}
