//! Handling of outcomes reported by the audio engine

use crate::audio::PlayerEvent;

use super::AppController;

impl AppController {
    /// Drains every event currently queued, without waiting.
    pub fn poll_player_events(&mut self) {
        while let Ok(event) = self.player_events.try_recv() {
            self.handle_player_event(event);
        }
    }

    pub(crate) fn handle_player_event(&mut self, event: PlayerEvent) {
        match event {
            PlayerEvent::Loaded { url } => {
                tracing::debug!(url = %url, "PlayerEvent::Loaded");
                if self.failed_url.as_deref() == Some(url.as_str()) {
                    self.failed_url = None;
                }
            }
            PlayerEvent::LoadFailed { url, reason } => {
                let snapshot = self.model.snapshot();
                match snapshot.current {
                    Some(current) if current.url == url => {
                        tracing::warn!(
                            track_id = %current.id,
                            url = %url,
                            reason = %reason,
                            "PlayerEvent::LoadFailed for current track"
                        );
                        self.failed_url = Some(url);
                        self.model.pause();
                        self.model.set_error(format!(
                            "Could not play {}: {}",
                            current.title,
                            Self::format_load_error(&reason)
                        ));
                    }
                    _ => {
                        tracing::debug!(url = %url, "PlayerEvent::LoadFailed for stale track, ignored");
                    }
                }
            }
        }
    }
}
