//! Playback control methods

use std::sync::Arc;

use crate::model::Track;

use super::AppController;

impl AppController {
    /// Loads `track` into the engine, starts it and records it as current.
    /// Works the same whether or not something else was playing.
    pub(crate) fn play_track(&mut self, track: Arc<Track>) {
        tracing::info!(track_id = %track.id, title = %track.title, url = %track.url, "Starting playback");
        self.failed_url = None;
        self.player.load(&track.url);
        self.player.play();
        self.model.play(track);
    }

    /// Now-playing strip action. Never changes which track is current. The
    /// track is only reloaded when its last load failed, since the engine
    /// then has nothing to resume.
    pub(crate) fn toggle_playback(&mut self) {
        let snapshot = self.model.snapshot();
        tracing::debug!(is_playing = snapshot.is_playing, "Toggling playback");

        if snapshot.is_playing {
            self.player.pause();
            self.model.pause();
            tracing::info!(action = "paused", "Playback toggled");
        } else if let Some(current) = snapshot.current {
            if self.failed_url.as_deref() == Some(current.url.as_str()) {
                tracing::info!(track_id = %current.id, "Retrying failed track");
                self.play_track(current);
                return;
            }
            self.player.play();
            self.model.play(current);
            tracing::info!(action = "resumed", "Playback toggled");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::super::Intent;
    use crate::audio::PlayerEvent;
    use crate::audio::testing::EngineCall;

    #[test]
    fn play_loads_then_plays() {
        let (mut controller, engine, _) = controller();
        let one = track(&controller, "1");
        controller.dispatch(Intent::Play(one.clone()));

        assert_eq!(
            engine.calls(),
            vec![EngineCall::Load(one.url.clone()), EngineCall::Play]
        );
        let snap = controller.snapshot();
        assert!(snap.is_playing);
        assert!(snap.is_current("1"));
    }

    #[test]
    fn second_play_switches_track_without_pause() {
        let (mut controller, engine, _) = controller();
        let one = track(&controller, "1");
        let two = track(&controller, "2");
        controller.dispatch(Intent::Play(one));
        controller.dispatch(Intent::Play(two.clone()));

        let snap = controller.snapshot();
        assert!(snap.is_playing);
        assert!(snap.is_current("2"));
        assert!(!engine.calls().contains(&EngineCall::Pause));
        assert_eq!(engine.calls().last(), Some(&EngineCall::Play));
        assert!(engine.calls().contains(&EngineCall::Load(two.url.clone())));
    }

    #[test]
    fn toggle_pauses_and_resumes_without_reload() {
        let (mut controller, engine, _) = controller();
        let three = track(&controller, "3");
        controller.dispatch(Intent::Play(three));
        engine.clear();

        controller.dispatch(Intent::TogglePlayback);
        assert!(!controller.snapshot().is_playing);
        assert!(controller.snapshot().is_current("3"));

        controller.dispatch(Intent::TogglePlayback);
        assert!(controller.snapshot().is_playing);
        assert!(controller.snapshot().is_current("3"));

        assert_eq!(engine.calls(), vec![EngineCall::Pause, EngineCall::Play]);
    }

    #[test]
    fn resume_after_failed_load_loads_again() {
        let (mut controller, engine, events) = controller();
        let four = track(&controller, "4");
        controller.dispatch(Intent::Play(four.clone()));
        events
            .send(PlayerEvent::LoadFailed {
                url: four.url.clone(),
                reason: "HTTP status server error (503 Service Unavailable)".to_string(),
            })
            .unwrap();
        controller.tick();
        controller.model.clear_error();
        engine.clear();

        // Nothing is queued, so a bare play would leave the strip lying
        controller.dispatch(Intent::TogglePlayback);
        assert_eq!(
            engine.calls(),
            vec![EngineCall::Load(four.url.clone()), EngineCall::Play]
        );
        assert!(controller.snapshot().is_playing);

        // Once it loads, the strip goes back to plain pause/resume
        events
            .send(PlayerEvent::Loaded { url: four.url.clone() })
            .unwrap();
        controller.tick();
        controller.dispatch(Intent::TogglePlayback);
        engine.clear();
        controller.dispatch(Intent::TogglePlayback);
        assert_eq!(engine.calls(), vec![EngineCall::Play]);
    }

    #[test]
    fn repeated_failure_pauses_again() {
        let (mut controller, _, events) = controller();
        let five = track(&controller, "5");
        controller.dispatch(Intent::Play(five.clone()));

        for _ in 0..2 {
            events
                .send(PlayerEvent::LoadFailed {
                    url: five.url.clone(),
                    reason: "download interrupted".to_string(),
                })
                .unwrap();
            controller.tick();
            assert!(!controller.snapshot().is_playing);
            controller.model.clear_error();
            controller.dispatch(Intent::TogglePlayback);
        }
        assert!(controller.snapshot().is_playing);
    }

    #[test]
    fn toggle_without_current_track_does_nothing() {
        let (mut controller, engine, _) = controller();
        controller.dispatch(Intent::TogglePlayback);
        let snap = controller.snapshot();
        assert!(!snap.is_playing);
        assert!(snap.current.is_none());
        assert!(engine.calls().is_empty());
    }
}
