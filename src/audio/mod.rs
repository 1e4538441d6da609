//! Audio module - the playback capability the controller drives
//!
//! The rest of the application only sees the [`AudioEngine`] trait:
//! `load`, `play`, `pause` and `release`, all fire-and-forget. Outcomes of
//! asynchronous work (fetching and decoding a track) come back as
//! [`PlayerEvent`]s on a channel the controller drains.
//!
//! - `backend`: rodio output with reqwest fetching
//! - `gate`: orders track loads against their background results
//! - `null`: stand-in used when no output device can be opened

mod backend;
mod gate;
mod null;

pub use backend::RodioEngine;
pub use null::NullEngine;

/// Commands accepted by an audio engine.
pub trait AudioEngine {
    /// Replace whatever is loaded with the resource at `url`.
    fn load(&mut self, url: &str);
    fn play(&mut self);
    fn pause(&mut self);
    /// Free the output device and any in-flight work.
    fn release(&mut self);
}

/// Results reported back by an engine
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayerEvent {
    Loaded { url: String },
    LoadFailed { url: String, reason: String },
}

/// Owns the engine for the lifetime of the UI and releases it exactly once,
/// either on [`PlayerHandle::release`] or on drop.
pub struct PlayerHandle {
    engine: Option<Box<dyn AudioEngine>>,
}

impl PlayerHandle {
    pub fn new(engine: Box<dyn AudioEngine>) -> Self {
        tracing::debug!("Audio engine acquired");
        Self {
            engine: Some(engine),
        }
    }

    pub fn load(&mut self, url: &str) {
        if let Some(engine) = self.engine.as_mut() {
            engine.load(url);
        }
    }

    pub fn play(&mut self) {
        if let Some(engine) = self.engine.as_mut() {
            engine.play();
        }
    }

    pub fn pause(&mut self) {
        if let Some(engine) = self.engine.as_mut() {
            engine.pause();
        }
    }

    pub fn release(&mut self) {
        if let Some(mut engine) = self.engine.take() {
            engine.release();
            tracing::info!("Audio engine released");
        }
    }

    #[allow(dead_code)]
    pub fn is_released(&self) -> bool {
        self.engine.is_none()
    }
}

impl Drop for PlayerHandle {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::{Arc, Mutex};

    use super::AudioEngine;

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum EngineCall {
        Load(String),
        Play,
        Pause,
        Release,
    }

    /// Engine that only remembers what it was asked to do.
    #[derive(Clone, Default)]
    pub struct RecordingEngine {
        pub calls: Arc<Mutex<Vec<EngineCall>>>,
    }

    impl RecordingEngine {
        pub fn calls(&self) -> Vec<EngineCall> {
            self.calls.lock().unwrap().clone()
        }

        pub fn clear(&self) {
            self.calls.lock().unwrap().clear();
        }

        fn record(&self, call: EngineCall) {
            self.calls.lock().unwrap().push(call);
        }
    }

    impl AudioEngine for RecordingEngine {
        fn load(&mut self, url: &str) {
            self.record(EngineCall::Load(url.to_string()));
        }

        fn play(&mut self) {
            self.record(EngineCall::Play);
        }

        fn pause(&mut self) {
            self.record(EngineCall::Pause);
        }

        fn release(&mut self) {
            self.record(EngineCall::Release);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{EngineCall, RecordingEngine};
    use super::*;

    #[test]
    fn handle_releases_once_on_explicit_release_and_drop() {
        let engine = RecordingEngine::default();
        let mut handle = PlayerHandle::new(Box::new(engine.clone()));
        handle.release();
        handle.release();
        assert!(handle.is_released());
        drop(handle);

        let releases = engine
            .calls()
            .into_iter()
            .filter(|c| *c == EngineCall::Release)
            .count();
        assert_eq!(releases, 1);
    }

    #[test]
    fn handle_releases_on_drop() {
        let engine = RecordingEngine::default();
        {
            let mut handle = PlayerHandle::new(Box::new(engine.clone()));
            handle.load("https://example.com/a.mp3");
            handle.play();
        }
        assert_eq!(
            engine.calls(),
            vec![
                EngineCall::Load("https://example.com/a.mp3".to_string()),
                EngineCall::Play,
                EngineCall::Release,
            ]
        );
    }

    #[test]
    fn released_handle_ignores_commands() {
        let engine = RecordingEngine::default();
        let mut handle = PlayerHandle::new(Box::new(engine.clone()));
        handle.release();
        engine.clear();
        handle.load("https://example.com/a.mp3");
        handle.play();
        handle.pause();
        assert!(engine.calls().is_empty());
    }
}
