//! Engine used when the default output device cannot be opened

use tokio::sync::mpsc::UnboundedSender;

use super::{AudioEngine, PlayerEvent};

pub struct NullEngine {
    reason: String,
    events: UnboundedSender<PlayerEvent>,
}

impl NullEngine {
    pub fn new(reason: impl Into<String>, events: UnboundedSender<PlayerEvent>) -> Self {
        Self {
            reason: reason.into(),
            events,
        }
    }
}

impl AudioEngine for NullEngine {
    fn load(&mut self, url: &str) {
        tracing::warn!(url, reason = %self.reason, "Load ignored, no audio output");
        let _ = self.events.send(PlayerEvent::LoadFailed {
            url: url.to_string(),
            reason: self.reason.clone(),
        });
    }

    fn play(&mut self) {}

    fn pause(&mut self) {}

    fn release(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn every_load_reports_failure() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let mut engine = NullEngine::new("no device", tx);
        engine.load("https://example.com/a.mp3");
        engine.play();

        assert_eq!(
            rx.recv().await,
            Some(PlayerEvent::LoadFailed {
                url: "https://example.com/a.mp3".to_string(),
                reason: "no device".to_string(),
            })
        );
    }
}
