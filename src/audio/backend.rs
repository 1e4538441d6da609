//! rodio-backed engine.
//!
//! Owns:
//! - OutputStream (must stay alive while anything plays)
//! - one Sink, reused across tracks
//!
//! Tracks are fetched over HTTP on a background task and decoded in memory.
//! A [`LoadGate`] drops results of loads that were superseded before they
//! finished. Requests carry connect and read timeouts so a stalled server
//! ends in `LoadFailed` instead of a silent, paused strip.

use std::io::Cursor;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};
use tokio::sync::mpsc::UnboundedSender;

use crate::config::AppConfig;

use super::gate::LoadGate;
use super::{AudioEngine, PlayerEvent};

struct Output {
    // Keep this alive for as long as the sink is used
    _stream: OutputStream,
    sink: Arc<Sink>,
}

pub struct RodioEngine {
    output: Option<Output>,
    client: reqwest::Client,
    gate: Arc<LoadGate>,
    events: UnboundedSender<PlayerEvent>,
}

impl RodioEngine {
    pub fn new(events: UnboundedSender<PlayerEvent>, config: &AppConfig) -> Result<Self> {
        let client = build_http_client(config.fetch_connect_timeout, config.fetch_read_timeout)?;

        let stream = OutputStreamBuilder::open_default_stream()
            .context("failed to open default audio output")?;
        let sink = Sink::connect_new(stream.mixer());
        sink.pause();

        tracing::info!("Audio output opened");

        Ok(Self {
            output: Some(Output {
                _stream: stream,
                sink: Arc::new(sink),
            }),
            client,
            gate: Arc::new(LoadGate::new()),
            events,
        })
    }

    fn sink(&self) -> Option<&Arc<Sink>> {
        self.output.as_ref().map(|o| &o.sink)
    }
}

impl AudioEngine for RodioEngine {
    fn load(&mut self, url: &str) {
        let Some(sink) = self.sink().cloned() else {
            return;
        };

        // clear() also pauses; the caller follows up with play()
        let load_id = self.gate.begin(|| sink.clear());

        let client = self.client.clone();
        let gate = self.gate.clone();
        let events = self.events.clone();
        let url = url.to_string();

        tracing::debug!(url = %url, load_id, "Loading track");

        tokio::spawn(async move {
            let result = fetch_source(&client, &url).await;

            let committed = gate.commit_if_current(load_id, || match result {
                Ok(source) => {
                    sink.append(source);
                    tracing::info!(url = %url, "Track loaded");
                    let _ = events.send(PlayerEvent::Loaded { url: url.clone() });
                }
                Err(e) => {
                    tracing::error!(url = %url, error = %e, "Track load failed");
                    let _ = events.send(PlayerEvent::LoadFailed {
                        url: url.clone(),
                        reason: format!("{:#}", e),
                    });
                }
            });

            if committed.is_none() {
                tracing::debug!(url = %url, load_id, "Load superseded, dropping result");
            }
        });
    }

    fn play(&mut self) {
        if let Some(sink) = self.sink() {
            sink.play();
        }
    }

    fn pause(&mut self) {
        if let Some(sink) = self.sink() {
            sink.pause();
        }
    }

    fn release(&mut self) {
        // Invalidate any in-flight load before the sink goes away
        self.gate.invalidate();
        if let Some(output) = self.output.take() {
            output.sink.stop();
            tracing::debug!("Audio output closed");
        }
    }
}

impl Drop for RodioEngine {
    fn drop(&mut self) {
        self.release();
    }
}

/// HTTP client for track downloads. The read timeout applies per read, so a
/// slow but steady download still completes.
pub(crate) fn build_http_client(connect_timeout: Duration, read_timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .connect_timeout(connect_timeout)
        .read_timeout(read_timeout)
        .build()
        .context("failed to build HTTP client")
}

async fn fetch_source(client: &reqwest::Client, url: &str) -> Result<Decoder<Cursor<Vec<u8>>>> {
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("request failed for {}", url))?
        .error_for_status()?;

    let bytes = response.bytes().await.context("download interrupted")?;
    tracing::debug!(url, bytes = bytes.len(), "Track downloaded");

    let source = Decoder::new(Cursor::new(bytes.to_vec())).context("unsupported audio format")?;
    Ok(source)
}
