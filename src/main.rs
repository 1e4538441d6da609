mod audio;
mod config;
mod controller;
mod logging;
mod model;
mod view;

use std::io;
use anyhow::Result;
use std::time::Duration;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use audio::{AudioEngine, NullEngine, PlayerHandle, RodioEngine};
use config::AppConfig;
use controller::AppController;
use model::AppModel;
use view::AppView;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env();

    if let Err(e) = logging::init_logging(&config) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== Standard Music Starting ===");

    let (event_tx, event_rx) = mpsc::unbounded_channel();

    // Acquire the audio engine for the lifetime of the UI
    let mut audio_error = None;
    let engine: Box<dyn AudioEngine> = match RodioEngine::new(event_tx.clone(), &config) {
        Ok(engine) => Box::new(engine),
        Err(e) => {
            tracing::warn!(error = %e, "Audio output unavailable, playback disabled");
            let reason = format!("{:#}", e);
            audio_error = Some(reason.clone());
            Box::new(NullEngine::new(reason, event_tx))
        }
    };

    let mut controller = AppController::new(
        AppModel::new(),
        PlayerHandle::new(engine),
        event_rx,
        config.error_timeout,
    );

    if let Some(reason) = audio_error {
        controller.report_error(format!("Audio unavailable: {}", reason));
    }

    tracing::info!("Starting TUI...");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut controller, config.tick_rate);

    // Release audio before giving the terminal back
    controller.shutdown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
        return Err(err.into());
    }

    tracing::info!("Standard Music shutting down");
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    controller: &mut AppController,
    tick_rate: Duration,
) -> io::Result<()> {
    let mut snapshots = controller.subscribe();

    loop {
        controller.tick();

        // Always draw from the latest published snapshot
        let snapshot = snapshots.borrow_and_update().clone();
        let ui_state = controller.ui_state().clone();

        terminal.draw(|f| {
            AppView::render(f, &snapshot, &ui_state);
        })?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                controller.handle_key_event(key);
            }
        }

        if controller.should_quit() {
            break;
        }
    }

    Ok(())
}
