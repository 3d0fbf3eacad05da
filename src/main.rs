//! Clinic onboarding - terminal wizard collecting a medical center's setup
//!
//! Walks the center through five sections, validates each one on the way
//! forward, and submits the collected data with its documents to the
//! remote store.

mod app;
mod config;
mod error;
mod state;
mod submission;
mod ui;
mod wizard;

use anyhow::Result;
use app::App;
use config::WizardConfig;
use crossterm::{
    event::{Event, EventStream, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::{Stream, StreamExt};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;
use submission::StorageBackend;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let config = WizardConfig::load()?;
    init_logging(&config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config);
    let result = run_app(&mut terminal, &mut app).await;
    app.controller.cancellation_token().cancel();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        tracing::error!(error = ?err, "wizard exited with an error");
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Log to a file; the terminal belongs to the UI
fn init_logging(config: &WizardConfig) {
    let file = config.log_path().and_then(|path| open_log(&path).ok());
    let layer = file.map(|file| {
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(Mutex::new(file))
    });

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clinic_onboarding=info".into()),
        )
        .with(layer)
        .init();
}

fn open_log(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Key presses from the terminal; read errors are logged and skipped
fn key_presses() -> impl Stream<Item = KeyEvent> {
    EventStream::new().filter_map(|event| async move {
        match event {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => Some(key),
            Ok(_) => None,
            Err(err) => {
                tracing::warn!(error = %err, "failed to read terminal event");
                None
            }
        }
    })
}

async fn run_app<T, B>(terminal: &mut Terminal<T>, app: &mut App<B>) -> Result<()>
where
    T: ratatui::backend::Backend,
    B: StorageBackend,
{
    let mut keys = Box::pin(key_presses());
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // The frame above already shows the sending state
        if app.is_sending() {
            app.run_pending(&mut keys).await;
        } else {
            match tokio::time::timeout(Duration::from_millis(100), keys.next()).await {
                Ok(Some(key)) => app.handle_key(key),
                Ok(None) => return Ok(()),
                Err(_) => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
