//! Terminal lifecycle, event loop, and cleanup for the Recs TUI.

mod actions;
mod app;
mod backend;
mod events;
mod services;
mod state;
mod ui;

use std::io;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use app::App;
use backend::BackendClient;
use events::{key_to_action, TICK_RATE};

fn main() -> Result<()> {
    init_logging()?;

    let base_url =
        std::env::var("RECS_BASE_URL").unwrap_or_else(|_| "http://127.0.0.1:5000".into());

    // Requests run on this runtime; outcomes come back over a channel
    // drained by the event loop.
    let runtime = tokio::runtime::Runtime::new()?;

    // Set up the terminal in raw / alternate-screen mode.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, DisableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.show_cursor()?;

    let mut app = App::new(
        BackendClient::new(base_url),
        runtime.handle().clone(),
        SmallRng::from_entropy(),
    );
    app.bootstrap();

    let result = run_loop(&mut terminal, &mut app);

    // Always restore the terminal, even on error.
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    result
}

/// Structured logging (RUST_LOG controls the filter). RECS_LOG points the
/// output at a file so it does not draw over the alternate screen.
fn init_logging() -> Result<()> {
    let filter = EnvFilter::from_default_env().add_directive("recs_tui=info".parse()?);
    if let Ok(path) = std::env::var("RECS_LOG") {
        let file = std::fs::File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(false)
            .with_writer(file)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(io::stderr)
            .init();
    }
    Ok(())
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.tick = app.tick.wrapping_add(1);
        app.poll_results();

        if app.should_quit {
            return Ok(());
        }

        let tick = app.tick;
        terminal.draw(|frame| ui::render(frame, app, tick))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                if let Some(a) = key_to_action(&key, app.input_empty()) {
                    app.dispatch(a);
                    if app.should_quit {
                        return Ok(());
                    }
                }
            }
        }
    }
}
