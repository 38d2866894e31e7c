mod app;
mod render;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use app::{App, Command};
use dealmind::config::ClientConfig;
use dealmind::fetcher::Fetcher;
use dealmind::state::Session;

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> io::Result<()> {
    let cfg = ClientConfig::from_env();
    let fetcher = Fetcher::new(cfg.api_url).map_err(io::Error::other)?;
    let mut app = App::new(Session::default(), fetcher);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut app).await;

    // Restore terminal regardless of result
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

// ---------------------------------------------------------------------------
// Main event loop
// ---------------------------------------------------------------------------

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    app.start_load();

    loop {
        app.poll_load().await;
        terminal.draw(|f| render::render(f, app))?;

        // Poll faster while a fetch is in flight so its result shows promptly.
        let timeout = if app.is_loading() {
            Duration::from_millis(50)
        } else {
            Duration::from_millis(250)
        };
        if !event::poll(timeout)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let command = if is_interrupt(key.code, key.modifiers) {
                Command::Quit
            } else {
                app.handle_key(key.code)
            };
            match command {
                Command::Quit => {
                    app.cancel_load();
                    return Ok(());
                }
                Command::Reload => {
                    app.start_load();
                }
                Command::None => {}
            }
        }
    }
}

/// Raw mode delivers Ctrl-C as a key press rather than a signal.
fn is_interrupt(code: KeyCode, modifiers: KeyModifiers) -> bool {
    code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL)
}
