use std::io;

use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use appraise::app::{App, AppMessage};
use appraise::config::Config;
use appraise::ui;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "--version") {
        println!("appraise {}", VERSION);
        std::process::exit(0);
    }

    color_eyre::install()?;
    setup_panic_hook();

    let config = Config::from_env()?;
    init_logging(&config)?;

    let runtime = tokio::runtime::Runtime::new()?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let (message_tx, message_rx) = mpsc::unbounded_channel();
    let mut app = App::new(config, message_tx);

    let result = runtime.block_on(run_app(&mut terminal, &mut app, message_rx));

    restore_terminal(&mut terminal)?;
    result
}

/// Send logs to a file when one is configured; the terminal belongs to
/// the TUI.
fn init_logging(config: &Config) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(file)
        .with_ansi(false)
        .init();
    Ok(())
}

/// Setup panic hook to restore terminal on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = execute!(io::stdout(), Show);
        original_hook(panic_info);
    }));
}

fn restore_terminal<B: ratatui::backend::Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    mut message_rx: mpsc::UnboundedReceiver<AppMessage>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // The interview starts itself; the user never types the kickoff.
    app.start_assessment();

    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        tokio::select! {
            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(err)) => {
                        tracing::error!("terminal event error: {err}");
                    }
                    None => return Ok(()),
                }
            }
            msg = message_rx.recv() => {
                match msg {
                    Some(msg) => app.handle_message(msg),
                    None => return Ok(()),
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
