//! UI Showcase - terminal showcase of interactive UI components.
//!
//! Responsibilities:
//! - Orchestrate application startup and shutdown.
//! - Initialize logging, configuration, the terminal and the async runtime.
//! - Run the main event loop.
//!
//! Does NOT handle:
//! - Navigation or widget behavior (see `app` and `widgets`).
//! - Configuration validation (see `showcase_config`).
//!
//! Invariants:
//! - The TUI enters raw mode and alternate screen on startup and the
//!   `TerminalGuard` restores it on every exit path.
//! - `load_dotenv()` is called at startup to support `.env` configuration.
//! - Configuration precedence: CLI args > env vars > defaults.
//! - Mouse capture is enabled by default unless `--no-mouse` is specified.

use anyhow::{Context, Result};
use clap::Parser;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc::channel;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use showcase_config::ConfigLoader;
use showcase_config::constants::DEFAULT_CHANNEL_CAPACITY;
use ui_showcase::action::Action;
use ui_showcase::app::App;
use ui_showcase::cli::Cli;
use ui_showcase::runtime::events::EventHub;
use ui_showcase::runtime::input::spawn_input_task;
use ui_showcase::runtime::terminal::TerminalGuard;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    std::fs::create_dir_all(&cli.log_dir)
        .with_context(|| format!("Failed to create log directory {}", cli.log_dir.display()))?;

    // The terminal belongs to the UI, so logs only go to the rolling file.
    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, "ui-showcase.log");
    let (non_blocking, _guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    let loader = ConfigLoader::new()
        .load_dotenv()
        .context("Failed to load .env file")?;
    let config = cli
        .apply_to(loader)
        .from_env()
        .and_then(|loader| loader.build())
        .context("Invalid configuration")?;
    tracing::info!(
        theme = config.theme.key(),
        tick_ms = config.tick_interval.as_millis() as u64,
        share_base_url = %config.share_base_url,
        start = config.start_fragment.as_deref().unwrap_or(""),
        "Starting ui-showcase"
    );

    let _terminal_guard = TerminalGuard::enter(cli.no_mouse).context("Failed to set up terminal")?;
    let backend = CrosstermBackend::new(std::io::stdout());
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let hub = EventHub::new();
    let (tx, mut rx) = channel::<Action>(DEFAULT_CHANNEL_CAPACITY);
    let mut app = App::new(&config, hub.clone());
    app.mount(tx);

    let size = terminal.size().context("Failed to read terminal size")?;
    app.update(Action::Resize(size.width, size.height));

    let task_tracker = TaskTracker::new();
    let cancel = CancellationToken::new();
    spawn_input_task(&task_tracker, hub, cancel.clone());

    let mut tick_interval = tokio::time::interval(config.tick_interval);
    tick_interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        terminal.draw(|f| app.render(f))?;

        tokio::select! {
            Some(action) = rx.recv() => {
                app.update(action);
            }
            _ = tick_interval.tick() => {
                app.update(Action::Tick);
            }
        }

        if app.should_quit() {
            break;
        }
    }

    app.unmount();
    cancel.cancel();
    task_tracker.close();
    task_tracker.wait().await;
    tracing::info!("Shutdown complete");

    terminal.show_cursor()?;
    Ok(())
}
