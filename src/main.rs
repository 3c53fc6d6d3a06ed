// Main entry point - CLI parsing, dependency wiring and the terminal loop
use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use opsdeck::application::controller::{AppController, Msg};
use opsdeck::infrastructure::config::load_console_config;
use opsdeck::infrastructure::http_gateway::HttpGateway;
use opsdeck::presentation::input::{self, Gesture};
use opsdeck::presentation::screen::ScreenState;
use opsdeck::presentation::ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, sync::Arc, time::Duration};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

/// Console CLI arguments
#[derive(Parser)]
#[command(name = "opsdeck")]
#[command(about = "Terminal operator console: dashboard, settings editor and log feed")]
#[command(version)]
struct Args {
    /// Backend base URL (overrides the config file)
    #[arg(long)]
    backend: Option<String>,

    /// Initial view: settings or logs (anything else opens the dashboard)
    #[arg(long)]
    view: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // The terminal surface owns stdout, so tracing writes to a file.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(|| {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open("/tmp/opsdeck.log")
                .unwrap()
        })
        .init();

    let config = load_console_config()?;
    let base_url = args.backend.unwrap_or(config.backend.base_url);
    tracing::debug!("opsdeck v{} starting against {}", env!("CARGO_PKG_VERSION"), base_url);

    // Wire the core: gateway (infrastructure) feeding the controller
    // (application) through the completion channel.
    let gateway = Arc::new(HttpGateway::new(base_url));
    let (completions_tx, completions_rx) = mpsc::unbounded_channel();
    let mut controller = AppController::new(gateway, completions_tx);

    let view_hint = args.view.or(config.ui.initial_view);
    controller.startup(view_hint.as_deref());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut controller, completions_rx, config.ui.tick_ms).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        tracing::error!("console loop failed: {:?}", err);
    }
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    controller: &mut AppController,
    mut completions: mpsc::UnboundedReceiver<Msg>,
    tick_ms: u64,
) -> Result<()> {
    let mut screen = ScreenState::new();

    loop {
        terminal.draw(|frame| ui::draw(frame, controller, &screen))?;

        // Apply completed remote calls one at a time; panel state is only
        // ever touched here and in key handling below.
        while let Ok(msg) = completions.try_recv() {
            controller.apply(msg);
        }

        if event::poll(Duration::from_millis(tick_ms))? {
            if let Event::Key(key) = event::read()? {
                match input::translate(key.code, &mut screen, controller) {
                    Gesture::Quit => return Ok(()),
                    Gesture::Dispatch(action) => controller.handle(action),
                    Gesture::Noop => {}
                }
            }
        }
    }
}
