use devsim::adapters::{ReqwestHttpClient, SystemBrowser, TungsteniteConnector};
use devsim::app::{start_incident_stream, App, AppMessage};
use devsim::cli::{parse_args, resolve_run, run_cli_command};
use devsim::startup::{init_logging, DashboardConfig, Endpoints};
use devsim::terminal::{setup_panic_hook, TerminalManager};
use devsim::traits::{BrowserOpener, HttpClient, WsConnector};
use devsim::ui;
use devsim::websocket::FixedDelay;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Exit code for invalid arguments or configuration.
const EXIT_USAGE: i32 = 2;

fn main() -> Result<()> {
    let options = match parse_args(std::env::args()) {
        Ok(command) => run_cli_command(command),
        Err(e) => {
            eprintln!("devsim: {}\n\nRun `devsim --help` for usage.", e);
            std::process::exit(EXIT_USAGE);
        }
    };

    color_eyre::install()?;

    let log_path = init_logging();

    let (config, endpoints) = match resolve_run(&options) {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("devsim: {}", e);
            std::process::exit(EXIT_USAGE);
        }
    };

    info!(
        "devsim {} starting against {} ({} scenarios)",
        devsim::cli::VERSION,
        endpoints.origin,
        config.scenarios.len()
    );
    if let Some(path) = &log_path {
        info!("Logging to {}", path.display());
    }

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(config, endpoints))
}

async fn run(config: DashboardConfig, endpoints: Endpoints) -> Result<()> {
    let http: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::new());
    let browser: Arc<dyn BrowserOpener> = Arc::new(SystemBrowser);
    let connector: Arc<dyn WsConnector> = Arc::new(TungsteniteConnector::new());

    let events_url = endpoints.events_url.clone();
    let mut app = App::new(config.scenarios.clone(), endpoints, http, browser);

    let mut term_manager = TerminalManager::new()?;

    let stream = start_incident_stream(
        connector,
        &events_url,
        Arc::new(FixedDelay::new(config.reconnect_delay)),
        app.message_tx.clone(),
    );

    let result = run_app(term_manager.terminal(), &mut app).await;

    stream.shutdown();
    term_manager.restore();
    if let Err(e) = &result {
        warn!("Dashboard loop ended with error: {}", e);
    }
    info!("devsim exiting");
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Create async event stream for keyboard and mouse input
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: mpsc::UnboundedReceiver<AppMessage> = match app.message_rx.take() {
        Some(rx) => rx,
        None => return Ok(()),
    };

    loop {
        // Draw the UI only when needed (dirty flag)
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Mouse(mouse))) => app.handle_mouse(mouse),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        warn!("Terminal event error: {}", e);
                    }
                    // Input closed
                    None => app.quit(),
                }
            }

            Some(msg) = message_rx.recv() => {
                app.handle_message(msg);
                // Drain whatever else is queued before the next draw
                while let Ok(msg) = message_rx.try_recv() {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
