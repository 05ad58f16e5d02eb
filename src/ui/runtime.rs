use crate::api::HttpTelemetryApi;
use crate::config::Config;
use crate::sync::{run_sync_worker, SyncController, COMMAND_QUEUE_DEPTH};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Run the dashboard until the user quits.
///
/// The UI loop owns the main thread; HTTP work runs on a tokio runtime in
/// a single worker task fed through a bounded command queue.
pub fn run(config: &Config) -> anyhow::Result<()> {
    let api = HttpTelemetryApi::new(&config.api)?;
    let endpoint = api.collection_url().to_string();
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()?;

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = config.ui.tick_rate();
    let events = EventHandler::new(tick_rate);

    let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE_DEPTH);
    let controller = SyncController::new(Arc::new(api));
    runtime.spawn(run_sync_worker(controller, command_rx, events.sender()));

    let mut app = App::new(endpoint);
    app.set_command_sender(command_tx);
    app.request_refresh();
    tracing::info!(endpoint = %app.endpoint(), "Dashboard started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            // Layout is recomputed from the frame area on every draw.
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::Sync(event)) => app.on_sync_event(event),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    runtime.shutdown_timeout(Duration::from_millis(500));
    tracing::info!("Dashboard stopped");
    Ok(())
}
