use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Instant;

use crate::shutdown::ShutdownHandle;
use crate::ui::app::{App, Page};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Run the terminal UI until the user quits or a signal arrives.
pub fn run(mut app: App, start: Page, shutdown: ShutdownHandle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = app.tick_rate();
    let events = EventHandler::new(tick_rate, shutdown.clone());
    app.navigate(start);
    tracing::info!(?start, tick_ms = tick_rate.as_millis() as u64, "ui started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() || shutdown.is_shutting_down() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key, Instant::now()),
            Ok(AppEvent::Tick) => app.on_tick(Instant::now()),
            // The next draw picks up the new size
            Ok(AppEvent::Resize(cols, rows)) => tracing::debug!(cols, rows, "resize"),
            Ok(AppEvent::Shutdown) => break,
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    shutdown.signal();
    drop(guard);
    tracing::info!("ui stopped");
    Ok(())
}
