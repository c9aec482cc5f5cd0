use crate::calc::Params;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;

/// Run the calculator screen until the user quits.
///
/// Every pass through the loop redraws from current state; derived values
/// are recomputed inside `draw`, so any committed input is visible on the
/// very next frame.
pub fn run(params: Params, population: i64, tick_rate: Duration) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(params, population);
    let events = EventHandler::new(tick_rate);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => {}
            // The next draw reads the new frame size; nothing to store.
            Ok(AppEvent::Resize(_, _)) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
