use crate::ui::app::App;
use crate::ui::screen::ScreenIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Slider steps per keypress, in tenths of a percentage point.
const FINE_STEPS: i32 = 1;
const COARSE_STEPS: i32 = 10;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    // Edit mode captures printable keys before any hotkey below.
    if app.screen().is_editing() {
        match key.code {
            KeyCode::Enter => app.dispatch(ScreenIntent::CommitEdit),
            KeyCode::Esc => app.dispatch(ScreenIntent::CancelEdit),
            KeyCode::Backspace => app.dispatch(ScreenIntent::EditBackspace),
            KeyCode::Tab => {
                app.dispatch(ScreenIntent::CommitEdit);
                app.dispatch(ScreenIntent::FocusNext);
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.dispatch(ScreenIntent::EditChar(ch));
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.request_quit(),
        KeyCode::Tab | KeyCode::Down => app.dispatch(ScreenIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => app.dispatch(ScreenIntent::FocusPrev),
        KeyCode::Left => app.dispatch(ScreenIntent::Nudge {
            steps: -steps_for(key.modifiers),
        }),
        KeyCode::Right => app.dispatch(ScreenIntent::Nudge {
            steps: steps_for(key.modifiers),
        }),
        KeyCode::Enter | KeyCode::Char('e') | KeyCode::Char('E') => {
            app.dispatch(ScreenIntent::BeginEdit);
        }
        KeyCode::Char('r') | KeyCode::Char('R') => app.dispatch(ScreenIntent::Reset),
        _ => {}
    }
}

fn steps_for(modifiers: KeyModifiers) -> i32 {
    if modifiers.contains(KeyModifiers::SHIFT) {
        COARSE_STEPS
    } else {
        FINE_STEPS
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
