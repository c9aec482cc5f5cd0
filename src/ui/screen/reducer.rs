use crate::calc::Params;
use crate::ui::mvi::Reducer;
use crate::ui::screen::intent::ScreenIntent;
use crate::ui::screen::state::{ScreenState, EDIT_BUFFER_MAX};

pub struct ScreenReducer;

impl Reducer for ScreenReducer {
    type State = ScreenState;
    type Intent = ScreenIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ScreenIntent::FocusNext => ScreenState {
                focused: state.focused.next(),
                edit: None,
                ..state
            },
            ScreenIntent::FocusPrev => ScreenState {
                focused: state.focused.prev(),
                edit: None,
                ..state
            },
            ScreenIntent::Nudge { steps } => {
                if state.is_editing() {
                    return state;
                }
                let mut params = state.params;
                let current = params.get(state.focused);
                let next = if current.is_finite() {
                    // Snap back to the 0.1 grid so repeated nudges don't
                    // accumulate binary residue.
                    let stepped = current + f64::from(steps) * 0.1;
                    ((stepped * 10.0).round() / 10.0).clamp(0.0, 100.0)
                } else {
                    // The slider cannot meaningfully move a NaN; recover to
                    // the parameter's default.
                    Params::default_pct(state.focused)
                };
                params.set(state.focused, next);
                ScreenState { params, ..state }
            }
            ScreenIntent::BeginEdit => {
                let current = state.params.get(state.focused);
                let buffer = if current.is_finite() {
                    format!("{:.1}", current)
                } else {
                    String::new()
                };
                ScreenState {
                    edit: Some(buffer),
                    ..state
                }
            }
            ScreenIntent::EditChar(ch) => {
                let ScreenState {
                    params,
                    focused,
                    edit,
                } = state;
                let edit = match edit {
                    Some(mut buffer) if buffer.len() < EDIT_BUFFER_MAX => {
                        buffer.push(ch);
                        Some(buffer)
                    }
                    other => other,
                };
                ScreenState {
                    params,
                    focused,
                    edit,
                }
            }
            ScreenIntent::EditBackspace => {
                let ScreenState {
                    params,
                    focused,
                    edit,
                } = state;
                let edit = edit.map(|mut buffer| {
                    buffer.pop();
                    buffer
                });
                ScreenState {
                    params,
                    focused,
                    edit,
                }
            }
            ScreenIntent::CommitEdit => {
                let ScreenState {
                    mut params,
                    focused,
                    edit,
                } = state;
                if let Some(buffer) = edit {
                    // Unclamped: non-numeric text parses to NaN and is
                    // stored as-is.
                    let value = buffer.trim().parse::<f64>().unwrap_or(f64::NAN);
                    params.set(focused, value);
                }
                ScreenState {
                    params,
                    focused,
                    edit: None,
                }
            }
            ScreenIntent::CancelEdit => ScreenState {
                edit: None,
                ..state
            },
            ScreenIntent::Reset => ScreenState {
                params: Params::default(),
                edit: None,
                ..state
            },
        }
    }
}
