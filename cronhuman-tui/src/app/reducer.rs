//! Pure reducer function for state transitions
//!
//! `(State, Action) -> State`, no side effects. Clipboard I/O is requested
//! by bumping the `paste_seq`/`copy_seq` counters; the event loop performs
//! the I/O and sends the completion back in as another action. Every action
//! in every state produces a valid state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::actions::Action;
use super::state::{AppState, Focus, Notification, MAX_INPUT_LEN};

/// Pure reducer function
///
/// Deterministic apart from the timestamp recorded on history entries;
/// tests can replay arbitrary action sequences against it.
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        // === UI events ===
        Action::Key(key) => handle_key(state, key),
        Action::Tick => state,
        Action::Resize(_, _) => state,

        // === Session ===
        Action::Quit => AppState {
            should_quit: true,
            ..state
        },

        Action::CycleFocus => AppState {
            focus: state.focus.next(),
            ..state
        },

        Action::ResetExpression => AppState {
            expression: String::new(),
            focus: Focus::Input,
            ..state
        },

        Action::ToggleHelp => AppState {
            help_visible: !state.help_visible,
            ..state
        },

        // === Input field ===
        Action::InputChar(c) => {
            if state.expression.chars().count() >= MAX_INPUT_LEN {
                return state;
            }
            let mut expression = state.expression;
            expression.push(c);
            AppState { expression, ..state }
        }

        Action::InputBackspace => {
            let mut expression = state.expression;
            expression.pop();
            AppState { expression, ..state }
        }

        Action::InputSubmit => {
            let mut state = state;
            let expression = state.expression.clone();
            state.history.append(&expression);
            state
        }

        // === Options ===
        Action::ToggleSeconds => AppState {
            allow_seconds: !state.allow_seconds,
            ..state
        },

        // === History ===
        Action::HistoryUp => {
            let mut state = state;
            state.history.move_cursor(-1);
            state
        }

        Action::HistoryDown => {
            let mut state = state;
            state.history.move_cursor(1);
            state
        }

        Action::HistoryLoad => match state.history.selected() {
            Some(entry) => {
                let expression = entry.expression.clone();
                AppState {
                    expression,
                    focus: Focus::Input,
                    ..state
                }
            }
            None => state,
        },

        Action::CopyRequested => {
            if state.focus == Focus::History && state.history.selected().is_some() {
                AppState {
                    copy_seq: state.copy_seq + 1,
                    ..state
                }
            } else {
                state
            }
        }

        // === Clipboard bridge ===
        Action::PasteRequested => {
            if state.focus != Focus::Input {
                return state;
            }
            AppState {
                paste_seq: state.paste_seq + 1,
                ..state
            }
        }

        Action::PasteCompleted { request, result } => {
            if request != state.paste_seq {
                // A newer paste superseded this one; drop the stale result
                return state;
            }
            match result {
                Ok(text) => {
                    let text = text.trim();
                    if text.is_empty() {
                        return state;
                    }
                    let expression: String = text.chars().take(MAX_INPUT_LEN).collect();
                    notify(AppState { expression, ..state }, "Pasted from clipboard!")
                }
                Err(e) => notify(state, format!("Paste failed: {e}")),
            }
        }

        Action::CopyCompleted { result } => match result {
            Ok(()) => notify(state, "Copied to clipboard!"),
            Err(e) => notify(state, format!("Copy failed: {e}")),
        },

        // === Notifications ===
        Action::Notify(message) => notify(state, message),

        Action::NotificationExpired { seq } => {
            if state.notification.as_ref().map(|n| n.seq) == Some(seq) {
                AppState {
                    notification: None,
                    ..state
                }
            } else {
                // An older timer must not clear a newer notification
                state
            }
        }
    }
}

/// Replace any pending notification; the new seq restarts the countdown.
fn notify(state: AppState, message: impl Into<String>) -> AppState {
    let seq = state.notify_seq + 1;
    AppState {
        notification: Some(Notification {
            message: message.into(),
            seq,
        }),
        notify_seq: seq,
        ..state
    }
}

/// Map keys to semantic actions. This is where keybindings are defined.
fn handle_key(state: AppState, key: KeyEvent) -> AppState {
    // Global keybindings take priority over focus-scoped ones. A bare `q`
    // quits only outside the input field, so the letter stays typeable.
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            return reduce(state, Action::Quit);
        }
        (KeyCode::Char('q'), KeyModifiers::NONE) if state.focus != Focus::Input => {
            return reduce(state, Action::Quit);
        }
        (KeyCode::Tab, _) => {
            return reduce(state, Action::CycleFocus);
        }
        (KeyCode::F(1), _) => {
            return reduce(state, Action::ToggleHelp);
        }
        (KeyCode::Esc, _) if state.help_visible => {
            return reduce(state, Action::ToggleHelp);
        }
        (KeyCode::Char('r'), KeyModifiers::CONTROL) => {
            return reduce(state, Action::ResetExpression);
        }
        (KeyCode::Char('v'), KeyModifiers::CONTROL) if state.focus == Focus::Input => {
            return reduce(state, Action::PasteRequested);
        }
        _ => {}
    }

    match state.focus {
        Focus::Input => handle_input_key(state, key),
        Focus::Options => handle_options_key(state, key),
        Focus::History => handle_history_key(state, key),
    }
}

fn handle_input_key(state: AppState, key: KeyEvent) -> AppState {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            reduce(state, Action::InputChar(c))
        }
        KeyCode::Backspace => reduce(state, Action::InputBackspace),
        KeyCode::Enter => reduce(state, Action::InputSubmit),
        _ => state,
    }
}

fn handle_options_key(state: AppState, key: KeyEvent) -> AppState {
    match key.code {
        KeyCode::Char(' ') => reduce(state, Action::ToggleSeconds),
        _ => state,
    }
}

fn handle_history_key(state: AppState, key: KeyEvent) -> AppState {
    match key.code {
        KeyCode::Up => reduce(state, Action::HistoryUp),
        KeyCode::Down => reduce(state, Action::HistoryDown),
        KeyCode::Enter => reduce(state, Action::HistoryLoad),
        KeyCode::Char('c') if key.modifiers == KeyModifiers::NONE => {
            reduce(state, Action::CopyRequested)
        }
        _ => state,
    }
}
