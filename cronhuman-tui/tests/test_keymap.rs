//! Test keybinding mappings to state transitions
//!
//! Drives the reducer with raw key events, the same way the event loop
//! does, and checks the routing per focus region.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use cronhuman_tui::app::{reduce, Action, AppState, Focus};

fn key(code: KeyCode, modifiers: KeyModifiers) -> Action {
    Action::Key(KeyEvent::new(code, modifiers))
}

fn type_str(mut state: AppState, text: &str) -> AppState {
    for c in text.chars() {
        state = reduce(state, key(KeyCode::Char(c), KeyModifiers::NONE));
    }
    state
}

#[test]
fn test_ctrl_c_quits_everywhere() {
    for focus in [Focus::Input, Focus::Options, Focus::History] {
        let mut state = AppState::new();
        state.focus = focus;
        let state = reduce(state, key(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(state.should_quit, "Ctrl+C should quit from {focus:?}");
    }
}

#[test]
fn test_q_types_into_input_instead_of_quitting() {
    let state = AppState::new();
    assert_eq!(state.focus, Focus::Input);

    let state = reduce(state, key(KeyCode::Char('q'), KeyModifiers::NONE));
    assert!(!state.should_quit);
    assert_eq!(state.expression, "q");
}

#[test]
fn test_q_quits_outside_input() {
    for focus in [Focus::Options, Focus::History] {
        let mut state = AppState::new();
        state.focus = focus;
        let state = reduce(state, key(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(state.should_quit, "q should quit from {focus:?}");
    }
}

#[test]
fn test_tab_cycles_focus_circularly() {
    let mut state = AppState::new();
    let tab = || key(KeyCode::Tab, KeyModifiers::NONE);

    state = reduce(state, tab());
    assert_eq!(state.focus, Focus::Options);
    state = reduce(state, tab());
    assert_eq!(state.focus, Focus::History);
    state = reduce(state, tab());
    assert_eq!(state.focus, Focus::Input);
}

#[test]
fn test_typing_updates_expression() {
    let state = type_str(AppState::new(), "*/5 * * * *");
    assert_eq!(state.expression, "*/5 * * * *");

    let state = reduce(state, key(KeyCode::Backspace, KeyModifiers::NONE));
    assert_eq!(state.expression, "*/5 * * * ");
}

#[test]
fn test_shifted_characters_still_insert() {
    // Terminals report '*' with the shift modifier set
    let state = reduce(
        AppState::new(),
        Action::Key(KeyEvent::new(KeyCode::Char('*'), KeyModifiers::SHIFT)),
    );
    assert_eq!(state.expression, "*");
}

#[test]
fn test_ctrl_r_resets_and_refocuses_input() {
    let mut state = type_str(AppState::new(), "0 12 * * *");
    state.focus = Focus::History;

    let state = reduce(state, key(KeyCode::Char('r'), KeyModifiers::CONTROL));
    assert!(state.expression.is_empty());
    assert_eq!(state.focus, Focus::Input);
}

#[test]
fn test_space_toggles_seconds_only_in_options() {
    // In the input field, space is just a character
    let state = reduce(AppState::new(), key(KeyCode::Char(' '), KeyModifiers::NONE));
    assert!(!state.allow_seconds);
    assert_eq!(state.expression, " ");

    let mut state = AppState::new();
    state.focus = Focus::Options;
    let state = reduce(state, key(KeyCode::Char(' '), KeyModifiers::NONE));
    assert!(state.allow_seconds);
}

#[test]
fn test_enter_submits_to_history_from_input() {
    let state = type_str(AppState::new(), "*/5 * * * *");
    let state = reduce(state, key(KeyCode::Enter, KeyModifiers::NONE));
    assert_eq!(state.history.len(), 1);
    assert_eq!(state.history.entries()[0].expression, "*/5 * * * *");
}

#[test]
fn test_enter_with_blank_expression_records_nothing() {
    let state = type_str(AppState::new(), "   ");
    let state = reduce(state, key(KeyCode::Enter, KeyModifiers::NONE));
    assert!(state.history.is_empty());
}

#[test]
fn test_history_arrows_clamp() {
    let mut state = AppState::new();
    for expr in ["a * * * *", "b * * * *", "c * * * *"] {
        state.history.append(expr);
    }
    state.focus = Focus::History;

    // Up at the top is a no-op
    let state = reduce(state, key(KeyCode::Up, KeyModifiers::NONE));
    assert_eq!(state.history.cursor(), 0);

    let mut state = state;
    for _ in 0..10 {
        state = reduce(state, key(KeyCode::Down, KeyModifiers::NONE));
    }
    assert_eq!(state.history.cursor(), 2);
}

#[test]
fn test_history_enter_loads_selection() {
    let mut state = AppState::new();
    state.history.append("0 9 * * 1-5");
    state.focus = Focus::History;

    let state = reduce(state, key(KeyCode::Enter, KeyModifiers::NONE));
    assert_eq!(state.expression, "0 9 * * 1-5");
    assert_eq!(state.focus, Focus::Input);
}

#[test]
fn test_c_copies_only_in_history_focus() {
    let mut state = AppState::new();
    state.history.append("*/5 * * * *");

    // In the input field, 'c' is a character
    let state = reduce(state, key(KeyCode::Char('c'), KeyModifiers::NONE));
    assert_eq!(state.copy_seq, 0);
    assert_eq!(state.expression, "c");

    let mut state = state;
    state.focus = Focus::History;
    let state = reduce(state, key(KeyCode::Char('c'), KeyModifiers::NONE));
    assert_eq!(state.copy_seq, 1);
}

#[test]
fn test_ctrl_v_requests_paste_only_in_input() {
    let state = reduce(AppState::new(), key(KeyCode::Char('v'), KeyModifiers::CONTROL));
    assert_eq!(state.paste_seq, 1);

    let mut state = AppState::new();
    state.focus = Focus::Options;
    let state = reduce(state, key(KeyCode::Char('v'), KeyModifiers::CONTROL));
    assert_eq!(state.paste_seq, 0);
}

#[test]
fn test_f1_toggles_help_and_esc_closes_it() {
    let state = reduce(AppState::new(), key(KeyCode::F(1), KeyModifiers::NONE));
    assert!(state.help_visible);

    let state = reduce(state, key(KeyCode::Esc, KeyModifiers::NONE));
    assert!(!state.help_visible);
}

#[test]
fn test_unbound_keys_are_total_no_ops() {
    // Arbitrary keys in every focus must neither crash nor mutate
    for focus in [Focus::Input, Focus::Options, Focus::History] {
        let mut state = AppState::new();
        state.focus = focus;
        let before_expression = state.expression.clone();

        for code in [
            KeyCode::Home,
            KeyCode::End,
            KeyCode::PageUp,
            KeyCode::Insert,
            KeyCode::F(12),
            KeyCode::Left,
            KeyCode::Right,
        ] {
            let next = reduce(state.clone(), key(code, KeyModifiers::NONE));
            assert!(!next.should_quit);
            assert_eq!(next.expression, before_expression);
            assert_eq!(next.focus, focus);
        }
    }
}
