//! Application state
//!
//! A single owned value holding everything the session knows. All
//! transitions happen through the reducer (see `reducer.rs`); the view
//! layer only ever reads it.

use super::history::HistoryRing;

/// Independent cap on the expression field; the engine has its own guard,
/// but typing and pastes stop here first.
pub const MAX_INPUT_LEN: usize = 1000;

/// How long a notification stays on screen.
pub const NOTIFICATION_TTL_MS: u64 = 2000;

/// Which region receives keyboard input. Exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Options,
    History,
}

impl Focus {
    /// Circular order: Input -> Options -> History -> Input
    pub fn next(self) -> Self {
        match self {
            Focus::Input => Focus::Options,
            Focus::Options => Focus::History,
            Focus::History => Focus::Input,
        }
    }
}

/// Transient status message.
///
/// `seq` is the timer identity: an expiry event for an older seq must not
/// clear a newer notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub seq: u64,
}

/// Root application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Active input region
    pub focus: Focus,

    /// The cron expression being edited
    pub expression: String,

    /// IANA zone for run projection; fixed at launch
    pub timezone: Option<String>,

    /// Accept 6-field expressions with a seconds column
    pub allow_seconds: bool,

    /// Submitted expressions, newest first
    pub history: HistoryRing,

    /// Transient status message, if any
    pub notification: Option<Notification>,

    /// Help overlay visible?
    pub help_visible: bool,

    /// Id of the most recent clipboard read request; completions carrying
    /// an older id are stale and get discarded
    pub paste_seq: u64,

    /// Bumped when a clipboard write of the selected history entry is
    /// requested; the event loop watches this counter
    pub copy_seq: u64,

    /// Identity counter for notification timers
    pub notify_seq: u64,

    /// UI configuration
    pub config: UiConfig,
}

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Use colors?
    pub colors_enabled: bool,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        let colors_enabled = std::env::var("NO_COLOR").is_err()
            && std::env::var("CRONHUMAN_TUI_NO_COLOR").is_err();

        let tick_rate_ms = std::env::var("CRONHUMAN_TUI_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(100);

        Self {
            colors_enabled,
            tick_rate_ms,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            should_quit: false,
            focus: Focus::Input,
            expression: String::new(),
            timezone: None,
            allow_seconds: false,
            history: HistoryRing::new(),
            notification: None,
            help_visible: false,
            paste_seq: 0,
            copy_seq: 0,
            notify_seq: 0,
            config: UiConfig::default(),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycle_is_circular() {
        assert_eq!(Focus::Input.next(), Focus::Options);
        assert_eq!(Focus::Options.next(), Focus::History);
        assert_eq!(Focus::History.next(), Focus::Input);
    }

    #[test]
    fn test_three_cycles_return_to_origin() {
        for start in [Focus::Input, Focus::Options, Focus::History] {
            assert_eq!(start.next().next().next(), start);
        }
    }

    #[test]
    fn test_initial_state() {
        let state = AppState::new();
        assert_eq!(state.focus, Focus::Input);
        assert!(state.expression.is_empty());
        assert!(!state.allow_seconds);
        assert!(state.history.is_empty());
        assert!(state.notification.is_none());
        assert!(!state.should_quit);
    }
}
