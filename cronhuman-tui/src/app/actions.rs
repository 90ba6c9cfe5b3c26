//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions. Raw key events arrive as
//! `Action::Key` and are routed to the semantic actions by the reducer;
//! clipboard completions re-enter the loop as actions of their own.

use crossterm::event::KeyEvent;

/// Actions that trigger state transitions
#[derive(Debug, Clone)]
pub enum Action {
    // === UI events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Periodic tick (drives the notification timer)
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Session ===
    /// Quit the application
    Quit,

    /// Advance focus: Input -> Options -> History -> Input
    CycleFocus,

    /// Clear the expression and return focus to the input field
    ResetExpression,

    /// Show or hide the help overlay
    ToggleHelp,

    // === Input field ===
    /// Append a character to the expression
    InputChar(char),

    /// Delete the last character of the expression
    InputBackspace,

    /// Submit the expression to history
    InputSubmit,

    // === Options ===
    /// Flip the 6-field/seconds toggle
    ToggleSeconds,

    // === History ===
    /// Move the history cursor toward newer entries
    HistoryUp,

    /// Move the history cursor toward older entries
    HistoryDown,

    /// Load the selected history entry into the input field
    HistoryLoad,

    /// Request a clipboard write of the selected history entry
    CopyRequested,

    // === Clipboard bridge ===
    /// Request a clipboard read into the expression (input focus only)
    PasteRequested,

    /// A clipboard read finished; `request` ties it to the issuing
    /// `PasteRequested` so stale completions can be discarded
    PasteCompleted {
        request: u64,
        result: Result<String, String>,
    },

    /// A clipboard write finished
    CopyCompleted { result: Result<(), String> },

    // === Notifications ===
    /// Show a transient status message
    Notify(String),

    /// The timer for notification `seq` elapsed
    NotificationExpired { seq: u64 },
}
