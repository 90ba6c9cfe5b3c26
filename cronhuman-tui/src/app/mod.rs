//! Application module
//!
//! The session state machine:
//! - Actions: what can happen
//! - State: what is true right now
//! - Reducer: pure function (State, Action) -> State
//! - History: the bounded expression ring
//!
//! Every mutation flows through the reducer; side effects (clipboard I/O,
//! the notification timer) are requested via state counters and performed
//! by the event loop.

pub mod actions;
pub mod event;
pub mod history;
pub mod reducer;
pub mod state;

// Re-export commonly used types
pub use actions::Action;
pub use history::{HistoryEntry, HistoryRing, HISTORY_CAPACITY};
pub use reducer::reduce;
pub use state::{AppState, Focus, Notification, UiConfig, MAX_INPUT_LEN, NOTIFICATION_TTL_MS};
