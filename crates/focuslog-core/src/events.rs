use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::session::Phase;

/// Every observable state change produces an Event.
/// Hosts render or forward them; the core never prints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// Entered duration editing; carries the minutes currently shown.
    EditOpened { current_min: u32 },
    /// A new planned duration was accepted.
    DurationSet { minutes: u32 },
    SessionStarted {
        remaining_secs: u32,
        at: DateTime<Local>,
    },
    /// A running session was stopped by the user.
    SessionStopped {
        duration_min: u32,
        elapsed_min: u32,
        completed: bool,
        at: DateTime<Local>,
    },
    /// The countdown reached zero naturally.
    SessionFinished {
        duration_min: u32,
        at: DateTime<Local>,
    },
    /// Finished display window elapsed; countdown reset to the planned value.
    SessionReset { at: DateTime<Local> },
    DeleteRequested { at: DateTime<Local> },
    DeleteCancelled { at: DateTime<Local> },
    HistoryCleared { at: DateTime<Local> },
    StateSnapshot {
        phase: Phase,
        planned_min: u32,
        remaining_secs: u32,
        at: DateTime<Local>,
    },
}
