use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One finalized work session.
///
/// Created exactly once when a session leaves `Running` or `Finished`,
/// never mutated afterwards. `note` is present if and only if the session
/// was stopped before the countdown reached zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Unique within one history (epoch milliseconds, bumped on collision).
    pub id: i64,
    /// Planned duration in minutes, 1-180.
    pub duration_min: u32,
    /// When the record was finalized.
    pub finished_at: DateTime<Local>,
    /// True iff the countdown reached zero naturally.
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl SessionRecord {
    /// Finalize a session outcome into a record.
    ///
    /// An early stop (`completed == false`) gets a note with the elapsed
    /// whole minutes; a natural completion carries no note.
    pub fn finalize(
        id: i64,
        duration_min: u32,
        finished_at: DateTime<Local>,
        completed: bool,
        elapsed_min: u32,
    ) -> Self {
        let note = if completed {
            None
        } else {
            Some(format!("{elapsed_min} minutes worked"))
        };
        Self {
            id,
            duration_min,
            finished_at,
            completed,
            note,
        }
    }
}
