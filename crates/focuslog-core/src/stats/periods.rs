//! Per-period aggregates.
//!
//! Windows are anchored at local midnight of the reference "now": the week
//! is seven days before that, the month is the same day-of-month one
//! calendar month prior (clamped to a valid date by calendar arithmetic).
//! Comparisons happen in naive local time so the window boundaries follow
//! the user's clock.

use chrono::{DateTime, Duration, Local, Months, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::session::SessionRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Window {
    Today,
    Week,
    Month,
    All,
}

impl Window {
    /// Lower bound of the window, `None` for all-time.
    pub fn start(&self, now: DateTime<Local>) -> Option<NaiveDateTime> {
        let midnight = now.date_naive().and_time(NaiveTime::MIN);
        match self {
            Window::Today => Some(midnight),
            Window::Week => Some(midnight - Duration::days(7)),
            Window::Month => {
                let date = now
                    .date_naive()
                    .checked_sub_months(Months::new(1))
                    .unwrap_or_else(|| now.date_naive());
                Some(date.and_time(NaiveTime::MIN))
            }
            Window::All => None,
        }
    }
}

/// Aggregates over one window of the history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodStats {
    /// Records in the window, completed or not.
    pub total: usize,
    /// Records whose countdown reached zero naturally.
    pub completed: usize,
    /// Sum of planned minutes over completed records only.
    pub total_minutes: u64,
}

impl PeriodStats {
    /// Completion percentage rounded to the nearest integer.
    /// Zero (never NaN) when the window is empty.
    pub fn completion_rate(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.completed as f64 / self.total as f64) * 100.0).round() as u32
    }
}

/// All standard windows at once.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct StatsSummary {
    pub today: PeriodStats,
    pub week: PeriodStats,
    pub month: PeriodStats,
    pub all: PeriodStats,
}

/// Aggregate the records whose finalization instant falls inside `window`.
///
/// Incomplete sessions count towards `total` but never contribute minutes.
pub fn period_stats(history: &[SessionRecord], now: DateTime<Local>, window: Window) -> PeriodStats {
    let start = window.start(now);
    let mut stats = PeriodStats::default();
    for record in history {
        if let Some(start) = start {
            if record.finished_at.naive_local() < start {
                continue;
            }
        }
        stats.total += 1;
        if record.completed {
            stats.completed += 1;
            stats.total_minutes += u64::from(record.duration_min);
        }
    }
    stats
}

pub fn summary(history: &[SessionRecord], now: DateTime<Local>) -> StatsSummary {
    StatsSummary {
        today: period_stats(history, now, Window::Today),
        week: period_stats(history, now, Window::Week),
        month: period_stats(history, now, Window::Month),
        all: period_stats(history, now, Window::All),
    }
}
