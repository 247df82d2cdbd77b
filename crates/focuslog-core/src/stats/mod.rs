//! Statistics engine.
//!
//! Pure functions over a history snapshot and a reference "now". Nothing
//! here mutates state or touches storage:
//! - per-period aggregates (today / week / month / all-time)
//! - most-productive-hour detection
//! - display grouping by day

mod day_groups;
mod hours;
mod periods;

pub use day_groups::{format_day, group_by_day, DayGroup};
pub use hours::most_productive_hours;
pub use periods::{period_stats, summary, PeriodStats, StatsSummary, Window};
