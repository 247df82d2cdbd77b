//! Most-productive-hour detection.

use chrono::Timelike;

use crate::session::SessionRecord;

/// Hours of day (0-23) in which completed sessions cluster.
///
/// Completed records are bucketed by the local hour of their finalization
/// instant. Hours whose count exceeds 70% of the busiest hour qualify,
/// ordered by count descending; ties keep hour-ascending order (stable
/// sort). Empty when the history holds no completed records.
pub fn most_productive_hours(history: &[SessionRecord]) -> Vec<u32> {
    let mut buckets = [0u32; 24];
    for record in history.iter().filter(|r| r.completed) {
        buckets[record.finished_at.hour() as usize] += 1;
    }

    let max = buckets.iter().copied().max().unwrap_or(0);
    if max == 0 {
        return Vec::new();
    }
    let threshold = f64::from(max) * 0.7;

    let mut hours: Vec<(u32, u32)> = buckets
        .iter()
        .enumerate()
        .filter(|&(_, &count)| f64::from(count) > threshold)
        .map(|(hour, &count)| (hour as u32, count))
        .collect();
    hours.sort_by(|a, b| b.1.cmp(&a.1));
    hours.into_iter().map(|(hour, _)| hour).collect()
}
