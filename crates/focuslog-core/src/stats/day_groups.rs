//! Display grouping of history records by day.

use chrono::{DateTime, Duration, Local};

use crate::session::SessionRecord;

/// Records sharing one formatted day label.
#[derive(Debug, PartialEq)]
pub struct DayGroup<'a> {
    pub label: String,
    pub records: Vec<&'a SessionRecord>,
}

/// Group records by a formatted day label.
///
/// Groups appear in first-encounter order, which for a newest-first history
/// puts the most recent day first; record order within each group is
/// preserved.
pub fn group_by_day<F>(history: &[SessionRecord], format: F) -> Vec<DayGroup<'_>>
where
    F: Fn(&SessionRecord) -> String,
{
    let mut groups: Vec<DayGroup<'_>> = Vec::new();
    for record in history {
        let label = format(record);
        match groups.iter_mut().find(|g| g.label == label) {
            Some(group) => group.records.push(record),
            None => groups.push(DayGroup {
                label,
                records: vec![record],
            }),
        }
    }
    groups
}

/// Human-readable day label relative to `now`:
/// "Today", "Yesterday", or "<day> <Month>".
pub fn format_day(at: DateTime<Local>, now: DateTime<Local>) -> String {
    let date = at.date_naive();
    let today = now.date_naive();
    if date == today {
        "Today".to_string()
    } else if date == (now - Duration::days(1)).date_naive() {
        "Yesterday".to_string()
    } else {
        at.format("%-d %B").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
    }

    fn record(finished_at: DateTime<Local>, id: i64) -> SessionRecord {
        SessionRecord::finalize(id, 25, finished_at, true, 25)
    }

    #[test]
    fn labels_relative_to_now() {
        assert_eq!(format_day(now(), now()), "Today");
        assert_eq!(format_day(now() - Duration::days(1), now()), "Yesterday");
        assert_eq!(format_day(now() - Duration::days(5), now()), "5 March");
    }

    #[test]
    fn groups_preserve_newest_first_order() {
        let history = vec![
            record(now(), 4),
            record(now() - Duration::hours(2), 3),
            record(now() - Duration::days(1), 2),
            record(now() - Duration::days(5), 1),
        ];
        let groups = group_by_day(&history, |r| format_day(r.finished_at, now()));
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].label, "Today");
        assert_eq!(groups[0].records.iter().map(|r| r.id).collect::<Vec<_>>(), vec![4, 3]);
        assert_eq!(groups[1].label, "Yesterday");
        assert_eq!(groups[2].label, "5 March");
    }
}
