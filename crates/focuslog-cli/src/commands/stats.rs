use chrono::Local;
use clap::Subcommand;
use focuslog_core::stats::{most_productive_hours, summary, PeriodStats};
use focuslog_core::{Database, HistoryStore};
use serde::Serialize;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Aggregates for today, this week, this month, and all time
    Summary,
    /// Hours of day in which completed sessions cluster
    Hours,
}

#[derive(Serialize)]
struct WindowReport {
    #[serde(flatten)]
    stats: PeriodStats,
    completion_rate: u32,
}

impl From<PeriodStats> for WindowReport {
    fn from(stats: PeriodStats) -> Self {
        Self {
            completion_rate: stats.completion_rate(),
            stats,
        }
    }
}

#[derive(Serialize)]
struct SummaryReport {
    today: WindowReport,
    week: WindowReport,
    month: WindowReport,
    all: WindowReport,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let history = HistoryStore::load(&db);

    match action {
        StatsAction::Summary => {
            let s = summary(history.records(), Local::now());
            let report = SummaryReport {
                today: s.today.into(),
                week: s.week.into(),
                month: s.month.into(),
                all: s.all.into(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        StatsAction::Hours => {
            let hours = most_productive_hours(history.records());
            println!("{}", serde_json::to_string_pretty(&hours)?);
        }
    }

    Ok(())
}
