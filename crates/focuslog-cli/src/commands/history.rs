use std::io::{self, BufRead, Write};

use chrono::Local;
use clap::Subcommand;
use focuslog_core::stats::{format_day, group_by_day};
use focuslog_core::{Database, HistoryStore, SessionController, SystemClock};

use super::{load_machine, save_machine};

#[derive(Subcommand)]
pub enum HistoryAction {
    /// List recorded sessions grouped by day, newest first
    Show,
    /// Delete all recorded sessions
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

pub fn run(action: HistoryAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;

    match action {
        HistoryAction::Show => {
            let history = HistoryStore::load(&db);
            if history.is_empty() {
                println!("no sessions recorded");
                return Ok(());
            }
            let now = Local::now();
            for group in group_by_day(history.records(), |r| format_day(r.finished_at, now)) {
                println!("{}", group.label);
                for record in group.records {
                    let mark = if record.completed { "+" } else { "x" };
                    let note = record
                        .note
                        .as_deref()
                        .map(|n| format!("  ({n})"))
                        .unwrap_or_default();
                    println!(
                        "  {mark} {}  {} min{note}",
                        record.finished_at.format("%H:%M"),
                        record.duration_min,
                    );
                }
            }
        }
        HistoryAction::Clear { yes } => {
            let machine = load_machine(&db);
            let mut ctrl = SessionController::new(machine, HistoryStore::load(&db), SystemClock);
            ctrl.request_delete_history();
            let confirmed = yes || prompt_confirmation()?;
            let event = if confirmed {
                ctrl.confirm_delete_history()
            } else {
                ctrl.cancel_delete_history()
            };
            if let Some(event) = event {
                println!("{}", serde_json::to_string_pretty(&event)?);
            }
            save_machine(&db, ctrl.machine())?;
        }
    }

    Ok(())
}

fn prompt_confirmation() -> Result<bool, io::Error> {
    print!("Delete all session history? [y/N] ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let answer = line.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
