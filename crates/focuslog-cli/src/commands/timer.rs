use clap::Subcommand;
use focuslog_core::{Database, HistoryStore, SessionController, SessionMachine, SystemClock};

use super::{load_machine, save_machine};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Open duration editing (legal when idle)
    Press,
    /// Submit a new planned duration in minutes (1-180)
    Set {
        minutes: u32,
    },
    /// Start the countdown, or stop it and record the session
    Toggle,
    /// Advance the countdown by the elapsed wall-clock time
    Tick,
    /// Tick, then print the current timer state as JSON
    Status,
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let machine = load_machine(&db);
    let mut ctrl = SessionController::new(machine, HistoryStore::load(&db), SystemClock);

    match action {
        TimerAction::Press => {
            if let Some(event) = ctrl.press_timer() {
                println!("{}", serde_json::to_string_pretty(&event)?);
            } else {
                println!("{}", serde_json::to_string_pretty(&ctrl.snapshot())?);
            }
        }
        TimerAction::Set { minutes } => {
            // The machine rejects silently; surface the range to the user.
            SessionMachine::validate_minutes(minutes)?;
            if let Some(event) = ctrl.submit_edited_minutes(minutes) {
                println!("{}", serde_json::to_string_pretty(&event)?);
            } else {
                eprintln!("not editing; run `focuslog timer press` first");
                println!("{}", serde_json::to_string_pretty(&ctrl.snapshot())?);
            }
        }
        TimerAction::Toggle => {
            if let Some(event) = ctrl.toggle_running() {
                println!("{}", serde_json::to_string_pretty(&event)?);
            } else {
                println!("{}", serde_json::to_string_pretty(&ctrl.snapshot())?);
            }
        }
        TimerAction::Tick => {
            if let Some(event) = ctrl.tick() {
                println!("{}", serde_json::to_string_pretty(&event)?);
            }
        }
        TimerAction::Status => {
            let completed = ctrl.tick();
            println!("{}", serde_json::to_string_pretty(&ctrl.snapshot())?);
            if let Some(event) = completed {
                println!("{}", serde_json::to_string_pretty(&event)?);
            }
        }
    }

    save_machine(&db, ctrl.machine())?;
    Ok(())
}
