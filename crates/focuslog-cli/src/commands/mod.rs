pub mod config;
pub mod history;
pub mod stats;
pub mod timer;

use focuslog_core::storage::KvStore;
use focuslog_core::{Database, SessionMachine};

/// Key holding the saved machine snapshot between invocations.
pub const MACHINE_KEY: &str = "session_machine";

/// Restore the machine snapshot, defaulting to a fresh machine when the
/// key is absent or the snapshot does not decode.
pub fn load_machine(db: &Database) -> SessionMachine {
    if let Ok(Some(json)) = db.get(MACHINE_KEY) {
        if let Ok(machine) = serde_json::from_str::<SessionMachine>(&json) {
            return machine;
        }
    }
    SessionMachine::new()
}

pub fn save_machine(
    db: &Database,
    machine: &SessionMachine,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string(machine)?;
    db.set(MACHINE_KEY, &json)?;
    Ok(())
}
