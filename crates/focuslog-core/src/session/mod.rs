pub mod controller;
pub mod machine;
mod record;

pub use controller::SessionController;
pub use machine::{
    Phase, SessionMachine, DEFAULT_PLANNED_MIN, FINISHED_DISPLAY_MS, MAX_PLANNED_MIN,
    MIN_PLANNED_MIN,
};
pub use record::SessionRecord;
