//! # Focuslog Core Library
//!
//! Core business logic for the Focuslog work-interval timer. All operations
//! are available to any host (the bundled CLI, a GUI shell) through the same
//! library; rendering and input belong to the host.
//!
//! ## Architecture
//!
//! - **Session machine**: a plain-data state machine advanced by explicit
//!   commands and a caller-driven `tick()`; it emits events, never I/O
//! - **Controller**: applies the machine's finalization outcomes to the
//!   history and owns the delete-confirmation handshake
//! - **History**: newest-first session records behind a key-value store
//! - **Statistics**: pure aggregate functions over a history snapshot
//!
//! ## Key Components
//!
//! - [`SessionMachine`]: countdown state machine
//! - [`SessionController`]: command surface for hosts
//! - [`HistoryStore`]: typed history persistence
//! - [`stats`]: period aggregates and productive-hour detection

pub mod clock;
pub mod error;
pub mod events;
pub mod history;
pub mod session;
pub mod stats;
pub mod storage;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{CoreError, Result, StoreError, ValidationError};
pub use events::Event;
pub use history::{HistoryStore, HISTORY_KEY};
pub use session::{Phase, SessionController, SessionMachine, SessionRecord};
pub use stats::{PeriodStats, StatsSummary, Window};
pub use storage::{Database, KvStore, MemoryStore, Preferences, Theme};
