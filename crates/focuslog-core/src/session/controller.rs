//! Session controller: the imperative shell around the state machine.
//!
//! The machine reports terminal transitions as events; the controller turns
//! them into history records and applies them to the [`HistoryStore`]. It
//! also owns the delete-confirmation handshake. Persistence failures are
//! reported on stderr and swallowed -- the in-memory state stays the source
//! of truth for the running process.

use chrono::{DateTime, Local};

use crate::clock::Clock;
use crate::events::Event;
use crate::history::HistoryStore;
use crate::session::{SessionMachine, SessionRecord};
use crate::storage::KvStore;

pub struct SessionController<S: KvStore, C: Clock> {
    machine: SessionMachine,
    history: HistoryStore<S>,
    clock: C,
    pending_delete: bool,
}

impl<S: KvStore, C: Clock> SessionController<S, C> {
    pub fn new(machine: SessionMachine, history: HistoryStore<S>, clock: C) -> Self {
        Self {
            machine,
            history,
            clock,
            pending_delete: false,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn machine(&self) -> &SessionMachine {
        &self.machine
    }

    pub fn history(&self) -> &[SessionRecord] {
        self.history.records()
    }

    pub fn delete_pending(&self) -> bool {
        self.pending_delete
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn snapshot(&self) -> Event {
        self.machine.snapshot(self.clock.now())
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn press_timer(&mut self) -> Option<Event> {
        self.machine.press_timer()
    }

    pub fn submit_edited_minutes(&mut self, minutes: u32) -> Option<Event> {
        self.machine.submit_edited_minutes(minutes)
    }

    pub fn toggle_running(&mut self) -> Option<Event> {
        let event = self.machine.toggle_running(self.clock.now())?;
        if let Event::SessionStopped {
            duration_min,
            elapsed_min,
            completed,
            at,
        } = event
        {
            self.finalize(duration_min, elapsed_min, completed, at);
        }
        Some(event)
    }

    pub fn tick(&mut self) -> Option<Event> {
        let event = self.machine.tick(self.clock.now())?;
        if let Event::SessionFinished { duration_min, at } = event {
            self.finalize(duration_min, duration_min, true, at);
        }
        Some(event)
    }

    /// Arm the history deletion. Nothing is removed until confirmed.
    pub fn request_delete_history(&mut self) -> Option<Event> {
        if self.pending_delete {
            return None;
        }
        self.pending_delete = true;
        Some(Event::DeleteRequested {
            at: self.clock.now(),
        })
    }

    pub fn cancel_delete_history(&mut self) -> Option<Event> {
        if !self.pending_delete {
            return None;
        }
        self.pending_delete = false;
        Some(Event::DeleteCancelled {
            at: self.clock.now(),
        })
    }

    /// Clear the history. Legal only after `request_delete_history`.
    pub fn confirm_delete_history(&mut self) -> Option<Event> {
        if !self.pending_delete {
            return None;
        }
        self.pending_delete = false;
        if let Err(e) = self.history.clear() {
            eprintln!("warning: failed to remove persisted history: {e}");
        }
        Some(Event::HistoryCleared {
            at: self.clock.now(),
        })
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn finalize(&mut self, duration_min: u32, elapsed_min: u32, completed: bool, at: DateTime<Local>) {
        let record = SessionRecord::finalize(
            self.history.next_id(at),
            duration_min,
            at,
            completed,
            elapsed_min,
        );
        if let Err(e) = self.history.append(record) {
            eprintln!("warning: failed to persist session record: {e}");
        }
    }
}
