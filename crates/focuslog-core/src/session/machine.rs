//! Session state machine.
//!
//! Plain-data state machine advanced by explicit commands. It holds no
//! clock and no storage handle -- commands that depend on time take `now`,
//! and terminal transitions are reported as [`Event`]s for the host to act
//! on (the controller turns them into history records).
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Editing -> Idle -> Running -> (Idle | Finished) -> Idle
//! ```
//!
//! `Finished` is a transient display state: the next `tick` after the
//! display window returns the machine to `Idle` with the countdown reset.

use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::events::Event;

/// Default planned duration for a fresh machine, in minutes.
pub const DEFAULT_PLANNED_MIN: u32 = 25;

/// Accepted planned duration range, in minutes.
pub const MIN_PLANNED_MIN: u32 = 1;
pub const MAX_PLANNED_MIN: u32 = 180;

/// How long the Finished state is displayed before the automatic reset
/// (1.5s hold plus 1.0s fade).
pub const FINISHED_DISPLAY_MS: i64 = 1_500 + 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    /// User is entering a new planned duration.
    Editing,
    Running,
    /// Countdown hit zero; transient until the display window elapses.
    Finished,
}

/// Core session state machine.
///
/// Operates on wall-clock deltas -- no internal thread. The caller is
/// responsible for calling `tick()` periodically (1 Hz is assumed, jitter
/// is tolerated).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionMachine {
    phase: Phase,
    /// Planned duration in minutes, 1-180.
    planned_min: u32,
    /// Seconds left on the countdown.
    remaining_secs: u32,
    /// Last instant elapsed time was flushed while Running.
    /// Carries sub-second remainders between ticks.
    #[serde(default)]
    last_tick: Option<DateTime<Local>>,
    /// When the Finished display window began (only while Finished).
    #[serde(default)]
    finished_since: Option<DateTime<Local>>,
}

impl SessionMachine {
    /// Create a machine in `Idle` with the default 25 minute plan.
    pub fn new() -> Self {
        Self::with_planned_minutes(DEFAULT_PLANNED_MIN)
    }

    pub fn with_planned_minutes(minutes: u32) -> Self {
        Self {
            phase: Phase::Idle,
            planned_min: minutes,
            remaining_secs: minutes * 60,
            last_tick: None,
            finished_since: None,
        }
    }

    /// Check a submitted duration against the accepted range.
    ///
    /// `submit_edited_minutes` rejects silently; hosts that want to show a
    /// message can call this first.
    pub fn validate_minutes(minutes: u32) -> Result<u32, ValidationError> {
        if (MIN_PLANNED_MIN..=MAX_PLANNED_MIN).contains(&minutes) {
            Ok(minutes)
        } else {
            Err(ValidationError::DurationOutOfRange { minutes })
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn planned_min(&self) -> u32 {
        self.planned_min
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self, now: DateTime<Local>) -> Event {
        Event::StateSnapshot {
            phase: self.phase,
            planned_min: self.planned_min,
            remaining_secs: self.remaining_secs,
            at: now,
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Open duration editing. Legal only from `Idle`.
    pub fn press_timer(&mut self) -> Option<Event> {
        match self.phase {
            Phase::Idle => {
                self.phase = Phase::Editing;
                Some(Event::EditOpened {
                    current_min: self.remaining_secs / 60,
                })
            }
            _ => None,
        }
    }

    /// Accept a new planned duration and return to `Idle`.
    ///
    /// Out-of-range values are rejected silently: the machine stays in
    /// `Editing` with nothing changed.
    pub fn submit_edited_minutes(&mut self, minutes: u32) -> Option<Event> {
        if self.phase != Phase::Editing {
            return None;
        }
        let minutes = Self::validate_minutes(minutes).ok()?;
        self.planned_min = minutes;
        self.remaining_secs = minutes * 60;
        self.phase = Phase::Idle;
        Some(Event::DurationSet { minutes })
    }

    /// Start from `Idle` (resuming the current countdown value) or stop a
    /// `Running` session.
    ///
    /// Stopping finalizes the session: the returned `SessionStopped` event
    /// carries everything the host needs to append a history record, and
    /// the countdown resets to the planned duration. A stop with zero
    /// elapsed time still finalizes.
    pub fn toggle_running(&mut self, now: DateTime<Local>) -> Option<Event> {
        match self.phase {
            Phase::Idle => {
                self.phase = Phase::Running;
                self.last_tick = Some(now);
                Some(Event::SessionStarted {
                    remaining_secs: self.remaining_secs,
                    at: now,
                })
            }
            Phase::Running => {
                self.flush_elapsed(now);
                let total_secs = self.planned_min * 60;
                let completed = self.remaining_secs == 0;
                let elapsed_min = (total_secs - self.remaining_secs) / 60;
                let event = Event::SessionStopped {
                    duration_min: self.planned_min,
                    elapsed_min,
                    completed,
                    at: now,
                };
                self.phase = Phase::Idle;
                self.remaining_secs = total_secs;
                self.last_tick = None;
                Some(event)
            }
            Phase::Editing | Phase::Finished => None,
        }
    }

    /// Advance the countdown. Call periodically (roughly 1 Hz).
    ///
    /// While `Running`, subtracts the whole seconds elapsed since the last
    /// flush. Reaching zero enters `Finished` and returns exactly one
    /// `SessionFinished` event. While `Finished`, returns `SessionReset`
    /// once the display window has elapsed; the reset cannot re-fire.
    pub fn tick(&mut self, now: DateTime<Local>) -> Option<Event> {
        match self.phase {
            Phase::Running => {
                self.flush_elapsed(now);
                if self.remaining_secs == 0 {
                    self.phase = Phase::Finished;
                    self.finished_since = Some(now);
                    self.last_tick = None;
                    return Some(Event::SessionFinished {
                        duration_min: self.planned_min,
                        at: now,
                    });
                }
                None
            }
            Phase::Finished => {
                let since = self.finished_since?;
                if (now - since) >= Duration::milliseconds(FINISHED_DISPLAY_MS) {
                    self.phase = Phase::Idle;
                    self.remaining_secs = self.planned_min * 60;
                    self.finished_since = None;
                    return Some(Event::SessionReset { at: now });
                }
                None
            }
            _ => None,
        }
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn flush_elapsed(&mut self, now: DateTime<Local>) {
        if let Some(last) = self.last_tick {
            let elapsed = (now - last).num_seconds().max(0);
            if elapsed > 0 {
                self.remaining_secs = self
                    .remaining_secs
                    .saturating_sub(elapsed.min(u32::MAX as i64) as u32);
                self.last_tick = Some(last + Duration::seconds(elapsed));
            }
        }
    }
}

impl Default for SessionMachine {
    fn default() -> Self {
        Self::new()
    }
}
