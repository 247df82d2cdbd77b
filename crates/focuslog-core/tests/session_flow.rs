//! End-to-end flows through the controller with a manual clock and an
//! in-memory store.

use chrono::{DateTime, Duration, Local, TimeZone};
use focuslog_core::session::FINISHED_DISPLAY_MS;
use focuslog_core::{
    stats, Clock, Event, HistoryStore, ManualClock, MemoryStore, Phase, SessionController,
    SessionMachine, Window,
};

fn start_of_day() -> DateTime<Local> {
    Local.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap()
}

fn controller_at(
    start: DateTime<Local>,
    store: &MemoryStore,
) -> SessionController<&MemoryStore, ManualClock> {
    SessionController::new(
        SessionMachine::new(),
        HistoryStore::load(store),
        ManualClock::new(start),
    )
}

/// Drive the controller like a 1 Hz tick source for `secs` seconds.
fn run_ticks(ctrl: &mut SessionController<&MemoryStore, ManualClock>, secs: u32) -> Vec<Event> {
    let mut events = Vec::new();
    for _ in 0..secs {
        ctrl.clock().advance(Duration::seconds(1));
        if let Some(event) = ctrl.tick() {
            events.push(event);
        }
    }
    events
}

#[test]
fn full_session_lifecycle_with_early_stop() {
    let store = MemoryStore::default();
    let mut ctrl = controller_at(start_of_day(), &store);

    assert!(ctrl.press_timer().is_some());
    assert!(ctrl.submit_edited_minutes(25).is_some());
    assert!(matches!(
        ctrl.toggle_running(),
        Some(Event::SessionStarted { remaining_secs: 1500, .. })
    ));

    let events = run_ticks(&mut ctrl, 10 * 60);
    assert!(events.is_empty(), "no terminal event before the countdown ends");
    assert_eq!(ctrl.machine().remaining_secs(), 15 * 60);

    match ctrl.toggle_running() {
        Some(Event::SessionStopped {
            duration_min,
            elapsed_min,
            completed,
            ..
        }) => {
            assert_eq!(duration_min, 25);
            assert_eq!(elapsed_min, 10);
            assert!(!completed);
        }
        other => panic!("expected SessionStopped, got {other:?}"),
    }

    // Persisted and reloadable from the same store.
    let reloaded = HistoryStore::load(&store);
    assert_eq!(reloaded.len(), 1);
    let r = &reloaded.records()[0];
    assert_eq!(r.duration_min, 25);
    assert_eq!(r.note.as_deref(), Some("10 minutes worked"));
}

#[test]
fn natural_completion_records_once_and_auto_resets() {
    let store = MemoryStore::default();
    let mut ctrl = controller_at(start_of_day(), &store);

    ctrl.press_timer();
    ctrl.submit_edited_minutes(2);
    ctrl.toggle_running();

    let events = run_ticks(&mut ctrl, 2 * 60);
    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], Event::SessionFinished { duration_min: 2, .. }));
    assert_eq!(ctrl.machine().phase(), Phase::Finished);
    assert_eq!(ctrl.history().len(), 1);
    assert!(ctrl.history()[0].completed);

    // Keep ticking through the display window: exactly one reset, no
    // further records.
    let ms = FINISHED_DISPLAY_MS as u32 / 1000 + 1;
    let events = run_ticks(&mut ctrl, ms);
    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], Event::SessionReset { .. }));
    assert_eq!(ctrl.machine().phase(), Phase::Idle);
    assert_eq!(ctrl.machine().remaining_secs(), 2 * 60);
    assert_eq!(ctrl.history().len(), 1);
}

#[test]
fn history_feeds_statistics() {
    let store = MemoryStore::default();
    let mut ctrl = controller_at(start_of_day(), &store);

    // One completed 2-minute session, then one stopped after a minute.
    ctrl.press_timer();
    ctrl.submit_edited_minutes(2);
    ctrl.toggle_running();
    run_ticks(&mut ctrl, 2 * 60 + 3);

    ctrl.toggle_running();
    run_ticks(&mut ctrl, 60);
    ctrl.toggle_running();

    assert_eq!(ctrl.history().len(), 2);
    // Newest first: the interrupted session leads.
    assert!(!ctrl.history()[0].completed);
    assert!(ctrl.history()[1].completed);

    let now = ctrl.clock().now();
    let today = stats::period_stats(ctrl.history(), now, Window::Today);
    assert_eq!(today.total, 2);
    assert_eq!(today.completed, 1);
    assert_eq!(today.total_minutes, 2);
    assert_eq!(today.completion_rate(), 50);

    let hours = stats::most_productive_hours(ctrl.history());
    assert_eq!(hours, vec![9]);
}

#[test]
fn delete_handshake_clears_persisted_history() {
    let store = MemoryStore::default();
    let mut ctrl = controller_at(start_of_day(), &store);

    ctrl.toggle_running();
    ctrl.clock().advance(Duration::seconds(30));
    ctrl.toggle_running();
    assert_eq!(ctrl.history().len(), 1);

    // Cancel leaves everything in place.
    ctrl.request_delete_history();
    ctrl.cancel_delete_history();
    assert_eq!(ctrl.history().len(), 1);

    ctrl.request_delete_history();
    assert!(matches!(
        ctrl.confirm_delete_history(),
        Some(Event::HistoryCleared { .. })
    ));
    assert!(ctrl.history().is_empty());
    assert!(HistoryStore::load(&store).is_empty());
}
