//! Tests for the clock module.

use std::sync::{Arc, Mutex};

use jiff::Timestamp;
use tempfile::TempDir;

use super::*;
use crate::params::SetTZero;

/// Helper function to create a test clock
fn create_test_clock() -> (TempDir, MissionClock) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let clock = MissionClockBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .expect("Failed to create mission clock");
    (temp_dir, clock)
}

fn timestamp(second: i64) -> Timestamp {
    Timestamp::from_second(second).expect("Failed to build timestamp")
}

#[test]
fn test_set_tzero_through_editor() {
    let (_temp_dir, clock) = create_test_clock();

    let outcome = clock
        .set_tzero(&SetTZero {
            time: "2024-06-19T15:00:00Z".to_string(),
        })
        .expect("Failed to set t-zero");

    assert_eq!(outcome, EditorOutcome::Saved);
    assert_eq!(
        clock.tzero(),
        Some("2024-06-19T15:00:00Z".parse().unwrap()),
    );
}

#[test]
fn test_set_tzero_unparseable_is_a_noop() {
    let (_temp_dir, clock) = create_test_clock();

    clock
        .set_tzero(&SetTZero {
            time: "2024-06-19T15:00:00Z".to_string(),
        })
        .expect("Failed to set t-zero");

    let outcome = clock
        .set_tzero(&SetTZero {
            time: "next tuesday".to_string(),
        })
        .expect("Editor confirm should not error on bad input");

    assert_eq!(outcome, EditorOutcome::StillOpen);
    // The previous value survives untouched
    assert_eq!(
        clock.tzero(),
        Some("2024-06-19T15:00:00Z".parse().unwrap()),
    );
}

#[test]
fn test_confirm_set_with_empty_field_does_not_touch_store() {
    let (_temp_dir, clock) = create_test_clock();

    let form = TZeroForm::default();
    let outcome = form
        .confirm_set(clock.store())
        .expect("Editor confirm should not error on empty input");

    assert_eq!(outcome, EditorOutcome::StillOpen);
    assert_eq!(clock.tzero(), None);

    let mut form = TZeroForm::default();
    form.set_field("");
    let outcome = form
        .confirm_set(clock.store())
        .expect("Editor confirm should not error on empty input");

    assert_eq!(outcome, EditorOutcome::StillOpen);
    assert_eq!(clock.tzero(), None);
}

#[test]
fn test_editor_prefills_existing_tzero() {
    let (_temp_dir, clock) = create_test_clock();

    let instant = timestamp(1_700_000_000);
    clock.store().set(instant).expect("Failed to set t-zero");

    let form = TZeroForm::open(clock.store());
    assert_eq!(form.field(), Some(instant.to_string().as_str()));
}

#[test]
fn test_editor_field_empty_without_tzero() {
    let (_temp_dir, clock) = create_test_clock();

    let form = TZeroForm::open(clock.store());
    assert_eq!(form.field(), None);
}

#[test]
fn test_clear_tzero_unconditionally_saves() {
    let (_temp_dir, clock) = create_test_clock();

    // Clearing an already-absent value still reports success
    let outcome = clock.clear_tzero().expect("Failed to clear t-zero");
    assert_eq!(outcome, EditorOutcome::Saved);

    clock.store().set(timestamp(1_700_000_000)).unwrap();
    let outcome = clock.clear_tzero().expect("Failed to clear t-zero");
    assert_eq!(outcome, EditorOutcome::Saved);
    assert_eq!(clock.tzero(), None);
}

#[test]
fn test_elapsed_unknown_without_tzero() {
    let (_temp_dir, clock) = create_test_clock();

    let snapshot = clock.observe(timestamp(1_700_000_000));
    assert_eq!(snapshot.elapsed_ms, None);
    assert!(snapshot.mission_time.is_some());
}

#[test]
fn test_elapsed_unknown_without_mission_time() {
    let (_temp_dir, clock) = create_test_clock();

    clock.store().set(timestamp(1_700_000_000)).unwrap();
    let snapshot = clock.snapshot();
    assert_eq!(snapshot.mission_time, None);
    assert_eq!(snapshot.elapsed_ms, None);
}

#[test]
fn test_elapsed_derivation_preserves_sign() {
    let (_temp_dir, clock) = create_test_clock();

    let t_zero = timestamp(1_700_000_000);
    clock.store().set(t_zero).unwrap();

    // 1 day, 1 hour, 1 minute, 1 second after T-zero
    let snapshot = clock.observe(timestamp(1_700_090_061));
    assert_eq!(snapshot.elapsed_ms, Some(90_061_000));

    // 5 seconds before T-zero
    let snapshot = clock.observe(timestamp(1_699_999_995));
    assert_eq!(snapshot.elapsed_ms, Some(-5_000));

    // Exactly at T-zero
    let snapshot = clock.observe(t_zero);
    assert_eq!(snapshot.elapsed_ms, Some(0));
}

#[test]
fn test_tzero_change_recomputes_without_new_push() {
    let (_temp_dir, clock) = create_test_clock();

    clock.timer().push(timestamp(1_700_000_060));
    assert_eq!(clock.timer().elapsed(), None);

    // Setting T-zero must recompute from the already-received mission time
    clock.store().set(timestamp(1_700_000_000)).unwrap();
    assert_eq!(clock.timer().elapsed(), Some(60_000));

    // Moving T-zero discards the previous delta entirely
    clock.store().set(timestamp(1_700_000_030)).unwrap();
    assert_eq!(clock.timer().elapsed(), Some(30_000));

    // Clearing returns the derivation to unknown, not zero
    clock.store().clear().unwrap();
    assert_eq!(clock.timer().elapsed(), None);
}

#[test]
fn test_each_upstream_event_triggers_one_recomputation() {
    let (_temp_dir, clock) = create_test_clock();

    let observed = Arc::new(Mutex::new(Vec::new()));
    let subscription = {
        let observed = Arc::clone(&observed);
        clock
            .timer()
            .watch_elapsed(move |elapsed| observed.lock().unwrap().push(*elapsed))
    };

    clock.timer().push(timestamp(1_700_000_010));
    clock.store().set(timestamp(1_700_000_000)).unwrap();
    clock.timer().push(timestamp(1_700_000_020));

    assert_eq!(
        *observed.lock().unwrap(),
        vec![None, Some(10_000), Some(20_000)],
    );

    drop(subscription);
}
