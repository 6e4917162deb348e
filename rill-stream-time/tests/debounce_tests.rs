// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::{Rill, RillError};
use rill_stream_time::DebounceExt;
use rill_test_utils::{ManualScheduler, Recorder};
use std::time::Duration;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

#[test]
fn test_debounce_coalesces_a_burst_into_the_last_value() {
    // Arrange
    let scheduler = ManualScheduler::new();
    let source = Rill::new();
    let debounced = source.debounce(ms(50), &scheduler);
    let recorder = Recorder::attach(&debounced);

    // Act: publishes at t = 0, 10, 20
    source.publish(1);
    scheduler.advance(ms(10));
    source.publish(2);
    scheduler.advance(ms(10));
    source.publish(3);

    // Assert: quiet until t = 70, then exactly one emission of the last value
    scheduler.advance(ms(49));
    assert!(recorder.values().is_empty());
    scheduler.advance(ms(1));
    assert_eq!(recorder.values(), vec![3]);
    assert_eq!(scheduler.now(), ms(70));
}

#[test]
fn test_debounce_emits_again_after_a_second_quiet_period() {
    // Arrange
    let scheduler = ManualScheduler::new();
    let source = Rill::new();
    let debounced = source.debounce(ms(50), &scheduler);
    let recorder = Recorder::attach(&debounced);

    // Act
    source.publish(1);
    scheduler.advance(ms(50));
    source.publish(2);
    scheduler.advance(ms(50));

    // Assert
    assert_eq!(recorder.values(), vec![1, 2]);
}

#[test]
fn test_debounce_drops_the_pending_value_on_upstream_end() {
    // Arrange
    let scheduler = ManualScheduler::new();
    let source = Rill::new();
    let debounced = source.debounce(ms(50), &scheduler);
    let recorder = Recorder::attach(&debounced);

    // Act: end arrives before the quiet period elapses
    source.publish(1);
    scheduler.advance(ms(10));
    source.end();
    scheduler.advance(ms(100));

    // Assert: ended immediately, pending value dropped, timer cancelled
    assert!(recorder.values().is_empty());
    assert!(recorder.ended());
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn test_debounce_fails_immediately_and_cancels_the_pending_timer() {
    // Arrange
    let scheduler = ManualScheduler::new();
    let source = Rill::new();
    let debounced = source.debounce(ms(50), &scheduler);
    let recorder = Recorder::attach(&debounced);

    // Act
    source.publish(1);
    source.fail(RillError::source_failure("feed lost"));
    scheduler.advance(ms(100));

    // Assert
    assert!(recorder.values().is_empty());
    assert!(recorder.failed());
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn test_debounce_on_a_terminated_upstream_is_born_done() {
    // Arrange
    let scheduler = ManualScheduler::new();
    let source: Rill<i32> = Rill::new();
    source.end();

    // Act
    let debounced = source.debounce(ms(50), &scheduler);

    // Assert
    assert!(debounced.is_done());
}
