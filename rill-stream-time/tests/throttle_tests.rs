// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::{Rill, RillError};
use rill_stream_time::ThrottleExt;
use rill_test_utils::{ManualScheduler, Recorder};
use std::time::Duration;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

#[test]
fn test_throttle_emits_the_leading_edge_and_suppresses_the_window() {
    // Arrange
    let scheduler = ManualScheduler::new();
    let source = Rill::new();
    let throttled = source.throttle(ms(50), &scheduler);
    let recorder = Recorder::attach(&throttled);

    // Act: publishes at t = 0, 10, 60
    source.publish(1);
    scheduler.advance(ms(10));
    source.publish(2); // inside the window, suppressed
    scheduler.advance(ms(50)); // window closed at t = 50
    source.publish(3); // idle again, leading edge

    // Assert
    assert_eq!(recorder.values(), vec![1, 3]);
}

#[test]
fn test_throttle_flushes_the_latest_suppressed_value_on_end() {
    // Arrange
    let scheduler = ManualScheduler::new();
    let source = Rill::new();
    let throttled = source.throttle(ms(50), &scheduler);
    let recorder = Recorder::attach(&throttled);

    // Act: the window is still open when the upstream ends
    source.publish(1);
    source.publish(2);
    source.publish(3);
    source.end();

    // Assert: leading edge, then the trailing flush, then completion
    assert_eq!(recorder.values(), vec![1, 3]);
    assert!(recorder.ended());
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn test_throttle_ends_without_flush_when_no_window_is_open() {
    // Arrange
    let scheduler = ManualScheduler::new();
    let source = Rill::new();
    let throttled = source.throttle(ms(50), &scheduler);
    let recorder = Recorder::attach(&throttled);

    // Act: the window closed and discarded its stale suppressed value
    source.publish(1);
    source.publish(2);
    scheduler.advance(ms(50));
    source.end();

    // Assert
    assert_eq!(recorder.values(), vec![1]);
    assert!(recorder.ended());
}

#[test]
fn test_throttle_leading_edge_fires_again_immediately_after_the_window() {
    // Arrange
    let scheduler = ManualScheduler::new();
    let source = Rill::new();
    let throttled = source.throttle(ms(50), &scheduler);
    let recorder = Recorder::attach(&throttled);

    // Act
    source.publish(1);
    scheduler.advance(ms(50));
    source.publish(2);
    scheduler.advance(ms(50));
    source.publish(3);

    // Assert: every value arrived while idle, none suppressed
    assert_eq!(recorder.values(), vec![1, 2, 3]);
}

#[test]
fn test_throttle_failure_drops_the_suppressed_value() {
    // Arrange
    let scheduler = ManualScheduler::new();
    let source = Rill::new();
    let throttled = source.throttle(ms(50), &scheduler);
    let recorder = Recorder::attach(&throttled);

    // Act
    source.publish(1);
    source.publish(2);
    source.fail(RillError::source_failure("feed lost"));

    // Assert: no trailing flush on the failure path
    assert_eq!(recorder.values(), vec![1]);
    assert!(recorder.failed());
    assert_eq!(scheduler.pending(), 0);
}
