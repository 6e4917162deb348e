// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_runtime::{Scheduler, TokioScheduler};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_scheduled_callback_fires_after_delay() {
    // Arrange
    let scheduler = TokioScheduler::new();
    let fired = Arc::new(AtomicUsize::new(0));
    let count = fired.clone();

    // Act
    let _token = scheduler.schedule(
        Duration::from_millis(10),
        Box::new(move || {
            count.fetch_add(1, Ordering::SeqCst);
        }),
    );
    tokio::time::sleep(Duration::from_millis(100)).await;

    // Assert
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_cancel_suppresses_the_callback() {
    // Arrange
    let scheduler = TokioScheduler::new();
    let fired = Arc::new(AtomicUsize::new(0));
    let count = fired.clone();
    let token = scheduler.schedule(
        Duration::from_millis(50),
        Box::new(move || {
            count.fetch_add(1, Ordering::SeqCst);
        }),
    );

    // Act
    scheduler.cancel(token);
    tokio::time::sleep(Duration::from_millis(150)).await;

    // Assert
    assert_eq!(fired.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_cancel_after_fire_is_a_no_op() {
    // Arrange
    let scheduler = TokioScheduler::new();
    let fired = Arc::new(AtomicUsize::new(0));
    let count = fired.clone();
    let token = scheduler.schedule(
        Duration::from_millis(10),
        Box::new(move || {
            count.fetch_add(1, Ordering::SeqCst);
        }),
    );
    tokio::time::sleep(Duration::from_millis(100)).await;

    // Act
    scheduler.cancel(token);

    // Assert
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}
