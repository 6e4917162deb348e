// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::Rill;
use rill_stream::from_future;
use std::time::Duration;

async fn wait_until(condition: impl Fn() -> bool) {
    for _ in 0..200 {
        if condition() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("condition not reached within the allotted time");
}

#[tokio::test]
async fn test_resolution_publishes_once_then_ends() {
    // Arrange / Act
    let cell = from_future(async { Ok::<_, anyhow::Error>(42) });

    // Assert
    wait_until(|| cell.is_done()).await;
    assert_eq!(cell.value(), Some(42));
    assert!(cell.fault().is_none());
}

#[tokio::test]
async fn test_resolution_reaches_a_subscriber_via_into_next() {
    // Arrange
    let (tx, rx) = futures::channel::oneshot::channel::<i32>();
    let cell = from_future(async move {
        rx.await
            .map_err(|_| anyhow::anyhow!("producer went away"))
    });
    let next = cell.into_next();

    // Act
    tx.send(7).expect("receiver alive");

    // Assert
    assert_eq!(next.await.ok(), Some(7));
}

#[tokio::test]
async fn test_rejection_travels_the_failure_channel() {
    // Arrange / Act
    let cell: Rill<i32> = from_future(async { Err(anyhow::anyhow!("backend down")) });

    // Assert: failed, not completed-with-a-value
    wait_until(|| cell.is_done()).await;
    assert!(cell.fault().is_some());
    assert_eq!(cell.value(), None);
}

#[tokio::test]
async fn test_ending_the_cell_early_aborts_the_producer() {
    // Arrange
    let cell: Rill<i32> = from_future(async {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok::<_, anyhow::Error>(1)
    });

    // Act
    cell.end();
    tokio::time::sleep(Duration::from_millis(20)).await;

    // Assert: terminated by us, the producer never got to publish
    assert!(cell.is_done());
    assert_eq!(cell.value(), None);
    assert!(cell.fault().is_none());
}
