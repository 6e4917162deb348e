// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Single-value awaitable to cell.

use rill_core::{Rill, RillError};
use std::fmt::Display;
use std::future::Future;

/// Drives a cell from a single-value awaitable.
///
/// The future is spawned on the ambient Tokio runtime. Success publishes
/// the value once and completes the cell; failure travels the failure
/// channel (`fail`), never disguised as a normal completion. Terminating
/// the cell early aborts the spawned task.
///
/// Must be called from within a Tokio runtime context.
pub fn from_future<T, E, F>(future: F) -> Rill<T>
where
    T: Clone + Send + Sync + 'static,
    E: Display + Send + 'static,
    F: Future<Output = Result<T, E>> + Send + 'static,
{
    Rill::build_with_cleanup(
        None,
        |cell| {
            let sink = cell.clone();
            tokio::spawn(async move {
                match future.await {
                    Ok(value) => {
                        sink.publish(value).end();
                    }
                    Err(error) => {
                        warn_event!("awaitable source failed: {error}");
                        sink.fail(RillError::source_failure(error.to_string()));
                    }
                }
            })
        },
        |task: tokio::task::JoinHandle<()>| {
            task.abort();
        },
    )
}
