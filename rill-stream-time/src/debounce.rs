// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Quiet-period coalescing operator.

use parking_lot::Mutex;
use rill_core::{handler, Notice, Rill};
use rill_runtime::Scheduler;
use std::sync::Arc;
use std::time::Duration;

/// Extension trait providing the `debounce` operator for cells.
pub trait DebounceExt<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Derives a cell that emits a value only once the upstream has been
    /// quiet for `delay`.
    ///
    /// Each upstream value cancels the pending emission and schedules a new
    /// one carrying that value. When the upstream ends, the pending value
    /// is dropped — not flushed — and the derived cell ends immediately; a
    /// failing upstream likewise cancels the pending emission and fails the
    /// derived cell without delay.
    fn debounce<S: Scheduler>(&self, delay: Duration, scheduler: &S) -> Rill<T>;
}

impl<T> DebounceExt<T> for Rill<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn debounce<S: Scheduler>(&self, delay: Duration, scheduler: &S) -> Rill<T> {
        let debounced = Rill::new();
        if self.is_done() {
            match self.fault() {
                Some(error) => debounced.fail(error),
                None => debounced.end(),
            };
            return debounced;
        }
        let pending: Arc<Mutex<Option<S::Token>>> = Arc::new(Mutex::new(None));
        let timers = scheduler.clone();
        let downstream = debounced.clone();
        self.subscribe(&handler(move |notice| match notice {
            Notice::Value(v) => {
                let mut slot = pending.lock();
                if let Some(token) = slot.take() {
                    timers.cancel(token);
                }
                let sink = downstream.clone();
                let release = pending.clone();
                *slot = Some(timers.schedule(
                    delay,
                    Box::new(move || {
                        release.lock().take();
                        sink.publish(v);
                    }),
                ));
            }
            Notice::Done(_) => {
                if let Some(token) = pending.lock().take() {
                    timers.cancel(token);
                }
                downstream.end();
            }
            Notice::Failed(error) => {
                if let Some(token) = pending.lock().take() {
                    timers.cancel(token);
                }
                downstream.fail(error);
            }
        }));
        debounced
    }
}
