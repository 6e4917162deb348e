// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Leading-edge rate limiting operator.

use parking_lot::Mutex;
use rill_core::{handler, Notice, Rill};
use rill_runtime::Scheduler;
use std::sync::Arc;
use std::time::Duration;

struct ThrottleState<Token, T> {
    window: Option<Token>,
    suppressed: Option<T>,
}

/// Extension trait providing the `throttle` operator for cells.
pub trait ThrottleExt<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Derives a leading-edge throttled cell.
    ///
    /// The first upstream value while idle is published immediately and
    /// opens a suppression window of `delay`. Values arriving inside the
    /// window are recorded as latest-suppressed, not forwarded. When the
    /// window timer fires the window closes and the stale suppressed value
    /// is discarded; the next value publishes immediately and re-opens the
    /// window.
    ///
    /// If the upstream ends while a window is open, the latest suppressed
    /// value (if any) is flushed before the derived cell ends; with no
    /// window open it ends without a flush. A failing upstream cancels the
    /// window, drops the suppressed value, and fails the derived cell.
    fn throttle<S: Scheduler>(&self, delay: Duration, scheduler: &S) -> Rill<T>;
}

impl<T> ThrottleExt<T> for Rill<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn throttle<S: Scheduler>(&self, delay: Duration, scheduler: &S) -> Rill<T> {
        let throttled = Rill::new();
        if self.is_done() {
            match self.fault() {
                Some(error) => throttled.fail(error),
                None => throttled.end(),
            };
            return throttled;
        }
        let state: Arc<Mutex<ThrottleState<S::Token, T>>> = Arc::new(Mutex::new(ThrottleState {
            window: None,
            suppressed: None,
        }));
        let timers = scheduler.clone();
        let downstream = throttled.clone();
        self.subscribe(&handler(move |notice| match notice {
            Notice::Value(v) => {
                let mut guard = state.lock();
                if guard.window.is_some() {
                    guard.suppressed = Some(v);
                    return;
                }
                let release = state.clone();
                guard.window = Some(timers.schedule(
                    delay,
                    Box::new(move || {
                        // Window closes; anything suppressed is stale now.
                        let mut guard = release.lock();
                        guard.window = None;
                        guard.suppressed = None;
                    }),
                ));
                drop(guard);
                downstream.publish(v);
            }
            Notice::Done(_) => {
                let flush = {
                    let mut guard = state.lock();
                    match guard.window.take() {
                        Some(token) => {
                            timers.cancel(token);
                            guard.suppressed.take()
                        }
                        None => None,
                    }
                };
                if let Some(v) = flush {
                    downstream.publish(v);
                }
                downstream.end();
            }
            Notice::Failed(error) => {
                let mut guard = state.lock();
                if let Some(token) = guard.window.take() {
                    timers.cancel(token);
                }
                guard.suppressed = None;
                drop(guard);
                downstream.fail(error);
            }
        }));
        throttled
    }
}
