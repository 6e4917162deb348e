// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use rill_runtime::Scheduler;
use std::sync::Arc;
use std::time::Duration;

struct Entry {
    id: u64,
    due: Duration,
    callback: Box<dyn FnOnce() + Send>,
}

struct ManualState {
    now: Duration,
    next_id: u64,
    queue: Vec<Entry>,
}

/// Deterministic virtual-clock [`Scheduler`].
///
/// Nothing fires until [`advance`](ManualScheduler::advance) moves the
/// clock; due callbacks then run on the advancing thread, earliest deadline
/// first (FIFO among equal deadlines). A callback that schedules further
/// work within the advanced span is drained in the same call, so chained
/// reschedules (intervals) behave as they would on a real timer.
pub struct ManualScheduler {
    state: Arc<Mutex<ManualState>>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(ManualState {
                now: Duration::ZERO,
                next_id: 0,
                queue: Vec::new(),
            })),
        }
    }

    /// The virtual clock's current reading.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.state.lock().now
    }

    /// Number of callbacks still scheduled.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.state.lock().queue.len()
    }

    /// Moves the clock forward by `span`, firing every callback that comes
    /// due on the way, in deadline order.
    pub fn advance(&self, span: Duration) {
        let target = self.state.lock().now + span;
        loop {
            // Pop the earliest due entry; never hold the lock while the
            // callback runs, it may call schedule/cancel itself.
            let next = {
                let mut state = self.state.lock();
                let earliest = state
                    .queue
                    .iter()
                    .enumerate()
                    .filter(|(_, entry)| entry.due <= target)
                    .min_by_key(|(_, entry)| (entry.due, entry.id))
                    .map(|(index, _)| index);
                match earliest {
                    Some(index) => {
                        let entry = state.queue.remove(index);
                        state.now = entry.due;
                        Some(entry.callback)
                    }
                    None => {
                        state.now = target;
                        None
                    }
                }
            };
            match next {
                Some(callback) => callback(),
                None => break,
            }
        }
    }
}

impl Scheduler for ManualScheduler {
    type Token = u64;

    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce() + Send>) -> Self::Token {
        let mut state = self.state.lock();
        let id = state.next_id;
        state.next_id += 1;
        let due = state.now + delay;
        state.queue.push(Entry { id, due, callback });
        id
    }

    fn cancel(&self, token: Self::Token) {
        self.state
            .lock()
            .queue
            .retain(|entry| entry.id != token);
    }
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ManualScheduler {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}
