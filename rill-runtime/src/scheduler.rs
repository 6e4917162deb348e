// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::time::Duration;

/// Deferred-callback capability consumed by the timing operators.
///
/// The contract is deliberately small: schedule a one-shot callback, get a
/// token, optionally cancel it. Everything timing-related in the workspace
/// (`debounce`, `throttle`, `interval`, `timeout`) is generic over this
/// trait, so semantics can be tested on a virtual clock and run in
/// production on Tokio.
pub trait Scheduler: Clone + Send + Sync + 'static {
    /// Proof of a scheduled callback, consumed by [`cancel`](Scheduler::cancel).
    type Token: Send + 'static;

    /// Runs `callback` once, `delay` after now.
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce() + Send>) -> Self::Token;

    /// Cancels a scheduled callback.
    ///
    /// Must be safe on a token whose callback has already fired: the call
    /// is then a no-op. A cancelled callback never runs.
    fn cancel(&self, token: Self::Token);
}
