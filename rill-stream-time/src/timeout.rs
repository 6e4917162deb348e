// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! One-shot delayed source.

use rill_core::Rill;
use rill_runtime::Scheduler;
use std::time::Duration;

/// A cell that publishes a single `()` after `delay`, then ends.
///
/// Terminating the cell before the timer fires cancels it; the termination
/// hook is also safe after the natural firing, where cancelling the spent
/// token is a no-op.
pub fn timeout<S: Scheduler>(delay: Duration, scheduler: &S) -> Rill<()> {
    let canceller = scheduler.clone();
    Rill::build_with_cleanup(
        None,
        |cell| {
            let sink = cell.clone();
            scheduler.schedule(
                delay,
                Box::new(move || {
                    sink.publish(()).end();
                }),
            )
        },
        move |token| {
            canceller.cancel(token);
        },
    )
}
