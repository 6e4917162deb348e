// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Periodic tick source.

use parking_lot::Mutex;
use rill_core::Rill;
use rill_runtime::Scheduler;
use std::sync::Arc;
use std::time::Duration;

/// A cell publishing an incrementing tick counter every `period`.
///
/// Each firing schedules the next one, keeping the in-flight token in a
/// shared slot; the termination hook cancels whatever token is current, so
/// the timer is released exactly once no matter who ends the cell.
pub fn interval<S: Scheduler>(period: Duration, scheduler: &S) -> Rill<u64> {
    let canceller = scheduler.clone();
    let timers = scheduler.clone();
    Rill::build_with_cleanup(
        None,
        move |cell| {
            let slot: Arc<Mutex<Option<S::Token>>> = Arc::new(Mutex::new(None));
            schedule_tick(&timers, period, cell.clone(), slot.clone(), 0);
            slot
        },
        move |slot: Arc<Mutex<Option<S::Token>>>| {
            if let Some(token) = slot.lock().take() {
                canceller.cancel(token);
            }
        },
    )
}

fn schedule_tick<S: Scheduler>(
    scheduler: &S,
    period: Duration,
    cell: Rill<u64>,
    slot: Arc<Mutex<Option<S::Token>>>,
    tick: u64,
) {
    let next_scheduler = scheduler.clone();
    let next_slot = slot.clone();
    let token = scheduler.schedule(
        period,
        Box::new(move || {
            if cell.is_done() {
                return;
            }
            cell.publish(tick);
            // A subscriber may have ended the cell during the publish.
            if !cell.is_done() {
                schedule_tick(&next_scheduler, period, cell, next_slot, tick + 1);
            }
        }),
    );
    *slot.lock() = Some(token);
}
