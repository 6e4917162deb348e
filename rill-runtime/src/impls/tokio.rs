// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::scheduler::Scheduler;
use core::time::Duration;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Tokio-backed [`Scheduler`]: each callback runs on a spawned task after a
/// `tokio::time::sleep`.
///
/// Must be used from within a Tokio runtime context.
#[derive(Clone, Debug, Default)]
pub struct TokioScheduler;

impl TokioScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// Token for a callback scheduled on [`TokioScheduler`].
pub struct TokioToken {
    cancelled: Arc<AtomicBool>,
    task: tokio::task::JoinHandle<()>,
}

impl Scheduler for TokioScheduler {
    type Token = TokioToken;

    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce() + Send>) -> Self::Token {
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = cancelled.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Release/Acquire pairing with cancel(): a cancel that lands
            // before this load suppresses the callback for good.
            if !flag.load(Ordering::Acquire) {
                callback();
            }
        });
        TokioToken { cancelled, task }
    }

    fn cancel(&self, token: Self::Token) {
        token.cancelled.store(true, Ordering::Release);
        token.task.abort();
    }
}
