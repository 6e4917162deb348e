// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use rill_core::{handler, Handler, Notice, Rill};
use std::sync::Arc;

/// A subscriber that logs every notice it receives.
pub struct Recorder<T: Clone + Send + Sync + 'static> {
    notices: Arc<Mutex<Vec<Notice<T>>>>,
    on_notice: Handler<T>,
}

impl<T: Clone + Send + Sync + 'static> Recorder<T> {
    #[must_use]
    pub fn new() -> Self {
        let notices: Arc<Mutex<Vec<Notice<T>>>> = Arc::new(Mutex::new(Vec::new()));
        let log = notices.clone();
        let on_notice = handler(move |notice| log.lock().push(notice));
        Self { notices, on_notice }
    }

    /// Creates a recorder already subscribed to `cell`.
    #[must_use]
    pub fn attach(cell: &Rill<T>) -> Self {
        let recorder = Self::new();
        cell.subscribe(recorder.handle());
        recorder
    }

    /// The recording handler, for manual subscribe/unsubscribe.
    #[must_use]
    pub fn handle(&self) -> &Handler<T> {
        &self.on_notice
    }

    /// Every notice received so far, in delivery order.
    #[must_use]
    pub fn notices(&self) -> Vec<Notice<T>> {
        self.notices.lock().clone()
    }

    /// The published values received so far, in delivery order.
    #[must_use]
    pub fn values(&self) -> Vec<T> {
        self.notices
            .lock()
            .iter()
            .filter_map(|notice| match notice {
                Notice::Value(v) => Some(v.clone()),
                _ => None,
            })
            .collect()
    }

    /// Whether a normal completion notice was received.
    #[must_use]
    pub fn ended(&self) -> bool {
        self.notices
            .lock()
            .iter()
            .any(|notice| matches!(notice, Notice::Done(_)))
    }

    /// Whether a failure notice was received.
    #[must_use]
    pub fn failed(&self) -> bool {
        self.notices
            .lock()
            .iter()
            .any(|notice| matches!(notice, Notice::Failed(_)))
    }

    /// The value carried by the completion notice, if one arrived.
    #[must_use]
    pub fn final_value(&self) -> Option<T> {
        self.notices.lock().iter().find_map(|notice| match notice {
            Notice::Done(v) => v.clone(),
            _ => None,
        })
    }

    /// How many terminal notices were received. Anything above one is a
    /// delivery bug in the cell under test.
    #[must_use]
    pub fn terminal_count(&self) -> usize {
        self.notices
            .lock()
            .iter()
            .filter(|notice| notice.is_terminal())
            .count()
    }

    pub fn clear(&self) {
        self.notices.lock().clear();
    }
}

impl<T: Clone + Send + Sync + 'static> Default for Recorder<T> {
    fn default() -> Self {
        Self::new()
    }
}
