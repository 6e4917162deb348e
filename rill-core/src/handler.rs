// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::notice::Notice;
use std::sync::Arc;

/// A subscriber callback.
///
/// Handlers are `Arc`-wrapped so the same handler can be registered,
/// compared by identity, and removed again; the cell deduplicates and
/// unsubscribes by pointer identity, never by value.
pub type Handler<T> = Arc<dyn Fn(Notice<T>) + Send + Sync + 'static>;

/// Wrap a closure into a [`Handler`].
pub fn handler<T, F>(f: F) -> Handler<T>
where
    F: Fn(Notice<T>) + Send + Sync + 'static,
{
    Arc::new(f)
}
