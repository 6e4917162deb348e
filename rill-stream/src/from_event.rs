// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Bridge from a named-event emitter to a cell.

use rill_core::Rill;
use std::sync::Arc;

/// Callback an [`EventSource`] invokes per delivered event.
pub type EventListener<E> = Arc<dyn Fn(E) + Send + Sync + 'static>;

/// Minimal contract over an external event emitter.
///
/// Removal requires the registration returned by the matching
/// `add_listener` call; implementations are free to make the registration
/// carry whatever they need for that match.
pub trait EventSource {
    type Event: Clone + Send + Sync + 'static;
    type Registration: Send + 'static;

    /// Registers `listener` for the named event.
    fn add_listener(&self, event: &str, listener: EventListener<Self::Event>)
        -> Self::Registration;

    /// Removes the listener registered under `registration`.
    fn remove_listener(&self, event: &str, registration: Self::Registration);
}

/// Derives a cell from a named event on `source`.
///
/// The listener is registered at construction and publishes every delivered
/// payload. Whichever path terminates the cell — the emitter going away and
/// something calling `end()`, or a failure — removes the listener exactly
/// once, with the matching registration.
pub fn from_event<S>(source: &S, event: &str) -> Rill<S::Event>
where
    S: EventSource + Clone + Send + 'static,
{
    let unhook_source = source.clone();
    let unhook_event = event.to_string();
    Rill::build_with_cleanup(
        None,
        |cell| {
            let sink = cell.clone();
            let listener: EventListener<S::Event> = Arc::new(move |payload| {
                sink.publish(payload);
            });
            source.add_listener(event, listener)
        },
        move |registration| {
            unhook_source.remove_listener(&unhook_event, registration);
        },
    )
}
