// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::{handler, Notice, Rill};

/// Shared derivation wiring for single-upstream operators.
///
/// Seeds the derived cell, subscribes `forward` to the upstream, and handles
/// the already-terminated upstream: the derived cell then mirrors the
/// operator's initial-value rule and is terminated immediately, so no
/// derivation of a dead cell lingers active forever.
pub(crate) fn derive<T, U, F>(upstream: &Rill<T>, initial: Option<U>, forward: F) -> Rill<U>
where
    T: Clone + Send + Sync + 'static,
    U: Clone + Send + Sync + 'static,
    F: Fn(&Rill<U>, Notice<T>) + Send + Sync + 'static,
{
    let derived = Rill::build(initial, |_| {});
    if upstream.is_done() {
        match upstream.fault() {
            Some(error) => derived.fail(error),
            None => derived.end(),
        };
        return derived;
    }
    let downstream = derived.clone();
    upstream.subscribe(&handler(move |notice| forward(&downstream, notice)));
    derived
}
