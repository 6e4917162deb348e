// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Predicate-based forwarding operators.

use crate::derive::derive;
use rill_core::{Notice, Rill};

/// Extension trait providing `filter` and `reject` for cells.
pub trait FilterExt<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Derives a cell that forwards only values satisfying `predicate`.
    ///
    /// The derived cell starts from the upstream's current value when that
    /// value satisfies the predicate. Termination always forwards.
    fn filter<P>(&self, predicate: P) -> Rill<T>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static;

    /// Complement of [`filter`](FilterExt::filter): forwards only values
    /// for which `predicate` does **not** hold.
    fn reject<P>(&self, predicate: P) -> Rill<T>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static;
}

impl<T> FilterExt<T> for Rill<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn filter<P>(&self, predicate: P) -> Rill<T>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let initial = self.value().filter(|current| predicate(current));
        derive(self, initial, move |downstream, notice| match notice {
            Notice::Value(v) => {
                if predicate(&v) {
                    downstream.publish(v);
                }
            }
            Notice::Done(_) => {
                downstream.end();
            }
            Notice::Failed(error) => {
                downstream.fail(error);
            }
        })
    }

    fn reject<P>(&self, predicate: P) -> Rill<T>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.filter(move |v| !predicate(v))
    }
}
