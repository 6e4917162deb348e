// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Value transformation operator.

use crate::derive::derive;
use rill_core::{Notice, Rill};

/// Extension trait providing the `map` operator for cells.
pub trait MapExt<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Derives a cell that republishes every upstream value through `f`.
    ///
    /// The derived cell starts from `f` applied to the upstream's current
    /// value, when it has one. Termination forwards unchanged: `Done` ends
    /// the derived cell, `Failed` fails it.
    fn map<U, F>(&self, f: F) -> Rill<U>
    where
        U: Clone + Send + Sync + 'static,
        F: Fn(T) -> U + Send + Sync + 'static;
}

impl<T> MapExt<T> for Rill<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn map<U, F>(&self, f: F) -> Rill<U>
    where
        U: Clone + Send + Sync + 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        let initial = self.value().map(&f);
        derive(self, initial, move |downstream, notice| match notice {
            Notice::Value(v) => {
                downstream.publish(f(v));
            }
            Notice::Done(_) => {
                downstream.end();
            }
            Notice::Failed(error) => {
                downstream.fail(error);
            }
        })
    }
}
