// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Stateful accumulation operator.

use crate::derive::derive;
use rill_core::{Notice, Rill};

/// Extension trait providing the `reduce` operator for cells.
pub trait ReduceExt<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Derives a cell seeded with `seed` that, for each upstream value `v`,
    /// publishes `f(v, acc)` where `acc` is the derived cell's current
    /// value. The accumulator is the only state the operator carries.
    fn reduce<U, F>(&self, f: F, seed: U) -> Rill<U>
    where
        U: Clone + Send + Sync + 'static,
        F: Fn(T, U) -> U + Send + Sync + 'static;
}

impl<T> ReduceExt<T> for Rill<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn reduce<U, F>(&self, f: F, seed: U) -> Rill<U>
    where
        U: Clone + Send + Sync + 'static,
        F: Fn(T, U) -> U + Send + Sync + 'static,
    {
        derive(self, Some(seed), move |downstream, notice| match notice {
            Notice::Value(v) => {
                // Seeded at construction, so the accumulator is always present.
                if let Some(acc) = downstream.value() {
                    downstream.publish(f(v, acc));
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
}
