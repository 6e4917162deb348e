// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Absent-value removal for cells of optional values.

use crate::derive::derive;
use rill_core::{Notice, Rill};

/// Extension trait providing `compact` on `Rill<Option<T>>`.
pub trait CompactExt<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Derives a `Rill<T>` forwarding only present values, unwrapped.
    ///
    /// "Absent" means exactly `None`; there is no looser falsiness rule.
    /// Termination always forwards.
    fn compact(&self) -> Rill<T>;
}

impl<T> CompactExt<T> for Rill<Option<T>>
where
    T: Clone + Send + Sync + 'static,
{
    fn compact(&self) -> Rill<T> {
        let initial = self.value().flatten();
        derive(self, initial, |downstream, notice| match notice {
            Notice::Value(Some(v)) => {
                downstream.publish(v);
            }
            Notice::Value(None) => {}
            Notice::Done(_) => {
                downstream.end();
            }
            Notice::Failed(error) => {
                downstream.fail(error);
            }
        })
    }
}
