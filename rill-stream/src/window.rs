// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Trailing window operator.

use crate::derive::derive;
use rill_core::{Notice, Rill};

/// Extension trait providing the `window` operator for cells.
pub trait WindowExt<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Derives a cell publishing a FIFO window of up to `capacity` most
    /// recent upstream values, ordered oldest to newest.
    ///
    /// Starts from an empty window. The oldest value is evicted before a
    /// new one is appended once the window is full; each upstream value
    /// republishes a snapshot. `window(0)` republishes an empty window on
    /// every upstream value.
    fn window(&self, capacity: usize) -> Rill<Vec<T>>;
}

impl<T> WindowExt<T> for Rill<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn window(&self, capacity: usize) -> Rill<Vec<T>> {
        derive(
            self,
            Some(Vec::new()),
            move |downstream, notice| match notice {
                Notice::Value(v) => {
                    let mut window = downstream.value().unwrap_or_default();
                    window.push(v);
                    while window.len() > capacity {
                        window.remove(0);
                    }
                    downstream.publish(window);
                }
                Notice::Done(_) => {
                    downstream.end();
                }
                Notice::Failed(error) => {
                    downstream.fail(error);
                }
            },
        )
    }
}
