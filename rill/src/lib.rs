// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Rill
//!
//! A push-based reactive value container: a cell holding a current value
//! and a completion flag that notifies subscribers synchronously on every
//! change, with an operator algebra, merge combinators, structured
//! aggregates, and scheduler-driven timing operators layered on top.
//!
//! ## Overview
//!
//! The primitive is [`Rill<T>`]: publish values into it, subscribe callback
//! handlers to it, end it exactly once. Every operator derives a new cell
//! wired to its upstream, so pipelines form a directed acyclic graph rooted
//! at producers. Termination propagates downstream, never automatically
//! upstream; failures travel a dedicated channel ([`Notice::Failed`]),
//! distinguishable from normal completion.
//!
//! ## Quick Start
//!
//! ```rust
//! use rill::prelude::*;
//!
//! let readings = Rill::new();
//! let alarm_level = readings
//!     .filter(|celsius: &i32| *celsius > 80)
//!     .reduce(|_, count| count + 1, 0u32);
//!
//! readings.publish(75).publish(90).publish(85);
//! assert_eq!(alarm_level.value(), Some(2));
//! ```
//!
//! Timing operators take any [`Scheduler`]; production hands in
//! [`TokioScheduler`], tests drive a virtual clock from `rill-test-utils`:
//!
//! ```rust,no_run
//! use rill::prelude::*;
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let keystrokes: Rill<String> = Rill::new();
//! let queries = keystrokes.debounce(Duration::from_millis(250), &TokioScheduler::new());
//! # }
//! ```

// Re-export core types
pub use rill_core::{handler, Handler, IntoRillError, Notice, Result, Rill, RillError};

// Re-export the scheduler contract and the production implementation
pub use rill_runtime::{Scheduler, TokioScheduler};

// Re-export the operator surface
pub use rill_stream::{
    collect, from_event, from_future, merge_all, merge_race, CompactExt, EventListener,
    EventSource, FilterExt, IndexedAggregate, KeyedAggregate, MapExt, MergeExt, ReduceExt,
    WindowExt,
};

// Re-export the timing surface
pub use rill_stream_time::{interval, timeout, DebounceExt, ThrottleExt};

/// Prelude module for convenient imports
pub mod prelude {
    pub use rill_core::{handler, Notice, Rill, RillError};
    pub use rill_runtime::{Scheduler, TokioScheduler};
    pub use rill_stream::{
        collect, from_event, from_future, merge_all, merge_race, CompactExt, FilterExt,
        IndexedAggregate, KeyedAggregate, MapExt, MergeExt, ReduceExt, WindowExt,
    };
    pub use rill_stream_time::{interval, timeout, DebounceExt, ThrottleExt};
}
