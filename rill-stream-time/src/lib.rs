// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Time-based shaping operators and sources for [`Rill`] cells.
//!
//! Everything here is generic over [`Scheduler`], the workspace's abstract
//! deferred-callback capability: production code hands in the Tokio-backed
//! scheduler from `rill-runtime`, tests hand in the deterministic
//! virtual-clock scheduler from `rill-test-utils` and assert exact firing
//! times.
//!
//! - [`debounce`](DebounceExt::debounce): emit only after a quiet period,
//!   carrying the most recent value; a pending value is dropped, not
//!   flushed, when the upstream ends.
//! - [`throttle`](ThrottleExt::throttle): leading edge — emit immediately,
//!   then suppress for a fixed window, recording the latest suppressed
//!   value; that value is flushed if the upstream ends while a window is
//!   open.
//! - [`interval`] / [`timeout`]: scheduler-driven source cells whose
//!   in-flight timer is cancelled exactly once when the cell terminates,
//!   no matter who terminates it.
//!
//! [`Rill`]: rill_core::Rill
//! [`Scheduler`]: rill_runtime::Scheduler

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod debounce;
pub mod interval;
pub mod throttle;
pub mod timeout;

pub use debounce::DebounceExt;
pub use interval::interval;
pub use throttle::ThrottleExt;
pub use timeout::timeout;
