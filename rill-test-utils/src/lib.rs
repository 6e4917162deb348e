// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for the rill workspace.
//!
//! Two pieces carry most tests:
//!
//! - [`Recorder`]: a subscriber that logs every notice it receives, with
//!   accessors for the common assertions (values seen, terminal state).
//! - [`ManualScheduler`]: a deterministic virtual-clock [`Scheduler`] —
//!   callbacks fire only when the test advances the clock, in due-then-FIFO
//!   order, so exact-timing properties are asserted without sleeping.
//!
//! For development and testing only, not for production code.
//!
//! [`Scheduler`]: rill_runtime::Scheduler

pub mod manual_scheduler;
pub mod recorder;

pub use self::manual_scheduler::ManualScheduler;
pub use self::recorder::Recorder;
