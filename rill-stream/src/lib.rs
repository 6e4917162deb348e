// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Derivation operators, merge combinators, aggregates, and source adapters
//! for [`Rill`] cells.
//!
//! Every operator here constructs a **new** derived cell wired to its
//! upstream: the derivation subscribes at construction time and republishes
//! transformed notices downstream, forming a directed acyclic graph rooted
//! at producers. Termination always propagates downstream — when an
//! upstream terminates, so does every cell derived from it (combinators
//! define their own completion policy) — and never automatically upstream.
//!
//! # Operator Categories
//!
//! ## Transformation
//!
//! - [`map`](MapExt::map): transform each value
//! - [`reduce`](ReduceExt::reduce): accumulate over published values
//! - [`window`](WindowExt::window): trailing FIFO window of recent values
//!
//! ## Filtering
//!
//! - [`filter`](FilterExt::filter) / [`reject`](FilterExt::reject):
//!   forward values by predicate
//! - [`compact`](CompactExt::compact): drop absent values from a
//!   `Rill<Option<T>>`, unwrapping the rest
//!
//! ## Combination
//!
//! - [`merge_race`]: fan several cells into one; ends when the **first**
//!   input ends
//! - [`merge_all`]: fan several cells into one; ends when the **last**
//!   input ends
//! - [`KeyedAggregate`] / [`IndexedAggregate`]: compose child cells into
//!   one structured cell whose value mirrors every child's current value
//! - [`collect`]: maintain a roster of live cells published by a
//!   cell-of-cells
//!
//! ## Source adapters
//!
//! - [`from_future`]: single-value awaitable to cell; failures travel the
//!   failure channel, never disguised as completion
//! - [`from_event`]: bridge a named event on an [`EventSource`], with
//!   listener removal tied to cell termination
//!
//! # Example
//!
//! ```
//! use rill_core::{handler, Notice, Rill};
//! use rill_stream::{FilterExt, MapExt};
//! use std::sync::{Arc, Mutex};
//!
//! let prices = Rill::new();
//! let alerts = prices.filter(|p: &i32| *p > 100).map(|p| format!("high: {p}"));
//!
//! let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
//! let sink = seen.clone();
//! alerts.subscribe(&handler(move |notice| {
//!     if let Notice::Value(v) = notice {
//!         sink.lock().unwrap().push(v);
//!     }
//! }));
//!
//! prices.publish(90).publish(120);
//! assert_eq!(*seen.lock().unwrap(), vec!["high: 120".to_string()]);
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
#[macro_use]
mod logging;
pub mod aggregate;
pub mod collect;
pub mod compact;
mod derive;
pub mod filter;
pub mod from_event;
pub mod from_future;
pub mod map;
pub mod merge;
pub mod reduce;
pub mod window;

pub use aggregate::{IndexedAggregate, KeyedAggregate};
pub use collect::collect;
pub use compact::CompactExt;
pub use filter::FilterExt;
pub use from_event::{from_event, EventListener, EventSource};
pub use from_future::from_future;
pub use map::MapExt;
pub use merge::{merge_all, merge_race, MergeExt};
pub use reduce::ReduceExt;
pub use rill_core::{Notice, Rill};
pub use window::WindowExt;
