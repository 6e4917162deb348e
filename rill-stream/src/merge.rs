// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fan-in combinators under two completion policies.

use rill_core::{handler, Notice, Rill};
use std::sync::Arc;

/// Fans `inputs` into one cell that forwards every published value in
/// arrival order and **ends as soon as any single input terminates** —
/// first-to-finish wins, even while other inputs stay active.
///
/// An input that terminated through the failure channel fails the merged
/// cell. With no inputs at all there is no race to decide, and the merged
/// cell stays active indefinitely.
pub fn merge_race<T>(inputs: &[Rill<T>]) -> Rill<T>
where
    T: Clone + Send + Sync + 'static,
{
    let merged = Rill::new();
    for input in inputs {
        if input.is_done() {
            match input.fault() {
                Some(error) => merged.fail(error),
                None => merged.end(),
            };
            break; // the race is already decided
        }
        let downstream = merged.clone();
        input.subscribe(&handler(move |notice| match notice {
            Notice::Value(v) => {
                downstream.publish(v);
            }
            Notice::Done(_) => {
                downstream.end();
            }
            Notice::Failed(error) => {
                downstream.fail(error);
            }
        }));
    }
    merged
}

/// Fans `inputs` into one cell that forwards every published value in
/// arrival order and **ends only once every input has terminated**: each
/// input's completion checks the conjunction over all inputs.
///
/// A failing input is the exception — it fails the merged cell immediately,
/// without waiting for the stragglers. With no inputs the conjunction is
/// vacuously true and the merged cell completes at once.
pub fn merge_all<T>(inputs: &[Rill<T>]) -> Rill<T>
where
    T: Clone + Send + Sync + 'static,
{
    let merged = Rill::new();
    let roster: Arc<Vec<Rill<T>>> = Arc::new(inputs.to_vec());
    for input in inputs {
        if input.is_done() {
            if let Some(error) = input.fault() {
                merged.fail(error);
            }
            continue; // counted by the conjunction below
        }
        let downstream = merged.clone();
        let all = roster.clone();
        input.subscribe(&handler(move |notice| match notice {
            Notice::Value(v) => {
                downstream.publish(v);
            }
            Notice::Done(_) => {
                if all.iter().all(Rill::is_done) {
                    downstream.end();
                }
            }
            Notice::Failed(error) => {
                downstream.fail(error);
            }
        }));
    }
    if roster.iter().all(Rill::is_done) {
        merged.end();
    }
    merged
}

/// Instance-style sugar over [`merge_race`] and [`merge_all`].
pub trait MergeExt<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// `merge_race` over `self` and `others`.
    fn merge_race_with(&self, others: &[Rill<T>]) -> Rill<T>;

    /// `merge_all` over `self` and `others`.
    fn merge_all_with(&self, others: &[Rill<T>]) -> Rill<T>;
}

impl<T> MergeExt<T> for Rill<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn merge_race_with(&self, others: &[Rill<T>]) -> Rill<T> {
        merge_race(&join(self, others))
    }

    fn merge_all_with(&self, others: &[Rill<T>]) -> Rill<T> {
        merge_all(&join(self, others))
    }
}

fn join<T>(first: &Rill<T>, rest: &[Rill<T>]) -> Vec<Rill<T>>
where
    T: Clone + Send + Sync + 'static,
{
    let mut inputs = Vec::with_capacity(rest.len() + 1);
    inputs.push(first.clone());
    inputs.extend_from_slice(rest);
    inputs
}
