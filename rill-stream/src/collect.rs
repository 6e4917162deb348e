// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Roster of live cells published by a cell-of-cells.

use rill_core::{handler, Notice, Rill};

/// Accumulates every cell published by `sources` into a roster, publishing
/// the roster on each change.
///
/// A member leaves the roster when it terminates; a member publishing a
/// value re-notifies roster subscribers (via `touch`) without changing the
/// roster itself. Cells that are already terminated when published by
/// `sources` are skipped — they could never leave again. Termination of
/// `sources` terminates the roster.
pub fn collect<T>(sources: &Rill<Rill<T>>) -> Rill<Vec<Rill<T>>>
where
    T: Clone + Send + Sync + 'static,
{
    let roster: Rill<Vec<Rill<T>>> = Rill::with_value(Vec::new());
    if sources.is_done() {
        match sources.fault() {
            Some(error) => roster.fail(error),
            None => roster.end(),
        };
        return roster;
    }
    let downstream = roster.clone();
    sources.subscribe(&handler(move |notice: Notice<Rill<T>>| match notice {
        Notice::Value(member) => {
            if member.is_done() {
                return;
            }
            let mut current = downstream.value().unwrap_or_default();
            current.push(member.clone());
            downstream.publish(current);

            let out = downstream.clone();
            let tracked = member.clone();
            member.subscribe(&handler(move |member_notice: Notice<T>| {
                if member_notice.is_terminal() {
                    if let Some(current) = out.value() {
                        let remaining: Vec<Rill<T>> = current
                            .into_iter()
                            .filter(|candidate| !candidate.same(&tracked))
                            .collect();
                        out.publish(remaining);
                    }
                } else {
                    out.touch();
                }
            }));
        }
        Notice::Done(_) => {
            downstream.end();
        }
        Notice::Failed(error) => {
            downstream.fail(error);
        }
    }));
    roster
}
