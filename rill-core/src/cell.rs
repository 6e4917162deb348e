// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The push-based reactive cell.
//!
//! A [`Rill<T>`] holds a current value and a completion flag and notifies
//! registered subscribers synchronously on every change. It is the substrate
//! every operator and combinator in the workspace builds on.
//!
//! ## Characteristics
//!
//! - **Push**: subscribers see values published after they register; nothing
//!   is buffered or replayed ([`Rill::subscribe_now`] is the pull-flavored
//!   variant for late subscribers).
//! - **Synchronous**: all notifications for one `publish`/`end`/`fail` call
//!   are delivered, in subscription order, before the call returns.
//! - **Re-entrant safe**: a handler that publishes to the cell it is
//!   observing does not recurse; the notice is queued and drained by the
//!   in-flight delivery, preserving last-write-wins state.
//! - **Cheap to clone**: all clones share the same cell.
//!
//! ## Example
//!
//! ```
//! use rill_core::{handler, Notice, Rill};
//! use std::sync::{Arc, Mutex};
//!
//! let cell = Rill::new();
//! let seen: Arc<Mutex<Vec<i32>>> = Arc::new(Mutex::new(Vec::new()));
//!
//! let sink = seen.clone();
//! let on_notice = handler(move |notice| {
//!     if let Notice::Value(v) = notice {
//!         sink.lock().unwrap().push(v);
//!     }
//! });
//!
//! cell.subscribe(&on_notice);
//! cell.publish(1).publish(2).end();
//!
//! assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
//! assert!(cell.is_done());
//! ```

use crate::error::RillError;
use crate::handler::{handler, Handler};
use crate::notice::Notice;
use crate::Result;
use futures::channel::oneshot;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::future::Future;
use std::sync::Arc;

struct CellState<T> {
    value: Option<T>,
    done: bool,
    fault: Option<RillError>,
    subscribers: Vec<Handler<T>>,
    // Notices captured while a delivery is in flight; drained by that
    // delivery in FIFO order.
    pending: VecDeque<Notice<T>>,
    notifying: bool,
    terminator: Option<Box<dyn FnOnce() + Send>>,
}

/// A mutable cell holding a current value and a completion flag, notifying
/// subscribers synchronously whenever either changes.
///
/// See the [module documentation](self) for semantics and an example.
pub struct Rill<T: Clone + Send + Sync + 'static> {
    state: Arc<Mutex<CellState<T>>>,
}

impl<T: Clone + Send + Sync + 'static> Rill<T> {
    /// Creates an empty active cell: no value yet, not completed.
    #[must_use]
    pub fn new() -> Self {
        Self::seeded(None)
    }

    /// Creates an active cell seeded with `value`.
    ///
    /// Seeding does not notify anyone; there are no subscribers yet.
    #[must_use]
    pub fn with_value(value: T) -> Self {
        Self::seeded(Some(value))
    }

    fn seeded(value: Option<T>) -> Self {
        Self {
            state: Arc::new(Mutex::new(CellState {
                value,
                done: false,
                fault: None,
                subscribers: Vec::new(),
                pending: VecDeque::new(),
                notifying: false,
                terminator: None,
            })),
        }
    }

    /// Creates a cell and invokes `setup` with it synchronously.
    ///
    /// `setup` may publish or end the cell immediately, or move a clone of
    /// the handle into an asynchronous callback (a timer, a spawned task)
    /// for later driving.
    pub fn build(initial: Option<T>, setup: impl FnOnce(&Self)) -> Self {
        let cell = Self::seeded(initial);
        setup(&cell);
        cell
    }

    /// As [`Rill::build`], with a cleanup hook tied to termination.
    ///
    /// `setup` returns a resource handle (a timer token, a listener
    /// registration); `cleanup` receives it when the cell terminates, on
    /// whichever path terminates it first — its own producer ending it, a
    /// failure, or an external [`end`](Rill::end) call. The hook runs
    /// exactly once. If `setup` terminates the cell synchronously, the hook
    /// runs before this constructor returns.
    pub fn build_with_cleanup<A, S, C>(initial: Option<T>, setup: S, cleanup: C) -> Self
    where
        A: Send + 'static,
        S: FnOnce(&Self) -> A,
        C: FnOnce(A) + Send + 'static,
    {
        let cell = Self::seeded(initial);
        let resource = setup(&cell);
        cell.set_terminator(Box::new(move || cleanup(resource)));
        cell
    }

    fn set_terminator(&self, terminator: Box<dyn FnOnce() + Send>) {
        let run_now = {
            let mut state = self.state.lock();
            if state.done {
                Some(terminator)
            } else {
                state.terminator = Some(terminator);
                None
            }
        };
        if let Some(run) = run_now {
            run();
        }
    }

    /// Current value, if the cell has ever held one.
    #[must_use]
    pub fn value(&self) -> Option<T> {
        self.state.lock().value.clone()
    }

    /// Returns `true` once the cell has terminated (normally or by failure).
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.state.lock().done
    }

    /// The failure the cell terminated with, if it terminated through
    /// [`fail`](Rill::fail).
    #[must_use]
    pub fn fault(&self) -> Option<RillError> {
        self.state.lock().fault.clone()
    }

    /// Number of currently registered subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.lock().subscribers.len()
    }

    /// Returns `true` if `other` is a handle to this same cell.
    #[must_use]
    pub fn same(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }

    /// Publishes `value`: stores it and notifies every current subscriber
    /// with [`Notice::Value`], in subscription order, before returning.
    ///
    /// No-op once the cell has terminated.
    pub fn publish(&self, value: T) -> &Self {
        let notice = {
            let mut state = self.state.lock();
            if state.done {
                return self;
            }
            state.value = Some(value.clone());
            let notice = Notice::Value(value);
            if state.notifying {
                state.pending.push_back(notice);
                return self;
            }
            state.notifying = true;
            notice
        };
        self.dispatch(notice);
        self
    }

    /// Publishes `f(current)` where `current` is the value before the call.
    pub fn update(&self, f: impl FnOnce(Option<T>) -> T) -> &Self {
        let current = self.value();
        self.publish(f(current))
    }

    /// Re-notifies every subscriber with the current value.
    ///
    /// Used by consumers that mutate a held value in place and need the
    /// change fanned out. No-op when the cell is terminated or still empty.
    pub fn touch(&self) -> &Self {
        let notice = {
            let mut state = self.state.lock();
            if state.done {
                return self;
            }
            let Some(current) = state.value.clone() else {
                return self;
            };
            let notice = Notice::Value(current);
            if state.notifying {
                state.pending.push_back(notice);
                return self;
            }
            state.notifying = true;
            notice
        };
        self.dispatch(notice);
        self
    }

    /// Terminates the cell normally.
    ///
    /// Idempotent. Notifies every current subscriber with
    /// [`Notice::Done`] carrying the final value, clears the subscriber
    /// registry, and runs the termination hook. The value itself is left
    /// untouched.
    pub fn end(&self) -> &Self {
        let notice = {
            let mut state = self.state.lock();
            if state.done {
                return self;
            }
            state.done = true;
            let notice = Notice::Done(state.value.clone());
            if state.notifying {
                state.pending.push_back(notice);
                return self;
            }
            state.notifying = true;
            notice
        };
        self.dispatch(notice);
        self
    }

    /// Terminates the cell through the failure channel.
    ///
    /// Subscribers receive [`Notice::Failed`] instead of `Done`; the error
    /// is retained and observable through [`fault`](Rill::fault). Shares
    /// idempotence with [`end`](Rill::end): the first terminal call wins.
    pub fn fail(&self, error: RillError) -> &Self {
        let notice = {
            let mut state = self.state.lock();
            if state.done {
                return self;
            }
            state.done = true;
            state.fault = Some(error.clone());
            let notice = Notice::Failed(error);
            if state.notifying {
                state.pending.push_back(notice);
                return self;
            }
            state.notifying = true;
            notice
        };
        self.dispatch(notice);
        self
    }

    // Delivers `first`, then drains whatever re-entrant calls queued while
    // it was being delivered. Caller must have set `notifying` under the
    // lock. The lock is never held across a handler invocation.
    fn dispatch(&self, first: Notice<T>) {
        let mut next = Some(first);
        while let Some(notice) = next {
            let terminal = notice.is_terminal();
            let targets = {
                let mut state = self.state.lock();
                let targets = state.subscribers.clone();
                if terminal {
                    state.subscribers.clear();
                }
                targets
            };
            for target in &targets {
                (**target)(notice.clone());
            }
            if terminal {
                let terminator = self.state.lock().terminator.take();
                if let Some(run) = terminator {
                    run();
                }
            }
            next = {
                let mut state = self.state.lock();
                match state.pending.pop_front() {
                    Some(queued) => Some(queued),
                    None => {
                        state.notifying = false;
                        None
                    }
                }
            };
        }
    }

    /// Registers `on_notice` for future notifications.
    ///
    /// Pure push: the handler is not invoked with the current value. The
    /// registry deduplicates by `Arc` identity and preserves subscription
    /// order. No-op once the cell has terminated. This is the default
    /// subscription variant; see [`subscribe_now`](Rill::subscribe_now) for
    /// the pull-flavored one.
    pub fn subscribe(&self, on_notice: &Handler<T>) -> &Self {
        let mut state = self.state.lock();
        if state.done {
            return self;
        }
        if !state
            .subscribers
            .iter()
            .any(|existing| Arc::ptr_eq(existing, on_notice))
        {
            state.subscribers.push(on_notice.clone());
        }
        self
    }

    /// Wraps `f` into a [`Handler`], subscribes it, and returns it so the
    /// caller can unsubscribe later.
    pub fn subscribe_fn<F>(&self, f: F) -> Handler<T>
    where
        F: Fn(Notice<T>) + Send + Sync + 'static,
    {
        let on_notice = handler(f);
        self.subscribe(&on_notice);
        on_notice
    }

    /// The pull-flavored subscription variant.
    ///
    /// Immediately invokes the handler with the cell's current state — a
    /// `Value` on a live cell that holds one, the terminal `Done`/`Failed`
    /// on a terminated cell — and registers it for future notifications
    /// when the cell is still active. A live cell with no value yet skips
    /// the immediate call; there is nothing to report.
    pub fn subscribe_now(&self, on_notice: &Handler<T>) -> &Self {
        let current = {
            let mut state = self.state.lock();
            if !state.done
                && !state
                    .subscribers
                    .iter()
                    .any(|existing| Arc::ptr_eq(existing, on_notice))
            {
                state.subscribers.push(on_notice.clone());
            }
            if let Some(error) = state.fault.clone() {
                Some(Notice::Failed(error))
            } else if state.done {
                Some(Notice::Done(state.value.clone()))
            } else {
                state.value.clone().map(Notice::Value)
            }
        };
        if let Some(notice) = current {
            (**on_notice)(notice);
        }
        self
    }

    /// Removes a previously registered handler, by identity.
    ///
    /// No-op when the handler is absent or the cell has terminated (a
    /// terminated cell's registry is already empty).
    pub fn unsubscribe(&self, on_notice: &Handler<T>) -> &Self {
        let mut state = self.state.lock();
        if state.done {
            return self;
        }
        state
            .subscribers
            .retain(|existing| !Arc::ptr_eq(existing, on_notice));
        self
    }

    /// One-shot subscription: `on_notice` is invoked for the first notice
    /// only, then unsubscribed. Returns the registered wrapper for early
    /// removal.
    pub fn once(&self, on_notice: Handler<T>) -> Handler<T> {
        let armed: Arc<Mutex<Option<Handler<T>>>> = Arc::new(Mutex::new(None));
        let cell = self.clone();
        let trigger = armed.clone();
        let wrapper: Handler<T> = handler(move |notice| {
            let me = trigger.lock().take();
            if let Some(me) = me {
                cell.unsubscribe(&me);
                (*on_notice)(notice);
            }
        });
        *armed.lock() = Some(wrapper.clone());
        self.subscribe(&wrapper);
        wrapper
    }

    /// Subscribes a filter that invokes `on_notice` only for the terminal
    /// notice (`Done` or `Failed`), ignoring intermediate publishes.
    /// Returns the registered wrapper for early removal.
    pub fn on_end(&self, on_notice: Handler<T>) -> Handler<T> {
        let wrapper: Handler<T> = handler(move |notice| {
            if notice.is_terminal() {
                (*on_notice)(notice);
            }
        });
        self.subscribe(&wrapper);
        wrapper
    }

    /// Single-value conversion: resolves with the first value published
    /// after this call.
    ///
    /// Policy on terminal-before-value: normal completion resolves
    /// `Err(RillError::EndedBeforeValue)`; failure resolves `Err` with the
    /// cell's fault. The current value is not consulted — push semantics.
    pub fn into_next(&self) -> impl Future<Output = Result<T>> + Send {
        let (tx, rx) = oneshot::channel::<Result<T>>();
        let resolver: Arc<Mutex<Option<oneshot::Sender<Result<T>>>>> =
            Arc::new(Mutex::new(Some(tx)));
        let resolve = resolver.clone();
        let _wrapper = self.once(handler(move |notice| {
            if let Some(tx) = resolve.lock().take() {
                let outcome = match notice {
                    Notice::Value(v) => Ok(v),
                    Notice::Done(_) => Err(RillError::EndedBeforeValue),
                    Notice::Failed(e) => Err(e),
                };
                let _ = tx.send(outcome);
            }
        }));
        // A cell that was already terminal never invokes the subscriber;
        // resolve from the terminal state instead.
        if self.is_done() {
            if let Some(tx) = resolver.lock().take() {
                let outcome = match self.fault() {
                    Some(error) => Err(error),
                    None => Err(RillError::EndedBeforeValue),
                };
                let _ = tx.send(outcome);
            }
        }
        async move { rx.await.unwrap_or(Err(RillError::EndedBeforeValue)) }
    }
}

impl<T: Clone + Send + Sync + 'static> Default for Rill<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + Sync + 'static> Clone for Rill<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}
