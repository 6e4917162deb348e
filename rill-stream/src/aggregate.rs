// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Structured composition of child cells.
//!
//! An aggregate owns a set of child cells — keyed by an ordered key type or
//! held in insertion order — and exposes one output cell whose value
//! mirrors every attached child's current value. Attaching, detaching, and
//! every child publish republish the mirror synchronously.
//!
//! The structure kind is chosen at the type level: [`KeyedAggregate`] has
//! `set`/`delete`, [`IndexedAggregate`] has `push`/`delete`; calling the
//! operation of the other kind simply does not compile.
//!
//! A child terminating neither detaches it nor terminates the aggregate:
//! its last mirrored value stays in place until the child is removed.

use parking_lot::Mutex;
use rill_core::{handler, Handler, Notice, Rill};
use std::collections::BTreeMap;
use std::sync::Arc;

struct Slot<T: Clone + Send + Sync + 'static> {
    cell: Rill<T>,
    forward: Handler<T>,
}

/// Aggregate of child cells addressed by an ordered key.
///
/// The output cell holds a `BTreeMap<K, Option<T>>`: one entry per attached
/// child, `None` while that child has not published yet.
pub struct KeyedAggregate<K, T>
where
    K: Ord + Clone + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
{
    children: Arc<Mutex<BTreeMap<K, Slot<T>>>>,
    output: Rill<BTreeMap<K, Option<T>>>,
}

impl<K, T> KeyedAggregate<K, T>
where
    K: Ord + Clone + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
{
    #[must_use]
    pub fn new() -> Self {
        Self {
            children: Arc::new(Mutex::new(BTreeMap::new())),
            output: Rill::with_value(BTreeMap::new()),
        }
    }

    /// The aggregate's own cell; subscribe or derive from it like any other.
    #[must_use]
    pub fn output(&self) -> &Rill<BTreeMap<K, Option<T>>> {
        &self.output
    }

    /// The child currently attached at `key`.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<Rill<T>> {
        self.children.lock().get(key).map(|slot| slot.cell.clone())
    }

    /// Attaches `child` at `key`, replacing and unhooking any current
    /// occupant, mirrors its value into the output, and republishes.
    ///
    /// Every future publish of the child updates the mirror and republishes
    /// the aggregate. No-op once the output cell has terminated.
    pub fn set(&self, key: K, child: &Rill<T>) -> &Self {
        if self.output.is_done() {
            return self;
        }
        let previous = self.children.lock().remove(&key);
        if let Some(slot) = previous {
            slot.cell.unsubscribe(&slot.forward);
        }
        let forward = {
            let children = self.children.clone();
            let output = self.output.clone();
            handler(move |notice: Notice<T>| {
                if notice.is_value() {
                    output.publish(mirror_keyed(&children));
                }
            })
        };
        child.subscribe(&forward);
        self.children.lock().insert(
            key,
            Slot {
                cell: child.clone(),
                forward,
            },
        );
        self.output.publish(mirror_keyed(&self.children));
        self
    }

    /// Detaches the child at `key`: unhooks the forwarding handler, drops
    /// the slot from the structure and the mirror, republishes. Returns
    /// whether a removal occurred.
    pub fn delete(&self, key: &K) -> bool {
        if self.output.is_done() {
            return false;
        }
        let removed = self.children.lock().remove(key);
        match removed {
            None => false,
            Some(slot) => {
                slot.cell.unsubscribe(&slot.forward);
                self.output.publish(mirror_keyed(&self.children));
                true
            }
        }
    }

    /// Detaches `child`, located by handle identity; delegates to
    /// [`delete`](KeyedAggregate::delete). Returns whether a removal
    /// occurred.
    pub fn remove(&self, child: &Rill<T>) -> bool {
        let key = self
            .children
            .lock()
            .iter()
            .find(|(_, slot)| slot.cell.same(child))
            .map(|(key, _)| key.clone());
        match key {
            Some(key) => self.delete(&key),
            None => false,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.children.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.lock().is_empty()
    }
}

impl<K, T> Default for KeyedAggregate<K, T>
where
    K: Ord + Clone + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, T> Clone for KeyedAggregate<K, T>
where
    K: Ord + Clone + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            children: self.children.clone(),
            output: self.output.clone(),
        }
    }
}

fn mirror_keyed<K, T>(children: &Arc<Mutex<BTreeMap<K, Slot<T>>>>) -> BTreeMap<K, Option<T>>
where
    K: Ord + Clone + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
{
    children
        .lock()
        .iter()
        .map(|(key, slot)| (key.clone(), slot.cell.value()))
        .collect()
}

/// Aggregate of child cells held in insertion order.
///
/// The output cell holds a `Vec<Option<T>>`, one entry per attached child.
/// Deleting a slot shifts the children after it down, as in any list.
pub struct IndexedAggregate<T>
where
    T: Clone + Send + Sync + 'static,
{
    children: Arc<Mutex<Vec<Slot<T>>>>,
    output: Rill<Vec<Option<T>>>,
}

impl<T> IndexedAggregate<T>
where
    T: Clone + Send + Sync + 'static,
{
    #[must_use]
    pub fn new() -> Self {
        Self {
            children: Arc::new(Mutex::new(Vec::new())),
            output: Rill::with_value(Vec::new()),
        }
    }

    /// The aggregate's own cell.
    #[must_use]
    pub fn output(&self) -> &Rill<Vec<Option<T>>> {
        &self.output
    }

    /// The child currently attached at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Rill<T>> {
        self.children
            .lock()
            .get(index)
            .map(|slot| slot.cell.clone())
    }

    /// Appends `child` at the next index, mirrors its value into the
    /// output, and republishes. Same forwarding behavior as
    /// [`KeyedAggregate::set`]. No-op once the output cell has terminated.
    pub fn push(&self, child: &Rill<T>) -> &Self {
        if self.output.is_done() {
            return self;
        }
        let forward = {
            let children = self.children.clone();
            let output = self.output.clone();
            handler(move |notice: Notice<T>| {
                if notice.is_value() {
                    output.publish(mirror_indexed(&children));
                }
            })
        };
        child.subscribe(&forward);
        self.children.lock().push(Slot {
            cell: child.clone(),
            forward,
        });
        self.output.publish(mirror_indexed(&self.children));
        self
    }

    /// Detaches the child at `index`, shifting later children down.
    /// Returns whether a removal occurred.
    pub fn delete(&self, index: usize) -> bool {
        if self.output.is_done() {
            return false;
        }
        let removed = {
            let mut children = self.children.lock();
            if index < children.len() {
                Some(children.remove(index))
            } else {
                None
            }
        };
        match removed {
            None => false,
            Some(slot) => {
                slot.cell.unsubscribe(&slot.forward);
                self.output.publish(mirror_indexed(&self.children));
                true
            }
        }
    }

    /// Detaches `child`, located by handle identity; delegates to
    /// [`delete`](IndexedAggregate::delete).
    pub fn remove(&self, child: &Rill<T>) -> bool {
        let index = self
            .children
            .lock()
            .iter()
            .position(|slot| slot.cell.same(child));
        match index {
            Some(index) => self.delete(index),
            None => false,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.children.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.lock().is_empty()
    }
}

impl<T> Default for IndexedAggregate<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for IndexedAggregate<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            children: self.children.clone(),
            output: self.output.clone(),
        }
    }
}

fn mirror_indexed<T>(children: &Arc<Mutex<Vec<Slot<T>>>>) -> Vec<Option<T>>
where
    T: Clone + Send + Sync + 'static,
{
    children
        .lock()
        .iter()
        .map(|slot| slot.cell.value())
        .collect()
}
