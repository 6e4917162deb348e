// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::RillError;

/// A notification delivered to cell subscribers.
///
/// Every notice captures the cell's value at the moment of the call that
/// triggered it. Terminal notices (`Done`, `Failed`) are delivered exactly
/// once per subscriber; after one has been delivered the cell is inert.
#[derive(Debug, Clone)]
pub enum Notice<T> {
    /// A published value.
    Value(T),
    /// Normal completion, carrying the final value if the cell ever held one.
    Done(Option<T>),
    /// Terminal failure. Distinct from `Done` so consumers can tell
    /// "ended with V" apart from "ended because of V".
    Failed(RillError),
}

impl<T> Notice<T> {
    /// Returns `true` if this is a `Value`.
    pub const fn is_value(&self) -> bool {
        matches!(self, Notice::Value(_))
    }

    /// Returns `true` if this notice terminates the cell (`Done` or `Failed`).
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Notice::Done(_) | Notice::Failed(_))
    }

    /// Converts into the carried value, if any. `Done` yields its final
    /// value; `Failed` yields `None`.
    pub fn into_value(self) -> Option<T> {
        match self {
            Notice::Value(v) => Some(v),
            Notice::Done(v) => v,
            Notice::Failed(_) => None,
        }
    }

    /// Maps the carried value, preserving the notice shape.
    pub fn map<U, F>(self, f: F) -> Notice<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Notice::Value(v) => Notice::Value(f(v)),
            Notice::Done(v) => Notice::Done(v.map(f)),
            Notice::Failed(e) => Notice::Failed(e),
        }
    }
}

impl<T: PartialEq> PartialEq for Notice<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Notice::Value(a), Notice::Value(b)) => a == b,
            (Notice::Done(a), Notice::Done(b)) => a == b,
            _ => false, // failures are never equal
        }
    }
}
