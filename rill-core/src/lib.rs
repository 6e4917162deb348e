// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod cell;
pub mod error;
pub mod handler;
pub mod notice;

pub use self::cell::Rill;
pub use self::error::{IntoRillError, Result, RillError};
pub use self::handler::{handler, Handler};
pub use self::notice::Notice;
