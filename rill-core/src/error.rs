// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the rill reactive cell library.
//!
//! Failures travel through a cell as [`Notice::Failed`](crate::Notice),
//! a channel distinct from normal completion, so consumers never have to
//! guess whether a terminal value means "ended with V" or "ended because
//! of V".

/// Root error type for all rill operations.
#[derive(Debug, thiserror::Error)]
pub enum RillError {
    /// A producer (future, event source, external feed) failed.
    ///
    /// Carried by the failure channel of the cell that was backed by the
    /// producer; forwarded unchanged through derived cells.
    #[error("source failure: {context}")]
    SourceFailure {
        /// Description of what went wrong at the source
        context: String,
    },

    /// The cell completed normally before emitting a value.
    ///
    /// This is the documented policy of
    /// [`Rill::into_next`](crate::Rill::into_next): completion without a
    /// fresh value resolves to this error instead of hijacking the value
    /// slot of the completion notice.
    #[error("cell ended before producing a value")]
    EndedBeforeValue,

    /// Custom error from user code.
    ///
    /// Wraps errors produced by user-provided callbacks and sources so they
    /// can be propagated through the rill failure channel.
    #[error("user error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl RillError {
    /// Create a source failure with the given context.
    pub fn source_failure(context: impl Into<String>) -> Self {
        Self::SourceFailure {
            context: context.into(),
        }
    }

    /// Wrap a user error.
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }
}

/// Specialized Result type for rill operations.
pub type Result<T> = std::result::Result<T, RillError>;

/// Extension trait for converting errors into `RillError`.
///
/// Automatically implemented for all types implementing
/// `std::error::Error + Send + Sync + 'static`.
pub trait IntoRillError {
    /// Convert this error into a `RillError`.
    fn into_rill_error(self) -> RillError;
}

impl<E: std::error::Error + Send + Sync + 'static> IntoRillError for E {
    fn into_rill_error(self) -> RillError {
        RillError::user_error(self)
    }
}

impl Clone for RillError {
    fn clone(&self) -> Self {
        match self {
            Self::SourceFailure { context } => Self::SourceFailure {
                context: context.clone(),
            },
            Self::EndedBeforeValue => Self::EndedBeforeValue,
            // The boxed error cannot be cloned; degrade to its message.
            Self::UserError(e) => Self::SourceFailure {
                context: format!("user error: {}", e),
            },
        }
    }
}
