// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by [`Paginator`](crate::Paginator) and its builder.

use crate::Direction;

/// Coarse classification of a [`PaginatorError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The paginator could not be configured, typically because a default
    /// transition was requested without a [`TransitionFactory`](crate::TransitionFactory)
    /// to build it from.
    InvalidConfiguration,
    /// A caller supplied an argument that violates a precondition.
    InvalidArgument,
}

/// Error returned by fallible paginator operations.
///
/// Errors are reported before anything observable is mutated, so the paginator
/// is left exactly as it was when the call failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PaginatorError {
    /// A paginator was asked to manage an empty sequence of views.
    #[error("a paginator needs at least one view")]
    EmptyViews,
    /// A cursor position outside of the view sequence was requested.
    #[error("cursor {index} is out of range for {len} views")]
    CursorOutOfRange {
        /// The rejected position.
        index: usize,
        /// Number of views at the time of the call.
        len: usize,
    },
    /// No transition was supplied for `direction` and no factory is available
    /// to build a default one.
    #[error("no {0} transition was supplied and no transition factory is available")]
    MissingTransition(Direction),
}

impl PaginatorError {
    /// Returns the coarse classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyViews | Self::CursorOutOfRange { .. } => ErrorKind::InvalidArgument,
            Self::MissingTransition(_) => ErrorKind::InvalidConfiguration,
        }
    }
}
