// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Errors
//!
//! Every fallible operation of this crate reports an [`IntervalError`]. The
//! three variants wrap small payload structs that name the failing operation
//! and the reason, so callers can match on the category and still print a
//! precise message.

use std::fmt::Display;

/// An internal consistency violation, such as ordering an `Undefined`
/// boundary or leaving the 13-value relation timeline.
///
/// Seeing this error means a caller broke a documented precondition or the
/// crate has a bug. It is never produced by valid user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidStateError {
    operation: &'static str,
    reason: &'static str,
}

impl InvalidStateError {
    #[inline]
    pub const fn new(operation: &'static str, reason: &'static str) -> Self {
        Self { operation, reason }
    }

    #[inline]
    pub const fn operation(&self) -> &'static str {
        self.operation
    }

    #[inline]
    pub const fn reason(&self) -> &'static str {
        self.reason
    }
}

impl Display for InvalidStateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: invalid state: {}", self.operation, self.reason)
    }
}

impl std::error::Error for InvalidStateError {}

/// An operation that is well-formed but not defined for the given interval
/// under the active policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnsupportedOperationError {
    operation: &'static str,
    reason: &'static str,
}

impl UnsupportedOperationError {
    #[inline]
    pub const fn new(operation: &'static str, reason: &'static str) -> Self {
        Self { operation, reason }
    }

    #[inline]
    pub const fn operation(&self) -> &'static str {
        self.operation
    }

    #[inline]
    pub const fn reason(&self) -> &'static str {
        self.reason
    }
}

impl Display for UnsupportedOperationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: unsupported operation: {}", self.operation, self.reason)
    }
}

impl std::error::Error for UnsupportedOperationError {}

/// An argument that violates a construction invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidArgumentError {
    operation: &'static str,
    reason: &'static str,
}

impl InvalidArgumentError {
    #[inline]
    pub const fn new(operation: &'static str, reason: &'static str) -> Self {
        Self { operation, reason }
    }

    #[inline]
    pub const fn operation(&self) -> &'static str {
        self.operation
    }

    #[inline]
    pub const fn reason(&self) -> &'static str {
        self.reason
    }
}

impl Display for InvalidArgumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: invalid argument: {}", self.operation, self.reason)
    }
}

impl std::error::Error for InvalidArgumentError {}

/// The error type of the interval algebra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalError {
    /// An unreachable combination was hit; see [`InvalidStateError`].
    InvalidState(InvalidStateError),
    /// The operation is undefined for the input; see [`UnsupportedOperationError`].
    UnsupportedOperation(UnsupportedOperationError),
    /// The input violates a construction rule; see [`InvalidArgumentError`].
    InvalidArgument(InvalidArgumentError),
}

impl IntervalError {
    #[inline]
    pub const fn invalid_state(operation: &'static str, reason: &'static str) -> Self {
        Self::InvalidState(InvalidStateError::new(operation, reason))
    }

    #[inline]
    pub const fn unsupported(operation: &'static str, reason: &'static str) -> Self {
        Self::UnsupportedOperation(UnsupportedOperationError::new(operation, reason))
    }

    #[inline]
    pub const fn invalid_argument(operation: &'static str, reason: &'static str) -> Self {
        Self::InvalidArgument(InvalidArgumentError::new(operation, reason))
    }

    /// Returns the name of the operation that failed.
    #[inline]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::InvalidState(e) => e.operation(),
            Self::UnsupportedOperation(e) => e.operation(),
            Self::InvalidArgument(e) => e.operation(),
        }
    }
}

impl Display for IntervalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidState(e) => write!(f, "{e}"),
            Self::UnsupportedOperation(e) => write!(f, "{e}"),
            Self::InvalidArgument(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for IntervalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidState(e) => Some(e),
            Self::UnsupportedOperation(e) => Some(e),
            Self::InvalidArgument(e) => Some(e),
        }
    }
}

impl From<InvalidStateError> for IntervalError {
    fn from(e: InvalidStateError) -> Self {
        Self::InvalidState(e)
    }
}

impl From<UnsupportedOperationError> for IntervalError {
    fn from(e: UnsupportedOperationError) -> Self {
        Self::UnsupportedOperation(e)
    }
}

impl From<InvalidArgumentError> for IntervalError {
    fn from(e: InvalidArgumentError) -> Self {
        Self::InvalidArgument(e)
    }
}
