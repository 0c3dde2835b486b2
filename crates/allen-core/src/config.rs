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

//! # Measurement Configuration
//!
//! Policies that decide how [`Interval::measure`](crate::interval::Interval::measure)
//! treats intervals without a finite length.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// What `length` reports for an interval with at least one unbounded side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UnboundedLengthPolicy {
    /// Report `BoundaryValue::PositiveInfinity`.
    #[default]
    Infinite,
    /// Fail with `IntervalError::UnsupportedOperation`.
    Reject,
}

/// What `length` reports for an empty interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EmptyLengthPolicy {
    /// Report `BoundaryValue::Undefined`.
    #[default]
    Undefined,
    /// Fail with `IntervalError::UnsupportedOperation`.
    Reject,
}

/// Configuration for measuring intervals.
///
/// # Examples
///
/// ```
/// use allen_core::config::{MeasureConfig, UnboundedLengthPolicy};
///
/// let strict = MeasureConfig::builder()
///     .unbounded_length(UnboundedLengthPolicy::Reject)
///     .build();
/// assert_eq!(strict.unbounded_length(), UnboundedLengthPolicy::Reject);
/// assert_eq!(MeasureConfig::default().unbounded_length(), UnboundedLengthPolicy::Infinite);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MeasureConfig {
    #[serde(default)]
    unbounded_length: UnboundedLengthPolicy,
    #[serde(default)]
    empty_length: EmptyLengthPolicy,
}

impl MeasureConfig {
    #[inline]
    pub const fn new(
        unbounded_length: UnboundedLengthPolicy,
        empty_length: EmptyLengthPolicy,
    ) -> Self {
        Self {
            unbounded_length,
            empty_length,
        }
    }

    /// Rejects every interval that has no finite length.
    #[inline]
    pub const fn strict() -> Self {
        Self::new(UnboundedLengthPolicy::Reject, EmptyLengthPolicy::Reject)
    }

    #[inline]
    pub fn builder() -> MeasureConfigBuilder {
        MeasureConfigBuilder::new()
    }

    #[inline]
    pub const fn unbounded_length(&self) -> UnboundedLengthPolicy {
        self.unbounded_length
    }

    #[inline]
    pub const fn empty_length(&self) -> EmptyLengthPolicy {
        self.empty_length
    }
}

impl From<UnboundedLengthPolicy> for MeasureConfig {
    #[inline]
    fn from(policy: UnboundedLengthPolicy) -> Self {
        Self::new(policy, EmptyLengthPolicy::default())
    }
}

impl Display for MeasureConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "MeasureConfig:")?;
        writeln!(f, "  unbounded_length: {:?}", self.unbounded_length)?;
        write!(f, "  empty_length: {:?}", self.empty_length)
    }
}

/// Builder for `MeasureConfig`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeasureConfigBuilder {
    config: MeasureConfig,
}

impl MeasureConfigBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unbounded_length(mut self, policy: UnboundedLengthPolicy) -> Self {
        self.config.unbounded_length = policy;
        self
    }

    pub fn empty_length(mut self, policy: EmptyLengthPolicy) -> Self {
        self.config.empty_length = policy;
        self
    }

    pub fn build(self) -> MeasureConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keeps_sentinels() {
        let c = MeasureConfig::default();
        assert_eq!(c.unbounded_length(), UnboundedLengthPolicy::Infinite);
        assert_eq!(c.empty_length(), EmptyLengthPolicy::Undefined);
    }

    #[test]
    fn test_builder_sets_fields() {
        let c = MeasureConfigBuilder::new()
            .empty_length(EmptyLengthPolicy::Reject)
            .build();
        assert_eq!(c.empty_length(), EmptyLengthPolicy::Reject);
        assert_eq!(c.unbounded_length(), UnboundedLengthPolicy::Infinite);
        assert_eq!(
            MeasureConfig::builder()
                .unbounded_length(UnboundedLengthPolicy::Reject)
                .empty_length(EmptyLengthPolicy::Reject)
                .build(),
            MeasureConfig::strict()
        );
    }

    #[test]
    fn test_serde_fills_missing_fields_with_defaults() {
        let c: MeasureConfig = serde_json::from_str(r#"{"unbounded_length":"Reject"}"#).unwrap();
        assert_eq!(c, MeasureConfig::from(UnboundedLengthPolicy::Reject));

        let json = serde_json::to_string(&MeasureConfig::strict()).unwrap();
        let back: MeasureConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, MeasureConfig::strict());
    }

    #[test]
    fn test_display() {
        let text = MeasureConfig::default().to_string();
        assert!(text.contains("unbounded_length: Infinite"));
        assert!(text.contains("empty_length: Undefined"));
    }
}
