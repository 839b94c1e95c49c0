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

//! Error types for time interval construction, arithmetic and parsing.
//!
//! Argument types are checked by the compiler, so every error here is a
//! value error: a result that would be negative, a negative input the
//! operation does not accept, or a result that does not fit the interval's
//! `u64` range of seconds.

use std::fmt::Display;

/// A component of an `HH:MM:SS` triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Hours,
    Minutes,
    Seconds,
}

impl Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hours => write!(f, "hours"),
            Self::Minutes => write!(f, "minutes"),
            Self::Seconds => write!(f, "seconds"),
        }
    }
}

/// The error type for time interval construction and arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeIntervalError {
    /// The operation would produce a negative interval.
    NegativeInterval {
        /// The signed total number of seconds the operation computed.
        total_seconds: i128,
    },
    /// A raw component passed to a constructor was negative.
    NegativeComponent {
        /// The offending component.
        component: Component,
        /// The value that was passed.
        value: i128,
    },
    /// A scalar multiplier was negative.
    NegativeScalar {
        /// The multiplier that was passed.
        scalar: i64,
    },
    /// The result does not fit in `u64::MAX` seconds.
    Overflow,
    /// A `std::time::Duration` carried a fractional second.
    SubSecondPrecision {
        /// The sub-second part in nanoseconds.
        nanos: u32,
    },
}

impl Display for TimeIntervalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeInterval { total_seconds } => write!(
                f,
                "negative interval: the result would be {} seconds",
                total_seconds
            ),
            Self::NegativeComponent { component, value } => {
                write!(f, "{} must not be negative, got {}", component, value)
            }
            Self::NegativeScalar { scalar } => {
                write!(f, "cannot multiply an interval by a negative scalar ({scalar})")
            }
            Self::Overflow => write!(f, "interval exceeds the maximum of u64::MAX seconds"),
            Self::SubSecondPrecision { nanos } => write!(
                f,
                "duration has a sub-second part of {} ns; intervals hold whole seconds",
                nanos
            ),
        }
    }
}

impl std::error::Error for TimeIntervalError {}

/// What went wrong while parsing an `HH:MM:SS` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// The input was empty.
    Empty,
    /// Fewer than three `:`-separated fields.
    MissingField,
    /// More than three `:`-separated fields.
    TrailingField,
    /// A field contained something other than ASCII digits.
    InvalidDigit,
    /// Minutes or seconds were not exactly two digits wide.
    FieldWidth,
    /// Minutes or seconds exceeded 59.
    OutOfRange,
    /// The hours did not fit the interval range.
    Overflow,
}

/// Details about a failed `HH:MM:SS` parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParseTimeIntervalError {
    kind: ParseErrorKind,
    component: Option<Component>,
}

impl ParseTimeIntervalError {
    #[inline]
    pub(crate) const fn new(kind: ParseErrorKind, component: Option<Component>) -> Self {
        Self { kind, component }
    }

    /// Returns the kind of parse failure.
    #[inline]
    pub const fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Returns the field the failure occurred in, if it is tied to one.
    #[inline]
    pub const fn component(&self) -> Option<Component> {
        self.component
    }
}

impl Display for ParseTimeIntervalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self.kind {
            ParseErrorKind::Empty => "input is empty",
            ParseErrorKind::MissingField => "expected three fields in the form HH:MM:SS",
            ParseErrorKind::TrailingField => "unexpected field after seconds",
            ParseErrorKind::InvalidDigit => "invalid digit",
            ParseErrorKind::FieldWidth => "field must be exactly two digits",
            ParseErrorKind::OutOfRange => "field must be between 00 and 59",
            ParseErrorKind::Overflow => "interval exceeds the maximum of u64::MAX seconds",
        };
        match self.component {
            Some(component) => write!(f, "Could not parse time interval ({}): {}", component, reason),
            None => write!(f, "Could not parse time interval: {}", reason),
        }
    }
}

impl std::error::Error for ParseTimeIntervalError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_interval_display() {
        let err = TimeIntervalError::NegativeInterval { total_seconds: -1 };
        assert_eq!(
            err.to_string(),
            "negative interval: the result would be -1 seconds"
        );
    }

    #[test]
    fn test_negative_component_display() {
        let err = TimeIntervalError::NegativeComponent {
            component: Component::Minutes,
            value: -5,
        };
        assert_eq!(err.to_string(), "minutes must not be negative, got -5");
    }

    #[test]
    fn test_parse_error_display() {
        let err = ParseTimeIntervalError::new(ParseErrorKind::OutOfRange, Some(Component::Seconds));
        assert_eq!(err.kind(), ParseErrorKind::OutOfRange);
        assert_eq!(err.component(), Some(Component::Seconds));
        assert_eq!(
            err.to_string(),
            "Could not parse time interval (seconds): field must be between 00 and 59"
        );

        let err = ParseTimeIntervalError::new(ParseErrorKind::Empty, None);
        assert_eq!(err.to_string(), "Could not parse time interval: input is empty");
    }

    #[test]
    fn test_errors_are_std_errors() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<TimeIntervalError>();
        assert_error::<ParseTimeIntervalError>();
    }
}
