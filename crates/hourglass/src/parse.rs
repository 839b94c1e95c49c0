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

//! Parsing of the `HH:MM:SS` form produced by `TimeInterval`'s `Display`.
//!
//! Hours are one or more ASCII digits with no upper width. Minutes and
//! seconds are exactly two ASCII digits in `00..=59`, so every rendered
//! interval parses back to itself and every accepted string has exactly one
//! rendering. Signs, whitespace and fractional seconds are rejected.

use crate::{
    error::{Component, ParseErrorKind, ParseTimeIntervalError},
    interval::TimeInterval,
    units,
};
use std::str::FromStr;

fn parse_digits(field: &str, component: Component) -> Result<u64, ParseTimeIntervalError> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseTimeIntervalError::new(
            ParseErrorKind::InvalidDigit,
            Some(component),
        ));
    }
    field.parse::<u64>().map_err(|_| {
        ParseTimeIntervalError::new(ParseErrorKind::Overflow, Some(component))
    })
}

fn parse_sub_hour(field: &str, component: Component) -> Result<u64, ParseTimeIntervalError> {
    let value = parse_digits(field, component)?;
    if field.len() != 2 {
        return Err(ParseTimeIntervalError::new(
            ParseErrorKind::FieldWidth,
            Some(component),
        ));
    }
    if value > 59 {
        return Err(ParseTimeIntervalError::new(
            ParseErrorKind::OutOfRange,
            Some(component),
        ));
    }
    Ok(value)
}

impl FromStr for TimeInterval {
    type Err = ParseTimeIntervalError;

    /// Parses an interval from `H+:MM:SS`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hourglass::interval::TimeInterval;
    /// # use hourglass::error::ParseErrorKind;
    ///
    /// let iv: TimeInterval = "100:05:09".parse().unwrap();
    /// assert_eq!(iv.hours(), 100);
    /// assert_eq!(iv.to_string(), "100:05:09");
    ///
    /// let err = "01:60:00".parse::<TimeInterval>().unwrap_err();
    /// assert_eq!(err.kind(), ParseErrorKind::OutOfRange);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseTimeIntervalError::new(ParseErrorKind::Empty, None));
        }

        let mut fields = s.split(':');
        let mut next_field = || {
            fields
                .next()
                .ok_or(ParseTimeIntervalError::new(ParseErrorKind::MissingField, None))
        };
        let hours_field = next_field()?;
        let minutes_field = next_field()?;
        let seconds_field = next_field()?;
        if fields.next().is_some() {
            return Err(ParseTimeIntervalError::new(
                ParseErrorKind::TrailingField,
                None,
            ));
        }

        let hours = parse_digits(hours_field, Component::Hours)?;
        let minutes = parse_sub_hour(minutes_field, Component::Minutes)?;
        let seconds = parse_sub_hour(seconds_field, Component::Seconds)?;

        units::join_hms(hours, minutes, seconds)
            .map(TimeInterval::from_total_seconds)
            .ok_or(ParseTimeIntervalError::new(
                ParseErrorKind::Overflow,
                Some(Component::Hours),
            ))
    }
}
