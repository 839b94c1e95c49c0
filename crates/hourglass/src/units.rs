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

//! # Base-60 Units
//!
//! Constants and conversions between a flat count of seconds and the
//! `(hours, minutes, seconds)` triple used by [`TimeInterval`].
//!
//! Splitting always yields minutes and seconds in `[0, 59]`; joining is
//! checked and reports overflow as `None` instead of wrapping.
//!
//! [`TimeInterval`]: crate::interval::TimeInterval

/// Number of seconds in one minute.
pub const SECONDS_PER_MINUTE: u64 = 60;

/// Number of minutes in one hour.
pub const MINUTES_PER_HOUR: u64 = 60;

/// Number of seconds in one hour.
pub const SECONDS_PER_HOUR: u64 = SECONDS_PER_MINUTE * MINUTES_PER_HOUR;

/// Splits a total number of seconds into normalized `(hours, minutes, seconds)`.
///
/// # Examples
///
/// ```rust
/// # use hourglass::units::split_seconds;
///
/// assert_eq!(split_seconds(3_723), (1, 2, 3));
/// assert_eq!(split_seconds(59), (0, 0, 59));
/// ```
#[inline]
pub const fn split_seconds(total: u64) -> (u64, u8, u8) {
    let hours = total / SECONDS_PER_HOUR;
    let minutes = (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let seconds = total % SECONDS_PER_MINUTE;
    (hours, minutes as u8, seconds as u8)
}

/// Joins `(hours, minutes, seconds)` into a total number of seconds.
///
/// The components do not have to be normalized. Returns `None` if the
/// total does not fit in a `u64`.
///
/// # Examples
///
/// ```rust
/// # use hourglass::units::join_hms;
///
/// assert_eq!(join_hms(1, 2, 3), Some(3_723));
/// assert_eq!(join_hms(0, 90, 0), Some(5_400));
/// assert_eq!(join_hms(u64::MAX, 0, 0), None);
/// ```
#[inline]
pub const fn join_hms(hours: u64, minutes: u64, seconds: u64) -> Option<u64> {
    let Some(h) = hours.checked_mul(SECONDS_PER_HOUR) else {
        return None;
    };
    let Some(m) = minutes.checked_mul(SECONDS_PER_MINUTE) else {
        return None;
    };
    let Some(hm) = h.checked_add(m) else {
        return None;
    };
    hm.checked_add(seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(SECONDS_PER_MINUTE, 60);
        assert_eq!(MINUTES_PER_HOUR, 60);
        assert_eq!(SECONDS_PER_HOUR, 3_600);
    }

    #[test]
    fn test_split_zero() {
        assert_eq!(split_seconds(0), (0, 0, 0));
    }

    #[test]
    fn test_split_carries() {
        assert_eq!(split_seconds(60), (0, 1, 0));
        assert_eq!(split_seconds(3_599), (0, 59, 59));
        assert_eq!(split_seconds(3_600), (1, 0, 0));
        assert_eq!(split_seconds(360_000), (100, 0, 0));
    }

    #[test]
    fn test_split_max() {
        let (h, m, s) = split_seconds(u64::MAX);
        assert_eq!(h, u64::MAX / 3_600);
        assert!(m <= 59);
        assert!(s <= 59);
        assert_eq!(join_hms(h, m as u64, s as u64), Some(u64::MAX));
    }

    #[test]
    fn test_join_unnormalized() {
        assert_eq!(join_hms(0, 0, 70), Some(70));
        assert_eq!(join_hms(0, 61, 61), Some(3_721));
    }

    #[test]
    fn test_join_overflow() {
        assert_eq!(join_hms(0, u64::MAX, 0), None);
        assert_eq!(join_hms(0, 0, u64::MAX), Some(u64::MAX));
        assert_eq!(join_hms(0, 1, u64::MAX), None);
    }
}
