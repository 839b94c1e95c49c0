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

//! # Time Intervals
//!
//! A non-negative span of time held as normalized hours, minutes and
//! seconds. Minutes and seconds always lie in `[0, 59]`; hours grow without
//! a sub-range, up to the point where the total still fits in `u64::MAX`
//! seconds.
//!
//! Every operation returns a new `TimeInterval`. Arithmetic flattens its
//! operands into total seconds, computes the result in `i128` so that
//! negative and oversized results can be detected, and renormalizes.
//!
//! ## Operators and named methods
//!
//! `+`, `-` and `*` are bound to the same code as `add_interval`,
//! `subtract_interval` and `multiply`. Because each of them can fail, the
//! operator output is `Result<TimeInterval, TimeIntervalError>`:
//!
//! ```rust
//! # use hourglass::interval::TimeInterval;
//! # fn main() -> Result<(), hourglass::error::TimeIntervalError> {
//! let a = TimeInterval::new(1, 30, 0)?;
//! let b = TimeInterval::new(0, 45, 0)?;
//!
//! assert_eq!((a + b)?.to_string(), "02:15:00");
//! assert_eq!((a - b)?, a.subtract_interval(b)?);
//! assert!((b - a).is_err());
//! assert_eq!((a * 2)?.to_string(), "03:00:00");
//! # Ok(())
//! # }
//! ```
//!
//! Operands of the wrong type are rejected at compile time:
//!
//! ```rust,compile_fail
//! # use hourglass::interval::TimeInterval;
//! let a = TimeInterval::new(1, 0, 0).unwrap();
//! let _ = a + 5;
//! ```
//!
//! ```rust,compile_fail
//! # use hourglass::interval::TimeInterval;
//! let _ = TimeInterval::new("1", 0, 0);
//! ```

use crate::{
    error::{Component, TimeIntervalError},
    units::{self, SECONDS_PER_HOUR, SECONDS_PER_MINUTE},
};
use num_traits::{PrimInt, ToPrimitive};
use std::{
    fmt::{Debug, Display},
    ops::{Add, Mul, Sub},
    time::Duration,
};

/// A non-negative time interval of normalized hours, minutes and seconds.
///
/// # Invariants
///
/// - `minutes <= 59` and `seconds <= 59`.
/// - `hours * 3600 + minutes * 60 + seconds <= u64::MAX`.
///
/// The derived ordering compares hours, then minutes, then seconds, which
/// is chronological order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeInterval {
    hours: u64,
    minutes: u8,
    seconds: u8,
}

#[inline]
fn component_to_u64<T>(value: T, component: Component) -> Result<u64, TimeIntervalError>
where
    T: PrimInt,
{
    if value < T::zero() {
        return Err(TimeIntervalError::NegativeComponent {
            component,
            value: value.to_i128().unwrap_or(i128::MIN),
        });
    }
    value.to_u64().ok_or(TimeIntervalError::Overflow)
}

impl TimeInterval {
    /// The empty interval, `00:00:00`.
    pub const ZERO: Self = Self {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// The largest representable interval, `u64::MAX` seconds.
    pub const MAX: Self = Self::from_total_seconds(u64::MAX);

    /// Creates a new `TimeInterval` from raw components.
    ///
    /// The components do not have to be normalized: seconds carry into
    /// minutes and minutes into hours.
    ///
    /// # Errors
    ///
    /// Returns [`TimeIntervalError::NegativeComponent`] if any component is
    /// negative, and [`TimeIntervalError::Overflow`] if the total exceeds
    /// `u64::MAX` seconds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hourglass::interval::TimeInterval;
    ///
    /// let iv = TimeInterval::new(0, 90, 0).unwrap();
    /// assert_eq!(iv.hours(), 1);
    /// assert_eq!(iv.minutes(), 30);
    /// assert_eq!(iv.to_string(), "01:30:00");
    ///
    /// assert!(TimeInterval::new(0, -1, 0).is_err());
    /// ```
    pub fn new<T>(hours: T, minutes: T, seconds: T) -> Result<Self, TimeIntervalError>
    where
        T: PrimInt,
    {
        let hours = component_to_u64(hours, Component::Hours)?;
        let minutes = component_to_u64(minutes, Component::Minutes)?;
        let seconds = component_to_u64(seconds, Component::Seconds)?;

        units::join_hms(hours, minutes, seconds)
            .map(Self::from_total_seconds)
            .ok_or(TimeIntervalError::Overflow)
    }

    /// Creates a `TimeInterval` spanning `total` seconds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hourglass::interval::TimeInterval;
    ///
    /// let iv = TimeInterval::from_total_seconds(3_723);
    /// assert_eq!(iv.to_string(), "01:02:03");
    /// ```
    #[inline]
    pub const fn from_total_seconds(total: u64) -> Self {
        let (hours, minutes, seconds) = units::split_seconds(total);
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Creates a `TimeInterval` spanning `minutes` minutes.
    ///
    /// # Errors
    ///
    /// Returns [`TimeIntervalError::Overflow`] if the total exceeds
    /// `u64::MAX` seconds.
    #[inline]
    pub fn from_minutes(minutes: u64) -> Result<Self, TimeIntervalError> {
        minutes
            .checked_mul(SECONDS_PER_MINUTE)
            .map(Self::from_total_seconds)
            .ok_or(TimeIntervalError::Overflow)
    }

    /// Creates a `TimeInterval` spanning `hours` hours.
    ///
    /// # Errors
    ///
    /// Returns [`TimeIntervalError::Overflow`] if the total exceeds
    /// `u64::MAX` seconds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hourglass::interval::TimeInterval;
    ///
    /// assert_eq!(TimeInterval::from_hours(100).unwrap().to_string(), "100:00:00");
    /// assert!(TimeInterval::from_hours(u64::MAX).is_err());
    /// ```
    #[inline]
    pub fn from_hours(hours: u64) -> Result<Self, TimeIntervalError> {
        hours
            .checked_mul(SECONDS_PER_HOUR)
            .map(Self::from_total_seconds)
            .ok_or(TimeIntervalError::Overflow)
    }

    /// Returns the hours component.
    #[inline]
    pub const fn hours(&self) -> u64 {
        self.hours
    }

    /// Returns the minutes component, always in `[0, 59]`.
    #[inline]
    pub const fn minutes(&self) -> u8 {
        self.minutes
    }

    /// Returns the seconds component, always in `[0, 59]`.
    #[inline]
    pub const fn seconds(&self) -> u8 {
        self.seconds
    }

    /// Returns the interval flattened to seconds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hourglass::interval::TimeInterval;
    ///
    /// let iv = TimeInterval::new(1, 2, 3).unwrap();
    /// assert_eq!(iv.total_seconds(), 3_723);
    /// ```
    #[inline]
    pub const fn total_seconds(&self) -> u64 {
        // Cannot overflow: the invariant bounds the total by `u64::MAX`.
        self.hours * SECONDS_PER_HOUR
            + self.minutes as u64 * SECONDS_PER_MINUTE
            + self.seconds as u64
    }

    /// Returns `true` if the interval is `00:00:00`.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }

    #[inline]
    fn signed_total(&self) -> i128 {
        self.total_seconds() as i128
    }

    /// Renormalizes a signed total of seconds.
    fn from_signed_total(total: i128) -> Result<Self, TimeIntervalError> {
        if total < 0 {
            return Err(TimeIntervalError::NegativeInterval {
                total_seconds: total,
            });
        }
        u64::try_from(total)
            .map(Self::from_total_seconds)
            .map_err(|_| TimeIntervalError::Overflow)
    }

    /// Adds another interval to this one.
    ///
    /// The components are summed field by field and the combined triple is
    /// renormalized. Identical to `self + other`.
    ///
    /// # Errors
    ///
    /// Returns [`TimeIntervalError::Overflow`] if the sum exceeds
    /// `u64::MAX` seconds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hourglass::interval::TimeInterval;
    ///
    /// let a = TimeInterval::new(0, 40, 30).unwrap();
    /// let b = TimeInterval::new(0, 20, 45).unwrap();
    /// assert_eq!(a.add_interval(b).unwrap().to_string(), "01:01:15");
    /// ```
    pub fn add_interval(self, other: TimeInterval) -> Result<Self, TimeIntervalError> {
        let hours = self.hours as i128 + other.hours as i128;
        let minutes = self.minutes as i128 + other.minutes as i128;
        let seconds = self.seconds as i128 + other.seconds as i128;

        Self::from_signed_total(
            hours * SECONDS_PER_HOUR as i128 + minutes * SECONDS_PER_MINUTE as i128 + seconds,
        )
    }

    /// Subtracts another interval from this one. Identical to `self - other`.
    ///
    /// # Errors
    ///
    /// Returns [`TimeIntervalError::NegativeInterval`] if `other` is longer
    /// than `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hourglass::interval::TimeInterval;
    /// # use hourglass::error::TimeIntervalError;
    ///
    /// let a = TimeInterval::new(0, 0, 1).unwrap();
    /// let b = TimeInterval::new(0, 0, 2).unwrap();
    /// assert_eq!(b.subtract_interval(a).unwrap().total_seconds(), 1);
    /// assert_eq!(
    ///     a.subtract_interval(b),
    ///     Err(TimeIntervalError::NegativeInterval { total_seconds: -1 })
    /// );
    /// ```
    pub fn subtract_interval(self, other: TimeInterval) -> Result<Self, TimeIntervalError> {
        Self::from_signed_total(self.signed_total() - other.signed_total())
    }

    /// Multiplies the interval by an integer scalar. Identical to `self * scalar`.
    ///
    /// # Errors
    ///
    /// Returns [`TimeIntervalError::NegativeScalar`] if `scalar` is negative,
    /// and [`TimeIntervalError::Overflow`] if the product exceeds `u64::MAX`
    /// seconds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hourglass::interval::TimeInterval;
    ///
    /// let iv = TimeInterval::new(1, 0, 0).unwrap();
    /// assert_eq!(iv.multiply(3).unwrap().total_seconds(), 3 * 3_600);
    /// assert!(iv.multiply(-1).is_err());
    /// ```
    pub fn multiply(self, scalar: i64) -> Result<Self, TimeIntervalError> {
        if scalar < 0 {
            return Err(TimeIntervalError::NegativeScalar { scalar });
        }
        let product = self
            .signed_total()
            .checked_mul(scalar as i128)
            .ok_or(TimeIntervalError::Overflow)?;
        Self::from_signed_total(product)
    }

    /// Adds `seconds` to the interval.
    ///
    /// # Errors
    ///
    /// Returns [`TimeIntervalError::NegativeInterval`] if a negative `seconds`
    /// drives the total below zero, and [`TimeIntervalError::Overflow`] if
    /// the total exceeds `u64::MAX` seconds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hourglass::interval::TimeInterval;
    ///
    /// let iv = TimeInterval::new(0, 0, 30).unwrap();
    /// assert_eq!(iv.add_seconds(40).unwrap().to_string(), "00:01:10");
    /// ```
    pub fn add_seconds(self, seconds: i64) -> Result<Self, TimeIntervalError> {
        Self::from_signed_total(self.signed_total() + seconds as i128)
    }

    /// Subtracts `seconds` from the interval.
    ///
    /// # Errors
    ///
    /// Returns [`TimeIntervalError::NegativeInterval`] if the total drops
    /// below zero, and [`TimeIntervalError::Overflow`] if a negative `seconds`
    /// pushes the total past `u64::MAX` seconds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hourglass::interval::TimeInterval;
    ///
    /// let iv = TimeInterval::new(0, 1, 0).unwrap();
    /// assert_eq!(iv.subtract_seconds(15).unwrap().to_string(), "00:00:45");
    /// assert!(iv.subtract_seconds(70).is_err());
    /// ```
    pub fn subtract_seconds(self, seconds: i64) -> Result<Self, TimeIntervalError> {
        Self::from_signed_total(self.signed_total() - seconds as i128)
    }

    /// Sums a sequence of intervals, stopping at the first error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hourglass::interval::TimeInterval;
    ///
    /// let laps = [
    ///     TimeInterval::new(0, 25, 10).unwrap(),
    ///     TimeInterval::new(0, 24, 55).unwrap(),
    ///     TimeInterval::new(0, 26, 5).unwrap(),
    /// ];
    /// assert_eq!(TimeInterval::try_sum(laps).unwrap().to_string(), "01:16:10");
    /// ```
    pub fn try_sum<I>(intervals: I) -> Result<Self, TimeIntervalError>
    where
        I: IntoIterator<Item = TimeInterval>,
    {
        intervals
            .into_iter()
            .try_fold(Self::ZERO, |acc, iv| acc.add_interval(iv))
    }
}

impl Add for TimeInterval {
    type Output = Result<TimeInterval, TimeIntervalError>;

    #[inline]
    fn add(self, rhs: TimeInterval) -> Self::Output {
        self.add_interval(rhs)
    }
}

impl Sub for TimeInterval {
    type Output = Result<TimeInterval, TimeIntervalError>;

    #[inline]
    fn sub(self, rhs: TimeInterval) -> Self::Output {
        self.subtract_interval(rhs)
    }
}

impl Mul<i64> for TimeInterval {
    type Output = Result<TimeInterval, TimeIntervalError>;

    #[inline]
    fn mul(self, rhs: i64) -> Self::Output {
        self.multiply(rhs)
    }
}

impl Display for TimeInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

impl Debug for TimeInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TimeInterval({})", self)
    }
}

impl From<TimeInterval> for Duration {
    #[inline]
    fn from(value: TimeInterval) -> Self {
        Duration::from_secs(value.total_seconds())
    }
}

impl TryFrom<Duration> for TimeInterval {
    type Error = TimeIntervalError;

    fn try_from(value: Duration) -> Result<Self, Self::Error> {
        match value.subsec_nanos() {
            0 => Ok(Self::from_total_seconds(value.as_secs())),
            nanos => Err(TimeIntervalError::SubSecondPrecision { nanos }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn iv(h: i64, m: i64, s: i64) -> TimeInterval {
        TimeInterval::new(h, m, s).unwrap()
    }

    fn random_interval(rng: &mut StdRng) -> TimeInterval {
        TimeInterval::from_total_seconds(rng.random_range(0..10_000_000u64))
    }

    #[test]
    fn test_new_normalizes() {
        let t = iv(0, 90, 0);
        assert_eq!((t.hours(), t.minutes(), t.seconds()), (1, 30, 0));

        let t = iv(1, 59, 61);
        assert_eq!((t.hours(), t.minutes(), t.seconds()), (2, 0, 1));

        let t = iv(0, 0, 7_384);
        assert_eq!((t.hours(), t.minutes(), t.seconds()), (2, 3, 4));
    }

    #[test]
    fn test_new_accepts_any_integer_type() {
        assert_eq!(TimeInterval::new(1u8, 2, 3).unwrap(), iv(1, 2, 3));
        assert_eq!(TimeInterval::new(1u128, 2, 3).unwrap(), iv(1, 2, 3));
        assert_eq!(TimeInterval::new(1isize, 2, 3).unwrap(), iv(1, 2, 3));
    }

    #[test]
    fn test_new_defaults_to_zero() {
        assert_eq!(TimeInterval::default(), TimeInterval::ZERO);
        assert_eq!(iv(0, 0, 0), TimeInterval::ZERO);
        assert!(TimeInterval::ZERO.is_zero());
        assert_eq!(TimeInterval::ZERO.to_string(), "00:00:00");
    }

    #[test]
    fn test_new_rejects_negative_components() {
        assert_eq!(
            TimeInterval::new(-1, 0, 0),
            Err(TimeIntervalError::NegativeComponent {
                component: Component::Hours,
                value: -1
            })
        );
        assert_eq!(
            TimeInterval::new(0, -30, 0),
            Err(TimeIntervalError::NegativeComponent {
                component: Component::Minutes,
                value: -30
            })
        );
        assert_eq!(
            TimeInterval::new(1, 0, -1),
            Err(TimeIntervalError::NegativeComponent {
                component: Component::Seconds,
                value: -1
            })
        );
    }

    #[test]
    fn test_new_rejects_overflow() {
        assert_eq!(
            TimeInterval::new(u64::MAX, 0, 0),
            Err(TimeIntervalError::Overflow)
        );
        assert_eq!(
            TimeInterval::new(0u128, 0, u64::MAX as u128 + 1),
            Err(TimeIntervalError::Overflow)
        );
        assert_eq!(TimeInterval::new(0, 0, u64::MAX), Ok(TimeInterval::MAX));
    }

    #[test]
    fn test_normalization_invariant_holds() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1_000 {
            let h = rng.random_range(0..1_000i64);
            let m = rng.random_range(0..10_000i64);
            let s = rng.random_range(0..100_000i64);
            let t = iv(h, m, s);
            assert!(t.minutes() <= 59);
            assert!(t.seconds() <= 59);
            assert_eq!(t.total_seconds() as i64, h * 3_600 + m * 60 + s);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(iv(1, 2, 3).to_string(), "01:02:03");
        assert_eq!(iv(100, 0, 0).to_string(), "100:00:00");
        assert_eq!(iv(0, 0, 59).to_string(), "00:00:59");
        assert_eq!(format!("{:?}", iv(1, 2, 3)), "TimeInterval(01:02:03)");
    }

    #[test]
    fn test_max() {
        assert_eq!(TimeInterval::MAX.total_seconds(), u64::MAX);
        assert_eq!(TimeInterval::MAX.hours(), u64::MAX / 3_600);
        assert_eq!(
            TimeInterval::MAX.add_seconds(1),
            Err(TimeIntervalError::Overflow)
        );
    }

    #[test]
    fn test_from_minutes_and_hours() {
        assert_eq!(TimeInterval::from_minutes(90).unwrap(), iv(1, 30, 0));
        assert_eq!(TimeInterval::from_hours(2).unwrap(), iv(2, 0, 0));
        assert_eq!(
            TimeInterval::from_minutes(u64::MAX),
            Err(TimeIntervalError::Overflow)
        );
    }

    #[test]
    fn test_add() {
        let sum = (iv(1, 45, 50) + iv(0, 30, 20)).unwrap();
        assert_eq!(sum.to_string(), "02:16:10");
        assert_eq!(iv(1, 45, 50).add_interval(iv(0, 30, 20)).unwrap(), sum);
    }

    #[test]
    fn test_add_overflow() {
        assert_eq!(
            TimeInterval::MAX + iv(0, 0, 1),
            Err(TimeIntervalError::Overflow)
        );
        assert_eq!(
            TimeInterval::MAX.add_interval(iv(0, 0, 1)),
            Err(TimeIntervalError::Overflow)
        );
    }

    #[test]
    fn test_add_associative() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let a = random_interval(&mut rng);
            let b = random_interval(&mut rng);
            let c = random_interval(&mut rng);
            let left = ((a + b).unwrap() + c).unwrap();
            let right = (a + (b + c).unwrap()).unwrap();
            assert_eq!(left.total_seconds(), right.total_seconds());
            assert_eq!(
                left.total_seconds(),
                a.total_seconds() + b.total_seconds() + c.total_seconds()
            );
        }
    }

    #[test]
    fn test_subtract() {
        let diff = (iv(2, 0, 0) - iv(0, 30, 15)).unwrap();
        assert_eq!(diff.to_string(), "01:29:45");
        assert_eq!((iv(1, 0, 0) - iv(1, 0, 0)).unwrap(), TimeInterval::ZERO);
    }

    #[test]
    fn test_subtract_negative() {
        assert_eq!(
            iv(0, 0, 1) - iv(0, 0, 2),
            Err(TimeIntervalError::NegativeInterval { total_seconds: -1 })
        );
        assert_eq!(
            iv(0, 0, 1).subtract_interval(iv(1, 0, 0)),
            Err(TimeIntervalError::NegativeInterval {
                total_seconds: -3_599
            })
        );
    }

    #[test]
    fn test_subtract_inverts_add() {
        let mut rng = StdRng::seed_from_u64(1234);
        for _ in 0..500 {
            let a = random_interval(&mut rng);
            let b = random_interval(&mut rng);
            let back = ((a + b).unwrap() - b).unwrap();
            assert_eq!(back.total_seconds(), a.total_seconds());
        }
    }

    #[test]
    fn test_multiply() {
        assert_eq!((iv(1, 0, 0) * 3).unwrap().total_seconds(), 3 * 3_600);
        assert_eq!((iv(0, 20, 30) * 4).unwrap().to_string(), "01:22:00");
        assert_eq!((iv(5, 4, 3) * 0).unwrap(), TimeInterval::ZERO);
        assert_eq!(iv(5, 4, 3).multiply(1).unwrap(), iv(5, 4, 3));
    }

    #[test]
    fn test_multiply_rejects_negative_scalar() {
        assert_eq!(
            iv(1, 0, 0) * -2,
            Err(TimeIntervalError::NegativeScalar { scalar: -2 })
        );
        assert_eq!(
            TimeInterval::ZERO.multiply(-1),
            Err(TimeIntervalError::NegativeScalar { scalar: -1 })
        );
    }

    #[test]
    fn test_multiply_overflow() {
        assert_eq!(TimeInterval::MAX * 2, Err(TimeIntervalError::Overflow));
        assert_eq!(
            TimeInterval::MAX.multiply(i64::MAX),
            Err(TimeIntervalError::Overflow)
        );
    }

    #[test]
    fn test_operators_match_named_methods() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..500 {
            let a = random_interval(&mut rng);
            let b = random_interval(&mut rng);
            let n = rng.random_range(-5..50i64);
            assert_eq!(a + b, a.add_interval(b));
            assert_eq!(a - b, a.subtract_interval(b));
            assert_eq!(b - a, b.subtract_interval(a));
            assert_eq!(a * n, a.multiply(n));
        }
    }

    #[test]
    fn test_add_seconds() {
        assert_eq!(iv(0, 0, 30).add_seconds(40).unwrap().to_string(), "00:01:10");
        assert_eq!(iv(0, 59, 59).add_seconds(1).unwrap().to_string(), "01:00:00");
        assert_eq!(iv(0, 1, 0).add_seconds(-60).unwrap(), TimeInterval::ZERO);
        assert_eq!(
            iv(0, 1, 0).add_seconds(-61),
            Err(TimeIntervalError::NegativeInterval { total_seconds: -1 })
        );
    }

    #[test]
    fn test_subtract_seconds() {
        assert_eq!(iv(0, 1, 0).subtract_seconds(60).unwrap(), TimeInterval::ZERO);
        assert_eq!(
            iv(0, 1, 0).subtract_seconds(70),
            Err(TimeIntervalError::NegativeInterval { total_seconds: -10 })
        );
        assert_eq!(iv(0, 0, 0).subtract_seconds(-5).unwrap(), iv(0, 0, 5));
        assert_eq!(
            TimeInterval::MAX.subtract_seconds(-1),
            Err(TimeIntervalError::Overflow)
        );
    }

    #[test]
    fn test_ordering() {
        assert!(iv(0, 59, 59) < iv(1, 0, 0));
        assert!(iv(1, 0, 1) > iv(1, 0, 0));
        assert!(iv(0, 2, 0) > iv(0, 1, 59));

        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            let a = random_interval(&mut rng);
            let b = random_interval(&mut rng);
            assert_eq!(a.cmp(&b), a.total_seconds().cmp(&b.total_seconds()));
        }
    }

    #[test]
    fn test_try_sum() {
        assert_eq!(
            TimeInterval::try_sum(std::iter::empty::<TimeInterval>()),
            Ok(TimeInterval::ZERO)
        );
        assert_eq!(
            TimeInterval::try_sum([iv(0, 30, 0), iv(0, 45, 0), iv(1, 0, 0)]).unwrap(),
            iv(2, 15, 0)
        );
        assert_eq!(
            TimeInterval::try_sum([TimeInterval::MAX, iv(0, 0, 1), iv(0, 0, 1)]),
            Err(TimeIntervalError::Overflow)
        );
    }

    #[test]
    fn test_std_duration_conversions() {
        let d: Duration = iv(1, 2, 3).into();
        assert_eq!(d, Duration::from_secs(3_723));

        assert_eq!(
            TimeInterval::try_from(Duration::from_secs(5_400)),
            Ok(iv(1, 30, 0))
        );
        assert_eq!(
            TimeInterval::try_from(Duration::from_millis(1_500)),
            Err(TimeIntervalError::SubSecondPrecision {
                nanos: 500_000_000
            })
        );
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let a = iv(1, 0, 0);
        let b = iv(0, 30, 0);
        let _ = (a + b).unwrap();
        let _ = (a - b).unwrap();
        let _ = (a * 3).unwrap();
        assert_eq!(a, iv(1, 0, 0));
        assert_eq!(b, iv(0, 30, 0));
    }

    #[test]
    fn test_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + Copy>() {}
        assert_send_sync::<TimeInterval>();
    }
}
