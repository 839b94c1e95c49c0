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

//! # Hourglass
//!
//! Non-negative time intervals kept in normalized hours, minutes and
//! seconds, with checked arithmetic that never produces a negative or
//! wrapped-around value.
//!
//! ## Modules
//!
//! - `interval`: the `TimeInterval` value type. Construction from raw
//!   (possibly unnormalized) components, `HH:MM:SS` rendering, addition,
//!   subtraction, integer scaling and seconds offsets, each available both
//!   as an operator (`+`, `-`, `*`) and as a named method.
//! - `parse`: `FromStr` for the `HH:MM:SS` rendering.
//! - `units`: base-60 constants and the split/join between total seconds
//!   and `(hours, minutes, seconds)`.
//! - `error`: `TimeIntervalError` for arithmetic and construction, and
//!   `ParseTimeIntervalError` for parsing.
//!
//! ## Example
//!
//! ```rust
//! use hourglass::{TimeInterval, TimeIntervalError};
//!
//! # fn main() -> Result<(), TimeIntervalError> {
//! let shift = TimeInterval::new(7, 45, 0)?;
//! let overtime = TimeInterval::new(0, 90, 0)?;
//!
//! let week = ((shift + overtime)? * 5)?;
//! assert_eq!(week.to_string(), "46:15:00");
//!
//! let remaining = (week - TimeInterval::from_hours(40)?)?;
//! assert_eq!(remaining.to_string(), "06:15:00");
//!
//! assert!(matches!(
//!     remaining.subtract_seconds(86_400),
//!     Err(TimeIntervalError::NegativeInterval { .. })
//! ));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod interval;
pub mod parse;
pub mod units;

pub use error::{ParseTimeIntervalError, TimeIntervalError};
pub use interval::TimeInterval;
