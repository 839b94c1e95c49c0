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

use crate::status::HourglassStatus;
use hourglass::{TimeInterval, TimeIntervalError};
use libc::c_char;
use std::ffi::{CStr, CString};
use std::time::Duration;

/// FFI-compatible wrapper around `TimeInterval`.
///
/// Handles are immutable. Every arithmetic call allocates a fresh handle
/// that the caller releases with `hourglass_interval_free`.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourglassTimeInterval {
    inner: TimeInterval,
}

impl HourglassTimeInterval {
    /// Returns the wrapped `TimeInterval`.
    #[inline]
    pub fn inner(&self) -> TimeInterval {
        self.inner
    }
}

impl From<TimeInterval> for HourglassTimeInterval {
    #[inline]
    fn from(inner: TimeInterval) -> Self {
        HourglassTimeInterval { inner }
    }
}

/// Borrows the interval behind a handle, failing fast on null.
#[inline]
unsafe fn interval_ref<'a>(ptr: *const HourglassTimeInterval, caller: &str) -> &'a TimeInterval {
    assert!(
        !ptr.is_null(),
        "called `{}` with `ptr` as null pointer",
        caller
    );
    &(*ptr).inner
}

/// Stores a successful result in `out` or translates the error into a status.
unsafe fn write_result(
    result: Result<TimeInterval, TimeIntervalError>,
    out: *mut *mut HourglassTimeInterval,
    caller: &str,
) -> HourglassStatus {
    assert!(
        !out.is_null(),
        "called `{}` with `out` as null pointer",
        caller
    );

    match result {
        Ok(inner) => {
            let handle = Box::into_raw(Box::new(HourglassTimeInterval::from(inner)));
            log::trace!("`{}` allocated interval {} at {:p}", caller, inner, handle);
            *out = handle;
            HourglassStatus::Ok
        }
        Err(err) => {
            let status = HourglassStatus::from(&err);
            log::debug!("`{}` returned {}: {}", caller, status, err);
            status
        }
    }
}

/// Creates a new interval from raw, possibly unnormalized components.
///
/// # Panics
///
/// The process aborts if `out` is null: the failed assertion cannot unwind
/// across the C ABI.
///
/// # Safety
///
/// The caller must ensure that `out` points to writable storage for one pointer.
#[no_mangle]
pub unsafe extern "C" fn hourglass_interval_new(
    hours: i64,
    minutes: i64,
    seconds: i64,
    out: *mut *mut HourglassTimeInterval,
) -> HourglassStatus {
    write_result(
        TimeInterval::new(hours, minutes, seconds),
        out,
        "hourglass_interval_new",
    )
}

/// Creates a new interval from a `std::time::Duration`-style pair.
///
/// Returns `SubSecondPrecision` if `nanos` is not zero.
///
/// # Panics
///
/// The process aborts if `out` is null: the failed assertion cannot unwind
/// across the C ABI.
///
/// # Safety
///
/// The caller must ensure that `out` points to writable storage for one pointer.
#[no_mangle]
pub unsafe extern "C" fn hourglass_interval_from_duration(
    secs: u64,
    nanos: u32,
    out: *mut *mut HourglassTimeInterval,
) -> HourglassStatus {
    if nanos >= 1_000_000_000 {
        // `Duration::new` would carry these into whole seconds.
        log::debug!(
            "`hourglass_interval_from_duration` returned {}: nanos {} out of range",
            HourglassStatus::SubSecondPrecision,
            nanos
        );
        return HourglassStatus::SubSecondPrecision;
    }
    write_result(
        TimeInterval::try_from(Duration::new(secs, nanos)),
        out,
        "hourglass_interval_from_duration",
    )
}

/// Parses an interval from a NUL-terminated `H+:MM:SS` string.
///
/// Returns `InvalidString` if the string is not valid UTF-8 or not a valid
/// interval.
///
/// # Panics
///
/// The process aborts if `s` or `out` is null: the failed assertion cannot unwind
/// across the C ABI.
///
/// # Safety
///
/// The caller must ensure that `s` points to a NUL-terminated string and that
/// `out` points to writable storage for one pointer.
#[no_mangle]
pub unsafe extern "C" fn hourglass_interval_parse(
    s: *const c_char,
    out: *mut *mut HourglassTimeInterval,
) -> HourglassStatus {
    assert!(
        !s.is_null(),
        "called `hourglass_interval_parse` with `s` as null pointer"
    );
    assert!(
        !out.is_null(),
        "called `hourglass_interval_parse` with `out` as null pointer"
    );

    let text = match CStr::from_ptr(s).to_str() {
        Ok(text) => text,
        Err(err) => {
            log::debug!("`hourglass_interval_parse` received invalid UTF-8: {}", err);
            return HourglassStatus::InvalidString;
        }
    };

    match text.parse::<TimeInterval>() {
        Ok(inner) => write_result(Ok(inner), out, "hourglass_interval_parse"),
        Err(err) => {
            log::debug!("`hourglass_interval_parse` rejected {:?}: {}", text, err);
            HourglassStatus::from(&err)
        }
    }
}

/// Frees an interval handle.
///
/// # Safety
///
/// The caller must ensure that `ptr` is null or a handle allocated by
/// hourglass that has not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn hourglass_interval_free(ptr: *mut HourglassTimeInterval) {
    if ptr.is_null() {
        return;
    }
    log::trace!("`hourglass_interval_free` releasing {:p}", ptr);
    drop(Box::from_raw(ptr));
}

/// Returns the hours component.
///
/// # Panics
///
/// The process aborts if `ptr` is null: the failed assertion cannot unwind
/// across the C ABI.
///
/// # Safety
///
/// The caller must ensure that `ptr` is a valid interval handle.
#[no_mangle]
pub unsafe extern "C" fn hourglass_interval_hours(ptr: *const HourglassTimeInterval) -> u64 {
    interval_ref(ptr, "hourglass_interval_hours").hours()
}

/// Returns the minutes component, in `[0, 59]`.
///
/// # Panics
///
/// The process aborts if `ptr` is null: the failed assertion cannot unwind
/// across the C ABI.
///
/// # Safety
///
/// The caller must ensure that `ptr` is a valid interval handle.
#[no_mangle]
pub unsafe extern "C" fn hourglass_interval_minutes(ptr: *const HourglassTimeInterval) -> u8 {
    interval_ref(ptr, "hourglass_interval_minutes").minutes()
}

/// Returns the seconds component, in `[0, 59]`.
///
/// # Panics
///
/// The process aborts if `ptr` is null: the failed assertion cannot unwind
/// across the C ABI.
///
/// # Safety
///
/// The caller must ensure that `ptr` is a valid interval handle.
#[no_mangle]
pub unsafe extern "C" fn hourglass_interval_seconds(ptr: *const HourglassTimeInterval) -> u8 {
    interval_ref(ptr, "hourglass_interval_seconds").seconds()
}

/// Returns the interval flattened to seconds.
///
/// # Panics
///
/// The process aborts if `ptr` is null: the failed assertion cannot unwind
/// across the C ABI.
///
/// # Safety
///
/// The caller must ensure that `ptr` is a valid interval handle.
#[no_mangle]
pub unsafe extern "C" fn hourglass_interval_total_seconds(
    ptr: *const HourglassTimeInterval,
) -> u64 {
    interval_ref(ptr, "hourglass_interval_total_seconds").total_seconds()
}

/// Adds two intervals and stores the sum in a new handle.
///
/// # Panics
///
/// The process aborts if `a`, `b` or `out` is null: the failed assertion cannot unwind
/// across the C ABI.
///
/// # Safety
///
/// The caller must ensure that `a` and `b` are valid interval handles and that
/// `out` points to writable storage for one pointer.
#[no_mangle]
pub unsafe extern "C" fn hourglass_interval_add(
    a: *const HourglassTimeInterval,
    b: *const HourglassTimeInterval,
    out: *mut *mut HourglassTimeInterval,
) -> HourglassStatus {
    const CALLER: &str = "hourglass_interval_add";
    let a = *interval_ref(a, CALLER);
    let b = *interval_ref(b, CALLER);
    write_result(a + b, out, CALLER)
}

/// Subtracts `b` from `a` and stores the difference in a new handle.
///
/// Returns `NegativeInterval` if `b` is longer than `a`.
///
/// # Panics
///
/// The process aborts if `a`, `b` or `out` is null: the failed assertion cannot unwind
/// across the C ABI.
///
/// # Safety
///
/// The caller must ensure that `a` and `b` are valid interval handles and that
/// `out` points to writable storage for one pointer.
#[no_mangle]
pub unsafe extern "C" fn hourglass_interval_subtract(
    a: *const HourglassTimeInterval,
    b: *const HourglassTimeInterval,
    out: *mut *mut HourglassTimeInterval,
) -> HourglassStatus {
    const CALLER: &str = "hourglass_interval_subtract";
    let a = *interval_ref(a, CALLER);
    let b = *interval_ref(b, CALLER);
    write_result(a - b, out, CALLER)
}

/// Multiplies an interval by `scalar` and stores the product in a new handle.
///
/// Returns `NegativeScalar` if `scalar` is negative.
///
/// # Panics
///
/// The process aborts if `a` or `out` is null: the failed assertion cannot unwind
/// across the C ABI.
///
/// # Safety
///
/// The caller must ensure that `a` is a valid interval handle and that `out`
/// points to writable storage for one pointer.
#[no_mangle]
pub unsafe extern "C" fn hourglass_interval_multiply(
    a: *const HourglassTimeInterval,
    scalar: i64,
    out: *mut *mut HourglassTimeInterval,
) -> HourglassStatus {
    const CALLER: &str = "hourglass_interval_multiply";
    let a = *interval_ref(a, CALLER);
    write_result(a * scalar, out, CALLER)
}

/// Adds `seconds` to an interval and stores the result in a new handle.
///
/// # Panics
///
/// The process aborts if `a` or `out` is null: the failed assertion cannot unwind
/// across the C ABI.
///
/// # Safety
///
/// The caller must ensure that `a` is a valid interval handle and that `out`
/// points to writable storage for one pointer.
#[no_mangle]
pub unsafe extern "C" fn hourglass_interval_add_seconds(
    a: *const HourglassTimeInterval,
    seconds: i64,
    out: *mut *mut HourglassTimeInterval,
) -> HourglassStatus {
    const CALLER: &str = "hourglass_interval_add_seconds";
    let a = *interval_ref(a, CALLER);
    write_result(a.add_seconds(seconds), out, CALLER)
}

/// Subtracts `seconds` from an interval and stores the result in a new handle.
///
/// Returns `NegativeInterval` if the total would drop below zero.
///
/// # Panics
///
/// The process aborts if `a` or `out` is null: the failed assertion cannot unwind
/// across the C ABI.
///
/// # Safety
///
/// The caller must ensure that `a` is a valid interval handle and that `out`
/// points to writable storage for one pointer.
#[no_mangle]
pub unsafe extern "C" fn hourglass_interval_subtract_seconds(
    a: *const HourglassTimeInterval,
    seconds: i64,
    out: *mut *mut HourglassTimeInterval,
) -> HourglassStatus {
    const CALLER: &str = "hourglass_interval_subtract_seconds";
    let a = *interval_ref(a, CALLER);
    write_result(a.subtract_seconds(seconds), out, CALLER)
}

/// Compares two intervals chronologically.
///
/// Returns `-1` if `a` is shorter than `b`, `0` if they are equal and `1`
/// if `a` is longer.
///
/// # Panics
///
/// The process aborts if `a` or `b` is null: the failed assertion cannot unwind
/// across the C ABI.
///
/// # Safety
///
/// The caller must ensure that `a` and `b` are valid interval handles.
#[no_mangle]
pub unsafe extern "C" fn hourglass_interval_compare(
    a: *const HourglassTimeInterval,
    b: *const HourglassTimeInterval,
) -> i32 {
    const CALLER: &str = "hourglass_interval_compare";
    let a = interval_ref(a, CALLER);
    let b = interval_ref(b, CALLER);
    a.cmp(b) as i32
}

/// Renders an interval as a newly allocated, NUL-terminated `HH:MM:SS` string.
///
/// The returned string must be released with `hourglass_string_free`.
///
/// # Panics
///
/// The process aborts if `ptr` is null: the failed assertion cannot unwind
/// across the C ABI.
///
/// # Safety
///
/// The caller must ensure that `ptr` is a valid interval handle.
#[no_mangle]
pub unsafe extern "C" fn hourglass_interval_to_string(
    ptr: *const HourglassTimeInterval,
) -> *mut c_char {
    let interval = interval_ref(ptr, "hourglass_interval_to_string");
    // Kill the process if CString creation fails (digits and colons only)
    CString::new(interval.to_string())
        .expect("`CString::new` should create valid C string")
        .into_raw()
}

/// Frees a string returned by `hourglass_interval_to_string`.
///
/// # Safety
///
/// The caller must ensure that `s` is null or a string allocated by hourglass
/// that has not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn hourglass_string_free(s: *mut c_char) {
    if s.is_null() {
        return;
    }
    drop(CString::from_raw(s));
}
