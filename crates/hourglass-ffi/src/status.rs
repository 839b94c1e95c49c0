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

use hourglass::{ParseTimeIntervalError, TimeIntervalError};
use libc::c_char;

/// FFI-compatible status code returned by every fallible call.
///
/// On anything other than `Ok` the output pointer of the call is left
/// untouched and nothing is allocated.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HourglassStatus {
    Ok = 0,
    NegativeInterval = 1,
    NegativeComponent = 2,
    NegativeScalar = 3,
    Overflow = 4,
    InvalidString = 5,
    SubSecondPrecision = 6,
}

impl HourglassStatus {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "Ok",
            Self::NegativeInterval => "NegativeInterval",
            Self::NegativeComponent => "NegativeComponent",
            Self::NegativeScalar => "NegativeScalar",
            Self::Overflow => "Overflow",
            Self::InvalidString => "InvalidString",
            Self::SubSecondPrecision => "SubSecondPrecision",
        }
    }

    #[inline]
    fn as_c_str(&self) -> &'static std::ffi::CStr {
        match self {
            Self::Ok => c"Ok",
            Self::NegativeInterval => c"NegativeInterval",
            Self::NegativeComponent => c"NegativeComponent",
            Self::NegativeScalar => c"NegativeScalar",
            Self::Overflow => c"Overflow",
            Self::InvalidString => c"InvalidString",
            Self::SubSecondPrecision => c"SubSecondPrecision",
        }
    }
}

impl std::fmt::Display for HourglassStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&TimeIntervalError> for HourglassStatus {
    #[inline]
    fn from(err: &TimeIntervalError) -> Self {
        match err {
            TimeIntervalError::NegativeInterval { .. } => HourglassStatus::NegativeInterval,
            TimeIntervalError::NegativeComponent { .. } => HourglassStatus::NegativeComponent,
            TimeIntervalError::NegativeScalar { .. } => HourglassStatus::NegativeScalar,
            TimeIntervalError::Overflow => HourglassStatus::Overflow,
            TimeIntervalError::SubSecondPrecision { .. } => HourglassStatus::SubSecondPrecision,
        }
    }
}

impl From<&ParseTimeIntervalError> for HourglassStatus {
    #[inline]
    fn from(_: &ParseTimeIntervalError) -> Self {
        HourglassStatus::InvalidString
    }
}

/// Returns the name of a status as a static, NUL-terminated C string.
///
/// The returned pointer is valid for the lifetime of the program and must
/// not be freed.
#[no_mangle]
pub extern "C" fn hourglass_status_str(status: HourglassStatus) -> *const c_char {
    status.as_c_str().as_ptr()
}
