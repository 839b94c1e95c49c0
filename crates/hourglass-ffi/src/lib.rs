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

//! # Hourglass FFI
//!
//! C-compatible bindings for `hourglass` time intervals, usable from C, C++,
//! Python (ctypes/cffi), C# and other hosts with a C ABI.
//!
//! ## Core Design Principles
//!
//! 1.  **Opaque Handles**: `TimeInterval` values live behind
//!     `HourglassTimeInterval` pointers. The host reads them through accessor
//!     functions only.
//! 2.  **Explicit Lifecycle**: every handle produced by a `_new`, `_parse` or
//!     arithmetic call must be released with `hourglass_interval_free`;
//!     strings from `hourglass_interval_to_string` with `hourglass_string_free`.
//! 3.  **Status Codes**: fallible calls return an `HourglassStatus` and write
//!     the result through an out-pointer. On failure nothing is allocated and
//!     the out-pointer is not written.
//! 4.  **Fail-Fast Safety**: passing `NULL` where a handle or out-pointer is
//!     required fails an assertion naming the function. The panic cannot
//!     unwind across `extern "C"`, so the process aborts instead of
//!     continuing into undefined behavior.
//!
//! Diagnostics go through the `log` facade. Install a logger in the host
//! process (for example via a Rust shim) to see rejected calls at `debug`
//! level and handle traffic at `trace` level.

pub mod interval;
pub mod status;
