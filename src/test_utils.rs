// SPDX-License-Identifier: MPL-2.0
//! Shared helpers for float-heavy tests.
//!
//! Playback positions and percentages accumulate rounding error, so tests
//! compare them through the `approx` macro instead of `assert_eq!`.

pub use approx::assert_abs_diff_eq;
