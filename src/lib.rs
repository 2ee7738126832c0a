// Copyright 2015-2025 Brian Smith.
//
// Permission to use, copy, modify, and/or distribute this software for any
// purpose with or without fee is hereby granted, provided that the above
// copyright notice and this permission notice appear in all copies.
//
// THE SOFTWARE IS PROVIDED "AS IS" AND THE AUTHORS DISCLAIM ALL WARRANTIES
// WITH REGARD TO THIS SOFTWARE INCLUDING ALL IMPLIED WARRANTIES OF
// MERCHANTABILITY AND FITNESS. IN NO EVENT SHALL THE AUTHORS BE LIABLE FOR ANY
// SPECIAL, DIRECT, INDIRECT, OR CONSEQUENTIAL DAMAGES OR ANY DAMAGES
// WHATSOEVER RESULTING FROM LOSS OF USE, DATA OR PROFITS, WHETHER IN AN ACTION
// OF CONTRACT, NEGLIGENCE OR OTHER TORTIOUS ACTION, ARISING OUT OF OR IN
// CONNECTION WITH THE USE OR PERFORMANCE OF THIS SOFTWARE.

//! Incremental SHA-256 and SHA-224 with runtime-selected compression
//! strategies.
//!
//! The portable compression function is always available. On x86_64 (SHA
//! extensions) and AArch64 (ARMv8 SHA-2 instructions) an accelerated strategy
//! is chosen once per process from a [`cpu::Capabilities`] descriptor. Every
//! strategy produces bit-identical results.
//!
//! # Feature Flags
//!
//! <table>
//! <tr><th>Feature
//!     <th>Description
//! <tr><td><code>alloc (default)</code>
//!     <td>Enable features that require use of the heap. Currently this is
//!         only the test-vector framework in <code>test</code>.
//! <tr><td><code>std (default)</code>
//!     <td>Enable features that use libstd, in particular runtime detection
//!         of CPU capabilities and <code>std::error::Error</code>
//!         integration. Implies `alloc`.
//! <tr><td><code>force-portable</code>
//!     <td>Ignore every detected capability and always use the portable
//!         compression function.
//! <tr><td><code>slow_tests</code>
//!     <td>Run tests that hash several gigabytes of input.
//! <tr><td><code>test_logging</code>
//!     <td>Echo every line read by the test-vector framework.
//! </table>

#![allow(
    clippy::collapsible_if,
    clippy::identity_op,
    clippy::len_without_is_empty,
    clippy::let_unit_value,
    clippy::new_without_default,
    clippy::neg_cmp_op_on_partial_ord,
    clippy::too_many_arguments,
    clippy::type_complexity,
    non_camel_case_types,
    non_snake_case,
    unsafe_code
)]
#![deny(variant_size_differences)]
#![forbid(
    unused_results,
    invalid_reference_casting,
    clippy::char_lit_as_u8,
    clippy::fn_to_numeric_cast,
    clippy::fn_to_numeric_cast_with_truncation,
    clippy::ptr_as_ptr
)]
#![warn(
    clippy::unnecessary_cast,
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod polyfill;

pub mod cpu;
pub mod digest;
pub mod error;

#[cfg(feature = "alloc")]
pub mod test;
