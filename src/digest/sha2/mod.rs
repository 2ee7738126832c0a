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

//! The SHA-256 compression function and its realizations.
//!
//! [`compress`] is the process-wide entry point. Each [`Strategy`] can also be
//! driven directly, e.g. to compare them.

pub use self::strategy::Strategy;
pub(crate) use self::state::State;

use super::MAX_OUTPUT_LEN;

pub(super) use self::k::{SHA224_IV, SHA256_IV};

/// The number of 32-bit words in the chaining value.
pub const CHAINING_WORDS: usize = 256 / 32;

/// The length of a block, in bytes.
pub const BLOCK_LEN: usize = 512 / 8;

// FIPS 180-4 6.2.2 Step 1
const ROUNDS: usize = 64;

/// Folds one block into `state` using the process-wide [`Strategy`].
///
/// This is the raw compression function: no padding or length encoding is
/// applied.
pub fn compress(state: &mut [u32; CHAINING_WORDS], block: &[u8; BLOCK_LEN]) {
    Strategy::get_or_init().compress_block(state, block)
}

/// Serializes the chaining value big-endian. Truncated algorithms use a
/// prefix of the result.
pub(crate) fn format_output(state: &State) -> [u8; MAX_OUTPUT_LEN] {
    const _WHOLE_STATE: () = assert!(MAX_OUTPUT_LEN == CHAINING_WORDS * 4);
    let mut output = [0u8; MAX_OUTPUT_LEN];
    output
        .chunks_exact_mut(4)
        .zip(state.as_ref())
        .for_each(|(out, word)| out.copy_from_slice(&word.0.to_be_bytes()));
    output
}

mod fallback;
mod k;
mod state;
mod strategy;

#[cfg(all(target_arch = "aarch64", target_endian = "little"))]
mod aarch64;
#[cfg(target_arch = "x86_64")]
mod x86_64;
