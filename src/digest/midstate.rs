// Copyright 2025 Brian Smith.
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

use super::{Algorithm, MAX_CHAINING_LEN};
use core::fmt;

/// The chaining value of a [`super::Context`] on a block boundary, together
/// with the algorithm that produced it and the number of bytes it has
/// absorbed.
///
/// A midstate is not a digest: no padding or length has been applied. It is
/// useful for precomputing a common prefix (e.g. a tag) once and resuming
/// from it with [`super::Context::from_midstate`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Midstate {
    algorithm: &'static Algorithm,
    chaining: [u8; MAX_CHAINING_LEN],
    completed_bytes: u64,
}

impl Midstate {
    /// Constructs a midstate from a big-endian chaining value computed with
    /// `algorithm` and the number of bytes that produced it.
    pub const fn new(
        algorithm: &'static Algorithm,
        chaining: [u8; MAX_CHAINING_LEN],
        completed_bytes: u64,
    ) -> Self {
        Self {
            algorithm,
            chaining,
            completed_bytes,
        }
    }

    /// The algorithm whose chaining value this is.
    #[inline(always)]
    pub fn algorithm(&self) -> &'static Algorithm {
        self.algorithm
    }

    /// The big-endian chaining value.
    pub fn chaining_value(&self) -> &[u8; MAX_CHAINING_LEN] {
        &self.chaining
    }

    /// The number of message bytes absorbed.
    pub fn completed_bytes(&self) -> u64 {
        self.completed_bytes
    }
}

impl fmt::Debug for Midstate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Midstate({:?}, ", self.algorithm)?;
        self.chaining
            .iter()
            .try_for_each(|byte| write!(f, "{:02x}", byte))?;
        write!(f, ", {})", self.completed_bytes)
    }
}
