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

//! SHA-256 and SHA-224.
//!
//! If all the data is available in a single contiguous slice then the `digest`
//! function should be used. Otherwise, the digest can be calculated in
//! multiple steps using `Context`.

use self::sha2::{State, Strategy};
use crate::{
    error,
    polyfill::{self, slice::as_chunks, slice::AsChunks},
};
use core::fmt;

pub use self::midstate::Midstate;

mod midstate;
pub mod sha2;

/// The maximum number of bytes that can be hashed: the message length in
/// bits must fit in the 64-bit length field of the padding.
const MAX_INPUT_LEN: u64 = u64::MAX / 8;

// The length of the length field in the padding.
const LEN_LEN: usize = 64 / 8;

#[derive(Clone)]
pub(crate) struct BlockContext {
    state: State,

    // The number of bytes of input that have been compressed. Always a
    // multiple of the block length.
    completed_bytes: u64,

    /// The context's algorithm.
    pub algorithm: &'static Algorithm,

    // `None` defers to the process-wide choice.
    strategy: Option<Strategy>,
}

impl BlockContext {
    pub(crate) fn new(algorithm: &'static Algorithm) -> Self {
        Self {
            state: algorithm.initial_state,
            completed_bytes: 0,
            algorithm,
            strategy: None,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_strategy(algorithm: &'static Algorithm, strategy: Strategy) -> Self {
        Self {
            strategy: Some(strategy),
            ..Self::new(algorithm)
        }
    }

    #[inline]
    fn strategy(&self) -> Strategy {
        self.strategy.unwrap_or_else(Strategy::get_or_init)
    }

    /// Processes all the blocks in `input`.
    pub(crate) fn update(&mut self, input: AsChunks<u8, BLOCK_LEN>) {
        let num_bytes = polyfill::u64_from_usize(input.as_flattened().len());
        self.strategy().compress_blocks(&mut self.state, input);
        self.completed_bytes = self.completed_bytes.wrapping_add(num_bytes);
    }

    /// Pads the final `num_pending` bytes of `pending`, compresses them, and
    /// returns the formatted output. The chaining value is left in a
    /// finalized state; the caller must reset before reusing `self`.
    pub(crate) fn finish(&mut self, pending: &mut [u8; BLOCK_LEN], num_pending: usize) -> Output {
        debug_assert!(num_pending < BLOCK_LEN);

        // Output the length, in bits, in big endian order. `update` keeps the
        // total under `MAX_INPUT_LEN` so this doesn't overflow.
        let completed_bits = self
            .completed_bytes
            .wrapping_add(polyfill::u64_from_usize(num_pending))
            .wrapping_mul(8);

        let mut padding_pos = num_pending;
        pending[padding_pos] = 0x80;
        padding_pos += 1;

        if padding_pos > BLOCK_LEN - LEN_LEN {
            pending[padding_pos..].fill(0);
            self.compress_padding(pending);
            // We don't increase `self.completed_bytes` because the padding
            // isn't data, and so it isn't included in the data length.
            padding_pos = 0;
        }

        pending[padding_pos..(BLOCK_LEN - LEN_LEN)].fill(0);
        pending[(BLOCK_LEN - LEN_LEN)..].copy_from_slice(&completed_bits.to_be_bytes());
        self.compress_padding(pending);

        sha2::format_output(&self.state)
    }

    fn compress_padding(&mut self, padding: &[u8; BLOCK_LEN]) {
        self.strategy()
            .compress_blocks(&mut self.state, AsChunks::from(padding));
    }

    /// Returns to the initial state, keeping the algorithm and strategy.
    fn reset(&mut self) {
        self.state = self.algorithm.initial_state;
        self.completed_bytes = 0;
    }
}

/// A context for multi-step (Init-Update-Finish) digest calculations.
///
/// # Examples
///
/// ```
/// use sha2_engine::digest;
///
/// let one_shot = digest::digest(&digest::SHA256, b"hello, world");
///
/// let mut ctx = digest::Context::new(&digest::SHA256);
/// ctx.update(b"hello").unwrap();
/// ctx.update(b", ").unwrap();
/// ctx.update(b"world").unwrap();
/// let multi_part = ctx.finish();
///
/// assert_eq!(&one_shot.as_ref(), &multi_part.as_ref());
/// ```
///
/// `Clone` produces a fully independent copy of the context, including any
/// buffered partial block.
#[derive(Clone)]
pub struct Context {
    block: BlockContext,
    pending: [u8; MAX_BLOCK_LEN],

    // Invariant: `num_pending < BLOCK_LEN`.
    num_pending: usize,
}

impl Context {
    /// Constructs a new context.
    pub fn new(algorithm: &'static Algorithm) -> Self {
        Self::from_block(BlockContext::new(algorithm))
    }

    #[cfg(test)]
    pub(crate) fn with_strategy(algorithm: &'static Algorithm, strategy: Strategy) -> Self {
        Self::from_block(BlockContext::with_strategy(algorithm, strategy))
    }

    pub(crate) fn from_block(block: BlockContext) -> Self {
        Self {
            block,
            pending: [0u8; MAX_BLOCK_LEN],
            num_pending: 0,
        }
    }

    /// Updates the digest with all the data in `data`.
    ///
    /// Fails with `InputTooLong`, without absorbing any of `data`, if the
    /// message would become longer than 2^64 - 1 bits.
    pub fn update(&mut self, data: &[u8]) -> Result<(), error::Error> {
        self.check_input_len(data.len())?;

        let to_complete = BLOCK_LEN - self.num_pending;
        if data.len() < to_complete {
            self.pending[self.num_pending..(self.num_pending + data.len())].copy_from_slice(data);
            self.num_pending += data.len();
            return Ok(());
        }

        let data = if self.num_pending > 0 {
            let (to_complete, remainder) = data.split_at(to_complete);
            self.pending[self.num_pending..].copy_from_slice(to_complete);
            let (completed_block, _) = as_chunks(&self.pending[..]);
            self.block.update(completed_block);
            self.num_pending = 0;
            remainder
        } else {
            data
        };

        let (blocks, leftover) = as_chunks(data);
        self.block.update(blocks);
        self.pending[..leftover.len()].copy_from_slice(leftover);
        self.num_pending = leftover.len();

        Ok(())
    }

    fn check_input_len(&self, len: usize) -> Result<(), error::Error> {
        let total = self
            .block
            .completed_bytes
            .checked_add(polyfill::u64_from_usize(self.num_pending))
            .and_then(|buffered| buffered.checked_add(polyfill::u64_from_usize(len)));
        match total {
            Some(total) if total <= MAX_INPUT_LEN => Ok(()),
            _ => Err(error::Error::input_too_long()),
        }
    }

    /// Finalizes the digest calculation and returns the digest value.
    ///
    /// The context is reset to the freshly-constructed state afterwards, so
    /// it can be reused for a new message of the same algorithm.
    pub fn finish(&mut self) -> Digest {
        let value = self.block.finish(&mut self.pending, self.num_pending);
        let algorithm = self.block.algorithm;
        self.block.reset();
        self.pending = [0u8; MAX_BLOCK_LEN];
        self.num_pending = 0;
        Digest { value, algorithm }
    }

    /// Like [`Context::finish`], but writes the digest to `out`.
    ///
    /// `out` must be exactly `self.algorithm().output_len()` bytes long;
    /// otherwise this fails with `InvalidArgument` and the context is left
    /// untouched.
    pub fn finish_into(&mut self, out: &mut [u8]) -> Result<(), error::Error> {
        if out.len() != self.block.algorithm.output_len {
            return Err(error::Error::invalid_argument());
        }
        if self.num_pending >= BLOCK_LEN {
            return Err(error::Error::invalid_state());
        }
        out.copy_from_slice(self.finish().as_ref());
        Ok(())
    }

    /// Captures the chaining value and the number of bytes absorbed so far.
    ///
    /// Only meaningful on a block boundary; fails with `InvalidState` if
    /// there is a partial block buffered. No padding is applied, so the
    /// result is not a digest.
    pub fn midstate(&self) -> Result<Midstate, error::Error> {
        if self.num_pending != 0 {
            return Err(error::Error::invalid_state());
        }
        Ok(Midstate::new(
            self.block.algorithm,
            sha2::format_output(&self.block.state),
            self.block.completed_bytes,
        ))
    }

    /// Resumes a computation from a [`Midstate`].
    ///
    /// Fails with `InvalidArgument` if the midstate was produced by a
    /// different algorithm or its byte count isn't a multiple of the block
    /// length, and with `InputTooLong` if it is beyond the maximum message
    /// length.
    pub fn from_midstate(
        algorithm: &'static Algorithm,
        midstate: &Midstate,
    ) -> Result<Self, error::Error> {
        if midstate.algorithm() != algorithm {
            return Err(error::Error::invalid_argument());
        }
        let completed_bytes = midstate.completed_bytes();
        if completed_bytes % polyfill::u64_from_usize(BLOCK_LEN) != 0 {
            return Err(error::Error::invalid_argument());
        }
        if completed_bytes > MAX_INPUT_LEN {
            return Err(error::Error::input_too_long());
        }
        let mut block = BlockContext::new(algorithm);
        block.state = State::from_be_bytes(midstate.chaining_value());
        block.completed_bytes = completed_bytes;
        Ok(Self::from_block(block))
    }

    /// The algorithm that this context is using.
    #[inline(always)]
    pub fn algorithm(&self) -> &'static Algorithm {
        self.block.algorithm
    }
}

/// Returns the digest of `data` using the given digest algorithm.
///
/// # Examples:
///
/// ```
/// use sha2_engine::{digest, test};
/// let expected_hex = "09ca7e4eaa6e8ae9c7d261167129184883644d07dfba7cbfbc4c8a2e08360d5b";
/// let expected: Vec<u8> = test::from_hex(expected_hex).unwrap();
/// let actual = digest::digest(&digest::SHA256, b"hello, world");
///
/// assert_eq!(&expected, &actual.as_ref());
/// ```
pub fn digest(algorithm: &'static Algorithm, data: &[u8]) -> Digest {
    let mut ctx = Context::new(algorithm);
    if ctx.update(data).is_err() {
        too_much_input(data.len());
    }
    ctx.finish()
}

#[cold]
#[inline(never)]
fn too_much_input(len: usize) -> ! {
    panic!("{} bytes is too much input to digest", len)
}

/// Writes the digest of `data` to `out`, which must be exactly
/// `algorithm.output_len()` bytes long.
pub fn digest_into(
    algorithm: &'static Algorithm,
    data: &[u8],
    out: &mut [u8],
) -> Result<(), error::Error> {
    if out.len() != algorithm.output_len {
        return Err(error::Error::invalid_argument());
    }
    let mut ctx = Context::new(algorithm);
    ctx.update(data)?;
    ctx.finish_into(out)
}

/// A calculated digest value.
///
/// Use [`Self::as_ref`] to get the value as a `&[u8]`.
#[derive(Clone, Copy)]
pub struct Digest {
    value: Output,
    algorithm: &'static Algorithm,
}

impl Digest {
    /// The algorithm that was used to calculate the digest value.
    #[inline(always)]
    pub fn algorithm(&self) -> &'static Algorithm {
        self.algorithm
    }
}

impl AsRef<[u8]> for Digest {
    #[inline(always)]
    fn as_ref(&self) -> &[u8] {
        &self.value[..self.algorithm.output_len]
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{:?}:", self.algorithm)?;
        self.as_ref()
            .iter()
            .try_for_each(|byte| write!(fmt, "{:02x}", byte))
    }
}

/// A digest algorithm.
pub struct Algorithm {
    output_len: usize,
    initial_state: State,
    id: AlgorithmID,
}

#[derive(Debug, Eq, PartialEq)]
#[allow(clippy::upper_case_acronyms)]
enum AlgorithmID {
    SHA224,
    SHA256,
}

impl PartialEq for Algorithm {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Algorithm {}

impl fmt::Debug for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&self.id, f)
    }
}

impl Algorithm {
    /// The internal block length.
    pub fn block_len(&self) -> usize {
        BLOCK_LEN
    }

    /// The size of the chaining value of the digest function, in bytes. For
    /// SHA-256 this is equal to `output_len`; for the truncated SHA-224 it
    /// is the length before truncation.
    pub fn chaining_len(&self) -> usize {
        MAX_CHAINING_LEN
    }

    /// The length of a finalized digest.
    pub fn output_len(&self) -> usize {
        self.output_len
    }
}

/// SHA-224 as specified in [FIPS 180-4].
///
/// [FIPS 180-4]: http://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf
pub static SHA224: Algorithm = Algorithm {
    output_len: SHA224_OUTPUT_LEN,
    initial_state: State::from_words(sha2::SHA224_IV),
    id: AlgorithmID::SHA224,
};

/// SHA-256 as specified in [FIPS 180-4].
///
/// [FIPS 180-4]: http://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf
pub static SHA256: Algorithm = Algorithm {
    output_len: SHA256_OUTPUT_LEN,
    initial_state: State::from_words(sha2::SHA256_IV),
    id: AlgorithmID::SHA256,
};

const BLOCK_LEN: usize = sha2::BLOCK_LEN;

type Output = [u8; MAX_OUTPUT_LEN];

/// The maximum block length ([`Algorithm::block_len()`]) of all the algorithms
/// in this module.
pub const MAX_BLOCK_LEN: usize = BLOCK_LEN;

/// The maximum output length ([`Algorithm::output_len()`]) of all the
/// algorithms in this module.
pub const MAX_OUTPUT_LEN: usize = SHA256_OUTPUT_LEN;

/// The maximum chaining length ([`Algorithm::chaining_len()`]) of all the
/// algorithms in this module.
pub const MAX_CHAINING_LEN: usize = MAX_OUTPUT_LEN;

/// The length of the output of SHA-224, in bytes.
pub const SHA224_OUTPUT_LEN: usize = 224 / 8;

/// The length of the output of SHA-256, in bytes.
pub const SHA256_OUTPUT_LEN: usize = 256 / 8;
