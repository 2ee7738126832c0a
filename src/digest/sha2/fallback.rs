// Copyright 2019-2025 Brian Smith.
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

//! The portable compression function.
//!
//! This is a direct rendition of FIPS 180-4 section 6.2.2. It is always
//! available and is the reference every accelerated strategy is tested
//! against.

use super::{k::K, State, BLOCK_LEN, CHAINING_WORDS, ROUNDS};
use crate::polyfill::slice::{as_chunks, AsChunks};
use core::num::Wrapping;

pub(super) fn compress_blocks(state: &mut State, blocks: AsChunks<u8, BLOCK_LEN>) {
    let H = state.as_mut();
    blocks.into_iter().for_each(|M| compress_block(H, M));
}

#[inline]
fn compress_block(H: &mut [Wrapping<u32>; CHAINING_WORDS], M: &[u8; BLOCK_LEN]) {
    // FIPS 180-4 6.2.2 Step 1
    let W = schedule(M);

    // FIPS 180-4 6.2.2 Step 2
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *H;

    // FIPS 180-4 6.2.2 Step 3
    for (Kt, Wt) in K.as_ref().iter().zip(W.iter()) {
        let T1 = h + SIGMA_1(e) + ch(e, f, g) + Wrapping(*Kt) + *Wt;
        let T2 = SIGMA_0(a) + maj(a, b, c);
        h = g;
        g = f;
        f = e;
        e = d + T1;
        d = c;
        c = b;
        b = a;
        a = T1 + T2;
    }

    // FIPS 180-4 6.2.2 Step 4
    H[0] += a;
    H[1] += b;
    H[2] += c;
    H[3] += d;
    H[4] += e;
    H[5] += f;
    H[6] += g;
    H[7] += h;
}

/// Expands one block into the 64-word message schedule.
pub(super) fn schedule(M: &[u8; BLOCK_LEN]) -> [Wrapping<u32>; ROUNDS] {
    let mut W = [Wrapping(0); ROUNDS];
    let (M, _) = as_chunks::<u8, 4>(M);
    W.iter_mut()
        .zip(M)
        .for_each(|(Wt, Mt)| *Wt = Wrapping(u32::from_be_bytes(*Mt)));
    for t in 16..ROUNDS {
        W[t] = sigma_1(W[t - 2]) + W[t - 7] + sigma_0(W[t - 15]) + W[t - 16];
    }
    W
}

#[inline(always)]
fn rotr(x: Wrapping<u32>, n: u32) -> Wrapping<u32> {
    Wrapping(x.0.rotate_right(n))
}

// FIPS 180-4 4.1.2
#[inline(always)]
fn ch(x: Wrapping<u32>, y: Wrapping<u32>, z: Wrapping<u32>) -> Wrapping<u32> {
    (x & y) | (!x & z)
}

// FIPS 180-4 4.1.2
#[inline(always)]
fn maj(x: Wrapping<u32>, y: Wrapping<u32>, z: Wrapping<u32>) -> Wrapping<u32> {
    (x & y) | (x & z) | (y & z)
}

// FIPS 180-4 4.1.2
#[inline(always)]
fn SIGMA_0(x: Wrapping<u32>) -> Wrapping<u32> {
    rotr(x, 2) ^ rotr(x, 13) ^ rotr(x, 22)
}

// FIPS 180-4 4.1.2
#[inline(always)]
fn SIGMA_1(x: Wrapping<u32>) -> Wrapping<u32> {
    rotr(x, 6) ^ rotr(x, 11) ^ rotr(x, 25)
}

// FIPS 180-4 4.1.2
#[inline(always)]
fn sigma_0(x: Wrapping<u32>) -> Wrapping<u32> {
    rotr(x, 7) ^ rotr(x, 18) ^ Wrapping(x.0 >> 3)
}

// FIPS 180-4 4.1.2
#[inline(always)]
fn sigma_1(x: Wrapping<u32>) -> Wrapping<u32> {
    rotr(x, 17) ^ rotr(x, 19) ^ Wrapping(x.0 >> 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    // The message schedule of the single padded block of "abc", from the
    // worked example in the NIST "SHA-256 example" document.
    #[test]
    fn test_schedule_abc() {
        let mut block = [0u8; BLOCK_LEN];
        block[..3].copy_from_slice(b"abc");
        block[3] = 0x80;
        block[BLOCK_LEN - 1] = 24;
        let W = schedule(&block);
        assert_eq!(W[0].0, 0x61626380);
        assert_eq!(W[15].0, 0x00000018);
        assert_eq!(W[16].0, 0x61626380);
        assert_eq!(W[17].0, 0x000f0000);
        assert_eq!(W[63].0, 0x12b1edeb);
    }

    #[test]
    fn test_compress_abc() {
        let mut block = [0u8; BLOCK_LEN];
        block[..3].copy_from_slice(b"abc");
        block[3] = 0x80;
        block[BLOCK_LEN - 1] = 24;
        let mut state = State::from_words(super::super::k::SHA256_IV);
        compress_blocks(&mut state, AsChunks::from(&block));
        assert_eq!(
            state.to_words(),
            [
                0xba7816bf, 0x8f01cfea, 0x414140de, 0x5dae2223, 0xb00361a3, 0x96177a9c,
                0xb410ff61, 0xf20015ad,
            ]
        );
    }
}
