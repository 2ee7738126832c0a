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

//! SHA-256 using the x86 SHA extensions.
//!
//! The state is kept in the `ABEF`/`CDGH` register layout that
//! `SHA256RNDS2` expects; it is converted from and back to the
//! `ABCD`/`EFGH` memory layout once per call, not once per block.

use super::{k::K, State, BLOCK_LEN};
use crate::polyfill::slice::AsChunks;
use core::arch::x86_64::*;

/// # Safety
///
/// The CPU must support the SHA, SSE2, SSSE3, and SSE4.1 extensions.
#[target_feature(enable = "sha,sse2,ssse3,sse4.1")]
pub(super) unsafe fn compress_blocks(state: &mut State, blocks: AsChunks<u8, BLOCK_LEN>) {
    // Byte-swaps each 32-bit lane.
    let mask = _mm_set_epi64x(0x0C0D_0E0F_0809_0A0B, 0x0405_0607_0001_0203);

    let state_ptr: *mut __m128i = state.as_mut().as_mut_ptr().cast();
    let dcba = _mm_loadu_si128(state_ptr);
    let hgfe = _mm_loadu_si128(state_ptr.add(1));

    let cdab = _mm_shuffle_epi32(dcba, 0xB1);
    let efgh = _mm_shuffle_epi32(hgfe, 0x1B);
    let mut abef = _mm_alignr_epi8(cdab, efgh, 8);
    let mut cdgh = _mm_blend_epi16(efgh, cdab, 0xF0);

    for block in blocks {
        let abef_save = abef;
        let cdgh_save = cdgh;

        let data_ptr: *const __m128i = block.as_ptr().cast();
        let mut w = [
            _mm_shuffle_epi8(_mm_loadu_si128(data_ptr), mask),
            _mm_shuffle_epi8(_mm_loadu_si128(data_ptr.add(1)), mask),
            _mm_shuffle_epi8(_mm_loadu_si128(data_ptr.add(2)), mask),
            _mm_shuffle_epi8(_mm_loadu_si128(data_ptr.add(3)), mask),
        ];

        for i in 0..16 {
            let wi = if i < 4 {
                w[i]
            } else {
                let next = schedule(w[0], w[1], w[2], w[3]);
                w = [w[1], w[2], w[3], next];
                next
            };
            rounds4(&mut abef, &mut cdgh, wi, i);
        }

        abef = _mm_add_epi32(abef, abef_save);
        cdgh = _mm_add_epi32(cdgh, cdgh_save);
    }

    let feba = _mm_shuffle_epi32(abef, 0x1B);
    let dchg = _mm_shuffle_epi32(cdgh, 0xB1);
    let dcba = _mm_blend_epi16(feba, dchg, 0xF0);
    let hgef = _mm_alignr_epi8(dchg, feba, 8);

    _mm_storeu_si128(state_ptr, dcba);
    _mm_storeu_si128(state_ptr.add(1), hgef);
}

// Message words W[4i..4i+4] from W[4i-16..4i].
#[inline]
#[target_feature(enable = "sha,sse2,ssse3")]
unsafe fn schedule(v0: __m128i, v1: __m128i, v2: __m128i, v3: __m128i) -> __m128i {
    let t1 = _mm_sha256msg1_epu32(v0, v1);
    let t2 = _mm_alignr_epi8(v3, v2, 4);
    let t3 = _mm_add_epi32(t1, t2);
    _mm_sha256msg2_epu32(t3, v3)
}

// Rounds 4i..4i+4.
#[inline]
#[target_feature(enable = "sha,sse2")]
unsafe fn rounds4(abef: &mut __m128i, cdgh: &mut __m128i, w: __m128i, i: usize) {
    let k = &K.as_ref()[(4 * i)..][..4];
    let t1 = _mm_add_epi32(w, _mm_loadu_si128(k.as_ptr().cast()));
    *cdgh = _mm_sha256rnds2_epu32(*cdgh, *abef, t1);
    let t2 = _mm_shuffle_epi32(t1, 0x0E);
    *abef = _mm_sha256rnds2_epu32(*abef, *cdgh, t2);
}
