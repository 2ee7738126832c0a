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

//! SHA-256 using the ARMv8 cryptography extensions.

use super::{k::K, State, BLOCK_LEN};
use crate::polyfill::slice::AsChunks;
use core::arch::aarch64::*;

/// # Safety
///
/// The CPU must support the Advanced SIMD and SHA-256 instructions.
#[target_feature(enable = "neon,sha2")]
pub(super) unsafe fn compress_blocks(state: &mut State, blocks: AsChunks<u8, BLOCK_LEN>) {
    let state_ptr: *mut u32 = state.as_mut().as_mut_ptr().cast();
    let mut abcd = vld1q_u32(state_ptr);
    let mut efgh = vld1q_u32(state_ptr.add(4));

    for block in blocks {
        let abcd_save = abcd;
        let efgh_save = efgh;

        let p = block.as_ptr();
        let mut w = [
            vreinterpretq_u32_u8(vrev32q_u8(vld1q_u8(p))),
            vreinterpretq_u32_u8(vrev32q_u8(vld1q_u8(p.add(16)))),
            vreinterpretq_u32_u8(vrev32q_u8(vld1q_u8(p.add(32)))),
            vreinterpretq_u32_u8(vrev32q_u8(vld1q_u8(p.add(48)))),
        ];

        for i in 0..16 {
            let wi = if i < 4 {
                w[i]
            } else {
                let next = vsha256su1q_u32(vsha256su0q_u32(w[0], w[1]), w[2], w[3]);
                w = [w[1], w[2], w[3], next];
                next
            };
            rounds4(&mut abcd, &mut efgh, wi, i);
        }

        abcd = vaddq_u32(abcd, abcd_save);
        efgh = vaddq_u32(efgh, efgh_save);
    }

    vst1q_u32(state_ptr, abcd);
    vst1q_u32(state_ptr.add(4), efgh);
}

// Rounds 4i..4i+4.
#[inline]
#[target_feature(enable = "neon,sha2")]
unsafe fn rounds4(abcd: &mut uint32x4_t, efgh: &mut uint32x4_t, w: uint32x4_t, i: usize) {
    let k = &K.as_ref()[(4 * i)..][..4];
    let wk = vaddq_u32(w, vld1q_u32(k.as_ptr()));
    let abcd_prev = *abcd;
    *abcd = vsha256hq_u32(abcd_prev, *efgh, wk);
    *efgh = vsha256h2q_u32(*efgh, abcd_prev, wk);
}
