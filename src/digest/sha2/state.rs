// Copyright 2016-2025 Brian Smith.
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

use super::CHAINING_WORDS;
use crate::polyfill::slice::as_chunks;
use core::num::Wrapping;

// The alignment should be at least 16 for the SIMD implementations'
// performance, but it's not required for correctness.
#[repr(C, align(16))]
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) struct State([Wrapping<u32>; CHAINING_WORDS]);

impl State {
    #[inline(always)]
    pub(crate) const fn from_words(words: [u32; CHAINING_WORDS]) -> Self {
        let mut state = [Wrapping(0); CHAINING_WORDS];
        let mut i = 0;
        while i < CHAINING_WORDS {
            state[i] = Wrapping(words[i]);
            i += 1;
        }
        Self(state)
    }

    /// Parses a big-endian serialized chaining value.
    pub(crate) fn from_be_bytes(bytes: &[u8; CHAINING_WORDS * 4]) -> Self {
        let mut words = [0; CHAINING_WORDS];
        let (chunks, _) = as_chunks::<u8, 4>(bytes);
        words
            .iter_mut()
            .zip(chunks)
            .for_each(|(w, b)| *w = u32::from_be_bytes(*b));
        Self::from_words(words)
    }

    #[inline(always)]
    pub(crate) fn to_words(self) -> [u32; CHAINING_WORDS] {
        self.0.map(|Wrapping(w)| w)
    }

    #[inline(always)]
    pub(crate) fn as_mut(&mut self) -> &mut [Wrapping<u32>; CHAINING_WORDS] {
        &mut self.0
    }

    #[inline(always)]
    pub(crate) fn as_ref(&self) -> &[Wrapping<u32>; CHAINING_WORDS] {
        &self.0
    }
}

#[cfg_attr(target_arch = "aarch64", repr(C, align(64)))]
#[cfg_attr(not(target_arch = "aarch64"), repr(C, align(16)))]
pub(super) struct KTable<T, const ROUNDS: usize>([T; ROUNDS]);

impl<T, const ROUNDS: usize> KTable<T, ROUNDS> {
    pub(super) const fn new(values: [T; ROUNDS]) -> Self {
        Self(values)
    }
}

impl<T, const ROUNDS: usize> AsRef<[T; ROUNDS]> for KTable<T, ROUNDS> {
    #[inline(always)]
    fn as_ref(&self) -> &[T; ROUNDS] {
        &self.0
    }
}
