// Copyright 2025 Brian Smith.
//
// Permission to use, copy, modify, and/or distribute this software for any
// purpose with or without fee is hereby granted, provided that the above
// copyright notice and this permission notice appear in all copies.
//
// THE SOFTWARE IS PROVIDED "AS IS" AND THE AUTHOR DISCLAIMS ALL WARRANTIES
// WITH REGARD TO THIS SOFTWARE INCLUDING ALL IMPLIED WARRANTIES OF
// MERCHANTABILITY AND FITNESS. IN NO EVENT SHALL THE AUTHOR BE LIABLE FOR ANY
// SPECIAL, DIRECT, INDIRECT, OR CONSEQUENTIAL DAMAGES OR ANY DAMAGES
// WHATSOEVER RESULTING FROM LOSS OF USE, DATA OR PROFITS, WHETHER IN AN ACTION
// OF CONTRACT, NEGLIGENCE OR OTHER TORTIOUS ACTION, ARISING OUT OF OR IN
// CONNECTION WITH THE USE OR PERFORMANCE OF THIS SOFTWARE.

/// Splits `slice` into the longest prefix that is a whole number of `N`-element
/// chunks and the (shorter than `N`) remainder.
#[inline(always)]
pub fn as_chunks<T, const N: usize>(slice: &[T]) -> (AsChunks<'_, T, N>, &[T]) {
    assert!(N != 0, "chunk size must be non-zero");
    let len = slice.len() / N;
    let (multiple_of_n, remainder) = slice.split_at(len * N);
    (AsChunks(multiple_of_n), remainder)
}

/// A slice whose length is a multiple of `N`, viewed as `&[[T; N]]`.
#[derive(Clone, Copy)]
pub struct AsChunks<'a, T, const N: usize>(&'a [T]);

impl<'a, T, const N: usize> AsChunks<'a, T, N> {
    #[inline(always)]
    pub fn as_flattened(&self) -> &'a [T] {
        self.0
    }
}

impl<'a, T, const N: usize> IntoIterator for AsChunks<'a, T, N> {
    type IntoIter = AsChunksIter<'a, T, N>;
    type Item = &'a [T; N];

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        AsChunksIter(self.0.chunks_exact(N))
    }
}

pub struct AsChunksIter<'a, T, const N: usize>(core::slice::ChunksExact<'a, T>);

impl<'a, T, const N: usize> Iterator for AsChunksIter<'a, T, N> {
    type Item = &'a [T; N];

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        // `ChunksExact` only yields chunks of exactly `N` elements.
        self.0.next().map(|x| x.try_into().unwrap())
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for AsChunks<'a, T, N> {
    #[inline(always)]
    fn from(array: &'a [T; N]) -> Self {
        Self(array)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_chunks_splits_remainder() {
        let input = [0u8, 1, 2, 3, 4, 5, 6];
        let (chunks, remainder) = as_chunks::<u8, 3>(&input);
        assert_eq!(chunks.as_flattened(), &input[..6]);
        assert_eq!(remainder, &[6]);
        let collected: [&[u8; 3]; 2] = {
            let mut it = chunks.into_iter();
            [it.next().unwrap(), it.next().unwrap()]
        };
        assert_eq!(collected, [&[0, 1, 2], &[3, 4, 5]]);
    }

    #[test]
    fn test_as_chunks_short_input() {
        let input = [9u8; 2];
        let (chunks, remainder) = as_chunks::<u8, 4>(&input);
        assert!(chunks.as_flattened().is_empty());
        assert_eq!(chunks.into_iter().count(), 0);
        assert_eq!(remainder, &input[..]);
    }
}
