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

use super::{fallback, State, BLOCK_LEN, CHAINING_WORDS};
use crate::{
    cpu::{Capabilities, Feature},
    polyfill::slice::AsChunks,
};
use cfg_if::cfg_if;
use core::{fmt, num::NonZeroU32};

/// A realization of the SHA-256 compression function.
///
/// A `Strategy` can only be obtained for a set of [`Capabilities`] that
/// supports it, so every `Strategy` value is safe to run on this CPU. All
/// strategies compute bit-identical results.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Strategy(Impl);

// Listed from most to least preferred. The discriminants are the values
// stored in the process-wide cache and must be non-zero.
#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
enum Impl {
    #[cfg(target_arch = "x86_64")]
    X86ShaNi = 2,
    #[cfg(all(target_arch = "aarch64", target_endian = "little"))]
    Aarch64Sha2 = 3,
    Portable = 1,
}

impl Impl {
    const ALL: &'static [Self] = &[
        #[cfg(target_arch = "x86_64")]
        Self::X86ShaNi,
        #[cfg(all(target_arch = "aarch64", target_endian = "little"))]
        Self::Aarch64Sha2,
        Self::Portable,
    ];

    fn required(self) -> &'static [Feature] {
        match self {
            #[cfg(target_arch = "x86_64")]
            Self::X86ShaNi => &[Feature::Sha, Feature::Ssse3, Feature::Sse41],
            #[cfg(all(target_arch = "aarch64", target_endian = "little"))]
            Self::Aarch64Sha2 => &[Feature::Neon, Feature::Sha2],
            Self::Portable => &[],
        }
    }

    #[cfg_attr(not(target_has_atomic = "32"), allow(dead_code))]
    fn id(self) -> NonZeroU32 {
        // Discriminants are all non-zero.
        NonZeroU32::new(self as u32).unwrap_or(NonZeroU32::MIN)
    }

    #[cfg_attr(not(target_has_atomic = "32"), allow(dead_code))]
    fn from_id(id: NonZeroU32) -> Option<Self> {
        Self::ALL.iter().copied().find(|i| i.id() == id)
    }
}

impl Strategy {
    /// The portable strategy, available everywhere.
    pub const PORTABLE: Self = Self(Impl::Portable);

    /// Chooses the most capable strategy supported by `caps`.
    ///
    /// With the `force-portable` feature this always returns
    /// [`Strategy::PORTABLE`].
    pub fn select(caps: Capabilities) -> Self {
        if cfg!(feature = "force-portable") {
            return Self::PORTABLE;
        }
        Self::all_supported(caps).next().unwrap_or(Self::PORTABLE)
    }

    /// Every strategy usable with `caps`, most capable first. The last one
    /// is always [`Strategy::PORTABLE`].
    pub fn all_supported(caps: Capabilities) -> impl Iterator<Item = Self> {
        Impl::ALL
            .iter()
            .copied()
            .filter(move |i| caps.contains_all(i.required()))
            .map(Self)
    }

    /// The process-wide strategy, choosing it from
    /// [`Capabilities::detect()`] if no strategy has been chosen yet.
    pub fn get_or_init() -> Self {
        cfg_if! {
            if #[cfg(target_has_atomic = "32")] {
                let id = SELECTED.get_or_init(|| Self::choose(Capabilities::detect()).0.id());
                Self::from_cached(id)
            } else {
                Self::select(Capabilities::detect())
            }
        }
    }

    /// Seeds the process-wide strategy from `caps`.
    ///
    /// The first choice made in the process sticks. The return value is the
    /// strategy actually in effect, which differs from `select(caps)` when
    /// another choice was made earlier.
    ///
    /// Targets without 32-bit atomics have no process-wide cache; there this
    /// just returns `select(caps)`.
    pub fn init_with(caps: Capabilities) -> Self {
        cfg_if! {
            if #[cfg(target_has_atomic = "32")] {
                let wanted = Self::select(caps);
                let chosen = Self::from_cached(SELECTED.get_or_init(|| Self::choose(caps).0.id()));
                if chosen != wanted {
                    log::trace!(
                        "SHA-256 strategy is already {:?}; ignoring {:?}",
                        chosen,
                        wanted
                    );
                }
                chosen
            } else {
                Self::select(caps)
            }
        }
    }

    #[cfg(target_has_atomic = "32")]
    fn choose(caps: Capabilities) -> Self {
        let chosen = Self::select(caps);
        log::debug!("using {:?} SHA-256 strategy for {:?}", chosen, caps);
        chosen
    }

    #[cfg(target_has_atomic = "32")]
    fn from_cached(id: NonZeroU32) -> Self {
        // Only ids of supported strategies are ever stored.
        Impl::from_id(id).map_or(Self::PORTABLE, Self)
    }

    /// A stable lowercase identifier.
    pub fn name(self) -> &'static str {
        match self.0 {
            #[cfg(target_arch = "x86_64")]
            Impl::X86ShaNi => "x86-sha-ni",
            #[cfg(all(target_arch = "aarch64", target_endian = "little"))]
            Impl::Aarch64Sha2 => "aarch64-sha2",
            Impl::Portable => "portable",
        }
    }

    /// Folds one block into a chaining value.
    pub fn compress_block(self, state: &mut [u32; CHAINING_WORDS], block: &[u8; BLOCK_LEN]) {
        let mut s = State::from_words(*state);
        self.compress_blocks(&mut s, AsChunks::from(block));
        *state = s.to_words();
    }

    pub(crate) fn compress_blocks(self, state: &mut State, blocks: AsChunks<u8, BLOCK_LEN>) {
        match self.0 {
            #[cfg(target_arch = "x86_64")]
            Impl::X86ShaNi => {
                // SAFETY: `X86ShaNi` is only constructed from capabilities
                // that contain every feature in `Impl::required`.
                unsafe { super::x86_64::compress_blocks(state, blocks) }
            }
            #[cfg(all(target_arch = "aarch64", target_endian = "little"))]
            Impl::Aarch64Sha2 => {
                // SAFETY: As above.
                unsafe { super::aarch64::compress_blocks(state, blocks) }
            }
            Impl::Portable => fallback::compress_blocks(state, blocks),
        }
    }
}

impl fmt::Debug for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(target_has_atomic = "32")]
static SELECTED: crate::polyfill::once_cell::race::OnceNonZeroU32 =
    crate::polyfill::once_cell::race::OnceNonZeroU32::new();
