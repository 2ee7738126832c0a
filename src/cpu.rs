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

//! CPU capability descriptors.
//!
//! This module doesn't probe the CPU itself. [`Capabilities::detect`] asks the
//! standard library (with the `std` feature) or the compiler's static target
//! features (without it). Embedders that probe the CPU some other way can
//! hand the result to [`Capabilities::assume`].

use cfg_if::cfg_if;
use core::fmt;

/// A single instruction-set extension that some compression strategy may
/// depend on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum Feature {
    /// x86 SSSE3.
    Ssse3 = 0,
    /// x86 SSE4.1.
    Sse41 = 1,
    /// x86 SHA extensions (`SHA256RNDS2` and friends).
    Sha = 2,
    /// ARM Advanced SIMD.
    Neon = 8,
    /// ARMv8 SHA-256 instructions (`SHA256H` and friends).
    Sha2 = 9,
}

impl Feature {
    const ALL: [Self; 5] = [
        Self::Ssse3,
        Self::Sse41,
        Self::Sha,
        Self::Neon,
        Self::Sha2,
    ];

    #[inline(always)]
    const fn mask(self) -> u32 {
        1 << (self as u32)
    }

    /// The name the feature is known by in `target_feature`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ssse3 => "ssse3",
            Self::Sse41 => "sse4.1",
            Self::Sha => "sha",
            Self::Neon => "neon",
            Self::Sha2 => "sha2",
        }
    }
}

/// A snapshot of the instruction-set extensions available to this process.
///
/// A `Capabilities` value is a promise: every feature it contains is actually
/// usable. Safe code can only obtain one from [`Capabilities::none`] or
/// [`Capabilities::detect`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Capabilities(u32);

impl Capabilities {
    /// No extensions at all. Always truthful.
    #[inline]
    pub const fn none() -> Self {
        Self(0)
    }

    /// The capabilities of the current CPU.
    pub fn detect() -> Self {
        cfg_if! {
            if #[cfg(target_arch = "x86_64")] {
                intel::detect()
            } else if #[cfg(all(target_arch = "aarch64", target_endian = "little"))] {
                arm::detect()
            } else {
                Self::none()
            }
        }
    }

    /// Constructs a descriptor from externally-probed features.
    ///
    /// # Safety
    ///
    /// Every feature in `features` must be supported by every CPU this
    /// process will run on. Compression strategies selected from the result
    /// will execute those instructions.
    pub unsafe fn assume(features: &[Feature]) -> Self {
        features
            .iter()
            .fold(Self::none(), |caps, &feature| caps.with(feature))
    }

    /// Whether `feature` is in the set.
    #[inline]
    pub const fn contains(self, feature: Feature) -> bool {
        (self.0 & feature.mask()) != 0
    }

    /// Whether every feature of `features` is in the set.
    pub fn contains_all(self, features: &[Feature]) -> bool {
        features.iter().all(|&f| self.contains(f))
    }

    /// The features present in both `self` and `other`.
    ///
    /// Narrowing a truthful descriptor keeps it truthful, so this is safe.
    #[inline]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// The features present in either `self` or `other`.
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline(always)]
    const fn with(self, feature: Feature) -> Self {
        Self(self.0 | feature.mask())
    }

    /// Iterates over the features in the set, in declaration order.
    pub fn iter(self) -> impl Iterator<Item = Feature> {
        Feature::ALL.into_iter().filter(move |&f| self.contains(f))
    }
}

impl fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set()
            .entries(self.iter().map(Feature::name))
            .finish()
    }
}

cfg_if! {
    if #[cfg(target_arch = "x86_64")] {
        mod intel;
    } else if #[cfg(all(target_arch = "aarch64", target_endian = "little"))] {
        mod arm;
    }
}
