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

use super::{Capabilities, Feature};

// Advanced SIMD is mandatory for AArch64 Rust targets, so it is always in the
// static set.
const STATIC: &[(bool, Feature)] = &[
    (cfg!(target_feature = "neon"), Feature::Neon),
    (cfg!(target_feature = "sha2"), Feature::Sha2),
];

pub(super) fn detect() -> Capabilities {
    let dynamic = dynamic();
    STATIC
        .iter()
        .chain(dynamic.iter())
        .filter(|(present, _)| *present)
        .fold(Capabilities::none(), |caps, &(_, f)| caps.with(f))
}

#[cfg(feature = "std")]
fn dynamic() -> [(bool, Feature); 2] {
    [
        (std::arch::is_aarch64_feature_detected!("neon"), Feature::Neon),
        (std::arch::is_aarch64_feature_detected!("sha2"), Feature::Sha2),
    ]
}

#[cfg(not(feature = "std"))]
fn dynamic() -> [(bool, Feature); 0] {
    []
}
