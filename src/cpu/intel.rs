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

// Features the compiler was told it may assume everywhere, e.g. via
// `-C target-cpu=native`.
const STATIC: &[(bool, Feature)] = &[
    (cfg!(target_feature = "ssse3"), Feature::Ssse3),
    (cfg!(target_feature = "sse4.1"), Feature::Sse41),
    (cfg!(target_feature = "sha"), Feature::Sha),
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
fn dynamic() -> [(bool, Feature); 3] {
    [
        (std::is_x86_feature_detected!("ssse3"), Feature::Ssse3),
        (std::is_x86_feature_detected!("sse4.1"), Feature::Sse41),
        (std::is_x86_feature_detected!("sha"), Feature::Sha),
    ]
}

#[cfg(not(feature = "std"))]
fn dynamic() -> [(bool, Feature); 0] {
    []
}
