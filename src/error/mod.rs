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

//! Error reporting.
//!
//! Every error is a violation of the caller's side of the contract; nothing
//! in this crate fails for environmental reasons, so nothing is worth
//! retrying. An operation that returns an error has not modified any state.

/// The kind of contract violation that caused an operation to be rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// An argument had the wrong shape, e.g. an output buffer whose length
    /// isn't the algorithm's output length.
    InvalidArgument,

    /// The context isn't in a state where the operation makes sense, e.g. a
    /// midstate was requested while input is still buffered.
    InvalidState,

    /// The total input would exceed the 2^64 - 1 bit limit of SHA-256.
    InputTooLong,
}

impl Error {
    #[cold]
    #[inline(never)]
    pub(crate) fn invalid_argument() -> Self {
        Self::InvalidArgument
    }

    #[cold]
    #[inline(never)]
    pub(crate) fn invalid_state() -> Self {
        Self::InvalidState
    }

    #[cold]
    #[inline(never)]
    pub(crate) fn input_too_long() -> Self {
        Self::InputTooLong
    }

    fn description_(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "InvalidArgument",
            Self::InvalidState => "InvalidState",
            Self::InputTooLong => "InputTooLong",
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("sha2_engine::error::")?;
        f.write_str(self.description_())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::Error;
    use std::format;

    #[test]
    fn display_names_the_kind() {
        assert_eq!(
            format!("{}", Error::invalid_argument()),
            "sha2_engine::error::InvalidArgument"
        );
        assert_eq!(
            format!("{}", Error::invalid_state()),
            "sha2_engine::error::InvalidState"
        );
        assert_eq!(
            format!("{}", Error::input_too_long()),
            "sha2_engine::error::InputTooLong"
        );
    }
}
