//! Error type for the watchface library.
//!
//! Variants carry no data so the type stays `Copy` and cheap to log.

/// Errors raised while preparing watchface content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Formatted text did not fit into its fixed-size buffer.
    BufferOverflow,
}

impl From<core::fmt::Error> for Error {
    fn from(_: core::fmt::Error) -> Self {
        Error::BufferOverflow
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::BufferOverflow => f.write_str("text buffer overflow"),
        }
    }
}
