//! Fixed-size text buffers

use core::fmt;

use crate::Error;

/// Text stored inline in a buffer of `N` bytes.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Label<const N: usize> {
    str_buf: [u8; N],
    len: usize,
}

impl<const N: usize> Label<N> {
    /// Create empty label
    pub const fn new() -> Self {
        Self {
            str_buf: [0; N],
            len: 0,
        }
    }

    /// Label holding a literal, for `const` items.
    ///
    /// Panics if `text` is longer than `N` bytes, which fails the build when
    /// evaluated in a `const`.
    pub const fn from_literal(text: &str) -> Self {
        let bytes = text.as_bytes();
        assert!(bytes.len() <= N, "literal does not fit the label");

        let mut str_buf = [0; N];
        let mut i = 0;
        while i < bytes.len() {
            str_buf[i] = bytes[i];
            i += 1;
        }
        Self {
            str_buf,
            len: bytes.len(),
        }
    }

    /// Create label holding `text`.
    pub fn with_text(text: &str) -> Result<Self, Error> {
        let mut label = Self::new();
        label.set_str(text)?;
        Ok(label)
    }

    /// Replace the contents with formatted text.
    ///
    /// The previous contents are kept when the text does not fit.
    pub fn set(&mut self, args: fmt::Arguments) -> Result<(), Error> {
        let mut buf = [0u8; N];
        let len = format_no_std::show(&mut buf, args)?.len();
        self.str_buf = buf;
        self.len = len;
        Ok(())
    }

    /// Replace the contents with `text`.
    pub fn set_str(&mut self, text: &str) -> Result<(), Error> {
        self.set(format_args!("{}", text))
    }

    pub fn as_str(&self) -> &str {
        // Only whole `str`s are ever written, so this cannot fail.
        core::str::from_utf8(&self.str_buf[..self.len]).unwrap_or("")
    }
}

impl<const N: usize> Default for Label<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Debug for Label<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

#[cfg(feature = "defmt")]
impl<const N: usize> defmt::Format for Label<N> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}", self.as_str())
    }
}
