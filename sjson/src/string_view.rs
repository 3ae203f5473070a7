// SPDX-License-Identifier: Apache-2.0

use core::ops::Deref;

/// A view of raw bytes in the parser's input.
///
/// Views never copy: they borrow the input for `'a`, the lifetime of the
/// input buffer, so they stay valid after the parser is dropped. Nothing is
/// unescaped, so `"a\"b"` in the input yields the four bytes `a\"b`.
///
/// Equality and hashing look at the bytes only, not at where they came from.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringView<'a> {
    offset: usize,
    bytes: &'a [u8],
}

impl<'a> StringView<'a> {
    pub(crate) const fn new(offset: usize, bytes: &'a [u8]) -> Self {
        Self { offset, bytes }
    }

    /// An empty view, used when a read fails.
    pub const fn empty() -> Self {
        Self {
            offset: 0,
            bytes: &[],
        }
    }

    /// Byte offset of the first viewed byte within the input.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Returns the bytes as `&str` if they are valid UTF-8.
    pub fn as_str(&self) -> Result<&'a str, core::str::Utf8Error> {
        core::str::from_utf8(self.bytes)
    }
}

impl Deref for StringView<'_> {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.bytes
    }
}

impl AsRef<[u8]> for StringView<'_> {
    fn as_ref(&self) -> &[u8] {
        self.bytes
    }
}

impl PartialEq for StringView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl Eq for StringView<'_> {}

impl core::hash::Hash for StringView<'_> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.bytes.hash(state);
    }
}

impl PartialEq<str> for StringView<'_> {
    fn eq(&self, other: &str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl PartialEq<&str> for StringView<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl PartialEq<[u8]> for StringView<'_> {
    fn eq(&self, other: &[u8]) -> bool {
        self.bytes == other
    }
}

impl PartialEq<&[u8]> for StringView<'_> {
    fn eq(&self, other: &&[u8]) -> bool {
        self.bytes == *other
    }
}

impl core::fmt::Display for StringView<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for chunk in self.bytes.utf8_chunks() {
            f.write_str(chunk.valid())?;
            if !chunk.invalid().is_empty() {
                f.write_str("\u{FFFD}")?;
            }
        }
        Ok(())
    }
}
