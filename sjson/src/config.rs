// SPDX-License-Identifier: Apache-2.0

/// Compile-time parser settings.
///
/// Selected through the second type parameter of [`Parser`](crate::Parser):
/// `Parser<'_, MyConfig>`. Most users want [`DefaultConfig`].
pub trait ParserConfig {
    /// Numbers must be strictly shorter than this many bytes.
    const MAX_NUMBER_LENGTH: usize;
    /// Skip a UTF-8 byte order mark at the start of the input.
    const SKIP_BOM: bool;
}

/// 64 byte numbers, byte order mark skipped.
pub struct DefaultConfig;

impl ParserConfig for DefaultConfig {
    const MAX_NUMBER_LENGTH: usize = 64;
    const SKIP_BOM: bool = true;
}

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Offset where scanning starts for the given input.
pub(crate) fn start_offset<C: ParserConfig>(input: &[u8]) -> usize {
    if C::SKIP_BOM && input.starts_with(UTF8_BOM) {
        UTF8_BOM.len()
    } else {
        0
    }
}
