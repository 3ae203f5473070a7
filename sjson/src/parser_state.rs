// SPDX-License-Identifier: Apache-2.0

use crate::parse_error::ParserError;

/// A 1-based line and column in the input. Columns count bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

/// A snapshot of the scanning cursor.
///
/// Holds everything needed to resume scanning from a given point: the byte
/// offset, the byte found there, the text position and the last recorded
/// error. Saving copies the cursor out and restoring copies it back, so any
/// number of snapshots can be kept around without them interfering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserState {
    pub(crate) offset: usize,
    /// Byte at `offset`, or `0` once `offset` reaches the end of the input.
    pub(crate) symbol: u8,
    pub(crate) line: u32,
    pub(crate) column: u32,
    pub(crate) error: Option<ParserError>,
}

impl ParserState {
    /// Cursor sitting on `start` with no error recorded, at line 1, column 1.
    pub(crate) fn new(input: &[u8], start: usize) -> Self {
        Self {
            offset: start,
            symbol: input.get(start).copied().unwrap_or(0),
            line: 1,
            column: 1,
            error: None,
        }
    }

    /// Byte offset into the input.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }

    pub fn error(&self) -> Option<ParserError> {
        self.error
    }
}
