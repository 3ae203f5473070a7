// SPDX-License-Identifier: Apache-2.0

use crate::parse_error::{ErrorCode, ParserError};
use crate::parser_state::{ParserState, Position};
use crate::string_view::StringView;

use log::trace;

/// The input bytes together with the live cursor over them.
///
/// All cursor movement goes through [`advance`](Self::advance), which keeps
/// the current symbol and the line/column in step with the offset.
#[derive(Debug)]
pub(crate) struct SliceInputBuffer<'a> {
    data: &'a [u8],
    state: ParserState,
}

impl<'a> SliceInputBuffer<'a> {
    /// Creates a buffer with the cursor on `start`.
    pub fn new(data: &'a [u8], start: usize) -> Self {
        Self {
            data,
            state: ParserState::new(data, start),
        }
    }

    /// The whole input, regardless of the cursor.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// The current byte, or `0` at the end of the input.
    pub fn symbol(&self) -> u8 {
        self.state.symbol
    }

    pub fn is_eof(&self) -> bool {
        self.state.offset >= self.data.len()
    }

    pub fn current_pos(&self) -> usize {
        self.state.offset
    }

    pub fn position(&self) -> Position {
        self.state.position()
    }

    /// Moves past the current byte. Returns `false` when already at the end.
    pub fn advance(&mut self) -> bool {
        if self.is_eof() {
            return false;
        }

        let consumed = self.state.symbol;
        self.state.offset += 1;
        self.state.symbol = self.data.get(self.state.offset).copied().unwrap_or(0);

        if consumed == b'\n' {
            self.state.line = self.state.line.saturating_add(1);
            self.state.column = 1;
        } else {
            self.state.column = self.state.column.saturating_add(1);
        }

        true
    }

    /// Gets the bytes between `start` and `end`.
    ///
    /// Callers only pass offsets the cursor has already visited, so the range
    /// is always in bounds.
    pub fn slice(&self, start: usize, end: usize) -> &'a [u8] {
        self.data.get(start..end).unwrap_or(&[])
    }

    /// Gets a view of the bytes between `start` and `end`.
    pub fn view(&self, start: usize, end: usize) -> StringView<'a> {
        StringView::new(start, self.slice(start, end))
    }

    pub fn save(&self) -> ParserState {
        self.state
    }

    pub fn restore(&mut self, state: ParserState) {
        self.state = state;
    }

    pub fn last_error(&self) -> Option<ParserError> {
        self.state.error
    }

    /// Records `code` at the current cursor position, replacing any earlier error.
    pub fn record_error(&mut self, code: ErrorCode) {
        let error = ParserError::new(code, self.position());
        trace!("{error} (offset {})", self.state.offset);
        self.state.error = Some(error);
    }
}
