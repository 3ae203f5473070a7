// SPDX-License-Identifier: Apache-2.0

use core::marker::PhantomData;

use crate::config::{start_offset, DefaultConfig, ParserConfig};
use crate::field_value::FieldValue;
use crate::parse_error::{ErrorCode, ParserError};
use crate::parser_state::{ParserState, Position};
use crate::slice_input_buffer::SliceInputBuffer;
use crate::string_view::StringView;
use crate::value_skipper::ValueType;

use log::{debug, trace};

/// A cursor-driven SJSON parser over an in-memory buffer.
///
/// The caller walks the document in the order it expects it to be laid out:
///
/// ```
/// use sjson::{Parser, StringView};
///
/// let mut parser = Parser::new(r#"{ name = "box" visible = true }"#);
/// let mut name = StringView::empty();
/// let mut visible = false;
///
/// assert!(parser.object_begins());
/// assert!(parser.read("name", &mut name));
/// assert!(parser.read("visible", &mut visible));
/// assert!(parser.object_ends());
/// assert!(parser.remainder_is_comments_and_whitespace());
///
/// assert_eq!(name, "box");
/// assert!(visible);
/// ```
///
/// Every operation returns `true` on success. On failure it returns `false`
/// and records a [`ParserError`] with the position of the offending byte,
/// available from [`error`](Self::error) until the next failure replaces it.
///
/// Failed operations generally leave the cursor where scanning stopped. The
/// exceptions are a key mismatch, which leaves the cursor on the key so
/// another key can be tried, and the `try_*` operations, which restore the
/// cursor and the recorded error entirely.
///
/// Strings come back as [`StringView`]s borrowing the input buffer, so they
/// remain valid after the parser is dropped.
pub struct Parser<'a, C: ParserConfig = DefaultConfig> {
    input: SliceInputBuffer<'a>,
    _config: PhantomData<C>,
}

impl<'a> Parser<'a, DefaultConfig> {
    /// Creates a parser for the given SJSON text.
    ///
    /// # Example
    /// ```
    /// use sjson::Parser;
    /// let parser = Parser::new("key = 1");
    /// ```
    pub fn new(input: &'a str) -> Self {
        Self::new_from_slice(input.as_bytes())
    }

    /// Creates a parser from a byte slice.
    ///
    /// # Example
    /// ```
    /// # use sjson::Parser;
    /// let parser = Parser::new_from_slice(b"key = 1");
    /// ```
    pub fn new_from_slice(input: &'a [u8]) -> Self {
        Self::with_config_from_slice(input)
    }
}

impl<'a, C: ParserConfig> Parser<'a, C> {
    /// Creates a parser with a custom [`ParserConfig`].
    pub fn with_config(input: &'a str) -> Self {
        Self::with_config_from_slice(input.as_bytes())
    }

    /// Creates a parser from a byte slice with a custom [`ParserConfig`].
    ///
    /// This is the constructor all others delegate to.
    pub fn with_config_from_slice(input: &'a [u8]) -> Self {
        let start = start_offset::<C>(input);
        debug!("sjson parser over {} bytes, starting at {start}", input.len());
        Parser {
            input: SliceInputBuffer::new(input, start),
            _config: PhantomData,
        }
    }

    /// Consumes `{`.
    pub fn object_begins(&mut self) -> bool {
        let result = self.input.expect_symbol(b'{', ErrorCode::OpeningBraceExpected);
        self.finish(result)
    }

    /// Consumes `name = {`.
    pub fn object_begins_named(&mut self, name: &str) -> bool {
        let result = self
            .scan_key_and_equal_sign(name)
            .and_then(|()| self.input.expect_symbol(b'{', ErrorCode::OpeningBraceExpected));
        self.finish(result)
    }

    /// Consumes `}`.
    pub fn object_ends(&mut self) -> bool {
        let result = self.input.expect_symbol(b'}', ErrorCode::ClosingBraceExpected);
        self.finish(result)
    }

    /// Consumes `[`.
    pub fn array_begins(&mut self) -> bool {
        let result = self.input.expect_symbol(b'[', ErrorCode::OpeningBracketExpected);
        self.finish(result)
    }

    /// Consumes `name = [`.
    pub fn array_begins_named(&mut self, name: &str) -> bool {
        let result = self
            .scan_key_and_equal_sign(name)
            .and_then(|()| self.input.expect_symbol(b'[', ErrorCode::OpeningBracketExpected));
        self.finish(result)
    }

    /// Consumes `]`.
    pub fn array_ends(&mut self) -> bool {
        let result = self.input.expect_symbol(b']', ErrorCode::ClosingBracketExpected);
        self.finish(result)
    }

    /// Like [`array_begins_named`](Self::array_begins_named), but on failure
    /// the cursor and the recorded error are restored as if nothing happened.
    pub fn try_array_begins(&mut self, name: &str) -> bool {
        self.speculate(|parser| parser.array_begins_named(name))
    }

    /// Like [`array_ends`](Self::array_ends), but on failure the cursor and
    /// the recorded error are restored as if nothing happened.
    pub fn try_array_ends(&mut self) -> bool {
        self.speculate(Self::array_ends)
    }

    /// Matches the key `name`, quoted or unquoted, comparing bytes exactly.
    ///
    /// When a different key is found the cursor stays at the start of that
    /// key and [`ErrorCode::IncorrectKey`] is recorded.
    pub fn read_key(&mut self, name: &str) -> bool {
        let result = self.input.scan_key(name);
        self.finish(result)
    }

    /// Reads `key = value` into `value`.
    ///
    /// `value` is only written on success. A key mismatch leaves the cursor on
    /// the key; a malformed value leaves it where scanning of the value stopped.
    pub fn read<T: FieldValue<'a>>(&mut self, key: &str, value: &mut T) -> bool {
        let result = self
            .scan_key_and_equal_sign(key)
            .and_then(|()| T::scan(self));

        match self.record(result) {
            Some(scanned) => {
                *value = scanned;
                true
            }
            None => false,
        }
    }

    /// Like [`read`](Self::read), but on failure the cursor and the recorded
    /// error are restored and `value` is set to [`FieldValue::null`].
    pub fn try_read<T: FieldValue<'a>>(&mut self, key: &str, value: &mut T) -> bool {
        if self.speculate(|parser| parser.read(key, value)) {
            return true;
        }

        *value = T::null();
        false
    }

    /// Reads `key = [v0, v1, ...]` with exactly `values.len()` values.
    pub fn read_array<T: FieldValue<'a>>(&mut self, key: &str, values: &mut [T]) -> bool {
        let result = self
            .scan_key_and_equal_sign(key)
            .and_then(|()| self.input.expect_symbol(b'[', ErrorCode::OpeningBracketExpected))
            .and_then(|()| self.scan_values(values))
            .and_then(|()| self.input.expect_symbol(b']', ErrorCode::ClosingBracketExpected));
        self.finish(result)
    }

    /// Like [`read_array`](Self::read_array), but on failure the cursor and the
    /// recorded error are restored and every element is set to [`FieldValue::null`].
    pub fn try_read_array<T: FieldValue<'a>>(&mut self, key: &str, values: &mut [T]) -> bool {
        if self.speculate(|parser| parser.read_array(key, values)) {
            return true;
        }

        values.iter_mut().for_each(|value| *value = T::null());
        false
    }

    /// Reads `values.len()` comma separated values, without brackets.
    ///
    /// Reading into an empty slice succeeds without consuming anything.
    /// Elements read before a failure keep their new values.
    pub fn read_values<T: FieldValue<'a>>(&mut self, values: &mut [T]) -> bool {
        let result = self.scan_values(values);
        self.finish(result)
    }

    /// Reads whichever key comes next, quoted or not, and the `=` after it.
    ///
    /// With [`skip_value`](Self::skip_value) this walks objects whose keys
    /// are not known up front. `key` is only written on success.
    pub fn read_next_key(&mut self, key: &mut StringView<'a>) -> bool {
        let result = self.scan_next_key_and_equal_sign();
        match self.record(result) {
            Some(found) => {
                *key = found;
                true
            }
            None => false,
        }
    }

    /// Identifies the next value without consuming it.
    ///
    /// Records [`ErrorCode::ValueExpected`] and returns `None` when no value
    /// starts at the cursor.
    pub fn peek_value_type(&mut self) -> Option<ValueType> {
        let result = self.input.peek_value_type();
        self.record(result)
    }

    /// Steps over the next value of any type, nested arrays and objects included.
    pub fn skip_value(&mut self) -> bool {
        let result = self.input.skip_value(C::MAX_NUMBER_LENGTH);
        self.finish(result)
    }

    /// Steps over the next `key = value` pair, whatever the key.
    pub fn skip_pair(&mut self) -> bool {
        let result = self
            .scan_next_key_and_equal_sign()
            .and_then(|_| self.input.skip_value(C::MAX_NUMBER_LENGTH));
        self.finish(result)
    }

    /// Steps over `key = value` if the next key is `key`.
    ///
    /// On a different key or a malformed value the cursor and the recorded
    /// error are restored as if nothing happened.
    pub fn try_skip_pair(&mut self, key: &str) -> bool {
        self.speculate(|parser| {
            let result = parser
                .scan_key_and_equal_sign(key)
                .and_then(|()| parser.input.skip_value(C::MAX_NUMBER_LENGTH));
            parser.finish(result)
        })
    }

    /// Skips whitespace and comments, then checks that nothing else is left.
    pub fn remainder_is_comments_and_whitespace(&mut self) -> bool {
        let result = self.input.skip_comments_and_whitespace().and_then(|()| {
            if self.input.is_eof() {
                Ok(())
            } else {
                Err(ErrorCode::UnexpectedContentAtEnd)
            }
        });
        self.finish(result)
    }

    /// Skips any mix of whitespace, `//` comments and `/* */` comments.
    ///
    /// Fails on a malformed or unterminated comment.
    pub fn skip_comments_and_whitespace(&mut self) -> bool {
        let result = self.input.skip_comments_and_whitespace();
        self.finish(result)
    }

    /// Position of the byte under the cursor.
    pub fn position(&self) -> Position {
        self.input.position()
    }

    /// The last recorded error, if any operation has failed so far.
    ///
    /// Successful operations do not clear it, so check return values rather
    /// than this.
    pub fn error(&self) -> Option<ParserError> {
        self.input.last_error()
    }

    /// Whether the cursor has reached the end of the input.
    pub fn eof(&self) -> bool {
        self.input.is_eof()
    }

    /// Takes a snapshot of the cursor.
    pub fn save_state(&self) -> ParserState {
        self.input.save()
    }

    /// Returns the cursor to a snapshot taken from this parser.
    pub fn restore_state(&mut self, state: ParserState) {
        self.input.restore(state);
    }

    /// Returns the cursor to the start of the input and forgets any error.
    pub fn reset_state(&mut self) {
        let data = self.input.data();
        debug!("sjson parser reset");
        self.input = SliceInputBuffer::new(data, start_offset::<C>(data));
    }

    pub(crate) fn scan_string(&mut self) -> Result<StringView<'a>, ErrorCode> {
        self.input.scan_string()
    }

    pub(crate) fn scan_bool(&mut self) -> Result<bool, ErrorCode> {
        self.input.scan_bool()
    }

    pub(crate) fn scan_number(&mut self) -> Result<&'a [u8], ErrorCode> {
        self.input.scan_number(C::MAX_NUMBER_LENGTH)
    }

    fn scan_key_and_equal_sign(&mut self, key: &str) -> Result<(), ErrorCode> {
        self.input.scan_key(key)?;
        self.input.expect_symbol(b'=', ErrorCode::EqualSignExpected)
    }

    fn scan_next_key_and_equal_sign(&mut self) -> Result<StringView<'a>, ErrorCode> {
        let key = self.input.scan_any_key()?;
        self.input.expect_symbol(b'=', ErrorCode::EqualSignExpected)?;
        Ok(key)
    }

    fn scan_values<T: FieldValue<'a>>(&mut self, values: &mut [T]) -> Result<(), ErrorCode> {
        let last = values.len().saturating_sub(1);
        for (index, value) in values.iter_mut().enumerate() {
            *value = T::scan(self)?;
            if index < last {
                self.input.expect_symbol(b',', ErrorCode::CommaExpected)?;
            }
        }
        Ok(())
    }

    /// Runs `operation`, rolling the cursor back if it fails.
    fn speculate(&mut self, operation: impl FnOnce(&mut Self) -> bool) -> bool {
        let saved = self.save_state();
        if operation(self) {
            return true;
        }

        trace!(
            "rewinding to line {}, column {}",
            saved.line,
            saved.column
        );
        self.restore_state(saved);
        false
    }

    fn record<T>(&mut self, result: Result<T, ErrorCode>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(code) => {
                self.input.record_error(code);
                None
            }
        }
    }

    fn finish(&mut self, result: Result<(), ErrorCode>) -> bool {
        self.record(result).is_some()
    }
}
