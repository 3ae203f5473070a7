// SPDX-License-Identifier: Apache-2.0

//! Lexical rules: whitespace and comments, punctuation, quoted strings,
//! unquoted keys and boolean literals.
//!
//! Every scanner reports failure as an [`ErrorCode`] and leaves the cursor on
//! the byte that caused it. Recording the error is up to the caller.

use crate::parse_error::ErrorCode;
use crate::slice_input_buffer::SliceInputBuffer;
use crate::string_view::StringView;

/// Same set as C `isspace`: space, `\t`, `\n`, `\v`, `\f`, `\r`.
pub(crate) fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

impl<'a> SliceInputBuffer<'a> {
    /// Skips any run of whitespace, `// line` and `/* block */` comments.
    pub fn skip_comments_and_whitespace(&mut self) -> Result<(), ErrorCode> {
        loop {
            if self.is_eof() {
                return Ok(());
            }

            if is_space(self.symbol()) {
                self.advance();
                continue;
            }

            if self.symbol() == b'/' {
                self.advance();
                self.skip_comment()?;
                continue;
            }

            return Ok(());
        }
    }

    /// Skips the body of a comment whose leading `/` was already consumed.
    fn skip_comment(&mut self) -> Result<(), ErrorCode> {
        if self.is_eof() {
            return Err(ErrorCode::InputTruncated);
        }

        match self.symbol() {
            b'/' => {
                // The newline itself is left for the whitespace loop
                while !self.is_eof() && self.symbol() != b'\n' {
                    self.advance();
                }
                Ok(())
            }
            b'*' => {
                self.advance();

                let mut was_asterisk = false;
                loop {
                    if self.is_eof() {
                        return Err(ErrorCode::InputTruncated);
                    }

                    let symbol = self.symbol();
                    self.advance();

                    if was_asterisk && symbol == b'/' {
                        return Ok(());
                    }
                    was_asterisk = symbol == b'*';
                }
            }
            _ => Err(ErrorCode::CommentBeginsIncorrectly),
        }
    }

    /// Skips whitespace and comments, failing if nothing follows them.
    pub fn skip_to_token(&mut self) -> Result<(), ErrorCode> {
        self.skip_comments_and_whitespace()?;

        if self.is_eof() {
            return Err(ErrorCode::InputTruncated);
        }

        Ok(())
    }

    /// Consumes `expected` after any whitespace, or fails with `reason_if_other_found`.
    pub fn expect_symbol(
        &mut self,
        expected: u8,
        reason_if_other_found: ErrorCode,
    ) -> Result<(), ErrorCode> {
        self.skip_to_token()?;

        if self.symbol() != expected {
            return Err(reason_if_other_found);
        }

        self.advance();
        Ok(())
    }

    /// Scans a quoted string and returns the bytes between the quotes.
    ///
    /// A backslash makes the next byte part of the string whatever it is, so
    /// `\"` does not end it. Escapes are left as they are in the input.
    pub fn scan_string(&mut self) -> Result<StringView<'a>, ErrorCode> {
        self.skip_to_token()?;

        if self.symbol() != b'"' {
            return Err(ErrorCode::QuotationMarkExpected);
        }
        self.advance();

        let start = self.current_pos();
        loop {
            if self.is_eof() {
                return Err(ErrorCode::InputTruncated);
            }

            match self.symbol() {
                b'"' => break,
                b'\\' => {
                    self.advance();
                }
                _ => {}
            }

            self.advance();
        }

        let end = self.current_pos();
        self.advance();

        Ok(self.view(start, end))
    }

    /// Scans an unquoted key, which runs up to whitespace, `=` or the end of input.
    pub fn scan_unquoted_key(&mut self) -> Result<StringView<'a>, ErrorCode> {
        if self.is_eof() {
            return Err(ErrorCode::InputTruncated);
        }

        let start = self.current_pos();
        let end;
        loop {
            if self.is_eof() {
                end = self.current_pos();
                break;
            }

            let symbol = self.symbol();
            if symbol == b'"' {
                return Err(ErrorCode::CannotUseQuotationMarkInUnquotedString);
            }

            if symbol == b'=' {
                if self.current_pos() == start {
                    return Err(ErrorCode::KeyExpected);
                }
                end = self.current_pos();
                break;
            }

            if is_space(symbol) {
                end = self.current_pos();
                self.advance();
                break;
            }

            self.advance();
        }

        Ok(self.view(start, end))
    }

    /// Scans whatever key comes next, quoted or not.
    pub fn scan_any_key(&mut self) -> Result<StringView<'a>, ErrorCode> {
        self.skip_to_token()?;

        if self.symbol() == b'"' {
            self.scan_string()
        } else {
            self.scan_unquoted_key()
        }
    }

    /// Matches the key `expected`, quoted or not.
    ///
    /// On a mismatch the cursor goes back to where the key started, so callers
    /// can try alternative keys one after the other.
    pub fn scan_key(&mut self, expected: &str) -> Result<(), ErrorCode> {
        self.skip_to_token()?;

        let start_of_key = self.save();
        let actual = self.scan_any_key()?;

        if actual != expected {
            self.restore(start_of_key);
            return Err(ErrorCode::IncorrectKey);
        }

        Ok(())
    }

    /// Scans `true` or `false`. Anything else leaves the cursor where the literal started.
    pub fn scan_bool(&mut self) -> Result<bool, ErrorCode> {
        self.skip_to_token()?;

        let start_of_literal = self.save();
        match self.symbol() {
            b't' if self.match_literal(b"true") => return Ok(true),
            b'f' if self.match_literal(b"false") => return Ok(false),
            _ => {}
        }

        self.restore(start_of_literal);
        Err(ErrorCode::TrueOrFalseExpected)
    }

    /// Consumes `literal` byte by byte, stopping at the first mismatch.
    fn match_literal(&mut self, literal: &[u8]) -> bool {
        for &expected in literal {
            if self.is_eof() || self.symbol() != expected {
                return false;
            }
            self.advance();
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser_state::Position;
    use test_log::test;

    fn buffer(input: &str) -> SliceInputBuffer<'_> {
        SliceInputBuffer::new(input.as_bytes(), 0)
    }

    #[test]
    fn test_skip_mixed_comments_and_whitespace() {
        let mut input = buffer("  // one\n /* two */\t/* three\n */ // four\n  x");
        assert_eq!(input.skip_comments_and_whitespace(), Ok(()));
        assert_eq!(input.symbol(), b'x');
        assert_eq!(input.position(), Position { line: 4, column: 3 });
    }

    #[test]
    fn test_skip_block_comment_edge_cases() {
        let mut input = buffer("/**/x");
        assert_eq!(input.skip_comments_and_whitespace(), Ok(()));
        assert_eq!(input.symbol(), b'x');

        let mut input = buffer("/* a ** b ***/x");
        assert_eq!(input.skip_comments_and_whitespace(), Ok(()));
        assert_eq!(input.symbol(), b'x');

        // `/*/` does not close the comment it opens
        let mut input = buffer("/*/ x");
        assert_eq!(
            input.skip_comments_and_whitespace(),
            Err(ErrorCode::InputTruncated)
        );
    }

    #[test]
    fn test_line_comment_at_end_of_input() {
        let mut input = buffer("// nothing after this");
        assert_eq!(input.skip_comments_and_whitespace(), Ok(()));
        assert!(input.is_eof());
    }

    #[test]
    fn test_bad_comments() {
        let mut input = buffer("/ x");
        assert_eq!(
            input.skip_comments_and_whitespace(),
            Err(ErrorCode::CommentBeginsIncorrectly)
        );
        assert_eq!(input.symbol(), b' ');

        let mut input = buffer("   /");
        assert_eq!(
            input.skip_comments_and_whitespace(),
            Err(ErrorCode::InputTruncated)
        );
    }

    #[test]
    fn test_skip_to_token_fails_at_end() {
        let mut input = buffer("  /* */  ");
        assert_eq!(input.skip_to_token(), Err(ErrorCode::InputTruncated));
    }

    #[test]
    fn test_vertical_tab_and_form_feed_are_whitespace() {
        let mut input = buffer("\x0B\x0C{");
        assert_eq!(input.expect_symbol(b'{', ErrorCode::OpeningBraceExpected), Ok(()));
        assert!(input.is_eof());
    }

    #[test]
    fn test_expect_symbol_leaves_cursor_on_mismatch() {
        let mut input = buffer("  ]");
        assert_eq!(
            input.expect_symbol(b'[', ErrorCode::OpeningBracketExpected),
            Err(ErrorCode::OpeningBracketExpected)
        );
        assert_eq!(input.current_pos(), 2);
    }

    #[test]
    fn test_scan_string_keeps_escapes() {
        let mut input = buffer(r#" "a\"b" rest"#);
        let view = input.scan_string().unwrap();
        assert_eq!(view, r#"a\"b"#);
        assert_eq!(view.len(), 4);
        assert_eq!(view.offset(), 2);
        assert_eq!(input.symbol(), b' ');
    }

    #[test]
    fn test_scan_string_escaped_backslash_before_quote() {
        let mut input = buffer(r#""a\\" x"#);
        assert_eq!(input.scan_string().unwrap(), r#"a\\"#);
    }

    #[test]
    fn test_scan_empty_string() {
        let mut input = buffer(r#""""#);
        let view = input.scan_string().unwrap();
        assert!(view.is_empty());
        assert!(input.is_eof());
    }

    #[test]
    fn test_scan_string_failures() {
        assert_eq!(buffer("abc").scan_string(), Err(ErrorCode::QuotationMarkExpected));
        assert_eq!(buffer(r#""abc"#).scan_string(), Err(ErrorCode::InputTruncated));
        assert_eq!(buffer(r#""abc\"#).scan_string(), Err(ErrorCode::InputTruncated));
        assert_eq!(buffer("   ").scan_string(), Err(ErrorCode::InputTruncated));
    }

    #[test]
    fn test_scan_unquoted_key() {
        let mut input = buffer("some_key = 1");
        assert_eq!(input.scan_unquoted_key().unwrap(), "some_key");
        // The terminating whitespace is consumed
        assert_eq!(input.symbol(), b'=');

        let mut input = buffer("key=1");
        assert_eq!(input.scan_unquoted_key().unwrap(), "key");
        assert_eq!(input.symbol(), b'=');

        let mut input = buffer("key");
        assert_eq!(input.scan_unquoted_key().unwrap(), "key");
        assert!(input.is_eof());
    }

    #[test]
    fn test_scan_unquoted_key_failures() {
        let mut input = buffer("= 1");
        assert_eq!(input.scan_unquoted_key(), Err(ErrorCode::KeyExpected));
        assert_eq!(input.current_pos(), 0);

        let mut input = buffer("ke\"y = 1");
        assert_eq!(
            input.scan_unquoted_key(),
            Err(ErrorCode::CannotUseQuotationMarkInUnquotedString)
        );
        assert_eq!(input.current_pos(), 2);
    }

    #[test]
    fn test_scan_key_mismatch_rewinds() {
        let mut input = buffer("  foo = 1");
        assert_eq!(input.scan_key("Foo"), Err(ErrorCode::IncorrectKey));
        assert_eq!(input.current_pos(), 2);

        assert_eq!(input.scan_key("foo"), Ok(()));
        assert_eq!(input.symbol(), b'=');
    }

    #[test]
    fn test_scan_quoted_key() {
        let mut input = buffer(r#""key one" = true"#);
        assert_eq!(input.scan_key("key one"), Ok(()));
        assert_eq!(input.expect_symbol(b'=', ErrorCode::EqualSignExpected), Ok(()));
    }

    #[test]
    fn test_scan_any_key() {
        let mut input = buffer(r#" /* c */ width=1 "two words" = 2"#);
        assert_eq!(input.scan_any_key().unwrap(), "width");
        assert_eq!(input.symbol(), b'=');
        input.advance();
        input.advance();

        assert_eq!(input.scan_any_key().unwrap(), "two words");
        assert_eq!(input.expect_symbol(b'=', ErrorCode::EqualSignExpected), Ok(()));

        assert_eq!(buffer(" = 1").scan_any_key(), Err(ErrorCode::KeyExpected));
    }

    #[test]
    fn test_scan_bool() {
        assert_eq!(buffer(" true").scan_bool(), Ok(true));
        assert_eq!(buffer("false").scan_bool(), Ok(false));

        for bad in ["tru", "fals", "True", "nope", "t rue"] {
            let mut input = buffer(bad);
            assert_eq!(input.scan_bool(), Err(ErrorCode::TrueOrFalseExpected), "{bad}");
            assert_eq!(input.current_pos(), 0, "{bad}");
        }
    }
}
