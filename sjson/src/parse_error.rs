// SPDX-License-Identifier: Apache-2.0

use crate::parser_state::Position;

/// Reasons a parse operation can fail.
///
/// Each variant names what the parser expected (or what it found) at the
/// point where scanning stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// `{` was expected.
    OpeningBraceExpected,
    /// `}` was expected.
    ClosingBraceExpected,
    /// `[` was expected.
    OpeningBracketExpected,
    /// `]` was expected.
    ClosingBracketExpected,
    /// `=` was expected after a key.
    EqualSignExpected,
    /// `,` was expected between array values.
    CommaExpected,
    /// A quoted string was expected.
    QuotationMarkExpected,
    /// A key was expected but `=` was found.
    KeyExpected,
    /// A key was found but it is not the one requested.
    IncorrectKey,
    /// Unquoted keys cannot contain `"`.
    CannotUseQuotationMarkInUnquotedString,
    /// A `true` or `false` literal was expected.
    TrueOrFalseExpected,
    /// A number was expected.
    NumberExpected,
    /// The number does not follow the number grammar.
    InvalidNumber,
    /// The number has more characters than the configured maximum.
    NumberIsTooLong,
    /// The number is well formed but does not fit the requested type.
    NumberCouldNotBeConverted,
    /// `/` was not followed by `/` or `*`.
    CommentBeginsIncorrectly,
    /// The input ended in the middle of a token or comment.
    InputTruncated,
    /// Something other than whitespace or comments follows the document.
    UnexpectedContentAtEnd,
    /// No value starts at the cursor.
    ValueExpected,
    /// A skipped value nests arrays and objects too deeply.
    NestingTooDeep,
}

impl ErrorCode {
    /// A short human readable description.
    pub const fn message(self) -> &'static str {
        match self {
            ErrorCode::OpeningBraceExpected => "Opening brace expected",
            ErrorCode::ClosingBraceExpected => "Closing brace expected",
            ErrorCode::OpeningBracketExpected => "Opening bracket expected",
            ErrorCode::ClosingBracketExpected => "Closing bracket expected",
            ErrorCode::EqualSignExpected => "Equal sign expected",
            ErrorCode::CommaExpected => "Comma expected",
            ErrorCode::QuotationMarkExpected => "Quotation mark expected",
            ErrorCode::KeyExpected => "Key expected",
            ErrorCode::IncorrectKey => "Incorrect key",
            ErrorCode::CannotUseQuotationMarkInUnquotedString => {
                "Cannot use quotation mark in unquoted string"
            }
            ErrorCode::TrueOrFalseExpected => "'true' or 'false' expected",
            ErrorCode::NumberExpected => "Number expected",
            ErrorCode::InvalidNumber => "Invalid number",
            ErrorCode::NumberIsTooLong => "Number is too long",
            ErrorCode::NumberCouldNotBeConverted => "Number could not be converted",
            ErrorCode::CommentBeginsIncorrectly => "Comment begins incorrectly",
            ErrorCode::InputTruncated => "Input truncated",
            ErrorCode::UnexpectedContentAtEnd => "Unexpected content at end",
            ErrorCode::ValueExpected => "Value expected",
            ErrorCode::NestingTooDeep => "Nesting too deep",
        }
    }
}

impl core::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

/// The last failure recorded by a [`Parser`](crate::Parser), with the
/// 1-based position of the byte where it was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserError {
    pub code: ErrorCode,
    pub line: u32,
    pub column: u32,
}

impl ParserError {
    pub(crate) const fn new(code: ErrorCode, at: Position) -> Self {
        Self {
            code,
            line: at.line,
            column: at.column,
        }
    }

    pub const fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }
}

impl core::fmt::Display for ParserError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} at line {}, column {}",
            self.code, self.line, self.column
        )
    }
}

impl core::error::Error for ParserError {}
