// SPDX-License-Identifier: Apache-2.0

use core::str::FromStr;

use crate::parse_error::ErrorCode;
use crate::slice_input_buffer::SliceInputBuffer;

impl<'a> SliceInputBuffer<'a> {
    /// Scans a number and returns its bytes.
    ///
    /// Grammar: `-? (0 | [1-9][0-9]*) (. [0-9]*)? ([eE] [+-]? [0-9]+)?`.
    /// Lexemes of `max_length` bytes or more are rejected.
    pub fn scan_number(&mut self, max_length: usize) -> Result<&'a [u8], ErrorCode> {
        self.skip_to_token()?;

        let start = self.current_pos();

        if self.symbol() == b'-' {
            self.advance();
        }

        if self.symbol() == b'0' {
            self.advance();
            if self.symbol().is_ascii_digit() {
                return Err(ErrorCode::InvalidNumber);
            }
        } else if self.symbol().is_ascii_digit() {
            self.skip_digits();
        } else {
            return Err(ErrorCode::NumberExpected);
        }

        if self.symbol() == b'.' {
            self.advance();
            self.skip_digits();
        }

        if matches!(self.symbol(), b'e' | b'E') {
            self.advance();

            if matches!(self.symbol(), b'+' | b'-') {
                self.advance();
            }

            if !self.symbol().is_ascii_digit() {
                return Err(ErrorCode::InvalidNumber);
            }
            self.skip_digits();
        }

        let number = self.slice(start, self.current_pos());
        if number.len() >= max_length {
            return Err(ErrorCode::NumberIsTooLong);
        }

        Ok(number)
    }

    fn skip_digits(&mut self) {
        while self.symbol().is_ascii_digit() {
            self.advance();
        }
    }
}

/// Converts a lexed number with `FromStr`. The whole lexeme must be accepted.
fn parse_float<T: FromStr>(number: &[u8]) -> Result<T, ErrorCode> {
    core::str::from_utf8(number)
        .ok()
        .and_then(|text| text.parse().ok())
        .ok_or(ErrorCode::NumberCouldNotBeConverted)
}

pub(crate) fn parse_f64(number: &[u8]) -> Result<f64, ErrorCode> {
    parse_float(number)
}

pub(crate) fn parse_f32(number: &[u8]) -> Result<f32, ErrorCode> {
    parse_float(number)
}

/// Integer types a lexed number can be converted to.
trait Integer: Sized {
    const ZERO: Self;

    /// `self * 10 + digit`, or `self * 10 - digit` while accumulating a
    /// negative number. `None` when the result does not fit.
    fn push_digit(self, digit: u8, negative: bool) -> Option<Self>;
}

macro_rules! impl_integer {
    ($($ty:ty),*) => {
        $(
            impl Integer for $ty {
                const ZERO: Self = 0;

                fn push_digit(self, digit: u8, negative: bool) -> Option<Self> {
                    let shifted = self.checked_mul(10)?;
                    if negative {
                        shifted.checked_sub(Self::from(digit))
                    } else {
                        shifted.checked_add(Self::from(digit))
                    }
                }
            }
        )*
    };
}

impl_integer!(i32, i64, u32, u64);

/// Converts a lexed number that has no fraction or exponent and fits `T`.
///
/// Negative numbers are accumulated downwards so `T::MIN` is reachable. For
/// unsigned types this leaves `-0` as the only negative lexeme that converts.
fn parse_integer<T: Integer>(number: &[u8]) -> Result<T, ErrorCode> {
    let (negative, digits) = match number {
        [b'-', digits @ ..] => (true, digits),
        digits => (false, digits),
    };

    if digits.is_empty() {
        return Err(ErrorCode::NumberCouldNotBeConverted);
    }

    digits
        .iter()
        .try_fold(T::ZERO, |value, &byte| {
            if byte.is_ascii_digit() {
                value.push_digit(byte - b'0', negative)
            } else {
                None
            }
        })
        .ok_or(ErrorCode::NumberCouldNotBeConverted)
}

pub(crate) fn parse_i32(number: &[u8]) -> Result<i32, ErrorCode> {
    parse_integer(number)
}

pub(crate) fn parse_i64(number: &[u8]) -> Result<i64, ErrorCode> {
    parse_integer(number)
}

pub(crate) fn parse_u32(number: &[u8]) -> Result<u32, ErrorCode> {
    parse_integer(number)
}

pub(crate) fn parse_u64(number: &[u8]) -> Result<u64, ErrorCode> {
    parse_integer(number)
}
