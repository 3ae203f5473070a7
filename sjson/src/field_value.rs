// SPDX-License-Identifier: Apache-2.0

use crate::config::ParserConfig;
use crate::number_parser::{parse_f32, parse_f64, parse_i32, parse_i64, parse_u32, parse_u64};
use crate::parse_error::ErrorCode;
use crate::parser::Parser;
use crate::string_view::StringView;

mod sealed {
    pub trait Sealed {}
}

/// A value that can be read with [`Parser::read`] and friends.
///
/// Implemented for [`StringView`], `bool`, `f64`, `f32`, `i32`, `i64`, `u32`
/// and `u64`. Integer types accept number lexemes without a fraction or
/// exponent that fit the type; anything else fails with
/// [`ErrorCode::NumberCouldNotBeConverted`].
pub trait FieldValue<'a>: Sized + sealed::Sealed {
    /// The value `try_read` leaves behind when it fails.
    fn null() -> Self;

    #[doc(hidden)]
    fn scan<C: ParserConfig>(parser: &mut Parser<'a, C>) -> Result<Self, ErrorCode>;
}

impl sealed::Sealed for StringView<'_> {}

impl<'a> FieldValue<'a> for StringView<'a> {
    fn null() -> Self {
        StringView::empty()
    }

    fn scan<C: ParserConfig>(parser: &mut Parser<'a, C>) -> Result<Self, ErrorCode> {
        parser.scan_string()
    }
}

impl sealed::Sealed for bool {}

impl<'a> FieldValue<'a> for bool {
    fn null() -> Self {
        false
    }

    fn scan<C: ParserConfig>(parser: &mut Parser<'a, C>) -> Result<Self, ErrorCode> {
        parser.scan_bool()
    }
}

macro_rules! impl_number_field {
    ($ty:ty, $null:expr, $convert:ident) => {
        impl sealed::Sealed for $ty {}

        impl<'a> FieldValue<'a> for $ty {
            fn null() -> Self {
                $null
            }

            fn scan<C: ParserConfig>(parser: &mut Parser<'a, C>) -> Result<Self, ErrorCode> {
                let number = parser.scan_number()?;
                $convert(number)
            }
        }
    };
}

impl_number_field!(f64, 0.0, parse_f64);
impl_number_field!(f32, 0.0, parse_f32);
impl_number_field!(i32, 0, parse_i32);
impl_number_field!(i64, 0, parse_i64);
impl_number_field!(u32, 0, parse_u32);
impl_number_field!(u64, 0, parse_u64);
