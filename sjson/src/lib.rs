// SPDX-License-Identifier: Apache-2.0

//! A zero-copy pull parser for SJSON, the simplified JSON used for
//! configuration files:
//!
//! ```text
//! // Comments are allowed wherever whitespace is
//! name = "box"
//! "quoted key" = true
//! extents = [ 1.0, 2.0, 3.0 ]
//! /* block comments too */
//! ```
//!
//! Keys may be quoted or not and are followed by `=`. The parser does not
//! build a tree: the caller drives a [`Parser`] through the document in the
//! order it expects fields to appear, and uses the `try_*` operations for
//! optional parts.

#![cfg_attr(not(test), no_std)]

mod config;
pub use config::{DefaultConfig, ParserConfig};

mod field_value;
pub use field_value::FieldValue;

mod number_parser;

mod parse_error;
pub use parse_error::{ErrorCode, ParserError};

mod parser;
pub use parser::Parser;

mod parser_state;
pub use parser_state::{ParserState, Position};

mod scanner;

mod slice_input_buffer;

mod string_view;
pub use string_view::StringView;

mod value_skipper;
pub use value_skipper::ValueType;
