// SPDX-License-Identifier: Apache-2.0

//! Stepping over values without reading them, so documents can carry keys
//! the caller does not know about.

use crate::parse_error::ErrorCode;
use crate::slice_input_buffer::SliceInputBuffer;

/// The kind of value under the cursor, decided by its first byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// `true` or `false`.
    Bool,
    /// A number.
    Number,
    /// A quoted string.
    String,
    /// `[ ... ]`
    Array,
    /// `{ ... }`
    Object,
}

impl ValueType {
    fn from_first_byte(byte: u8) -> Option<Self> {
        match byte {
            b't' | b'f' => Some(ValueType::Bool),
            b'-' | b'0'..=b'9' => Some(ValueType::Number),
            b'"' => Some(ValueType::String),
            b'[' => Some(ValueType::Array),
            b'{' => Some(ValueType::Object),
            _ => None,
        }
    }
}

/// Containers entered but not yet left while skipping.
///
/// One bit per level with the innermost in the lowest bit: set for an
/// object, clear for an array.
#[derive(Debug, Default)]
struct Nesting {
    bits: u64,
    depth: u32,
}

impl Nesting {
    const MAX_DEPTH: u32 = u64::BITS;

    fn push(&mut self, is_object: bool) -> Result<(), ErrorCode> {
        if self.depth == Self::MAX_DEPTH {
            return Err(ErrorCode::NestingTooDeep);
        }
        self.bits = (self.bits << 1) | u64::from(is_object);
        self.depth += 1;
        Ok(())
    }

    fn pop(&mut self) {
        self.bits >>= 1;
        self.depth = self.depth.saturating_sub(1);
    }

    /// Whether the innermost open container is an object; `None` once all are closed.
    fn innermost_is_object(&self) -> Option<bool> {
        (self.depth > 0).then_some(self.bits & 1 == 1)
    }
}

impl<'a> SliceInputBuffer<'a> {
    /// Identifies the next value after any whitespace, without consuming it.
    pub fn peek_value_type(&mut self) -> Result<ValueType, ErrorCode> {
        self.skip_to_token()?;
        ValueType::from_first_byte(self.symbol()).ok_or(ErrorCode::ValueExpected)
    }

    /// Steps over one value along with everything nested inside it.
    ///
    /// Scalars go through the same scanners the typed reads use. Object
    /// members are `key = value` pairs, array elements are comma separated.
    /// At most 64 arrays and objects may be open at once.
    pub fn skip_value(&mut self, max_number_length: usize) -> Result<(), ErrorCode> {
        let mut nesting = Nesting::default();

        loop {
            let opened = match self.peek_value_type()? {
                ValueType::Bool => self.scan_bool().map(|_| false)?,
                ValueType::Number => self.scan_number(max_number_length).map(|_| false)?,
                ValueType::String => self.scan_string().map(|_| false)?,
                ValueType::Array => {
                    nesting.push(false)?;
                    self.advance();
                    true
                }
                ValueType::Object => {
                    nesting.push(true)?;
                    self.advance();
                    true
                }
            };

            if !self.step_to_next_element(&mut nesting, opened)? {
                return Ok(());
            }
        }
    }

    /// Closes finished containers and moves to the start of the next element.
    ///
    /// Returns `false` when the outermost value has been closed. `opened` is
    /// set right after a `[` or `{`, where no separator is due yet.
    fn step_to_next_element(
        &mut self,
        nesting: &mut Nesting,
        mut opened: bool,
    ) -> Result<bool, ErrorCode> {
        while let Some(is_object) = nesting.innermost_is_object() {
            self.skip_to_token()?;

            let closing = if is_object { b'}' } else { b']' };
            if self.symbol() == closing {
                self.advance();
                nesting.pop();
                opened = false;
                continue;
            }

            if is_object {
                self.scan_any_key()?;
                self.expect_symbol(b'=', ErrorCode::EqualSignExpected)?;
            } else if !opened {
                if self.symbol() != b',' {
                    return Err(ErrorCode::CommaExpected);
                }
                self.advance();
            }

            return Ok(true);
        }

        Ok(false)
    }
}
