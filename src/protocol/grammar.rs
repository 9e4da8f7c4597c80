//! Fixed-width payload grammars
//!
//! A [`Grammar`] is the ordered list of hex fields making up one message
//! payload. Decoding validates the whole payload against it before any field
//! is extracted, so a [`FieldReader`] only ever walks well-formed text.
//! Encoding walks the same table through a [`FieldWriter`], which takes each
//! field width from the grammar rather than from the caller.

use std::fmt::Write as _;
use std::time::Duration;

use super::hex::{self, TimeUnit};
use super::{Error, MAC_WIDTH, MacAddress, MessageType, Result};

/// One named hex field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Field name, used in diagnostics
    pub name: &'static str,
    /// Width in hex digits
    pub width: usize,
}

impl Field {
    /// Create a field
    #[must_use]
    pub const fn new(name: &'static str, width: usize) -> Self {
        Self { name, width }
    }

    /// The node address field every addressed payload starts with
    #[must_use]
    pub const fn mac() -> Self {
        Self::new("mac", MAC_WIDTH)
    }
}

/// Ordered field layout of one payload
///
/// The first `required` fields are mandatory. Any remaining fields form an
/// optional tail that is either entirely present or entirely absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grammar {
    fields: &'static [Field],
    required: usize,
}

impl Grammar {
    /// Grammar whose fields are all mandatory
    #[must_use]
    pub const fn new(fields: &'static [Field]) -> Self {
        Self {
            fields,
            required: fields.len(),
        }
    }

    /// Grammar whose fields after `required` may be omitted together
    #[must_use]
    pub const fn with_optional_tail(fields: &'static [Field], required: usize) -> Self {
        assert!(required <= fields.len());
        Self { fields, required }
    }

    /// Field layout
    #[must_use]
    pub const fn fields(&self) -> &'static [Field] {
        self.fields
    }

    /// Length of the payload with the optional tail omitted
    #[must_use]
    pub const fn min_len(&self) -> usize {
        width_of(self.fields, self.required)
    }

    /// Length of the payload with every field present
    #[must_use]
    pub const fn max_len(&self) -> usize {
        width_of(self.fields, self.fields.len())
    }

    /// Whether a payload of `len` digits can match
    #[must_use]
    pub const fn accepts_len(&self, len: usize) -> bool {
        len == self.min_len() || len == self.max_len()
    }

    /// Whether the first field is a node address
    #[must_use]
    pub fn is_addressed(&self) -> bool {
        self.fields.first() == Some(&Field::mac())
    }

    /// Render as `name:width` groups, optional tail in brackets
    #[must_use]
    pub fn pattern(&self) -> String {
        let mut out = String::new();
        for (index, field) in self.fields.iter().enumerate() {
            if !out.is_empty() {
                out.push(' ');
            }
            if index == self.required {
                out.push('[');
            }
            let _ = write!(out, "{}:{}", field.name, field.width);
        }
        if self.required < self.fields.len() {
            out.push(']');
        }
        out
    }

    /// Validate `payload` and return a reader over its fields
    pub fn reader<'a>(
        &'static self,
        message_type: MessageType,
        payload: &'a str,
    ) -> Result<FieldReader<'a>> {
        let present = if payload.len() == self.max_len() {
            self.fields.len()
        } else if payload.len() == self.min_len() {
            self.required
        } else {
            return Err(self.mismatch(message_type, payload));
        };
        if !hex::is_hex(payload) {
            return Err(self.mismatch(message_type, payload));
        }
        Ok(FieldReader {
            message_type,
            grammar: self,
            payload,
            present,
            index: 0,
            offset: 0,
        })
    }

    /// Writer appending fields of this grammar to `out`
    pub fn writer<'a>(&'static self, out: &'a mut String) -> FieldWriter<'a> {
        FieldWriter {
            grammar: self,
            out,
            index: 0,
        }
    }

    pub(crate) fn mismatch(&self, message_type: MessageType, payload: &str) -> Error {
        Error::PayloadMismatch {
            message_type,
            pattern: self.pattern(),
            payload: payload.to_owned(),
        }
    }
}

const fn width_of(fields: &[Field], count: usize) -> usize {
    let mut total = 0;
    let mut index = 0;
    while index < count {
        total += fields[index].width;
        index += 1;
    }
    total
}

/// Sequential access to the fields of a validated payload
#[derive(Debug)]
pub struct FieldReader<'a> {
    message_type: MessageType,
    grammar: &'static Grammar,
    payload: &'a str,
    present: usize,
    index: usize,
    offset: usize,
}

impl<'a> FieldReader<'a> {
    /// Whether another field is present
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.index < self.present
    }

    /// Next field as raw text
    pub fn raw(&mut self) -> Result<&'a str> {
        if !self.has_next() {
            return Err(self.mismatch());
        }
        let width = self.grammar.fields[self.index].width;
        let text = &self.payload[self.offset..self.offset + width];
        self.index += 1;
        self.offset += width;
        Ok(text)
    }

    /// Next field parsed with `parse`; any failure is reported as a
    /// payload mismatch
    pub fn parse<T>(&mut self, parse: impl FnOnce(&'a str) -> Result<T>) -> Result<T> {
        let text = self.raw()?;
        parse(text).map_err(|_| self.mismatch())
    }

    /// Next field as an unsigned integer
    pub fn number<T: TryFrom<u64>>(&mut self) -> Result<T> {
        self.parse(|text| {
            hex::decode_unsigned(text)
                .and_then(|value| T::try_from(value).map_err(|_| Error::malformed(text)))
        })
    }

    /// Next field as a node address
    pub fn mac(&mut self) -> Result<MacAddress> {
        self.parse(MacAddress::parse)
    }

    /// Next field as an IEEE-754 float
    pub fn float(&mut self) -> Result<f32> {
        self.parse(hex::decode_f32)
    }

    /// Next field as a boolean; only the literal `01` is true
    pub fn flag(&mut self) -> Result<bool> {
        self.raw().map(|text| text == "01")
    }

    /// Next field as a duration in `unit`s
    pub fn duration(&mut self, unit: TimeUnit) -> Result<Duration> {
        self.parse(|text| hex::decode_duration(text, unit))
    }

    /// Next field as two BCD digits
    pub fn bcd(&mut self) -> Result<u8> {
        self.parse(hex::decode_bcd)
    }

    fn mismatch(&self) -> Error {
        self.grammar.mismatch(self.message_type, self.payload)
    }
}

/// Appends fields in grammar order, each at its grammar width
#[derive(Debug)]
pub struct FieldWriter<'a> {
    grammar: &'static Grammar,
    out: &'a mut String,
    index: usize,
}

impl FieldWriter<'_> {
    fn next_width(&mut self, value: u64) -> Result<usize> {
        let field = self
            .grammar
            .fields
            .get(self.index)
            .ok_or(Error::FieldOverflow { value, width: 0 })?;
        self.index += 1;
        Ok(field.width)
    }

    /// Write an unsigned integer
    pub fn number(&mut self, value: impl Into<u64>) -> Result<()> {
        let value = value.into();
        let width = self.next_width(value)?;
        hex::write_unsigned(self.out, value, width)
    }

    /// Write a node address
    pub fn mac(&mut self, mac: MacAddress) -> Result<()> {
        self.number(mac.as_u64())
    }

    /// Write an IEEE-754 float
    pub fn float(&mut self, value: f32) -> Result<()> {
        self.number(value.to_bits())
    }

    /// Write a boolean as `01`/`00`
    pub fn flag(&mut self, value: bool) -> Result<()> {
        self.number(u8::from(value))
    }

    /// Write a duration in `unit`s
    pub fn duration(&mut self, value: Duration, unit: TimeUnit) -> Result<()> {
        let secs = value.as_secs();
        let width = self.next_width(secs)?;
        self.out
            .push_str(&hex::encode_duration(value, unit, width)?);
        Ok(())
    }

    /// Write two BCD digits
    pub fn bcd(&mut self, value: u8) -> Result<()> {
        self.next_width(u64::from(value))?;
        self.out.push_str(&hex::encode_bcd(value)?);
        Ok(())
    }

    /// Write pre-rendered text for the next field; it must already be
    /// exactly the field width
    pub fn raw(&mut self, text: &str) -> Result<()> {
        let width = self.next_width(0)?;
        if text.len() != width || !hex::is_hex(text) {
            return Err(Error::malformed(text));
        }
        self.out.push_str(&text.to_ascii_uppercase());
        Ok(())
    }
}
