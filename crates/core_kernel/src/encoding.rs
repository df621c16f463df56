//! Report encoding
//!
//! Renders any serializable value as indented JSON with these rules:
//!
//! - keys keep declaration (insertion) order
//! - two spaces of indentation per nesting level
//! - empty objects and arrays stay on one line (`{}`, `[]`)
//! - strings pass printable ASCII (32-126) through unchanged; quote,
//!   backslash and `\b \f \n \r \t` use short escapes; everything else is
//!   written as `\u` followed by four lower-case hex digits per UTF-16
//!   code unit
//!
//! The output is therefore pure ASCII and parses back with any JSON parser.

use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};

use crate::error::CoreError;

/// A [`Formatter`] producing ASCII-only, two-space indented JSON
pub struct ReportFormatter<'a> {
    inner: PrettyFormatter<'a>,
}

impl<'a> ReportFormatter<'a> {
    pub fn new() -> Self {
        Self {
            inner: PrettyFormatter::with_indent(b"  "),
        }
    }
}

impl<'a> Default for ReportFormatter<'a> {
    fn default() -> Self {
        Self::new()
    }
}

fn is_printable_ascii(c: char) -> bool {
    (' '..='~').contains(&c)
}

impl<'a> Formatter for ReportFormatter<'a> {
    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.end_object_value(writer)
    }

    /// serde_json hands over runs that need no JSON escaping, which still
    /// includes DEL and every non-ASCII character.
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let mut start = 0;
        for (index, c) in fragment.char_indices() {
            if is_printable_ascii(c) {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[start..index])?;
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = index + c.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }
}

/// Writes `value` to `writer` in report form.
///
/// # Errors
///
/// Returns [`CoreError::Encoding`] if serialization or the underlying
/// writer fails.
pub fn write_report<W, T>(writer: W, value: &T) -> Result<(), CoreError>
where
    W: Write,
    T: ?Sized + Serialize,
{
    let mut serializer = serde_json::Serializer::with_formatter(writer, ReportFormatter::new());
    value.serialize(&mut serializer)?;
    Ok(())
}

/// Renders `value` in report form.
///
/// # Errors
///
/// Returns [`CoreError::Encoding`] if `value` cannot be serialized as JSON
/// (for example a map with non-string keys).
pub fn to_report_string<T>(value: &T) -> Result<String, CoreError>
where
    T: ?Sized + Serialize,
{
    let mut buffer = Vec::with_capacity(256);
    write_report(&mut buffer, value)?;
    String::from_utf8(buffer).map_err(|_| CoreError::validation("report encoder produced non-UTF-8 output"))
}
