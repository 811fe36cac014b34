// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Parcel writer for appending parcel-encoded values to a sink.

use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};

use super::binder::{BinderRef, FlatBinderObject};
use super::parcelable::Parcelable;
use super::{padding_for, NULL_LENGTH, VAL_STRING};
use crate::config::DecodeOptions;
use crate::core::{ParcelError, Result};

/// Zero bytes used for padding.
const ZERO_PAD: [u8; 4] = [0; 4];

/// Parcel writer over any `std::io::Write` sink.
///
/// Tracks the number of bytes written so padding is computed relative to the
/// start of the parcel, not to whatever the sink already holds.
///
/// Strings and lists longer than a reader's limits are refused with
/// [`ParcelError::OversizedValue`] before any of their bytes are written.
/// Otherwise a method fails only when the sink does, and then with
/// [`ParcelError::TransportFault`].
///
/// # Example
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use telecom_parcel::parcel::ParcelWriter;
///
/// let mut writer = ParcelWriter::new(Vec::new());
/// writer.write_i32(42)?;
/// writer.write_string(Some("hi"))?;
/// let bytes = writer.into_inner();
/// assert_eq!(bytes.len(), 4 + 4 + 8);
/// # Ok(())
/// # }
/// ```
pub struct ParcelWriter<W: Write> {
    /// Destination sink
    writer: W,
    /// Bytes written since this writer was created
    position: u64,
    /// Largest string written, in UTF-16 units
    max_string_len: usize,
    /// Largest list written
    max_list_len: usize,
}

impl<W: Write> ParcelWriter<W> {
    /// Create a new writer whose output a default reader accepts.
    pub fn new(writer: W) -> Self {
        Self::with_limits(writer, &DecodeOptions::default())
    }

    /// Create a new writer that refuses anything a reader using `options`
    /// would reject.
    pub fn with_limits(writer: W, options: &DecodeOptions) -> Self {
        Self {
            writer,
            position: 0,
            max_string_len: options.max_string_len,
            max_list_len: options.max_list_len,
        }
    }

    /// Bytes written so far.
    #[inline]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Get a reference to the underlying sink.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Consume the writer and return the underlying sink.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Flush the underlying sink.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Write raw bytes followed by padding to the next boundary.
    pub fn write_padded(&mut self, data: &[u8]) -> Result<()> {
        self.writer.write_all(data)?;
        self.position += data.len() as u64;
        self.pad()
    }

    /// Write zero padding up to the next 4-byte boundary.
    fn pad(&mut self) -> Result<()> {
        let padding = padding_for(self.position);
        if padding > 0 {
            self.writer.write_all(&ZERO_PAD[..padding])?;
            self.position += padding as u64;
        }
        Ok(())
    }

    /// Write a 32-bit signed integer.
    pub fn write_i32(&mut self, value: i32) -> Result<()> {
        self.writer.write_i32::<LittleEndian>(value)?;
        self.position += 4;
        Ok(())
    }

    /// Write a 32-bit unsigned integer.
    pub fn write_u32(&mut self, value: u32) -> Result<()> {
        self.writer.write_u32::<LittleEndian>(value)?;
        self.position += 4;
        Ok(())
    }

    /// Write a 64-bit signed integer.
    pub fn write_i64(&mut self, value: i64) -> Result<()> {
        self.writer.write_i64::<LittleEndian>(value)?;
        self.position += 8;
        Ok(())
    }

    /// Write a 64-bit unsigned integer.
    pub fn write_u64(&mut self, value: u64) -> Result<()> {
        self.writer.write_u64::<LittleEndian>(value)?;
        self.position += 8;
        Ok(())
    }

    /// Write a nullable UTF-16 string.
    ///
    /// Format: `i32` unit count (`-1` for `None`), the UTF-16 units, a zero
    /// terminator unit, zero padding.
    pub fn write_string(&mut self, value: Option<&str>) -> Result<()> {
        let Some(value) = value else {
            return self.write_i32(NULL_LENGTH);
        };

        let units = value.encode_utf16().count();
        let len = self.check_length("string length", units, self.max_string_len)?;

        let body_len = (units + 1) * 2;
        let padding = padding_for(self.position + 4 + body_len as u64);
        let mut buf = Vec::with_capacity(4 + body_len + padding);
        buf.write_i32::<LittleEndian>(len)?;
        for unit in value.encode_utf16() {
            buf.write_u16::<LittleEndian>(unit)?;
        }
        buf.write_u16::<LittleEndian>(0)?;
        buf.extend_from_slice(&ZERO_PAD[..padding]);

        self.writer.write_all(&buf)?;
        self.position += buf.len() as u64;
        Ok(())
    }

    /// Write a list of strings as tagged values.
    ///
    /// Format: `i32` count, then per element `VAL_STRING` and the string.
    pub fn write_string_list(&mut self, items: &[String]) -> Result<()> {
        let count = self.check_length("list count", items.len(), self.max_list_len)?;
        for (i, item) in items.iter().enumerate() {
            let units = item.encode_utf16().count();
            if units > self.max_string_len {
                return Err(ParcelError::oversized(format!(
                    "string length {units} at list index {i} exceeds limit {}",
                    self.max_string_len
                )));
            }
        }

        self.write_i32(count)?;
        for item in items {
            self.write_i32(VAL_STRING)?;
            self.write_string(Some(item))?;
        }
        Ok(())
    }

    /// Check a length against `limit` and the `i32` prefix it is written as.
    fn check_length(&self, what: &str, len: usize, limit: usize) -> Result<i32> {
        if len > limit {
            return Err(ParcelError::oversized(format!(
                "{what} {len} exceeds limit {limit}"
            )));
        }
        i32::try_from(len).map_err(|_| {
            ParcelError::oversized(format!("{what} {len} does not fit an i32 prefix"))
        })
    }

    /// Write a nullable strong binder reference as a flat binder object.
    pub fn write_binder(&mut self, binder: Option<&BinderRef>) -> Result<()> {
        FlatBinderObject::from_ref(binder).write(self)
    }

    /// Write a nullable parcelable, prefixed with its class name.
    ///
    /// `None` is written as a null class name and nothing else.
    pub fn write_parcelable<T: Parcelable>(&mut self, value: Option<&T>) -> Result<()> {
        match value {
            None => self.write_string(None),
            Some(value) => {
                self.write_string(Some(T::CLASS_NAME))?;
                value.write_to_parcel(self)
            }
        }
    }
}
