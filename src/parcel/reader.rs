// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Parcel reader for consuming parcel-encoded values from a source.

use std::io::Read;

use byteorder::{LittleEndian, ReadBytesExt};

use super::binder::{BinderRef, FlatBinderObject};
use super::parcelable::Parcelable;
use super::{padding_for, NULL_LENGTH, VAL_NULL, VAL_STRING};
use crate::config::DecodeOptions;
use crate::core::{ParcelError, Result};

/// Parcel reader over any `std::io::Read` source.
///
/// The reader tracks:
/// - `position`: bytes consumed since the reader was created
/// - `options`: limits applied to length prefixes
///
/// End of stream in the middle of a value is reported as
/// [`ParcelError::MalformedRecord`]; any other I/O error is a
/// [`ParcelError::TransportFault`].
///
/// # Example
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use telecom_parcel::parcel::ParcelReader;
///
/// let data: &[u8] = &[0x2A, 0x00, 0x00, 0x00];
/// let mut reader = ParcelReader::new(data);
/// assert_eq!(reader.read_i32()?, 42);
/// # Ok(())
/// # }
/// ```
pub struct ParcelReader<R: Read> {
    /// Source of parcel bytes
    reader: R,
    /// Bytes consumed so far
    position: u64,
    /// Length limits
    options: DecodeOptions,
}

impl<R: Read> ParcelReader<R> {
    /// Create a new reader with default options.
    pub fn new(reader: R) -> Self {
        Self::with_options(reader, DecodeOptions::default())
    }

    /// Create a new reader with explicit options.
    pub fn with_options(reader: R, options: DecodeOptions) -> Self {
        Self {
            reader,
            position: 0,
            options,
        }
    }

    /// Bytes consumed so far.
    #[inline]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Options this reader enforces.
    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Consume the reader and return the underlying source.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Skip padding up to the next 4-byte boundary.
    fn skip_padding(&mut self) -> Result<()> {
        let padding = padding_for(self.position);
        if padding > 0 {
            let mut buf = [0u8; 4];
            self.reader
                .read_exact(&mut buf[..padding])
                .map_err(|e| ParcelError::from_read(e, padding, self.position))?;
            self.position += padding as u64;
        }
        Ok(())
    }

    /// Read `count` raw bytes followed by padding.
    pub fn read_padded(&mut self, count: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; count];
        self.reader
            .read_exact(&mut buf)
            .map_err(|e| ParcelError::from_read(e, count, self.position))?;
        self.position += count as u64;
        self.skip_padding()?;
        Ok(buf)
    }

    /// Read a 32-bit signed integer.
    pub fn read_i32(&mut self) -> Result<i32> {
        let value = self
            .reader
            .read_i32::<LittleEndian>()
            .map_err(|e| ParcelError::from_read(e, 4, self.position))?;
        self.position += 4;
        Ok(value)
    }

    /// Read a 32-bit unsigned integer.
    pub fn read_u32(&mut self) -> Result<u32> {
        let value = self
            .reader
            .read_u32::<LittleEndian>()
            .map_err(|e| ParcelError::from_read(e, 4, self.position))?;
        self.position += 4;
        Ok(value)
    }

    /// Read a 64-bit signed integer.
    pub fn read_i64(&mut self) -> Result<i64> {
        let value = self
            .reader
            .read_i64::<LittleEndian>()
            .map_err(|e| ParcelError::from_read(e, 8, self.position))?;
        self.position += 8;
        Ok(value)
    }

    /// Read a 64-bit unsigned integer.
    pub fn read_u64(&mut self) -> Result<u64> {
        let value = self
            .reader
            .read_u64::<LittleEndian>()
            .map_err(|e| ParcelError::from_read(e, 8, self.position))?;
        self.position += 8;
        Ok(value)
    }

    /// Read a length or count prefix, validated against `limit`.
    ///
    /// Returns `None` for the null marker.
    fn read_length(&mut self, what: &str, limit: usize) -> Result<Option<usize>> {
        let start = self.position;
        let raw = self.read_i32()?;
        if raw == NULL_LENGTH {
            return Ok(None);
        }
        let len = usize::try_from(raw)
            .map_err(|_| ParcelError::malformed(start, format!("negative {what} {raw}")))?;
        if len > limit {
            return Err(ParcelError::malformed(
                start,
                format!("{what} {len} exceeds limit {limit}"),
            ));
        }
        Ok(Some(len))
    }

    /// Read a nullable UTF-16 string.
    pub fn read_string(&mut self) -> Result<Option<String>> {
        let Some(len) = self.read_length("string length", self.options.max_string_len)? else {
            return Ok(None);
        };

        let start = self.position;
        // Units plus the terminator
        let mut units = vec![0u16; len + 1];
        self.reader
            .read_u16_into::<LittleEndian>(&mut units)
            .map_err(|e| ParcelError::from_read(e, (len + 1) * 2, start))?;
        self.position += (len as u64 + 1) * 2;

        if units.pop() != Some(0) {
            return Err(ParcelError::malformed(
                start + len as u64 * 2,
                "missing string terminator",
            ));
        }
        self.skip_padding()?;

        String::from_utf16(&units)
            .map(Some)
            .map_err(|_| ParcelError::malformed(start, "invalid UTF-16 in string"))
    }

    /// Read a list of tagged string values.
    ///
    /// A null list decodes as empty. Null elements and non-string tags are
    /// rejected.
    pub fn read_string_list(&mut self) -> Result<Vec<String>> {
        let Some(count) = self.read_length("list count", self.options.max_list_len)? else {
            return Ok(Vec::new());
        };

        let mut items = Vec::with_capacity(count);
        for index in 0..count {
            let tag_pos = self.position;
            match self.read_i32()? {
                VAL_STRING => match self.read_string()? {
                    Some(item) => items.push(item),
                    None => {
                        return Err(ParcelError::malformed(
                            tag_pos,
                            format!("null string at list index {index}"),
                        ))
                    }
                },
                VAL_NULL => {
                    return Err(ParcelError::malformed(
                        tag_pos,
                        format!("null element at list index {index}"),
                    ))
                }
                tag => {
                    return Err(ParcelError::malformed(
                        tag_pos,
                        format!("unsupported value tag {tag} at list index {index}"),
                    ))
                }
            }
        }
        Ok(items)
    }

    /// Read a nullable strong binder reference.
    pub fn read_binder(&mut self) -> Result<Option<BinderRef>> {
        let start = self.position;
        FlatBinderObject::read(self)?.into_ref(start)
    }

    /// Read a nullable parcelable of type `T`.
    ///
    /// A null class name means no parcelable was written. A class name other
    /// than `T::CLASS_NAME` is rejected.
    pub fn read_parcelable<T: Parcelable>(&mut self) -> Result<Option<T>> {
        let start = self.position;
        let Some(class_name) = self.read_string()? else {
            return Ok(None);
        };
        if class_name != T::CLASS_NAME {
            return Err(ParcelError::malformed(
                start,
                format!(
                    "expected parcelable '{}', found '{class_name}'",
                    T::CLASS_NAME
                ),
            ));
        }
        T::create_from_parcel(self).map(Some)
    }
}
