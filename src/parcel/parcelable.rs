// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Parcelable trait for types with their own parcel encoding.
//!
//! Nested parcelables are written with their class name first so the reader
//! can tell a present value from a null one, and refuse a value of the wrong
//! type. See [`ParcelWriter::write_parcelable`] and
//! [`ParcelReader::read_parcelable`].

use std::io::{Read, Write};

use super::reader::ParcelReader;
use super::writer::ParcelWriter;
use crate::core::Result;

/// A type that can flatten itself into a parcel and be rebuilt from one.
///
/// Implementations write and read their fields in one fixed order; nothing
/// on the wire names the fields.
pub trait Parcelable: Sized {
    /// Class name written ahead of the fields when nested.
    const CLASS_NAME: &'static str;

    /// Write this value's fields to `dest`.
    fn write_to_parcel<W: Write>(&self, dest: &mut ParcelWriter<W>) -> Result<()>;

    /// Read a value's fields from `source`, in the order `write_to_parcel` wrote them.
    fn create_from_parcel<R: Read>(source: &mut ParcelReader<R>) -> Result<Self>;
}
