// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Parcel wire primitives.
//!
//! A parcel is a positional, untagged byte stream. Both ends must agree on the
//! field order; nothing in the bytes describes the schema.
//!
//! ## Layout rules
//!
//! - All integers are little-endian.
//! - Every value occupies a multiple of 4 bytes; shorter payloads are padded
//!   with zeros, relative to the start of the parcel.
//! - `int64` values are only 4-byte aligned.
//! - Strings are UTF-16: `i32` unit count (`-1` = null), the units, a zero
//!   terminator unit, then padding.
//! - Lists are an `i32` count (`-1` = null) followed by tagged values.
//!
//! The [`ParcelWriter`] and [`ParcelReader`] implement these rules over any
//! `std::io::Write` sink and `std::io::Read` source. The [`binder`] and
//! [`parcelable`] modules build the two nullable handle encodings on top.

pub mod binder;
pub mod parcelable;
pub mod reader;
pub mod writer;

pub use binder::BinderRef;
pub use parcelable::Parcelable;
pub use reader::ParcelReader;
pub use writer::ParcelWriter;

/// Every parcel value is padded to this many bytes.
pub const PARCEL_ALIGNMENT: u64 = 4;

/// Length written in place of a null string or null list.
pub const NULL_LENGTH: i32 = -1;

/// Value tag for a null list element.
pub const VAL_NULL: i32 = -1;

/// Value tag for a string list element.
pub const VAL_STRING: i32 = 0;

/// Number of padding bytes needed after `position` to reach the next boundary.
#[inline]
pub(crate) fn padding_for(position: u64) -> usize {
    let rem = position % PARCEL_ALIGNMENT;
    if rem == 0 {
        0
    } else {
        (PARCEL_ALIGNMENT - rem) as usize
    }
}
