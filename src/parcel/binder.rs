// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Strong binder references.
//!
//! A binder reference is an opaque capability: the parcel only carries enough
//! to let the binder driver route calls to the object, never the object
//! itself. On the wire it is a 24-byte flat binder object:
//!
//! | offset | size | field |
//! |---|---|---|
//! | 0 | 4 | type |
//! | 4 | 4 | flags |
//! | 8 | 8 | binder pointer or handle |
//! | 16 | 8 | cookie |
//!
//! A null reference is a local-binder object with a zero pointer, so a local
//! reference always carries a non-zero one.

use std::fmt;
use std::io::{Read, Write};
use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};

use super::reader::ParcelReader;
use super::writer::ParcelWriter;
use crate::core::{ParcelError, Result};

/// Object type for a binder living in the writing process (`'s' 'b' '*' 0x85`).
pub const BINDER_TYPE_BINDER: u32 = 0x7362_2a85;

/// Object type for a proxy handle to a remote binder (`'s' 'h' '*' 0x85`).
pub const BINDER_TYPE_HANDLE: u32 = 0x7368_2a85;

/// Lowest scheduling priority bits written for every binder object.
pub const FLAT_BINDER_FLAG_PRIORITY_MASK: u32 = 0x7f;

/// The receiving object accepts file descriptors.
pub const FLAT_BINDER_FLAG_ACCEPTS_FDS: u32 = 0x100;

/// Size of a flat binder object on the wire.
pub const FLAT_BINDER_OBJECT_SIZE: u64 = 24;

/// A non-null strong binder reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BinderRef {
    /// A binder object owned by the writing process.
    Local {
        /// Address of the weak-reference table entry
        object: NonZeroU64,
        /// Address of the object itself
        cookie: u64,
    },
    /// A proxy handle issued by the binder driver.
    Remote {
        /// Driver handle
        handle: u32,
    },
}

impl BinderRef {
    /// Create a local binder reference, or `None` for a zero `object`, which
    /// is the null reference on the wire.
    pub const fn local(object: u64, cookie: u64) -> Option<Self> {
        match NonZeroU64::new(object) {
            Some(object) => Some(BinderRef::Local { object, cookie }),
            None => None,
        }
    }

    /// Create a remote proxy reference.
    pub const fn remote(handle: u32) -> Self {
        BinderRef::Remote { handle }
    }

    /// Whether this reference is a proxy to another process.
    pub const fn is_remote(&self) -> bool {
        matches!(self, BinderRef::Remote { .. })
    }
}

impl fmt::Display for BinderRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinderRef::Local { object, .. } => write!(f, "Binder{{{:#x}}}", object.get()),
            BinderRef::Remote { handle } => write!(f, "BinderProxy{{handle={handle}}}"),
        }
    }
}

/// Wire form of a strong binder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FlatBinderObject {
    pub kind: u32,
    pub flags: u32,
    pub object: u64,
    pub cookie: u64,
}

impl FlatBinderObject {
    /// Flatten a nullable reference.
    pub fn from_ref(binder: Option<&BinderRef>) -> Self {
        let flags = FLAT_BINDER_FLAG_PRIORITY_MASK | FLAT_BINDER_FLAG_ACCEPTS_FDS;
        match binder {
            None => Self {
                kind: BINDER_TYPE_BINDER,
                flags,
                object: 0,
                cookie: 0,
            },
            Some(BinderRef::Local { object, cookie }) => Self {
                kind: BINDER_TYPE_BINDER,
                flags,
                object: object.get(),
                cookie: *cookie,
            },
            Some(BinderRef::Remote { handle }) => Self {
                kind: BINDER_TYPE_HANDLE,
                flags,
                object: u64::from(*handle),
                cookie: 0,
            },
        }
    }

    /// Unflatten into a nullable reference. `position` is where the object started.
    pub fn into_ref(self, position: u64) -> Result<Option<BinderRef>> {
        match self.kind {
            BINDER_TYPE_BINDER => Ok(NonZeroU64::new(self.object).map(|object| {
                BinderRef::Local {
                    object,
                    cookie: self.cookie,
                }
            })),
            BINDER_TYPE_HANDLE => {
                let handle = u32::try_from(self.object).map_err(|_| {
                    ParcelError::malformed(
                        position,
                        format!("binder handle {:#x} out of range", self.object),
                    )
                })?;
                Ok(Some(BinderRef::Remote { handle }))
            }
            other => Err(ParcelError::malformed(
                position,
                format!("unsupported binder object type {other:#010x}"),
            )),
        }
    }

    pub fn write<W: Write>(&self, writer: &mut ParcelWriter<W>) -> Result<()> {
        writer.write_u32(self.kind)?;
        writer.write_u32(self.flags)?;
        writer.write_u64(self.object)?;
        writer.write_u64(self.cookie)
    }

    pub fn read<R: Read>(reader: &mut ParcelReader<R>) -> Result<Self> {
        Ok(Self {
            kind: reader.read_u32()?,
            flags: reader.read_u32()?,
            object: reader.read_u64()?,
            cookie: reader.read_u64()?,
        })
    }
}
