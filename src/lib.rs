// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # telecom-parcel
//!
//! Fixed-order binary codec for telephony conference state.
//!
//! A conference's exported state travels between processes as a parcel: a
//! positional byte stream with no field tags, read back in exactly the order
//! it was written. This library provides:
//! - **Parcel primitives** in the [`parcel`] module (aligned integers, UTF-16
//!   strings, tagged lists, binder references, nested parcelables)
//! - **Telecom records** in the [`telecom`] module, chiefly
//!   [`ConferenceRecord`]
//! - **Decode options** in the [`config`] module
//!
//! ## Example: Round-tripping a conference
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use telecom_parcel::{BinderRef, ConferenceRecord, NO_CONNECTTIME};
//!
//! let record = ConferenceRecord::new(
//!     None,
//!     1,
//!     0x41,
//!     vec!["conn1".into(), "conn2".into()],
//!     Some(BinderRef::remote(7)),
//!     0,
//!     NO_CONNECTTIME,
//! );
//!
//! let bytes = record.to_bytes()?;
//! let decoded = ConferenceRecord::from_bytes(&bytes)?;
//! assert_eq!(decoded, record);
//! println!("{}", decoded.describe());
//! # Ok(())
//! # }
//! ```

// Core types
pub mod core;

pub use crate::core::{ParcelError, Result};

// Decode options
pub mod config;

pub use config::DecodeOptions;

// Parcel wire primitives
pub mod parcel;

pub use parcel::{BinderRef, Parcelable, ParcelReader, ParcelWriter};

// Telecom records
pub mod telecom;

pub use telecom::{
    ComponentName, ConferenceRecord, Labels, PhoneAccountHandle, TelecomLabels, UserHandle,
    NO_CONNECTTIME,
};
