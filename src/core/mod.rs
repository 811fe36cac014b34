// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout telecom-parcel.
//!
//! - [`ParcelError`] - error taxonomy for encode/decode
//! - [`Result`] - crate-wide result alias

pub mod error;

pub use error::{ParcelError, Result};
