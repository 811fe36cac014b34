// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Telecom records carried over parcels.
//!
//! - [`conference`] - the conference record and its codec
//! - [`account`] - phone account handles
//! - [`labels`] - state/capability codes and their diagnostic labels

pub mod account;
pub mod conference;
pub mod labels;

pub use account::{ComponentName, PhoneAccountHandle, UserHandle};
pub use conference::{ConferenceRecord, NO_CONNECTTIME};
pub use labels::{Labels, TelecomLabels};
