// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Conference record and its parcel codec.
//!
//! A [`ConferenceRecord`] is the exported state of one conference: the
//! account it runs on, its call state and capabilities, the ids of the child
//! connections bridged into it, an optional video provider capability, and
//! the time it connected.
//!
//! ## Wire order
//!
//! 1. account (nullable parcelable)
//! 2. state (`i32`)
//! 3. capabilities (`i32`)
//! 4. connection ids (tagged string list)
//! 5. video provider (nullable strong binder)
//! 6. video state (`i32`)
//! 7. connect time in epoch milliseconds (`i64`)
//!
//! ## Example
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use telecom_parcel::telecom::{ConferenceRecord, NO_CONNECTTIME};
//!
//! let record = ConferenceRecord::new(
//!     None,
//!     4,
//!     0x41,
//!     vec!["conn1".to_string(), "conn2".to_string()],
//!     None,
//!     0,
//!     NO_CONNECTTIME,
//! );
//!
//! let mut bytes = Vec::new();
//! record.encode(&mut bytes)?;
//! let decoded = ConferenceRecord::decode(bytes.as_slice())?;
//! assert_eq!(decoded, record);
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::io::{Read, Write};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::account::PhoneAccountHandle;
use super::labels::{Labels, TelecomLabels};
use crate::config::DecodeOptions;
use crate::core::{ParcelError, Result};
use crate::parcel::{BinderRef, Parcelable, ParcelReader, ParcelWriter};

/// Connect time of a conference that has not connected, or whose connect
/// time is not known.
pub const NO_CONNECTTIME: i64 = 0;

fn no_connect_time() -> i64 {
    NO_CONNECTTIME
}

/// Exported state of a conference call.
///
/// Immutable once built: fields are private and only exposed through
/// accessors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConferenceRecord {
    #[serde(default)]
    account: Option<PhoneAccountHandle>,
    state: i32,
    capabilities: i32,
    #[serde(default)]
    connection_ids: Vec<String>,
    #[serde(default)]
    video_provider: Option<BinderRef>,
    #[serde(default)]
    video_state: i32,
    #[serde(default = "no_connect_time")]
    connect_time_millis: i64,
}

impl ConferenceRecord {
    /// Build a record. Pass [`NO_CONNECTTIME`] when the connect time is unknown.
    pub fn new(
        account: Option<PhoneAccountHandle>,
        state: i32,
        capabilities: i32,
        connection_ids: Vec<String>,
        video_provider: Option<BinderRef>,
        video_state: i32,
        connect_time_millis: i64,
    ) -> Self {
        Self {
            account,
            state,
            capabilities,
            connection_ids,
            video_provider,
            video_state,
            connect_time_millis,
        }
    }

    /// Account the conference runs on, if known.
    pub fn account(&self) -> Option<&PhoneAccountHandle> {
        self.account.as_ref()
    }

    /// Call state code.
    pub fn state(&self) -> i32 {
        self.state
    }

    /// Capability bitmask.
    pub fn capabilities(&self) -> i32 {
        self.capabilities
    }

    /// Ids of the child connections, in transmission order.
    pub fn connection_ids(&self) -> &[String] {
        &self.connection_ids
    }

    /// Video provider capability, if the conference has video.
    pub fn video_provider(&self) -> Option<&BinderRef> {
        self.video_provider.as_ref()
    }

    /// Video state code.
    pub fn video_state(&self) -> i32 {
        self.video_state
    }

    /// Connect time in epoch milliseconds, or [`NO_CONNECTTIME`].
    pub fn connect_time_millis(&self) -> i64 {
        self.connect_time_millis
    }

    /// Whether a connect time was supplied.
    pub fn has_connect_time(&self) -> bool {
        self.connect_time_millis != NO_CONNECTTIME
    }

    /// Encode this record to `sink` in wire order.
    ///
    /// Refuses, with [`ParcelError::OversizedValue`], any record that
    /// [`ConferenceRecord::decode`] would reject for its size; nothing is
    /// written in that case. Otherwise fails only if the sink does, with
    /// [`ParcelError::TransportFault`].
    pub fn encode<W: Write>(&self, sink: W) -> Result<()> {
        self.encode_with(sink, &DecodeOptions::default())
    }

    /// Encode this record so a reader using `options` accepts it.
    pub fn encode_with<W: Write>(&self, mut sink: W, options: &DecodeOptions) -> Result<()> {
        let mut writer = ParcelWriter::with_limits(Vec::new(), options);
        self.write_to_parcel(&mut writer)?;
        let bytes = writer.into_inner();

        sink.write_all(&bytes)?;
        sink.flush()?;
        debug!(
            bytes = bytes.len(),
            connections = self.connection_ids.len(),
            "conference record encoded"
        );
        Ok(())
    }

    /// Encode this record into a new buffer.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.encode(&mut bytes)?;
        Ok(bytes)
    }

    /// Decode a record from `source` with default options.
    ///
    /// Reads exactly one record; anything after it is left in the source.
    pub fn decode<R: Read>(source: R) -> Result<Self> {
        Self::decode_with(source, &DecodeOptions::default())
    }

    /// Decode a record from `source` with explicit options.
    pub fn decode_with<R: Read>(source: R, options: &DecodeOptions) -> Result<Self> {
        let mut reader = ParcelReader::with_options(source, options.clone());
        let record = Self::create_from_parcel(&mut reader)?;
        debug!(
            bytes = reader.position(),
            connections = record.connection_ids.len(),
            "conference record decoded"
        );
        Ok(record)
    }

    /// Decode a record held entirely in memory, with default options.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes_with(bytes, &DecodeOptions::default())
    }

    /// Decode a record held entirely in memory.
    ///
    /// With [`DecodeOptions::reject_trailing_bytes`] set, bytes left over after
    /// the record are a [`ParcelError::MalformedRecord`].
    pub fn from_bytes_with(bytes: &[u8], options: &DecodeOptions) -> Result<Self> {
        let mut reader = ParcelReader::with_options(bytes, options.clone());
        let record = Self::create_from_parcel(&mut reader)?;
        let position = reader.position();
        let trailing = reader.into_inner().len();
        if trailing > 0 {
            if options.reject_trailing_bytes {
                return Err(ParcelError::malformed(
                    position,
                    format!("{trailing} trailing bytes after record"),
                ));
            }
            debug!(trailing, "ignoring bytes after conference record");
        }
        Ok(record)
    }

    /// Render every field using the standard telecom labels.
    pub fn describe(&self) -> String {
        self.describe_with(&TelecomLabels)
    }

    /// Render every field, in declaration order, using `labels`.
    pub fn describe_with(&self, labels: &dyn Labels) -> String {
        let account = self
            .account
            .as_ref()
            .map_or_else(|| "null".to_string(), ToString::to_string);
        let video_provider = self
            .video_provider
            .as_ref()
            .map_or_else(|| "null".to_string(), ToString::to_string);

        format!(
            "account: {account}, state: {}, capabilities: {}, children: [{}], \
             VideoState: {}, VideoProvider: {video_provider}, connectTime: {}",
            labels.state_label(self.state),
            labels.capabilities_label(self.capabilities),
            self.connection_ids.join(", "),
            self.video_state,
            self.connect_time_millis,
        )
    }
}

impl fmt::Display for ConferenceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl Parcelable for ConferenceRecord {
    const CLASS_NAME: &'static str = "android.telecom.ParcelableConference";

    fn write_to_parcel<W: Write>(&self, dest: &mut ParcelWriter<W>) -> Result<()> {
        dest.write_parcelable(self.account.as_ref())
            .map_err(|e| e.in_field("account"))?;
        dest.write_i32(self.state)?;
        dest.write_i32(self.capabilities)?;
        dest.write_string_list(&self.connection_ids)
            .map_err(|e| e.in_field("connection_ids"))?;
        dest.write_binder(self.video_provider.as_ref())?;
        dest.write_i32(self.video_state)?;
        dest.write_i64(self.connect_time_millis)
    }

    fn create_from_parcel<R: Read>(source: &mut ParcelReader<R>) -> Result<Self> {
        let account = source
            .read_parcelable::<PhoneAccountHandle>()
            .map_err(|e| e.in_field("account"))?;
        let state = source.read_i32().map_err(|e| e.in_field("state"))?;
        let capabilities = source.read_i32().map_err(|e| e.in_field("capabilities"))?;
        let connection_ids = source
            .read_string_list()
            .map_err(|e| e.in_field("connection_ids"))?;
        let video_provider = source
            .read_binder()
            .map_err(|e| e.in_field("video_provider"))?;
        let video_state = source.read_i32().map_err(|e| e.in_field("video_state"))?;
        let connect_time_millis = source
            .read_i64()
            .map_err(|e| e.in_field("connect_time_millis"))?;

        Ok(Self {
            account,
            state,
            capabilities,
            connection_ids,
            video_provider,
            video_state,
            connect_time_millis,
        })
    }
}
