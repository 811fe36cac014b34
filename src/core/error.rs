// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for telecom-parcel.
//!
//! Provides error types for parcel I/O operations:
//! - Malformed or truncated records on decode
//! - Values too large for a reader's limits on encode
//! - Transport faults from the underlying sink or source
//! - Configuration parsing

use std::io;

use thiserror::Error;

/// Errors that can occur while encoding or decoding a parcel.
#[derive(Debug, Error)]
pub enum ParcelError {
    /// The byte stream does not hold a well-formed record.
    ///
    /// Covers truncation mid-field, length prefixes inconsistent with the
    /// remaining bytes, unexpected value tags, class names or binder types.
    #[error("Malformed record at byte {position} (field '{field}'): {reason}")]
    MalformedRecord {
        /// Record field being decoded, empty when raised below field level
        field: String,
        /// Byte offset from the start of the parcel
        position: u64,
        /// What was wrong
        reason: String,
    },

    /// A string or list is longer than a reader will accept.
    ///
    /// Raised on encode, before anything reaches the sink.
    #[error("Value too large to encode (field '{field}'): {reason}")]
    OversizedValue {
        /// Record field being encoded, empty when raised below field level
        field: String,
        /// What exceeded which limit
        reason: String,
    },

    /// I/O failure of the underlying sink or source.
    #[error("Transport fault: {0}")]
    TransportFault(#[source] io::Error),

    /// Decode options could not be loaded.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Error message
        message: String,
    },
}

impl ParcelError {
    /// Create a malformed record error not yet attributed to a field.
    pub fn malformed(position: u64, reason: impl Into<String>) -> Self {
        ParcelError::MalformedRecord {
            field: String::new(),
            position,
            reason: reason.into(),
        }
    }

    /// Create an oversized value error not yet attributed to a field.
    pub fn oversized(reason: impl Into<String>) -> Self {
        ParcelError::OversizedValue {
            field: String::new(),
            reason: reason.into(),
        }
    }

    /// Create a truncation error for a read that ran out of bytes.
    pub fn truncated(requested: usize, position: u64) -> Self {
        Self::malformed(
            position,
            format!("stream truncated, needed {requested} more bytes"),
        )
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        ParcelError::InvalidConfig {
            message: message.into(),
        }
    }

    /// Map an I/O error from a read of `requested` bytes at `position`.
    ///
    /// End of stream means the record is truncated; anything else belongs to
    /// the transport.
    pub fn from_read(err: io::Error, requested: usize, position: u64) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            Self::truncated(requested, position)
        } else {
            ParcelError::TransportFault(err)
        }
    }

    /// Attribute a malformed or oversized error to `field` if it has no field yet.
    pub fn in_field(self, name: &str) -> Self {
        match self {
            ParcelError::MalformedRecord {
                field,
                position,
                reason,
            } if field.is_empty() => ParcelError::MalformedRecord {
                field: name.to_string(),
                position,
                reason,
            },
            ParcelError::OversizedValue { field, reason } if field.is_empty() => {
                ParcelError::OversizedValue {
                    field: name.to_string(),
                    reason,
                }
            }
            other => other,
        }
    }

    /// Whether this is a decode-time format error.
    pub fn is_malformed(&self) -> bool {
        matches!(self, ParcelError::MalformedRecord { .. })
    }

    /// Whether this is an encode-time size error.
    pub fn is_oversized(&self) -> bool {
        matches!(self, ParcelError::OversizedValue { .. })
    }

    /// Whether this is a transport fault.
    pub fn is_transport_fault(&self) -> bool {
        matches!(self, ParcelError::TransportFault(_))
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            ParcelError::MalformedRecord {
                field,
                position,
                reason,
            } => vec![
                ("field", field.clone()),
                ("position", position.to_string()),
                ("reason", reason.clone()),
            ],
            ParcelError::OversizedValue { field, reason } => vec![
                ("field", field.clone()),
                ("reason", reason.clone()),
            ],
            ParcelError::TransportFault(err) => vec![
                ("kind", format!("{:?}", err.kind())),
                ("message", err.to_string()),
            ],
            ParcelError::InvalidConfig { message } => vec![("message", message.clone())],
        }
    }
}

impl From<io::Error> for ParcelError {
    fn from(err: io::Error) -> Self {
        ParcelError::TransportFault(err)
    }
}

/// Result type for telecom-parcel operations.
pub type Result<T> = std::result::Result<T, ParcelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_error() {
        let err = ParcelError::malformed(12, "bad tag");
        assert!(err.is_malformed());
        assert_eq!(
            err.to_string(),
            "Malformed record at byte 12 (field ''): bad tag"
        );
    }

    #[test]
    fn test_truncated_error() {
        let err = ParcelError::truncated(4, 8);
        assert!(err.is_malformed());
        assert_eq!(
            err.to_string(),
            "Malformed record at byte 8 (field ''): stream truncated, needed 4 more bytes"
        );
    }

    #[test]
    fn test_in_field_sets_empty_field() {
        let err = ParcelError::truncated(4, 8).in_field("state");
        match err {
            ParcelError::MalformedRecord { field, .. } => assert_eq!(field, "state"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_in_field_keeps_inner_field() {
        let err = ParcelError::truncated(4, 8)
            .in_field("account.id")
            .in_field("account");
        match err {
            ParcelError::MalformedRecord { field, .. } => assert_eq!(field, "account.id"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_in_field_ignores_transport_fault() {
        let err = ParcelError::TransportFault(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
            .in_field("state");
        assert!(err.is_transport_fault());
    }

    #[test]
    fn test_oversized_error() {
        let err = ParcelError::oversized("list count 9 exceeds limit 8").in_field("connection_ids");
        assert!(err.is_oversized());
        assert!(!err.is_malformed());
        assert_eq!(
            err.to_string(),
            "Value too large to encode (field 'connection_ids'): list count 9 exceeds limit 8"
        );
        assert_eq!(err.log_fields()[0], ("field", "connection_ids".to_string()));
    }

    #[test]
    fn test_from_read_eof_is_malformed() {
        let io_err = io::Error::new(io::ErrorKind::UnexpectedEof, "eof");
        let err = ParcelError::from_read(io_err, 8, 20);
        assert!(err.is_malformed());
    }

    #[test]
    fn test_from_read_other_is_transport_fault() {
        let io_err = io::Error::new(io::ErrorKind::ConnectionReset, "reset");
        let err = ParcelError::from_read(io_err, 8, 20);
        assert!(err.is_transport_fault());
        assert_eq!(err.to_string(), "Transport fault: reset");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let err: ParcelError = io_err.into();
        assert!(err.is_transport_fault());
    }

    #[test]
    fn test_invalid_config_error() {
        let err = ParcelError::invalid_config("unknown key");
        assert_eq!(err.to_string(), "Invalid configuration: unknown key");
    }

    #[test]
    fn test_log_fields_malformed() {
        let err = ParcelError::malformed(40, "reason").in_field("video_state");
        let fields = err.log_fields();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0], ("field", "video_state".to_string()));
        assert_eq!(fields[1], ("position", "40".to_string()));
        assert_eq!(fields[2], ("reason", "reason".to_string()));
    }

    #[test]
    fn test_log_fields_transport_fault() {
        let err = ParcelError::TransportFault(io::Error::new(io::ErrorKind::BrokenPipe, "x"));
        let fields = err.log_fields();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0], ("kind", "BrokenPipe".to_string()));
        assert_eq!(fields[1], ("message", "x".to_string()));
    }

    #[test]
    fn test_log_fields_invalid_config() {
        let err = ParcelError::invalid_config("msg");
        let fields = err.log_fields();
        assert_eq!(fields, vec![("message", "msg".to_string())]);
    }
}
