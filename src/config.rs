// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Decode options.
//!
//! Limits guard the allocations a hostile length prefix could trigger; the
//! parcel format itself puts no bound on them.
//!
//! Options can be built fluently or loaded from TOML:
//!
//! ```toml
//! max_string_len = 4096
//! max_list_len = 64
//! reject_trailing_bytes = true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{ParcelError, Result};

/// Default cap on a string's UTF-16 unit count.
pub const DEFAULT_MAX_STRING_LEN: usize = 1 << 20;

/// Default cap on a list's element count.
pub const DEFAULT_MAX_LIST_LEN: usize = 1 << 16;

/// Limits and strictness applied while decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DecodeOptions {
    /// Largest accepted string length, in UTF-16 units
    pub max_string_len: usize,
    /// Largest accepted list element count
    pub max_list_len: usize,
    /// Fail when bytes remain after an in-memory record
    pub reject_trailing_bytes: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_string_len: DEFAULT_MAX_STRING_LEN,
            max_list_len: DEFAULT_MAX_LIST_LEN,
            reject_trailing_bytes: false,
        }
    }
}

impl DecodeOptions {
    /// Create options with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the largest accepted string length.
    pub fn max_string_len(mut self, len: usize) -> Self {
        self.max_string_len = len;
        self
    }

    /// Set the largest accepted list element count.
    pub fn max_list_len(mut self, len: usize) -> Self {
        self.max_list_len = len;
        self
    }

    /// Fail on bytes left over after an in-memory record.
    pub fn reject_trailing_bytes(mut self, reject: bool) -> Self {
        self.reject_trailing_bytes = reject;
        self
    }

    /// Parse options from a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| ParcelError::invalid_config(e.to_string()))
    }

    /// Load options from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            ParcelError::invalid_config(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = DecodeOptions::default();
        assert_eq!(options.max_string_len, DEFAULT_MAX_STRING_LEN);
        assert_eq!(options.max_list_len, DEFAULT_MAX_LIST_LEN);
        assert!(!options.reject_trailing_bytes);
    }

    #[test]
    fn test_fluent_setters() {
        let options = DecodeOptions::new()
            .max_string_len(16)
            .max_list_len(4)
            .reject_trailing_bytes(true);
        assert_eq!(options.max_string_len, 16);
        assert_eq!(options.max_list_len, 4);
        assert!(options.reject_trailing_bytes);
    }

    #[test]
    fn test_from_toml_partial() {
        let options = DecodeOptions::from_toml_str("max_list_len = 8\n").unwrap();
        assert_eq!(options.max_list_len, 8);
        assert_eq!(options.max_string_len, DEFAULT_MAX_STRING_LEN);
    }

    #[test]
    fn test_from_toml_empty() {
        assert_eq!(
            DecodeOptions::from_toml_str("").unwrap(),
            DecodeOptions::default()
        );
    }

    #[test]
    fn test_from_toml_unknown_key() {
        let err = DecodeOptions::from_toml_str("max_frames = 3\n").unwrap_err();
        assert!(matches!(err, ParcelError::InvalidConfig { .. }));
    }

    #[test]
    fn test_from_toml_wrong_type() {
        let err = DecodeOptions::from_toml_str("reject_trailing_bytes = \"yes\"\n").unwrap_err();
        assert!(matches!(err, ParcelError::InvalidConfig { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = DecodeOptions::load("/nonexistent/telecom-parcel.toml").unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
