// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Decode and describe commands - parcel bytes to a conference record.

use std::path::{Path, PathBuf};

use clap::Args;
use telecom_parcel::{ConferenceRecord, DecodeOptions};
use tracing::warn;

use crate::common::{load_options, read_parcel, Result};

/// Decode a conference parcel.
#[derive(Args, Clone, Debug)]
pub struct DecodeCmd {
    /// Parcel file (`-` for stdin)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Input is hex text rather than raw bytes
    #[arg(long)]
    hex: bool,

    /// Print the record as pretty JSON
    #[arg(long)]
    json: bool,

    /// TOML file with decode options
    #[arg(short, long, value_name = "TOML")]
    config: Option<PathBuf>,

    /// Fail on bytes after the record
    #[arg(long)]
    strict: bool,
}

impl DecodeCmd {
    pub fn run(self) -> Result<()> {
        let options = load_options(self.config.as_deref(), self.strict)?;
        let record = decode_file(&self.input, self.hex, &options)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&record)?);
        } else {
            println!("{}", record.describe());
        }
        Ok(())
    }
}

/// Print the one-line description of a conference parcel.
#[derive(Args, Clone, Debug)]
pub struct DescribeCmd {
    /// Parcel file (`-` for stdin)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Input is hex text rather than raw bytes
    #[arg(long)]
    hex: bool,
}

impl DescribeCmd {
    pub fn run(self) -> Result<()> {
        let record = decode_file(&self.input, self.hex, &DecodeOptions::default())?;
        println!("{record}");
        Ok(())
    }
}

fn decode_file(input: &Path, hex: bool, options: &DecodeOptions) -> Result<ConferenceRecord> {
    let bytes = read_parcel(input, hex)?;
    ConferenceRecord::from_bytes_with(&bytes, options).map_err(|e| {
        let fields: Vec<String> = e
            .log_fields()
            .into_iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect();
        warn!(input = %input.display(), details = %fields.join(" "), "decode failed");
        anyhow::Error::from(e)
    })
}
