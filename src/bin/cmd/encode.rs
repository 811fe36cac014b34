// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Encode command - JSON conference record to parcel bytes.

use std::io::Write as _;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::Args;
use telecom_parcel::ConferenceRecord;
use tracing::debug;

use crate::common::{read_input, Result};

/// Encode a JSON conference record.
#[derive(Args, Clone, Debug)]
pub struct EncodeCmd {
    /// JSON record file (`-` for stdin)
    #[arg(value_name = "JSON")]
    input: PathBuf,

    /// Output file (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Write lowercase hex text instead of raw bytes
    #[arg(long)]
    hex: bool,
}

impl EncodeCmd {
    pub fn run(self) -> Result<()> {
        let json = read_input(&self.input)?;
        let record: ConferenceRecord =
            serde_json::from_slice(&json).context("invalid conference record JSON")?;
        debug!(record = %record, "encoding");

        let bytes = record.to_bytes()?;
        let payload = if self.hex {
            let mut text = hex::encode(&bytes).into_bytes();
            text.push(b'\n');
            text
        } else {
            bytes
        };

        match self.output {
            Some(path) => std::fs::write(&path, &payload)
                .with_context(|| format!("failed to write {}", path.display()))?,
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(&payload)?;
                stdout.flush()?;
            }
        }
        Ok(())
    }
}
