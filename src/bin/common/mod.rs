// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for CLI commands.

use std::io::{IsTerminal as _, Read as _};
use std::path::Path;

use anyhow::Context as _;
use telecom_parcel::DecodeOptions;
use tracing_subscriber::EnvFilter;

pub use anyhow::Result as CliResult;
pub type Result<T = ()> = CliResult<T>;

/// Path argument meaning standard input.
pub const STDIN_PATH: &str = "-";

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` selects debug level.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();
}

/// Read a whole file, or stdin for `-`.
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    if path.as_os_str() == STDIN_PATH {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Read parcel bytes, decoding hex text when `hex` is set.
pub fn read_parcel(path: &Path, hex: bool) -> Result<Vec<u8>> {
    let raw = read_input(path)?;
    if !hex {
        return Ok(raw);
    }
    decode_hex(&raw)
}

/// Decode hex text, ignoring whitespace.
pub fn decode_hex(text: &[u8]) -> Result<Vec<u8>> {
    let cleaned: Vec<u8> = text
        .iter()
        .copied()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    hex::decode(&cleaned).context("input is not valid hex")
}

/// Load decode options from an optional TOML file, applying `strict` on top.
pub fn load_options(config: Option<&Path>, strict: bool) -> Result<DecodeOptions> {
    let options = match config {
        Some(path) => DecodeOptions::load(path)?,
        None => DecodeOptions::default(),
    };
    Ok(if strict {
        options.reject_trailing_bytes(true)
    } else {
        options
    })
}
