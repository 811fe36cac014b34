// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # telecom-parcel CLI
//!
//! Encode, decode and describe conference parcels.
//!
//! ## Usage
//!
//! ```sh
//! # JSON record to raw parcel bytes
//! telecom-parcel encode conference.json -o conference.parcel
//!
//! # JSON record to hex on stdout
//! telecom-parcel encode conference.json --hex
//!
//! # Decode a parcel and print it as JSON
//! telecom-parcel decode conference.parcel --json
//!
//! # One-line description of a hex dump
//! telecom-parcel describe dump.hex --hex
//! ```

mod cmd;
mod common;

use std::process;

use clap::{Parser, Subcommand};
use cmd::{DecodeCmd, DescribeCmd, EncodeCmd};
use common::Result;

/// telecom-parcel - conference parcel toolkit
///
/// Convert conference records between JSON and their fixed-order parcel
/// encoding.
#[derive(Parser, Clone)]
#[command(name = "telecom-parcel")]
#[command(about = "Conference parcel codec toolkit", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "ArcheBase")]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Clone)]
enum Commands {
    /// Encode a JSON conference record into parcel bytes
    Encode(EncodeCmd),

    /// Decode parcel bytes into a conference record
    Decode(DecodeCmd),

    /// Print the one-line description of a parcel
    Describe(DescribeCmd),
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    common::init_logging(cli.verbose);

    match cli.command {
        Commands::Encode(cmd) => cmd.run(),
        Commands::Decode(cmd) => cmd.run(),
        Commands::Describe(cmd) => cmd.run(),
    }
}

fn main() {
    let result = run();

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
