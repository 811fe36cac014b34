// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! CLI subcommands.

mod decode;
mod encode;

pub use decode::{DecodeCmd, DescribeCmd};
pub use encode::EncodeCmd;
