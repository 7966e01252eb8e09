// Benchlog - Benchmark Log Analysis
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! CLI command definitions and argument parsing.
//!
//! Commands are split by what they produce:
//!
//! - [`report`]: human-readable analyses (leaderboard, best, closeness, summary)
//! - [`export`]: machine-readable record dumps (records)

mod export;
mod report;

use benchlog_core::ParserConfig;
use clap::Subcommand;

use crate::error::CliError;

pub use export::ExportCommands;
pub use report::ReportCommands;

/// Top-level CLI commands enum.
///
/// ```text
/// Commands
/// ├── Report (leaderboard, best, closeness, summary)
/// └── Export (records)
/// ```
#[derive(Subcommand)]
pub enum Commands {
    #[command(flatten)]
    Report(ReportCommands),

    #[command(flatten)]
    Export(ExportCommands),
}

impl Commands {
    /// Execute the command, parsing every input with `config`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if an input cannot be read, a run is malformed in strict
    /// mode, or output cannot be produced.
    pub fn execute(self, config: &ParserConfig) -> Result<(), CliError> {
        match self {
            Commands::Report(cmd) => cmd.execute(config),
            Commands::Export(cmd) => cmd.execute(config),
        }
    }
}
