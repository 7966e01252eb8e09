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

//! Export commands.

use crate::commands::{self, RecordFormat};
use crate::error::CliError;
use benchlog_core::ParserConfig;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum ExportCommands {
    /// Dump every parsed run with its close-to-max annotation
    Records {
        /// Benchmark log files
        #[arg(value_name = "FILES", required = true)]
        files: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: RecordFormat,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

impl ExportCommands {
    /// Execute the export command.
    pub fn execute(self, config: &ParserConfig) -> Result<(), CliError> {
        match self {
            ExportCommands::Records {
                files,
                format,
                output,
            } => commands::records(&files, config, format, output.as_deref()),
        }
    }
}
