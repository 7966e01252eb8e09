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

//! Analysis commands that print reports for people to read.

use crate::commands::{self, GroupBy};
use crate::error::CliError;
use benchlog_core::ParserConfig;
use clap::Subcommand;

/// Report commands.
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Rank runs within each benchmark and thread count
    ///
    /// Prints one `Bench <kind> threads <n>` block per group, best run first.
    /// Equal throughputs keep the order the runs appeared in.
    Leaderboard {
        /// Benchmark log files
        #[arg(value_name = "FILES", required = true)]
        files: Vec<String>,

        /// Rank by this component's throughput instead of the summary
        #[arg(short, long, value_name = "NAME")]
        component: Option<String>,
    },

    /// Best throughput at each thread count
    ///
    /// Prints a `best-<kind>` table per benchmark. With `--out-dir`, each
    /// table is also written as `<stem>.json`.
    Best {
        /// Benchmark log files
        #[arg(value_name = "FILES", required = true)]
        files: Vec<String>,

        /// Also chart every variant whose label contains this text
        #[arg(long, value_name = "TEXT")]
        highlight: Option<String>,

        /// Directory for chart JSON files
        #[arg(short, long, value_name = "DIR")]
        out_dir: Option<String>,
    },

    /// Distribution of close-to-max percentages
    ///
    /// Each run is compared against the best run sharing its thread count,
    /// workload mix and initial size.
    Closeness {
        /// Benchmark log files
        #[arg(value_name = "FILES", required = true)]
        files: Vec<String>,

        /// Field to group the distributions by
        #[arg(short, long, value_enum, default_value = "variant")]
        by: GroupBy,

        /// Only include variants whose label contains this text
        #[arg(short, long, value_name = "TEXT")]
        filter: Option<String>,
    },

    /// Run counts per benchmark, variant and thread count
    Summary {
        /// Benchmark log files
        #[arg(value_name = "FILES", required = true)]
        files: Vec<String>,
    },
}

impl ReportCommands {
    /// Execute the report command.
    pub fn execute(self, config: &ParserConfig) -> Result<(), CliError> {
        match self {
            ReportCommands::Leaderboard { files, component } => {
                commands::leaderboard(&files, config, component.as_deref())
            }
            ReportCommands::Best {
                files,
                highlight,
                out_dir,
            } => commands::best(&files, config, highlight.as_deref(), out_dir.as_deref()),
            ReportCommands::Closeness { files, by, filter } => {
                commands::closeness(&files, config, by, filter.as_deref())
            }
            ReportCommands::Summary { files } => commands::summary(&files, config),
        }
    }
}
