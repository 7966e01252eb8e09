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

//! Benchlog CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **records**: every parsed run, annotated with close-to-max, as JSON,
//!   YAML or CSV
//! - **leaderboard**: runs ranked within each benchmark and thread count
//! - **best**: best throughput per thread count, optionally written as chart
//!   JSON files
//! - **closeness**: five-number summaries of close-to-max per variant,
//!   thread count or workload mix
//! - **summary**: run counts and dropped runs
//!
//! All commands take any number of log files. Each file is parsed
//! independently, and records keep the order of the files on the command
//! line. Malformed runs are skipped with a warning unless `--strict` is set.
//!
//! # Examples
//!
//! ```no_run
//! use benchlog_cli::commands::{leaderboard, records, RecordFormat};
//! use benchlog_core::ParserConfig;
//!
//! # fn main() -> Result<(), benchlog_cli::error::CliError> {
//! let files = vec!["tpcc.log".to_string()];
//! let config = ParserConfig::default();
//!
//! leaderboard(&files, &config, None)?;
//! records(&files, &config, RecordFormat::Csv, Some("runs.csv"))?;
//! # Ok(())
//! # }
//! ```
//!
//! # Environment
//!
//! - `BENCHLOG_MAX_FILE_SIZE`: largest accepted input in bytes (default 1 GB)
//! - `RUST_LOG`: tracing filter, combined with `-v`

pub mod cli;
pub mod commands;
pub mod error;
