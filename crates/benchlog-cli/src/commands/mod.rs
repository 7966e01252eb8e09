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

//! CLI command implementations

mod best;
mod closeness;
mod leaderboard;
mod records;
mod summary;

pub use best::{best, charts, render_chart, JsonChartSink};
pub use closeness::{closeness, distributions, render_distributions, GroupBy};
pub use leaderboard::{leaderboard, render_leaderboards};
pub use records::{records, render_records, RecordFormat};
pub use summary::{summary, RunCounts};

use crate::error::CliError;
use benchlog_core::{ParserConfig, RecordStore};
use std::fs;
use std::io::{self, Write};
use tracing::info;

/// Default maximum input size (1 GB).
/// Can be overridden via the BENCHLOG_MAX_FILE_SIZE environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Environment variable overriding [`DEFAULT_MAX_FILE_SIZE`].
pub const MAX_FILE_SIZE_VAR: &str = "BENCHLOG_MAX_FILE_SIZE";

/// Maximum input size from the environment, or the default when unset or
/// not a number.
fn get_max_file_size() -> u64 {
    std::env::var(MAX_FILE_SIZE_VAR)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a log file from disk with size validation.
///
/// The size is checked against the metadata before anything is read, so an
/// oversized file never gets allocated. Invalid UTF-8 is replaced rather
/// than rejected; benchmark logs occasionally carry stray bytes from
/// interleaved program output.
///
/// # Errors
///
/// Returns `Err` if the metadata cannot be read, the file is larger than
/// the configured limit, or reading fails.
pub fn read_file(path: &str) -> Result<String, CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    let max_file_size = get_max_file_size();
    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_file_size));
    }

    let bytes = fs::read(path).map_err(|e| CliError::io_error(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Write content to a file or stdout.
///
/// # Errors
///
/// Returns `Err` if the file cannot be written or stdout is closed.
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("<stdout>", e)),
    }
}

/// Parse every file into one store, in argument order.
///
/// Dropped runs stay in the store as diagnostics; the core has already
/// logged each one. In strict mode the first defect aborts the whole load.
pub fn load_store(files: &[String], config: &ParserConfig) -> Result<RecordStore, CliError> {
    if files.is_empty() {
        return Err(CliError::invalid_input("no input files"));
    }

    let mut store = RecordStore::with_config(config.clone());
    for path in files {
        let content = read_file(path)?;
        store
            .ingest_str(path, &content)
            .map_err(|e| CliError::parse(path, &e))?;
    }

    info!(
        "Loaded {} runs from {} files ({} dropped)",
        store.len(),
        store.source_count(),
        store.diagnostics().len()
    );
    Ok(store)
}
