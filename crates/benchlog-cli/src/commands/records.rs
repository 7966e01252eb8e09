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

//! Records command - flat, annotated run records

use super::{load_store, write_output};
use crate::error::CliError;
use benchlog_core::{ParserConfig, RunRecord};
use clap::ValueEnum;
use serde::Serialize;

/// Output encoding for `records`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RecordFormat {
    /// Pretty-printed JSON array.
    #[default]
    Json,
    /// YAML sequence.
    Yaml,
    /// One row per run with the shared columns only.
    Csv,
}

/// A record reduced to scalar columns.
///
/// Summary metrics, components and input blocks have no fixed shape and are
/// left out of the tabular form.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    kind: &'a str,
    variant: String,
    threads: u32,
    throughput: f64,
    workload_mix: Option<u32>,
    initial_size: Option<u64>,
    expected_final_size: Option<u64>,
    schema_file: Option<&'a str>,
    close_to_max: Option<f64>,
}

impl<'a> From<&'a RunRecord> for CsvRow<'a> {
    fn from(record: &'a RunRecord) -> Self {
        Self {
            kind: record.kind().name(),
            variant: record.variant().to_string(),
            threads: record.threads(),
            throughput: record.throughput(),
            workload_mix: record.workload_mix(),
            initial_size: record.initial_size(),
            expected_final_size: record.expected_final_size(),
            schema_file: record.schema_file(),
            close_to_max: record.close_to_max(),
        }
    }
}

/// Serialize records in the requested format.
pub fn render_records(records: &[RunRecord], format: RecordFormat) -> Result<String, CliError> {
    match format {
        RecordFormat::Json => {
            let mut out = serde_json::to_string_pretty(records)?;
            out.push('\n');
            Ok(out)
        }
        RecordFormat::Yaml => Ok(serde_yaml::to_string(records)?),
        RecordFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            for record in records {
                writer.serialize(CsvRow::from(record))?;
            }
            let bytes = writer
                .into_inner()
                .map_err(|e| CliError::export(format!("CSV: {}", e)))?;
            String::from_utf8(bytes).map_err(|e| CliError::export(format!("CSV: {}", e)))
        }
    }
}

/// Parse `files`, annotate close-to-max and write every record.
///
/// # Errors
///
/// Returns `Err` if loading fails, serialization fails, or the output cannot
/// be written.
pub fn records(
    files: &[String],
    config: &ParserConfig,
    format: RecordFormat,
    output: Option<&str>,
) -> Result<(), CliError> {
    let mut store = load_store(files, config)?;
    store.annotate_close_to_max();
    let content = render_records(store.records(), format)?;
    write_output(&content, output)
}
