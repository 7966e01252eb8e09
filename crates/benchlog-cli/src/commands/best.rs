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

//! Best command - best throughput per thread count

use super::{load_store, write_output};
use crate::error::CliError;
use benchlog_core::group::{by_kind, group_by};
use benchlog_core::rank::best_chart;
use benchlog_core::{Chart, ChartSink, ParserConfig, RecordStore};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes each chart as pretty JSON to `<dir>/<stem>.json`.
#[derive(Debug)]
pub struct JsonChartSink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl JsonChartSink {
    /// Create a sink writing into `dir`, creating it if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, CliError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| CliError::io_error(&dir, e))?;
        Ok(Self {
            dir,
            written: Vec::new(),
        })
    }

    /// Files written so far, in render order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ChartSink for JsonChartSink {
    type Error = CliError;

    fn render(&mut self, chart: &Chart) -> Result<(), Self::Error> {
        let path = self.dir.join(format!("{}.json", chart.file_stem()));
        let json = serde_json::to_string_pretty(chart)?;
        fs::write(&path, json).map_err(|e| CliError::io_error(&path, e))?;
        debug!("Wrote chart {}", path.display());
        self.written.push(path);
        Ok(())
    }
}

/// Render a chart as a text table: one block per series, one line per
/// thread count.
pub fn render_chart(chart: &Chart) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", chart.title));
    for series in &chart.series {
        out.push_str(&format!("  {}\n", series.label()));
        for (threads, throughput) in series.points() {
            out.push_str(&format!("    {:>4} threads: {:.3}\n", threads, throughput));
        }
    }
    out
}

/// One `best-<kind>` chart per benchmark kind, in first-seen order.
pub fn charts(store: &RecordStore, highlight: Option<&str>) -> Vec<Chart> {
    let records = store.records();
    group_by(records, by_kind)
        .keys()
        .iter()
        .map(|kind| best_chart(records, kind, highlight))
        .collect()
}

/// Print best-per-thread-count tables, optionally also writing each chart
/// to `out_dir`.
pub fn best(
    files: &[String],
    config: &ParserConfig,
    highlight: Option<&str>,
    out_dir: Option<&str>,
) -> Result<(), CliError> {
    let store = load_store(files, config)?;
    let charts = charts(&store, highlight);

    let mut sink = out_dir.map(JsonChartSink::new).transpose()?;
    let mut text = String::new();
    for chart in &charts {
        text.push_str(&render_chart(chart));
        if let Some(sink) = sink.as_mut() {
            sink.render(chart)?;
        }
    }
    write_output(&text, None)
}
