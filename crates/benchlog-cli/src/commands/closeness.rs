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

//! Closeness command - close-to-max distributions

use super::{load_store, write_output};
use crate::error::CliError;
use benchlog_core::distribution::{close_to_max_by, Distribution};
use benchlog_core::{ParserConfig, RunRecord};
use clap::ValueEnum;

/// Field that partitions the distributions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GroupBy {
    /// Data-structure variant.
    Variant,
    /// Thread count.
    Threads,
    /// Lookup percentage; macro-benchmark runs have none and are skipped.
    Workload,
}

/// Annotated close-to-max distributions of `records`, keyed by `by`.
pub fn distributions(records: &[RunRecord], by: GroupBy, filter: Option<&str>) -> Vec<Distribution> {
    match by {
        GroupBy::Variant => close_to_max_by(records, |r| Some(r.variant().clone()), filter),
        GroupBy::Threads => close_to_max_by(records, |r| Some(r.threads()), filter),
        GroupBy::Workload => close_to_max_by(records, RunRecord::workload_mix, filter),
    }
}

pub fn render_distributions(distributions: &[Distribution]) -> String {
    let mut out = String::new();
    for dist in distributions {
        if let Some(s) = dist.summary() {
            out.push_str(&format!(
                "{}: min={:.2} q1={:.2} median={:.2} q3={:.2} max={:.2} (n={})\n",
                dist.label, s.min, s.q1, s.median, s.q3, s.max, s.count
            ));
        }
    }
    out
}

/// Print a five-number summary of close-to-max per group.
pub fn closeness(
    files: &[String],
    config: &ParserConfig,
    by: GroupBy,
    filter: Option<&str>,
) -> Result<(), CliError> {
    let mut store = load_store(files, config)?;
    store.annotate_close_to_max();
    let dists = distributions(store.records(), by, filter);
    write_output(&render_distributions(&dists), None)
}
