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

//! Summary command - run counts across the loaded logs

use super::load_store;
use crate::error::CliError;
use benchlog_core::group::{by_kind, by_threads, by_variant, group_by};
use benchlog_core::{ParserConfig, RecordStore};
use colored::Colorize;

/// Counts reported by `summary`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunCounts {
    pub sources: usize,
    pub runs: usize,
    pub dropped: usize,
    /// Benchmark kind to runs, first-seen order.
    pub per_kind: Vec<(String, usize)>,
    /// Variant label to runs, sorted by variant.
    pub per_variant: Vec<(String, usize)>,
    /// Thread count to runs, ascending.
    pub per_threads: Vec<(u32, usize)>,
}

impl RunCounts {
    pub fn of(store: &RecordStore) -> Self {
        let records = store.records();
        Self {
            sources: store.source_count(),
            runs: store.len(),
            dropped: store.diagnostics().len(),
            per_kind: group_by(records, by_kind)
                .iter()
                .map(|(kind, runs)| (kind.to_string(), runs.len()))
                .collect(),
            per_variant: group_by(records, by_variant)
                .into_sorted()
                .into_iter()
                .map(|(variant, runs)| (variant.to_string(), runs.len()))
                .collect(),
            per_threads: group_by(records, by_threads)
                .into_sorted()
                .into_iter()
                .map(|(threads, runs)| (threads, runs.len()))
                .collect(),
        }
    }
}

/// Print totals and per-variant, per-thread-count run counts.
pub fn summary(files: &[String], config: &ParserConfig) -> Result<(), CliError> {
    let store = load_store(files, config)?;
    let counts = RunCounts::of(&store);

    println!("{}", "═".repeat(80).bright_blue());
    println!("{}", "Benchmark Log Summary".bright_blue().bold());
    println!("{}", "═".repeat(80).bright_blue());
    println!(
        "  {} {}",
        "Sources:".bright_cyan(),
        counts.sources.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Runs:".green().bold(),
        counts.runs.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Dropped:".yellow().bold(),
        counts.dropped.to_string().bright_white()
    );

    println!();
    println!("{}", "Runs per benchmark:".bright_cyan().bold());
    for (kind, n) in &counts.per_kind {
        println!("  {:<40} {}", kind, n);
    }

    println!();
    println!("{}", "Runs per variant:".bright_cyan().bold());
    for (variant, n) in &counts.per_variant {
        println!("  {:<40} {}", variant, n);
    }

    println!();
    println!("{}", "Runs per thread count:".bright_cyan().bold());
    for (threads, n) in &counts.per_threads {
        println!("  {:<40} {}", threads, n);
    }

    if !store.diagnostics().is_empty() {
        println!();
        println!("{}", "Dropped runs:".yellow().bold());
        for diagnostic in store.diagnostics() {
            println!("  {} {}", "!".yellow(), diagnostic);
        }
    }
    println!("{}", "═".repeat(80).bright_blue());
    Ok(())
}
