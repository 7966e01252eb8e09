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

//! Malformed runs for recovery testing.
//!
//! Every sample contains exactly one defective run followed by one good
//! run, so a recovering parser yields one record and one diagnostic.

use super::builders::{MacroRunBuilder, MicroRunBuilder};

/// Throughput of the good run that follows each defect.
pub const RECOVERY_THROUGHPUT: f64 = 7.0;

fn good_run() -> String {
    MacroRunBuilder::new("YCSB")
        .threads(2)
        .throughput(RECOVERY_THROUGHPUT)
        .build()
}

/// (name, log text) pairs, each with one defective run then one good run.
pub fn malformed_runs() -> Vec<(&'static str, String)> {
    let samples = vec![
        (
            "unterminated_run",
            MacroRunBuilder::new("YCSB").unterminated().build(),
        ),
        (
            "non_numeric_threads",
            MacroRunBuilder::new("YCSB").threads_text("many").build(),
        ),
        (
            "missing_throughput",
            MacroRunBuilder::new("TPCC").no_throughput().build(),
        ),
        (
            "missing_variant",
            MacroRunBuilder::new("TPCC").no_index_type().build(),
        ),
        (
            "component_without_index",
            MacroRunBuilder::new("YCSB")
                .build()
                .replace("WARMUP finished!\n", "WARMUP finished!\nPer-index stats: throughput=1.0\n"),
        ),
        (
            "summary_pair_without_equals",
            MacroRunBuilder::new("YCSB")
                .build()
                .replace("abort_cnt=12", "abort_cnt"),
        ),
        (
            "non_numeric_lookup_frac",
            MicroRunBuilder::new("treap", "cg-htm")
                .lookup_frac_text("half")
                .build(),
        ),
        (
            "non_numeric_micro_throughput",
            MicroRunBuilder::new("treap", "cg-htm")
                .build()
                .replace("Throughput(Ops/usec):   1.000", "Throughput(Ops/usec): -nan"),
        ),
    ];

    samples
        .into_iter()
        .map(|(name, bad)| (name, format!("{}{}", bad, good_run())))
        .collect()
}

/// Text that contains no runs at all.
pub fn noise_samples() -> Vec<(&'static str, &'static str)> {
    vec![
        ("empty", ""),
        ("whitespace_only", "   \n\t\n\n"),
        ("banner_only", "Benchmark\n=======================\n"),
        ("orphan_summary", "[summary] throughput=1.0\n"),
        ("orphan_terminator", "Expected size of MAP: 10\n"),
        ("fields_without_start", "running 4 threads\nRunning YCSB workload\n"),
    ]
}
