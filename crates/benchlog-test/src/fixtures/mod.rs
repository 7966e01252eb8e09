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

//! Canonical benchmark logs.
//!
//! - **builders**: fluent generators for single runs
//! - **errors**: malformed runs for recovery testing
//!
//! The canonical logs below are small but realistic: several variants at
//! several thread counts, with the same configuration repeated so that
//! ranking and close-to-max have something to compare.

pub mod builders;
pub mod errors;

use builders::{MacroRunBuilder, MicroRunBuilder};

/// Type alias for a list of fixture functions (name, generator).
pub type FixtureList = Vec<(&'static str, fn() -> String)>;

/// Variant signatures used by the canonical macro-benchmark logs.
pub const MACRO_VARIANTS: [&str; 3] = [
    "BST Unbalanced External (cg-htm)",
    "(a,b)-tree (RCU-HTM)",
    "(a-b)-tree Brown (LLX/SCX)",
];

/// Thread counts used by the canonical logs.
pub const THREAD_COUNTS: [u32; 3] = [1, 4, 16];

/// Returns all fixture functions for iteration.
pub fn all() -> FixtureList {
    vec![
        ("tpcc", tpcc_log),
        ("ycsb", ycsb_log),
        ("micro", micro_log),
    ]
}

/// TPC-C runs: every variant at every thread count.
///
/// Throughput grows with the thread count and with the variant's position
/// in [`MACRO_VARIANTS`], so the last variant is always best.
pub fn tpcc_log() -> String {
    macro_log("TPCC", "DISTRICT_IDX")
}

/// YCSB runs, laid out like [`tpcc_log`].
pub fn ycsb_log() -> String {
    macro_log("YCSB", "MAIN_INDEX")
}

fn macro_log(bench: &str, index: &str) -> String {
    let mut log = String::new();
    for &threads in &THREAD_COUNTS {
        for (i, sig) in MACRO_VARIANTS.iter().enumerate() {
            let throughput = f64::from(threads) * (i as f64 + 1.0);
            log.push_str(
                &MacroRunBuilder::new(bench)
                    .index_type(*sig)
                    .threads(threads)
                    .component(index, throughput * 2.0)
                    .throughput(throughput)
                    .build(),
            );
        }
    }
    log
}

/// Micro-benchmark runs of two variants over two workload mixes.
///
/// At every configuration `bst-avl-bronson (cg-htm)` reaches 8.0 ops/usec
/// and `treap (rcu-htm)` 2.0.
pub fn micro_log() -> String {
    let mut log = String::new();
    for &threads in &THREAD_COUNTS {
        for mix in [50, 90] {
            for (ds, sync, throughput) in [("bst-avl-bronson", "cg-htm", 8.0), ("treap", "rcu-htm", 2.0)] {
                log.push_str(
                    &MicroRunBuilder::new(ds, sync)
                        .threads(threads)
                        .lookup_frac(mix)
                        .throughput(throughput)
                        .build(),
                );
            }
        }
    }
    log
}
