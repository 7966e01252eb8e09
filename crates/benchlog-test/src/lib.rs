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

//! Shared benchmark-log fixtures for benchlog tests.
//!
//! Provides canonical log texts, builders for synthesizing macro- and
//! micro-benchmark runs, and malformed samples for recovery testing. The
//! generated text matches what the benchmark binaries print, including the
//! chatter between markers that the parser must skip.
//!
//! # Quick Start
//!
//! ```rust
//! use benchlog_test::fixtures::builders::{MacroRunBuilder, MicroRunBuilder};
//! use benchlog_test::fixtures;
//!
//! // Canonical logs
//! let tpcc = fixtures::tpcc_log();
//! let micro = fixtures::micro_log();
//!
//! // Custom runs
//! let run = MacroRunBuilder::new("YCSB")
//!     .index_type("(a,b)-tree (RCU-HTM)")
//!     .threads(8)
//!     .component("MAIN_INDEX", 12.5)
//!     .throughput(3.25)
//!     .build();
//! assert!(run.contains("running 8 threads"));
//!
//! let run = MicroRunBuilder::new("bst-avl-bronson", "cg-htm")
//!     .threads(4)
//!     .throughput(42.0)
//!     .build();
//! assert!(run.contains("ds_name: bst-avl-bronson"));
//!
//! // Recovery samples
//! for (name, text) in fixtures::errors::malformed_runs() {
//!     assert!(!text.is_empty(), "{}", name);
//! }
//! ```

/// Canonical log fixtures.
pub mod fixtures;

pub use fixtures::builders::{MacroRunBuilder, MicroRunBuilder};

/// Concatenate run texts into one log.
pub fn concat<I, S>(runs: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    runs.into_iter().fold(String::new(), |mut log, run| {
        log.push_str(run.as_ref());
        log
    })
}
