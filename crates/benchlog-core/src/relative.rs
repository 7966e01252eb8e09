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

//! Close-to-max: each run's throughput relative to its configuration's best.
//!
//! Runs are grouped by [`ConfigKey`] (thread count, workload mix, initial
//! size). Within a group every run gets `throughput / max * 100`, so the best
//! run of each configuration scores exactly 100. Values depend on throughput
//! alone, which makes annotating twice the same as annotating once.

use crate::group::{ConfigKey, Groups};
use crate::record::RunRecord;

/// Annotate every record with its close-to-max percentage.
///
/// Records only carry positive throughputs, so every value lands in
/// `(0, 100]`.
///
/// ```rust
/// use benchlog_core::relative::annotate_close_to_max;
/// use benchlog_core::{BenchmarkKind, RunBuilder, RunRecord, Variant};
///
/// let run = |sig: &str, throughput: f64| -> RunRecord {
///     RunBuilder::new()
///         .kind(BenchmarkKind::Micro)
///         .variant(Variant::parse(sig))
///         .threads(4)
///         .throughput(throughput)
///         .workload_mix(50)
///         .initial_size(1000)
///         .expected_final_size(1000)
///         .build()
///         .unwrap()
/// };
/// let mut records = vec![run("a", 2.0), run("b", 8.0)];
/// annotate_close_to_max(&mut records);
///
/// assert_eq!(records[0].close_to_max(), Some(25.0));
/// assert_eq!(records[1].close_to_max(), Some(100.0));
/// ```
pub fn annotate_close_to_max(records: &mut [RunRecord]) {
    let updates: Vec<(usize, f64)> = {
        let groups = Groups::build(records.iter().enumerate(), |&(_, record)| {
            ConfigKey::of(record)
        });

        let mut updates = Vec::with_capacity(records.len());
        for (_, members) in groups.iter() {
            let max = members
                .iter()
                .map(|(_, record)| record.throughput())
                .fold(0.0_f64, f64::max);
            updates.extend(
                members
                    .iter()
                    .map(|(i, record)| (*i, close_to_max(record.throughput(), max))),
            );
        }
        updates
    };

    for (i, value) in updates {
        records[i].set_close_to_max(value);
    }
}

/// `throughput` as a percentage of `max`.
#[inline]
pub fn close_to_max(throughput: f64, max: f64) -> f64 {
    throughput / max * 100.0
}
