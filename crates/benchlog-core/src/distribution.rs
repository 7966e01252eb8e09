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

//! Close-to-max distributions.
//!
//! Where a leaderboard shows individual runs, a distribution shows how close
//! a whole population of runs came to the best of their configuration: per
//! variant, per thread count, or per workload mix. Each [`Distribution`]
//! reduces to a [`FiveNumberSummary`], the numbers behind a box plot.
//!
//! ```rust
//! use benchlog_core::distribution::Distribution;
//!
//! let d = Distribution::new("treap (cg-htm)", vec![40.0, 100.0, 70.0, 55.0]);
//! let s = d.summary().unwrap();
//! assert_eq!(s.min, 40.0);
//! assert_eq!(s.median, 62.5);
//! assert_eq!(s.max, 100.0);
//! assert_eq!(s.count, 4);
//! ```

use crate::group::Groups;
use crate::record::RunRecord;
use std::fmt;
use std::hash::Hash;

/// Close-to-max values of one group.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Distribution {
    pub label: String,
    pub values: Vec<f64>,
}

/// Minimum, quartiles, median and maximum of a sample.
///
/// Quartiles interpolate linearly between order statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FiveNumberSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub count: usize,
}

impl Distribution {
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }

    /// Summarize the values; `None` when there are none.
    pub fn summary(&self) -> Option<FiveNumberSummary> {
        let mut sorted: Vec<f64> = self
            .values
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .collect();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_by(f64::total_cmp);

        Some(FiveNumberSummary {
            min: sorted[0],
            q1: quantile(&sorted, 0.25),
            median: quantile(&sorted, 0.5),
            q3: quantile(&sorted, 0.75),
            max: sorted[sorted.len() - 1],
            count: sorted.len(),
        })
    }
}

/// Quantile `p` of a sorted, non-empty sample.
fn quantile(sorted: &[f64], p: f64) -> f64 {
    let pos = p * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Collect close-to-max values grouped by `key`, in ascending key order.
///
/// Records without a close-to-max annotation, records for which `key`
/// returns `None`, and (with a `filter`) records whose variant label does not
/// contain the filter text are skipped.
pub fn close_to_max_by<'a, I, K, F>(records: I, mut key: F, filter: Option<&str>) -> Vec<Distribution>
where
    I: IntoIterator<Item = &'a RunRecord>,
    K: Eq + Hash + Clone + Ord + fmt::Display,
    F: FnMut(&RunRecord) -> Option<K>,
{
    let keyed = records.into_iter().filter_map(|record| {
        let value = record.close_to_max()?;
        if let Some(needle) = filter {
            if !record.variant().label_contains(needle) {
                return None;
            }
        }
        Some((key(record)?, value))
    });

    Groups::build(keyed, |(k, _)| k.clone())
        .into_sorted()
        .into_iter()
        .map(|(k, members)| Distribution {
            label: k.to_string(),
            values: members.into_iter().map(|(_, v)| v).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::by_workload_mix;
    use crate::record::{BenchmarkKind, RunBuilder};
    use crate::relative::annotate_close_to_max;
    use crate::variant::Variant;

    fn micro(sig: &str, threads: u32, mix: u32, throughput: f64) -> RunRecord {
        RunBuilder::new()
            .kind(BenchmarkKind::Micro)
            .variant(Variant::parse(sig))
            .threads(threads)
            .throughput(throughput)
            .workload_mix(mix)
            .initial_size(1000)
            .expected_final_size(1000)
            .build()
            .unwrap()
    }

    fn annotated() -> Vec<RunRecord> {
        let mut records = vec![
            micro("a (rcu-htm)", 1, 50, 4.0),
            micro("b (cg-htm)", 1, 50, 2.0),
            micro("a (rcu-htm)", 2, 50, 1.0),
            micro("b (cg-htm)", 2, 50, 4.0),
            micro("c (rcu-htm)", 2, 90, 3.0),
        ];
        annotate_close_to_max(&mut records);
        records
    }

    // ==================== Summary tests ====================

    #[test]
    fn test_summary_single_value() {
        let s = Distribution::new("x", vec![42.0]).summary().unwrap();
        assert_eq!(s.min, 42.0);
        assert_eq!(s.q1, 42.0);
        assert_eq!(s.median, 42.0);
        assert_eq!(s.q3, 42.0);
        assert_eq!(s.max, 42.0);
        assert_eq!(s.count, 1);
    }

    #[test]
    fn test_summary_interpolates() {
        let s = Distribution::new("x", vec![5.0, 1.0, 3.0, 2.0, 4.0])
            .summary()
            .unwrap();
        assert_eq!((s.min, s.q1, s.median, s.q3, s.max), (1.0, 2.0, 3.0, 4.0, 5.0));

        let s = Distribution::new("x", vec![0.0, 10.0]).summary().unwrap();
        assert_eq!(s.q1, 2.5);
        assert_eq!(s.median, 5.0);
        assert_eq!(s.q3, 7.5);
    }

    #[test]
    fn test_summary_empty() {
        assert!(Distribution::new("x", Vec::new()).summary().is_none());
    }

    // ==================== Grouping tests ====================

    #[test]
    fn test_by_variant() {
        let records = annotated();
        let dists = close_to_max_by(&records, |r| Some(r.variant().clone()), None);
        let labels: Vec<&str> = dists.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, vec!["a (rcu-htm)", "b (cg-htm)", "c (rcu-htm)"]);
        assert_eq!(dists[0].values, vec![100.0, 25.0]);
        assert_eq!(dists[1].values, vec![50.0, 100.0]);
    }

    #[test]
    fn test_by_threads_with_filter() {
        let records = annotated();
        let dists = close_to_max_by(&records, |r| Some(r.threads()), Some("rcu-htm"));
        assert_eq!(dists.len(), 2);
        assert_eq!(dists[0].label, "1");
        assert_eq!(dists[0].values, vec![100.0]);
        assert_eq!(dists[1].label, "2");
        assert_eq!(dists[1].values, vec![25.0, 100.0]);
    }

    #[test]
    fn test_by_workload_sorted() {
        let records = annotated();
        let dists = close_to_max_by(&records, by_workload_mix, None);
        let labels: Vec<&str> = dists.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, vec!["50", "90"]);
    }

    #[test]
    fn test_unannotated_records_skipped() {
        let records = vec![micro("a", 1, 0, 1.0)];
        assert!(close_to_max_by(&records, |r| Some(r.threads()), None).is_empty());
    }
}
