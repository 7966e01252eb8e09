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

//! Ranking runs by throughput.
//!
//! [`rank`] orders a group by a [`RankMetric`], highest first. The sort is
//! stable: runs with equal values keep their input order, so the first run
//! seen wins a tie. Everything else in this module is built on it:
//!
//! - [`leaderboards`]: per benchmark kind and thread count, every run in rank
//!   order.
//! - [`best_per_thread_count`]: the best throughput at each thread count.
//! - [`variant_series`]: the same, restricted to one variant.
//! - [`best_chart`]: both of the above combined into a [`Chart`].
//!
//! # Examples
//!
//! ```rust
//! use benchlog_core::rank::{best, rank, RankMetric};
//! use benchlog_core::{BenchmarkKind, RunBuilder, RunRecord, Variant};
//!
//! let run = |sig: &str, throughput: f64| -> RunRecord {
//!     RunBuilder::new()
//!         .kind(BenchmarkKind::Tpcc)
//!         .variant(Variant::parse(sig))
//!         .threads(4)
//!         .throughput(throughput)
//!         .build()
//!         .unwrap()
//! };
//! let records = vec![run("X", 3.0), run("Y", 7.0), run("Z", 5.0)];
//!
//! let order: Vec<&str> = rank(&records, &RankMetric::Throughput)
//!     .iter()
//!     .map(|r| r.variant().base())
//!     .collect();
//! assert_eq!(order, vec!["Y", "Z", "X"]);
//! assert_eq!(best(&records, &RankMetric::Throughput).unwrap().throughput(), 7.0);
//! ```

use crate::group::{by_kind, by_threads, by_variant, group_by};
use crate::record::{BenchmarkKind, RunRecord};
use crate::series::{Chart, Series};
use crate::variant::Variant;
use std::cmp::Ordering;
use std::fmt;

/// Label of the best-per-thread-count series.
pub const BEST_LABEL: &str = "best";

/// What to rank runs by.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RankMetric {
    /// The run's summary throughput.
    #[default]
    Throughput,
    /// The throughput of a named component. Runs without it rank last.
    Component(String),
}

impl RankMetric {
    /// The value `record` is ranked by, if it has one.
    pub fn value(&self, record: &RunRecord) -> Option<f64> {
        match self {
            Self::Throughput => Some(record.throughput()),
            Self::Component(name) => record
                .component_throughput(name)
                .filter(|v| v.is_finite()),
        }
    }
}

impl fmt::Display for RankMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Throughput => f.write_str("throughput"),
            Self::Component(name) => write!(f, "{} throughput", name),
        }
    }
}

/// Descending by value; runs without a value last.
fn descending(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Order `group` by `metric`, highest first.
///
/// Ties keep their input order.
pub fn rank<'a, I>(group: I, metric: &RankMetric) -> Vec<&'a RunRecord>
where
    I: IntoIterator<Item = &'a RunRecord>,
{
    let mut keyed: Vec<(Option<f64>, &'a RunRecord)> = group
        .into_iter()
        .map(|record| (metric.value(record), record))
        .collect();
    keyed.sort_by(|a, b| descending(a.0, b.0));
    keyed.into_iter().map(|(_, record)| record).collect()
}

/// The top-ranked run, or `None` for an empty group.
pub fn best<'a, I>(group: I, metric: &RankMetric) -> Option<&'a RunRecord>
where
    I: IntoIterator<Item = &'a RunRecord>,
{
    rank(group, metric).into_iter().next()
}

/// One line of a leaderboard.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LeaderboardEntry {
    /// Zero-based position.
    pub rank: usize,
    pub variant: Variant,
    /// Summary throughput of the run.
    pub throughput: f64,
    /// The value the run was ranked by; `None` if it lacked it.
    pub value: Option<f64>,
}

/// Every run of one benchmark kind at one thread count, in rank order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Leaderboard {
    pub kind: BenchmarkKind,
    pub threads: u32,
    pub entries: Vec<LeaderboardEntry>,
}

/// Build leaderboards for `records`.
///
/// Kinds appear in first-seen order and thread counts ascend within a kind.
pub fn leaderboards<'a, I>(records: I, metric: &RankMetric) -> Vec<Leaderboard>
where
    I: IntoIterator<Item = &'a RunRecord>,
{
    let mut boards = Vec::new();
    for (kind, runs) in group_by(records, by_kind) {
        for (threads, group) in group_by(runs, by_threads).into_sorted() {
            let entries = rank(group, metric)
                .into_iter()
                .enumerate()
                .map(|(rank, record)| LeaderboardEntry {
                    rank,
                    variant: record.variant().clone(),
                    throughput: record.throughput(),
                    value: metric.value(record),
                })
                .collect();
            boards.push(Leaderboard {
                kind: kind.clone(),
                threads,
                entries,
            });
        }
    }
    boards
}

/// Best summary throughput at each thread count, ascending, labelled `best`.
pub fn best_per_thread_count<'a, I>(records: I) -> Series
where
    I: IntoIterator<Item = &'a RunRecord>,
{
    let mut series = Series::new(BEST_LABEL);
    push_best_points(&mut series, records);
    series
}

/// Best throughput of one variant at each thread count, ascending.
///
/// Labelled with the variant's display form.
pub fn variant_series<'a, I>(records: I, variant: &Variant) -> Series
where
    I: IntoIterator<Item = &'a RunRecord>,
{
    let mut series = Series::new(variant.to_string());
    push_best_points(
        &mut series,
        records.into_iter().filter(|r| r.variant() == variant),
    );
    series
}

fn push_best_points<'a, I>(series: &mut Series, records: I)
where
    I: IntoIterator<Item = &'a RunRecord>,
{
    for (threads, group) in group_by(records, by_threads).into_sorted() {
        if let Some(top) = best(group, &RankMetric::Throughput) {
            series.push(threads, top.throughput());
        }
    }
}

/// The `best-<kind>` chart.
///
/// Holds the `best` series followed by one series per variant (first-seen
/// order) whose display label contains `highlight`. Without a highlight only
/// the `best` series is included.
pub fn best_chart(records: &[RunRecord], kind: &BenchmarkKind, highlight: Option<&str>) -> Chart {
    let runs: Vec<&RunRecord> = records.iter().filter(|r| r.kind() == kind).collect();

    let mut chart = Chart::new(format!("best-{}", kind));
    chart.push(best_per_thread_count(runs.iter().copied()));

    if let Some(needle) = highlight {
        for variant in group_by(runs.iter().copied(), by_variant).keys() {
            if variant.label_contains(needle) {
                chart.push(variant_series(runs.iter().copied(), variant));
            }
        }
    }
    chart
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{MetricValue, Metrics, RunBuilder};

    fn run(kind: BenchmarkKind, sig: &str, threads: u32, throughput: f64) -> RunRecord {
        RunBuilder::new()
            .kind(kind)
            .variant(Variant::parse(sig))
            .threads(threads)
            .throughput(throughput)
            .build()
            .unwrap()
    }

    fn with_component(sig: &str, component: Option<f64>) -> RunRecord {
        let mut builder = RunBuilder::new();
        builder
            .kind(BenchmarkKind::Ycsb)
            .variant(Variant::parse(sig))
            .threads(1)
            .throughput(1.0);
        if let Some(t) = component {
            let mut m = Metrics::new();
            m.insert("index".into(), MetricValue::parse("MAIN"));
            m.insert("throughput".into(), MetricValue::Number(t));
            builder.component("MAIN", m);
        }
        builder.build().unwrap()
    }

    fn bases(records: &[&RunRecord]) -> Vec<String> {
        records.iter().map(|r| r.variant().base().to_string()).collect()
    }

    // ==================== rank / best ====================

    #[test]
    fn test_rank_descending() {
        let records = vec![
            run(BenchmarkKind::Tpcc, "X", 4, 3.0),
            run(BenchmarkKind::Tpcc, "Y", 4, 7.0),
            run(BenchmarkKind::Tpcc, "Z", 4, 5.0),
        ];
        let ranked = rank(&records, &RankMetric::Throughput);
        assert_eq!(bases(&ranked), vec!["Y", "Z", "X"]);
        assert_eq!(
            best(&records, &RankMetric::default()).unwrap().variant().base(),
            "Y"
        );
    }

    #[test]
    fn test_rank_ties_keep_input_order() {
        let records = vec![
            run(BenchmarkKind::Tpcc, "A", 1, 5.0),
            run(BenchmarkKind::Tpcc, "B", 1, 9.0),
            run(BenchmarkKind::Tpcc, "C", 1, 5.0),
            run(BenchmarkKind::Tpcc, "D", 1, 9.0),
        ];
        let ranked = rank(&records, &RankMetric::Throughput);
        assert_eq!(bases(&ranked), vec!["B", "D", "A", "C"]);
    }

    #[test]
    fn test_best_of_empty_group() {
        let records: Vec<RunRecord> = Vec::new();
        assert!(best(&records, &RankMetric::Throughput).is_none());
        assert!(rank(&records, &RankMetric::Throughput).is_empty());
    }

    #[test]
    fn test_rank_by_component_missing_last() {
        let records = vec![
            with_component("none", None),
            with_component("slow", Some(2.0)),
            with_component("fast", Some(8.0)),
        ];
        let metric = RankMetric::Component("MAIN".into());
        let ranked = rank(&records, &metric);
        assert_eq!(bases(&ranked), vec!["fast", "slow", "none"]);
        assert_eq!(metric.value(ranked[2]), None);
        assert_eq!(metric.to_string(), "MAIN throughput");
    }

    // ==================== leaderboards ====================

    #[test]
    fn test_leaderboards_layout() {
        let records = vec![
            run(BenchmarkKind::Ycsb, "a", 8, 1.0),
            run(BenchmarkKind::Tpcc, "a", 1, 1.0),
            run(BenchmarkKind::Ycsb, "b", 8, 3.0),
            run(BenchmarkKind::Ycsb, "a", 2, 2.0),
        ];
        let boards = leaderboards(&records, &RankMetric::Throughput);
        let layout: Vec<(String, u32, usize)> = boards
            .iter()
            .map(|b| (b.kind.to_string(), b.threads, b.entries.len()))
            .collect();
        assert_eq!(
            layout,
            vec![
                ("YCSB".to_string(), 2, 1),
                ("YCSB".to_string(), 8, 2),
                ("TPCC".to_string(), 1, 1),
            ]
        );

        let top = &boards[1].entries;
        assert_eq!(top[0].rank, 0);
        assert_eq!(top[0].variant.base(), "b");
        assert_eq!(top[0].value, Some(3.0));
        assert_eq!(top[1].rank, 1);
    }

    // ==================== series ====================

    #[test]
    fn test_best_per_thread_count() {
        let records = vec![
            run(BenchmarkKind::Ycsb, "a", 4, 1.0),
            run(BenchmarkKind::Ycsb, "b", 1, 2.0),
            run(BenchmarkKind::Ycsb, "c", 4, 6.0),
            run(BenchmarkKind::Ycsb, "d", 1, 0.5),
        ];
        let series = best_per_thread_count(&records);
        assert_eq!(series.label(), BEST_LABEL);
        assert_eq!(series.x(), &[1, 4]);
        assert_eq!(series.y(), &[2.0, 6.0]);
    }

    #[test]
    fn test_variant_series_uses_best_per_thread() {
        let records = vec![
            run(BenchmarkKind::Ycsb, "t (rcu-htm)", 2, 5.0),
            run(BenchmarkKind::Ycsb, "t (rcu-htm)", 2, 3.0),
            run(BenchmarkKind::Ycsb, "t (cg-htm)", 2, 9.0),
            run(BenchmarkKind::Ycsb, "t (rcu-htm)", 1, 1.0),
        ];
        let variant = Variant::parse("t (rcu-htm)");
        let series = variant_series(&records, &variant);
        assert_eq!(series.label(), "t (rcu-htm)");
        assert_eq!(series.x(), &[1, 2]);
        assert_eq!(series.y(), &[1.0, 5.0]);
    }

    #[test]
    fn test_best_chart() {
        let records = vec![
            run(BenchmarkKind::Ycsb, "a (RCU-HTM)", 1, 1.0),
            run(BenchmarkKind::Ycsb, "b (cg-htm)", 1, 4.0),
            run(BenchmarkKind::Tpcc, "c (RCU-HTM)", 1, 9.0),
            run(BenchmarkKind::Ycsb, "d (RCU-HTM)", 2, 3.0),
        ];
        let chart = best_chart(&records, &BenchmarkKind::Ycsb, Some("RCU-HTM"));
        assert_eq!(chart.title, "best-YCSB");
        let labels: Vec<&str> = chart.series.iter().map(Series::label).collect();
        assert_eq!(labels, vec!["best", "a (RCU-HTM)", "d (RCU-HTM)"]);
        assert_eq!(chart.series[0].y(), &[4.0, 3.0]);

        let plain = best_chart(&records, &BenchmarkKind::Ycsb, None);
        assert_eq!(plain.series.len(), 1);
    }
}
