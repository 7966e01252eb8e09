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

//! Integration tests for benchlog-core: log text in, comparisons out.

use benchlog_core::distribution::close_to_max_by;
use benchlog_core::group::{by_threads, by_variant, group_by, ConfigKey};
use benchlog_core::rank::{best_chart, best_per_thread_count, leaderboards, rank, RankMetric};
use benchlog_core::{
    BenchmarkKind, Chart, ChartSink, LogParser, ParseError, ParserConfig, RecordStore, Variant,
};
use benchlog_test::fixtures::{self, errors};
use benchlog_test::{concat, MacroRunBuilder, MicroRunBuilder};

fn store_from(text: &str) -> RecordStore {
    let mut store = RecordStore::new();
    store.ingest_str("test.log", text).unwrap();
    store
}

// ==================== Scenario Tests ====================

#[test]
fn test_two_singleton_configurations() {
    let log = concat([
        MicroRunBuilder::new("treap", "cg-htm")
            .threads(1)
            .lookup_frac(50)
            .init_tree_size(1000)
            .throughput(2.0)
            .build(),
        MicroRunBuilder::new("treap", "cg-htm")
            .threads(2)
            .lookup_frac(50)
            .init_tree_size(1000)
            .throughput(5.0)
            .build(),
    ]);
    let mut store = store_from(&log);
    store.annotate_close_to_max();

    assert_eq!(group_by(store.records(), ConfigKey::of).len(), 2);
    assert!(store.iter().all(|r| r.close_to_max() == Some(100.0)));
}

#[test]
fn test_zero_throughput_run_excluded_from_close_to_max() {
    let log = concat([
        MicroRunBuilder::new("treap", "cg-htm")
            .threads(1)
            .lookup_frac(50)
            .init_tree_size(10)
            .throughput(0.0)
            .build(),
        MicroRunBuilder::new("treap", "rcu-htm")
            .threads(1)
            .lookup_frac(50)
            .init_tree_size(10)
            .throughput(4.0)
            .build(),
    ]);
    let mut store = store_from(&log);
    store.annotate_close_to_max();

    assert_eq!(store.len(), 1);
    assert_eq!(store.diagnostics().len(), 1);
    assert!(matches!(
        store.diagnostics()[0].error,
        ParseError::FieldConversion { ref field, .. } if field == "throughput"
    ));
    assert_eq!(store.records()[0].close_to_max(), Some(100.0));
}

#[test]
fn test_rank_three_variants() {
    let log = concat(
        [("X", 3.0), ("Y", 7.0), ("Z", 5.0)]
            .iter()
            .map(|(sig, t)| {
                MacroRunBuilder::new("TPCC")
                    .index_type(*sig)
                    .threads(4)
                    .throughput(*t)
                    .build()
            }),
    );
    let store = store_from(&log);
    let order: Vec<&str> = rank(store.records(), &RankMetric::Throughput)
        .iter()
        .map(|r| r.variant().base())
        .collect();
    assert_eq!(order, vec!["Y", "Z", "X"]);
}

#[test]
fn test_component_block_attached() {
    let log = MacroRunBuilder::new("YCSB").component("MAIN", 12.5).build();
    let store = store_from(&log);
    assert_eq!(store.records()[0].component_throughput("MAIN"), Some(12.5));
}

#[test]
fn test_restart_discards_first_run() {
    let log = concat([
        MacroRunBuilder::new("YCSB").threads(3).unterminated().build(),
        MacroRunBuilder::new("YCSB").threads(5).build(),
    ]);
    let store = store_from(&log);
    assert_eq!(store.len(), 1);
    assert_eq!(store.records()[0].threads(), 5);
    assert!(matches!(
        store.diagnostics()[0].error,
        ParseError::IncompleteRun { started: 1, .. }
    ));
}

// ==================== Fixture Tests ====================

#[test]
fn test_canonical_macro_logs() {
    let mut store = RecordStore::new();
    store.ingest_str("tpcc.log", &fixtures::tpcc_log()).unwrap();
    store.ingest_str("ycsb.log", &fixtures::ycsb_log()).unwrap();

    assert_eq!(store.len(), 18);
    assert!(store.diagnostics().is_empty());

    let variants = group_by(store.records(), by_variant);
    let labels: Vec<String> = variants.keys().iter().map(Variant::to_string).collect();
    assert_eq!(
        labels,
        vec![
            "BST Unbalanced External (cg-htm)",
            "abtree (RCU-HTM)",
            "abtree Brown (LLX/SCX)",
        ]
    );

    let boards = leaderboards(store.records(), &RankMetric::Throughput);
    assert_eq!(boards.len(), 6);
    assert_eq!(boards[0].kind, BenchmarkKind::Tpcc);
    assert_eq!(boards[0].threads, 1);
    assert_eq!(boards[3].kind, BenchmarkKind::Ycsb);
    for board in &boards {
        assert_eq!(board.entries[0].variant.to_string(), "abtree Brown (LLX/SCX)");
        assert_eq!(board.entries[0].rank, 0);
    }
}

#[test]
fn test_rank_by_component() {
    let store = store_from(&fixtures::ycsb_log());
    let metric = RankMetric::Component("MAIN_INDEX".to_string());
    let boards = leaderboards(store.records(), &metric);
    let top = &boards[2].entries[0];
    assert_eq!(boards[2].threads, 16);
    assert_eq!(top.value, Some(96.0));
    assert_eq!(top.throughput, 48.0);
}

#[test]
fn test_best_chart_from_fixture() {
    let store = store_from(&fixtures::tpcc_log());
    let chart = best_chart(store.records(), &BenchmarkKind::Tpcc, Some("RCU-HTM"));

    assert_eq!(chart.title, "best-TPCC");
    assert_eq!(chart.series.len(), 2);
    assert_eq!(chart.series[0].x(), &[1, 4, 16]);
    assert_eq!(chart.series[0].y(), &[3.0, 12.0, 48.0]);
    assert_eq!(chart.series[1].label(), "abtree (RCU-HTM)");
    assert_eq!(chart.series[1].y(), &[2.0, 8.0, 32.0]);

    let mut sink: Vec<Chart> = Vec::new();
    sink.render(&chart).unwrap();
    assert_eq!(sink.len(), 1);
}

#[test]
fn test_canonical_micro_log() {
    let mut store = store_from(&fixtures::micro_log());
    assert_eq!(store.len(), 12);
    store.annotate_close_to_max();

    let by_variant = close_to_max_by(store.records(), |r| Some(r.variant().clone()), None);
    assert_eq!(by_variant.len(), 2);
    assert_eq!(by_variant[0].label, "bst-avl-bronson (cg-htm)");
    assert!(by_variant[0].values.iter().all(|&v| v == 100.0));
    assert!(by_variant[1].values.iter().all(|&v| v == 25.0));

    let summary = by_variant[1].summary().unwrap();
    assert_eq!(summary.count, 6);
    assert_eq!(summary.median, 25.0);

    let by_threads = close_to_max_by(store.records(), |r| Some(r.threads()), Some("rcu-htm"));
    let labels: Vec<&str> = by_threads.iter().map(|d| d.label.as_str()).collect();
    assert_eq!(labels, vec!["1", "4", "16"]);
}

#[test]
fn test_best_per_thread_count_micro() {
    let store = store_from(&fixtures::micro_log());
    let series = best_per_thread_count(store.records());
    assert_eq!(series.x(), &[1, 4, 16]);
    assert!(series.y().iter().all(|&y| y == 8.0));
}

// ==================== Recovery Tests ====================

#[test]
fn test_malformed_runs_recover() {
    for (name, text) in errors::malformed_runs() {
        let store = store_from(&text);
        assert_eq!(store.len(), 1, "sample {}", name);
        assert_eq!(
            store.records()[0].throughput(),
            errors::RECOVERY_THROUGHPUT,
            "sample {}",
            name
        );
        assert_eq!(store.diagnostics().len(), 1, "sample {}", name);
        assert!(store.diagnostics()[0].error.is_recoverable());
    }
}

#[test]
fn test_malformed_runs_strict() {
    for (name, text) in errors::malformed_runs() {
        let parser = LogParser::new(ParserConfig::default().with_strict(true));
        assert!(parser.parse(text.as_bytes()).is_err(), "sample {}", name);
    }
}

#[test]
fn test_noise_yields_nothing() {
    for (name, text) in errors::noise_samples() {
        let store = store_from(text);
        assert!(store.is_empty(), "sample {}", name);
        assert!(store.diagnostics().is_empty(), "sample {}", name);
    }
}

#[test]
fn test_sources_are_independent() {
    let first = MacroRunBuilder::new("YCSB").unterminated().build();
    let second = "[summary] throughput=9.0\n";

    let mut store = RecordStore::new();
    store.ingest_str("first.log", &first).unwrap();
    store.ingest_str("second.log", second).unwrap();

    assert!(store.is_empty());
    assert_eq!(store.diagnostics().len(), 1);
    assert_eq!(store.diagnostics()[0].source, "first.log");
}

#[test]
fn test_read_only_tpcc_kind() {
    let store = store_from(&MacroRunBuilder::new("TPCC-READONLY").build());
    assert_eq!(store.records()[0].kind(), &BenchmarkKind::TpccReadOnly);
    let threads = group_by(store.records(), by_threads);
    assert_eq!(threads.keys(), &[1]);
}
