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

//! Leaderboard command - per thread count rankings

use super::{load_store, write_output};
use crate::error::CliError;
use benchlog_core::rank::{leaderboards, Leaderboard, RankMetric};
use benchlog_core::ParserConfig;

/// Render leaderboards as `Bench <kind> threads <n>` blocks.
///
/// Each entry line shows the zero-based rank, the variant and the value it
/// was ranked by with three decimals, as the log prints throughput (`-` for
/// a run that lacked it).
pub fn render_leaderboards(boards: &[Leaderboard]) -> String {
    let mut out = String::new();
    for board in boards {
        out.push_str(&format!("Bench {} threads {}\n", board.kind, board.threads));
        for entry in &board.entries {
            match entry.value {
                Some(value) => {
                    out.push_str(&format!("    {}: {} {:.3}\n", entry.rank, entry.variant, value))
                }
                None => out.push_str(&format!("    {}: {} -\n", entry.rank, entry.variant)),
            }
        }
    }
    out
}

/// Rank every (benchmark, thread count) group by summary throughput, or by
/// a component's throughput when `component` is given.
pub fn leaderboard(
    files: &[String],
    config: &ParserConfig,
    component: Option<&str>,
) -> Result<(), CliError> {
    let store = load_store(files, config)?;
    let metric = component
        .map(|name| RankMetric::Component(name.to_string()))
        .unwrap_or_default();
    let boards = leaderboards(store.records(), &metric);
    write_output(&render_leaderboards(&boards), None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchlog_core::RecordStore;
    use benchlog_test::MacroRunBuilder;

    fn store() -> RecordStore {
        let log = [
            MacroRunBuilder::new("YCSB")
                .index_type("treap (cg-htm)")
                .threads(4)
                .throughput(3.0)
                .component("MAIN_INDEX", 9.0)
                .build(),
            MacroRunBuilder::new("YCSB")
                .index_type("treap (rcu-htm)")
                .threads(4)
                .throughput(7.0)
                .build(),
            MacroRunBuilder::new("YCSB")
                .index_type("(a,b)-tree (RCU-HTM)")
                .threads(1)
                .throughput(1.5)
                .build(),
        ]
        .concat();
        let mut store = RecordStore::new();
        store.ingest_str("ycsb.log", &log).unwrap();
        store
    }

    #[test]
    fn test_throughput_leaderboard() {
        let store = store();
        let boards = leaderboards(store.records(), &RankMetric::Throughput);
        let text = render_leaderboards(&boards);
        assert_eq!(
            text,
            "Bench YCSB threads 1\n\
             \x20   0: abtree (RCU-HTM) 1.500\n\
             Bench YCSB threads 4\n\
             \x20   0: treap (rcu-htm) 7.000\n\
             \x20   1: treap (cg-htm) 3.000\n"
        );
    }

    #[test]
    fn test_whole_throughput_keeps_decimals() {
        let store = store();
        let text = render_leaderboards(&leaderboards(store.records(), &RankMetric::Throughput));
        assert!(text.contains("treap (rcu-htm) 7.000\n"));
        assert!(!text.contains("treap (rcu-htm) 7\n"));
    }

    #[test]
    fn test_component_leaderboard_marks_missing() {
        let store = store();
        let metric = RankMetric::Component("MAIN_INDEX".to_string());
        let text = render_leaderboards(&leaderboards(store.records(), &metric));
        assert!(text.contains("    0: treap (cg-htm) 9.000\n    1: treap (rcu-htm) -\n"));
    }

    #[test]
    fn test_empty_store_renders_nothing() {
        assert_eq!(render_leaderboards(&[]), "");
    }
}
