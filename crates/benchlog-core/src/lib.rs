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

//! Benchmark log parsing and aggregation.
//!
//! Turns the free-form output of concurrent data-structure benchmarks into
//! structured run records, then compares runs across configurations.
//!
//! # Pipeline
//!
//! ```text
//! log text ──► token ──► parser ──► RecordStore ──► group ──┬─► rank
//!                                                            ├─► relative
//!                                                            └─► distribution
//! ```
//!
//! - [`token`]: classifies a line by its leading marker.
//! - [`parser`]: a three-state machine that assembles one [`RunRecord`] per
//!   benchmark invocation.
//! - [`RecordStore`]: records of every source, in encounter order.
//! - [`group`]: first-seen-order partitioning by field values.
//! - [`rank`]: stable descending ordering, leaderboards and best-per-thread
//!   series.
//! - [`relative`]: close-to-max percentages per configuration.
//! - [`distribution`]: close-to-max distributions and five-number summaries.
//! - [`series`]: chart data and the [`ChartSink`] trait.
//!
//! # Quick Start
//!
//! ```rust
//! use benchlog_core::rank::{leaderboards, RankMetric};
//! use benchlog_core::RecordStore;
//!
//! let log = "\
//! mem_allocator initialized!
//! Running YCSB workload
//! [ type: BST AVL Internal (cg-htm) ]
//! running 2 threads
//! [summary] throughput=3.0
//! mem_allocator initialized!
//! Running YCSB workload
//! [ type: BST AVL Internal (rcu-htm) ]
//! running 2 threads
//! [summary] throughput=4.5
//! ";
//!
//! let mut store = RecordStore::new();
//! store.ingest_str("ycsb.log", log).unwrap();
//! store.annotate_close_to_max();
//!
//! let boards = leaderboards(store.records(), &RankMetric::Throughput);
//! assert_eq!(boards.len(), 1);
//! assert_eq!(boards[0].entries[0].variant.to_string(), "BST AVL Internal (rcu-htm)");
//! assert_eq!(store.records()[0].close_to_max(), Some(3.0 / 4.5 * 100.0));
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize` for records, series, leaderboards and summaries.

pub mod distribution;
mod error;
pub mod group;
pub mod parser;
pub mod rank;
mod reader;
mod record;
pub mod relative;
pub mod series;
mod store;
pub mod token;
mod variant;

pub use error::{ParseError, ParseResult};
pub use parser::{LogParser, ParseOutcome, ParserConfig, ParserState};
pub use reader::LineReader;
pub use record::{field, BenchmarkKind, MetricValue, Metrics, RunBuilder, RunDetails, RunRecord};
pub use series::{Chart, ChartSink, Series};
pub use store::{Diagnostic, RecordStore};
pub use variant::{normalize_combinator, Variant, NO_SUBTYPE};
