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

//! Run records and the builder that produces them.
//!
//! A [`RunRecord`] is one completed benchmark invocation. Which optional
//! fields a record carries is decided by its [`BenchmarkKind`] and encoded
//! in [`RunDetails`]: macro-benchmark runs (TPC-C, YCSB, ...) carry
//! per-component metrics, micro-benchmark runs carry their workload
//! configuration.
//!
//! Records are immutable once built. The only later change is the
//! close-to-max annotation written by [`crate::relative`].
//!
//! # Building Records
//!
//! ```rust
//! use benchlog_core::{BenchmarkKind, RunBuilder, Variant};
//!
//! let record = RunBuilder::new()
//!     .kind(BenchmarkKind::Micro)
//!     .variant(Variant::parse("bst-avl-bronson(cg-spinlock)"))
//!     .threads(8)
//!     .throughput(12.5)
//!     .workload_mix(50)
//!     .initial_size(100_000)
//!     .expected_final_size(100_000)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(record.threads(), 8);
//! assert_eq!(record.workload_mix(), Some(50));
//! assert_eq!(record.close_to_max(), None);
//! ```

use crate::error::{ParseError, ParseResult};
use crate::variant::Variant;
use std::collections::BTreeMap;
use std::fmt;

/// Field names used in diagnostics and when reading input parameters.
pub mod field {
    /// Benchmark kind (`Running <NAME> ...`).
    pub const BENCH: &str = "bench";
    /// Data-structure variant signature.
    pub const VARIANT: &str = "variant";
    /// Thread count.
    pub const THREADS: &str = "threads";
    /// Summary throughput.
    pub const THROUGHPUT: &str = "throughput";
    /// Component name inside a per-component summary.
    pub const INDEX: &str = "index";
    /// Expected final size reported by the terminator line.
    pub const EXPECTED_FINAL_SIZE: &str = "expected_final_size";
    /// Input parameter carrying the thread count.
    pub const NUM_THREADS: &str = "num_threads";
    /// Input parameter carrying the lookup (workload mix) fraction.
    pub const LOOKUP_FRAC: &str = "lookup_frac";
    /// Input parameter carrying the initial structure size.
    pub const INIT_TREE_SIZE: &str = "init_tree_size";
    /// Input parameter naming the data structure.
    pub const DS_NAME: &str = "ds_name";
    /// Input parameter naming the synchronization technique.
    pub const SYNC_TYPE: &str = "sync_type";
}

/// A single metric value from a summary line.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
pub enum MetricValue {
    /// A value that parsed as a real number.
    Number(f64),
    /// Anything else, kept verbatim.
    Text(String),
}

impl MetricValue {
    /// Classify a raw summary value.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.parse::<f64>() {
            Ok(n) => Self::Number(n),
            Err(_) => Self::Text(raw.to_string()),
        }
    }

    /// The numeric value, if this is a number.
    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    /// The text value, if this is not a number.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Metric name to value mapping.
pub type Metrics = BTreeMap<String, MetricValue>;

/// Which benchmark produced a run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BenchmarkKind {
    /// TPC-C transactional workload.
    Tpcc,
    /// Read-only TPC-C.
    TpccReadOnly,
    /// YCSB key-value workload.
    Ycsb,
    /// The macro-benchmark's self-test workload.
    Test,
    /// Micro-benchmark run over a single map.
    Micro,
    /// Any other macro-benchmark workload name.
    Other(String),
}

impl BenchmarkKind {
    /// Map the name token of a `Running <NAME> ...` line.
    pub fn from_name(name: &str) -> Self {
        match name {
            "TPCC" => Self::Tpcc,
            // "Running READ ONLY TPCC workload"
            "READ" => Self::TpccReadOnly,
            "YCSB" => Self::Ycsb,
            "TEST" => Self::Test,
            other => Self::Other(other.to_string()),
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        match self {
            Self::Tpcc => "TPCC",
            Self::TpccReadOnly => "TPCC-READONLY",
            Self::Ycsb => "YCSB",
            Self::Test => "TEST",
            Self::Micro => "MICRO",
            Self::Other(name) => name,
        }
    }

    /// Whether runs of this kind come from the macro-benchmark log.
    #[inline]
    pub fn is_macro(&self) -> bool {
        !matches!(self, Self::Micro)
    }
}

impl fmt::Display for BenchmarkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for BenchmarkKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Kind-specific fields of a run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "log", rename_all = "snake_case")
)]
pub enum RunDetails {
    /// Macro-benchmark run.
    Macro {
        /// Schema file the workload was loaded from.
        schema_file: Option<String>,
        /// Per-component (per-index) metrics keyed by component name.
        components: BTreeMap<String, Metrics>,
    },
    /// Micro-benchmark run.
    Micro {
        /// Percentage of lookups in the operation mix.
        workload_mix: u32,
        /// Number of elements the structure was initialized with.
        initial_size: u64,
        /// Size the benchmark expected at the end of the run.
        expected_final_size: u64,
        /// Raw input parameter block.
        inputs: BTreeMap<String, String>,
    },
}

/// One completed benchmark invocation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RunRecord {
    kind: BenchmarkKind,
    variant: Variant,
    threads: u32,
    throughput: f64,
    summary: Metrics,
    details: RunDetails,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    close_to_max: Option<f64>,
}

impl RunRecord {
    /// Benchmark kind.
    #[inline]
    pub fn kind(&self) -> &BenchmarkKind {
        &self.kind
    }

    /// Data-structure variant under test.
    #[inline]
    pub fn variant(&self) -> &Variant {
        &self.variant
    }

    /// Number of worker threads.
    #[inline]
    pub fn threads(&self) -> u32 {
        self.threads
    }

    /// Resolved summary throughput.
    #[inline]
    pub fn throughput(&self) -> f64 {
        self.throughput
    }

    /// All summary metrics, including `throughput`.
    #[inline]
    pub fn summary(&self) -> &Metrics {
        &self.summary
    }

    /// Kind-specific details.
    #[inline]
    pub fn details(&self) -> &RunDetails {
        &self.details
    }

    /// Throughput as a percentage of the best run with the same configuration.
    ///
    /// `None` until [`crate::relative::annotate_close_to_max`] has run.
    #[inline]
    pub fn close_to_max(&self) -> Option<f64> {
        self.close_to_max
    }

    /// Lookup fraction, for micro-benchmark runs.
    pub fn workload_mix(&self) -> Option<u32> {
        match &self.details {
            RunDetails::Micro { workload_mix, .. } => Some(*workload_mix),
            RunDetails::Macro { .. } => None,
        }
    }

    /// Initial structure size, for micro-benchmark runs.
    pub fn initial_size(&self) -> Option<u64> {
        match &self.details {
            RunDetails::Micro { initial_size, .. } => Some(*initial_size),
            RunDetails::Macro { .. } => None,
        }
    }

    /// Expected final size, for micro-benchmark runs.
    pub fn expected_final_size(&self) -> Option<u64> {
        match &self.details {
            RunDetails::Micro {
                expected_final_size,
                ..
            } => Some(*expected_final_size),
            RunDetails::Macro { .. } => None,
        }
    }

    /// Schema file, for macro-benchmark runs that announced one.
    pub fn schema_file(&self) -> Option<&str> {
        match &self.details {
            RunDetails::Macro { schema_file, .. } => schema_file.as_deref(),
            RunDetails::Micro { .. } => None,
        }
    }

    /// Metrics of a named component, for macro-benchmark runs.
    pub fn component(&self, name: &str) -> Option<&Metrics> {
        match &self.details {
            RunDetails::Macro { components, .. } => components.get(name),
            RunDetails::Micro { .. } => None,
        }
    }

    /// Throughput of a named component, if it reported a numeric one.
    pub fn component_throughput(&self, name: &str) -> Option<f64> {
        self.component(name)?
            .get(field::THROUGHPUT)
            .and_then(MetricValue::as_f64)
    }

    pub(crate) fn set_close_to_max(&mut self, value: f64) {
        self.close_to_max = Some(value);
    }
}

/// Accumulates the fields of a run until it can be frozen into a [`RunRecord`].
///
/// Setters take `&mut self` so the parser can fill a builder line by line;
/// [`build`](Self::build) borrows, so chains on a temporary work too.
#[derive(Debug, Clone, Default)]
pub struct RunBuilder {
    kind: Option<BenchmarkKind>,
    variant: Option<Variant>,
    threads: Option<u32>,
    throughput: Option<f64>,
    summary: Option<Metrics>,
    schema_file: Option<String>,
    components: BTreeMap<String, Metrics>,
    workload_mix: Option<u32>,
    initial_size: Option<u64>,
    expected_final_size: Option<u64>,
    inputs: BTreeMap<String, String>,
}

impl RunBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(&mut self, kind: BenchmarkKind) -> &mut Self {
        self.kind = Some(kind);
        self
    }

    pub fn variant(&mut self, variant: Variant) -> &mut Self {
        self.variant = Some(variant);
        self
    }

    pub fn threads(&mut self, threads: u32) -> &mut Self {
        self.threads = Some(threads);
        self
    }

    /// Set the throughput directly.
    ///
    /// Takes precedence over a `throughput` entry in the summary.
    pub fn throughput(&mut self, throughput: f64) -> &mut Self {
        self.throughput = Some(throughput);
        self
    }

    pub fn summary(&mut self, summary: Metrics) -> &mut Self {
        self.summary = Some(summary);
        self
    }

    pub fn schema_file(&mut self, path: impl Into<String>) -> &mut Self {
        self.schema_file = Some(path.into());
        self
    }

    /// Add (or replace) a component's metrics.
    pub fn component(&mut self, name: impl Into<String>, metrics: Metrics) -> &mut Self {
        self.components.insert(name.into(), metrics);
        self
    }

    pub fn workload_mix(&mut self, fraction: u32) -> &mut Self {
        self.workload_mix = Some(fraction);
        self
    }

    pub fn initial_size(&mut self, size: u64) -> &mut Self {
        self.initial_size = Some(size);
        self
    }

    pub fn expected_final_size(&mut self, size: u64) -> &mut Self {
        self.expected_final_size = Some(size);
        self
    }

    /// Record a raw input parameter.
    ///
    /// Micro-benchmark runs resolve their thread count, workload mix,
    /// initial size and variant from these when not set explicitly.
    pub fn input(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.inputs.insert(key.into(), value.into());
        self
    }

    /// Freeze the accumulated fields.
    ///
    /// Line numbers in the returned errors are zero; the parser rewrites
    /// them to the terminator line.
    pub fn build(&self) -> ParseResult<RunRecord> {
        let kind = self
            .kind
            .clone()
            .ok_or_else(|| ParseError::missing_field(0, field::BENCH))?;

        let threads = match self.threads {
            Some(n) => n,
            None => self.input_int(field::NUM_THREADS, field::THREADS)?,
        };
        if threads == 0 {
            return Err(ParseError::field_conversion(0, field::THREADS, "0"));
        }

        let variant = match &self.variant {
            Some(v) => v.clone(),
            None => self.input_variant()?,
        };

        let mut summary = self.summary.clone().unwrap_or_default();
        let throughput = match self.throughput {
            Some(t) => t,
            None => match summary.get(field::THROUGHPUT) {
                Some(MetricValue::Number(n)) => *n,
                Some(MetricValue::Text(raw)) => {
                    return Err(ParseError::field_conversion(0, field::THROUGHPUT, raw.as_str()))
                }
                None => return Err(ParseError::missing_field(0, field::THROUGHPUT)),
            },
        };
        if !throughput.is_finite() || throughput <= 0.0 {
            return Err(ParseError::field_conversion(
                0,
                field::THROUGHPUT,
                throughput.to_string(),
            ));
        }
        summary.insert(field::THROUGHPUT.to_string(), MetricValue::Number(throughput));

        let details = if kind.is_macro() {
            RunDetails::Macro {
                schema_file: self.schema_file.clone(),
                components: self.components.clone(),
            }
        } else {
            let workload_mix = match self.workload_mix {
                Some(n) => n,
                None => self.input_int(field::LOOKUP_FRAC, field::LOOKUP_FRAC)?,
            };
            let initial_size = match self.initial_size {
                Some(n) => n,
                None => self.input_int(field::INIT_TREE_SIZE, field::INIT_TREE_SIZE)?,
            };
            let expected_final_size = self
                .expected_final_size
                .ok_or_else(|| ParseError::missing_field(0, field::EXPECTED_FINAL_SIZE))?;
            RunDetails::Micro {
                workload_mix,
                initial_size,
                expected_final_size,
                inputs: self.inputs.clone(),
            }
        };

        Ok(RunRecord {
            kind,
            variant,
            threads,
            throughput,
            summary,
            details,
            close_to_max: None,
        })
    }

    fn input_int<T: std::str::FromStr>(&self, key: &str, reported: &str) -> ParseResult<T> {
        let raw = self
            .inputs
            .get(key)
            .ok_or_else(|| ParseError::missing_field(0, reported))?;
        raw.trim()
            .parse()
            .map_err(|_| ParseError::field_conversion(0, reported, raw.as_str()))
    }

    fn input_variant(&self) -> ParseResult<Variant> {
        let name = self
            .inputs
            .get(field::DS_NAME)
            .ok_or_else(|| ParseError::missing_field(0, field::VARIANT))?;
        Ok(match self.inputs.get(field::SYNC_TYPE) {
            Some(sync) => Variant::parse(&format!("{}({})", name, sync)),
            None => Variant::parse(name),
        })
    }
}
