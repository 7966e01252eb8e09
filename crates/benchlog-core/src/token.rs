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

//! Line classification for benchmark logs.
//!
//! [`tokenize`] looks at a single line and decides which marker it carries,
//! returning the fields the parser needs as borrowed slices. Matching is
//! prefix- and delimiter-based only; anything unrecognized yields `None` and
//! is ignored by the parser.
//!
//! # Recognized Lines
//!
//! | Line                                      | Token                   |
//! |-------------------------------------------|-------------------------|
//! | `mem_allocator initialized!`              | [`Token::RunStart`]     |
//! | `Inputs:`                                 | [`Token::InputsStart`]  |
//! | `Running YCSB workload`                   | [`Token::BenchmarkName`]|
//! | `Reading schema file: path`               | [`Token::SchemaReference`] |
//! | `Initiating Map ... type: SIG ]`          | [`Token::IndexType`]    |
//! | `[ type: SIG ]`                           | [`Token::IndexType`]    |
//! | `RBT implementation SIG`                  | [`Token::Implementation`] |
//! | `running 8 threads`                       | [`Token::ThreadCount`]  |
//! | `Per-index stats: index=MAIN, ...`        | [`Token::ComponentSummary`] |
//! | `[summary] throughput=1.5, ...`           | [`Token::OverallSummary`] |
//! | `Throughput(Ops/usec): 12.3`              | [`Token::Throughput`]   |
//! | `Expected size of MAP: 100000`            | [`Token::ExpectedSize`] |
//! | `lookup_frac: 50`                         | [`Token::InputParameter`] |
//! | (empty)                                   | [`Token::Blank`]        |
//!
//! ```rust
//! use benchlog_core::token::{tokenize, MarkerKind, Token};
//!
//! assert_eq!(tokenize("running 8 threads"), Some(Token::ThreadCount("8")));
//! assert_eq!(
//!     tokenize("[summary] throughput=1.5").map(|t| t.kind()),
//!     Some(MarkerKind::OverallSummary)
//! );
//! assert_eq!(tokenize("WARMUP finished!"), None);
//! ```

use crate::record::{MetricValue, Metrics};
use std::fmt;

const RUN_START: &str = "mem_allocator initialized!";
const INPUTS_START: &str = "Inputs:";
const BENCHMARK_NAME: &str = "Running ";
const SCHEMA_REFERENCE: &str = "Reading schema file:";
const MAP_INIT: &str = "Initiating Map";
const TYPE_BRACKET: &str = "[ type: ";
const TYPE_KEY: &str = "type: ";
const IMPLEMENTATION: &str = "RBT implementation";
const THREAD_COUNT: &str = "running ";
const COMPONENT_SUMMARY: &str = "Per-index stats:";
const OVERALL_SUMMARY: &str = "[summary]";
const THROUGHPUT: &str = "Throughput(Ops/usec):";
const EXPECTED_SIZE: [&str; 2] = ["Expected size of MAP", "Expected size of RBT"];

/// Which parsing rule a line triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    RunStart,
    InputsStart,
    BenchmarkName,
    SchemaReference,
    IndexType,
    Implementation,
    ThreadCount,
    ComponentSummary,
    OverallSummary,
    InputParameter,
    Throughput,
    ExpectedSize,
    Blank,
}

impl MarkerKind {
    /// Whether this marker begins a new run.
    #[inline]
    pub fn is_run_start(self) -> bool {
        matches!(self, Self::RunStart | Self::InputsStart)
    }

    /// Whether this marker ends the current run.
    #[inline]
    pub fn is_terminator(self) -> bool {
        matches!(self, Self::OverallSummary | Self::ExpectedSize)
    }
}

/// A classified line with its fields.
///
/// Payloads are raw text; numeric conversion is the parser's job so that a
/// bad number can be attributed to the run it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Macro-benchmark run start.
    RunStart,
    /// Micro-benchmark run start; an input parameter block follows.
    InputsStart,
    /// Workload name.
    BenchmarkName(&'a str),
    /// Path of the schema file.
    SchemaReference(&'a str),
    /// Raw data-structure signature from a map declaration.
    IndexType(&'a str),
    /// Raw data-structure signature from an implementation line.
    Implementation(&'a str),
    /// Thread count, unconverted.
    ThreadCount(&'a str),
    /// `key=value` list of one component.
    ComponentSummary(&'a str),
    /// `key=value` list of the whole run.
    OverallSummary(&'a str),
    /// One `key: value` line of an input block.
    InputParameter { key: &'a str, value: &'a str },
    /// Throughput, unconverted.
    Throughput(&'a str),
    /// Expected final size, unconverted.
    ExpectedSize(&'a str),
    /// Empty line.
    Blank,
}

impl Token<'_> {
    /// The marker this token was recognized by.
    pub fn kind(&self) -> MarkerKind {
        match self {
            Token::RunStart => MarkerKind::RunStart,
            Token::InputsStart => MarkerKind::InputsStart,
            Token::BenchmarkName(_) => MarkerKind::BenchmarkName,
            Token::SchemaReference(_) => MarkerKind::SchemaReference,
            Token::IndexType(_) => MarkerKind::IndexType,
            Token::Implementation(_) => MarkerKind::Implementation,
            Token::ThreadCount(_) => MarkerKind::ThreadCount,
            Token::ComponentSummary(_) => MarkerKind::ComponentSummary,
            Token::OverallSummary(_) => MarkerKind::OverallSummary,
            Token::InputParameter { .. } => MarkerKind::InputParameter,
            Token::Throughput(_) => MarkerKind::Throughput,
            Token::ExpectedSize(_) => MarkerKind::ExpectedSize,
            Token::Blank => MarkerKind::Blank,
        }
    }
}

/// Classify a single line.
///
/// The line is trimmed first. Returns `None` for lines that match no marker.
pub fn tokenize(line: &str) -> Option<Token<'_>> {
    let line = line.trim();

    if line.is_empty() {
        return Some(Token::Blank);
    }
    if line.starts_with(RUN_START) {
        return Some(Token::RunStart);
    }
    if line.starts_with(INPUTS_START) {
        return Some(Token::InputsStart);
    }
    if line.starts_with(BENCHMARK_NAME) {
        return nth_word(line, 1).map(Token::BenchmarkName);
    }
    if line.starts_with(SCHEMA_REFERENCE) {
        return nth_word(line, 3).map(Token::SchemaReference);
    }
    if line.starts_with(MAP_INIT) {
        // Only the declaration carrying a type is meaningful.
        return type_signature(line).map(Token::IndexType);
    }
    if line.starts_with(TYPE_BRACKET) {
        return type_signature(line).map(Token::IndexType);
    }
    if line.starts_with(IMPLEMENTATION) {
        return nth_word(line, 2).map(Token::Implementation);
    }
    if line.starts_with(THREAD_COUNT) {
        return nth_word(line, 1).map(Token::ThreadCount);
    }
    if let Some(rest) = line.strip_prefix(COMPONENT_SUMMARY) {
        return Some(Token::ComponentSummary(rest.trim()));
    }
    if let Some(rest) = line.strip_prefix(OVERALL_SUMMARY) {
        return Some(Token::OverallSummary(rest.trim()));
    }
    if line.starts_with(THROUGHPUT) {
        return nth_word(line, 1).map(Token::Throughput);
    }
    if EXPECTED_SIZE.iter().any(|p| line.starts_with(p)) {
        return nth_word(line, 4).map(Token::ExpectedSize);
    }
    input_parameter(line)
}

/// The `index`th whitespace-separated word.
#[inline]
fn nth_word(line: &str, index: usize) -> Option<&str> {
    line.split_whitespace().nth(index)
}

/// Text after `type: ` with the closing bracket removed.
fn type_signature(line: &str) -> Option<&str> {
    let (_, sig) = line.split_once(TYPE_KEY)?;
    let sig = sig.trim_end();
    let sig = sig.strip_suffix(']').unwrap_or(sig).trim();
    (!sig.is_empty()).then_some(sig)
}

/// `identifier: value`, as printed in a micro-benchmark input block.
fn input_parameter(line: &str) -> Option<Token<'_>> {
    let (key, value) = line.split_once(':')?;
    let key = key.trim();
    if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    Some(Token::InputParameter {
        key,
        value: value.trim(),
    })
}

/// A `key=value` pair without `=`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryError {
    /// The offending pair.
    pub pair: String,
}

impl fmt::Display for SummaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected key=value, got {:?}", self.pair)
    }
}

impl std::error::Error for SummaryError {}

/// Split a `key=value, key=value` list into metrics.
///
/// Pairs are separated by `,` and split on the first `=`; keys and values are
/// trimmed. Empty pairs (from a trailing comma) are skipped.
///
/// ```rust
/// use benchlog_core::token::parse_summary;
/// use benchlog_core::MetricValue;
///
/// let m = parse_summary("index=MAIN, throughput=12.5").unwrap();
/// assert_eq!(m["index"], MetricValue::Text("MAIN".into()));
/// assert_eq!(m["throughput"], MetricValue::Number(12.5));
/// assert!(parse_summary("throughput").is_err());
/// ```
pub fn parse_summary(text: &str) -> Result<Metrics, SummaryError> {
    let mut metrics = Metrics::new();
    for pair in text.split(',') {
        let pair = pair.trim();
        if pair.is_empty() {
            continue;
        }
        let (key, value) = pair.split_once('=').ok_or_else(|| SummaryError {
            pair: pair.to_string(),
        })?;
        metrics.insert(key.trim().to_string(), MetricValue::parse(value));
    }
    Ok(metrics)
}
