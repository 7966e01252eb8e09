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

//! Line-driven state machine that turns a benchmark log into run records.
//!
//! The parser starts [`Idle`](ParserState::Idle). A run-start marker opens a
//! run and moves it to [`Collecting`](ParserState::Collecting); field lines
//! fill a [`RunBuilder`]; a per-component summary moves it to
//! [`CollectingComponents`](ParserState::CollectingComponents); a terminator
//! freezes the builder into a [`RunRecord`] and returns to `Idle`.
//!
//! Two log dialects share the machine:
//!
//! - **Macro-benchmark** runs open with `mem_allocator initialized!` and end
//!   with a `[summary] k=v, ...` line.
//! - **Micro-benchmark** runs open with an `Inputs:` block of `key: value`
//!   parameters (closed by a blank line) and end with
//!   `Expected size of MAP: N`.
//!
//! A malformed run is discarded and reported; the parser then waits for the
//! next run-start marker. Unrecognized lines are skipped silently.
//!
//! # Examples
//!
//! ```rust
//! use benchlog_core::parser::{LogParser, ParserConfig};
//!
//! let log = "\
//! mem_allocator initialized!
//! Running YCSB workload
//! [ type: (a,b)-tree (rcu-htm) ]
//! running 4 threads
//! Per-index stats: index=MAIN, throughput=12.5
//! [summary] txn_cnt=1000, throughput=3.5
//! ";
//!
//! let outcome = LogParser::new(ParserConfig::default())
//!     .parse(log.as_bytes())
//!     .unwrap();
//!
//! assert_eq!(outcome.records.len(), 1);
//! let run = &outcome.records[0];
//! assert_eq!(run.threads(), 4);
//! assert_eq!(run.throughput(), 3.5);
//! assert_eq!(run.component_throughput("MAIN"), Some(12.5));
//! assert!(outcome.diagnostics.is_empty());
//! ```

use crate::error::{ParseError, ParseResult};
use crate::reader::LineReader;
use crate::record::{field, BenchmarkKind, RunBuilder, RunRecord};
use crate::token::{parse_summary, tokenize, MarkerKind, Token};
use crate::variant::Variant;
use std::io::Read;
use std::str::FromStr;
use tracing::{debug, warn};

/// Field name reported when a summary line contains a malformed pair.
const SUMMARY_FIELD: &str = "summary";

/// Configuration for the log parser.
///
/// # Examples
///
/// ```rust
/// use benchlog_core::parser::ParserConfig;
///
/// let config = ParserConfig::default()
///     .with_max_line_length(4096)
///     .with_strict(true);
/// assert_eq!(config.max_line_length, 4096);
/// assert!(config.strict);
/// assert_eq!(config.buffer_size, 64 * 1024);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum line length in bytes.
    ///
    /// Longer lines are treated as unrecognized rather than tokenized.
    ///
    /// Default: 1,000,000 bytes
    pub max_line_length: usize,

    /// Buffer size for reading input.
    ///
    /// Default: 64KB
    pub buffer_size: usize,

    /// Fail on the first malformed run instead of recording a diagnostic.
    ///
    /// Default: false
    pub strict: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_line_length: 1_000_000,
            buffer_size: 64 * 1024,
            strict: false,
        }
    }
}

impl ParserConfig {
    pub fn with_max_line_length(mut self, max_line_length: usize) -> Self {
        self.max_line_length = max_line_length;
        self
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Where the parser is within a log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
    /// Between runs; only run-start markers are acted on.
    Idle,
    /// Inside a run, accumulating fields.
    Collecting,
    /// Inside a run after at least one per-component summary.
    CollectingComponents,
}

/// Records and diagnostics produced from one source.
#[derive(Debug, Default)]
pub struct ParseOutcome {
    /// Completed runs, in log order.
    pub records: Vec<RunRecord>,
    /// Runs that were discarded, in log order.
    pub diagnostics: Vec<ParseError>,
    /// Number of lines read.
    pub lines: usize,
}

/// Benchmark log parser.
///
/// Holds the state of one source. Use a fresh parser per source; records
/// never span sources.
#[derive(Debug)]
pub struct LogParser {
    config: ParserConfig,
    state: ParserState,
    builder: RunBuilder,
    started_at: usize,
    last_line: usize,
    in_inputs: bool,
}

impl LogParser {
    /// Create a parser in the `Idle` state.
    pub fn new(config: ParserConfig) -> Self {
        Self {
            config,
            state: ParserState::Idle,
            builder: RunBuilder::new(),
            started_at: 0,
            last_line: 0,
            in_inputs: false,
        }
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> ParserState {
        self.state
    }

    /// Parser configuration.
    #[inline]
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a whole source.
    ///
    /// Malformed runs are collected in [`ParseOutcome::diagnostics`]; in
    /// strict mode the first one is returned as the error instead. Read
    /// failures are always returned.
    pub fn parse<R: Read>(mut self, reader: R) -> ParseResult<ParseOutcome> {
        let mut outcome = ParseOutcome::default();
        let reader = LineReader::with_capacity(reader, self.config.buffer_size);

        for line in reader {
            let (line_no, text) = line?;
            outcome.lines = line_no;
            match self.feed(line_no, &text) {
                Ok(Some(record)) => outcome.records.push(record),
                Ok(None) => {}
                Err(e) => self.absorb(e, &mut outcome.diagnostics)?,
            }
        }
        if let Err(e) = self.finish() {
            self.absorb(e, &mut outcome.diagnostics)?;
        }

        debug!(
            "Parsed {} lines: {} runs, {} dropped",
            outcome.lines,
            outcome.records.len(),
            outcome.diagnostics.len()
        );
        Ok(outcome)
    }

    fn absorb(&self, error: ParseError, diagnostics: &mut Vec<ParseError>) -> ParseResult<()> {
        if self.config.strict {
            return Err(error);
        }
        diagnostics.push(error);
        Ok(())
    }

    /// Process one line.
    ///
    /// Returns the completed record when `line` is a terminator. An error
    /// means the run in progress was discarded. When the discard was caused
    /// by a new run-start marker, that new run is already open.
    pub fn feed(&mut self, line_no: usize, line: &str) -> ParseResult<Option<RunRecord>> {
        self.last_line = line_no;

        if line.len() > self.config.max_line_length {
            debug!("Skipping line {}: {} bytes", line_no, line.len());
            return Ok(None);
        }
        let Some(token) = tokenize(line) else {
            return Ok(None);
        };

        let kind = token.kind();
        if kind.is_run_start() {
            let interrupted = self.open_run(line_no, kind == MarkerKind::InputsStart);
            return interrupted.map_or(Ok(None), Err);
        }
        if self.state == ParserState::Idle {
            return Ok(None);
        }

        match self.apply(line_no, token) {
            Ok(record) => Ok(record),
            Err(e) => {
                let e = e.at_line(line_no);
                self.discard(&e);
                Err(e)
            }
        }
    }

    /// Signal end of input.
    ///
    /// Fails with [`ParseError::IncompleteRun`] if a run was still open.
    pub fn finish(&mut self) -> ParseResult<()> {
        if self.state == ParserState::Idle {
            return Ok(());
        }
        let e = ParseError::IncompleteRun {
            started: self.started_at,
            line: self.last_line,
        };
        self.discard(&e);
        Err(e)
    }

    /// Start a new run, returning the error for any run it interrupts.
    fn open_run(&mut self, line_no: usize, micro: bool) -> Option<ParseError> {
        let interrupted = (self.state != ParserState::Idle).then(|| {
            let e = ParseError::IncompleteRun {
                started: self.started_at,
                line: line_no,
            };
            self.discard(&e);
            e
        });

        self.builder = RunBuilder::new();
        if micro {
            self.builder.kind(BenchmarkKind::Micro);
        }
        self.in_inputs = micro;
        self.started_at = line_no;
        self.state = ParserState::Collecting;
        interrupted
    }

    fn discard(&mut self, error: &ParseError) {
        warn!("Dropping run started at line {}: {}", self.started_at, error);
        self.reset();
    }

    fn reset(&mut self) {
        self.builder = RunBuilder::new();
        self.in_inputs = false;
        self.state = ParserState::Idle;
    }

    fn apply(&mut self, line_no: usize, token: Token<'_>) -> ParseResult<Option<RunRecord>> {
        if self.in_inputs {
            match token {
                Token::InputParameter { key, value } => {
                    self.builder.input(key, value);
                    return Ok(None);
                }
                Token::Blank => {
                    self.in_inputs = false;
                    return Ok(None);
                }
                // A block without its closing blank line ends at the next marker.
                _ => self.in_inputs = false,
            }
        }

        match token {
            Token::BenchmarkName(name) => {
                self.builder.kind(BenchmarkKind::from_name(name));
            }
            Token::SchemaReference(path) => {
                self.builder.schema_file(path);
            }
            Token::IndexType(sig) | Token::Implementation(sig) => {
                self.builder.variant(Variant::parse(sig));
            }
            Token::ThreadCount(raw) => {
                self.builder.threads(convert(field::THREADS, raw)?);
            }
            Token::Throughput(raw) => {
                self.builder.throughput(convert(field::THROUGHPUT, raw)?);
            }
            Token::ComponentSummary(text) => {
                let metrics = parse_summary(text)
                    .map_err(|e| ParseError::field_conversion(0, SUMMARY_FIELD, e.pair))?;
                let name = metrics
                    .get(field::INDEX)
                    .map(ToString::to_string)
                    .ok_or_else(|| ParseError::missing_field(0, field::INDEX))?;
                self.builder.component(name, metrics);
                self.state = ParserState::CollectingComponents;
            }
            Token::OverallSummary(text) => {
                let metrics = parse_summary(text)
                    .map_err(|e| ParseError::field_conversion(0, SUMMARY_FIELD, e.pair))?;
                self.builder.summary(metrics);
            }
            Token::ExpectedSize(raw) => {
                self.builder
                    .expected_final_size(convert(field::EXPECTED_FINAL_SIZE, raw)?);
            }
            Token::RunStart
            | Token::InputsStart
            | Token::InputParameter { .. }
            | Token::Blank => {}
        }

        if token.kind().is_terminator() {
            return self.emit(line_no).map(Some);
        }
        Ok(None)
    }

    fn emit(&mut self, line_no: usize) -> ParseResult<RunRecord> {
        let record = self.builder.build()?;
        debug!(
            "Run complete at line {}: {} {} threads={} throughput={}",
            line_no,
            record.kind(),
            record.variant(),
            record.threads(),
            record.throughput()
        );
        self.reset();
        Ok(record)
    }
}

impl Default for LogParser {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}

fn convert<T: FromStr>(name: &str, raw: &str) -> ParseResult<T> {
    raw.parse()
        .map_err(|_| ParseError::field_conversion(0, name, raw))
}

/// Parse an in-memory log with the default configuration.
pub fn parse_str(input: &str) -> ParseResult<ParseOutcome> {
    LogParser::default().parse(input.as_bytes())
}
