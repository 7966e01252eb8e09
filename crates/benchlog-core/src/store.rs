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

//! Ordered in-memory collection of run records.
//!
//! A [`RecordStore`] accumulates the records of any number of sources in the
//! order they were encountered, without deduplication. Each source is parsed
//! by a fresh [`LogParser`], so a run never spans two files. Dropped runs are
//! kept as [`Diagnostic`]s tagged with their source.

use crate::error::{ParseError, ParseResult};
use crate::parser::{LogParser, ParserConfig};
use crate::record::RunRecord;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// A run that was dropped while parsing a source.
#[derive(Debug)]
pub struct Diagnostic {
    /// Name of the source (usually a file path).
    pub source: String,
    /// Why the run was dropped.
    pub error: ParseError,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.source, self.error)
    }
}

/// Records from every ingested source, in encounter order.
///
/// # Examples
///
/// ```rust
/// use benchlog_core::RecordStore;
///
/// let mut store = RecordStore::new();
/// store
///     .ingest_str("a.log", "mem_allocator initialized!\nRunning TEST workload\n\
///         [ type: treap ]\nrunning 1 threads\n[summary] throughput=2.0\n")
///     .unwrap();
/// store
///     .ingest_str("b.log", "mem_allocator initialized!\nrunning 1 threads\n")
///     .unwrap();
///
/// assert_eq!(store.len(), 1);
/// assert_eq!(store.diagnostics().len(), 1);
/// assert_eq!(store.diagnostics()[0].source, "b.log");
/// ```
#[derive(Debug, Default)]
pub struct RecordStore {
    config: ParserConfig,
    records: Vec<RunRecord>,
    diagnostics: Vec<Diagnostic>,
    sources: usize,
}

impl RecordStore {
    /// Create an empty store with the default parser configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store that parses with `config`.
    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Parse one source and append its records.
    ///
    /// Returns the number of records added. Nothing from the source is kept
    /// if it fails (unreadable, or a defect in strict mode).
    pub fn ingest<R: Read>(&mut self, source: &str, reader: R) -> ParseResult<usize> {
        let outcome = LogParser::new(self.config.clone()).parse(reader)?;
        let added = outcome.records.len();

        debug!(
            "Ingested {}: {} runs, {} dropped",
            source,
            added,
            outcome.diagnostics.len()
        );
        self.records.extend(outcome.records);
        self.diagnostics
            .extend(outcome.diagnostics.into_iter().map(|error| Diagnostic {
                source: source.to_string(),
                error,
            }));
        self.sources += 1;
        Ok(added)
    }

    /// Parse an in-memory source.
    pub fn ingest_str(&mut self, source: &str, text: &str) -> ParseResult<usize> {
        self.ingest(source, text.as_bytes())
    }

    /// Open and parse a file.
    pub fn ingest_path(&mut self, path: impl AsRef<Path>) -> ParseResult<usize> {
        let path = path.as_ref();
        let file = File::open(path)?;
        self.ingest(&path.display().to_string(), file)
    }

    /// Append an already-built record.
    pub fn push(&mut self, record: RunRecord) {
        self.records.push(record);
    }

    /// All records in encounter order.
    #[inline]
    pub fn records(&self) -> &[RunRecord] {
        &self.records
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, RunRecord> {
        self.records.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Dropped runs across all sources.
    #[inline]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Number of sources ingested successfully.
    #[inline]
    pub fn source_count(&self) -> usize {
        self.sources
    }

    /// Annotate every record with its close-to-max percentage.
    ///
    /// See [`crate::relative::annotate_close_to_max`].
    pub fn annotate_close_to_max(&mut self) {
        crate::relative::annotate_close_to_max(&mut self.records);
    }
}

impl FromIterator<RunRecord> for RecordStore {
    fn from_iter<I: IntoIterator<Item = RunRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
            ..Self::default()
        }
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a RunRecord;
    type IntoIter = std::slice::Iter<'a, RunRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
