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

//! Error types for benchmark log parsing.
//!
//! Parsing distinguishes between two classes of failure:
//!
//! - **Run defects**: a single run is malformed (it never reached its
//!   terminator, a numeric field did not convert, or a required field was
//!   never set). The run is discarded and parsing continues with the next
//!   run. These are recorded as diagnostics rather than returned, unless the
//!   parser runs in strict mode.
//! - **Source failures**: the input itself could not be read. These abort
//!   the current source and are surfaced to the caller.
//!
//! Lines that match no marker are not errors at all; they are skipped.
//!
//! # Examples
//!
//! ```rust
//! use benchlog_core::ParseError;
//!
//! let err = ParseError::field_conversion(12, "threads", "four");
//! assert!(err.is_recoverable());
//! assert_eq!(err.line(), Some(12));
//! assert!(err.to_string().contains("threads"));
//! ```

use thiserror::Error;

/// Errors that can occur while turning a benchmark log into run records.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The input source could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A run was started but its terminator never appeared.
    ///
    /// Raised when a second run-start marker arrives while a run is in
    /// progress, or when the input ends mid-run.
    #[error("Incomplete run started at line {started}: no terminator before line {line}")]
    IncompleteRun { started: usize, line: usize },

    /// A numeric field failed to convert.
    #[error("Invalid value for '{field}' at line {line}: {value:?}")]
    FieldConversion {
        line: usize,
        field: String,
        value: String,
    },

    /// A terminator was reached but a required field was never set.
    #[error("Missing required field '{field}' for run ending at line {line}")]
    MissingRequiredField { line: usize, field: String },
}

impl ParseError {
    /// Create a field conversion error.
    #[inline]
    pub fn field_conversion(
        line: usize,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::FieldConversion {
            line,
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a missing field error.
    #[inline]
    pub fn missing_field(line: usize, field: impl Into<String>) -> Self {
        Self::MissingRequiredField {
            line,
            field: field.into(),
        }
    }

    /// Whether the error only affects a single run.
    ///
    /// Recoverable errors discard the run in progress; everything else
    /// aborts the source.
    #[inline]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Io(_))
    }

    /// Get the line number if available.
    #[inline]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::IncompleteRun { line, .. }
            | Self::FieldConversion { line, .. }
            | Self::MissingRequiredField { line, .. } => Some(*line),
            Self::Io(_) => None,
        }
    }

    /// Attach a line number to an error produced without one.
    pub(crate) fn at_line(self, at: usize) -> Self {
        match self {
            Self::FieldConversion { field, value, .. } => Self::FieldConversion {
                line: at,
                field,
                value,
            },
            Self::MissingRequiredField { field, .. } => {
                Self::MissingRequiredField { line: at, field }
            }
            other => other,
        }
    }
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;
