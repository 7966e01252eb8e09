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

//! Structured error types for the benchlog CLI.
//!
//! Every command returns `Result<(), CliError>`. Run-level parse defects are
//! not errors here; they are collected by the record store and reported as
//! warnings. Only unreadable inputs, strict-mode failures and output problems
//! reach this type.

use benchlog_core::ParseError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for benchlog CLI operations.
///
/// # Examples
///
/// ```rust,no_run
/// use benchlog_cli::error::CliError;
///
/// fn open(path: &str) -> Result<String, CliError> {
///     std::fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
/// }
/// ```
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// I/O operation failed (file read, write, or metadata access).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// Input file exceeds the configured size limit.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB)")]
    FileTooLarge {
        path: PathBuf,
        actual: u64,
        max: u64,
        max_mb: u64,
    },

    /// A log could not be parsed (unreadable source, or any run defect in
    /// strict mode).
    #[error("Parse error: {0}")]
    Parse(String),

    /// Records or charts could not be serialized.
    #[error("Export error: {0}")]
    Export(String),

    /// Invalid command-line input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a file-too-large error.
    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }

    /// Create a parse error for a named source.
    pub fn parse(source: &str, err: &ParseError) -> Self {
        Self::Parse(format!("{}: {}", source, err))
    }

    /// Create an export error.
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(source: serde_json::Error) -> Self {
        Self::Export(format!("JSON: {}", source))
    }
}

impl From<serde_yaml::Error> for CliError {
    fn from(source: serde_yaml::Error) -> Self {
        Self::Export(format!("YAML: {}", source))
    }
}

impl From<csv::Error> for CliError {
    fn from(source: csv::Error) -> Self {
        Self::Export(format!("CSV: {}", source))
    }
}
