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

//! Line reader for benchmark logs.
//!
//! Provides buffered line-by-line reading with line number tracking.
//! Benchmark output is captured from terminals and occasionally
//! contains stray non-UTF-8 bytes, so lines are decoded lossily rather than
//! failing the whole source.

use crate::error::ParseResult;
use std::io::{BufRead, BufReader, Read};

/// Buffered line reader with line number tracking.
///
/// Handles LF and CRLF endings. Line numbers start at 1.
///
/// # Examples
///
/// ```rust
/// use benchlog_core::LineReader;
/// use std::io::Cursor;
///
/// let mut reader = LineReader::new(Cursor::new("running 4 threads\r\n[summary] throughput=1"));
///
/// assert_eq!(reader.next_line().unwrap(), Some((1, "running 4 threads".to_string())));
/// assert_eq!(reader.next_line().unwrap(), Some((2, "[summary] throughput=1".to_string())));
/// assert_eq!(reader.next_line().unwrap(), None);
/// ```
pub struct LineReader<R: Read> {
    reader: BufReader<R>,
    line_number: usize,
    buffer: Vec<u8>,
}

impl<R: Read> LineReader<R> {
    /// Create a new line reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            line_number: 0,
            buffer: Vec::new(),
        }
    }

    /// Create with a specific buffer capacity.
    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        Self {
            reader: BufReader::with_capacity(capacity, reader),
            line_number: 0,
            buffer: Vec::new(),
        }
    }

    /// Get the current line number.
    #[inline]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Read the next line.
    pub fn next_line(&mut self) -> ParseResult<Option<(usize, String)>> {
        self.buffer.clear();

        if self.reader.read_until(b'\n', &mut self.buffer)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        if self.buffer.ends_with(b"\n") {
            self.buffer.pop();
            if self.buffer.ends_with(b"\r") {
                self.buffer.pop();
            }
        }

        let line = String::from_utf8_lossy(&self.buffer).into_owned();
        Ok(Some((self.line_number, line)))
    }
}

impl<R: Read> Iterator for LineReader<R> {
    type Item = ParseResult<(usize, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_lines() {
        let mut reader = LineReader::new(Cursor::new("a\nb\nc"));
        assert_eq!(reader.next_line().unwrap(), Some((1, "a".to_string())));
        assert_eq!(reader.next_line().unwrap(), Some((2, "b".to_string())));
        assert_eq!(reader.next_line().unwrap(), Some((3, "c".to_string())));
        assert_eq!(reader.next_line().unwrap(), None);
    }

    // ==================== Line ending tests ====================

    #[test]
    fn test_mixed_line_endings() {
        let mut reader = LineReader::new(Cursor::new("a\r\nb\nc\r\n"));
        assert_eq!(reader.next_line().unwrap(), Some((1, "a".to_string())));
        assert_eq!(reader.next_line().unwrap(), Some((2, "b".to_string())));
        assert_eq!(reader.next_line().unwrap(), Some((3, "c".to_string())));
        assert_eq!(reader.next_line().unwrap(), None);
    }

    #[test]
    fn test_blank_lines_are_kept() {
        let mut reader = LineReader::new(Cursor::new("\n\nx"));
        assert_eq!(reader.next_line().unwrap(), Some((1, String::new())));
        assert_eq!(reader.next_line().unwrap(), Some((2, String::new())));
        assert_eq!(reader.next_line().unwrap(), Some((3, "x".to_string())));
    }

    #[test]
    fn test_empty_input() {
        let mut reader = LineReader::new(Cursor::new(""));
        assert_eq!(reader.next_line().unwrap(), None);
        assert_eq!(reader.next_line().unwrap(), None);
        assert_eq!(reader.line_number(), 0);
    }

    // ==================== Encoding tests ====================

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let bytes: &[u8] = b"running \xff4 threads\nok";
        let mut reader = LineReader::new(Cursor::new(bytes));
        let (n, line) = reader.next_line().unwrap().unwrap();
        assert_eq!(n, 1);
        assert!(line.contains('\u{FFFD}'));
        assert_eq!(reader.next_line().unwrap(), Some((2, "ok".to_string())));
    }

    #[test]
    fn test_line_number_tracks_reads() {
        let mut reader = LineReader::new(Cursor::new("a\nb\n"));
        reader.next_line().unwrap();
        assert_eq!(reader.line_number(), 1);
        reader.next_line().unwrap();
        reader.next_line().unwrap();
        assert_eq!(reader.line_number(), 2);
    }

    // ==================== Iterator tests ====================

    #[test]
    fn test_iterator() {
        let reader = LineReader::with_capacity(Cursor::new("a\nb"), 4);
        let lines: Vec<_> = reader.map(|r| r.unwrap().1).collect();
        assert_eq!(lines, vec!["a", "b"]);
    }
}
