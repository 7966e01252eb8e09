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

//! Chart data: labelled series of (thread count, value) points.
//!
//! Nothing here draws anything. A [`Chart`] is handed to a [`ChartSink`],
//! which decides what to produce from it (a JSON file, a plot, a table).

use std::convert::Infallible;

/// A labelled line of points.
///
/// `x` and `y` always have the same length.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Series {
    label: String,
    x: Vec<u32>,
    y: Vec<f64>,
}

impl Series {
    /// Create an empty series.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            x: Vec::new(),
            y: Vec::new(),
        }
    }

    /// Append a point.
    pub fn push(&mut self, x: u32, y: f64) {
        self.x.push(x);
        self.y.push(y);
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn x(&self) -> &[u32] {
        &self.x
    }

    #[inline]
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Points as `(x, y)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

impl FromIterator<(u32, f64)> for Series {
    /// Collect an unlabelled series.
    fn from_iter<I: IntoIterator<Item = (u32, f64)>>(iter: I) -> Self {
        let (x, y) = iter.into_iter().unzip();
        Self {
            label: String::new(),
            x,
            y,
        }
    }
}

/// A titled set of series.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
}

impl Chart {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            series: Vec::new(),
        }
    }

    pub fn push(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Title made safe for use as a file name.
    pub fn file_stem(&self) -> String {
        self.title.replace('/', "-")
    }
}

/// Consumer of charts.
pub trait ChartSink {
    /// Error raised when a chart cannot be rendered.
    type Error;

    fn render(&mut self, chart: &Chart) -> Result<(), Self::Error>;
}

/// Collects charts in memory.
impl ChartSink for Vec<Chart> {
    type Error = Infallible;

    fn render(&mut self, chart: &Chart) -> Result<(), Self::Error> {
        self.push(chart.clone());
        Ok(())
    }
}
