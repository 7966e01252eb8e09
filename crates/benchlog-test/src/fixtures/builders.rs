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

//! Builders that synthesize benchmark log text.
//!
//! Each builder produces the output of exactly one benchmark invocation.
//! Defaults are chosen so that `build()` on a fresh builder yields a run the
//! parser accepts.

/// Builder for one macro-benchmark (TPC-C / YCSB) run.
///
/// # Examples
///
/// ```
/// use benchlog_test::MacroRunBuilder;
///
/// let text = MacroRunBuilder::new("TPCC-READONLY")
///     .bracket_type_line()
///     .index_type("treap")
///     .threads(2)
///     .throughput(1.5)
///     .build();
///
/// assert!(text.contains("Running READ ONLY TPCC workload"));
/// assert!(text.contains("\n[ type: treap ]\n"));
/// assert!(text.ends_with("throughput=1.5\n"));
/// ```
#[derive(Debug, Clone)]
pub struct MacroRunBuilder {
    bench: String,
    schema: Option<String>,
    index_type: Option<String>,
    bracket_type_line: bool,
    threads: Option<String>,
    components: Vec<(String, f64)>,
    throughput: Option<f64>,
    terminated: bool,
}

impl MacroRunBuilder {
    /// Creates a run of benchmark `bench` (`TPCC`, `TPCC-READONLY`, `YCSB`,
    /// `TEST` or any other name).
    pub fn new(bench: impl Into<String>) -> Self {
        let bench = bench.into();
        Self {
            schema: Some(format!("benchmarks/{}_schema.txt", bench)),
            bench,
            index_type: Some("BST Unbalanced External (cg-htm)".to_string()),
            bracket_type_line: false,
            threads: Some("1".to_string()),
            components: Vec::new(),
            throughput: Some(1.0),
            terminated: true,
        }
    }

    /// Sets the schema file path.
    pub fn schema(mut self, path: impl Into<String>) -> Self {
        self.schema = Some(path.into());
        self
    }

    /// Sets the raw data-structure signature.
    pub fn index_type(mut self, signature: impl Into<String>) -> Self {
        self.index_type = Some(signature.into());
        self
    }

    /// Omits the data-structure signature.
    pub fn no_index_type(mut self) -> Self {
        self.index_type = None;
        self
    }

    /// Prints the signature as a bare `[ type: ... ]` line.
    pub fn bracket_type_line(mut self) -> Self {
        self.bracket_type_line = true;
        self
    }

    /// Sets the thread count.
    pub fn threads(mut self, threads: u32) -> Self {
        self.threads = Some(threads.to_string());
        self
    }

    /// Sets the thread count text verbatim, e.g. to make it malformed.
    pub fn threads_text(mut self, text: impl Into<String>) -> Self {
        self.threads = Some(text.into());
        self
    }

    /// Adds a `Per-index stats` line.
    pub fn component(mut self, index: impl Into<String>, throughput: f64) -> Self {
        self.components.push((index.into(), throughput));
        self
    }

    /// Sets the summary throughput.
    pub fn throughput(mut self, throughput: f64) -> Self {
        self.throughput = Some(throughput);
        self
    }

    /// Leaves `throughput` out of the summary line.
    pub fn no_throughput(mut self) -> Self {
        self.throughput = None;
        self
    }

    /// Stops the run before its `[summary]` line.
    pub fn unterminated(mut self) -> Self {
        self.terminated = false;
        self
    }

    /// Renders the run.
    pub fn build(&self) -> String {
        let mut out = String::new();
        out.push_str("mem_allocator initialized!\n");
        out.push_str(&format!("Running {} workload\n", workload_title(&self.bench)));
        if let Some(schema) = &self.schema {
            out.push_str(&format!("Reading schema file: {}\n", schema));
        }
        out.push_str("Workload initialized!\n");
        if let Some(sig) = &self.index_type {
            if self.bracket_type_line {
                out.push_str(&format!("[ type: {} ]\n", sig));
            } else {
                out.push_str(&format!("Initiating Map... [ type: {} ]\n", sig));
            }
        }
        if let Some(threads) = &self.threads {
            out.push_str(&format!("running {} threads\n", threads));
        }
        out.push_str("query_queue initialized!\n");
        out.push_str("using NO_WAIT concurrency control\n");
        out.push_str("WARMUP start!\n");
        out.push_str("WARMUP finished!\n");
        for (index, throughput) in &self.components {
            out.push_str(&format!(
                "Per-index stats: index={}, table_size=100000, throughput={}\n",
                index, throughput
            ));
        }
        if self.terminated {
            out.push_str("[summary] txn_cnt=100000, abort_cnt=12, run_time=5.000");
            if let Some(throughput) = self.throughput {
                out.push_str(&format!(", throughput={}", throughput));
            }
            out.push('\n');
        }
        out
    }
}

fn workload_title(bench: &str) -> &str {
    match bench {
        "TPCC-READONLY" => "READ ONLY TPCC",
        other => other,
    }
}

/// Builder for one micro-benchmark run.
///
/// # Examples
///
/// ```
/// use benchlog_test::MicroRunBuilder;
///
/// let text = MicroRunBuilder::new("treap", "rcu-htm")
///     .threads(8)
///     .lookup_frac(90)
///     .init_tree_size(1000)
///     .throughput(4.5)
///     .build();
///
/// assert!(text.starts_with("Inputs:\n"));
/// assert!(text.contains("  lookup_frac: 90\n"));
/// assert!(text.ends_with("Expected size of MAP: 1000\n"));
/// ```
#[derive(Debug, Clone)]
pub struct MicroRunBuilder {
    ds_name: String,
    sync_type: String,
    threads: u32,
    init_tree_size: u64,
    lookup_frac: String,
    implementation: Option<String>,
    throughput: f64,
    expected_size: Option<u64>,
}

impl MicroRunBuilder {
    /// Creates a run of data structure `ds_name` synchronized by `sync_type`.
    pub fn new(ds_name: impl Into<String>, sync_type: impl Into<String>) -> Self {
        Self {
            ds_name: ds_name.into(),
            sync_type: sync_type.into(),
            threads: 1,
            init_tree_size: 100_000,
            lookup_frac: "50".to_string(),
            implementation: None,
            throughput: 1.0,
            expected_size: None,
        }
    }

    /// Sets `num_threads`.
    pub fn threads(mut self, threads: u32) -> Self {
        self.threads = threads;
        self
    }

    /// Sets `init_tree_size`; the expected size follows unless set.
    pub fn init_tree_size(mut self, size: u64) -> Self {
        self.init_tree_size = size;
        self
    }

    /// Sets `lookup_frac`.
    pub fn lookup_frac(mut self, fraction: u32) -> Self {
        self.lookup_frac = fraction.to_string();
        self
    }

    /// Sets `lookup_frac` verbatim, e.g. to make it malformed.
    pub fn lookup_frac_text(mut self, text: impl Into<String>) -> Self {
        self.lookup_frac = text.into();
        self
    }

    /// Adds an `RBT implementation` line.
    pub fn implementation(mut self, signature: impl Into<String>) -> Self {
        self.implementation = Some(signature.into());
        self
    }

    /// Sets the reported throughput (ops/usec).
    pub fn throughput(mut self, throughput: f64) -> Self {
        self.throughput = throughput;
        self
    }

    /// Sets the expected final size.
    pub fn expected_size(mut self, size: u64) -> Self {
        self.expected_size = Some(size);
        self
    }

    /// Renders the run.
    pub fn build(&self) -> String {
        let insert_frac = self
            .lookup_frac
            .parse::<u32>()
            .map(|l| (100 - l.min(100)) / 2)
            .unwrap_or(0);

        let mut out = String::new();
        out.push_str("Inputs:\n");
        out.push_str("====================\n");
        out.push_str(&format!("  num_threads: {}\n", self.threads));
        out.push_str(&format!("  init_tree_size: {}\n", self.init_tree_size));
        out.push_str(&format!("  max_key: {}\n", self.init_tree_size * 2));
        out.push_str(&format!("  lookup_frac: {}\n", self.lookup_frac));
        out.push_str("  rqery_frac: 0\n");
        out.push_str(&format!("  insert_frac: {}\n", insert_frac));
        out.push_str("  init_seed: 1024\n");
        out.push_str("  thread_seed: 128\n");
        out.push_str(&format!("  ds_name: {}\n", self.ds_name));
        out.push_str(&format!("  sync_type: {}\n", self.sync_type));
        out.push_str("  run_time_sec: 5\n");
        out.push('\n');
        out.push_str("Benchmark\n");
        out.push_str("=======================\n");
        out.push_str(&format!("  MAP implementation: {}\n", self.ds_name));
        out.push('\n');
        out.push_str("Tree initialization (at core 0)...\n");
        out.push_str("Initialization finished in 0.12 sec\n");
        if let Some(sig) = &self.implementation {
            out.push_str(&format!("RBT implementation {}\n", sig));
        }
        out.push('\n');
        out.push_str("Time elapsed:   5.00\n");
        out.push_str(&format!("Throughput(Ops/usec): {:7.3}\n", self.throughput));
        out.push_str(&format!(
            "Expected size of MAP: {}\n",
            self.expected_size.unwrap_or(self.init_tree_size)
        ));
        out
    }
}
