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

//! Partitioning records by field values.
//!
//! [`group_by`] splits a record collection into [`Groups`]: an ordered mapping
//! from key to members. Keys are enumerated in the order they were first seen
//! and members keep their relative input order, so grouping the same input
//! twice always gives the same result. Every input item lands in exactly one
//! group.
//!
//! ```rust
//! use benchlog_core::group::{by_threads, group_by};
//! use benchlog_core::{BenchmarkKind, RunBuilder, RunRecord, Variant};
//!
//! let run = |threads: u32| -> RunRecord {
//!     RunBuilder::new()
//!         .kind(BenchmarkKind::Ycsb)
//!         .variant(Variant::parse("treap"))
//!         .threads(threads)
//!         .throughput(1.0)
//!         .build()
//!         .unwrap()
//! };
//! let records = vec![run(8), run(1), run(8)];
//!
//! let groups = group_by(&records, by_threads);
//! assert_eq!(groups.keys(), &[8, 1]);
//! assert_eq!(groups.get(&8).map(|g| g.len()), Some(2));
//!
//! let sorted: Vec<u32> = groups.into_sorted().into_iter().map(|(k, _)| k).collect();
//! assert_eq!(sorted, vec![1, 8]);
//! ```

use crate::record::{BenchmarkKind, RunRecord};
use crate::variant::Variant;
use std::collections::HashMap;
use std::hash::Hash;

/// Members partitioned by key, in first-seen key order.
#[derive(Debug, Clone)]
pub struct Groups<K, T> {
    keys: Vec<K>,
    members: Vec<Vec<T>>,
    index: HashMap<K, usize>,
}

impl<K, T> Groups<K, T>
where
    K: Eq + Hash + Clone,
{
    /// Partition arbitrary items by `key`.
    pub fn build<I, F>(items: I, mut key: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&T) -> K,
    {
        let mut groups = Self {
            keys: Vec::new(),
            members: Vec::new(),
            index: HashMap::new(),
        };
        for item in items {
            let k = key(&item);
            let slot = match groups.index.get(&k) {
                Some(&slot) => slot,
                None => {
                    let slot = groups.keys.len();
                    groups.index.insert(k.clone(), slot);
                    groups.keys.push(k);
                    groups.members.push(Vec::new());
                    slot
                }
            };
            groups.members[slot].push(item);
        }
        groups
    }

    /// Members of the group with key `key`.
    pub fn get(&self, key: &K) -> Option<&[T]> {
        self.index.get(key).map(|&slot| self.members[slot].as_slice())
    }
}

impl<K, T> Groups<K, T> {
    /// Keys in first-seen order.
    #[inline]
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// `(key, members)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &[T])> + '_ {
        self.keys
            .iter()
            .zip(self.members.iter().map(Vec::as_slice))
    }

    /// Number of groups.
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Take the groups out in ascending key order.
    ///
    /// Used for numeric axes such as thread counts.
    pub fn into_sorted(self) -> Vec<(K, Vec<T>)>
    where
        K: Ord,
    {
        let mut pairs: Vec<_> = self.into_iter().collect();
        pairs.sort_by(|a, b| a.0.cmp(&b.0));
        pairs
    }
}

impl<K, T> IntoIterator for Groups<K, T> {
    type Item = (K, Vec<T>);
    type IntoIter = std::iter::Zip<std::vec::IntoIter<K>, std::vec::IntoIter<Vec<T>>>;

    /// `(key, members)` pairs in first-seen order.
    fn into_iter(self) -> Self::IntoIter {
        self.keys.into_iter().zip(self.members)
    }
}

/// Partition records by a key derived from each record.
///
/// Members are references into `records`.
pub fn group_by<'a, I, K, F>(records: I, mut key: F) -> Groups<K, &'a RunRecord>
where
    I: IntoIterator<Item = &'a RunRecord>,
    K: Eq + Hash + Clone,
    F: FnMut(&RunRecord) -> K,
{
    Groups::build(records, |record: &&RunRecord| key(*record))
}

/// Benchmark kind.
pub fn by_kind(record: &RunRecord) -> BenchmarkKind {
    record.kind().clone()
}

/// Thread count.
pub fn by_threads(record: &RunRecord) -> u32 {
    record.threads()
}

/// Data-structure variant.
pub fn by_variant(record: &RunRecord) -> Variant {
    record.variant().clone()
}

/// Lookup fraction; `None` for macro-benchmark runs.
pub fn by_workload_mix(record: &RunRecord) -> Option<u32> {
    record.workload_mix()
}

/// A benchmark configuration: thread count, workload mix and initial size.
///
/// Macro-benchmark runs have neither a workload mix nor an initial size, so
/// their configuration reduces to the thread count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ConfigKey {
    pub threads: u32,
    pub workload_mix: Option<u32>,
    pub initial_size: Option<u64>,
}

impl ConfigKey {
    /// The configuration a record was run under.
    pub fn of(record: &RunRecord) -> Self {
        Self {
            threads: record.threads(),
            workload_mix: record.workload_mix(),
            initial_size: record.initial_size(),
        }
    }
}
