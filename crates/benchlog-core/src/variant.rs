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

//! Data-structure variant signatures.
//!
//! Benchmarks announce the structure under test as a raw signature such as
//! `BST AVL Internal (cg-htm)` or `treap`. A [`Variant`] splits that into the
//! base type and the optional synchronization subtype.
//!
//! The `(a,b)-tree` family has been spelled two ways over time, `(a,b)-` and
//! `(a-b)-`. Both collapse to the canonical `ab` prefix before splitting, so
//! the parentheses of the combinator are never mistaken for a subtype.
//!
//! ```rust
//! use benchlog_core::Variant;
//!
//! let v = Variant::parse("(a-b)-tree Brown (LLX/SCX)");
//! assert_eq!(v.base(), "abtree Brown");
//! assert_eq!(v.subtype(), Some("LLX/SCX"));
//! assert_eq!(v.to_string(), "abtree Brown (LLX/SCX)");
//!
//! let seq = Variant::parse("treap");
//! assert_eq!(seq.subtype(), None);
//! assert_eq!(seq.to_string(), "treap (None)");
//! ```

use std::borrow::Cow;
use std::fmt;

/// Historical spellings of the (a,b)-tree combinator marker.
const COMBINATOR_SPELLINGS: [&str; 2] = ["(a,b)-", "(a-b)-"];

/// Canonical replacement for every combinator spelling.
const COMBINATOR_CANONICAL: &str = "ab";

/// Label used for a variant without a synchronization subtype.
pub const NO_SUBTYPE: &str = "None";

/// A data structure plus its synchronization technique.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Variant {
    base: String,
    subtype: Option<String>,
}

impl Variant {
    /// Create a variant from already-split parts.
    ///
    /// An empty subtype is treated as absent.
    pub fn new(base: impl Into<String>, subtype: Option<impl Into<String>>) -> Self {
        let subtype = subtype.map(Into::into).filter(|s: &String| !s.is_empty());
        Self {
            base: base.into(),
            subtype,
        }
    }

    /// Decompose a raw signature of the form `base(sub)`, `base (sub)` or `base`.
    pub fn parse(signature: &str) -> Self {
        let normalized = normalize_combinator(signature.trim());
        match normalized.split_once('(') {
            Some((base, rest)) => {
                let subtype: String = rest.chars().filter(|&c| c != ')').collect();
                Self::new(base.trim(), Some(subtype.trim()))
            }
            None => Self::new(normalized.trim(), None::<String>),
        }
    }

    /// The data structure's base type.
    #[inline]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The synchronization subtype, if any.
    #[inline]
    pub fn subtype(&self) -> Option<&str> {
        self.subtype.as_deref()
    }

    /// Whether the display label contains `needle`.
    pub fn label_contains(&self, needle: &str) -> bool {
        self.to_string().contains(needle)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({})",
            self.base,
            self.subtype.as_deref().unwrap_or(NO_SUBTYPE)
        )
    }
}

/// Rewrite every known combinator spelling to the canonical token.
///
/// Borrows when the signature contains no combinator.
pub fn normalize_combinator(signature: &str) -> Cow<'_, str> {
    if !COMBINATOR_SPELLINGS.iter().any(|s| signature.contains(s)) {
        return Cow::Borrowed(signature);
    }
    let mut out = signature.to_string();
    for spelling in COMBINATOR_SPELLINGS {
        out = out.replace(spelling, COMBINATOR_CANONICAL);
    }
    Cow::Owned(out)
}
