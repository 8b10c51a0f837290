// AlgoTrace - Instrumented Algorithm Catalog
// Copyright (C) 2024 Zhuo Zhang and Wuqi Zhang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! The Instrumented Algorithm contract.
//!
//! An instrumented algorithm takes its natural problem input, runs to
//! completion and returns the whole ordered [`Trace`] describing how it
//! reached its answer. Expected negative outcomes ("not found", "impossible")
//! are terminal steps, never errors; only input that does not have the
//! documented shape is rejected with [`AlgorithmError::InvalidInput`].

use std::fmt;

use algotrace_common::{NoopObserver, Trace, TraceObserver};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

/// Topic group an algorithm is listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Arrays and hashing
    ArraysHashing,
    /// Binary search
    BinarySearch,
    /// Stack
    Stack,
    /// Linked list
    LinkedList,
    /// Trees
    Trees,
    /// Heap / priority queue
    Heap,
    /// Backtracking
    Backtracking,
    /// Tries
    Tries,
    /// Graphs
    Graphs,
    /// Dynamic programming
    DynamicProgramming,
    /// Bit manipulation
    BitManipulation,
}

impl Category {
    /// All categories in catalog order
    pub const ALL: [Self; 11] = [
        Self::ArraysHashing,
        Self::BinarySearch,
        Self::Stack,
        Self::LinkedList,
        Self::Trees,
        Self::Heap,
        Self::Backtracking,
        Self::Tries,
        Self::Graphs,
        Self::DynamicProgramming,
        Self::BitManipulation,
    ];

    /// Stable slug used in routes and on the command line
    pub fn slug(&self) -> &'static str {
        match self {
            Self::ArraysHashing => "arrays-hashing",
            Self::BinarySearch => "binary-search",
            Self::Stack => "stack",
            Self::LinkedList => "linked-list",
            Self::Trees => "trees",
            Self::Heap => "heap",
            Self::Backtracking => "backtracking",
            Self::Tries => "tries",
            Self::Graphs => "graphs",
            Self::DynamicProgramming => "dynamic-programming",
            Self::BitManipulation => "bit-manipulation",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::ArraysHashing => "Arrays & Hashing",
            Self::BinarySearch => "Binary Search",
            Self::Stack => "Stack",
            Self::LinkedList => "Linked List",
            Self::Trees => "Trees",
            Self::Heap => "Heap / Priority Queue",
            Self::Backtracking => "Backtracking",
            Self::Tries => "Tries",
            Self::Graphs => "Graphs",
            Self::DynamicProgramming => "Dynamic Programming",
            Self::BitManipulation => "Bit Manipulation",
        }
    }

    /// Parse a category from its slug
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.slug() == slug)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.display_name())
    }
}

/// Difficulty label shown in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Easy
    Easy,
    /// Medium
    Medium,
    /// Hard
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        };
        f.pad(label)
    }
}

/// Errors raised at the type-erased input boundary
#[derive(Debug, Error)]
pub enum AlgorithmError {
    /// The input does not deserialize into the algorithm's input type
    #[error("input does not match the expected shape: {0}")]
    InvalidInput(#[from] serde_json::Error),

    /// The input deserializes but violates a structural precondition
    #[error("malformed input: {0}")]
    MalformedInput(String),
}

/// An algorithm instrumented to report its own execution as a [`Trace`]
pub trait Instrumented {
    /// Stable, unique identifier (kebab-case)
    const ID: &'static str;
    /// Display name
    const NAME: &'static str;
    /// Topic group
    const CATEGORY: Category;
    /// Difficulty label
    const DIFFICULTY: Difficulty;
    /// Time complexity label
    const TIME_COMPLEXITY: &'static str;
    /// Space complexity label
    const SPACE_COMPLEXITY: &'static str;
    /// Reference listing the `codeLine` of every step points into
    const LISTING: &'static str;

    /// The natural problem input
    type Input: DeserializeOwned + Serialize;

    /// Canonical input shown when the caller supplies none
    fn default_input() -> Self::Input;

    /// Run the algorithm, reporting every recorded step to `observer`
    fn trace_observed(input: &Self::Input, observer: &mut dyn TraceObserver) -> Trace;

    /// Structural preconditions beyond what deserialization checks
    fn check(_input: &Self::Input) -> Result<(), AlgorithmError> {
        Ok(())
    }

    /// Run the algorithm and return its trace
    fn trace(input: &Self::Input) -> Trace {
        Self::trace_observed(input, &mut NoopObserver)
    }

    /// Decode a type-erased input
    fn decode(input: serde_json::Value) -> Result<Self::Input, AlgorithmError> {
        let input = serde_json::from_value(input)?;
        Self::check(&input)?;
        Ok(input)
    }

    /// Type-erased entry point
    fn run(input: serde_json::Value) -> Result<Trace, AlgorithmError> {
        Self::run_observed(input, &mut NoopObserver)
    }

    /// Type-erased entry point reporting every step to `observer`
    fn run_observed(
        input: serde_json::Value,
        observer: &mut dyn TraceObserver,
    ) -> Result<Trace, AlgorithmError> {
        let input = Self::decode(input)?;
        Ok(Self::trace_observed(&input, observer))
    }

    /// The default input as a JSON value
    fn default_input_value() -> serde_json::Value {
        // Input types are plain data; serializing them to a Value cannot fail
        serde_json::to_value(Self::default_input()).unwrap_or(serde_json::Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_slugs_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_slug(category.slug()), Some(category));
            let json = serde_json::to_value(category).unwrap();
            assert_eq!(json, serde_json::json!(category.slug()));
        }
        assert_eq!(Category::from_slug("sorting"), None);
    }

    #[test]
    fn test_category_order_is_catalog_order() {
        let mut sorted = Category::ALL;
        sorted.sort();
        assert_eq!(sorted, Category::ALL);
    }

    #[test]
    fn test_difficulty_display() {
        assert_eq!(Difficulty::Medium.to_string(), "Medium");
        assert_eq!(serde_json::to_string(&Difficulty::Hard).unwrap(), "\"hard\"");
    }
}
