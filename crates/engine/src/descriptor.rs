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

//! Type-erased metadata wrapper around one instrumented algorithm.

use std::fmt;

use algotrace_common::{Trace, TraceObserver};
use serde::Serialize;

use crate::{AlgorithmError, Category, Difficulty, Instrumented};

type Runner = fn(serde_json::Value, &mut dyn TraceObserver) -> Result<Trace, AlgorithmError>;

/// Catalog entry for one algorithm
#[derive(Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmDescriptor {
    /// Stable, unique identifier
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Topic group
    pub category: Category,
    /// Difficulty label
    pub difficulty: Difficulty,
    /// Time complexity label
    pub time_complexity: &'static str,
    /// Space complexity label
    pub space_complexity: &'static str,
    /// Reference listing the trace's code lines point into
    #[serde(skip)]
    pub listing: &'static str,
    #[serde(skip)]
    default_input: fn() -> serde_json::Value,
    #[serde(skip)]
    runner: Runner,
}

impl AlgorithmDescriptor {
    /// Describe the instrumented algorithm `A`
    pub fn of<A: Instrumented>() -> Self {
        Self {
            id: A::ID,
            name: A::NAME,
            category: A::CATEGORY,
            difficulty: A::DIFFICULTY,
            time_complexity: A::TIME_COMPLEXITY,
            space_complexity: A::SPACE_COMPLEXITY,
            listing: A::LISTING,
            default_input: A::default_input_value,
            runner: A::run_observed,
        }
    }

    /// Canonical input for this algorithm
    pub fn default_input(&self) -> serde_json::Value {
        (self.default_input)()
    }

    /// Run the algorithm on a type-erased input
    pub fn run(&self, input: serde_json::Value) -> Result<Trace, AlgorithmError> {
        self.run_observed(input, &mut algotrace_common::NoopObserver)
    }

    /// Run the algorithm, reporting every step to `observer`
    pub fn run_observed(
        &self,
        input: serde_json::Value,
        observer: &mut dyn TraceObserver,
    ) -> Result<Trace, AlgorithmError> {
        (self.runner)(input, observer)
    }

    /// Number of lines in the reference listing
    pub fn listing_lines(&self) -> usize {
        self.listing.lines().count()
    }
}

impl fmt::Debug for AlgorithmDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlgorithmDescriptor")
            .field("id", &self.id)
            .field("category", &self.category)
            .field("difficulty", &self.difficulty)
            .finish_non_exhaustive()
    }
}
