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

//! Subsets: backtracking over include/skip choices.

use algotrace_common::{Action, State, Step, Trace, TraceObserver, Tracer, View};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{Category, Difficulty, Instrumented};

/// Input of [`Subsets`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubsetsInput {
    /// Distinct values
    pub nums: Vec<i64>,
}

/// Enumerate the power set
#[derive(Debug, Clone, Copy, Default)]
pub struct Subsets;

fn render(subset: &[i64]) -> String {
    format!("[{}]", subset.iter().join(", "))
}

struct Search<'t, 'o> {
    tracer: &'t mut Tracer<'o>,
    nums: &'t [i64],
    /// Indices of the chosen values, in choice order
    path: Vec<usize>,
    result: Vec<Vec<i64>>,
}

impl Search<'_, '_> {
    fn current(&self) -> Vec<i64> {
        self.path.iter().map(|&i| self.nums[i]).collect()
    }

    fn state(&self) -> State {
        State::new()
            .with_view("nums", View::array(self.nums.iter().copied()))
            .with_view("current", View::stack(self.current()))
            .with_view("subsets", View::array(self.result.iter().map(|subset| render(subset))))
    }

    fn step(&self, line: usize, message: String) -> Step {
        Step::new(self.state(), line, message).with_secondary(self.path.clone())
    }

    fn backtrack(&mut self, start: usize) {
        let subset = self.current();
        self.result.push(subset.clone());
        let step = self
            .step(9, format!("Record subset {}", render(&subset)))
            .with_pointer("start", start as i64)
            .with_action(Action::Found);
        self.tracer.record(step);

        for i in start..self.nums.len() {
            self.path.push(i);
            let step = self
                .step(11, format!("Choose {}", self.nums[i]))
                .with_highlights([i])
                .with_pointer("start", start as i64)
                .with_action(Action::Push);
            self.tracer.record(step);

            self.backtrack(i + 1);

            self.path.pop();
            let step = self
                .step(13, format!("Undo {}", self.nums[i]))
                .with_highlights([i])
                .with_pointer("start", start as i64)
                .with_action(Action::Pop);
            self.tracer.record(step);
        }
    }
}

impl Instrumented for Subsets {
    const ID: &'static str = "subsets";
    const NAME: &'static str = "Subsets";
    const CATEGORY: Category = Category::Backtracking;
    const DIFFICULTY: Difficulty = Difficulty::Medium;
    const TIME_COMPLEXITY: &'static str = "O(n·2ⁿ)";
    const SPACE_COMPLEXITY: &'static str = "O(n)";
    const LISTING: &'static str = include_str!("reference/subsets.rs");

    type Input = SubsetsInput;

    fn default_input() -> Self::Input {
        SubsetsInput { nums: vec![1, 2, 3] }
    }

    fn trace_observed(input: &Self::Input, observer: &mut dyn TraceObserver) -> Trace {
        let init = Step::new(
            State::new()
                .with_view("nums", View::array(input.nums.iter().copied()))
                .with_view("current", View::stack(Vec::<i64>::new()))
                .with_view("subsets", View::array(Vec::<String>::new())),
            2,
            "Start with no subsets and an empty choice stack",
        );
        let mut tracer = Tracer::start(observer, init);

        let mut search =
            Search { tracer: &mut tracer, nums: &input.nums, path: Vec::new(), result: Vec::new() };
        search.backtrack(0);
        let state = search.state();
        let result = search.result;

        let message = format!("Generated all {} subsets", result.len());
        tracer.finish(Step::new(state, 5, message).with_action(Action::Found), serde_json::json!(result))
    }
}
