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

//! Binary search over a sorted array with a half-open window.

use algotrace_common::{Action, State, Step, Trace, TraceObserver, Tracer, View};
use serde::{Deserialize, Serialize};

use crate::{Category, Difficulty, Instrumented};

/// Input of [`BinarySearch`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinarySearchInput {
    /// Values sorted in ascending order
    pub nums: Vec<i64>,
    /// Value to look for
    pub target: i64,
}

/// Find the index of a target in a sorted array
#[derive(Debug, Clone, Copy, Default)]
pub struct BinarySearch;

/// A step showing the array with the live window `[left, right)` as secondary
fn step(
    nums: &[i64],
    target: i64,
    (left, right): (usize, usize),
    line: usize,
    message: String,
) -> Step {
    let state =
        State::new().with_view("nums", View::array(nums.iter().copied())).with_var("target", target);
    Step::new(state, line, message)
        .with_secondary(left..right)
        .with_pointer("left", left as i64)
        .with_pointer("right", right as i64)
}

impl Instrumented for BinarySearch {
    const ID: &'static str = "binary-search";
    const NAME: &'static str = "Binary Search";
    const CATEGORY: Category = Category::BinarySearch;
    const DIFFICULTY: Difficulty = Difficulty::Easy;
    const TIME_COMPLEXITY: &'static str = "O(log n)";
    const SPACE_COMPLEXITY: &'static str = "O(1)";
    const LISTING: &'static str = include_str!("reference/binary_search.rs");

    type Input = BinarySearchInput;

    fn default_input() -> Self::Input {
        BinarySearchInput { nums: vec![-1, 0, 3, 5, 9, 12], target: 9 }
    }

    fn trace_observed(input: &Self::Input, observer: &mut dyn TraceObserver) -> Trace {
        let BinarySearchInput { nums, target } = input;
        let target = *target;
        let (mut left, mut right) = (0, nums.len());

        let mut tracer = Tracer::start(
            observer,
            step(nums, target, (left, right), 2, format!("Search for {target} in [0, {right})")),
        );

        while left < right {
            let mid = left + (right - left) / 2;
            tracer.record(
                step(nums, target, (left, right), 4, format!("mid = {mid}"))
                    .with_highlights([mid])
                    .with_pointer("mid", mid as i64)
                    .with_action(Action::Visit),
            );

            let value = nums[mid];
            if value == target {
                return tracer.finish(
                    step(nums, target, (left, right), 6, format!("nums[{mid}] = {target}, found at index {mid}"))
                        .with_highlights([mid])
                        .with_pointer("mid", mid as i64)
                        .with_action(Action::Found),
                    serde_json::json!(mid),
                );
            }

            let smaller = value < target;
            tracer.record(
                step(
                    nums,
                    target,
                    (left, right),
                    5,
                    format!(
                        "nums[{mid}] = {value} is {} than {target}",
                        if smaller { "smaller" } else { "larger" }
                    ),
                )
                .with_highlights([mid])
                .with_pointer("mid", mid as i64)
                .with_action(Action::Compare),
            );

            if smaller {
                left = mid + 1;
                tracer.record(step(
                    nums,
                    target,
                    (left, right),
                    8,
                    format!("Discard the left half, left = {left}"),
                ));
            } else {
                right = mid;
                tracer.record(step(
                    nums,
                    target,
                    (left, right),
                    10,
                    format!("Discard the right half, right = {right}"),
                ));
            }
        }

        tracer.finish(
            step(nums, target, (left, right), 13, format!("Window is empty, {target} is not present")),
            serde_json::Value::Null,
        )
    }
}
