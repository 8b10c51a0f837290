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

//! Two Sum: a single pass with a map from seen value to its index.

use std::collections::BTreeMap;

use algotrace_common::{Action, State, Step, Trace, TraceObserver, Tracer, View};
use serde::{Deserialize, Serialize};

use crate::{Category, Difficulty, Instrumented};

/// Input of [`TwoSum`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwoSumInput {
    /// Values to search
    pub nums: Vec<i64>,
    /// Sum the pair must reach
    pub target: i64,
}

/// Find two indices whose values add up to the target
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoSum;

fn state(nums: &[i64], seen: &BTreeMap<i64, usize>, target: i64) -> State {
    State::new()
        .with_view("nums", View::array(nums.iter().copied()))
        .with_view("seen", View::map(seen.iter().map(|(value, index)| (value, *index))))
        .with_var("target", target)
}

impl Instrumented for TwoSum {
    const ID: &'static str = "two-sum";
    const NAME: &'static str = "Two Sum";
    const CATEGORY: Category = Category::ArraysHashing;
    const DIFFICULTY: Difficulty = Difficulty::Easy;
    const TIME_COMPLEXITY: &'static str = "O(n)";
    const SPACE_COMPLEXITY: &'static str = "O(n)";
    const LISTING: &'static str = include_str!("reference/two_sum.rs");

    type Input = TwoSumInput;

    fn default_input() -> Self::Input {
        TwoSumInput { nums: vec![2, 7, 11, 15], target: 9 }
    }

    fn trace_observed(input: &Self::Input, observer: &mut dyn TraceObserver) -> Trace {
        let TwoSumInput { nums, target } = input;
        let target = *target;
        let mut seen = BTreeMap::new();

        let mut tracer = Tracer::start(
            observer,
            Step::new(state(nums, &seen, target), 4, "Create an empty map from value to index"),
        );

        for (i, &num) in nums.iter().enumerate() {
            // None when `target - num` leaves the i64 range; no stored value can match it
            let complement = target.checked_sub(num);
            let wanted =
                complement.map_or_else(|| "outside the i64 range".to_string(), |c| c.to_string());
            tracer.record(
                Step::new(
                    state(nums, &seen, target).with_var("complement", complement),
                    6,
                    format!("nums[{i}] = {num}, looking for its complement {wanted}"),
                )
                .with_highlights([i])
                .with_pointer("i", i as i64)
                .with_action(Action::Visit),
            );

            if let Some((c, &j)) = complement.and_then(|c| seen.get(&c).map(|j| (c, j))) {
                return tracer.finish(
                    Step::new(
                        state(nums, &seen, target).with_var("complement", c),
                        8,
                        format!("{c} was seen at index {j}: nums[{j}] + nums[{i}] = {target}"),
                    )
                    .with_highlights([j, i])
                    .with_pointer("i", i as i64)
                    .with_action(Action::Found),
                    serde_json::json!([j, i]),
                );
            }
            let message = match complement {
                Some(c) => format!("{c} has not been seen yet"),
                None => format!("No i64 value pairs with {num} to reach {target}"),
            };
            tracer.record(
                Step::new(state(nums, &seen, target).with_var("complement", complement), 7, message)
                    .with_highlights([i])
                    .with_pointer("i", i as i64)
                    .with_action(Action::Compare),
            );

            seen.insert(num, i);
            tracer.record(
                Step::new(
                    state(nums, &seen, target),
                    10,
                    format!("Remember {num} at index {i}"),
                )
                .with_highlights([i])
                .with_pointer("i", i as i64)
                .with_action(Action::Insert),
            );
        }

        tracer.finish(
            Step::new(state(nums, &seen, target), 12, format!("No pair adds up to {target}")),
            serde_json::json!([]),
        )
    }
}
