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

//! Counting Bits: `ans[i] = ans[i >> 1] + (i & 1)`.

use algotrace_common::{Action, State, Step, Trace, TraceObserver, Tracer, View};
use serde::{Deserialize, Serialize};

use crate::{Category, Difficulty, Instrumented};

/// Input of [`CountingBits`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountingBitsInput {
    /// Count set bits for every value in `0..=n`
    pub n: usize,
}

/// Number of set bits of every integer up to n
#[derive(Debug, Clone, Copy, Default)]
pub struct CountingBits;

fn state(ans: &[u32]) -> State {
    State::new().with_view("ans", View::array(ans.iter().copied()))
}

impl Instrumented for CountingBits {
    const ID: &'static str = "counting-bits";
    const NAME: &'static str = "Counting Bits";
    const CATEGORY: Category = Category::BitManipulation;
    const DIFFICULTY: Difficulty = Difficulty::Easy;
    const TIME_COMPLEXITY: &'static str = "O(n)";
    const SPACE_COMPLEXITY: &'static str = "O(n)";
    const LISTING: &'static str = include_str!("reference/counting_bits.rs");

    type Input = CountingBitsInput;

    fn default_input() -> Self::Input {
        CountingBitsInput { n: 5 }
    }

    fn trace_observed(input: &Self::Input, observer: &mut dyn TraceObserver) -> Trace {
        let n = input.n;
        let mut ans = vec![0u32; n + 1];
        let mut tracer = Tracer::start(
            observer,
            Step::new(state(&ans), 2, format!("ans has {} zeros, ans[0] = 0", n + 1)),
        );

        for i in 1..=n {
            let half = i >> 1;
            let low = (i & 1) as u32;
            ans[i] = ans[half] + low;
            tracer.record(
                Step::new(
                    state(&ans).with_var("binary", format!("{i:b}")),
                    4,
                    format!("{i} = {i:b}₂: ans[{half}] + {low} = {}", ans[i]),
                )
                .with_highlights([i])
                .with_secondary([half])
                .with_pointer("i", i as i64)
                .with_action(Action::Insert),
            );
        }

        tracer.finish(
            Step::new(state(&ans), 6, format!("Bit counts for 0..={n}")).with_action(Action::Found),
            serde_json::json!(ans),
        )
    }
}
