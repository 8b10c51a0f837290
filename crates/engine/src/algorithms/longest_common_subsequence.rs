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

//! Longest Common Subsequence: the classic 2-D table.

use algotrace_common::{Action, Cell, State, Step, Trace, TraceObserver, Tracer, View};
use serde::{Deserialize, Serialize};

use crate::{Category, Difficulty, Instrumented};

/// Input of [`LongestCommonSubsequence`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LongestCommonSubsequenceInput {
    /// First string
    pub text1: String,
    /// Second string
    pub text2: String,
}

/// Length of the longest subsequence shared by two strings
#[derive(Debug, Clone, Copy, Default)]
pub struct LongestCommonSubsequence;

fn state(a: &[char], b: &[char], dp: &[Vec<usize>], focus: Cell, from: &[Cell]) -> State {
    State::new()
        .with_view(
            "dp",
            View::matrix(dp.iter().map(|row| row.iter().copied()))
                .with_cells([focus], from.iter().copied()),
        )
        .with_view("text1", View::array(a.iter().copied()))
        .with_view("text2", View::array(b.iter().copied()))
}

impl Instrumented for LongestCommonSubsequence {
    const ID: &'static str = "longest-common-subsequence";
    const NAME: &'static str = "Longest Common Subsequence";
    const CATEGORY: Category = Category::DynamicProgramming;
    const DIFFICULTY: Difficulty = Difficulty::Medium;
    const TIME_COMPLEXITY: &'static str = "O(m·n)";
    const SPACE_COMPLEXITY: &'static str = "O(m·n)";
    const LISTING: &'static str = include_str!("reference/longest_common_subsequence.rs");

    type Input = LongestCommonSubsequenceInput;

    fn default_input() -> Self::Input {
        LongestCommonSubsequenceInput { text1: "abcde".to_string(), text2: "ace".to_string() }
    }

    fn trace_observed(input: &Self::Input, observer: &mut dyn TraceObserver) -> Trace {
        let a: Vec<char> = input.text1.chars().collect();
        let b: Vec<char> = input.text2.chars().collect();
        let mut dp = vec![vec![0usize; b.len() + 1]; a.len() + 1];

        let mut tracer = Tracer::start(
            observer,
            Step::new(
                state(&a, &b, &dp, Cell(0, 0), &[]),
                4,
                format!("Build a {}×{} table of zeros", a.len() + 1, b.len() + 1),
            ),
        );

        for i in 1..=a.len() {
            for j in 1..=b.len() {
                let (x, y) = (a[i - 1], b[j - 1]);
                let same = x == y;
                tracer.record(
                    Step::new(
                        state(&a, &b, &dp, Cell(i, j), &[]),
                        7,
                        format!("Compare text1[{}] = '{x}' with text2[{}] = '{y}'", i - 1, j - 1),
                    )
                    .with_pointer("i", i as i64)
                    .with_pointer("j", j as i64)
                    .with_action(Action::Compare),
                );

                let (line, from, message) = if same {
                    dp[i][j] = dp[i - 1][j - 1] + 1;
                    (8, vec![Cell(i - 1, j - 1)], format!("Match, extend the diagonal: {}", dp[i][j]))
                } else {
                    dp[i][j] = dp[i - 1][j].max(dp[i][j - 1]);
                    (
                        10,
                        vec![Cell(i - 1, j), Cell(i, j - 1)],
                        format!("No match, keep the better neighbor: {}", dp[i][j]),
                    )
                };
                tracer.record(
                    Step::new(state(&a, &b, &dp, Cell(i, j), &from), line, message)
                        .with_pointer("i", i as i64)
                        .with_pointer("j", j as i64)
                        .with_action(Action::Insert),
                );
            }
        }

        let (m, n) = (a.len(), b.len());
        let length = dp[m][n];
        tracer.finish(
            Step::new(
                state(&a, &b, &dp, Cell(m, n), &[]),
                14,
                format!("The longest common subsequence has length {length}"),
            )
            .with_action(Action::Found),
            serde_json::json!(length),
        )
    }
}
