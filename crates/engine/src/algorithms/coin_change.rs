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

//! Coin Change: bottom-up DP over amounts.

use algotrace_common::{Action, Scalar, State, Step, Trace, TraceObserver, Tracer, View};
use serde::{Deserialize, Serialize};

use crate::{AlgorithmError, Category, Difficulty, Instrumented};

/// Input of [`CoinChange`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinChangeInput {
    /// Positive coin denominations, each usable any number of times
    pub coins: Vec<usize>,
    /// Amount to make up
    pub amount: usize,
}

/// Fewest coins that make up an amount
#[derive(Debug, Clone, Copy, Default)]
pub struct CoinChange;

const UNREACHABLE: i64 = i64::MAX;

fn state(coins: &[usize], dp: &[i64], amount: usize) -> State {
    let dp = dp.iter().map(|&count| {
        if count == UNREACHABLE {
            Scalar::from("∞")
        } else {
            Scalar::from(count)
        }
    });
    State::new()
        .with_view("dp", View::array(dp))
        .with_view("coins", View::array(coins.iter().copied()))
        .with_var("amount", amount)
}

impl Instrumented for CoinChange {
    const ID: &'static str = "coin-change";
    const NAME: &'static str = "Coin Change";
    const CATEGORY: Category = Category::DynamicProgramming;
    const DIFFICULTY: Difficulty = Difficulty::Medium;
    const TIME_COMPLEXITY: &'static str = "O(amount · coins)";
    const SPACE_COMPLEXITY: &'static str = "O(amount)";
    const LISTING: &'static str = include_str!("reference/coin_change.rs");

    type Input = CoinChangeInput;

    fn default_input() -> Self::Input {
        CoinChangeInput { coins: vec![1, 5, 10, 25], amount: 11 }
    }

    fn check(input: &Self::Input) -> Result<(), AlgorithmError> {
        if input.coins.contains(&0) {
            return Err(AlgorithmError::MalformedInput("coin denominations must be positive".into()));
        }
        Ok(())
    }

    fn trace_observed(input: &Self::Input, observer: &mut dyn TraceObserver) -> Trace {
        let CoinChangeInput { coins, amount } = input;
        let amount = *amount;
        let mut dp = vec![UNREACHABLE; amount + 1];
        dp[0] = 0;

        let mut tracer = Tracer::start(
            observer,
            Step::new(
                state(coins, &dp, amount),
                3,
                "dp[0] = 0, every other amount starts unreachable",
            )
            .with_highlights([0])
            .with_action(Action::Insert),
        );

        for a in 1..=amount {
            for &coin in coins {
                let step = Step::new(state(coins, &dp, amount), 6, String::new())
                    .with_pointer("a", a as i64)
                    .with_action(Action::Compare);
                if coin > a {
                    tracer.record(Step {
                        message: format!("Coin {coin} is larger than {a}, skip it"),
                        ..step.with_highlights([a])
                    });
                    continue;
                }
                let rest = a - coin;
                if dp[rest] == UNREACHABLE {
                    tracer.record(Step {
                        message: format!("{rest} is unreachable, coin {coin} cannot help"),
                        ..step.with_highlights([a]).with_secondary([rest])
                    });
                    continue;
                }

                let candidate = dp[rest] + 1;
                let improves = candidate < dp[a];
                tracer.record(Step {
                    message: format!(
                        "dp[{rest}] + 1 = {candidate} {} dp[{a}]",
                        if improves { "improves" } else { "does not improve" }
                    ),
                    ..step.with_highlights([a]).with_secondary([rest])
                });
                if improves {
                    dp[a] = candidate;
                    tracer.record(
                        Step::new(
                            state(coins, &dp, amount),
                            7,
                            format!("dp[{a}] = {candidate} using coin {coin}"),
                        )
                        .with_highlights([a])
                        .with_pointer("a", a as i64)
                        .with_action(Action::Insert),
                    );
                }
            }
        }

        if dp[amount] == UNREACHABLE {
            return tracer.finish(
                Step::new(
                    state(coins, &dp, amount),
                    12,
                    format!("{amount} cannot be made from these coins"),
                )
                .with_highlights([amount]),
                serde_json::json!(-1),
            );
        }
        let fewest = dp[amount];
        tracer.finish(
            Step::new(state(coins, &dp, amount), 14, format!("{amount} needs at least {fewest} coin(s)"))
                .with_highlights([amount])
                .with_action(Action::Found),
            serde_json::json!(fewest),
        )
    }
}
