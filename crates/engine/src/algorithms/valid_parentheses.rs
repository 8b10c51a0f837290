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

//! Valid Parentheses: match every closer against the most recent opener.

use algotrace_common::{Action, State, Step, Trace, TraceObserver, Tracer, View};
use serde::{Deserialize, Serialize};

use crate::{Category, Difficulty, Instrumented};

/// Input of [`ValidParentheses`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidParenthesesInput {
    /// Bracket string
    pub s: String,
}

/// Decide whether a bracket string is balanced and properly nested
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidParentheses;

fn state(chars: &[char], stack: &[char]) -> State {
    State::new()
        .with_view("s", View::array(chars.iter().copied()))
        .with_view("stack", View::stack(stack.iter().copied()))
}

fn opener_for(closer: char) -> Option<char> {
    match closer {
        ')' => Some('('),
        ']' => Some('['),
        '}' => Some('{'),
        _ => None,
    }
}

impl Instrumented for ValidParentheses {
    const ID: &'static str = "valid-parentheses";
    const NAME: &'static str = "Valid Parentheses";
    const CATEGORY: Category = Category::Stack;
    const DIFFICULTY: Difficulty = Difficulty::Easy;
    const TIME_COMPLEXITY: &'static str = "O(n)";
    const SPACE_COMPLEXITY: &'static str = "O(n)";
    const LISTING: &'static str = include_str!("reference/valid_parentheses.rs");

    type Input = ValidParenthesesInput;

    fn default_input() -> Self::Input {
        ValidParenthesesInput { s: "{[()]}()".to_string() }
    }

    fn trace_observed(input: &Self::Input, observer: &mut dyn TraceObserver) -> Trace {
        let chars: Vec<char> = input.s.chars().collect();
        let mut stack: Vec<char> = Vec::new();

        let mut tracer =
            Tracer::start(observer, Step::new(state(&chars, &stack), 2, "Start with an empty stack"));

        for (i, &c) in chars.iter().enumerate() {
            if matches!(c, '(' | '[' | '{') {
                stack.push(c);
                tracer.record(
                    Step::new(state(&chars, &stack), 5, format!("Push opener '{c}'"))
                        .with_highlights([i])
                        .with_pointer("i", i as i64)
                        .with_action(Action::Push),
                );
                continue;
            }

            let Some(open) = opener_for(c) else {
                return tracer.finish(
                    Step::new(state(&chars, &stack), 16, format!("'{c}' is not a bracket"))
                        .with_highlights([i])
                        .with_pointer("i", i as i64),
                    serde_json::json!(false),
                );
            };

            match stack.pop() {
                Some(top) => {
                    tracer.record(
                        Step::new(
                            state(&chars, &stack),
                            12,
                            format!("Pop '{top}' and compare it with '{open}' expected by '{c}'"),
                        )
                        .with_highlights([i])
                        .with_pointer("i", i as i64)
                        .with_action(Action::Pop),
                    );
                    if top != open {
                        return tracer.finish(
                            Step::new(
                                state(&chars, &stack),
                                13,
                                format!("'{top}' does not close with '{c}'"),
                            )
                            .with_highlights([i])
                            .with_pointer("i", i as i64),
                            serde_json::json!(false),
                        );
                    }
                }
                None => {
                    return tracer.finish(
                        Step::new(
                            state(&chars, &stack),
                            13,
                            format!("Stack is empty, nothing for '{c}' to close"),
                        )
                        .with_highlights([i])
                        .with_pointer("i", i as i64)
                        .with_action(Action::Compare),
                        serde_json::json!(false),
                    );
                }
            }
        }

        let balanced = stack.is_empty();
        let terminal = if balanced {
            Step::new(state(&chars, &stack), 19, "Every opener was closed").with_action(Action::Found)
        } else {
            Step::new(
                state(&chars, &stack),
                19,
                format!("{} opener(s) left unclosed", stack.len()),
            )
        };
        tracer.finish(terminal, serde_json::json!(balanced))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(s: &str) -> Trace {
        ValidParentheses::trace(&ValidParenthesesInput { s: s.to_string() })
    }

    #[test]
    fn test_balanced() {
        let trace = run("{[()]}()");
        assert_eq!(trace.result(), Some(&serde_json::json!(true)));
        assert_eq!(trace.steps_with(Action::Push).count(), 4);
        assert_eq!(trace.steps_with(Action::Pop).count(), 4);
    }

    #[test]
    fn test_negatives_are_terminal_steps() {
        for s in ["(]", "(()", ")", "(a)"] {
            let trace = run(s);
            assert_eq!(trace.result(), Some(&serde_json::json!(false)), "input {s}");
        }
    }

    #[test]
    fn test_stack_view_tracks_depth() {
        let trace = run("((");
        match trace.terminal().unwrap().state.view("stack") {
            Some(View::Stack { values }) => assert_eq!(values.len(), 2),
            other => panic!("Expected stack view, got {other:?}"),
        }
    }
}
