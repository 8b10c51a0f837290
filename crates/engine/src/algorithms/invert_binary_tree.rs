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

//! Invert Binary Tree: post-order traversal swapping every node's subtrees.
//!
//! The tree is kept in its array encoding. Before the run the input is
//! normalized: slots below an absent node are dropped and the array is padded
//! to whole levels, so mirroring a subtree never leaves its level.

use algotrace_common::{Action, State, Step, Trace, TraceObserver, Tracer, View};
use serde::{Deserialize, Serialize};

use crate::{Category, Difficulty, Instrumented};

/// Input of [`InvertBinaryTree`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvertBinaryTreeInput {
    /// Array encoding: slot `i` has children at `2i+1` and `2i+2`, `null` for no node
    pub root: Vec<Option<i64>>,
}

/// Mirror a binary tree
#[derive(Debug, Clone, Copy, Default)]
pub struct InvertBinaryTree;

/// Drop unreachable slots and pad to full levels
fn normalize(root: &[Option<i64>]) -> Vec<Option<i64>> {
    let mut slots: Vec<Option<i64>> = vec![None; root.len()];
    let mut deepest = None;
    for i in 0..root.len() {
        let reachable = i == 0 || slots[(i - 1) / 2].is_some();
        if reachable && root[i].is_some() {
            slots[i] = root[i];
            deepest = Some(i);
        }
    }
    let Some(deepest) = deepest else {
        return Vec::new();
    };
    let mut width = 1;
    while width - 1 <= deepest {
        width *= 2;
    }
    slots.resize(width - 1, None);
    slots
}

/// Exchange the whole subtrees rooted at `a` and `b`, level by level
fn swap_subtrees(slots: &mut [Option<i64>], a: usize, b: usize) {
    let mut span = 1;
    loop {
        let (start_a, start_b) = ((a + 1) * span - 1, (b + 1) * span - 1);
        if start_a >= slots.len() || start_b >= slots.len() {
            break;
        }
        for offset in 0..span {
            slots.swap(start_a + offset, start_b + offset);
        }
        span *= 2;
    }
}

fn trimmed(slots: &[Option<i64>]) -> Vec<Option<i64>> {
    let len = slots.iter().rposition(Option::is_some).map_or(0, |last| last + 1);
    slots[..len].to_vec()
}

fn state(slots: &[Option<i64>]) -> State {
    State::new().with_view("tree", View::tree(slots.iter().copied()))
}

fn invert(slots: &mut Vec<Option<i64>>, i: usize, tracer: &mut Tracer<'_>) {
    let Some(value) = slots.get(i).copied().flatten() else {
        return;
    };
    tracer.record(
        Step::new(state(slots), 8, format!("Visit node {value}"))
            .with_highlights([i])
            .with_action(Action::Visit),
    );

    let (left, right) = (2 * i + 1, 2 * i + 2);
    invert(slots, left, tracer);
    invert(slots, right, tracer);

    let has_children = slots.get(left).copied().flatten().is_some()
        || slots.get(right).copied().flatten().is_some();
    if has_children {
        swap_subtrees(slots, left, right);
        tracer.record(
            Step::new(state(slots), 11, format!("Swap the subtrees of {value}"))
                .with_highlights([i])
                .with_secondary([left, right])
                .with_action(Action::Swap),
        );
    }
}

impl Instrumented for InvertBinaryTree {
    const ID: &'static str = "invert-binary-tree";
    const NAME: &'static str = "Invert Binary Tree";
    const CATEGORY: Category = Category::Trees;
    const DIFFICULTY: Difficulty = Difficulty::Easy;
    const TIME_COMPLEXITY: &'static str = "O(n)";
    const SPACE_COMPLEXITY: &'static str = "O(h)";
    const LISTING: &'static str = include_str!("reference/invert_binary_tree.rs");

    type Input = InvertBinaryTreeInput;

    fn default_input() -> Self::Input {
        InvertBinaryTreeInput { root: [4, 2, 7, 1, 3, 6, 9].map(Some).to_vec() }
    }

    fn trace_observed(input: &Self::Input, observer: &mut dyn TraceObserver) -> Trace {
        let mut slots = normalize(&input.root);
        let mut tracer =
            Tracer::start(observer, Step::new(state(&slots), 7, "Start inverting at the root"));

        invert(&mut slots, 0, &mut tracer);

        let result = trimmed(&slots);
        let highlights: Vec<usize> = if slots.is_empty() { vec![] } else { vec![0] };
        tracer.finish(
            Step::new(state(&slots), 13, "Every subtree is mirrored")
                .with_highlights(highlights)
                .with_action(Action::Found),
            serde_json::json!(result),
        )
    }
}
