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

//! Kth Largest Element: keep a min-heap of the k largest values seen so far.
//!
//! The heap is array backed, which is exactly the tree view encoding, so the
//! primary view shows the heap as a binary tree while it is sifted.

use algotrace_common::{Action, Snapshot, State, Step, Trace, TraceObserver, Tracer, View};
use serde::{Deserialize, Serialize};

use crate::{Category, Difficulty, Instrumented};

/// Input of [`KthLargest`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KthLargestInput {
    /// Values to scan
    pub nums: Vec<i64>,
    /// Rank of the value to return, 1 being the largest
    pub k: usize,
}

/// Find the kth largest value with a bounded min-heap
#[derive(Debug, Clone, Copy, Default)]
pub struct KthLargest;

#[derive(Debug, Default)]
struct MinHeap {
    slots: Vec<i64>,
}

impl Snapshot for MinHeap {
    fn snapshot(&self) -> View {
        View::tree(self.slots.iter().copied())
    }
}

struct Run<'t, 'o> {
    tracer: &'t mut Tracer<'o>,
    nums: &'t [i64],
    k: usize,
    cursor: usize,
}

impl Run<'_, '_> {
    fn state(&self, heap: &MinHeap) -> State {
        State::new()
            .with_view("heap", heap.snapshot())
            .with_view("nums", View::array(self.nums.iter().copied()))
            .with_var("k", self.k)
            .with_var("size", heap.slots.len())
    }

    fn step(&self, heap: &MinHeap, line: usize, message: String) -> Step {
        Step::new(self.state(heap), line, message).with_pointer("i", self.cursor as i64)
    }

    fn record(&mut self, step: Step) {
        self.tracer.record(step);
    }

    fn push(&mut self, heap: &mut MinHeap, value: i64) {
        heap.slots.push(value);
        let mut child = heap.slots.len() - 1;
        let step = self
            .step(heap, 6, format!("Push {value} into the heap"))
            .with_highlights([child])
            .with_action(Action::Push);
        self.record(step);

        while child > 0 {
            let parent = (child - 1) / 2;
            let (c, p) = (heap.slots[child], heap.slots[parent]);
            let step = self
                .step(heap, 6, format!("Compare {c} with its parent {p}"))
                .with_highlights([child, parent])
                .with_action(Action::Compare);
            self.record(step);
            if c >= p {
                break;
            }
            heap.slots.swap(child, parent);
            let step = self
                .step(heap, 6, format!("{c} < {p}, sift {c} up"))
                .with_highlights([parent, child])
                .with_action(Action::Swap);
            self.record(step);
            child = parent;
        }
    }

    fn pop(&mut self, heap: &mut MinHeap) {
        let Some(last) = heap.slots.pop() else {
            return;
        };
        let removed = match heap.slots.first_mut() {
            Some(root) => std::mem::replace(root, last),
            None => last,
        };
        let step = self
            .step(heap, 8, format!("Heap holds more than {} values, remove the smallest {removed}", self.k))
            .with_highlights(if heap.slots.is_empty() { vec![] } else { vec![0] })
            .with_action(Action::Delete);
        self.record(step);

        let len = heap.slots.len();
        let mut parent = 0;
        loop {
            let (left, right) = (2 * parent + 1, 2 * parent + 2);
            if left >= len {
                break;
            }
            let smaller =
                if right < len && heap.slots[right] < heap.slots[left] { right } else { left };
            let (p, s) = (heap.slots[parent], heap.slots[smaller]);
            let step = self
                .step(heap, 8, format!("Compare {p} with its smaller child {s}"))
                .with_highlights([parent, smaller])
                .with_action(Action::Compare);
            self.record(step);
            if p <= s {
                break;
            }
            heap.slots.swap(parent, smaller);
            let step = self
                .step(heap, 8, format!("{p} > {s}, sift {p} down"))
                .with_highlights([smaller, parent])
                .with_action(Action::Swap);
            self.record(step);
            parent = smaller;
        }
    }
}

impl Instrumented for KthLargest {
    const ID: &'static str = "kth-largest";
    const NAME: &'static str = "Kth Largest Element in an Array";
    const CATEGORY: Category = Category::Heap;
    const DIFFICULTY: Difficulty = Difficulty::Medium;
    const TIME_COMPLEXITY: &'static str = "O(n log k)";
    const SPACE_COMPLEXITY: &'static str = "O(k)";
    const LISTING: &'static str = include_str!("reference/kth_largest.rs");

    type Input = KthLargestInput;

    fn default_input() -> Self::Input {
        KthLargestInput { nums: vec![3, 2, 1, 5, 6, 4], k: 2 }
    }

    fn trace_observed(input: &Self::Input, observer: &mut dyn TraceObserver) -> Trace {
        let KthLargestInput { nums, k } = input;
        let mut heap = MinHeap::default();

        let init = Step::new(
            State::new()
                .with_view("heap", heap.snapshot())
                .with_view("nums", View::array(nums.iter().copied()))
                .with_var("k", *k)
                .with_var("size", 0usize),
            4,
            format!("Create an empty min-heap that keeps the {k} largest values"),
        );
        let mut tracer = Tracer::start(observer, init);
        let mut run = Run { tracer: &mut tracer, nums, k: *k, cursor: 0 };

        for (i, &num) in nums.iter().enumerate() {
            run.cursor = i;
            run.push(&mut heap, num);

            let size = heap.slots.len();
            let over = size > *k;
            let step = run
                .step(&heap, 7, format!("Heap size {size} {} k = {k}", if over { ">" } else { "<=" }))
                .with_action(Action::Compare);
            run.record(step);
            if over {
                run.pop(&mut heap);
            }
        }
        let state = run.state(&heap);

        if *k == 0 || heap.slots.len() < *k {
            return tracer.finish(
                Step::new(state, 12, format!("Fewer than {k} values, there is no kth largest")),
                serde_json::Value::Null,
            );
        }
        let top = heap.slots[0];
        tracer.finish(
            Step::new(state, 14, format!("The heap root {top} is the {k}th largest value"))
                .with_highlights([0])
                .with_action(Action::Found),
            serde_json::json!(top),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heap_of(step: &Step) -> Vec<i64> {
        match step.state.primary() {
            Some(View::Tree { nodes }) => nodes.iter().filter_map(|node| node.as_int()).collect(),
            other => panic!("Expected tree view, got {other:?}"),
        }
    }

    #[test]
    fn test_default_scenario() {
        let trace = KthLargest::trace(&KthLargest::default_input());
        assert_eq!(trace.result(), Some(&serde_json::json!(5)));
        assert!(trace.validate(15).is_empty());
    }

    #[test]
    fn test_heap_property_holds_between_operations() {
        let input = KthLargestInput { nums: vec![9, 1, 8, 2, 7, 3, 6], k: 3 };
        let trace = KthLargest::trace(&input);
        for (_, step) in trace.steps_with(Action::Compare).filter(|(_, s)| s.code_line == 7) {
            let heap = heap_of(step);
            for child in 1..heap.len() {
                assert!(heap[(child - 1) / 2] <= heap[child], "heap {heap:?}");
            }
        }
        assert_eq!(trace.result(), Some(&serde_json::json!(7)));
    }

    #[test]
    fn test_k_out_of_range() {
        let trace = KthLargest::trace(&KthLargestInput { nums: vec![1, 2], k: 3 });
        assert_eq!(trace.result(), Some(&serde_json::Value::Null));
        let trace = KthLargest::trace(&KthLargestInput { nums: vec![1, 2], k: 0 });
        assert_eq!(trace.result(), Some(&serde_json::Value::Null));
    }
}
