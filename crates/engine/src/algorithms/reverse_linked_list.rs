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

//! Reverse Linked List: iterative relinking with `prev` and `curr` cursors.

use algotrace_common::{Action, Snapshot, State, Step, Trace, TraceObserver, Tracer, View};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{Category, Difficulty, Instrumented};

/// Input of [`ReverseLinkedList`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReverseLinkedListInput {
    /// Node values from head to tail
    pub head: Vec<i64>,
}

/// Reverse a singly linked list in place
#[derive(Debug, Clone, Copy, Default)]
pub struct ReverseLinkedList;

/// Arena-backed list; a node's id is its position in the input
#[derive(Debug)]
struct Arena {
    values: Vec<i64>,
    next: Vec<Option<usize>>,
    prev: Option<usize>,
    curr: Option<usize>,
}

impl Arena {
    fn new(values: &[i64]) -> Self {
        let next = (0..values.len()).map(|id| (id + 1 < values.len()).then_some(id + 1)).collect();
        Self { values: values.to_vec(), next, prev: None, curr: (!values.is_empty()).then_some(0) }
    }

    fn chain(&self, mut node: Option<usize>) -> Vec<usize> {
        let mut ids = Vec::new();
        while let Some(id) = node {
            ids.push(id);
            node = self.next[id];
        }
        ids
    }

    /// Display order: the reversed part first, then the untouched rest
    fn order(&self) -> Vec<usize> {
        let mut ids = self.chain(self.prev);
        ids.extend(self.chain(self.curr));
        ids
    }

    fn position(&self, id: Option<usize>) -> Option<usize> {
        let id = id?;
        self.order().iter().position(|&other| other == id)
    }
}

impl Snapshot for Arena {
    fn snapshot(&self) -> View {
        View::linked_list(self.order().into_iter().map(|id| (self.values[id], id)))
    }
}

fn step(list: &Arena, line: usize, message: String) -> Step {
    let mut step = Step::new(State::new().with_view("list", list.snapshot()), line, message);
    if let Some(prev) = list.position(list.prev) {
        step = step.with_pointer("prev", prev as i64);
    }
    if let Some(curr) = list.position(list.curr) {
        step = step.with_pointer("curr", curr as i64);
    }
    step
}

impl Instrumented for ReverseLinkedList {
    const ID: &'static str = "reverse-linked-list";
    const NAME: &'static str = "Reverse Linked List";
    const CATEGORY: Category = Category::LinkedList;
    const DIFFICULTY: Difficulty = Difficulty::Easy;
    const TIME_COMPLEXITY: &'static str = "O(n)";
    const SPACE_COMPLEXITY: &'static str = "O(1)";
    const LISTING: &'static str = include_str!("reference/reverse_linked_list.rs");

    type Input = ReverseLinkedListInput;

    fn default_input() -> Self::Input {
        ReverseLinkedListInput { head: vec![1, 2, 3, 4, 5] }
    }

    fn trace_observed(input: &Self::Input, observer: &mut dyn TraceObserver) -> Trace {
        let mut list = Arena::new(&input.head);
        let mut tracer =
            Tracer::start(observer, step(&list, 7, "prev starts empty, curr at the head".to_string()));

        while let Some(node) = list.curr {
            let value = list.values[node];
            let visit = step(&list, 8, format!("Visit node {value}"));
            let position = list.position(Some(node)).unwrap_or_default();
            tracer.record(visit.with_highlights([position]).with_action(Action::Visit));

            let rest = list.next[node];
            list.next[node] = list.prev;
            // The relinked node now heads the reversed part
            let target = list.prev.map(|id| list.values[id].to_string());
            list.prev = Some(node);
            list.curr = rest;
            let message = match target {
                Some(target) => format!("Point {value} back at {target}"),
                None => format!("{value} becomes the new tail"),
            };
            tracer.record(step(&list, 10, message).with_highlights([0]).with_action(Action::Insert));
        }

        let reversed: Vec<i64> = list.chain(list.prev).into_iter().map(|id| list.values[id]).collect();
        let highlights = if reversed.is_empty() { vec![] } else { vec![0] };
        tracer.finish(
            step(&list, 13, format!("prev is the new head: {}", reversed.iter().join(" -> ")))
                .with_highlights(highlights)
                .with_action(Action::Found),
            serde_json::json!(reversed),
        )
    }
}
