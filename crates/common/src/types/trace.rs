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

use std::{collections::BTreeMap, ops::Deref};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Action, Cell, Key, Step, View};

/// Trace representation: the ordered Step Records of one algorithm run.
///
/// A trace is read-only once built. It is produced by [`crate::Tracer`] and
/// owned by the caller afterwards; only shared access to its steps is exposed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace {
    inner: Vec<Step>,
}

impl Deref for Trace {
    type Target = [Step];

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

// IntoIterator for owned Trace (moves out its contents)
impl IntoIterator for Trace {
    type Item = Step;
    type IntoIter = std::vec::IntoIter<Step>;
    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

// IntoIterator for &Trace (shared iteration)
impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;
    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl Trace {
    pub(crate) fn from_steps(inner: Vec<Step>) -> Self {
        Self { inner }
    }

    /// Convert trace to serde_json::Value for serialization to a front end
    pub fn to_json_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Get the number of steps
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if the trace is empty
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// The terminal step
    pub fn terminal(&self) -> Option<&Step> {
        self.inner.last()
    }

    /// The final answer carried by the terminal step
    pub fn result(&self) -> Option<&serde_json::Value> {
        self.terminal().and_then(Step::result)
    }

    /// Iterate over the steps tagged with `action`
    pub fn steps_with(&self, action: Action) -> impl Iterator<Item = (usize, &Step)> + '_ {
        self.inner.iter().enumerate().filter(move |(_, step)| step.is(action))
    }

    /// Consume the trace, returning its steps
    pub fn into_steps(self) -> Vec<Step> {
        self.inner
    }

    /// Get statistics about how actions are distributed over the trace
    pub fn stats(&self) -> TraceStats {
        let mut actions = BTreeMap::new();
        let mut untagged = 0;
        for step in &self.inner {
            match step.action {
                Some(action) => *actions.entry(action).or_insert(0) += 1,
                None => untagged += 1,
            }
        }
        let max_code_line = self.inner.iter().map(|step| step.code_line).max().unwrap_or(0);
        TraceStats { total_steps: self.inner.len(), actions, untagged, max_code_line }
    }

    /// Check the structural invariants every trace must satisfy.
    ///
    /// `reference_lines` is the number of lines of the reference listing the
    /// `codeLine` values point into. An empty result means the trace is valid.
    pub fn validate(&self, reference_lines: usize) -> Vec<TraceViolation> {
        let mut violations = Vec::new();

        let Some(last) = self.inner.last() else {
            violations.push(TraceViolation::Empty);
            return violations;
        };
        if last.result().is_none() {
            violations.push(TraceViolation::MissingResult);
        }

        for (index, step) in self.inner.iter().enumerate() {
            if index + 1 < self.inner.len() && step.result().is_some() {
                violations.push(TraceViolation::EarlyResult { index });
            }
            if step.code_line == 0 || step.code_line > reference_lines {
                violations.push(TraceViolation::CodeLineOutOfRange {
                    index,
                    line: step.code_line,
                    max: reference_lines,
                });
            }
            violations.extend(check_highlights(index, step));
            for named in &step.state.views {
                violations.extend(check_view(index, &named.name, &named.view));
            }
        }

        violations
    }
}

fn check_highlights(index: usize, step: &Step) -> Vec<TraceViolation> {
    let Some(len) = step.state.primary().and_then(View::indexable_len) else {
        return Vec::new();
    };
    step.highlights
        .iter()
        .chain(step.secondary.iter().flatten())
        .filter_map(|key| match key {
            Key::Index(position) if *position >= len => {
                Some(TraceViolation::HighlightOutOfRange { index, position: *position, len })
            }
            _ => None,
        })
        .collect()
}

fn check_view(index: usize, name: &str, view: &View) -> Vec<TraceViolation> {
    match view {
        View::Matrix { rows, matrix_highlights, matrix_secondary } => matrix_highlights
            .iter()
            .chain(matrix_secondary)
            .filter(|Cell(r, c)| rows.get(*r).is_none_or(|row| *c >= row.len()))
            .map(|cell| TraceViolation::CellOutOfRange {
                index,
                view: name.to_string(),
                cell: *cell,
            })
            .collect(),
        View::Graph(graph) => {
            let len = graph.nodes.len();
            graph
                .highlighted_nodes
                .iter()
                .copied()
                .chain(graph.visited_edges.iter().flat_map(|(from, to)| [*from, *to]))
                .chain(graph.edges.iter().flat_map(|edge| [edge.from, edge.to]))
                .filter(|node| *node >= len)
                .map(|node| TraceViolation::UnknownNode {
                    index,
                    view: name.to_string(),
                    node,
                })
                .collect()
        }
        _ => Vec::new(),
    }
}

/// A broken trace invariant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraceViolation {
    /// The trace has no steps at all
    #[error("trace is empty")]
    Empty,
    /// The terminal step does not carry a result
    #[error("terminal step carries no result")]
    MissingResult,
    /// A non-terminal step carries a result
    #[error("step {index} carries a result but is not the terminal step")]
    EarlyResult {
        /// Offending step
        index: usize,
    },
    /// A code line points outside the reference listing
    #[error("step {index} points at line {line}, listing has {max} lines")]
    CodeLineOutOfRange {
        /// Offending step
        index: usize,
        /// The code line recorded
        line: usize,
        /// Number of lines in the listing
        max: usize,
    },
    /// A highlight indexes past the end of the primary view
    #[error("step {index} highlights position {position}, primary view has {len} elements")]
    HighlightOutOfRange {
        /// Offending step
        index: usize,
        /// The highlighted position
        position: usize,
        /// Length of the primary view
        len: usize,
    },
    /// A matrix highlight lies outside the matrix
    #[error("step {index} highlights cell {cell:?} outside matrix `{view}`")]
    CellOutOfRange {
        /// Offending step
        index: usize,
        /// View name
        view: String,
        /// The highlighted cell
        cell: Cell,
    },
    /// A graph view references a node id that does not exist
    #[error("step {index} references unknown node {node} in graph `{view}`")]
    UnknownNode {
        /// Offending step
        index: usize,
        /// View name
        view: String,
        /// The node id
        node: usize,
    },
}

/// Statistics about a trace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceStats {
    /// Total number of steps
    pub total_steps: usize,
    /// Number of steps per action tag
    pub actions: BTreeMap<Action, usize>,
    /// Number of steps without an action tag
    pub untagged: usize,
    /// Highest code line referenced
    pub max_code_line: usize,
}

// Pretty print for Trace
impl Trace {
    /// Print a summary of the trace with per-action statistics
    pub fn print_summary(&self) {
        println!();
        println!(
            "\x1b[36m╔══════════════════════════════════════════════════════════════════╗\x1b[0m"
        );
        println!(
            "\x1b[36m║                        EXECUTION TRACE                           ║\x1b[0m"
        );
        println!(
            "\x1b[36m╚══════════════════════════════════════════════════════════════════╝\x1b[0m"
        );
        println!();

        if self.inner.is_empty() {
            println!("  \x1b[90mNo steps were recorded\x1b[0m");
            return;
        }

        let stats = self.stats();
        println!("\x1b[33m📊 Overall Statistics:\x1b[0m");
        println!("  Total steps: \x1b[32m{}\x1b[0m", stats.total_steps);
        for (action, count) in &stats.actions {
            println!(
                "  └─ {action:<8} \x1b[32m{count}\x1b[0m ({:.1}%)",
                *count as f64 / stats.total_steps as f64 * 100.0
            );
        }
        if stats.untagged > 0 {
            println!("  └─ untagged \x1b[32m{}\x1b[0m", stats.untagged);
        }

        if let Some(result) = self.result() {
            println!();
            println!("\x1b[33m🎯 Result:\x1b[0m {result}");
        }
        if let Some(last) = self.terminal() {
            println!("\x1b[90m  {}\x1b[0m", last.message);
        }
        println!(
            "\x1b[36m══════════════════════════════════════════════════════════════════\x1b[0m"
        );
    }
}
