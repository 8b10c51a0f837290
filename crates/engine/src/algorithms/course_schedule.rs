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

//! Course Schedule: Kahn's topological sort over the prerequisite graph.

use std::collections::VecDeque;

use algotrace_common::{
    Action, GraphEdge, GraphNode, GraphView, State, Step, Trace, TraceObserver, Tracer, View,
};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{AlgorithmError, Category, Difficulty, Instrumented};

/// Input of [`CourseSchedule`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseScheduleInput {
    /// Courses are numbered `0..num_courses`
    pub num_courses: usize,
    /// `[course, prerequisite]` pairs
    pub prerequisites: Vec<[usize; 2]>,
}

/// Decide whether every course can be finished
#[derive(Debug, Clone, Copy, Default)]
pub struct CourseSchedule;

struct Progress<'a> {
    input: &'a CourseScheduleInput,
    graph: Vec<Vec<usize>>,
    indegree: Vec<usize>,
    queue: VecDeque<usize>,
    taken: Vec<usize>,
    relaxed: Vec<(usize, usize)>,
}

impl Progress<'_> {
    fn state(&self) -> State {
        let graph = GraphView {
            nodes: (0..self.input.num_courses)
                .map(|id| GraphNode { id, label: id.to_string(), position: None })
                .collect(),
            edges: self
                .graph
                .iter()
                .enumerate()
                .flat_map(|(pre, courses)| {
                    courses.iter().map(move |&course| GraphEdge { from: pre, to: course, weight: None })
                })
                .collect(),
            directed: true,
            highlighted_nodes: self.taken.clone(),
            visited_edges: self.relaxed.clone(),
        };
        State::new()
            .with_view("graph", View::Graph(graph))
            .with_view(
                "unlocks",
                View::map(
                    self.graph
                        .iter()
                        .enumerate()
                        .filter(|(_, courses)| !courses.is_empty())
                        .map(|(pre, courses)| (pre, format!("[{}]", courses.iter().join(", ")))),
                ),
            )
            .with_view("queue", View::queue(self.queue.iter().copied()))
            .with_view("indegree", View::array(self.indegree.iter().copied()))
            .with_var("taken", self.taken.len())
    }
}

impl Instrumented for CourseSchedule {
    const ID: &'static str = "course-schedule";
    const NAME: &'static str = "Course Schedule";
    const CATEGORY: Category = Category::Graphs;
    const DIFFICULTY: Difficulty = Difficulty::Medium;
    const TIME_COMPLEXITY: &'static str = "O(V + E)";
    const SPACE_COMPLEXITY: &'static str = "O(V + E)";
    const LISTING: &'static str = include_str!("reference/course_schedule.rs");

    type Input = CourseScheduleInput;

    fn default_input() -> Self::Input {
        CourseScheduleInput {
            num_courses: 6,
            prerequisites: vec![[1, 0], [2, 0], [3, 1], [3, 2], [4, 3], [5, 4]],
        }
    }

    fn check(input: &Self::Input) -> Result<(), AlgorithmError> {
        match input.prerequisites.iter().flatten().find(|&&id| id >= input.num_courses) {
            Some(id) => Err(AlgorithmError::MalformedInput(format!(
                "course {id} is outside 0..{}",
                input.num_courses
            ))),
            None => Ok(()),
        }
    }

    fn trace_observed(input: &Self::Input, observer: &mut dyn TraceObserver) -> Trace {
        let n = input.num_courses;
        let mut progress = Progress {
            input,
            graph: vec![Vec::new(); n],
            indegree: vec![0; n],
            queue: VecDeque::new(),
            taken: Vec::new(),
            relaxed: Vec::new(),
        };

        let mut tracer = Tracer::start(
            observer,
            Step::new(progress.state(), 4, format!("Build the prerequisite graph of {n} courses")),
        );

        for &[course, pre] in &input.prerequisites {
            progress.graph[pre].push(course);
            tracer.record(
                Step::new(progress.state(), 7, format!("{pre} must come before {course}"))
                    .with_highlights([pre, course])
                    .with_action(Action::Insert),
            );
            progress.indegree[course] += 1;
            tracer.record(
                Step::new(
                    progress.state(),
                    8,
                    format!("Course {course} now waits on {} course(s)", progress.indegree[course]),
                )
                .with_highlights([course])
                .with_action(Action::Insert),
            );
        }

        progress.queue = (0..n).filter(|&c| progress.indegree[c] == 0).collect();
        let ready = progress.queue.iter().copied().collect::<Vec<_>>();
        tracer.record(
            Step::new(
                progress.state(),
                10,
                format!("Courses without prerequisites: [{}]", ready.iter().join(", ")),
            )
            .with_highlights(ready)
            .with_action(Action::Push),
        );

        while let Some(course) = progress.queue.pop_front() {
            progress.taken.push(course);
            tracer.record(
                Step::new(progress.state(), 12, format!("Take course {course}"))
                    .with_highlights([course])
                    .with_action(Action::Pop),
            );

            for &next in &progress.graph[course] {
                progress.indegree[next] -= 1;
                progress.relaxed.push((course, next));
                let remaining = progress.indegree[next];
                tracer.record(
                    Step::new(
                        progress.state(),
                        15,
                        format!("Finishing {course} leaves {next} with {remaining} prerequisite(s)"),
                    )
                    .with_highlights([next])
                    .with_secondary([course])
                    .with_action(Action::Visit),
                );
                if remaining == 0 {
                    progress.queue.push_back(next);
                    tracer.record(
                        Step::new(progress.state(), 17, format!("Course {next} is ready, enqueue it"))
                            .with_highlights([next])
                            .with_action(Action::Push),
                    );
                }
            }
        }

        let taken = progress.taken.len();
        let possible = taken == n;
        let terminal = if possible {
            Step::new(progress.state(), 21, format!("All {n} courses can be taken"))
                .with_action(Action::Found)
        } else {
            Step::new(
                progress.state(),
                21,
                format!("Only {taken} of {n} courses can be taken, the rest form a cycle"),
            )
        };
        tracer.finish(terminal, serde_json::json!(possible))
    }
}
