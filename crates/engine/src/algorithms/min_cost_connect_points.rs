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

//! Min Cost to Connect All Points: Prim's algorithm on the complete
//! Manhattan-distance graph, using a dense `best` array instead of a heap.

use algotrace_common::{
    Action, GraphEdge, GraphNode, GraphView, Scalar, State, Step, Trace, TraceObserver, Tracer,
    View,
};
use serde::{Deserialize, Serialize};

use crate::{Category, Difficulty, Instrumented};

/// Input of [`MinCostConnectPoints`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinCostConnectPointsInput {
    /// `[x, y]` coordinates
    pub points: Vec<[i32; 2]>,
}

/// Minimum spanning tree cost over Manhattan distances
#[derive(Debug, Clone, Copy, Default)]
pub struct MinCostConnectPoints;

fn manhattan(a: [i32; 2], b: [i32; 2]) -> i64 {
    i64::from(a[0].abs_diff(b[0])) + i64::from(a[1].abs_diff(b[1]))
}

struct Prim<'a> {
    points: &'a [[i32; 2]],
    in_tree: Vec<bool>,
    best: Vec<i64>,
    parent: Vec<Option<usize>>,
    tree_edges: Vec<(usize, usize)>,
    total: i64,
}

impl Prim<'_> {
    fn state(&self) -> State {
        let n = self.points.len();
        let edges = (0..n)
            .flat_map(|u| (u + 1..n).map(move |v| (u, v)))
            .map(|(u, v)| GraphEdge {
                from: u,
                to: v,
                weight: Some(manhattan(self.points[u], self.points[v])),
            })
            .collect();
        let graph = GraphView {
            nodes: self
                .points
                .iter()
                .enumerate()
                .map(|(id, &[x, y])| GraphNode {
                    id,
                    label: format!("({x},{y})"),
                    position: Some((x.into(), y.into())),
                })
                .collect(),
            edges,
            directed: false,
            highlighted_nodes: (0..n).filter(|&v| self.in_tree[v]).collect(),
            visited_edges: self.tree_edges.clone(),
        };
        let best = self
            .best
            .iter()
            .map(|&cost| if cost == i64::MAX { Scalar::from("∞") } else { Scalar::from(cost) });
        State::new()
            .with_view("graph", View::Graph(graph))
            .with_view("best", View::array(best))
            .with_var("total", self.total)
    }
}

impl Instrumented for MinCostConnectPoints {
    const ID: &'static str = "min-cost-connect-points";
    const NAME: &'static str = "Min Cost to Connect All Points";
    const CATEGORY: Category = Category::Graphs;
    const DIFFICULTY: Difficulty = Difficulty::Medium;
    const TIME_COMPLEXITY: &'static str = "O(n²)";
    const SPACE_COMPLEXITY: &'static str = "O(n)";
    const LISTING: &'static str = include_str!("reference/min_cost_connect_points.rs");

    type Input = MinCostConnectPointsInput;

    fn default_input() -> Self::Input {
        MinCostConnectPointsInput { points: vec![[0, 0], [2, 2], [3, 10], [5, 2], [7, 0]] }
    }

    fn trace_observed(input: &Self::Input, observer: &mut dyn TraceObserver) -> Trace {
        let n = input.points.len();
        let mut prim = Prim {
            points: &input.points,
            in_tree: vec![false; n],
            best: vec![i64::MAX; n],
            parent: vec![None; n],
            tree_edges: Vec::new(),
            total: 0,
        };

        let mut tracer = Tracer::start(
            observer,
            Step::new(prim.state(), 3, format!("None of the {n} points is connected yet")),
        );

        if n > 0 {
            prim.best[0] = 0;
            tracer.record(
                Step::new(prim.state(), 7, "Grow the tree from point 0 at cost 0")
                    .with_highlights([0])
                    .with_action(Action::Insert),
            );
        }

        for _ in 0..n {
            let mut u = usize::MAX;
            for v in (0..n).filter(|&v| !prim.in_tree[v]) {
                let closer = u == usize::MAX || prim.best[v] < prim.best[u];
                let step = if u == usize::MAX {
                    Step::new(prim.state(), 12, format!("Point {v} is the first candidate"))
                        .with_highlights([v])
                } else {
                    Step::new(
                        prim.state(),
                        12,
                        format!(
                            "best[{v}] {} best[{u}]",
                            if closer { "<" } else { ">=" }
                        ),
                    )
                    .with_highlights([v])
                    .with_secondary([u])
                };
                tracer.record(step.with_action(Action::Compare));
                if closer {
                    u = v;
                }
            }

            prim.in_tree[u] = true;
            if let Some(p) = prim.parent[u] {
                prim.tree_edges.push((p, u));
            }
            tracer.record(
                Step::new(prim.state(), 16, format!("Connect point {u} to the tree"))
                    .with_highlights([u])
                    .with_action(Action::Insert),
            );

            prim.total += prim.best[u];
            tracer.record(
                Step::new(
                    prim.state(),
                    17,
                    format!("Pay {} for point {u}, total = {}", prim.best[u], prim.total),
                )
                .with_highlights([u]),
            );

            for v in 0..n {
                if prim.in_tree[v] {
                    continue;
                }
                let dist = manhattan(input.points[u], input.points[v]);
                let improves = dist < prim.best[v];
                tracer.record(
                    Step::new(
                        prim.state(),
                        20,
                        format!(
                            "dist({u}, {v}) = {dist} {} current best for {v}",
                            if improves { "beats" } else { "does not beat" }
                        ),
                    )
                    .with_highlights([v])
                    .with_secondary([u])
                    .with_action(Action::Compare),
                );
                if improves {
                    prim.best[v] = dist;
                    prim.parent[v] = Some(u);
                    tracer.record(
                        Step::new(prim.state(), 21, format!("best[{v}] = {dist} via point {u}"))
                            .with_highlights([v])
                            .with_action(Action::Insert),
                    );
                }
            }
        }

        let total = prim.total;
        tracer.finish(
            Step::new(prim.state(), 25, format!("All points connected, total cost {total}"))
                .with_action(Action::Found),
            serde_json::json!(total),
        )
    }
}
