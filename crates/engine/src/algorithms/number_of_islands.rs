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

//! Number of Islands: breadth-first flood fill from every unvisited land cell.

use std::collections::VecDeque;

use algotrace_common::{Action, Cell, State, Step, Trace, TraceObserver, Tracer, View};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{Category, Difficulty, Instrumented};

const LAND: u8 = 1;

/// Input of [`NumberOfIslands`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberOfIslandsInput {
    /// `1` is land, anything else is water
    pub grid: Vec<Vec<u8>>,
}

/// Count 4-connected groups of land cells
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberOfIslands;

fn state(
    grid: &[Vec<u8>],
    visited: &[Vec<bool>],
    queue: &VecDeque<(usize, usize)>,
    count: usize,
    focus: &[Cell],
    around: &[Cell],
) -> State {
    State::new()
        .with_view(
            "grid",
            View::matrix(grid.iter().map(|row| row.iter().copied()))
                .with_cells(focus.iter().copied(), around.iter().copied()),
        )
        .with_view("visited", View::matrix(visited.iter().map(|row| row.iter().copied())))
        .with_view("queue", View::queue(queue.iter().map(|(r, c)| format!("({r},{c})"))))
        .with_var("count", count)
}

impl Instrumented for NumberOfIslands {
    const ID: &'static str = "number-of-islands";
    const NAME: &'static str = "Number of Islands";
    const CATEGORY: Category = Category::Graphs;
    const DIFFICULTY: Difficulty = Difficulty::Medium;
    const TIME_COMPLEXITY: &'static str = "O(m·n)";
    const SPACE_COMPLEXITY: &'static str = "O(min(m, n))";
    const LISTING: &'static str = include_str!("reference/number_of_islands.rs");

    type Input = NumberOfIslandsInput;

    fn default_input() -> Self::Input {
        NumberOfIslandsInput {
            grid: vec![
                vec![1, 1, 0, 0, 0],
                vec![1, 1, 0, 0, 0],
                vec![0, 0, 1, 0, 0],
                vec![0, 0, 0, 1, 1],
            ],
        }
    }

    fn trace_observed(input: &Self::Input, observer: &mut dyn TraceObserver) -> Trace {
        let grid = &input.grid;
        let mut visited: Vec<Vec<bool>> = grid.iter().map(|row| vec![false; row.len()]).collect();
        let mut queue = VecDeque::new();
        let mut count = 0;

        let mut tracer = Tracer::start(
            observer,
            Step::new(state(grid, &visited, &queue, count, &[], &[]), 5, "No islands counted yet"),
        );

        for r in 0..grid.len() {
            for c in 0..grid[r].len() {
                let here = [Cell(r, c)];
                let land = grid[r][c] == LAND && !visited[r][c];
                let verdict = match (grid[r][c] == LAND, visited[r][c]) {
                    (true, false) => "unvisited land",
                    (true, true) => "already part of an island",
                    _ => "water",
                };
                tracer.record(
                    Step::new(
                        state(grid, &visited, &queue, count, &here, &[]),
                        8,
                        format!("Cell ({r},{c}) is {verdict}"),
                    )
                    .with_pointer("row", r as i64)
                    .with_pointer("col", c as i64)
                    .with_action(Action::Visit),
                );
                if !land {
                    continue;
                }

                count += 1;
                tracer.record(
                    Step::new(
                        state(grid, &visited, &queue, count, &here, &[]),
                        11,
                        format!("({r},{c}) starts island #{count}"),
                    )
                    .with_action(Action::Found),
                );

                visited[r][c] = true;
                queue.push_back((r, c));
                tracer.record(
                    Step::new(
                        state(grid, &visited, &queue, count, &here, &[]),
                        13,
                        format!("Mark ({r},{c}) and enqueue it"),
                    )
                    .with_action(Action::Push),
                );

                while let Some((cr, cc)) = queue.pop_front() {
                    let neighbors: Vec<(usize, usize)> = [
                        (cr.wrapping_sub(1), cc),
                        (cr + 1, cc),
                        (cr, cc.wrapping_sub(1)),
                        (cr, cc + 1),
                    ]
                    .into_iter()
                    .filter(|&(nr, nc)| nr < grid.len() && nc < grid[nr].len())
                    .collect();
                    let around: Vec<Cell> = neighbors.iter().map(|&(nr, nc)| Cell(nr, nc)).collect();
                    tracer.record(
                        Step::new(
                            state(grid, &visited, &queue, count, &[Cell(cr, cc)], &around),
                            14,
                            format!(
                                "Dequeue ({cr},{cc}), inspect {}",
                                neighbors.iter().map(|(nr, nc)| format!("({nr},{nc})")).join(", ")
                            ),
                        )
                        .with_action(Action::Pop),
                    );

                    for (nr, nc) in neighbors {
                        if grid[nr][nc] != LAND || visited[nr][nc] {
                            continue;
                        }
                        visited[nr][nc] = true;
                        queue.push_back((nr, nc));
                        tracer.record(
                            Step::new(
                                state(grid, &visited, &queue, count, &[Cell(nr, nc)], &[Cell(cr, cc)]),
                                24,
                                format!("({nr},{nc}) is land next to ({cr},{cc}), mark and enqueue it"),
                            )
                            .with_action(Action::Push),
                        );
                    }
                }
            }
        }

        tracer.finish(
            Step::new(state(grid, &visited, &queue, count, &[], &[]), 30, format!("Counted {count} island(s)"))
                .with_action(Action::Found),
            serde_json::json!(count),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scenario() {
        let trace = NumberOfIslands::trace(&NumberOfIslands::default_input());
        assert_eq!(trace.result(), Some(&serde_json::json!(3)));
        // One "starts island" record per island plus the terminal
        assert_eq!(trace.steps_with(Action::Found).count(), 4);
        assert!(trace.validate(31).is_empty());
    }

    #[test]
    fn test_every_land_cell_enqueued_once() {
        let input = NumberOfIslandsInput { grid: vec![vec![1, 1, 1], vec![0, 1, 0], vec![1, 1, 1]] };
        let trace = NumberOfIslands::trace(&input);
        assert_eq!(trace.result(), Some(&serde_json::json!(1)));
        assert_eq!(trace.steps_with(Action::Push).count(), 7);
        assert_eq!(trace.steps_with(Action::Pop).count(), 7);
    }

    #[test]
    fn test_input_values_never_read_as_visited() {
        let input = NumberOfIslandsInput { grid: vec![vec![2, 1], vec![0, 2]] };
        let trace = NumberOfIslands::trace(&input);
        assert_eq!(trace.result(), Some(&serde_json::json!(1)));
        assert!(trace.iter().all(|step| !step.message.contains("already part")));
        assert!(trace.iter().any(|step| step.message == "Cell (0,0) is water"));
        match trace.terminal().unwrap().state.view("visited") {
            Some(View::Matrix { rows, .. }) => {
                assert_eq!(rows[0][1].to_string(), "true");
                assert_eq!(rows[1][1].to_string(), "false");
            }
            other => panic!("Expected visited matrix, got {other:?}"),
        }
        match trace.terminal().unwrap().state.primary() {
            Some(View::Matrix { rows, .. }) => assert_eq!(rows[0][0].to_string(), "2"),
            other => panic!("Expected grid matrix, got {other:?}"),
        }
    }

    #[test]
    fn test_ragged_and_empty_grids() {
        let trace = NumberOfIslands::trace(&NumberOfIslandsInput { grid: vec![] });
        assert_eq!(trace.result(), Some(&serde_json::json!(0)));

        let input = NumberOfIslandsInput { grid: vec![vec![1], vec![0, 1], vec![]] };
        let trace = NumberOfIslands::trace(&input);
        assert_eq!(trace.result(), Some(&serde_json::json!(2)));
        assert!(trace.validate(31).is_empty());
    }
}
