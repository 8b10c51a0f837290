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

//! Word Search II: build a trie of the words, then walk the board with a
//! depth-first search that only follows prefixes present in the trie.

use std::collections::{BTreeMap, VecDeque};

use algotrace_common::{
    Action, Cell, Snapshot, State, Step, Trace, TraceObserver, Tracer, TrieNodeView, TrieView,
    View,
};
use serde::{Deserialize, Serialize};

use crate::{AlgorithmError, Category, Difficulty, Instrumented};

/// Input of [`WordSearchII`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSearchIIInput {
    /// Rectangular letter grid
    pub board: Vec<Vec<char>>,
    /// Candidate words
    pub words: Vec<String>,
}

/// Find every candidate word that can be traced on the board
#[derive(Debug, Clone, Copy, Default)]
pub struct WordSearchII;

#[derive(Debug, Default)]
struct TrieNode {
    label: Option<char>,
    children: BTreeMap<char, usize>,
    word: Option<String>,
}

/// Arena trie; node 0 is the root and ids never change
#[derive(Debug)]
struct Trie {
    nodes: Vec<TrieNode>,
}

impl Trie {
    fn new() -> Self {
        Self { nodes: vec![TrieNode::default()] }
    }
}

impl Snapshot for Trie {
    fn snapshot(&self) -> View {
        let mut levels: Vec<Vec<TrieNodeView>> = Vec::new();
        let mut children = BTreeMap::new();
        let mut frontier = VecDeque::from([(0usize, 0usize)]);
        while let Some((id, depth)) = frontier.pop_front() {
            let node = &self.nodes[id];
            if levels.len() <= depth {
                levels.push(Vec::new());
            }
            levels[depth].push(TrieNodeView {
                label: node.label.map(String::from).unwrap_or_default(),
                id,
            });
            if !node.children.is_empty() {
                let labels = node.children.keys().map(char::to_string).collect();
                children.insert(id.to_string(), labels);
            }
            frontier.extend(node.children.values().map(|&child| (child, depth + 1)));
        }
        View::Trie(TrieView { levels, children })
    }
}

struct Search<'t, 'o> {
    tracer: &'t mut Tracer<'o>,
    board: Vec<Vec<char>>,
    visited: Vec<Vec<bool>>,
    trie: Trie,
    path: Vec<Cell>,
    prefix: String,
    found: Vec<String>,
}

impl Search<'_, '_> {
    fn state(&self) -> State {
        let (focus, trail) = match self.path.split_last() {
            Some((last, rest)) => (vec![*last], rest.to_vec()),
            None => (Vec::new(), Vec::new()),
        };
        State::new()
            .with_view(
                "board",
                View::matrix(self.board.iter().map(|row| row.iter().copied()))
                    .with_cells(focus, trail),
            )
            .with_view("trie", self.trie.snapshot())
            .with_view("found", View::array(self.found.iter().map(String::as_str)))
            .with_var("prefix", self.prefix.as_str())
    }

    fn record(&mut self, line: usize, message: String, action: Action) {
        let step = Step::new(self.state(), line, message).with_action(action);
        self.tracer.record(step);
    }

    fn insert(&mut self, word: &str) {
        let mut node = 0;
        for c in word.chars() {
            let (child, message) = match self.trie.nodes[node].children.get(&c).copied() {
                Some(child) => (child, format!("\"{}\" already continues with '{c}'", self.prefix)),
                None => {
                    let child = self.trie.nodes.len();
                    self.trie.nodes.push(TrieNode { label: Some(c), ..TrieNode::default() });
                    self.trie.nodes[node].children.insert(c, child);
                    (child, format!("Add '{c}' to the trie"))
                }
            };
            node = child;
            self.prefix.push(c);
            self.record(14, message, Action::Insert);
        }
        self.trie.nodes[node].word = Some(word.to_string());
        self.record(16, format!("Mark the end of \"{word}\""), Action::Insert);
        self.prefix.clear();
    }

    fn compare(&mut self, r: usize, c: usize, line: usize, message: String) {
        let step = Step::new(self.state(), line, message)
            .with_pointer("row", r as i64)
            .with_pointer("col", c as i64)
            .with_action(Action::Compare);
        self.tracer.record(step);
    }

    fn dfs(&mut self, r: usize, c: usize, node: usize) {
        if self.visited[r][c] {
            self.compare(r, c, 29, format!("({r},{c}) is already on the path"));
            return;
        }
        let ch = self.board[r][c];
        self.path.push(Cell(r, c));
        let next = self.trie.nodes[node].children.get(&ch).copied();
        let message = match next {
            Some(_) => format!("\"{}{ch}\" is a prefix in the trie", self.prefix),
            None => format!("No word starts with \"{}{ch}\"", self.prefix),
        };
        self.compare(r, c, 30, message);

        let Some(next) = next else {
            self.path.pop();
            return;
        };

        self.prefix.push(ch);
        if let Some(word) = self.trie.nodes[next].word.take() {
            self.found.push(word.clone());
            let state = self.state().with_var("word", word.as_str());
            let step = Step::new(state, 34, format!("Found \"{word}\"")).with_action(Action::Found);
            self.tracer.record(step);
        }

        self.visited[r][c] = true;
        self.record(36, format!("Step onto ({r},{c}), prefix \"{}\"", self.prefix), Action::Push);

        let (rows, cols) = (self.board.len(), self.board[r].len());
        if r > 0 {
            self.dfs(r - 1, c, next);
        }
        if r + 1 < rows {
            self.dfs(r + 1, c, next);
        }
        if c > 0 {
            self.dfs(r, c - 1, next);
        }
        if c + 1 < cols {
            self.dfs(r, c + 1, next);
        }

        self.visited[r][c] = false;
        self.prefix.pop();
        self.path.pop();
        self.record(50, format!("Leave ({r},{c}), free '{ch}'"), Action::Pop);
    }
}

impl Instrumented for WordSearchII {
    const ID: &'static str = "word-search-ii";
    const NAME: &'static str = "Word Search II";
    const CATEGORY: Category = Category::Tries;
    const DIFFICULTY: Difficulty = Difficulty::Hard;
    const TIME_COMPLEXITY: &'static str = "O(m·n·4ᴸ)";
    const SPACE_COMPLEXITY: &'static str = "O(total word length)";
    const LISTING: &'static str = include_str!("reference/word_search_ii.rs");

    type Input = WordSearchIIInput;

    fn default_input() -> Self::Input {
        let rows = ["oaan", "etae", "ihkr", "iflv"];
        WordSearchIIInput {
            board: rows.iter().map(|row| row.chars().collect()).collect(),
            words: ["oath", "pea", "eat", "rain"].map(String::from).to_vec(),
        }
    }

    fn check(input: &Self::Input) -> Result<(), AlgorithmError> {
        let width = input.board.first().map_or(0, Vec::len);
        if input.board.iter().any(|row| row.len() != width) {
            return Err(AlgorithmError::MalformedInput(
                "board rows must all have the same length".into(),
            ));
        }
        Ok(())
    }

    fn trace_observed(input: &Self::Input, observer: &mut dyn TraceObserver) -> Trace {
        let mut tracer = Tracer::start(
            observer,
            Step::new(
                State::new()
                    .with_view(
                        "board",
                        View::matrix(input.board.iter().map(|row| row.iter().copied())),
                    )
                    .with_view("trie", Trie::new().snapshot())
                    .with_view("found", View::array(Vec::<String>::new()))
                    .with_var("prefix", ""),
                10,
                format!("Create an empty trie for {} word(s)", input.words.len()),
            ),
        );

        let mut search = Search {
            tracer: &mut tracer,
            board: input.board.clone(),
            visited: input.board.iter().map(|row| vec![false; row.len()]).collect(),
            trie: Trie::new(),
            path: Vec::new(),
            prefix: String::new(),
            found: Vec::new(),
        };
        for word in &input.words {
            search.insert(word);
        }
        for r in 0..search.board.len() {
            for c in 0..search.board[r].len() {
                search.dfs(r, c, 0);
            }
        }

        let state = search.state();
        let found = search.found;
        let message = format!("Found {} word(s)", found.len());
        tracer.finish(Step::new(state, 25, message).with_action(Action::Found), serde_json::json!(found))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn test_default_scenario() {
        let trace = WordSearchII::trace(&WordSearchII::default_input());
        let found: BTreeSet<String> =
            serde_json::from_value(trace.result().unwrap().clone()).unwrap();
        assert_eq!(found, BTreeSet::from(["oath".to_string(), "eat".to_string()]));

        let announced: BTreeSet<String> = trace
            .steps_with(Action::Found)
            .filter_map(|(_, step)| step.state.var("word").map(ToString::to_string))
            .collect();
        assert_eq!(announced, found);
    }

    #[test]
    fn test_trie_snapshot_levels() {
        let input = WordSearchIIInput { board: vec![vec!['a']], words: vec!["ab".into(), "ac".into()] };
        let trace = WordSearchII::trace(&input);
        match trace.terminal().unwrap().state.view("trie") {
            Some(View::Trie(trie)) => {
                assert_eq!(trie.levels.len(), 3);
                assert_eq!(trie.levels[2].len(), 2);
                assert_eq!(trie.children["1"], vec!["b".to_string(), "c".to_string()]);
            }
            other => panic!("Expected trie view, got {other:?}"),
        }
        assert_eq!(trace.result(), Some(&serde_json::json!([])));
    }

    #[test]
    fn test_ragged_board_rejected() {
        let err = WordSearchII::run(serde_json::json!({
            "board": [["a", "b"], ["c"]],
            "words": ["ab"]
        }))
        .unwrap_err();
        assert!(matches!(err, AlgorithmError::MalformedInput(_)));
    }

    #[test]
    fn test_path_is_restored() {
        let trace = WordSearchII::trace(&WordSearchII::default_input());
        assert_eq!(trace.steps_with(Action::Push).count(), trace.steps_with(Action::Pop).count());
        match trace.terminal().unwrap().state.primary() {
            Some(View::Matrix { rows, matrix_highlights, .. }) => {
                assert!(matrix_highlights.is_empty());
                let letters: Vec<String> =
                    WordSearchII::default_input().board.concat().iter().map(char::to_string).collect();
                assert_eq!(rows.concat().iter().map(ToString::to_string).collect::<Vec<_>>(), letters);
            }
            other => panic!("Expected matrix view, got {other:?}"),
        }
    }

    #[test]
    fn test_board_letters_are_never_path_markers() {
        let input = WordSearchIIInput {
            board: vec![vec!['#', 'a']],
            words: vec!["#a#".into(), "#a".into()],
        };
        let trace = WordSearchII::trace(&input);
        assert_eq!(trace.result(), Some(&serde_json::json!(["#a"])));
        assert!(trace.validate(51).is_empty());

        let revisits: Vec<&Step> = trace
            .iter()
            .filter(|step| step.message == "(0,0) is already on the path")
            .collect();
        assert_eq!(revisits.len(), 1);
        assert_eq!(revisits[0].code_line, 29);
    }
}
