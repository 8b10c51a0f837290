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

//! State snapshot schema.
//!
//! Every structural family an algorithm may want to show (linear sequences,
//! associative tables, matrices, graphs, trees, linked lists and tries) has
//! exactly one representation here. A [`State`] is an ordered list of named
//! [`View`]s; the first one is the *primary* view that step highlights index
//! into.
//!
//! All types in this module own their data. Building a view always copies out
//! of the algorithm's working containers, so a recorded step can never observe
//! a later mutation.

use std::{collections::BTreeMap, fmt};

use derive_more::From;
use serde::{Deserialize, Serialize};

/// A primitive, render-ready value stored in a view cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, From)]
#[serde(untagged)]
pub enum Scalar {
    /// Absent value (e.g. a missing tree node)
    Null(()),
    /// Boolean flag
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Floating point number
    Float(f64),
    /// Text, including single characters and stringified values
    Text(String),
}

impl Scalar {
    /// The null scalar
    pub const NULL: Self = Self::Null(());

    /// Check whether this scalar is null
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null(()))
    }

    /// Integer content, if any
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null(()) => write!(f, "null"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "{v}"),
        }
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Self::Int(value.into())
    }
}

impl From<u8> for Scalar {
    fn from(value: u8) -> Self {
        Self::Int(value.into())
    }
}

impl From<usize> for Scalar {
    fn from(value: usize) -> Self {
        i64::try_from(value).map(Self::Int).unwrap_or_else(|_| Self::Text(value.to_string()))
    }
}

impl From<char> for Scalar {
    fn from(value: char) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl<T: Into<Self>> From<Option<T>> for Scalar {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::NULL, Into::into)
    }
}

/// A highlight target: a position in an indexed view or a key in a map view
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Key {
    /// Position in an array, stack, queue, tree slot, list or graph node id
    Index(usize),
    /// Key in a map view
    Name(String),
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        Self::Index(value)
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Self::Name(value)
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Self::Name(value.to_owned())
    }
}

/// A `(row, column)` coordinate inside a matrix view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell(pub usize, pub usize);

/// One entry of a map view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapEntry {
    /// Stringified key
    pub key: String,
    /// Primitive or stringified value
    pub value: Scalar,
}

/// A node of a graph view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Node id, equal to its index in [`GraphView::nodes`]
    pub id: usize,
    /// Display label
    pub label: String,
    /// Optional layout hint taken from the problem input (e.g. point coordinates)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<(i64, i64)>,
}

/// An edge of a graph view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    /// Source node id
    pub from: usize,
    /// Target node id
    pub to: usize,
    /// Optional edge weight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
}

/// Graph snapshot: structure rebuilt from the problem input plus the
/// traversal history accumulated so far
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphView {
    /// All nodes of the graph
    pub nodes: Vec<GraphNode>,
    /// All edges of the graph
    pub edges: Vec<GraphEdge>,
    /// Whether edges are directed
    pub directed: bool,
    /// Nodes reached so far
    #[serde(default)]
    pub highlighted_nodes: Vec<usize>,
    /// Edges traversed so far, as `(from, to)` pairs
    #[serde(default)]
    pub visited_edges: Vec<(usize, usize)>,
}

/// A trie node as seen by the renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrieNodeView {
    /// Edge label leading into this node (empty for the root)
    pub label: String,
    /// Stable node id
    pub id: usize,
}

/// Trie snapshot: breadth-first levels plus per-node child labels
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrieView {
    /// Nodes grouped by depth, root level first
    pub levels: Vec<Vec<TrieNodeView>>,
    /// Node id (stringified) to the labels of its direct children
    pub children: BTreeMap<String, Vec<String>>,
}

/// A linked-list node with a stable synthetic identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListNodeView {
    /// Node payload
    pub value: Scalar,
    /// Identity assigned once at construction
    pub id: usize,
}

/// One structural family of visualizable data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum View {
    /// Plain ordered sequence (arrays, char sequences, DP rows)
    Array {
        /// Elements in order
        values: Vec<Scalar>,
    },
    /// LIFO sequence, bottom first
    Stack {
        /// Elements from bottom to top
        values: Vec<Scalar>,
    },
    /// FIFO sequence, front first
    Queue {
        /// Elements from front to back
        values: Vec<Scalar>,
    },
    /// String-keyed table, fully re-serialized each step
    Map {
        /// Entries in display order
        entries: Vec<MapEntry>,
    },
    /// Rows of cells with coordinate highlights
    Matrix {
        /// Matrix rows
        rows: Vec<Vec<Scalar>>,
        /// Cells in focus
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        matrix_highlights: Vec<Cell>,
        /// Cells in a secondary role
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        matrix_secondary: Vec<Cell>,
    },
    /// Nodes and edges
    Graph(GraphView),
    /// Array-backed binary tree: slot `i` has children at `2i+1` and `2i+2`
    Tree {
        /// Tree slots, null where no node exists
        nodes: Vec<Scalar>,
    },
    /// Linked list nodes in traversal order
    LinkedList {
        /// Nodes with stable ids
        nodes: Vec<ListNodeView>,
    },
    /// Leveled trie
    Trie(TrieView),
}

impl View {
    /// Build an array view
    pub fn array<T: Into<Scalar>>(values: impl IntoIterator<Item = T>) -> Self {
        Self::Array { values: values.into_iter().map(Into::into).collect() }
    }

    /// Build a stack view (bottom first)
    pub fn stack<T: Into<Scalar>>(values: impl IntoIterator<Item = T>) -> Self {
        Self::Stack { values: values.into_iter().map(Into::into).collect() }
    }

    /// Build a queue view (front first)
    pub fn queue<T: Into<Scalar>>(values: impl IntoIterator<Item = T>) -> Self {
        Self::Queue { values: values.into_iter().map(Into::into).collect() }
    }

    /// Build a map view, stringifying every key
    pub fn map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: ToString,
        V: Into<Scalar>,
    {
        Self::Map {
            entries: entries
                .into_iter()
                .map(|(key, value)| MapEntry { key: key.to_string(), value: value.into() })
                .collect(),
        }
    }

    /// Build a matrix view without highlights
    pub fn matrix<R, T>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = T>,
        T: Into<Scalar>,
    {
        Self::Matrix {
            rows: rows.into_iter().map(|row| row.into_iter().map(Into::into).collect()).collect(),
            matrix_highlights: Vec::new(),
            matrix_secondary: Vec::new(),
        }
    }

    /// Attach coordinate highlights to a matrix view; no-op for other kinds
    pub fn with_cells(
        mut self,
        highlights: impl IntoIterator<Item = Cell>,
        secondary: impl IntoIterator<Item = Cell>,
    ) -> Self {
        if let Self::Matrix { matrix_highlights, matrix_secondary, .. } = &mut self {
            *matrix_highlights = highlights.into_iter().collect();
            *matrix_secondary = secondary.into_iter().collect();
        }
        self
    }

    /// Build a tree view from array-encoded slots
    pub fn tree<T: Into<Scalar>>(slots: impl IntoIterator<Item = T>) -> Self {
        Self::Tree { nodes: slots.into_iter().map(Into::into).collect() }
    }

    /// Build a linked-list view from `(value, id)` pairs
    pub fn linked_list<T: Into<Scalar>>(nodes: impl IntoIterator<Item = (T, usize)>) -> Self {
        Self::LinkedList {
            nodes: nodes
                .into_iter()
                .map(|(value, id)| ListNodeView { value: value.into(), id })
                .collect(),
        }
    }

    /// The `kind` tag this view serializes with
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Array { .. } => "array",
            Self::Stack { .. } => "stack",
            Self::Queue { .. } => "queue",
            Self::Map { .. } => "map",
            Self::Matrix { .. } => "matrix",
            Self::Graph(_) => "graph",
            Self::Tree { .. } => "tree",
            Self::LinkedList { .. } => "linkedList",
            Self::Trie(_) => "trie",
        }
    }

    /// Number of index-addressable elements, or `None` for views that are
    /// not addressed by flat indices (maps, matrices, tries)
    pub fn indexable_len(&self) -> Option<usize> {
        match self {
            Self::Array { values } | Self::Stack { values } | Self::Queue { values } => {
                Some(values.len())
            }
            Self::Tree { nodes } => Some(nodes.len()),
            Self::LinkedList { nodes } => Some(nodes.len()),
            Self::Graph(graph) => Some(graph.nodes.len()),
            Self::Map { .. } | Self::Matrix { .. } | Self::Trie(_) => None,
        }
    }
}

/// Types that can copy themselves out into a render-ready [`View`]
pub trait Snapshot {
    /// Produce an owned view of the current contents
    fn snapshot(&self) -> View;
}

/// A view together with the name the renderer labels it with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedView {
    /// Label, e.g. `nums`, `seen`, `dp`
    pub name: String,
    /// The view itself
    pub view: View,
}

/// Snapshot of all visualizable data at one instant
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct State {
    /// Views in display order; the first one is the primary view
    pub views: Vec<NamedView>,
    /// Scalar variables the narrative refers to
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub variables: BTreeMap<String, Scalar>,
    /// Final answer, present only on the terminal step
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
}

impl State {
    /// Create an empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a named view
    pub fn with_view(mut self, name: impl Into<String>, view: View) -> Self {
        self.views.push(NamedView { name: name.into(), view });
        self
    }

    /// Set a scalar variable
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    /// The primary view, if any
    pub fn primary(&self) -> Option<&View> {
        self.views.first().map(|named| &named.view)
    }

    /// Look up a view by name
    pub fn view(&self, name: &str) -> Option<&View> {
        self.views.iter().find(|named| named.name == name).map(|named| &named.view)
    }

    /// Look up a variable by name
    pub fn var(&self, name: &str) -> Option<&Scalar> {
        self.variables.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_conversions() {
        assert_eq!(Scalar::from(3), Scalar::Int(3));
        assert_eq!(Scalar::from(7usize), Scalar::Int(7));
        assert_eq!(Scalar::from('x'), Scalar::Text("x".to_string()));
        assert_eq!(Scalar::from(None::<i64>), Scalar::NULL);
        assert_eq!(Scalar::from(Some(true)), Scalar::Bool(true));
        assert!(Scalar::NULL.is_null());
    }

    #[test]
    fn test_scalar_untagged_serialization() {
        let values = vec![Scalar::NULL, Scalar::Int(-4), Scalar::from("a"), Scalar::Bool(false)];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"[null,-4,"a",false]"#);

        let back: Vec<Scalar> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, values);
    }

    #[test]
    fn test_view_kind_tag() {
        let view = View::array([1, 2, 3]);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["kind"], "array");
        assert_eq!(json["values"], serde_json::json!([1, 2, 3]));

        let list = View::linked_list([(1, 10), (2, 11)]);
        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json["kind"], "linkedList");
        assert_eq!(json["nodes"][1]["id"], 11);
    }

    #[test]
    fn test_matrix_cells_serialize_camel_case() {
        let view = View::matrix([[1, 0], [0, 1]]).with_cells([Cell(0, 0)], [Cell(1, 1)]);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["matrixHighlights"], serde_json::json!([[0, 0]]));
        assert_eq!(json["matrixSecondary"], serde_json::json!([[1, 1]]));

        // Empty highlight sets are omitted entirely
        let plain = serde_json::to_value(View::matrix([[1]])).unwrap();
        assert!(plain.get("matrixHighlights").is_none());
    }

    #[test]
    fn test_with_cells_ignores_non_matrix() {
        let view = View::array([1]).with_cells([Cell(0, 0)], []);
        assert_eq!(view, View::array([1]));
    }

    #[test]
    fn test_map_view_stringifies_keys() {
        let view = View::map([(2, 0usize), (7, 1usize)]);
        match view {
            View::Map { entries } => {
                assert_eq!(entries[0].key, "2");
                assert_eq!(entries[1].value, Scalar::Int(1));
            }
            other => panic!("Expected map view, got {}", other.kind()),
        }
    }

    #[test]
    fn test_indexable_len() {
        assert_eq!(View::tree([Some(1), None, Some(3)]).indexable_len(), Some(3));
        assert_eq!(View::map([("a", 1)]).indexable_len(), None);
        assert_eq!(View::matrix([[1, 2]]).indexable_len(), None);
    }

    #[test]
    fn test_state_round_trip() {
        let state = State::new()
            .with_view("nums", View::array([2, 7]))
            .with_view("seen", View::map([("2", 0)]))
            .with_var("target", 9);

        assert_eq!(state.primary(), Some(&View::array([2, 7])));
        assert!(state.view("seen").is_some());
        assert_eq!(state.var("target"), Some(&Scalar::Int(9)));

        let json = serde_json::to_string(&state).unwrap();
        assert!(!json.contains("result"));
        let back: State = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
