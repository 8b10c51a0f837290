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

//! The Step Record: one point-in-time frame of an execution trace.

use std::{collections::BTreeMap, fmt};

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::types::{Key, State};

/// Closed classification of a step's semantic effect.
///
/// Renderers use this purely for styling; it never drives algorithm logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Two or more elements are compared, or a branch decision is taken
    #[display("compare")]
    Compare,
    /// Two elements exchange positions
    #[display("swap")]
    Swap,
    /// A value is written into a container
    #[display("insert")]
    Insert,
    /// A value is removed from a container
    #[display("delete")]
    Delete,
    /// An answer (or part of one) has been found
    #[display("found")]
    Found,
    /// An element, node or cell is visited
    #[display("visit")]
    Visit,
    /// A value is pushed onto a stack/queue or a search choice is made
    #[display("push")]
    Push,
    /// A value is popped or a search choice is undone
    #[display("pop")]
    Pop,
}

impl Action {
    /// All actions, in declaration order
    pub const ALL: [Self; 8] = [
        Self::Compare,
        Self::Swap,
        Self::Insert,
        Self::Delete,
        Self::Found,
        Self::Visit,
        Self::Push,
        Self::Pop,
    ];
}

/// One frame of an execution trace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// Snapshot of all visualizable data at this instant
    pub state: State,
    /// Indices/keys into the primary view the narrative focuses on
    #[serde(default)]
    pub highlights: Vec<Key>,
    /// A second highlight set for a distinct visual role
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<Vec<Key>>,
    /// Named cursors and their current index
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pointers: Option<BTreeMap<String, i64>>,
    /// Learner-facing description of what just happened
    pub message: String,
    /// 1-based line in the algorithm's reference listing
    pub code_line: usize,
    /// Semantic effect of the step
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
}

impl Step {
    /// Create a step with no highlights, pointers or action
    pub fn new(state: State, code_line: usize, message: impl Into<String>) -> Self {
        Self {
            state,
            highlights: Vec::new(),
            secondary: None,
            pointers: None,
            message: message.into(),
            code_line,
            action: None,
        }
    }

    /// Highlight positions in the primary view
    pub fn with_highlights(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.highlights = indices.into_iter().map(Key::Index).collect();
        self
    }

    /// Highlight keys in the primary view
    pub fn with_key_highlights<S: Into<String>>(mut self, keys: impl IntoIterator<Item = S>) -> Self {
        self.highlights = keys.into_iter().map(|key| Key::Name(key.into())).collect();
        self
    }

    /// Mark positions in the primary view with the secondary role
    pub fn with_secondary(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.secondary = Some(indices.into_iter().map(Key::Index).collect());
        self
    }

    /// Set a named pointer
    pub fn with_pointer(mut self, name: impl Into<String>, index: i64) -> Self {
        self.pointers.get_or_insert_with(BTreeMap::new).insert(name.into(), index);
        self
    }

    /// Classify the step
    pub fn with_action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    /// The final answer carried by this step, if it is a terminal step
    pub fn result(&self) -> Option<&serde_json::Value> {
        self.state.result.as_ref()
    }

    /// Look up a pointer by name
    pub fn pointer(&self, name: &str) -> Option<i64> {
        self.pointers.as_ref().and_then(|pointers| pointers.get(name).copied())
    }

    /// Check whether the step carries the given action
    pub fn is(&self, action: Action) -> bool {
        self.action == Some(action)
    }

    /// Highlighted indices, skipping key highlights
    pub fn highlighted_indices(&self) -> Vec<usize> {
        self.highlights
            .iter()
            .filter_map(|key| match key {
                Key::Index(index) => Some(*index),
                Key::Name(_) => None,
            })
            .collect()
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = self.action.map(|a| a.to_string()).unwrap_or_else(|| "-".to_string());
        write!(f, "L{:<3} {:<8} {}", self.code_line, action, self.message)?;
        if let Some(pointers) = &self.pointers {
            let rendered: Vec<String> =
                pointers.iter().map(|(name, index)| format!("{name}={index}")).collect();
            write!(f, " [{}]", rendered.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::View;

    fn sample_state() -> State {
        State::new().with_view("nums", View::array([4, 5, 6]))
    }

    #[test]
    fn test_step_builder() {
        let step = Step::new(sample_state(), 7, "Compare 4 and 6")
            .with_highlights([0, 2])
            .with_secondary([1])
            .with_pointer("left", 0)
            .with_pointer("right", 2)
            .with_action(Action::Compare);

        assert_eq!(step.highlighted_indices(), vec![0, 2]);
        assert_eq!(step.secondary, Some(vec![Key::Index(1)]));
        assert_eq!(step.pointer("right"), Some(2));
        assert_eq!(step.pointer("mid"), None);
        assert!(step.is(Action::Compare));
        assert!(step.result().is_none());
    }

    #[test]
    fn test_step_serialization_shape() {
        let step = Step::new(sample_state(), 3, "Start").with_highlights([1]);
        let json = serde_json::to_value(&step).unwrap();

        assert_eq!(json["codeLine"], 3);
        assert_eq!(json["highlights"], serde_json::json!([1]));
        assert!(json.get("secondary").is_none());
        assert!(json.get("pointers").is_none());
        assert!(json.get("action").is_none());
    }

    #[test]
    fn test_action_serialization() {
        for action in Action::ALL {
            let json = serde_json::to_string(&action).unwrap();
            assert_eq!(json, format!("\"{action}\""));
        }
    }

    #[test]
    fn test_key_highlights() {
        let step = Step::new(sample_state(), 1, "Look up key").with_key_highlights(["7"]);
        assert_eq!(step.highlights, vec![Key::Name("7".to_string())]);
        assert!(step.highlighted_indices().is_empty());
    }

    #[test]
    fn test_step_display() {
        let step = Step::new(sample_state(), 12, "Swap")
            .with_action(Action::Swap)
            .with_pointer("i", 1);
        let rendered = step.to_string();
        assert!(rendered.starts_with("L12"));
        assert!(rendered.contains("swap"));
        assert!(rendered.contains("[i=1]"));
    }
}
