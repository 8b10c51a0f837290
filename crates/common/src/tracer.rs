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

//! Step recorder used by every instrumented algorithm.
//!
//! A run follows the state machine `Init → (Visit | Compare | Mutate)* → Terminal`.
//! [`Tracer::start`] is the only way to obtain a tracer and records the init
//! step; [`Tracer::finish`] consumes the tracer, records the terminal step and
//! hands the completed [`Trace`] to the caller. Both ends therefore fire exactly
//! once per run.

use tracing::trace;

use crate::types::{Step, Trace};

/// Callback invoked with every step right after it has been recorded
pub trait TraceObserver {
    /// Called with the index of the new step and the step itself
    fn on_step(&mut self, index: usize, step: &Step);
}

impl<F> TraceObserver for F
where
    F: FnMut(usize, &Step),
{
    fn on_step(&mut self, index: usize, step: &Step) {
        self(index, step)
    }
}

/// Observer that ignores every step
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl TraceObserver for NoopObserver {
    fn on_step(&mut self, _index: usize, _step: &Step) {}
}

/// Records the steps of a single synchronous algorithm run
pub struct Tracer<'o> {
    steps: Vec<Step>,
    observer: &'o mut dyn TraceObserver,
}

impl std::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tracer").field("steps", &self.steps.len()).finish_non_exhaustive()
    }
}

impl<'o> Tracer<'o> {
    /// Begin a run by recording its initialization step
    pub fn start(observer: &'o mut dyn TraceObserver, init: Step) -> Self {
        let mut tracer = Self { steps: Vec::new(), observer };
        tracer.push(init);
        tracer
    }

    /// Record an intermediate step
    pub fn record(&mut self, step: Step) {
        self.push(step);
    }

    /// Record the terminal step, attaching the final answer, and return the trace
    pub fn finish(mut self, mut terminal: Step, result: serde_json::Value) -> Trace {
        terminal.state.result = Some(result);
        self.push(terminal);
        Trace::from_steps(self.steps)
    }

    /// Number of steps recorded so far
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always `false`: a tracer holds at least its init step
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    fn push(&mut self, step: Step) {
        let index = self.steps.len();
        trace!(index, line = step.code_line, action = ?step.action, message = %step.message, "step");
        self.observer.on_step(index, &step);
        self.steps.push(step);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Action, State, View};

    #[test]
    fn test_tracer_lifecycle() {
        let mut observer = NoopObserver;
        let mut tracer = Tracer::start(&mut observer, Step::new(State::new(), 1, "Init"));
        assert_eq!(tracer.len(), 1);

        tracer.record(Step::new(State::new(), 2, "Visit").with_action(Action::Visit));
        let trace = tracer
            .finish(Step::new(State::new(), 3, "Done").with_action(Action::Found), 42.into());

        assert_eq!(trace.len(), 3);
        assert_eq!(trace[0].message, "Init");
        assert_eq!(trace.result(), Some(&serde_json::json!(42)));
        assert!(trace[..2].iter().all(|step| step.result().is_none()));
    }

    #[test]
    fn test_observer_sees_every_step_in_order() {
        let mut seen = Vec::new();
        let mut observer = |index: usize, step: &Step| seen.push((index, step.clone()));

        let mut tracer = Tracer::start(&mut observer, Step::new(State::new(), 1, "Init"));
        let mut working = vec![1, 2];
        tracer.record(Step::new(State::new().with_view("a", View::array(working.clone())), 2, "A"));
        working.push(3);
        let trace = tracer.finish(
            Step::new(State::new().with_view("a", View::array(working.clone())), 3, "B"),
            serde_json::json!(working),
        );

        assert_eq!(seen.len(), 3);
        for (index, step) in &seen {
            assert_eq!(&trace[*index], step);
        }
        // The observed snapshot at index 1 is unaffected by the later push
        assert_eq!(seen[1].1.state.primary(), Some(&View::array([1, 2])));
    }
}
