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

//! Test utilities for integration tests

use std::sync::{Arc, Mutex};

/// Initialization utilities for tests
pub mod init {
    /// Initialize logging for an integration test
    pub fn init_test_environment() {
        algotrace_utils::logging::ensure_test_logging(None);
    }
}

/// Logging and warning capture utilities for tests
pub mod logging {
    use super::*;
    use tracing::Level;
    use tracing_subscriber::layer::SubscriberExt;

    /// A custom tracing layer that captures warning and error logs
    #[derive(Clone, Default)]
    pub struct WarningCapture {
        messages: Arc<Mutex<Vec<String>>>,
    }

    impl WarningCapture {
        /// Create a new WarningCapture instance
        pub fn new() -> Self {
            Self { messages: Arc::new(Mutex::new(Vec::new())) }
        }

        /// Retrieve captured messages
        pub fn get_messages(&self) -> Vec<String> {
            self.messages.lock().unwrap().clone()
        }
    }

    impl<S> tracing_subscriber::Layer<S> for WarningCapture
    where
        S: tracing::Subscriber,
    {
        fn on_event(
            &self,
            event: &tracing::Event<'_>,
            _ctx: tracing_subscriber::layer::Context<'_, S>,
        ) {
            let level = *event.metadata().level();
            if level != Level::WARN && level != Level::ERROR {
                return;
            }

            struct MessageVisitor {
                message: String,
            }

            impl tracing::field::Visit for MessageVisitor {
                fn record_debug(
                    &mut self,
                    field: &tracing::field::Field,
                    value: &dyn std::fmt::Debug,
                ) {
                    if field.name() == "message" {
                        self.message = format!("{value:?}");
                    }
                }

                fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
                    if field.name() == "message" {
                        self.message = value.to_string();
                    }
                }
            }

            let mut visitor = MessageVisitor { message: String::new() };
            event.record(&mut visitor);

            if !visitor.message.is_empty() {
                self.messages.lock().unwrap().push(visitor.message);
            }
        }
    }

    /// Run `f` under a scoped subscriber, returning its output and every warning it logged
    pub fn capture_warnings<R>(f: impl FnOnce() -> R) -> (R, Vec<String>) {
        let capture = WarningCapture::new();
        let subscriber = tracing_subscriber::registry().with(capture.clone());
        let output = tracing::subscriber::with_default(subscriber, f);
        (output, capture.get_messages())
    }
}

/// Engine testing utilities
pub mod engine {
    use algotrace_common::{Step, Trace};
    use algotrace_engine::{Engine, EngineConfig, EngineError};

    use super::logging;

    /// Outcome of a run with warning capture
    #[derive(Debug)]
    pub struct TraceTestResult {
        /// The returned trace
        pub trace: Trace,
        /// Warnings logged by the engine while validating the trace
        pub warnings: Vec<String>,
        /// Whether the run logged no warnings
        pub success: bool,
    }

    /// Run `id` in non-strict mode, capturing any invariant warnings
    pub fn run_and_capture(
        id: &str,
        input: Option<serde_json::Value>,
    ) -> Result<TraceTestResult, EngineError> {
        let engine = Engine::new(EngineConfig::default());
        let (trace, warnings) = logging::capture_warnings(|| engine.run(id, input));
        let trace = trace?;
        Ok(TraceTestResult { success: warnings.is_empty(), trace, warnings })
    }

    /// Run `id`, keeping a clone of every step taken the moment it was recorded
    pub fn run_with_snapshots(
        id: &str,
        input: Option<serde_json::Value>,
    ) -> Result<(Trace, Vec<Step>), EngineError> {
        let engine = Engine::new(EngineConfig::default().with_strict(true));
        let mut snapshots = Vec::new();
        let mut observer = |index: usize, step: &Step| {
            assert_eq!(index, snapshots.len(), "steps must be reported in order");
            snapshots.push(step.clone());
        };
        let trace = engine.run_observed(id, input, &mut observer)?;
        Ok((trace, snapshots))
    }
}

/// Seeded generators for randomized input batteries
pub mod inputs {
    use itertools::Itertools;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    /// Number of random inputs each battery checks
    pub const BATTERY_SIZE: usize = 200;

    /// A deterministic generator; `salt` keeps batteries independent
    pub fn rng(salt: u64) -> StdRng {
        StdRng::seed_from_u64(0xA160_7ACE ^ salt)
    }

    /// Up to `max_len` values drawn from `low..=high`
    pub fn nums(rng: &mut StdRng, max_len: usize, low: i64, high: i64) -> Vec<i64> {
        let len = rng.random_range(0..=max_len);
        (0..len).map(|_| rng.random_range(low..=high)).collect()
    }

    /// Strictly increasing values
    pub fn sorted_distinct(rng: &mut StdRng, max_len: usize) -> Vec<i64> {
        nums(rng, max_len, -50, 50).into_iter().sorted().dedup().collect()
    }

    /// A string over `alphabet` of length `0..=max_len`
    pub fn word(rng: &mut StdRng, max_len: usize, alphabet: &[char]) -> String {
        let len = rng.random_range(0..=max_len);
        (0..len).map(|_| alphabet[rng.random_range(0..alphabet.len())]).collect()
    }

    /// A 0/1 grid with every row of the same width
    pub fn grid(rng: &mut StdRng, max_rows: usize, max_cols: usize) -> Vec<Vec<u8>> {
        let rows = rng.random_range(1..=max_rows);
        let cols = rng.random_range(1..=max_cols);
        (0..rows).map(|_| (0..cols).map(|_| u8::from(rng.random_bool(0.45))).collect()).collect()
    }

    /// A rectangular letter board
    pub fn board(rng: &mut StdRng, max_side: usize, alphabet: &[char]) -> Vec<Vec<char>> {
        let rows = rng.random_range(1..=max_side);
        let cols = rng.random_range(1..=max_side);
        (0..rows)
            .map(|_| (0..cols).map(|_| alphabet[rng.random_range(0..alphabet.len())]).collect())
            .collect()
    }

    /// Distinct non-empty dictionary words
    pub fn dictionary(rng: &mut StdRng, max_words: usize, alphabet: &[char]) -> Vec<String> {
        let count = rng.random_range(1..=max_words);
        (0..count)
            .map(|_| word(rng, 4, alphabet))
            .filter(|w| !w.is_empty())
            .unique()
            .collect()
    }

    /// Points on a small lattice
    pub fn points(rng: &mut StdRng, max_len: usize) -> Vec<[i32; 2]> {
        let len = rng.random_range(0..=max_len);
        (0..len).map(|_| [rng.random_range(-10..=10), rng.random_range(-10..=10)]).collect()
    }

    /// Distinct `[course, prerequisite]` pairs without self-loops
    pub fn prerequisites(rng: &mut StdRng, num_courses: usize, max_edges: usize) -> Vec<[usize; 2]> {
        if num_courses < 2 {
            return Vec::new();
        }
        let count = rng.random_range(0..=max_edges);
        (0..count)
            .map(|_| [rng.random_range(0..num_courses), rng.random_range(0..num_courses)])
            .filter(|[course, pre]| course != pre)
            .unique()
            .collect()
    }

    /// A level-order tree where roughly a third of the slots are holes
    pub fn tree_slots(rng: &mut StdRng, max_len: usize) -> Vec<Option<i64>> {
        let len = rng.random_range(0..=max_len);
        (0..len).map(|_| rng.random_bool(0.7).then(|| rng.random_range(0..100))).collect()
    }
}
