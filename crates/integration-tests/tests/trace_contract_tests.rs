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

//! Integration tests for the step-trace contract shared by every algorithm
//!
//! These tests run the whole catalog through the engine and check:
//! - Determinism of repeated runs
//! - The init/terminal lifecycle and the validation invariants
//! - Snapshot isolation between recorded steps
//! - Detection of code lines that drifted past the reference listing

use algotrace_common::{Action, State, Step, Trace, TraceObserver, TraceViolation, Tracer, View};
use algotrace_engine::{
    registry, AlgorithmDescriptor, Category, Difficulty, Engine, EngineConfig, EngineError,
    Instrumented, Registry,
};
use algotrace_integration_tests::test_utils::{engine, init};
use tracing::info;

#[test]
fn test_every_default_trace_is_deterministic() {
    init::init_test_environment();
    info!("Testing determinism across the catalog");

    let engine = Engine::default();
    for descriptor in registry().list() {
        let first = engine.run(descriptor.id, None).unwrap();
        let second = engine.run(descriptor.id, None).unwrap();
        assert_eq!(first, second, "{} is not deterministic", descriptor.id);
        assert_eq!(
            first.to_json_value().unwrap(),
            second.to_json_value().unwrap(),
            "{} serializes differently across runs",
            descriptor.id
        );
    }
}

#[test]
fn test_every_default_trace_is_valid() {
    init::init_test_environment();

    for descriptor in registry().list() {
        let result = engine::run_and_capture(descriptor.id, None).unwrap();
        assert!(result.success, "{} logged warnings: {:?}", descriptor.id, result.warnings);

        let trace = &result.trace;
        assert!(trace.len() >= 2, "{} has no intermediate structure", descriptor.id);
        assert!(trace[0].result().is_none());
        assert!(trace.result().is_some(), "{} has no result", descriptor.id);
        assert!(trace.iter().all(|step| !step.message.is_empty()));
        assert!(trace.stats().max_code_line <= descriptor.listing_lines());
    }
}

#[test]
fn test_snapshots_never_change_after_recording() {
    init::init_test_environment();
    info!("Testing snapshot isolation across the catalog");

    for descriptor in registry().list() {
        let (trace, snapshots) = engine::run_with_snapshots(descriptor.id, None).unwrap();
        assert_eq!(trace.len(), snapshots.len());
        for (index, (recorded, returned)) in snapshots.iter().zip(trace.iter()).enumerate() {
            assert_eq!(recorded, returned, "{} step {index} changed after recording", descriptor.id);
        }
        assert_eq!(trace.into_steps(), snapshots);
    }
}

#[test]
fn test_steps_serialize_with_renderer_field_names() {
    init::init_test_environment();

    let trace = Engine::default().run("binary-search", None).unwrap();
    let json = trace.to_json_value().unwrap();
    let steps = json.as_array().unwrap();

    let first = &steps[0];
    for field in ["state", "highlights", "message", "codeLine"] {
        assert!(first.get(field).is_some(), "missing field {field}");
    }
    assert_eq!(first["state"]["views"][0]["view"]["kind"], "array");

    let last = steps.last().unwrap();
    assert_eq!(last["action"], "found");
    assert_eq!(last["state"]["result"], 4);
    assert!(steps.iter().any(|step| step["pointers"]["mid"].is_number()));
}

#[test]
fn test_custom_input_runs_validate() {
    init::init_test_environment();

    let input = serde_json::json!({"s": "(]"});
    let result = engine::run_and_capture("valid-parentheses", Some(input)).unwrap();
    assert!(result.success);
    assert_eq!(result.trace.result(), Some(&serde_json::json!(false)));
}

#[test]
fn test_input_errors_surface_to_caller() {
    init::init_test_environment();

    let engine = Engine::default();
    let err = engine.run("subsets", Some(serde_json::json!({"nums": [1, "x"]}))).unwrap_err();
    assert!(matches!(err, EngineError::Algorithm(_)), "unexpected error {err:?}");

    let err = engine
        .run("course-schedule", Some(serde_json::json!({"numCourses": 2, "prerequisites": [[5, 0]]})))
        .unwrap_err();
    assert!(err.to_string().contains("malformed"), "unexpected error {err}");

    assert!(matches!(engine.run("no-such-id", None), Err(EngineError::UnknownAlgorithm(_))));
}

/// Points its steps past the end of a one-line listing
struct Drifted;

impl Instrumented for Drifted {
    const ID: &'static str = "drifted";
    const NAME: &'static str = "Drifted";
    const CATEGORY: Category = Category::ArraysHashing;
    const DIFFICULTY: Difficulty = Difficulty::Easy;
    const TIME_COMPLEXITY: &'static str = "O(n)";
    const SPACE_COMPLEXITY: &'static str = "O(1)";
    const LISTING: &'static str = "pub fn sum(nums: &[i64]) -> i64 { nums.iter().sum() }\n";

    type Input = Vec<i64>;

    fn default_input() -> Self::Input {
        vec![1, 2, 3]
    }

    fn trace_observed(input: &Self::Input, observer: &mut dyn TraceObserver) -> Trace {
        let state = || State::new().with_view("nums", View::array(input.iter().copied()));
        let mut tracer = Tracer::start(observer, Step::new(state(), 1, "Start"));
        for index in 0..input.len() {
            tracer.record(
                Step::new(state(), 3, format!("Add nums[{index}]"))
                    .with_highlights([index])
                    .with_action(Action::Visit),
            );
        }
        let total: i64 = input.iter().sum();
        tracer.finish(Step::new(state(), 1, format!("Sum is {total}")), serde_json::json!(total))
    }
}

fn drifted_registry() -> &'static Registry {
    let registry = Registry::from_descriptors([AlgorithmDescriptor::of::<Drifted>()]).unwrap();
    Box::leak(Box::new(registry))
}

#[test]
fn test_drifted_code_lines_are_reported() {
    init::init_test_environment();
    info!("Testing code line drift detection");

    let lenient = Engine::with_registry(EngineConfig::default(), drifted_registry());
    let result = algotrace_integration_tests::test_utils::logging::capture_warnings(|| {
        lenient.run("drifted", None)
    });
    let (trace, warnings) = result;
    let trace = trace.unwrap();
    assert_eq!(warnings.len(), 3);

    let violations = lenient.validate("drifted", &trace).unwrap();
    assert_eq!(violations.len(), 3);
    assert!(violations.iter().all(|violation| matches!(
        violation,
        TraceViolation::CodeLineOutOfRange { line: 3, max: 1, .. }
    )));

    let strict =
        Engine::with_registry(EngineConfig::default().with_strict(true), drifted_registry());
    match strict.run("drifted", None) {
        Err(EngineError::InvalidTrace { id, violations }) => {
            assert_eq!(id, "drifted");
            assert_eq!(violations.len(), 3);
        }
        other => panic!("Expected an invalid trace error, got {other:?}"),
    }

    let unchecked =
        Engine::with_registry(EngineConfig::default().with_validate(false), drifted_registry());
    assert_eq!(unchecked.run("drifted", None).unwrap().result(), Some(&serde_json::json!(6)));
}
