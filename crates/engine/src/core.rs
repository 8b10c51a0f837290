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

//! Core engine functionality for running instrumented algorithms.
//!
//! The engine resolves an algorithm id against a [`Registry`], falls back to
//! the algorithm's default input when the caller supplies none, runs it and
//! optionally checks the produced trace against the structural trace
//! invariants before handing it back.
//!
//! # Key Components
//!
//! - [`EngineConfig`] - Engine configuration and settings
//! - [`Engine`] - Lookup, execution and validation of a single run
//! - [`EngineError`] - Everything that can go wrong on the way

use algotrace_common::{NoopObserver, Trace, TraceObserver, TraceViolation};
use thiserror::Error;
use tracing::{debug, warn};

use crate::{registry, AlgorithmDescriptor, AlgorithmError, Registry};

/// Configuration for the AlgoTrace engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Validate every produced trace against the trace invariants
    pub validate: bool,
    /// Turn validation failures into errors instead of warnings
    pub strict: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { validate: true, strict: false }
    }
}

impl EngineConfig {
    /// Enable or disable trace validation
    pub fn with_validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Enable or disable strict mode
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Errors returned by [`Engine::run`]
#[derive(Debug, Error)]
pub enum EngineError {
    /// No algorithm is registered under this id
    #[error("unknown algorithm `{0}`")]
    UnknownAlgorithm(String),

    /// The algorithm rejected its input
    #[error(transparent)]
    Algorithm(#[from] AlgorithmError),

    /// The trace broke at least one invariant (strict mode only)
    #[error("trace of `{id}` is invalid: {} violation(s), first: {}", violations.len(), violations.first().map(ToString::to_string).unwrap_or_default())]
    InvalidTrace {
        /// Algorithm id
        id: String,
        /// Every violation found
        violations: Vec<TraceViolation>,
    },
}

/// Runs algorithms from a registry
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    registry: &'static Registry,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Engine {
    /// Create an engine over the built-in catalog
    pub fn new(config: EngineConfig) -> Self {
        Self { config, registry: registry() }
    }

    /// Create an engine over a custom registry
    pub fn with_registry(config: EngineConfig, registry: &'static Registry) -> Self {
        Self { config, registry }
    }

    /// The registry this engine resolves ids against
    pub fn registry(&self) -> &'static Registry {
        self.registry
    }

    /// The active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run the algorithm `id` on `input`, or on its default input when `None`
    pub fn run(&self, id: &str, input: Option<serde_json::Value>) -> Result<Trace, EngineError> {
        self.run_observed(id, input, &mut NoopObserver)
    }

    /// Like [`Engine::run`], reporting every step to `observer` as it is recorded
    pub fn run_observed(
        &self,
        id: &str,
        input: Option<serde_json::Value>,
        observer: &mut dyn TraceObserver,
    ) -> Result<Trace, EngineError> {
        let descriptor = self.descriptor(id)?;
        let input = input.unwrap_or_else(|| descriptor.default_input());

        debug!(id, "Running algorithm");
        let trace = descriptor.run_observed(input, observer)?;
        debug!(id, steps = trace.len(), "Algorithm finished");

        if self.config.validate {
            self.check(descriptor, &trace)?;
        }
        Ok(trace)
    }

    /// Validate a trace produced by `id` against its reference listing
    pub fn validate(&self, id: &str, trace: &Trace) -> Result<Vec<TraceViolation>, EngineError> {
        let descriptor = self.descriptor(id)?;
        Ok(trace.validate(descriptor.listing_lines()))
    }

    fn descriptor(&self, id: &str) -> Result<&'static AlgorithmDescriptor, EngineError> {
        self.registry.get(id).ok_or_else(|| EngineError::UnknownAlgorithm(id.to_string()))
    }

    fn check(&self, descriptor: &AlgorithmDescriptor, trace: &Trace) -> Result<(), EngineError> {
        let violations = trace.validate(descriptor.listing_lines());
        if violations.is_empty() {
            return Ok(());
        }
        if self.config.strict {
            return Err(EngineError::InvalidTrace { id: descriptor.id.to_string(), violations });
        }
        for violation in &violations {
            warn!(id = descriptor.id, %violation, "Trace violates an invariant");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_with_default_input() {
        let engine = Engine::new(EngineConfig::default().with_strict(true));
        let trace = engine.run("binary-search", None).unwrap();
        assert!(!trace.is_empty());
        assert!(trace.result().is_some());
    }

    #[test]
    fn test_unknown_algorithm() {
        let engine = Engine::default();
        let err = engine.run("bogo-sort", None).unwrap_err();
        assert!(matches!(err, EngineError::UnknownAlgorithm(ref id) if id == "bogo-sort"));
        assert!(engine.validate("bogo-sort", &Trace::default()).is_err());
    }

    #[test]
    fn test_malformed_input_is_an_error() {
        let engine = Engine::default();
        let err = engine.run("two-sum", Some(serde_json::json!({"nums": "nope"}))).unwrap_err();
        assert!(matches!(err, EngineError::Algorithm(AlgorithmError::InvalidInput(_))));
    }

    #[test]
    fn test_validate_reports_violations() {
        let engine = Engine::default();
        let violations = engine.validate("counting-bits", &Trace::default()).unwrap();
        assert_eq!(violations, vec![TraceViolation::Empty]);
    }

    #[test]
    fn test_config_builders() {
        let config = EngineConfig::default().with_validate(false).with_strict(true);
        assert!(!config.validate);
        assert!(config.strict);
        assert!(Engine::new(config).config().strict);
    }
}
