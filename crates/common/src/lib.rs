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

//! AlgoTrace Common - the step-trace contract
//!
//! This crate defines the data every instrumented algorithm produces and every
//! renderer consumes: Step Records, the state snapshot schema, traces and the
//! recorder that enforces the init/terminal lifecycle of a run.

/// Step-trace data model including Step Records, snapshots and traces
pub mod types;

/// Recorder that instrumented algorithms use to emit their steps
pub mod tracer;

pub use tracer::*;
pub use types::*;
