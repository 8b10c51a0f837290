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

//! AlgoTrace engine: the instrumented algorithm catalog.
//!
//! Every algorithm in [`algorithms`] runs on its natural input and returns the
//! complete [`algotrace_common::Trace`] of its execution. The [`Registry`]
//! binds each one to its metadata, and the [`Engine`] resolves ids, supplies
//! default inputs and validates the traces it hands out.

pub mod algorithm;
pub use algorithm::*;

pub mod algorithms;

pub mod core;
pub use core::*;

pub mod descriptor;
pub use descriptor::*;

pub mod registry;
pub use registry::*;
